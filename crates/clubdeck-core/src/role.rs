//! Role hierarchy and the capability check used to gate the demo views.
//!
//! The demo simulates access control only: the current role is process-local
//! UI state, switched freely from the role toggle. `RoleContext` is passed
//! explicitly through `AppState` so tests can swap it per case.

use serde::{Deserialize, Serialize};

/// Staff/member role with a total-order rank used for permission checks.
///
/// DJ and Host share a rank: neither can act as the other's superior, but
/// both pass checks that require the other (matching the club's flat
/// performer tier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Member,
    VipMember,
    Host,
    Dj,
    Manager,
    GeneralManager,
    Owner,
    SuperAdmin,
}

impl Role {
    /// All roles, lowest rank first.
    pub const ALL: [Role; 8] = [
        Role::Member,
        Role::VipMember,
        Role::Host,
        Role::Dj,
        Role::Manager,
        Role::GeneralManager,
        Role::Owner,
        Role::SuperAdmin,
    ];

    /// Total-order rank. `a` can act as `b` iff `a.rank() >= b.rank()`.
    pub fn rank(self) -> u8 {
        match self {
            Role::Member => 10,
            Role::VipMember => 20,
            Role::Host => 40,
            Role::Dj => 40,
            Role::Manager => 70,
            Role::GeneralManager => 80,
            Role::Owner => 90,
            Role::SuperAdmin => 100,
        }
    }

    /// Display label for the role toggle and profile card.
    pub fn label(self) -> &'static str {
        match self {
            Role::Member => "Club Member",
            Role::VipMember => "VIP Member",
            Role::Host => "Host",
            Role::Dj => "DJ",
            Role::Manager => "Manager",
            Role::GeneralManager => "General Manager",
            Role::Owner => "Owner",
            Role::SuperAdmin => "Super Admin",
        }
    }

    /// Compact label used where space is tight (tab bar, badges).
    pub fn short_label(self) -> &'static str {
        match self {
            Role::Member => "MBR",
            Role::VipMember => "VIP",
            Role::Host => "HOST",
            Role::Dj => "DJ",
            Role::Manager => "MGR",
            Role::GeneralManager => "GM",
            Role::Owner => "OWN",
            Role::SuperAdmin => "SA",
        }
    }
}

/// Roles offered by the demo role toggle, highest privilege first.
/// `None` is the guest position.
pub const DEMO_ROLES: [Option<Role>; 6] = [
    Some(Role::SuperAdmin),
    Some(Role::Owner),
    Some(Role::Manager),
    Some(Role::Dj),
    Some(Role::Host),
    None,
];

/// The current simulated role plus the capability check.
///
/// No persistence: every fresh context starts at the highest-privilege role
/// so the demo shows everything by default. This is a demo affordance, not a
/// security model.
#[derive(Debug, Clone)]
pub struct RoleContext {
    current: Option<Role>,
}

impl Default for RoleContext {
    fn default() -> Self {
        Self {
            current: Some(Role::SuperAdmin),
        }
    }
}

impl RoleContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a specific role (or guest) instead of the default.
    pub fn with_role(role: Option<Role>) -> Self {
        Self { current: role }
    }

    /// The active role, or `None` for guest.
    pub fn current(&self) -> Option<Role> {
        self.current
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.current = role;
    }

    /// Capability check: guest fails everything, otherwise compare ranks.
    pub fn can(&self, required: Role) -> bool {
        match self.current {
            Some(role) => role.rank() >= required.rank(),
            None => false,
        }
    }

    pub fn is_guest(&self) -> bool {
        self.current.is_none()
    }

    /// Advance to the next entry in the demo role toggle (wraps, includes
    /// guest). Unknown roles land on the first entry.
    pub fn cycle_demo_role(&mut self) {
        let pos = DEMO_ROLES.iter().position(|r| *r == self.current);
        let next = match pos {
            Some(i) => DEMO_ROLES[(i + 1) % DEMO_ROLES.len()],
            None => DEMO_ROLES[0],
        };
        self.current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering_monotonicity() {
        // For all pairs: can(current, required) iff rank(current) >= rank(required)
        for a in Role::ALL {
            for b in Role::ALL {
                let ctx = RoleContext::with_role(Some(a));
                assert_eq!(
                    ctx.can(b),
                    a.rank() >= b.rank(),
                    "can({a:?}, {b:?}) disagrees with rank ordering"
                );
            }
        }
    }

    #[test]
    fn test_guest_fails_every_check() {
        let ctx = RoleContext::with_role(None);
        assert!(ctx.is_guest());
        for role in Role::ALL {
            assert!(!ctx.can(role), "guest passed can({role:?})");
        }
    }

    #[test]
    fn test_dj_and_host_share_rank() {
        let dj = RoleContext::with_role(Some(Role::Dj));
        let host = RoleContext::with_role(Some(Role::Host));
        assert!(dj.can(Role::Host));
        assert!(host.can(Role::Dj));
        assert!(!dj.can(Role::Manager));
        assert!(!host.can(Role::Manager));
    }

    #[test]
    fn test_default_is_super_admin() {
        let ctx = RoleContext::new();
        assert_eq!(ctx.current(), Some(Role::SuperAdmin));
        for role in Role::ALL {
            assert!(ctx.can(role));
        }
    }

    #[test]
    fn test_cycle_demo_role_wraps_through_guest() {
        let mut ctx = RoleContext::new();
        let mut seen = Vec::new();
        for _ in 0..DEMO_ROLES.len() {
            seen.push(ctx.current());
            ctx.cycle_demo_role();
        }
        assert_eq!(ctx.current(), Some(Role::SuperAdmin)); // wrapped around
        assert!(seen.contains(&None)); // guest is part of the cycle
    }

    #[test]
    fn test_cycle_from_role_outside_toggle() {
        let mut ctx = RoleContext::with_role(Some(Role::VipMember));
        ctx.cycle_demo_role();
        assert_eq!(ctx.current(), Some(Role::SuperAdmin));
    }
}
