//! Role-dependent notification fixtures for the topbar bell.

use clubdeck_core::Role;

/// One entry in the notifications dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub unread: bool,
}

const STAFF_NOTICES: &[Notice] = &[
    Notice {
        title: "Shift Confirmed",
        description: "Your 22:00 shift tonight was accepted.",
        time: "2h ago",
        unread: true,
    },
    Notice {
        title: "Shift Awaiting Approval",
        description: "Please confirm availability for Saturday.",
        time: "5h ago",
        unread: true,
    },
];

const MANAGER_NOTICES: &[Notice] = &[
    Notice {
        title: "Roster Alert",
        description: "Missing DJ for tomorrow 20:00.",
        time: "10m ago",
        unread: true,
    },
    Notice {
        title: "Security",
        description: "Warning: linkset data delay detected.",
        time: "1h ago",
        unread: true,
    },
];

/// Notifications for the given role. Guests get none; DJs and hosts see
/// their shift notices; managers and above see operational alerts.
pub fn notices_for(role: Option<Role>) -> &'static [Notice] {
    match role {
        None => &[],
        Some(Role::Dj) | Some(Role::Host) => STAFF_NOTICES,
        Some(role) if role.rank() >= Role::Manager.rank() => MANAGER_NOTICES,
        Some(_) => &[],
    }
}

/// True when the bell should show the unread dot.
pub fn has_unread(role: Option<Role>) -> bool {
    notices_for(role).iter().any(|n| n.unread)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_has_no_notifications() {
        assert!(notices_for(None).is_empty());
        assert!(!has_unread(None));
    }

    #[test]
    fn test_staff_see_shift_notices() {
        assert_eq!(notices_for(Some(Role::Dj)).len(), 2);
        assert_eq!(notices_for(Some(Role::Host))[0].title, "Shift Confirmed");
    }

    #[test]
    fn test_management_sees_alerts() {
        for role in [Role::Manager, Role::GeneralManager, Role::Owner, Role::SuperAdmin] {
            assert_eq!(notices_for(Some(role))[0].title, "Roster Alert");
        }
    }

    #[test]
    fn test_members_see_nothing() {
        assert!(notices_for(Some(Role::Member)).is_empty());
        assert!(notices_for(Some(Role::VipMember)).is_empty());
    }
}
