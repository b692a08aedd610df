//! # clubdeck-core - Core Domain Types
//!
//! Foundation crate for ClubDeck. Provides the role model, the broadcast
//! bus, the session deadline store, domain types, fixtures, error handling,
//! and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Roles (`role`)
//! - [`Role`] - The staff/member role enumeration with a total-order rank
//! - [`RoleContext`] - Current simulated role plus the `can()` capability check
//!
//! ### Broadcast Bus (`bus`)
//! - [`Signal`] - Page-scoped broadcast signals (claim-discount)
//! - [`SignalBus`] - Explicit publish/subscribe with per-subscriber queues
//!
//! ### Deadline Store (`deadline`)
//! - [`DeadlineStore`] - `get_or_create(duration) -> timestamp` abstraction
//! - [`SessionDeadlineStore`] - File-backed, scoped to the terminal session
//! - [`EphemeralDeadlineStore`] - In-memory fallback / test double
//!
//! ### Domain Types (`types`) and Fixtures (`fixtures`)
//! - Staff roster, events, tips, stats, analytics series, audit log,
//!   feature cards, and pricing sections consumed read-only by the views
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use clubdeck_core::prelude::*;
//! ```

pub mod bus;
pub mod deadline;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod role;
pub mod types;

/// Prelude for common imports used throughout all ClubDeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use bus::{Signal, SignalBus, SubscriptionId};
pub use deadline::{DeadlineStore, EphemeralDeadlineStore, SessionDeadlineStore};
pub use error::{Error, Result, ResultExt};
pub use role::{Role, RoleContext, DEMO_ROLES};
pub use types::{
    AuditAction, AuditEntry, ClubEvent, DashboardStats, DjBooth, EventRoi, EventStatus,
    FeatureCard, FeedKind, GuestVisit, HostStation, MyShift, OnlineStatus, PeakHour,
    PricingSection, RevenueWeek, SchedulePairing, ShiftResponse, StaffFeedMessage, StaffMember,
    TipCategory, TipRecord, TipSample,
};
