//! Widget library for the ClubDeck TUI.
//!
//! One widget struct per view or panel, each borrowing the state it renders.

pub mod analytics;
pub mod apply;
pub mod banner;
pub mod booking;
pub mod breakdown;
pub mod dashboard;
pub mod events;
pub mod locked;
pub mod logs;
pub mod modal;
pub mod notifications;
pub mod overview;
pub mod schedule;
pub mod settings;
pub mod sidebar;
pub mod staff;
pub mod status_bar;
pub mod topbar;
pub mod wheel_column;

pub use banner::OfferBanner;
pub use booking::BookingDialog;
pub use breakdown::BreakdownOverlay;
pub use locked::LockedNotice;
pub use notifications::NotificationsPopup;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use topbar::TopBar;
