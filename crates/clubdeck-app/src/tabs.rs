//! The demo shell's tab set.
//!
//! The full sidebar is shown to everyone; access is gated inside each view
//! instead, so visitors can see what exists even when it's locked.

/// Sidebar tabs, in display order. Overview is the pitch page (feature
/// carousel + pricing); the rest are the dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoTab {
    Overview,
    Dashboard,
    Schedule,
    Staff,
    Events,
    Apply,
    Analytics,
    Settings,
    Logs,
}

impl DemoTab {
    pub const ALL: [DemoTab; 9] = [
        DemoTab::Overview,
        DemoTab::Dashboard,
        DemoTab::Schedule,
        DemoTab::Staff,
        DemoTab::Events,
        DemoTab::Apply,
        DemoTab::Analytics,
        DemoTab::Settings,
        DemoTab::Logs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DemoTab::Overview => "Overview",
            DemoTab::Dashboard => "Dashboard",
            DemoTab::Schedule => "Schedule",
            DemoTab::Staff => "Staff",
            DemoTab::Events => "Events",
            DemoTab::Apply => "Apply",
            DemoTab::Analytics => "Analytics",
            DemoTab::Settings => "Settings",
            DemoTab::Logs => "Logs",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<DemoTab> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> DemoTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> DemoTab {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}
