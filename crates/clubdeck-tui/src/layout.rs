//! Screen layout definitions for the TUI
//!
//! The main screen stacks an optional offer banner, a one-row topbar, the
//! sidebar + content split, and a status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the sidebar tab column.
pub const SIDEBAR_WIDTH: u16 = 16;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Offer banner row (absent once dismissed)
    pub banner: Option<Rect>,

    /// Title + role toggle + bell
    pub topbar: Rect,

    /// Tab list on the left
    pub sidebar: Rect,

    /// Active view
    pub content: Rect,

    /// Key hints at the bottom
    pub status: Rect,
}

/// Compute the main screen layout.
pub fn create(area: Rect, banner_visible: bool) -> ScreenAreas {
    let banner_height = if banner_visible { 3 } else { 0 };
    let rows = Layout::vertical([
        Constraint::Length(banner_height),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    let banner = banner_visible.then_some(rows[0]);
    let cols = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
        .split(rows[2]);

    ScreenAreas {
        banner,
        topbar: rows[1],
        sidebar: cols[0],
        content: cols[1],
        status: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_banner() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area, true);
        let banner = areas.banner.expect("banner present");
        assert_eq!(banner.height, 3);
        assert_eq!(areas.topbar.y, 3);
        assert_eq!(areas.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.status.y, 29);
        assert_eq!(areas.content.x, SIDEBAR_WIDTH);
    }

    #[test]
    fn test_layout_without_banner() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area, false);
        assert!(areas.banner.is_none());
        assert_eq!(areas.topbar.y, 0);
        // Content gains the banner rows
        assert_eq!(areas.sidebar.height, 28);
    }

    #[test]
    fn test_layout_areas_fill_height() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = create(area, true);
        let banner_height = areas.banner.map(|b| b.height).unwrap_or(0);
        assert_eq!(
            banner_height + 1 + areas.content.height + 1,
            area.height
        );
    }
}
