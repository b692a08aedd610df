//! Semantic style builders for the neon-club theme.

use clubdeck_core::{OnlineStatus, ShiftResponse};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::NEON_CYAN)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::NEON_CYAN)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::NEON_CYAN)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---

/// Standard panel with a dim rounded border and a title.
pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .title(format!(" {title} "))
        .title_style(text_secondary().add_modifier(Modifier::BOLD))
}

/// Panel with a neon accent border.
pub fn neon_panel(title: &str, color: ratatui::style::Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

// --- Domain indicators ---

/// Status dot + style for a staff presence value.
pub fn presence_indicator(status: OnlineStatus) -> (&'static str, Style) {
    match status {
        OnlineStatus::Online => ("●", status_green()),
        OnlineStatus::Away => ("●", status_yellow()),
        OnlineStatus::Offline => ("○", text_muted()),
    }
}

/// Badge text + style for a shift response.
pub fn response_indicator(response: ShiftResponse) -> (&'static str, Style) {
    match response {
        ShiftResponse::Accepted => ("✓ Accepted", status_green()),
        ShiftResponse::Pending => ("· Pending", status_yellow()),
        ShiftResponse::Declined => ("✗ Declined", status_red()),
        ShiftResponse::RescheduleRequested => ("! Reschedule", status_yellow()),
    }
}
