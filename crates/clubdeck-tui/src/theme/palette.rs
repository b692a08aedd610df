//! Color palette for the neon-club theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(20, 20, 30);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent (the "neon" set) ---
pub const NEON_CYAN: Color = Color::Cyan;
pub const NEON_PURPLE: Color = Color::Magenta;
pub const NEON_PINK: Color = Color::LightMagenta;
pub const NEON_GREEN: Color = Color::Green;
pub const NEON_AMBER: Color = Color::Yellow;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Offer banner ---
pub const OFFER_GREEN: Color = Color::Rgb(134, 239, 172);

// --- Selection ---
pub const CONTRAST_FG: Color = Color::Black;
