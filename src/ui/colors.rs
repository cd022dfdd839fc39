//! Shared color palette for the TUI chrome.
//!
//! Item border colors come from the gradient itself; only the fixed chrome
//! lives here.

use ratatui::style::Color;

// ── List view ───────────────────────────────────────────────────────
pub const ITEM_TEXT: Color = Color::Rgb(220, 220, 220);
pub const HIGHLIGHT_BG: Color = Color::Rgb(60, 55, 50);
pub const HIGHLIGHT_FG: Color = Color::Rgb(255, 220, 150);

// ── Startup chrome (until the ready hooks run) ──────────────────────
pub const STARTUP_DIM: Color = Color::Rgb(70, 70, 70);

// ── Accent / chrome ─────────────────────────────────────────────────
pub const ACCENT_MUTED: Color = Color::Rgb(120, 120, 180);
