//! Shared UI chrome for the pitchview dashboard
//!
//! Theme, shell panels and the small widgets every section reuses
//! (stat cards, loading and error placeholders).

pub mod shell;
pub mod theme;
pub mod widgets;

pub use shell::{menu_bar, status_bar};
pub use theme::{accent_color, apply_theme, error_color};
pub use widgets::{error_placeholder, loading_placeholder, stat_card};
