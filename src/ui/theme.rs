//! Shared style tokens
//!
//! Colors and the banner icon live here so every widget pulls from the same
//! palette instead of hardcoding its own.

use ratatui::style::Color;

/// Primary green used for the header title and highlights
pub const GREEN: Color = Color::Rgb(50, 183, 104);

/// Muted green for headings and section titles
pub const HEADING: Color = Color::Rgb(82, 102, 90);

/// Light blue used by the reminder banner
pub const BLUE_LIGHT: Color = Color::Rgb(203, 230, 255);

/// Blue for the banner text and icon
pub const BLUE: Color = Color::Rgb(52, 152, 219);

/// Medium gray for secondary card text
pub const BODY_LIGHT: Color = Color::Rgb(150, 150, 150);

/// Red used on destructive affordances
pub const RED: Color = Color::Rgb(231, 76, 60);

/// Fixed icon shown in the reminder banner
pub const WATERDROP: &str = "💧";
