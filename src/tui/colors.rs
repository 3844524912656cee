//! Color mapping for the terminal user interface.

use ratatui::style::Color;

use crate::fields::Tone;

/// Used for overdue markers and critical priority.
pub const DARK_RED: Color = Color::Rgb(190, 30, 30);
/// Used for review items.
pub const PURPLE: Color = Color::Rgb(150, 90, 190);
/// Used for testing and medium priority.
pub const AMBER: Color = Color::Rgb(220, 170, 30);
/// Used for done items and low priority.
pub const GREEN: Color = Color::Rgb(60, 160, 80);

/// Terminal color for a display tone.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::Gray,
        Tone::Info => Color::Blue,
        Tone::Accent => PURPLE,
        Tone::Warning => AMBER,
        Tone::Success => GREEN,
        Tone::Danger => Color::Red,
        Tone::Critical => DARK_RED,
    }
}
