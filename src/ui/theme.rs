//! Color theme constants for the dashboard UI
//!
//! Defines the dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused component
pub const COLOR_FOCUS: Color = Color::Cyan;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Links (profile and repository URLs)
pub const COLOR_LINK: Color = Color::Rgb(88, 166, 255); // GitHub blue #58A6FF

/// Metric values
pub const COLOR_METRIC: Color = Color::LightGreen;

/// Inline warnings
pub const COLOR_WARNING: Color = Color::Yellow;

/// "Available for hire"
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Star counts
pub const COLOR_STAR: Color = Color::Rgb(227, 179, 65); // gold #E3B341

// ============================================================================
// Chart Colors
// ============================================================================

/// Palette shared by the bar chart, the pie chart and its legend, indexed by
/// the language's position in the tally.
pub const LANGUAGE_PALETTE: [Color; 8] = [
    Color::Rgb(88, 166, 255),  // blue
    Color::Rgb(63, 185, 80),   // green
    Color::Rgb(210, 153, 34),  // amber
    Color::Rgb(248, 81, 73),   // red
    Color::Rgb(188, 140, 255), // purple
    Color::Rgb(57, 197, 207),  // teal
    Color::Rgb(255, 123, 114), // salmon
    Color::Rgb(139, 148, 158), // gray
];

/// Chart color of the `index`-th language.
pub fn language_color(index: usize) -> Color {
    LANGUAGE_PALETTE[index % LANGUAGE_PALETTE.len()]
}
