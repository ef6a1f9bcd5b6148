use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub crate_label: Color,
    pub bracket: Color,
    pub source_stack: Color,      // Stack the last move took from
    pub destination_stack: Color, // Stack the last move put onto
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    crate_label: Color::Rgb(249, 226, 175),    // Yellow
    bracket: Color::Rgb(148, 226, 213),        // Teal
    source_stack: Color::Rgb(250, 179, 135),   // Orange
    destination_stack: Color::Rgb(166, 227, 161), // Green
};
