use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub border_focused: Color,
    pub border_normal: Color,
    pub highlight_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue for button faces
    secondary: Color::Rgb(250, 179, 135), // Orange for combo values
    comment: Color::Rgb(108, 112, 134),
    border_focused: Color::Rgb(249, 226, 175), // Yellow for the focused control
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    highlight_bg: Color::Rgb(50, 50, 70),      // Slightly lighter BG for the status bar
};
