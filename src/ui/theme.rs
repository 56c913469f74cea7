use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,        // Unselected rows, hints
    pub highlight: Color,  // Cursor row background
    pub accent: Color,     // Header, digit cursor
    pub error: Color,      // Paste error line
    pub status_bg: Color,  // Status bar background
    pub key_bg: Color,     // Key hint chips
}

/// Backlit monochrome LCD
pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(18, 28, 18),
    fg: Color::Rgb(156, 220, 140),
    dim: Color::Rgb(84, 120, 76),
    highlight: Color::Rgb(156, 220, 140),
    accent: Color::Rgb(214, 246, 180),
    error: Color::Rgb(243, 139, 108),
    status_bg: Color::Rgb(30, 44, 30),
    key_bg: Color::Rgb(84, 120, 76),
};
