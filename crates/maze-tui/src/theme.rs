use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Open cell color
    pub empty: Color,
    /// Wall cell color
    pub wall: Color,
    /// Start cell color
    pub start: Color,
    /// End cell color
    pub end: Color,
    /// Solved-route cell color
    pub path: Color,
    /// Explored-cell overlay color
    pub visited: Color,
    /// Cursor highlight color
    pub cursor: Color,
    /// Info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Error/notice color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 130, g: 140, b: 170 },
            empty: Color::Rgb { r: 38, g: 42, b: 54 },
            wall: Color::Rgb { r: 8, g: 8, b: 12 },
            start: Color::Rgb { r: 90, g: 220, b: 120 },
            end: Color::Rgb { r: 235, g: 90, b: 90 },
            path: Color::Rgb { r: 80, g: 150, b: 255 },
            visited: Color::Rgb { r: 70, g: 85, b: 120 },
            cursor: Color::Rgb { r: 255, g: 210, b: 100 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            error: Color::Rgb { r: 255, g: 120, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 60, g: 60, b: 80 },
            empty: Color::Rgb { r: 230, g: 232, b: 242 },
            wall: Color::Rgb { r: 40, g: 40, b: 50 },
            start: Color::Rgb { r: 40, g: 170, b: 80 },
            end: Color::Rgb { r: 210, g: 60, b: 60 },
            path: Color::Rgb { r: 40, g: 110, b: 220 },
            visited: Color::Rgb { r: 170, g: 185, b: 220 },
            cursor: Color::Rgb { r: 220, g: 150, b: 30 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
            error: Color::Rgb { r: 200, g: 60, b: 40 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            border: Color::White,
            empty: Color::Rgb { r: 30, g: 30, b: 30 },
            wall: Color::Grey,
            start: Color::Green,
            end: Color::Red,
            path: Color::Blue,
            visited: Color::Cyan,
            cursor: Color::Yellow,
            info: Color::Grey,
            key: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }
}
