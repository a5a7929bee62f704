use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MAC_ADDR: Color = Color::TrueColor { r: 255, g: 170, b: 90 };
pub const VENDOR: Color = Color::BrightGreen;
pub const NOT_FOUND: Color = Color::Red;
