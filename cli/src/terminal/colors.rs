use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 204, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 170, b: 0 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const ADDRESS: Color = Color::TrueColor { r: 120, g: 220, b: 140 };
pub const BYTES: Color = Color::TrueColor { r: 190, g: 150, b: 255 };
pub const VALID: Color = Color::Green;
pub const INVALID: Color = Color::Red;
