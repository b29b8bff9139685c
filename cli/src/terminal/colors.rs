use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const PASS: Color = Color::Green;
pub const FAIL: Color = Color::Red;
