use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightMagenta;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const PASS: Color = Color::BrightGreen;
pub const FAIL: Color = Color::BrightRed;
pub const IPV4_ADDR: Color = Color::BrightBlue;
pub const HOSTNAME: Color = Color::Yellow;
