use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 95, g: 215, b: 175 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 175, b: 95 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const STRAY: Color = Color::TrueColor { r: 215, g: 95, b: 95 };

// Pet types
pub const DOG: Color = Color::TrueColor { r: 215, g: 175, b: 95 };
pub const CAT: Color = Color::TrueColor { r: 175, g: 135, b: 255 };
pub const RODENT: Color = Color::TrueColor { r: 175, g: 175, b: 135 };
pub const BIRD: Color = Color::TrueColor { r: 95, g: 175, b: 255 };
pub const REPTILE: Color = Color::TrueColor { r: 135, g: 215, b: 95 };
pub const EXOTIC: Color = Color::TrueColor { r: 255, g: 95, b: 175 };
