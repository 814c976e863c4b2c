use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 204, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 153, b: 102 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 210, g: 210, b: 210 };

pub const IPV4_ADDR: Color = Color::TrueColor { r: 120, g: 220, b: 170 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 170, g: 150, b: 255 };

// Row tags
pub const ACTIVE: Color = Color::Green;
pub const UNREACHABLE: Color = Color::Red;
pub const PROBE_ERROR: Color = Color::TrueColor { r: 255, g: 165, b: 0 };
pub const CHECKING: Color = Color::Blue;
pub const UNKNOWN: Color = Color::BrightBlack;
