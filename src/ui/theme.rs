use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x62, 0x00, 0xee);
pub const ACCENT_LIGHT: Color = Color::Rgb(0xbb, 0x86, 0xfc);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DETAIL_TEXT: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
