use ratatui::style::Color;

pub const GOLD: Color = Color::Rgb(0xd4, 0xaf, 0x37);
pub const ROSE: Color = Color::Rgb(0xe8, 0x8f, 0xa3);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xf5, 0xf0, 0xe6);
pub const MUTED_TEXT: Color = Color::Rgb(0x8a, 0x84, 0x7a);
pub const DISABLED: Color = Color::Rgb(0x4a, 0x4a, 0x4a);
pub const RIPPLE: Color = Color::Rgb(0x5c, 0x4b, 0x1a);
pub const NOTICE_BORDER: Color = Color::Rgb(0xef, 0x44, 0x44);
