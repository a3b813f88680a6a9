use iced::Color;
use iced::time::Duration;

pub const APP_NAME: &str = "ChipVM";
// 60 times a second (kind of, it should have been 16.667 )
pub const TICK_INTERVAL: Duration = Duration::from_millis(17);
/// Color of the pixels that are on
pub const FOREGROUND: Color = Color::WHITE;
/// Color of the pixels that are off
pub const BACKGROUND: Color = Color::BLACK;
