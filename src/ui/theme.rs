/// Light theme with the green accent used for buttons and the progress bar
use iced::theme::Palette;
use iced::{Color, Theme};

pub fn favicon_theme() -> Theme {
    Theme::custom(
        "Favicon Generator".to_string(),
        Palette {
            background: Color::from_rgb8(0xF0, 0xF0, 0xF0),
            text: Color::from_rgb8(0x33, 0x33, 0x33),
            primary: Color::from_rgb8(0x4C, 0xAF, 0x50),
            ..Palette::LIGHT
        },
    )
}
