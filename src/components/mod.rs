pub mod completion_chart;
pub mod create_dialog;
pub mod error_banner;
pub mod notes_card;
pub mod quick_tasks_card;
pub mod team_list;

use cosmic::iced::Color;
use taskly::core::color::parse_hex;

/// `#rrggbb` to an iced colour; malformed values render grey.
pub fn hex_color(hex: &str) -> Color {
    match parse_hex(hex) {
        Some((r, g, b)) => Color::from_rgb8(r, g, b),
        None => Color::from_rgb8(0x88, 0x88, 0x88),
    }
}
