//! Inline keyboard builders for interactive bot menus

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Create the main menu keyboard
pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    let buttons = vec![
        vec![InlineKeyboardButton::callback("🌐 TXT → HTML", "cmd:html")],
        vec![InlineKeyboardButton::callback("📝 Text → TXT", "cmd:text")],
        vec![InlineKeyboardButton::callback("❓ Help", "cmd:help")],
    ];

    InlineKeyboardMarkup::new(buttons)
}

/// Single cancel button shown while waiting for input
pub fn cancel_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "❌ Cancel",
        "cancel",
    )]])
}
