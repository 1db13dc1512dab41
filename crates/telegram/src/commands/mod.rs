//! Command handlers for the Telegram bot
//!
//! This module contains all command handler functions organized by category:
//! - `basic`: Start, help, cancel, menu commands
//! - `html`: Link list to HTML page conversion
//! - `text`: Text to .txt document conversion

mod basic;
mod html;
mod text;

pub use basic::*;
pub use html::*;
pub use text::*;
