//! Utility functions for formatting and validation

use crate::constants::TXT_EXTENSION;
use crate::types::Command;
use teloxide::utils::command::BotCommands;

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let value = bytes as f64;
    let unit_index = (value.ln() / 1024_f64.ln()).floor() as usize;
    let unit_index = unit_index.min(UNITS.len() - 1);

    let size = value / 1024_f64.powi(unit_index as i32);
    format!("{:.2} {}", size, UNITS[unit_index])
}

/// Check whether an uploaded file name looks like a link list
pub fn is_txt_file(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(TXT_EXTENSION)
}

/// Check whether a message is one of the bot's commands
///
/// Only the first word counts; a trailing `@botname` mention is ignored.
pub fn is_bot_command(text: &str) -> bool {
    let word = text.split_whitespace().next().unwrap_or("");
    let word = word.split('@').next().unwrap_or(word);
    Command::parse(word, "").is_ok()
}

/// Decode uploaded bytes as UTF-8, replacing invalid sequences
///
/// A leading byte-order mark is dropped.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
