use std::fmt;

/// Custom error type for telegram bot operations
#[derive(Debug)]
pub enum BotError {
    /// Telegram API error
    TelegramError(teloxide::RequestError),
    /// Failed to download a file from Telegram
    DownloadError(teloxide::DownloadError),
    /// Link processing configuration error
    LinkError(links::LinkError),
    /// Invalid or missing configuration value
    Config(String),
    /// Upload or message the bot cannot work with
    InvalidArguments(String),
    /// The uploaded file contained no links
    NoLinks,
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::TelegramError(e) => write!(f, "Telegram error: {}", e),
            BotError::DownloadError(e) => write!(f, "Download error: {}", e),
            BotError::LinkError(e) => write!(f, "Link error: {}", e),
            BotError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BotError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            BotError::NoLinks => write!(f, "No links found"),
        }
    }
}

impl std::error::Error for BotError {}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        BotError::TelegramError(err)
    }
}

impl From<teloxide::DownloadError> for BotError {
    fn from(err: teloxide::DownloadError) -> Self {
        BotError::DownloadError(err)
    }
}

impl From<links::LinkError> for BotError {
    fn from(err: links::LinkError) -> Self {
        BotError::LinkError(err)
    }
}

/// Result type alias for bot operations
pub type BotResult<T> = Result<T, BotError>;

/// Helper trait to convert results into user-friendly messages
pub trait UserMessage {
    fn user_message(&self) -> String;
}

impl UserMessage for BotError {
    fn user_message(&self) -> String {
        match self {
            BotError::TelegramError(e) => format!("❌ Communication error: {}", e),
            BotError::DownloadError(_) => "❌ Could not download your file. Please send it again.".to_string(),
            BotError::LinkError(e) => format!("❌ {}", e),
            BotError::Config(msg) => format!("❌ Bot is misconfigured: {}", msg),
            BotError::InvalidArguments(msg) => format!("❌ {}", msg),
            BotError::NoLinks => {
                "❌ No links found. Use `Name: https://...` lines or a title line followed by a URL line."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert!(BotError::NoLinks.user_message().starts_with("❌ No links found"));
        assert_eq!(
            BotError::InvalidArguments("Send a .txt file".into()).user_message(),
            "❌ Send a .txt file"
        );
        let err: BotError = links::PlayerRewrites::parse("broken", "").unwrap_err().into();
        assert!(err.to_string().starts_with("Link error: invalid player rewrite rule"));
    }
}
