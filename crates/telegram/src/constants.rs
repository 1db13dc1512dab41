//! Constants used throughout the telegram bot

/// Maximum accepted callback data length
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

/// Minimum seconds between callback presses from one user
pub const RATE_LIMIT_SECONDS: u64 = 1;

/// Default cap on uploaded .txt files, in megabytes
pub const DEFAULT_MAX_TXT_FILE_MB: u32 = 5;

/// Default number of conversions allowed to run at once
pub const DEFAULT_MAX_CONCURRENT_JOBS: usize = 4;

/// Default credit line in document captions
pub const DEFAULT_CREDIT: &str = "linkdeck";

/// Extension accepted for link lists
pub const TXT_EXTENSION: &str = ".txt";

/// Emoji constants for consistent UI
pub mod emoji {
    pub const SUCCESS: &str = "✅";
    pub const ERROR: &str = "❌";
    pub const WAIT: &str = "⏳";
    pub const LOCK: &str = "🔒";
    pub const VIDEO: &str = "🎬";
    pub const PDF: &str = "📄";
    pub const LINK: &str = "🔗";
    pub const STAR: &str = "🌟";
}

/// Prompts shown when a command waits for input
pub mod prompts {
    pub const HTML_FILE: &str = "📤 Send me a .txt file containing your links.\n\n\
        Supported layouts:\n\
        • Name: https://...\n\
        • A title line followed by a URL line\n\n\
        Send /cancel to stop.";
    pub const TEXT: &str = "📝 Send the text you want saved as a .txt file.\n\nSend /cancel to stop.";
    pub const FILE_NAME: &str = "🔄 Send a file name, or /d for the default name.";
}
