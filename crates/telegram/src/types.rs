use teloxide::{
    dispatching::dialogue::{Dialogue, InMemStorage},
    macros::BotCommands,
};

/// Type alias for dialogue management with State and InMemStorage
pub type MyDialogue = Dialogue<State, InMemStorage<State>>;

/// Type alias for handler result types
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Represents the dialogue state for the bot conversation
#[derive(Clone, Default, Debug)]
pub enum State {
    /// Initial state when conversation starts
    #[default]
    Start,
    /// Waiting for a .txt file to turn into an HTML page
    AwaitHtmlFile,
    /// Waiting for the text of a new .txt document
    AwaitText,
    /// Waiting for the name of the .txt document holding `text`
    AwaitFileName { text: String },
}

/// Available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "Show the welcome message")]
    Start,
    #[command(description = "Display help information")]
    Help,
    #[command(description = "Show the interactive menu")]
    Menu,
    #[command(description = "Convert a .txt file of links into an HTML player page")]
    Html,
    #[command(description = "Turn a text message into a .txt file")]
    Text,
    #[command(description = "Cancel the current operation")]
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::utils::command::BotCommands;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/html", "linkdeck_bot").unwrap(), Command::Html);
        assert_eq!(Command::parse("/text", "linkdeck_bot").unwrap(), Command::Text);
        assert_eq!(Command::parse("/cancel", "linkdeck_bot").unwrap(), Command::Cancel);
        assert!(Command::parse("/d", "linkdeck_bot").is_err());
    }

    #[test]
    fn test_descriptions_list_commands() {
        let help = Command::descriptions().to_string();
        assert!(help.contains("/html"));
        assert!(help.contains("/text"));
        assert!(help.contains("/cancel"));
    }
}
