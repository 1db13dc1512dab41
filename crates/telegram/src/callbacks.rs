//! Callback query handlers for inline keyboard interactions

use crate::config::Settings;
use crate::constants::{prompts, MAX_CALLBACK_DATA_LEN};
use crate::handlers;
use crate::keyboards;
use crate::rate_limit;
use crate::types::{Command, HandlerResult, MyDialogue, State};
use teloxide::{prelude::*, utils::command::BotCommands};

/// Actions reachable from inline buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Html,
    Text,
    Help,
    Menu,
    Cancel,
}

impl CallbackAction {
    /// Parse callback data such as `cmd:html` or `cancel`
    pub fn parse(data: &str) -> Option<Self> {
        let parts: Vec<&str> = data.split(':').collect();
        match parts.as_slice() {
            ["cmd", "html"] => Some(Self::Html),
            ["cmd", "text"] => Some(Self::Text),
            ["cmd", "help"] => Some(Self::Help),
            ["cmd", "menu"] => Some(Self::Menu),
            ["cancel"] => Some(Self::Cancel),
            _ => None,
        }
    }

    /// Whether presses of this button go through the per-user rate limit
    ///
    /// Cancel is always served so a user can back out right after a press.
    pub fn is_rate_limited(self) -> bool {
        !matches!(self, Self::Cancel)
    }
}

/// Handle all callback queries from inline keyboards
pub async fn handle_callback(
    bot: Bot,
    dialogue: MyDialogue,
    q: CallbackQuery,
    settings: Settings,
) -> HandlerResult {
    // Answer callback query to remove loading state
    bot.answer_callback_query(&q.id).await?;

    let data = match q.data {
        Some(ref data) => data,
        None => return Ok(()),
    };

    if data.len() > MAX_CALLBACK_DATA_LEN {
        tracing::warn!("Callback data too long: {} bytes", data.len());
        return Ok(());
    }

    let action = match CallbackAction::parse(data) {
        Some(action) => action,
        None => {
            tracing::debug!("Unknown callback data: {}", data);
            return Ok(());
        }
    };

    if action.is_rate_limited() && !rate_limit::check_rate_limit(q.from.id.0) {
        tracing::debug!("Rate limited user: {}", q.from.id.0);
        return Ok(());
    }

    let message = match q.message {
        Some(ref msg) => msg,
        None => return Ok(()),
    };
    let chat_id = message.chat.id;

    match action {
        CallbackAction::Html => {
            if handlers::ensure_authorized(&bot, chat_id, Some(&q.from), &settings).await? {
                bot.send_message(chat_id, prompts::HTML_FILE)
                    .reply_markup(keyboards::cancel_keyboard())
                    .await?;
                dialogue.update(State::AwaitHtmlFile).await?;
            }
        }
        CallbackAction::Text => {
            if handlers::ensure_authorized(&bot, chat_id, Some(&q.from), &settings).await? {
                bot.send_message(chat_id, prompts::TEXT)
                    .reply_markup(keyboards::cancel_keyboard())
                    .await?;
                dialogue.update(State::AwaitText).await?;
            }
        }
        CallbackAction::Help => {
            bot.send_message(chat_id, Command::descriptions().to_string())
                .await?;
        }
        CallbackAction::Menu => {
            bot.send_message(chat_id, "🤖 Main Menu - Choose an action:")
                .reply_markup(keyboards::main_menu_keyboard())
                .await?;
        }
        CallbackAction::Cancel => {
            dialogue.exit().await?;
            bot.edit_message_text(chat_id, message.id, "Operation cancelled.")
                .await?;
        }
    }

    Ok(())
}
