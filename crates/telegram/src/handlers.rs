//! Command handler helper functions
//!
//! Reusable pieces shared by command and callback handlers.

use crate::config::Settings;
use crate::constants::emoji;
use crate::error::{BotError, UserMessage};
use crate::types::HandlerResult;
use teloxide::prelude::*;

/// Send a formatted message with emoji prefix
pub async fn send_response(bot: &Bot, chat_id: ChatId, emoji: &str, message: &str) -> HandlerResult {
    bot.send_message(chat_id, format!("{} {}", emoji, message))
        .await?;
    Ok(())
}

/// Report a failed operation to the user
pub async fn send_error(bot: &Bot, chat_id: ChatId, err: &BotError) -> HandlerResult {
    bot.send_message(chat_id, err.user_message()).await?;
    Ok(())
}

/// Check the sender against the access list, replying when refused
///
/// Returns `true` when the user may continue.
pub async fn ensure_authorized(
    bot: &Bot,
    chat_id: ChatId,
    user: Option<&teloxide::types::User>,
    settings: &Settings,
) -> Result<bool, teloxide::RequestError> {
    let allowed = user.map(|u| settings.is_authorized(u.id.0)).unwrap_or(false);

    if !allowed {
        tracing::warn!(
            "Refused unauthorized user {:?} in chat {}",
            user.map(|u| u.id.0),
            chat_id.0
        );
        bot.send_message(
            chat_id,
            format!("{} You are not authorized to use this bot.", emoji::LOCK),
        )
        .await?;
    }

    Ok(allowed)
}
