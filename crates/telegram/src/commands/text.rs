//! Text to .txt document conversion

use crate::config::Settings;
use crate::constants::{emoji, prompts};
use crate::convert;
use crate::handlers;
use crate::keyboards;
use crate::types::{HandlerResult, MyDialogue, State};
use crate::utils;
use teloxide::{
    prelude::*,
    types::{InputFile, ParseMode},
};

/// Ask the user for the text to save
pub async fn request_text(
    bot: Bot,
    dialogue: MyDialogue,
    msg: Message,
    settings: Settings,
) -> HandlerResult {
    if !handlers::ensure_authorized(&bot, msg.chat.id, msg.from(), &settings).await? {
        return Ok(());
    }

    bot.send_message(msg.chat.id, prompts::TEXT)
        .reply_markup(keyboards::cancel_keyboard())
        .await?;
    dialogue.update(State::AwaitText).await?;
    Ok(())
}

/// Store the received text and ask for a file name
pub async fn receive_text(bot: Bot, dialogue: MyDialogue, msg: Message) -> HandlerResult {
    let text = match msg.text() {
        Some(text) if !text.trim().is_empty() && !utils::is_bot_command(text) => text.to_string(),
        _ => {
            handlers::send_response(
                &bot,
                msg.chat.id,
                emoji::ERROR,
                "Send valid text data, or /cancel to stop.",
            )
            .await?;
            return Ok(());
        }
    };

    dialogue.update(State::AwaitFileName { text }).await?;
    bot.send_message(msg.chat.id, prompts::FILE_NAME).await?;
    Ok(())
}

/// Send the stored text back as a named .txt document
pub async fn receive_file_name(
    bot: Bot,
    dialogue: MyDialogue,
    text: String,
    msg: Message,
) -> HandlerResult {
    let input = match msg.text() {
        Some(input) if !utils::is_bot_command(input) => input,
        _ => {
            bot.send_message(msg.chat.id, prompts::FILE_NAME).await?;
            return Ok(());
        }
    };

    let file_name = links::txt_file_name(input);
    tracing::info!("Sending {} ({} bytes) to chat {}", file_name, text.len(), msg.chat.id.0);

    bot.send_document(
        msg.chat.id,
        InputFile::memory(text.into_bytes()).file_name(file_name.clone()),
    )
    .caption(convert::txt_caption(&file_name))
    .parse_mode(ParseMode::Html)
    .await?;

    dialogue.exit().await?;
    Ok(())
}
