//! Link list to HTML page conversion

use crate::config::Settings;
use crate::constants::{emoji, prompts};
use crate::convert;
use crate::error::{BotError, BotResult};
use crate::handlers;
use crate::jobs::JobGate;
use crate::keyboards;
use crate::types::{HandlerResult, MyDialogue, State};
use crate::utils;
use teloxide::{
    net::Download,
    prelude::*,
    types::{Document, InputFile, ParseMode},
};

/// Ask the user for a .txt file of links
pub async fn request_html_file(
    bot: Bot,
    dialogue: MyDialogue,
    msg: Message,
    settings: Settings,
) -> HandlerResult {
    if !handlers::ensure_authorized(&bot, msg.chat.id, msg.from(), &settings).await? {
        return Ok(());
    }

    bot.send_message(msg.chat.id, prompts::HTML_FILE)
        .reply_markup(keyboards::cancel_keyboard())
        .await?;
    dialogue.update(State::AwaitHtmlFile).await?;
    Ok(())
}

/// Convert an uploaded .txt file into an HTML page and send it back
pub async fn receive_html_file(
    bot: Bot,
    dialogue: MyDialogue,
    msg: Message,
    settings: Settings,
    gate: JobGate,
) -> HandlerResult {
    let document = match msg.document() {
        Some(document) => document.clone(),
        None => {
            handlers::send_response(
                &bot,
                msg.chat.id,
                emoji::ERROR,
                "Please send a .txt file, or /cancel to stop.",
            )
            .await?;
            return Ok(());
        }
    };

    let file_name = document
        .file_name
        .clone()
        .unwrap_or_else(|| "links.txt".to_string());

    if let Err(err) = check_upload(&file_name, document.file.size, &settings) {
        tracing::warn!("Rejected upload {}: {}", file_name, err);
        handlers::send_error(&bot, msg.chat.id, &err).await?;
        return Ok(());
    }

    let _permit = match gate.try_acquire() {
        Some(permit) => permit,
        None => {
            tracing::info!("Conversion gate full ({} running), queueing {}", gate.running(), file_name);
            handlers::send_response(
                &bot,
                msg.chat.id,
                emoji::WAIT,
                "All conversion slots are busy. Your file is queued...",
            )
            .await?;
            gate.acquire().await?
        }
    };

    tracing::info!(
        "Converting {} ({} bytes) for chat {}",
        file_name,
        document.file.size,
        msg.chat.id.0
    );

    let content = match download_document(&bot, &document).await {
        Ok(content) => content,
        Err(err) => {
            tracing::error!("Failed to download {}: {}", file_name, err);
            handlers::send_error(&bot, msg.chat.id, &err).await?;
            dialogue.exit().await?;
            return Ok(());
        }
    };

    match convert::build_html_document(&file_name, &content, &settings.rewrites, chrono::Utc::now()) {
        Ok(page) => {
            let caption = convert::html_caption(&page, &settings.credit);
            tracing::info!(
                "Sending {} with {} links to chat {}",
                page.file_name,
                page.summary.total(),
                msg.chat.id.0
            );

            bot.send_document(
                msg.chat.id,
                InputFile::memory(page.html.into_bytes()).file_name(page.file_name),
            )
            .caption(caption)
            .parse_mode(ParseMode::Html)
            .await?;
        }
        Err(err) => {
            tracing::warn!("Conversion of {} failed: {}", file_name, err);
            handlers::send_error(&bot, msg.chat.id, &err).await?;
        }
    }

    dialogue.exit().await?;
    Ok(())
}

/// Validate an upload's name and size before downloading it
fn check_upload(file_name: &str, size: u32, settings: &Settings) -> BotResult<()> {
    if !utils::is_txt_file(file_name) {
        return Err(BotError::InvalidArguments(
            "Invalid file type. Please send a .txt file.".to_string(),
        ));
    }

    if size > settings.max_txt_bytes {
        return Err(BotError::InvalidArguments(format!(
            "File too large ({}). Maximum size is {} MB.",
            utils::format_bytes(u64::from(size)),
            settings.max_txt_mb()
        )));
    }

    Ok(())
}

/// Fetch a document's bytes from Telegram and decode them as text
async fn download_document(bot: &Bot, document: &Document) -> BotResult<String> {
    let file = bot.get_file(&document.file.id).await?;

    let mut data = Vec::new();
    bot.download_file(&file.path, &mut data).await?;

    Ok(utils::decode_text(&data))
}
