//! Conversion of uploaded link lists into HTML documents

use chrono::{DateTime, Utc};
use links::{PageOptions, PageSummary, PlayerRewrites};

use crate::constants::emoji;
use crate::error::{BotError, BotResult};

/// A generated HTML page ready to upload
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    /// Name of the document sent back to the user
    pub file_name: String,
    /// Human-friendly name of the batch
    pub display_name: String,
    /// Page content
    pub html: String,
    /// Link counts per category
    pub summary: PageSummary,
}

/// Build the HTML page for an uploaded file
///
/// # Errors
/// Returns `BotError::NoLinks` if the content has no recognisable links
pub fn build_html_document(
    file_name: &str,
    content: &str,
    rewrites: &PlayerRewrites,
    generated_at: DateTime<Utc>,
) -> BotResult<HtmlDocument> {
    let entries = links::extract_links(content);
    if entries.is_empty() {
        return Err(BotError::NoLinks);
    }

    let categorized = links::categorize(&entries, rewrites);
    let title = links::page_title(file_name);
    let display_name = links::display_name(&title);

    let options = PageOptions::new(display_name.clone()).generated_at(generated_at);
    let html = links::render_page(&categorized, &options);

    Ok(HtmlDocument {
        file_name: links::html_file_name(file_name),
        display_name,
        html,
        summary: PageSummary::from(&categorized),
    })
}

/// Caption sent with a generated page, in Telegram HTML
pub fn html_caption(document: &HtmlDocument, credit: &str) -> String {
    let summary = &document.summary;
    format!(
        "{} <b>Successfully done!</b>\n\
        <blockquote><b>{}</b></blockquote>\n\
        {} Videos: {} | {} PDFs: {} | {} Links: {}\n\
        ▶️ <b>Open in Chrome.</b>\n\n\
        {} <b>Extracted by:</b> {}",
        emoji::SUCCESS,
        links::escape_html(&document.display_name),
        emoji::VIDEO,
        summary.videos,
        emoji::PDF,
        summary.pdfs,
        emoji::LINK,
        summary.others,
        emoji::STAR,
        links::escape_html(credit)
    )
}

/// Caption sent with a generated .txt document, in Telegram HTML
pub fn txt_caption(file_name: &str) -> String {
    format!(
        "<code>{}</code>\n\n<blockquote>You can now download your content! 📥</blockquote>",
        links::escape_html(file_name)
    )
}
