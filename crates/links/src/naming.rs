//! File names for generated documents

use std::path::Path;

/// Name used for `.txt` documents when the user sends `/d`
pub const DEFAULT_TXT_NAME: &str = "txt_file";

/// Title for a generated page: the uploaded file name without extension
pub fn page_title(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("links")
        .to_string()
}

/// Human-friendly form of a file stem
pub fn display_name(stem: &str) -> String {
    stem.replace('_', " ")
}

/// Name of the `.html` document generated for an uploaded file
pub fn html_file_name(file_name: &str) -> String {
    format!("{}.html", page_title(file_name))
}

/// Name of the `.txt` document built from user input
///
/// `/d` or an empty input selects [`DEFAULT_TXT_NAME`]. Leading slashes are
/// dropped and inner slashes replaced so the result is a single path segment.
pub fn txt_file_name(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() || input == "/d" {
        return format!("{}.txt", DEFAULT_TXT_NAME);
    }

    let cleaned = input.trim_start_matches('/').replace(['/', '\\'], "_");
    let cleaned = cleaned.strip_suffix(".txt").unwrap_or(&cleaned);

    if cleaned.is_empty() {
        format!("{}.txt", DEFAULT_TXT_NAME)
    } else {
        format!("{}.txt", cleaned)
    }
}
