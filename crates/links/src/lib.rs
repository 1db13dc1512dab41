//! Link extraction and HTML viewer generation
//!
//! This crate turns a plain-text list of lessons and materials into
//! `(name, URL)` pairs, sorts them into videos, PDFs and other links,
//! and renders a standalone HTML page to browse and play them.

pub mod categorize;
pub mod error;
pub mod extract;
pub mod naming;
pub mod render;

pub use categorize::{
    categorize, classify, Categorized, Category, PlayerRewrite, PlayerRewrites, DEFAULT_PLAYER_REWRITES,
};
pub use error::{LinkError, Result};
pub use extract::{extract_links, LinkEntry};
pub use naming::{display_name, html_file_name, page_title, txt_file_name, DEFAULT_TXT_NAME};
pub use render::{escape_html, render_page, PageOptions, PageSummary};
