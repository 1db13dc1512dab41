//! Static HTML viewer generation
//!
//! The page is a single self-contained file. Styling and playback come from
//! public CDNs (Bootstrap, Font Awesome, Plyr, hls.js); everything else is
//! inlined. Names and URLs only ever land in HTML text or attribute values,
//! never inside script source.

use chrono::{DateTime, Utc};

use crate::categorize::Categorized;
use crate::extract::LinkEntry;

const PLYR_CSS: &str = "https://cdn.plyr.io/3.7.8/plyr.css";
const PLYR_JS: &str = "https://cdn.plyr.io/3.7.8/plyr.polyfilled.js";
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js";
const FONT_AWESOME_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
const INTER_FONT_CSS: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700;800;900&display=swap";
const HLS_JS: &str = "https://cdn.jsdelivr.net/npm/hls.js@1.5.7/dist/hls.min.js";

/// Settings for a generated page
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Title shown in the browser tab and page header
    pub title: String,
    /// Timestamp printed in the footer, if any
    pub generated_at: Option<DateTime<Utc>>,
}

impl PageOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: None,
        }
    }

    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }
}

/// Link counts shown on the page and in the bot caption
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub videos: usize,
    pub pdfs: usize,
    pub others: usize,
}

impl PageSummary {
    pub fn total(&self) -> usize {
        self.videos + self.pdfs + self.others
    }
}

impl From<&Categorized> for PageSummary {
    fn from(categorized: &Categorized) -> Self {
        Self {
            videos: categorized.videos.len(),
            pdfs: categorized.pdfs.len(),
            others: categorized.others.len(),
        }
    }
}

#[derive(Clone, Copy)]
enum ItemKind {
    Video,
    Pdf,
    Link,
}

impl ItemKind {
    fn label(self) -> &'static str {
        match self {
            ItemKind::Video => "Video",
            ItemKind::Pdf => "PDF",
            ItemKind::Link => "Link",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ItemKind::Video => "fa-play-circle",
            ItemKind::Pdf => "fa-file-pdf",
            ItemKind::Link => "fa-link",
        }
    }

    fn empty_text(self) -> &'static str {
        match self {
            ItemKind::Video => "No videos in this file",
            ItemKind::Pdf => "No PDFs in this file",
            ItemKind::Link => "No other links in this file",
        }
    }
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_item(kind: ItemKind, index: usize, entry: &LinkEntry) -> String {
    let name = escape_html(&entry.name);
    let url = escape_html(&entry.url);
    let label = kind.label();
    let icon = kind.icon();

    match kind {
        ItemKind::Video => format!(
            r#"
            <div class="list-group-item video-item" data-url="{url}" data-title="{name}">
                <div class="item-title">
                    <i class="fas {icon}"></i>
                    <span title="{name}">{name}</span>
                </div>
                <div class="item-actions">
                    <small class="text-muted">{label} {index:03}</small>
                    <i class="fas fa-play"></i>
                </div>
            </div>"#
        ),
        ItemKind::Pdf | ItemKind::Link => format!(
            r#"
            <a class="list-group-item" href="{url}" target="_blank" rel="noopener noreferrer">
                <div class="item-title">
                    <i class="fas {icon}"></i>
                    <span title="{name}">{name}</span>
                </div>
                <div class="item-actions">
                    <small class="text-muted">{label} {index:03}</small>
                    <i class="fas fa-external-link-alt ms-2"></i>
                </div>
            </a>"#
        ),
    }
}

fn render_list(kind: ItemKind, entries: &[LinkEntry]) -> String {
    if entries.is_empty() {
        return format!(
            r#"
            <div class="empty-state"><i class="fas fa-inbox"></i><p>{}</p></div>"#,
            kind.empty_text()
        );
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| render_item(kind, i + 1, entry))
        .collect()
}

/// Render the complete viewer page for categorized links
pub fn render_page(categorized: &Categorized, options: &PageOptions) -> String {
    let title = escape_html(&options.title);
    let summary = PageSummary::from(categorized);

    let mut html = String::with_capacity(16 * 1024 + summary.total() * 512);

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="dark">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0, viewport-fit=cover">
    <title>{title}</title>
    <link href="{PLYR_CSS}" rel="stylesheet">
    <link href="{BOOTSTRAP_CSS}" rel="stylesheet">
    <link href="{FONT_AWESOME_CSS}" rel="stylesheet">
    <link href="{INTER_FONT_CSS}" rel="stylesheet">
    <script src="{HLS_JS}"></script>
    <style>{STYLE}</style>
</head>
<body>
    <button class="theme-toggle" id="theme-toggle" type="button" aria-label="Toggle theme">
        <i class="fas fa-sun" id="theme-icon"></i>
    </button>
    <div class="container-fluid py-4">
        <h1 class="header-title">{title}</h1>
"#
    ));

    html.push_str(&format!(
        r#"
        <div class="stats-container">
            <div class="stat-item"><div class="stat-number">{}</div><div class="stat-label">Total</div></div>
            <div class="stat-item"><div class="stat-number">{}</div><div class="stat-label">Videos</div></div>
            <div class="stat-item"><div class="stat-number">{}</div><div class="stat-label">PDFs</div></div>
            <div class="stat-item"><div class="stat-number">{}</div><div class="stat-label">Links</div></div>
        </div>
"#,
        summary.total(),
        summary.videos,
        summary.pdfs,
        summary.others
    ));

    html.push_str(
        r##"
        <div class="video-container">
            <video id="player" playsinline controls></video>
        </div>
        <div class="glass-card">
            <div class="input-group">
                <input type="url" class="form-control" id="customUrl" placeholder="Paste a video URL (.m3u8 / .mp4) to play">
                <button class="btn btn-primary" type="button" id="customUrlButton"><i class="fas fa-play"></i> Play</button>
            </div>
        </div>
        <div class="glass-card">
            <input type="search" class="form-control" id="searchInput" placeholder="Search lessons and files...">
        </div>
        <ul class="nav nav-tabs" role="tablist">
            <li class="nav-item" role="presentation">
                <button class="nav-link active" data-bs-toggle="tab" data-bs-target="#videos" type="button" role="tab"><i class="fas fa-video"></i> Videos</button>
            </li>
            <li class="nav-item" role="presentation">
                <button class="nav-link" data-bs-toggle="tab" data-bs-target="#pdfs" type="button" role="tab"><i class="fas fa-file-pdf"></i> PDFs</button>
            </li>
            <li class="nav-item" role="presentation">
                <button class="nav-link" data-bs-toggle="tab" data-bs-target="#others" type="button" role="tab"><i class="fas fa-link"></i> Links</button>
            </li>
        </ul>
        <div class="tab-content">
"##,
    );

    let sections = [
        ("videos", " show active", ItemKind::Video, &categorized.videos),
        ("pdfs", "", ItemKind::Pdf, &categorized.pdfs),
        ("others", "", ItemKind::Link, &categorized.others),
    ];

    for (id, state, kind, entries) in sections {
        html.push_str(&format!(
            r#"
            <div class="tab-pane fade{state}" id="{id}" role="tabpanel">
                <div class="list-group">{}
                </div>
            </div>
"#,
            render_list(kind, entries)
        ));
    }

    html.push_str("        </div>\n");

    if let Some(at) = options.generated_at {
        html.push_str(&format!(
            "        <footer class=\"page-footer\">Generated on {}</footer>\n",
            at.format("%Y-%m-%d %H:%M UTC")
        ));
    }

    html.push_str(&format!(
        r#"    </div>
    <script src="{BOOTSTRAP_JS}"></script>
    <script src="{PLYR_JS}"></script>
    <script>{SCRIPT}</script>
</body>
</html>
"#
    ));

    html
}

const STYLE: &str = r##"
        :root[data-theme="light"] {
            --page-bg: #f8fafc;
            --page-color: #1e293b;
            --card-bg: rgba(255, 255, 255, 0.9);
            --card-border: rgba(0, 0, 0, 0.1);
            --hover-bg: rgba(59, 130, 246, 0.1);
            --icon-color: #3b82f6;
            --accent-gradient: linear-gradient(45deg, #3b82f6, #10b981);
        }
        :root[data-theme="dark"] {
            --page-bg: #0f172a;
            --page-color: #e2e8f0;
            --card-bg: rgba(255, 255, 255, 0.1);
            --card-border: rgba(255, 255, 255, 0.2);
            --hover-bg: rgba(59, 130, 246, 0.2);
            --icon-color: #60a5fa;
            --accent-gradient: linear-gradient(45deg, #60a5fa, #34d399);
        }
        body {
            font-family: 'Inter', sans-serif;
            background: var(--page-bg);
            color: var(--page-color);
            min-height: 100vh;
            line-height: 1.6;
            transition: background 0.3s ease, color 0.3s ease;
        }
        .header-title {
            font-size: min(1.8rem, 6vw);
            font-weight: 800;
            text-align: center;
            overflow-wrap: break-word;
            margin-bottom: 2rem;
            background: var(--accent-gradient);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            background-clip: text;
        }
        .glass-card {
            background: var(--card-bg);
            backdrop-filter: blur(16px);
            border: 1px solid var(--card-border);
            border-radius: 16px;
            padding: 1rem 1.25rem;
            margin: 0 auto 1.5rem auto;
            max-width: 1000px;
        }
        .stats-container {
            display: flex;
            justify-content: center;
            flex-wrap: wrap;
            gap: 1rem;
            margin-bottom: 2rem;
        }
        .stat-item {
            background: var(--card-bg);
            border: 1px solid var(--card-border);
            border-radius: 12px;
            padding: 1rem 1.5rem;
            min-width: 110px;
            text-align: center;
        }
        .stat-number { font-size: 2rem; font-weight: 700; color: var(--icon-color); }
        .stat-label { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.05em; opacity: 0.8; }
        .video-container {
            width: 100%;
            max-width: 1000px;
            margin: 0 auto 1.5rem auto;
            aspect-ratio: 16 / 9;
            border-radius: 16px;
            overflow: hidden;
        }
        .video-container video, .plyr { width: 100%; height: 100%; }
        .nav-tabs {
            max-width: 1000px;
            margin: 0 auto 1rem auto;
            border: none;
            background: var(--card-bg);
            border-radius: 12px;
            padding: 0.5rem;
            flex-wrap: nowrap;
            overflow-x: auto;
        }
        .nav-tabs .nav-link {
            border: none;
            color: var(--page-color);
            opacity: 0.7;
            font-weight: 600;
            border-radius: 8px;
            white-space: nowrap;
        }
        .nav-tabs .nav-link.active { background: var(--icon-color); color: #fff; opacity: 1; }
        .tab-content { max-width: 1000px; margin: 0 auto; }
        .list-group-item {
            display: flex;
            align-items: center;
            justify-content: space-between;
            background: var(--card-bg);
            border: 1px solid var(--card-border);
            color: var(--page-color);
            border-radius: 12px !important;
            margin-bottom: 0.75rem;
            padding: 1rem 1.25rem;
            cursor: pointer;
            text-decoration: none;
        }
        .list-group-item:hover { background: var(--hover-bg); color: var(--page-color); }
        .list-group-item.playing { border-color: var(--icon-color); }
        .item-title { display: flex; align-items: center; gap: 0.75rem; min-width: 0; }
        .item-title span { overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
        .item-title i, .item-actions i { color: var(--icon-color); }
        .item-actions { display: flex; align-items: center; gap: 0.5rem; flex-shrink: 0; }
        .item-actions .text-muted { color: var(--page-color) !important; opacity: 0.6; }
        .empty-state { text-align: center; padding: 2rem; opacity: 0.6; }
        .empty-state i { font-size: 2rem; margin-bottom: 0.5rem; }
        .form-control { background: transparent; color: var(--page-color); border-color: var(--card-border); }
        .form-control:focus { background: transparent; color: var(--page-color); }
        .theme-toggle {
            position: fixed;
            top: 16px;
            right: 16px;
            z-index: 1000;
            width: 44px;
            height: 44px;
            border-radius: 50%;
            border: 1px solid var(--card-border);
            background: var(--card-bg);
            color: var(--icon-color);
        }
        .notification {
            position: fixed;
            top: 80px;
            right: 20px;
            z-index: 9999;
            max-width: 300px;
            padding: 14px 20px;
            border-radius: 12px;
            border: 2px solid var(--card-border);
            background: var(--card-bg);
            color: var(--page-color);
            backdrop-filter: blur(16px);
            font-weight: 600;
            transform: translateX(120%);
            transition: transform 0.4s ease;
        }
        .notification.visible { transform: translateX(0); }
        .notification-success { border-color: #10b981; color: #10b981; }
        .notification-error { border-color: #ef4444; color: #ef4444; }
        .notification-warning { border-color: #f59e0b; color: #f59e0b; }
        .page-footer { text-align: center; opacity: 0.5; font-size: 0.8rem; margin-top: 2rem; }
    "##;

const SCRIPT: &str = r##"
        const video = document.getElementById('player');
        const player = new Plyr(video, { ratio: '16:9' });
        let hls = null;

        function showNotification(message, type = 'info') {
            const note = document.createElement('div');
            note.className = `notification notification-${type}`;
            note.textContent = message;
            document.body.appendChild(note);
            setTimeout(() => note.classList.add('visible'), 50);
            const duration = type === 'error' ? 5000 : 3000;
            setTimeout(() => {
                note.classList.remove('visible');
                setTimeout(() => note.remove(), 400);
            }, duration);
        }

        function autoplay() {
            player.play().catch(() => showNotification('Video ready - press play', 'warning'));
        }

        function loadVideo(url, title) {
            if (hls) {
                hls.destroy();
                hls = null;
            }
            const label = title || 'video';
            if (url.includes('.m3u8')) {
                if (window.Hls && Hls.isSupported()) {
                    hls = new Hls({ enableWorker: true });
                    hls.loadSource(url);
                    hls.attachMedia(video);
                    hls.on(Hls.Events.MANIFEST_PARSED, () => {
                        showNotification(`Ready: ${label}`, 'success');
                        autoplay();
                    });
                    hls.on(Hls.Events.ERROR, (event, data) => {
                        if (!data.fatal) {
                            return;
                        }
                        if (data.type === Hls.ErrorTypes.NETWORK_ERROR) {
                            hls.startLoad();
                        } else if (data.type === Hls.ErrorTypes.MEDIA_ERROR) {
                            hls.recoverMediaError();
                        } else {
                            showNotification('Error loading video stream', 'error');
                        }
                    });
                    return;
                }
                if (!video.canPlayType('application/vnd.apple.mpegurl')) {
                    showNotification('HLS is not supported in this browser', 'error');
                    return;
                }
            }
            video.src = url;
            video.load();
            video.addEventListener('loadeddata', () => {
                showNotification(`Ready: ${label}`, 'success');
                autoplay();
            }, { once: true });
            video.addEventListener('error', () => showNotification('Error loading video file', 'error'), { once: true });
        }

        function playVideo(item) {
            document.querySelectorAll('.video-item.playing').forEach(el => el.classList.remove('playing'));
            item.classList.add('playing');
            loadVideo(item.dataset.url, item.dataset.title);
            document.querySelector('.video-container').scrollIntoView({ behavior: 'smooth' });
        }

        function loadCustomUrl() {
            const input = document.getElementById('customUrl');
            const url = input.value.trim();
            if (!url) {
                showNotification('Enter a video URL first', 'warning');
                return;
            }
            loadVideo(url, 'Custom video');
        }

        function applyTheme(theme) {
            document.documentElement.setAttribute('data-theme', theme);
            document.getElementById('theme-icon').className = theme === 'dark' ? 'fas fa-sun' : 'fas fa-moon';
        }

        function toggleTheme() {
            const current = document.documentElement.getAttribute('data-theme');
            const next = current === 'dark' ? 'light' : 'dark';
            applyTheme(next);
            localStorage.setItem('theme', next);
        }

        function filterContent() {
            const term = document.getElementById('searchInput').value.toLowerCase();
            document.querySelectorAll('.list-group-item').forEach(item => {
                item.style.display = item.textContent.toLowerCase().includes(term) ? 'flex' : 'none';
            });
        }

        document.addEventListener('DOMContentLoaded', () => {
            applyTheme(localStorage.getItem('theme') || 'dark');
            document.getElementById('theme-toggle').addEventListener('click', toggleTheme);
            document.getElementById('customUrlButton').addEventListener('click', loadCustomUrl);
            const search = document.getElementById('searchInput');
            search.addEventListener('input', filterContent);
            search.addEventListener('keydown', e => {
                if (e.key === 'Escape') {
                    search.value = '';
                    filterContent();
                    search.blur();
                }
            });
            const items = document.querySelectorAll('.video-item');
            items.forEach(item => item.addEventListener('click', () => playVideo(item)));
            if (items.length > 0) {
                loadVideo(items[0].dataset.url, items[0].dataset.title);
                items[0].classList.add('playing');
            }
        });
    "##;
