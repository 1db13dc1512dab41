//! Sorting extracted links into videos, PDFs and other links

use crate::error::{LinkError, Result};
use crate::extract::LinkEntry;

const YOUTUBE_EMBED: &str = "youtube.com/embed/";
const YOUTUBE_WATCH: &str = "https://www.youtube.com/watch?v=";

/// Player rules applied when none are configured
///
/// Same `pattern=>template` format accepted by [`PlayerRewrites::parse`].
pub const DEFAULT_PLAYER_REWRITES: &str = "\
akamaized.net/=>https://www.khanglobalstudies.com/player?src={url};\
1942403233.rsc.cdn77.org/=>https://www.khanglobalstudies.com/player?src={url};\
d1d34p8vz63oiq.cloudfront.net/=>https://anonymouspwplayer-0e5a3f512dec.herokuapp.com/pw?url={url}&token={token}";

/// Bucket a link is placed in on the generated page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Video,
    Pdf,
    Other,
}

/// Links grouped by category, each bucket in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categorized {
    pub videos: Vec<LinkEntry>,
    pub pdfs: Vec<LinkEntry>,
    pub others: Vec<LinkEntry>,
}

impl Categorized {
    /// Total number of links across all buckets
    pub fn total(&self) -> usize {
        self.videos.len() + self.pdfs.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Rewrites URLs served from a known host into a web player URL
///
/// The template may contain `{url}`, `{url_encoded}` and `{token}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRewrite {
    pub pattern: String,
    pub template: String,
}

impl PlayerRewrite {
    pub fn new(pattern: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            template: template.into(),
        }
    }

    pub fn matches(&self, url: &str) -> bool {
        url.contains(&self.pattern)
    }

    pub fn apply(&self, url: &str, token: &str) -> String {
        self.template
            .replace("{url_encoded}", &urlencoding::encode(url))
            .replace("{token}", token)
            .replace("{url}", url)
    }
}

/// Ordered set of player rewrite rules plus the player token
///
/// The default holds the built-in CDN rules with an empty token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRewrites {
    rules: Vec<PlayerRewrite>,
    token: String,
}

impl PlayerRewrites {
    pub fn new(rules: Vec<PlayerRewrite>, token: impl Into<String>) -> Self {
        Self {
            rules,
            token: token.into(),
        }
    }

    /// No rules at all; every URL goes through the plain classification
    pub fn none() -> Self {
        Self::new(Vec::new(), String::new())
    }

    /// The built-in CDN rules with the given player token
    pub fn builtin(token: impl Into<String>) -> Self {
        let token = token.into();
        match Self::parse(DEFAULT_PLAYER_REWRITES, token.clone()) {
            Ok(rewrites) => rewrites,
            Err(err) => {
                tracing::error!("Built-in player rules are invalid: {}", err);
                Self::new(Vec::new(), token)
            }
        }
    }

    /// Parse rules written as `pattern=>template`, separated by `;` or newlines
    ///
    /// # Errors
    /// Returns `LinkError::InvalidRewrite` for an entry without `=>` or with
    /// an empty side.
    pub fn parse(rules_text: &str, token: impl Into<String>) -> Result<Self> {
        let mut rules = Vec::new();

        for raw in rules_text.split([';', '\n']) {
            let rule = raw.trim();
            if rule.is_empty() {
                continue;
            }

            let (pattern, template) = rule.split_once("=>").ok_or_else(|| LinkError::InvalidRewrite {
                rule: rule.to_string(),
                reason: "expected `pattern=>template`",
            })?;

            let pattern = pattern.trim();
            let template = template.trim();

            if pattern.is_empty() {
                return Err(LinkError::InvalidRewrite {
                    rule: rule.to_string(),
                    reason: "pattern is empty",
                });
            }
            if template.is_empty() {
                return Err(LinkError::InvalidRewrite {
                    rule: rule.to_string(),
                    reason: "template is empty",
                });
            }

            rules.push(PlayerRewrite::new(pattern, template));
        }

        Ok(Self::new(rules, token))
    }

    pub fn rules(&self) -> &[PlayerRewrite] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn rewrite(&self, url: &str) -> Option<String> {
        self.rules
            .iter()
            .find(|rule| rule.matches(url))
            .map(|rule| rule.apply(url, &self.token))
    }
}

impl Default for PlayerRewrites {
    fn default() -> Self {
        Self::builtin(String::new())
    }
}

/// Decide the category of a URL and the URL to show for it
///
/// First match wins: player rewrites, YouTube embeds, HLS/MP4 streams,
/// PDFs, then everything else.
pub fn classify(url: &str, rewrites: &PlayerRewrites) -> (Category, String) {
    if let Some(player_url) = rewrites.rewrite(url) {
        return (Category::Video, player_url);
    }

    if let Some(watch_url) = youtube_watch_url(url) {
        return (Category::Other, watch_url);
    }

    if url.contains(".m3u8") || url.contains(".mp4") {
        (Category::Video, url.to_string())
    } else if url.to_ascii_lowercase().contains("pdf") {
        (Category::Pdf, url.to_string())
    } else {
        (Category::Other, url.to_string())
    }
}

/// Split entries into category buckets, rewriting URLs where a rule applies
pub fn categorize(entries: &[LinkEntry], rewrites: &PlayerRewrites) -> Categorized {
    let mut result = Categorized::default();

    for entry in entries {
        let (category, url) = classify(&entry.url, rewrites);
        let entry = LinkEntry {
            url,
            ..entry.clone()
        };

        match category {
            Category::Video => result.videos.push(entry),
            Category::Pdf => result.pdfs.push(entry),
            Category::Other => result.others.push(entry),
        }
    }

    tracing::debug!(
        "Categorized links: {} videos, {} pdfs, {} others",
        result.videos.len(),
        result.pdfs.len(),
        result.others.len()
    );

    result
}

/// Turn `https://www.youtube.com/embed/<id>` into a watch URL
fn youtube_watch_url(url: &str) -> Option<String> {
    let start = url.find(YOUTUBE_EMBED)? + YOUTUBE_EMBED.len();
    let id = url[start..]
        .split(['?', '&', '#', '/'])
        .next()
        .filter(|id| !id.is_empty())?;
    Some(format!("{}{}", YOUTUBE_WATCH, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, url: &str) -> LinkEntry {
        LinkEntry::new(name, url, 1)
    }

    #[test]
    fn test_classify_streams() {
        let none = PlayerRewrites::none();
        assert_eq!(classify("https://x/a/master.m3u8", &none).0, Category::Video);
        assert_eq!(classify("https://x/a/clip.mp4?sig=1", &none).0, Category::Video);
    }

    #[test]
    fn test_classify_pdf() {
        let none = PlayerRewrites::none();
        assert_eq!(classify("https://x/notes.pdf", &none).0, Category::Pdf);
        assert_eq!(classify("https://x/Notes.PDF", &none).0, Category::Pdf);
        assert_eq!(classify("https://x/pdfs/123", &none).0, Category::Pdf);
    }

    #[test]
    fn test_classify_other() {
        let none = PlayerRewrites::none();
        let (category, url) = classify("https://example.com/page", &none);
        assert_eq!(category, Category::Other);
        assert_eq!(url, "https://example.com/page");
    }

    #[test]
    fn test_video_wins_over_pdf() {
        let none = PlayerRewrites::none();
        assert_eq!(classify("https://pdfhost.example/lesson.mp4", &none).0, Category::Video);
    }

    #[test]
    fn test_youtube_embed_rewritten() {
        let none = PlayerRewrites::none();
        let (category, url) = classify("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0", &none);
        assert_eq!(category, Category::Other);
        assert_eq!(url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn test_youtube_embed_without_id_is_plain_link() {
        let none = PlayerRewrites::none();
        let (category, url) = classify("https://www.youtube.com/embed/", &none);
        assert_eq!(category, Category::Other);
        assert_eq!(url, "https://www.youtube.com/embed/");
    }

    #[test]
    fn test_player_rewrite() {
        let rewrites = PlayerRewrites::new(
            vec![PlayerRewrite::new("cdn.example.net/", "https://player.example/?src={url}&t={token}")],
            "abc",
        );
        let (category, url) = classify("https://cdn.example.net/v/1/file", &rewrites);
        assert_eq!(category, Category::Video);
        assert_eq!(url, "https://player.example/?src=https://cdn.example.net/v/1/file&t=abc");
    }

    #[test]
    fn test_player_rewrite_encoded() {
        let rule = PlayerRewrite::new("host", "https://p/?u={url_encoded}");
        assert_eq!(rule.apply("https://host/a b", ""), "https://p/?u=https%3A%2F%2Fhost%2Fa%20b");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rewrites = PlayerRewrites::new(
            vec![
                PlayerRewrite::new("example", "first:{url}"),
                PlayerRewrite::new("example.net", "second:{url}"),
            ],
            "",
        );
        let (_, url) = classify("https://example.net/x", &rewrites);
        assert_eq!(url, "first:https://example.net/x");
    }

    #[test]
    fn test_parse_rewrites() {
        let rewrites = PlayerRewrites::parse(
            "cdn.one/=>https://p1/?src={url} ; cdn.two/ => https://p2/{url_encoded}\n\n",
            "tok",
        )
        .unwrap();
        assert_eq!(rewrites.len(), 2);
        assert_eq!(rewrites.rules()[0], PlayerRewrite::new("cdn.one/", "https://p1/?src={url}"));
        assert_eq!(rewrites.rules()[1].pattern, "cdn.two/");
    }

    #[test]
    fn test_default_rules_cover_known_cdns() {
        let rewrites = PlayerRewrites::default();
        assert_eq!(rewrites.len(), 3);

        let entries = vec![
            entry("a", "https://dxyz.akamaized.net/videos/123/index"),
            entry("b", "https://d1d34p8vz63oiq.cloudfront.net/abc/master.mpd"),
            entry("c", "https://1942403233.rsc.cdn77.org/lesson/7/file"),
        ];
        let result = categorize(&entries, &rewrites);
        assert_eq!(result.videos.len(), 3);
        assert!(result.others.is_empty());
        assert_eq!(
            result.videos[0].url,
            "https://www.khanglobalstudies.com/player?src=https://dxyz.akamaized.net/videos/123/index"
        );
    }

    #[test]
    fn test_builtin_rules_use_token() {
        let rewrites = PlayerRewrites::builtin("tk");
        let (category, url) = classify("https://d1d34p8vz63oiq.cloudfront.net/abc/master.mpd", &rewrites);
        assert_eq!(category, Category::Video);
        assert_eq!(
            url,
            "https://anonymouspwplayer-0e5a3f512dec.herokuapp.com/pw?url=https://d1d34p8vz63oiq.cloudfront.net/abc/master.mpd&token=tk"
        );
    }

    #[test]
    fn test_no_rules_leave_cdn_links_plain() {
        let (category, _) = classify("https://dxyz.akamaized.net/videos/123/index", &PlayerRewrites::none());
        assert_eq!(category, Category::Other);
    }

    #[test]
    fn test_parse_rewrites_empty() {
        assert!(PlayerRewrites::parse("", "").unwrap().is_empty());
        assert!(PlayerRewrites::parse(" ; \n ", "").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rewrites_invalid() {
        assert!(matches!(
            PlayerRewrites::parse("no-arrow", ""),
            Err(LinkError::InvalidRewrite { .. })
        ));
        assert!(PlayerRewrites::parse("=>https://p/{url}", "").is_err());
        assert!(PlayerRewrites::parse("cdn.one/=>", "").is_err());
    }

    #[test]
    fn test_categorize_preserves_order_and_names() {
        let entries = vec![
            entry("v1", "https://x/1.mp4"),
            entry("p1", "https://x/1.pdf"),
            entry("o1", "https://x/page"),
            entry("v2", "https://x/2.m3u8"),
        ];
        let result = categorize(&entries, &PlayerRewrites::none());
        let names = |v: &[LinkEntry]| v.iter().map(|e| e.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&result.videos), vec!["v1", "v2"]);
        assert_eq!(names(&result.pdfs), vec!["p1"]);
        assert_eq!(names(&result.others), vec!["o1"]);
        assert_eq!(result.total(), entries.len());
    }

    #[test]
    fn test_categorize_is_deterministic() {
        let rewrites = PlayerRewrites::parse("cdn.example/=>https://p/?src={url}", "").unwrap();
        let entries = vec![
            entry("a", "https://cdn.example/a"),
            entry("b", "https://www.youtube.com/embed/xyz"),
            entry("c", "https://x/c.pdf"),
        ];
        let first = categorize(&entries, &rewrites);
        let second = categorize(&entries, &rewrites);
        assert_eq!(first, second);
    }

    #[test]
    fn test_categorize_empty() {
        let result = categorize(&[], &PlayerRewrites::none());
        assert!(result.is_empty());
    }
}
