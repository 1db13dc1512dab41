//! Extraction of `(name, URL)` pairs from uploaded text files
//!
//! Two layouts are recognised and may be mixed freely in one file:
//!
//! ```text
//! Lecture 1: https://cdn.example.com/lecture1.m3u8
//!
//! Lecture 2 Notes
//! https://cdn.example.com/lecture2.pdf
//! ```
//!
//! Blank lines are ignored, so a title and its URL may be separated by
//! empty lines.

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Characters stripped from the end of an inline name ("Name: url", "Name - url")
const NAME_SEPARATORS: [char; 3] = [':', '-', '|'];

/// A single named link found in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Display name of the link
    pub name: String,
    /// Link target
    pub url: String,
    /// 1-based line number of the line holding the URL
    pub line: usize,
}

impl LinkEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            line,
        }
    }
}

/// Extract all named links from file content, in file order
///
/// Every line that contains an `http://` or `https://` URL yields exactly
/// one entry. Lines without a URL are used as titles when the next
/// non-blank line is a bare URL, and skipped otherwise.
pub fn extract_links(content: &str) -> Vec<LinkEntry> {
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let (line_no, line) = lines[i];

        if let Some((prefix, url)) = split_url_line(line) {
            let name = inline_name(prefix).unwrap_or_else(|| name_from_url(url));
            entries.push(LinkEntry::new(name, url, line_no));
            i += 1;
            continue;
        }

        // Title line: pairs only with a bare URL on the next line
        if let Some(&(next_no, next)) = lines.get(i + 1) {
            if let Some((prefix, url)) = split_url_line(next) {
                if inline_name(prefix).is_none() {
                    entries.push(LinkEntry::new(line, url, next_no));
                    i += 2;
                    continue;
                }
            }
        }

        i += 1;
    }

    tracing::debug!("Extracted {} links from {} lines", entries.len(), lines.len());
    entries
}

/// Check whether a line carries an http(s) URL
pub fn is_url_line(line: &str) -> bool {
    SCHEMES.iter().any(|scheme| line.contains(scheme))
}

/// Split a line at its first URL scheme into `(prefix, url)`
fn split_url_line(line: &str) -> Option<(&str, &str)> {
    let start = SCHEMES.iter().filter_map(|scheme| line.find(scheme)).min()?;
    let (prefix, url) = line.split_at(start);
    Some((prefix, url.trim()))
}

/// Clean the text in front of a URL into a name, if anything is left
fn inline_name(prefix: &str) -> Option<String> {
    let name = prefix
        .trim()
        .trim_end_matches(|c: char| NAME_SEPARATORS.contains(&c) || c.is_whitespace())
        .trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Derive a name for a bare URL from its last path segment or host
pub fn name_from_url(url: &str) -> String {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let path = without_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or(without_scheme);

    let mut parts = path.split('/');
    let host = parts.next().unwrap_or("");

    let segment = parts
        .filter(|segment| !segment.is_empty())
        .last()
        .and_then(decode_segment);

    segment
        .or_else(|| decode_segment(host))
        .unwrap_or_else(|| url.to_string())
}

/// Percent-decode a URL piece, `None` if nothing but whitespace is left
fn decode_segment(segment: &str) -> Option<String> {
    let decoded = urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    let trimmed = decoded.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_layout() {
        let entries = extract_links("Lecture 1: https://cdn.example.com/a.m3u8");
        assert_eq!(
            entries,
            vec![LinkEntry::new("Lecture 1", "https://cdn.example.com/a.m3u8", 1)]
        );
    }

    #[test]
    fn test_inline_layout_keeps_colons_in_name() {
        let entries = extract_links("Part 2: Algebra: https://example.com/x.pdf");
        assert_eq!(entries[0].name, "Part 2: Algebra");
        assert_eq!(entries[0].url, "https://example.com/x.pdf");
    }

    #[test]
    fn test_inline_layout_other_separators() {
        let entries = extract_links("Intro - http://example.com/intro.mp4\nOutro | https://example.com/o");
        assert_eq!(entries[0].name, "Intro");
        assert_eq!(entries[0].url, "http://example.com/intro.mp4");
        assert_eq!(entries[1].name, "Outro");
    }

    #[test]
    fn test_title_then_url_layout() {
        let content = "Chapter 3 Notes\nhttps://example.com/notes.pdf\n";
        let entries = extract_links(content);
        assert_eq!(
            entries,
            vec![LinkEntry::new("Chapter 3 Notes", "https://example.com/notes.pdf", 2)]
        );
    }

    #[test]
    fn test_title_with_colon_then_url() {
        let content = "Chapter 1: Introduction\nhttps://example.com/intro.mp4";
        let entries = extract_links(content);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Chapter 1: Introduction");
    }

    #[test]
    fn test_blank_lines_between_title_and_url() {
        let content = "Title\n\n   \nhttps://example.com/v.mp4";
        let entries = extract_links(content);
        assert_eq!(entries, vec![LinkEntry::new("Title", "https://example.com/v.mp4", 4)]);
    }

    #[test]
    fn test_mixed_layouts_in_order() {
        let content = "\
Batch Overview
A: https://example.com/a.mp4
B Title
https://example.com/b.pdf
C: https://example.com/c
";
        let names: Vec<_> = extract_links(content).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["A", "B Title", "C"]);
    }

    #[test]
    fn test_title_followed_by_inline_line_is_dropped() {
        let content = "Stray heading\nLesson: https://example.com/l.mp4";
        let entries = extract_links(content);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Lesson");
        assert_eq!(entries[0].line, 2);
    }

    #[test]
    fn test_bare_url_without_title_gets_derived_name() {
        let entries = extract_links("https://example.com/videos/Lesson%201.mp4?token=abc");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Lesson 1.mp4");
    }

    #[test]
    fn test_consecutive_bare_urls() {
        let content = "https://example.com/one.pdf\nhttps://example.com/two.pdf";
        let entries = extract_links(content);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "one.pdf");
        assert_eq!(entries[1].name, "two.pdf");
    }

    #[test]
    fn test_unrecognized_lines_skipped() {
        let content = "just some text\nmore text\n";
        assert!(extract_links(content).is_empty());
        assert!(extract_links("").is_empty());
    }

    #[test]
    fn test_windows_line_endings() {
        let entries = extract_links("Title\r\nhttps://example.com/x.mp4\r\n");
        assert_eq!(entries[0].name, "Title");
        assert_eq!(entries[0].url, "https://example.com/x.mp4");
    }

    #[test]
    fn test_name_from_url() {
        assert_eq!(name_from_url("https://example.com/a/b/file.pdf"), "file.pdf");
        assert_eq!(name_from_url("https://example.com/a/b/"), "b");
        assert_eq!(name_from_url("https://example.com"), "example.com");
        assert_eq!(name_from_url("https://example.com/#frag"), "example.com");
        assert_eq!(name_from_url("https://"), "https://");
    }

    #[test]
    fn test_whitespace_segment_falls_back_to_host() {
        assert_eq!(name_from_url("https://example.com/videos/%20"), "example.com");
        assert_eq!(name_from_url("https://example.com/%09%20/"), "example.com");
        assert_eq!(name_from_url("https://example.com/%20Intro%20"), "Intro");

        let entries = extract_links("https://example.com/videos/%20\nhttps://example.com/%09%20/");
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| !e.name.trim().is_empty()));
    }

    #[test]
    fn test_is_url_line() {
        assert!(is_url_line("x https://a"));
        assert!(is_url_line("http://a"));
        assert!(!is_url_line("ftp://a"));
        assert!(!is_url_line("no url"));
    }

    #[test]
    fn test_every_url_line_emitted_once() {
        let content = "\
Heading only
A: https://a.example/1
https://a.example/2
Title
https://a.example/3
Title that leads nowhere
Other text
B - https://a.example/4
";
        let entries = extract_links(content);
        let url_lines: Vec<usize> = content
            .lines()
            .enumerate()
            .filter(|(_, l)| is_url_line(l))
            .map(|(i, _)| i + 1)
            .collect();
        let emitted: Vec<usize> = entries.iter().map(|e| e.line).collect();
        assert_eq!(emitted, url_lines);
        assert!(entries.iter().all(|e| !e.name.trim().is_empty() && !e.url.trim().is_empty()));
    }
}
