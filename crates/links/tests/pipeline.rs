use links::{
    categorize, extract_links, html_file_name, page_title, render_page, PageOptions, PageSummary,
    PlayerRewrites,
};

const BATCH: &str = include_str!("fixtures/batch.txt");

fn rewrites() -> PlayerRewrites {
    PlayerRewrites::parse("player.example.net/=>https://watch.example/embed?src={url_encoded}&t={token}", "tk")
        .expect("valid rules")
}

#[test]
fn test_batch_file_extraction() {
    let entries = extract_links(BATCH);
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Class 01: Introduction",
            "Class 01 Notes",
            "Class 02",
            "Class 02 Notes",
            "Revision Playlist",
            "Telegram group",
            "index",
        ]
    );
    assert!(entries.iter().all(|e| !e.name.is_empty() && !e.url.is_empty()));
}

#[test]
fn test_batch_file_categories() {
    let categorized = categorize(&extract_links(BATCH), &rewrites());

    let summary = PageSummary::from(&categorized);
    assert_eq!(summary, PageSummary { videos: 3, pdfs: 2, others: 2 });

    assert_eq!(categorized.videos[0].name, "Class 01: Introduction");
    assert_eq!(
        categorized.videos[2].url,
        "https://watch.example/embed?src=https%3A%2F%2Fplayer.example.net%2Fstream%2F3%2Findex&t=tk"
    );
    assert_eq!(categorized.others[0].url, "https://www.youtube.com/watch?v=AbCdEf12345");
    assert_eq!(categorized.others[1].url, "https://t.me/example_group");
}

#[test]
fn test_batch_file_page() {
    let file_name = "Organic_Chemistry.txt";
    let categorized = categorize(&extract_links(BATCH), &rewrites());
    let html = render_page(&categorized, &PageOptions::new(page_title(file_name)));

    assert_eq!(html_file_name(file_name), "Organic_Chemistry.html");
    assert!(html.contains("<title>Organic_Chemistry</title>"));
    assert!(html.contains("Video 003"));
    assert!(html.contains("PDF 002"));
    assert!(html.contains("Link 002"));
    assert!(html.contains("class02/video.mp4?expires=1700000000"));
}

#[test]
fn test_pipeline_is_repeatable() {
    let first = render_page(&categorize(&extract_links(BATCH), &rewrites()), &PageOptions::new("x"));
    let second = render_page(&categorize(&extract_links(BATCH), &rewrites()), &PageOptions::new("x"));
    assert_eq!(first, second);
}
