// ABOUTME: Title and text-content extraction: paragraphs, headings, and generic blocks.
// ABOUTME: Sequences drop empty-text tags while the statistics count every matching tag.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::record::{Content, ContentStats};

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("static selector"));
static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("static selector"));
static HEADING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3").expect("static selector"));
static BLOCK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div").expect("static selector"));

/// Trimmed text of the first `<title>` element, or empty string if none.
pub fn extract_title(doc: &Html) -> String {
    doc.select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Select all elements matching `sel`, in document order, returning the
/// non-empty trimmed texts alongside the total (unfiltered) match count.
fn select_texts(doc: &Html, sel: &Selector) -> (Vec<String>, usize) {
    let mut texts = Vec::new();
    let mut total = 0usize;
    for el in doc.select(sel) {
        total += 1;
        let text = el.text().collect::<String>();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            texts.push(trimmed.to_string());
        }
    }
    (texts, total)
}

/// Extract the content block: paragraph, heading, and generic block texts plus
/// their raw tag counts.
pub fn extract_content(doc: &Html) -> Content {
    let (paragraphs, paragraph_count) = select_texts(doc, &PARAGRAPH_SELECTOR);
    let (headings, heading_count) = select_texts(doc, &HEADING_SELECTOR);
    let (raw_blocks, block_count) = select_texts(doc, &BLOCK_SELECTOR);

    Content {
        paragraphs,
        headings,
        raw_blocks,
        statistics: ContentStats {
            paragraph_count,
            heading_count,
            block_count,
        },
    }
}
