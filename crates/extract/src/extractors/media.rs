// ABOUTME: Image inventory extraction from img tags with source attribute resolution.
// ABOUTME: Relative sources are joined against the base URL with a simplified slash join.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::record::ImageEntry;

static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("static selector"));

/// Resolve an image source against the page's base URL.
///
/// Sources already carrying an `http` prefix pass through unchanged. Anything
/// else is joined as `{base}/{src}` with redundant slashes stripped. This is a
/// simplified join by design: `../` segments are not resolved.
fn resolve_src(base_url: &str, src: &str) -> String {
    if src.starts_with("http") {
        return src.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        src.trim_start_matches('/')
    )
}

/// Extract every `<img>` that has a `src` attribute.
///
/// Images without a source are excluded entirely; missing `alt`/`title`
/// attributes default to the empty string.
pub fn extract_images(doc: &Html, base_url: &str) -> Vec<ImageEntry> {
    let mut images = Vec::new();
    for img in doc.select(&IMG_SELECTOR) {
        let Some(src) = img.value().attr("src") else {
            continue;
        };
        images.push(ImageEntry {
            url: resolve_src(base_url, src),
            alt: img.value().attr("alt").unwrap_or_default().to_string(),
            title: img.value().attr("title").unwrap_or_default().to_string(),
        });
    }
    images
}
