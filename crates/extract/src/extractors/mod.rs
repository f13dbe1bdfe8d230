// ABOUTME: Extraction sub-algorithms that turn a parsed document into a StructuredRecord.
// ABOUTME: Four independent passes over the same tree: metadata, content, media, theme.

pub mod content;
pub mod media;
pub mod theme;

use scraper::Html;

use crate::record::{Media, Metadata, StructuredRecord};

/// Build a [`StructuredRecord`] from a parsed document.
///
/// Pure function of the tree, the originating URL, and the server timestamp;
/// no network access. Each sub-extraction tolerates absence: a document with
/// no matches for a signal yields empty/zero fields, never an error.
pub fn extract_record(doc: &Html, url: &str, timestamp: &str) -> StructuredRecord {
    StructuredRecord {
        metadata: Metadata {
            url: url.to_string(),
            title: content::extract_title(doc),
            timestamp: timestamp.to_string(),
        },
        content: content::extract_content(doc),
        media: Media {
            images: media::extract_images(doc, url),
        },
        theme: theme::extract_theme(doc),
    }
}
