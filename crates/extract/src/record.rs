// ABOUTME: StructuredRecord and its nested blocks: metadata, content, media, and theme.
// ABOUTME: Built once per scan, immutable afterwards, serialized via serde_json.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The complete structured output of one extraction pass.
///
/// Constructed once from a single parsed document and never mutated after.
/// Serialization is deterministic: struct field order fixes key order and the
/// color/font sets are `BTreeSet`s, so identical input yields identical output.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StructuredRecord {
    pub metadata: Metadata,
    pub content: Content,
    pub media: Media,
    pub theme: Theme,
}

/// Page-level metadata: originating URL, title, and server-supplied timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Metadata {
    pub url: String,
    /// Trimmed text of the first `<title>`, or empty if none.
    pub title: String,
    /// Raw `Date` response header, or empty when absent or when the record
    /// was produced from a local HTML string.
    pub timestamp: String,
}

/// Textual content drawn from paragraph, heading, and generic block tags.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Content {
    pub paragraphs: Vec<String>,
    pub headings: Vec<String>,
    pub raw_blocks: Vec<String>,
    pub statistics: ContentStats,
}

/// Tag counts over the *unfiltered* selections.
///
/// A count may exceed the length of the corresponding sequence: tags whose
/// trimmed text is empty are dropped from the sequence but still counted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContentStats {
    pub paragraph_count: usize,
    pub heading_count: usize,
    pub block_count: usize,
}

/// Media inventory. Currently images only.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Media {
    pub images: Vec<ImageEntry>,
}

/// One `<img>` with a source attribute. Images without a source are excluded
/// entirely rather than recorded with an empty url.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ImageEntry {
    pub url: String,
    pub alt: String,
    pub title: String,
}

/// The color/font/layout/style-element summary derived from static styling
/// signals in the document.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Theme {
    pub colors: ColorPalette,
    pub fonts: FontInfo,
    pub layout: Layout,
    pub style_elements: StyleElements,
}

/// Harvested color signals.
///
/// Accent colors are literals (`#hex`, `rgb()`, `rgba()`) found in embedded
/// stylesheet text. Background/text entries are *entire inline style strings*
/// that mention "background" / "color:" — intentionally low-fidelity, kept
/// for compatibility with existing consumers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ColorPalette {
    pub background_colors: BTreeSet<String>,
    pub text_colors: BTreeSet<String>,
    pub accent_colors: BTreeSet<String>,
}

/// Font declarations harvested from stylesheets and inline styles.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FontInfo {
    pub families: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
}

/// Coarse layout booleans computed from tag and class-name pattern presence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Layout {
    pub has_header: bool,
    pub has_footer: bool,
    pub has_sidebar: bool,
    pub responsive_elements: bool,
    pub grid_system: bool,
}

/// UI construct counts. Tag matches and class matches are summed
/// independently, so `<button class="btn">` counts twice for buttons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StyleElements {
    pub buttons: usize,
    pub forms: usize,
    pub links: usize,
    pub cards: usize,
    pub icons: usize,
}

impl StructuredRecord {
    /// Render the record as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render the record as compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
