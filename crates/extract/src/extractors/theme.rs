// ABOUTME: Theme extraction: colors, fonts, layout booleans, and style-element counts.
// ABOUTME: Regex scraping of stylesheet text and inline styles, low-fidelity by design.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::record::{ColorPalette, FontInfo, Layout, StyleElements, Theme};

static STYLE_TAG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("style").expect("static selector"));
static INLINE_STYLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[style]").expect("static selector"));
static CLASSED_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[class]").expect("static selector"));
static VIEWPORT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta[name='viewport']").expect("static selector"));

/// Color literals in stylesheet text: hex, rgb(), rgba().
static COLOR_LITERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[0-9a-fA-F]{3,6}|rgb\([^)]+\)|rgba\([^)]+\)").expect("static regex"));
static FONT_FAMILY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"font-family:\s*([^;}]+)").expect("static regex"));
static FONT_SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"font-size:\s*([^;}]+)").expect("static regex"));

static HEADER_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)header|nav|menu").expect("static regex"));
static FOOTER_CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)footer").expect("static regex"));
static SIDEBAR_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)sidebar|side-nav").expect("static regex"));
static GRID_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)grid|row|col|flex").expect("static regex"));
static BUTTON_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)btn|button").expect("static regex"));
static CARD_CLASS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)card").expect("static regex"));
static ICON_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)icon|fa-|material-icons").expect("static regex"));

/// Extract the full theme block in four passes over the tree.
pub fn extract_theme(doc: &Html) -> Theme {
    Theme {
        colors: extract_colors(doc),
        fonts: extract_fonts(doc),
        layout: analyze_layout(doc),
        style_elements: extract_style_elements(doc),
    }
}

/// True if any element's class attribute matches the pattern.
fn class_matches(doc: &Html, re: &Regex) -> bool {
    doc.select(&CLASSED_SELECTOR)
        .any(|el| el.value().attr("class").is_some_and(|c| re.is_match(c)))
}

/// Count elements whose class attribute matches the pattern.
fn count_class_matches(doc: &Html, re: &Regex) -> usize {
    doc.select(&CLASSED_SELECTOR)
        .filter(|el| el.value().attr("class").is_some_and(|c| re.is_match(c)))
        .count()
}

/// True if any element with the given tag name exists.
fn has_tag(doc: &Html, tag: &str) -> bool {
    Selector::parse(tag)
        .ok()
        .is_some_and(|sel| doc.select(&sel).next().is_some())
}

/// Count elements with the given tag name.
fn count_tag(doc: &Html, tag: &str) -> usize {
    Selector::parse(tag)
        .ok()
        .map(|sel| doc.select(&sel).count())
        .unwrap_or(0)
}

/// Harvest the color palette.
///
/// Accent colors come from embedded stylesheet literals. Background and text
/// entries are whole inline style strings keyed on a substring test; a single
/// style attribute can land in both sets.
fn extract_colors(doc: &Html) -> ColorPalette {
    let mut colors = ColorPalette::default();

    for style in doc.select(&STYLE_TAG_SELECTOR) {
        let css = style.text().collect::<String>();
        for m in COLOR_LITERAL_RE.find_iter(&css) {
            colors.accent_colors.insert(m.as_str().to_string());
        }
    }

    for el in doc.select(&INLINE_STYLE_SELECTOR) {
        let Some(style) = el.value().attr("style") else {
            continue;
        };
        let lower = style.to_lowercase();
        if lower.contains("background") {
            colors.background_colors.insert(style.to_string());
        }
        if lower.contains("color:") {
            colors.text_colors.insert(style.to_string());
        }
    }

    colors
}

/// Harvest font families and sizes from stylesheets and inline styles.
///
/// Stylesheet text contributes every declaration; an inline style contributes
/// only its first match per property. Captured values are kept verbatim.
fn extract_fonts(doc: &Html) -> FontInfo {
    let mut fonts = FontInfo::default();

    for style in doc.select(&STYLE_TAG_SELECTOR) {
        let css = style.text().collect::<String>();
        for cap in FONT_FAMILY_RE.captures_iter(&css) {
            fonts.families.insert(cap[1].to_string());
        }
        for cap in FONT_SIZE_RE.captures_iter(&css) {
            fonts.sizes.insert(cap[1].to_string());
        }
    }

    for el in doc.select(&INLINE_STYLE_SELECTOR) {
        let Some(style) = el.value().attr("style") else {
            continue;
        };
        if let Some(cap) = FONT_FAMILY_RE.captures(style) {
            fonts.families.insert(cap[1].to_string());
        }
        if let Some(cap) = FONT_SIZE_RE.captures(style) {
            fonts.sizes.insert(cap[1].to_string());
        }
    }

    fonts
}

/// Compute the layout booleans from tag presence and class-name patterns.
///
/// The `<sidebar>` tag probe is not a real HTML element and never matches in
/// practice; it is attempted for completeness, matching the class probe's
/// companion behavior.
fn analyze_layout(doc: &Html) -> Layout {
    Layout {
        has_header: has_tag(doc, "header") || class_matches(doc, &HEADER_CLASS_RE),
        has_footer: has_tag(doc, "footer") || class_matches(doc, &FOOTER_CLASS_RE),
        has_sidebar: has_tag(doc, "sidebar") || class_matches(doc, &SIDEBAR_CLASS_RE),
        responsive_elements: doc.select(&VIEWPORT_SELECTOR).next().is_some(),
        grid_system: class_matches(doc, &GRID_CLASS_RE),
    }
}

/// Count common UI constructs.
///
/// Tag matches and class matches are summed independently, so an element
/// matching both contributes twice to its count.
fn extract_style_elements(doc: &Html) -> StyleElements {
    StyleElements {
        buttons: count_tag(doc, "button") + count_class_matches(doc, &BUTTON_CLASS_RE),
        forms: count_tag(doc, "form"),
        links: count_tag(doc, "a"),
        cards: count_class_matches(doc, &CARD_CLASS_RE),
        icons: count_tag(doc, "i") + count_class_matches(doc, &ICON_CLASS_RE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stylesheet_literals_become_accent_colors() {
        let doc = Html::parse_document(
            "<html><head><style>.a{color:#fff;border:1px solid #a1b2c3}\
             .b{background:rgb(10, 20, 30)}.c{outline:rgba(0,0,0,0.5)}</style></head></html>",
        );
        let colors = extract_colors(&doc);
        assert!(colors.accent_colors.contains("#fff"));
        assert!(colors.accent_colors.contains("#a1b2c3"));
        assert!(colors.accent_colors.contains("rgb(10, 20, 30)"));
        assert!(colors.accent_colors.contains("rgba(0,0,0,0.5)"));
        assert!(colors.background_colors.is_empty());
        assert!(colors.text_colors.is_empty());
    }

    #[test]
    fn inline_style_lands_in_both_color_sets() {
        let doc = Html::parse_document(
            r#"<html><body><div style="background-color:red;color:blue">x</div></body></html>"#,
        );
        let colors = extract_colors(&doc);
        let style = "background-color:red;color:blue";
        assert!(colors.background_colors.contains(style));
        assert!(colors.text_colors.contains(style));
        // The whole style string is the entry, not the color value.
        assert_eq!(colors.background_colors.len(), 1);
    }

    #[test]
    fn inline_background_without_color_declaration() {
        let doc = Html::parse_document(
            r#"<html><body><div style="Background: url(x.png)">x</div></body></html>"#,
        );
        let colors = extract_colors(&doc);
        assert_eq!(colors.background_colors.len(), 1);
        assert!(colors.text_colors.is_empty());
    }

    #[test]
    fn fonts_from_stylesheet_and_inline() {
        let doc = Html::parse_document(
            r#"<html><head><style>body{font-family: Arial, sans-serif;font-size: 14px}
            h1{font-size: 2em}</style></head>
            <body><p style="font-family: Georgia;font-size: 12px">x</p></body></html>"#,
        );
        let fonts = extract_fonts(&doc);
        assert!(fonts.families.contains("Arial, sans-serif"));
        assert!(fonts.families.contains("Georgia"));
        assert!(fonts.sizes.contains("14px"));
        assert!(fonts.sizes.contains("2em"));
        assert!(fonts.sizes.contains("12px"));
    }

    #[test]
    fn layout_from_tags() {
        let doc = Html::parse_document(
            "<html><head><meta name=\"viewport\" content=\"width=device-width\"></head>\
             <body><header>h</header><footer>f</footer></body></html>",
        );
        let layout = analyze_layout(&doc);
        assert!(layout.has_header);
        assert!(layout.has_footer);
        assert!(!layout.has_sidebar);
        assert!(layout.responsive_elements);
        assert!(!layout.grid_system);
    }

    #[test]
    fn layout_from_class_patterns() {
        let doc = Html::parse_document(
            r#"<html><body>
            <div class="main-NAV">n</div>
            <div class="page-footer">f</div>
            <div class="side-nav">s</div>
            <div class="flex-container">g</div>
            </body></html>"#,
        );
        let layout = analyze_layout(&doc);
        assert!(layout.has_header);
        assert!(layout.has_footer);
        assert!(layout.has_sidebar);
        assert!(!layout.responsive_elements);
        assert!(layout.grid_system);
    }

    #[test]
    fn sidebar_element_matches_when_literally_present() {
        // Not a real HTML tag, but the probe is attempted regardless.
        let doc = Html::parse_document("<html><body><sidebar>s</sidebar></body></html>");
        assert!(analyze_layout(&doc).has_sidebar);
    }

    #[test]
    fn button_with_btn_class_counts_twice() {
        let doc = Html::parse_document(
            r#"<html><head><style>.btn{color:#fff}</style></head>
            <body><button class="btn">Go</button></body></html>"#,
        );
        let elements = extract_style_elements(&doc);
        assert_eq!(elements.buttons, 2);
    }

    #[test]
    fn style_element_counts() {
        let doc = Html::parse_document(
            r#"<html><body>
            <form><a href="/1">1</a><a href="/2">2</a></form>
            <div class="card">c</div><div class="card-body">c</div>
            <i>i</i><span class="fa-home">f</span>
            </body></html>"#,
        );
        let elements = extract_style_elements(&doc);
        assert_eq!(elements.forms, 1);
        assert_eq!(elements.links, 2);
        assert_eq!(elements.cards, 2);
        assert_eq!(elements.icons, 2);
        assert_eq!(elements.buttons, 0);
    }

    #[test]
    fn duplicate_signals_deduplicate_in_sets() {
        let doc = Html::parse_document(
            "<html><head><style>.a{color:#fff}.b{color:#fff}</style></head></html>",
        );
        let colors = extract_colors(&doc);
        assert_eq!(colors.accent_colors.len(), 1);
    }
}
