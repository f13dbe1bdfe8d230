// ABOUTME: Prompt construction: renders a StructuredRecord into the analysis request text.
// ABOUTME: Sections cover metadata, content statistics, media, and theme with short samples.

use pagescope_extract::StructuredRecord;

/// System instructions for the webpage analysis completion.
pub const ANALYZE_INSTRUCTIONS: &str = "You will receive structured data extracted from a \
webpage. Analyze the webpage and give the analysis in the language of the webpage.";

/// Build the analysis prompt from a structured record.
///
/// Long sequences are sampled (two paragraphs, three image alt texts); the
/// theme blocks are embedded whole since they are already compact summaries.
pub fn build_analysis_prompt(record: &StructuredRecord) -> String {
    let paragraph_sample = if record.content.paragraphs.is_empty() {
        "No paragraphs found".to_string()
    } else {
        format!(
            "{:?}",
            &record.content.paragraphs[..record.content.paragraphs.len().min(2)]
        )
    };

    let image_sample = if record.media.images.is_empty() {
        "No images found".to_string()
    } else {
        let alts: Vec<&str> = record
            .media
            .images
            .iter()
            .take(3)
            .map(|img| img.alt.as_str())
            .collect();
        format!("{:?}", alts)
    };

    format!(
        "Analyze this webpage with the following components:\n\
         \n\
         1. Metadata Analysis:\n\
         - URL: {url}\n\
         - Title: {title}\n\
         - Timestamp: {timestamp}\n\
         \n\
         2. Content Analysis:\n\
         - Paragraph Count: {paragraph_count}\n\
         - Heading Count: {heading_count}\n\
         - Text Content Sample: {paragraph_sample}\n\
         \n\
         3. Media Analysis:\n\
         - Total Images: {image_count}\n\
         - Image Details: {image_sample}\n\
         \n\
         4. Theme Analysis:\n\
         - Color Scheme: {colors:?}\n\
         - Font Families: {families:?}\n\
         - Layout Structure: {layout:?}\n\
         - UI Elements: {style_elements:?}\n\
         \n\
         Please provide a comprehensive analysis addressing each component above, including:\n\
         1. Overall webpage structure and organization\n\
         2. Content quality and relevance\n\
         3. Visual design and user experience\n\
         4. Technical implementation observations\n\
         5. Recommendations for improvement\n",
        url = record.metadata.url,
        title = record.metadata.title,
        timestamp = record.metadata.timestamp,
        paragraph_count = record.content.statistics.paragraph_count,
        heading_count = record.content.statistics.heading_count,
        paragraph_sample = paragraph_sample,
        image_count = record.media.images.len(),
        image_sample = image_sample,
        colors = record.theme.colors,
        families = record.theme.fonts.families,
        layout = record.theme.layout,
        style_elements = record.theme.style_elements,
    )
}
