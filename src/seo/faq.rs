//! `FAQPage` schema.
//!
//! Converter routes (`/png-to-webp`) get format-specific questions, the
//! compressor gets compression questions, and every applicable page ends
//! with the general site questions.

use super::types::{Context, FaqPage, Question, tag};
use super::{CONVERTER_MARKER, split_conversion};

/// Image editing routes that carry the general FAQ.
const EDITING_TOOLS: [&str; 4] = [
    "/compress-image",
    "/resize-image",
    "/crop-image",
    "/remove-background",
];

const COMPRESSOR_ROUTE: &str = "/compress-image";

/// Whether `path` gets an FAQ at all.
///
/// The homepage, converter pages (`-to-` or `pdf` in the path) and the
/// image editing tools do.
pub fn has_faq(path: &str) -> bool {
    let is_root = path == "/";
    let is_converter = !is_root && (path.contains(CONVERTER_MARKER) || path.contains("pdf"));
    is_root || is_converter || EDITING_TOOLS.contains(&path)
}

/// Questions shared by every page with an FAQ.
pub fn common_faqs(brand: &str) -> Vec<Question> {
    vec![
        Question::new(
            format!("Is {brand} free to use?"),
            format!(
                "Yes, {brand} is completely free to use. There are no hidden fees, \
                 subscriptions, or watermarks on your converted files."
            ),
        ),
        Question::new(
            format!("Are my files secure when using {brand}?"),
            "Yes, your files are completely secure. All conversions happen in your browser \
             locally, and no files are uploaded to our servers. Your privacy is our priority.",
        ),
        Question::new(
            format!("What file formats does {brand} support?"),
            format!(
                "{brand} supports all major image formats including PNG, JPG/JPEG, WebP, GIF, \
                 and PDF. You can convert between any of these formats quickly and easily."
            ),
        ),
        Question::new(
            "Is there a file size limit?",
            format!(
                "{brand} can handle files of various sizes. Since processing happens in your \
                 browser, very large files may take longer to process depending on your device \
                 capabilities."
            ),
        ),
        Question::new(
            "Do I need to install any software?",
            format!(
                "No installation required! {brand} works directly in your web browser. Just \
                 visit our website and start converting your images immediately."
            ),
        ),
    ]
}

/// Questions for a `{from}-to-{to}` converter. Format names are uppercased.
pub fn converter_faqs(from: &str, to: &str) -> Vec<Question> {
    let (from, to) = (from.to_uppercase(), to.to_uppercase());
    vec![
        Question::new(
            format!("How do I convert {from} to {to}?"),
            format!(
                "Converting {from} to {to} is easy: 1) Upload your {from} file, 2) Click \
                 convert, 3) Download your {to} file. The conversion happens instantly in your \
                 browser."
            ),
        ),
        Question::new(
            format!("Will the quality be maintained when converting {from} to {to}?"),
            format!(
                "Yes, our {from} to {to} converter maintains high quality while optimizing file \
                 size. You can adjust quality settings if needed."
            ),
        ),
    ]
}

pub fn compressor_faqs() -> Vec<Question> {
    vec![
        Question::new(
            "How to compress image to 20KB?",
            "To compress an image to 20KB: 1) Upload your image, 2) Select \"Target File Size\" \
             mode, 3) Choose 20KB preset or enter 20 manually, 4) Click \"Compress Now\". Our \
             tool will automatically optimize the image to reach approximately 20KB while \
             maintaining the best possible quality.",
        ),
        Question::new(
            "How to compress image without losing quality?",
            "To compress images without losing quality: 1) Upload your image, 2) Select \"By \
             Quality\" mode, 3) Set quality to 80-90%, 4) Click \"Compress Now\". This provides \
             a good balance between file size reduction and visual quality. For web use, 80% \
             quality is usually optimal.",
        ),
    ]
}

/// Route-specific questions, placed before the common ones.
fn specific_faqs(path: &str) -> Vec<Question> {
    if let Some((from, to)) = split_conversion(path) {
        converter_faqs(from, to)
    } else if path == COMPRESSOR_ROUTE {
        compressor_faqs()
    } else {
        Vec::new()
    }
}

/// FAQ for `path`, or `None` when the page has none.
pub fn faq_schema(path: &str, base_url: &str, brand: &str) -> Option<FaqPage> {
    if !has_faq(path) {
        return None;
    }

    let mut main_entity = specific_faqs(path);
    main_entity.extend(common_faqs(brand));

    Some(FaqPage {
        context: Context::SchemaOrg,
        kind: tag::FaqPage::FaqPage,
        url: format!("{base_url}{path}"),
        main_entity,
    })
}
