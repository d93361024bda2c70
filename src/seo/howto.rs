//! `HowTo` schema for conversion routes.
//!
//! Every `{from}-to-{to}` route gets a 3-step guide (upload, convert,
//! download). With `[schema] detailed_pdf_steps`, PDF routes get the
//! 4-step PDF guides instead.

use super::split_conversion;
use super::types::{
    Context, HowTo, HowToStep, HowToSupply, HowToTool, MonetaryAmount, tag,
};
use crate::config::SchemaConfig;

/// Format name of the multi-image source (`/images-to-pdf`).
const MULTI_IMAGE_FORMAT: &str = "Images";

fn step(position: u32, name: String, text: String, image: String) -> HowToStep {
    HowToStep {
        kind: tag::HowToStep::HowToStep,
        position,
        name,
        text,
        image: Some(image),
    }
}

/// Upload, convert and download steps of a format converter.
pub fn converter_steps(from: &str, to: &str, base_url: &str) -> Vec<HowToStep> {
    let folder = format!("{base_url}/images/howto/{from}-to-{to}");
    let (from, to) = (from.to_uppercase(), to.to_uppercase());
    vec![
        step(
            1,
            format!("Upload {from} File"),
            format!("Click the upload button or drag and drop your {from} file into the converter area."),
            format!("{folder}/step-upload.webp"),
        ),
        step(
            2,
            "Start Conversion".into(),
            format!("Click the \"Convert\" button to begin the {from} to {to} conversion process."),
            format!("{folder}/step-convert.webp"),
        ),
        step(
            3,
            format!("Download {to} File"),
            format!("Once conversion is complete, download your converted {to} file instantly."),
            format!("{folder}/step-download.webp"),
        ),
    ]
}

/// Steps for turning PDF pages into `format` images.
pub fn pdf_to_image_steps(format: &str, base_url: &str) -> Vec<HowToStep> {
    let folder = format!("{base_url}/images/howto/pdf-to-{}", format.to_lowercase());
    vec![
        step(
            1,
            "Upload PDF File".into(),
            "Select and upload the PDF document you want to convert to images.".into(),
            format!("{folder}/step-upload-pdf.webp"),
        ),
        step(
            2,
            "Choose Pages".into(),
            "Select which pages you want to convert or convert all pages.".into(),
            format!("{folder}/step-select-pages.webp"),
        ),
        step(
            3,
            "Convert to Images".into(),
            format!("Click convert to transform your PDF pages into high-quality {format} images."),
            format!("{folder}/step-convert-pdf.webp"),
        ),
        step(
            4,
            "Download Images".into(),
            format!("Download individual {format} images or get them all in a ZIP file."),
            format!("{folder}/step-download-images.webp"),
        ),
    ]
}

/// Steps for combining `format` images into a PDF.
///
/// `"Images"` is the multi-format source and uses the `images-to-pdf` folder.
pub fn images_to_pdf_steps(format: &str, base_url: &str) -> Vec<HowToStep> {
    let multi = format == MULTI_IMAGE_FORMAT;
    let folder = if multi {
        format!("{base_url}/images/howto/images-to-pdf")
    } else {
        format!("{base_url}/images/howto/{}-to-pdf", format.to_lowercase())
    };

    let (select_name, select_text, arrange_text, create_text) = if multi {
        (
            format!("Select {format} Files"),
            "Upload multiple images you want to convert to PDF.".to_string(),
            "Drag and drop images to arrange them in your preferred order.".to_string(),
            "Click create to convert all images into a PDF document.".to_string(),
        )
    } else {
        (
            format!("Select {format} Images"),
            format!("Upload your {format} images you want to convert to PDF."),
            format!("Arrange your {format} images in the desired order for the PDF."),
            format!("Click create to convert your {format} images into a PDF document."),
        )
    };

    vec![
        step(1, select_name, select_text, format!("{folder}/step-select-images.webp")),
        step(2, "Arrange Order".into(), arrange_text, format!("{folder}/step-arrange-order.webp")),
        step(3, "Create PDF".into(), create_text, format!("{folder}/step-create-pdf.webp")),
        step(
            4,
            "Download PDF".into(),
            format!("Download your {format} to PDF converted document instantly."),
            format!("{folder}/step-download-pdf.webp"),
        ),
    ]
}

/// Steps for a `{from}-to-{to}` route.
fn steps_for(from: &str, to: &str, base_url: &str, detailed_pdf: bool) -> Vec<HowToStep> {
    if detailed_pdf {
        if from == "pdf" {
            return pdf_to_image_steps(&to.to_uppercase(), base_url);
        }
        if to == "pdf" {
            let format = if from == "images" {
                MULTI_IMAGE_FORMAT.to_string()
            } else {
                from.to_uppercase()
            };
            return images_to_pdf_steps(&format, base_url);
        }
    }
    converter_steps(from, to, base_url)
}

/// HowTo for `path`, or `None` unless it is a `{from}-to-{to}` route.
pub fn how_to_schema(path: &str, base_url: &str, schema: &SchemaConfig) -> Option<HowTo> {
    let (from, to) = split_conversion(path)?;
    let (from_upper, to_upper) = (from.to_uppercase(), to.to_uppercase());

    Some(HowTo {
        context: Context::SchemaOrg,
        kind: tag::HowTo::HowTo,
        name: format!("How to Convert {from_upper} to {to_upper}"),
        description: format!(
            "Step-by-step guide to convert {from_upper} images to {to_upper} format online for free."
        ),
        url: format!("{base_url}{path}"),
        image: Some(format!("{base_url}/og-image.webp")),
        total_time: "PT2M".into(),
        estimated_cost: MonetaryAmount {
            kind: tag::MonetaryAmount::MonetaryAmount,
            currency: "USD".into(),
            value: "0".into(),
        },
        supply: ["Internet Connection", "Web Browser"]
            .into_iter()
            .map(|name| HowToSupply {
                kind: tag::HowToSupply::HowToSupply,
                name: name.into(),
            })
            .collect(),
        tool: vec![HowToTool {
            kind: tag::HowToTool::HowToTool,
            name: format!("{} Online Tool", schema.brand),
        }],
        step: steps_for(from, to, base_url, schema.detailed_pdf_steps),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.com";

    fn detailed() -> SchemaConfig {
        SchemaConfig {
            detailed_pdf_steps: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_not_applicable() {
        let schema = SchemaConfig::default();
        for path in ["/", "/privacy-policy", "/compress-image", "/pdf-tools"] {
            assert!(how_to_schema(path, BASE, &schema).is_none(), "{path}");
        }
    }

    #[test]
    fn test_converter_guide() {
        let howto = how_to_schema("/png-to-webp", BASE, &SchemaConfig::default()).unwrap();
        assert_eq!(howto.name, "How to Convert PNG to WEBP");
        assert_eq!(howto.url, "https://example.com/png-to-webp");
        assert_eq!(howto.total_time, "PT2M");
        assert_eq!(howto.tool[0].name, "ImageConverter Online Tool");
        assert_eq!(howto.supply.len(), 2);

        let positions: Vec<_> = howto.step.iter().map(|s| s.position).collect();
        assert_eq!(positions, [1, 2, 3]);
        assert_eq!(howto.step[0].name, "Upload PNG File");
        assert_eq!(howto.step[2].name, "Download WEBP File");
        assert_eq!(
            howto.step[1].image.as_deref(),
            Some("https://example.com/images/howto/png-to-webp/step-convert.webp")
        );
    }

    #[test]
    fn test_pdf_routes_default_to_three_steps() {
        let howto = how_to_schema("/pdf-to-jpg", BASE, &SchemaConfig::default()).unwrap();
        assert_eq!(howto.step.len(), 3);
    }

    #[test]
    fn test_detailed_pdf_to_image() {
        let howto = how_to_schema("/pdf-to-jpg", BASE, &detailed()).unwrap();
        assert_eq!(howto.step.len(), 4);
        assert_eq!(howto.step[0].name, "Upload PDF File");
        assert!(howto.step[2].text.contains("high-quality JPG images"));
        assert_eq!(
            howto.step[3].image.as_deref(),
            Some("https://example.com/images/howto/pdf-to-jpg/step-download-images.webp")
        );
    }

    #[test]
    fn test_detailed_image_to_pdf() {
        let howto = how_to_schema("/png-to-pdf", BASE, &detailed()).unwrap();
        assert_eq!(howto.step.len(), 4);
        assert_eq!(howto.step[0].name, "Select PNG Images");
        assert!(howto.step[0].image.as_deref().unwrap().contains("/png-to-pdf/"));
    }

    #[test]
    fn test_multi_image_folder() {
        let steps = images_to_pdf_steps("Images", BASE);
        assert_eq!(steps[0].name, "Select Images Files");
        assert_eq!(steps[0].text, "Upload multiple images you want to convert to PDF.");
        assert!(steps.iter().all(|s| s.image.as_deref().unwrap().contains("/images-to-pdf/")));

        let howto = how_to_schema("/images-to-pdf", BASE, &detailed()).unwrap();
        assert_eq!(howto.step, steps);
    }
}
