//! HTML parser for extracting gated image links
//!
//! Anchors are scanned in document order. The first anchor whose `href`
//! contains the target prefix opens the gate, and the gate stays open for
//! every anchor after it regardless of that anchor's own `href`. Each eligible
//! anchor contributes the `src` of its first nested `<img>`, if non-empty.

use crate::output::ImageRecord;
use scraper::{ElementRef, Html};
use url::Url;

/// A qualifying image found inside an eligible anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    /// Position of the anchor among all anchors on the page (0-based)
    pub anchor_index: usize,

    /// The image `src` attribute with surrounding whitespace removed
    pub src: String,
}

impl ImageCandidate {
    /// Local file name for this image: `{anchor_index}.jpg`
    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.anchor_index)
    }

    pub fn to_record(&self) -> ImageRecord {
        ImageRecord::new(self.src.clone())
    }
}

/// Result of scanning one page
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Total number of anchors on the page
    pub anchors_scanned: usize,

    /// Qualifying images in discovery order
    pub candidates: Vec<ImageCandidate>,
}

/// Element descendants of `root` (including `root`) with the given tag name,
/// in document order
fn elements_named<'a>(
    root: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |element| element.value().name() == name)
}

/// Lazily yields the anchors at or after the gate-opening anchor
///
/// Items are `(anchor_index, anchor)` where `anchor_index` counts all anchors
/// in the document, eligible or not. A missing `href` is treated as empty and
/// never opens the gate.
pub fn eligible_anchors<'a>(
    document: &'a Html,
    prefix: &'a str,
) -> impl Iterator<Item = (usize, ElementRef<'a>)> + 'a {
    elements_named(document.root_element(), "a")
        .enumerate()
        .skip_while(move |(_, anchor)| {
            !anchor.value().attr("href").unwrap_or("").contains(prefix)
        })
}

/// Parses HTML content and extracts the qualifying images
///
/// # Arguments
///
/// * `html` - The HTML content to parse
/// * `prefix` - Href substring that opens the gate
///
/// # Returns
///
/// The anchor count and the qualifying images, in document order. Repeated
/// URLs are kept.
///
/// # Example
///
/// ```
/// use image_harvester::crawler::extract_image_urls;
///
/// let html = r#"<a href="https://site/x"><img src="https://x/a.jpg"></a>"#;
/// let extraction = extract_image_urls(html, "https://site/");
/// assert_eq!(extraction.candidates[0].src, "https://x/a.jpg");
/// assert_eq!(extraction.candidates[0].file_name(), "0.jpg");
/// ```
pub fn extract_image_urls(html: &str, prefix: &str) -> Extraction {
    let document = Html::parse_document(html);

    let anchors_scanned = elements_named(document.root_element(), "a").count();

    let candidates = eligible_anchors(&document, prefix)
        .filter_map(|(anchor_index, anchor)| {
            let img = elements_named(anchor, "img").next()?;
            let src = img.value().attr("src").map(str::trim).unwrap_or("");

            if src.is_empty() {
                tracing::trace!("Anchor {} has an image without src", anchor_index);
                return None;
            }

            Some(ImageCandidate {
                anchor_index,
                src: src.to_string(),
            })
        })
        .collect();

    Extraction {
        anchors_scanned,
        candidates,
    }
}

/// Resolves an image `src` against the page's final URL for downloading
///
/// Returns None for sources that cannot be resolved or that resolve to a
/// scheme other than HTTP(S) (e.g. `data:` URIs).
pub fn resolve_image_url(src: &str, page_url: &Url) -> Option<Url> {
    match page_url.join(src) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Some(url),
        _ => None,
    }
}
