use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::{
    types::{ApodError, PageIndex},
    utils,
};

static IMAGE_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)image/.*\.(jpe?g|png)$").expect("valid image href regex"));
static CAPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Explanation:(.*?)Tomorrow's").expect("valid caption regex")
});
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// Locates the picture link and the caption on an APOD page.
pub struct PageIndexer {
    base_url: String,
    wrap_width: usize,
}

impl PageIndexer {
    pub fn new(base_url: impl Into<String>, wrap_width: usize) -> Self {
        Self {
            base_url: base_url.into(),
            wrap_width,
        }
    }

    /// Extracts the absolute picture URL and the wrapped caption.
    ///
    /// `page` names the page in the error when no picture link exists.
    ///
    /// # Errors
    ///
    /// [`ApodError::NoImageFound`] when no anchor points at an `image/...jpg|png` path.
    pub fn index(&self, html: &str, page: &str) -> Result<PageIndex, ApodError> {
        let document = Html::parse_document(html);

        let href =
            image_href(&document).ok_or_else(|| ApodError::NoImageFound(page.to_string()))?;
        let text: String = document.root_element().text().collect();

        Ok(PageIndex {
            image_url: utils::join_url(&self.base_url, &href),
            caption: utils::wrap_caption(&caption_text(&text), self.wrap_width),
        })
    }
}

/// First anchor whose href matches the picture path pattern.
pub fn image_href(document: &Html) -> Option<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .map(str::trim)
        .find(|href| IMAGE_HREF_RE.is_match(href))
        .map(str::to_string)
}

/// Raw text between the `Explanation:` and `Tomorrow's` markers, markers
/// excluded. Pages without the markers yield an empty string.
pub fn caption_text(page_text: &str) -> String {
    CAPTION_RE
        .captures(page_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
