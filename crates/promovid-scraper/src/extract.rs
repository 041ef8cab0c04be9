//! Selector-based extraction of product data from page HTML.

use std::collections::HashSet;

use scraper::{Html, Selector};

use promovid_models::ProductInfo;

use crate::error::{ScrapeError, ScrapeResult};

fn selector(css: &str) -> ScrapeResult<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e:?}")))
}

/// Collapse runs of whitespace into single spaces.
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the product title.
///
/// Tries `#productTitle` (common storefront ID), then the first `h1`, then
/// the document `<title>` tag.
pub fn extract_title(doc: &Html) -> ScrapeResult<Option<String>> {
    for css in ["#productTitle", "h1", "title"] {
        let sel = selector(css)?;
        if let Some(element) = doc.select(&sel).next() {
            let text = clean_text(&element.text().collect::<String>());
            if !text.is_empty() {
                return Ok(Some(text));
            }
        }
    }
    Ok(None)
}

/// Extract the product description.
///
/// Feature bullets win when present, joined with ". " and a trailing ".".
/// Otherwise `#productDescription`, otherwise the meta description tag.
pub fn extract_description(doc: &Html) -> ScrapeResult<Option<String>> {
    let bullets_sel = selector("#feature-bullets .a-list-item")?;
    let bullets: Vec<String> = doc
        .select(&bullets_sel)
        .map(|e| clean_text(&e.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .collect();
    if !bullets.is_empty() {
        return Ok(Some(format!("{}.", bullets.join(". "))));
    }

    let desc_sel = selector("#productDescription")?;
    if let Some(element) = doc.select(&desc_sel).next() {
        let text = clean_text(&element.text().collect::<String>());
        if !text.is_empty() {
            return Ok(Some(text));
        }
    }

    let meta_sel = selector(r#"meta[name="description"]"#)?;
    if let Some(element) = doc.select(&meta_sel).next() {
        if let Some(content) = element.value().attr("content") {
            let text = clean_text(content);
            if !text.is_empty() {
                return Ok(Some(text));
            }
        }
    }

    Ok(None)
}

/// Extract candidate image URLs, in document order, de-duplicated.
///
/// Sources in priority order: `og:image` meta, the main `#landingImage`,
/// thumbnail strip `#altImages img`, then any other `img[src]`. Only
/// absolute http(s) URLs are kept; `max_images` caps the result.
pub fn extract_image_urls(doc: &Html, max_images: usize) -> ScrapeResult<Vec<String>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut urls: Vec<String> = Vec::new();

    let mut push = |url: &str| {
        let url = url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return;
        }
        if seen.insert(url.to_string()) {
            urls.push(url.to_string());
        }
    };

    let og_sel = selector(r#"meta[property="og:image"]"#)?;
    for element in doc.select(&og_sel) {
        if let Some(content) = element.value().attr("content") {
            push(content);
        }
    }

    for css in ["#landingImage", "#altImages img", "img[src]"] {
        let sel = selector(css)?;
        for element in doc.select(&sel) {
            if let Some(src) = element.value().attr("src") {
                push(src);
            }
        }
    }

    urls.truncate(max_images);
    Ok(urls)
}

/// Derive [`ProductInfo`] from page HTML.
///
/// Never fails on missing content; the fallback title and description are
/// substituted and the image list may be empty.
pub fn product_info(html: &str, max_images: usize) -> ScrapeResult<ProductInfo> {
    let doc = Html::parse_document(html);

    let title = extract_title(&doc)?.unwrap_or_else(|| ProductInfo::FALLBACK_TITLE.to_string());
    let description = extract_description(&doc)?
        .unwrap_or_else(|| ProductInfo::FALLBACK_DESCRIPTION.to_string());
    let image_urls = extract_image_urls(&doc, max_images)?;

    Ok(ProductInfo {
        title,
        description,
        image_urls,
    })
}
