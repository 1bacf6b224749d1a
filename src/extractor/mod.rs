//! Structured extraction from filmweb ranking pages.
//!
//! Two page shapes are handled: the seed ranking page, from which provider
//! subpages are discovered, and a provider page, from which the actual
//! title/rating rows come. Selection is tolerant: a node missing an expected
//! attribute or child is skipped or yields empty text, never an error.

pub mod model;
pub mod rating;

#[cfg(test)]
mod tests;

pub use model::{Entry, RawEntry};

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::config::{Config, YearSuffix};

static PROVIDER_ITEM: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".rankingProvider__item").expect("valid selector"));
static PROVIDER_LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("valid selector"));
static RANKING_ITEM: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".rankingType").expect("valid selector"));
static RANKING_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".rankingType__title").expect("valid selector"));
static RANKING_RATE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".rankingType__rate--value").expect("valid selector"));

/// Find the provider subpages worth scraping, in document order.
///
/// A tile qualifies when its link label contains one of the configured
/// provider substrings. Tiles without a link or label are skipped; a seed
/// page matching nothing yields an empty list, which is not an error.
pub fn discover_sources(seed_html: &str, config: &Config) -> Vec<String> {
    let document = Html::parse_document(seed_html);
    let mut urls = Vec::new();

    for item in document.select(&PROVIDER_ITEM) {
        let Some(link) = item.select(&PROVIDER_LINK).next() else {
            continue;
        };
        let Some(label) = link.value().attr("title") else {
            continue;
        };
        if !config.target_providers().iter().any(|p| label.contains(p.as_str())) {
            continue;
        }
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        urls.push(source_url(config, href));
    }

    urls
}

fn source_url(config: &Config, href: &str) -> String {
    match config.year_suffix() {
        YearSuffix::CurrentYear => {
            format!("{}{}/{}", config.base_url(), href, Utc::now().year())
        }
        YearSuffix::None => format!("{}{}", config.base_url(), href),
    }
}

/// Pull the top rows out of one provider page, in document order (the page's
/// own rank order). Missing title or rating children yield empty strings;
/// normalization downstream decides their fate.
pub fn extract_entries(html: &str, source_id: &str, top_n: usize) -> Vec<RawEntry> {
    let document = Html::parse_document(html);

    document
        .select(&RANKING_ITEM)
        .take(top_n)
        .map(|item| RawEntry {
            title: child_text(&item, &RANKING_TITLE),
            rating_text: child_text(&item, &RANKING_RATE),
            source_id: source_id.to_string(),
        })
        .collect()
}

fn child_text(item: &scraper::ElementRef<'_>, selector: &Selector) -> String {
    item.select(selector)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Derive the platform key from the URL a provider page was fetched at.
///
/// Provider URLs look like `{base}{listing}/{key}/{media}` or the same with a
/// trailing `/{year}`; both conventions coexist, so the year segment is
/// stripped when present and ignored otherwise. URLs that don't match the
/// expected shape pass through unchanged and surface verbatim in the output.
pub fn source_id_from_url(url: &str, config: &Config) -> String {
    // seed_path "/ranking/vod/film" splits into the listing prefix and the
    // media segment that bracket the platform key in provider URLs.
    let (listing_prefix, media_segment) = config
        .seed_path()
        .rsplit_once('/')
        .unwrap_or(("", config.seed_path()));

    let mut id = url.strip_prefix(config.base_url()).unwrap_or(url);
    if !listing_prefix.is_empty() {
        id = id.strip_prefix(listing_prefix).unwrap_or(id);
        id = id.strip_prefix('/').unwrap_or(id);
    }
    if let Some(stripped) = strip_year_segment(id) {
        id = stripped;
    }
    if let Some(stripped) = id.strip_suffix(media_segment) {
        id = stripped.strip_suffix('/').unwrap_or(stripped);
    }
    id.to_string()
}

fn strip_year_segment(path: &str) -> Option<&str> {
    let (rest, last) = path.rsplit_once('/')?;
    if last.len() == 4 && last.bytes().all(|b| b.is_ascii_digit()) {
        Some(rest)
    } else {
        None
    }
}
