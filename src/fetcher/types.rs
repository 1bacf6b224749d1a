use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// One fetched ranking page, decoded to UTF-8.
///
/// `url_requested` is kept separately from `url_final` because source
/// identity is derived from the URL we built during discovery; a redirect
/// must not change which platform the page is credited to.
#[derive(Debug)]
pub struct PageResponse {
    pub url_requested: Url,
    pub url_final: Url,
    pub status: StatusCode,
    pub body_utf8: String,
    pub fetched_at: DateTime<Utc>,
}
