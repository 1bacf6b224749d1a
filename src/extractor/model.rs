use crate::extractor::rating;

/// One scraped ranking row before rating normalization. Fields may be empty
/// when the page omits them; normalization decides what survives.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub title: String,
    pub rating_text: String,
    pub source_id: String,
}

/// Normalized ranking row. `rating` is always finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub title: String,
    pub rating: f64,
    pub source_id: String,
}

impl RawEntry {
    /// Parse the rating text. Rows with an unparsable rating or an empty
    /// title are dropped here, so everything downstream can assume finite
    /// ratings and non-empty titles.
    pub fn normalize(self) -> Option<Entry> {
        if self.title.is_empty() {
            return None;
        }
        let rating = rating::normalize(&self.rating_text)?;
        Some(Entry {
            title: self.title,
            rating,
            source_id: self.source_id,
        })
    }
}

/// Map a platform key to the name used in the published ranking.
/// Unknown keys pass through as-is.
pub fn display_name(source_id: &str) -> &str {
    match source_id {
        "netflix" => "Netflix",
        "hbo_max" => "HBO MAX",
        "canal_plus_manual" => "Canal+",
        "disney" => "Disney+",
        other => other,
    }
}
