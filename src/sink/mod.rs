//! CSV persistence of the final ranking.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::extractor::{Entry, model};

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One row of the published ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingRecord {
    pub title: String,
    pub platform: String,
    pub rating: f64,
}

impl From<Entry> for RankingRecord {
    fn from(entry: Entry) -> Self {
        Self {
            platform: model::display_name(&entry.source_id).to_string(),
            title: entry.title,
            rating: entry.rating,
        }
    }
}

/// Write the ranking to `path`. The header row is always present, even for
/// an empty ranking.
pub fn write_rankings(path: &Path, records: &[RankingRecord]) -> Result<(), WriteError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["Title", "VOD service name", "Rating"])?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_csv(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("vodrank-sink-{name}-{}.csv", std::process::id()))
    }

    #[test]
    fn writes_fixed_header_and_rows() {
        let path = temp_csv("rows");
        let records = vec![
            RankingRecord {
                title: "Matrix".to_string(),
                platform: "Disney+".to_string(),
                rating: 8.7,
            },
            RankingRecord {
                title: "Incepcja".to_string(),
                platform: "Netflix".to_string(),
                rating: 8.5,
            },
        ];

        write_rankings(&path, &records).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(
            written,
            "Title,VOD service name,Rating\nMatrix,Disney+,8.7\nIncepcja,Netflix,8.5\n"
        );
    }

    #[test]
    fn empty_ranking_still_gets_a_header() {
        let path = temp_csv("empty");
        write_rankings(&path, &[]).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(written, "Title,VOD service name,Rating\n");
    }

    #[test]
    fn record_from_entry_maps_display_name() {
        let record = RankingRecord::from(Entry {
            title: "Diuna".to_string(),
            rating: 8.1,
            source_id: "canal_plus_manual".to_string(),
        });
        assert_eq!(record.platform, "Canal+");
        assert_eq!(record.rating, 8.1);
    }
}
