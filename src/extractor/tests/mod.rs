use chrono::{Datelike, Utc};

use crate::config::{Config, YearSuffix};
use crate::extractor::{discover_sources, extract_entries, source_id_from_url};

fn test_config(year_suffix: YearSuffix) -> Config {
    Config::new(
        "https://www.filmweb.pl",
        "/ranking/vod/film",
        vec![
            "Netflix".to_string(),
            "HBO Max".to_string(),
            "Canal+ Online".to_string(),
            "Disney+".to_string(),
        ],
        10,
        year_suffix,
        "out.csv",
    )
}

fn provider_tile(label: &str, href: &str) -> String {
    format!(r#"<div class="rankingProvider__item"><a title="{label}" href="{href}">{label}</a></div>"#)
}

#[test]
fn discovery_filters_by_provider_label() {
    let seed = format!(
        "<html><body>{}{}{}</body></html>",
        provider_tile("Netflix Polska", "/ranking/vod/netflix/film"),
        provider_tile("Amazon Prime", "/ranking/vod/amazon/film"),
        provider_tile("Disney+ Exclusive", "/ranking/vod/disney/film"),
    );

    let urls = discover_sources(&seed, &test_config(YearSuffix::None));
    assert_eq!(
        urls,
        vec![
            "https://www.filmweb.pl/ranking/vod/netflix/film".to_string(),
            "https://www.filmweb.pl/ranking/vod/disney/film".to_string(),
        ]
    );
}

#[test]
fn discovery_appends_current_year_when_configured() {
    let seed = format!(
        "<html><body>{}</body></html>",
        provider_tile("Netflix", "/ranking/vod/netflix/film")
    );

    let urls = discover_sources(&seed, &test_config(YearSuffix::CurrentYear));
    assert_eq!(
        urls,
        vec![format!(
            "https://www.filmweb.pl/ranking/vod/netflix/film/{}",
            Utc::now().year()
        )]
    );
}

#[test]
fn discovery_skips_tile_without_label() {
    // The first tile's link has no title attribute; it must be skipped, not
    // crash the run or produce a bogus URL.
    let seed = concat!(
        "<html><body>",
        r#"<div class="rankingProvider__item"><a href="/ranking/vod/mystery/film">?</a></div>"#,
        r#"<div class="rankingProvider__item"><a title="HBO Max" href="/ranking/vod/hbo_max/film">HBO Max</a></div>"#,
        "</body></html>",
    );

    let urls = discover_sources(seed, &test_config(YearSuffix::None));
    assert_eq!(
        urls,
        vec!["https://www.filmweb.pl/ranking/vod/hbo_max/film".to_string()]
    );
}

#[test]
fn discovery_of_nothing_is_empty_not_error() {
    let urls = discover_sources("<html><body><p>no rankings today</p></body></html>", &test_config(YearSuffix::None));
    assert!(urls.is_empty());
}

fn ranking_row(title: &str, rating: &str) -> String {
    format!(
        r#"<div class="rankingType"><h2 class="rankingType__title">{title}</h2><span class="rankingType__rate--value">{rating}</span></div>"#
    )
}

#[test]
fn extraction_caps_at_top_n_in_document_order() {
    let rows: String = (1..=12).map(|i| ranking_row(&format!("Film {i}"), "7,0")).collect();
    let html = format!("<html><body>{rows}</body></html>");

    let entries = extract_entries(&html, "netflix", 10);
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].title, "Film 1");
    assert_eq!(entries[9].title, "Film 10");
    assert!(entries.iter().all(|e| e.source_id == "netflix"));
}

#[test]
fn extraction_tolerates_missing_fields() {
    let html = concat!(
        "<html><body>",
        r#"<div class="rankingType"><h2 class="rankingType__title">Diuna</h2></div>"#,
        r#"<div class="rankingType"><span class="rankingType__rate--value">8,1</span></div>"#,
        "</body></html>",
    );

    let entries = extract_entries(html, "disney", 10);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Diuna");
    assert_eq!(entries[0].rating_text, "");
    assert_eq!(entries[1].title, "");
    assert_eq!(entries[1].rating_text, "8,1");
}

#[test]
fn source_id_handles_both_url_conventions() {
    let config = test_config(YearSuffix::CurrentYear);
    assert_eq!(
        source_id_from_url("https://www.filmweb.pl/ranking/vod/netflix/film/2023", &config),
        "netflix"
    );
    assert_eq!(
        source_id_from_url("https://www.filmweb.pl/ranking/vod/hbo_max/film", &config),
        "hbo_max"
    );
}

#[test]
fn source_id_passes_unknown_urls_through() {
    let config = test_config(YearSuffix::None);
    assert_eq!(
        source_id_from_url("https://example.com/elsewhere", &config),
        "https://example.com/elsewhere"
    );
}
