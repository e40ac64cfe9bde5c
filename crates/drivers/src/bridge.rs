//! Value conversions shared by the page-facing API.

use calc_study_application::SearchView;
use calc_study_domain::{CatalogEntry, EntryId};
use serde::Serialize;

/// Largest integer a JS number holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum SearchResults<'a> {
    NotLoaded,
    NoMatches,
    Matches { entries: Vec<&'a CatalogEntry> },
}

/// Serializes a search outcome so the shell can tell "no catalog yet" from
/// "nothing matched".
pub fn search_results_json(view: &SearchView<'_>) -> Result<String, serde_json::Error> {
    let results = match view {
        SearchView::NotLoaded => SearchResults::NotLoaded,
        SearchView::NoMatches => SearchResults::NoMatches,
        SearchView::Matches(entries) => SearchResults::Matches {
            entries: entries.clone(),
        },
    };
    serde_json::to_string(&results)
}

/// Accepts only non-negative integers a JS number can represent exactly.
pub fn entry_id_from_js(value: f64) -> Option<EntryId> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_SAFE_INTEGER {
        return None;
    }
    Some(EntryId::new(value as u64))
}

#[cfg(test)]
mod tests {
    use calc_study_application::CatalogIndex;
    use calc_study_domain::Catalog;
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: u64, title: &str) -> CatalogEntry {
        CatalogEntry {
            id: EntryId::new(id),
            title: title.to_string(),
            description: String::new(),
            thumbnail: String::new(),
            url: format!("https://content.example/{id}/"),
        }
    }

    #[test]
    fn search_json_distinguishes_unloaded_from_empty() {
        let mut index = CatalogIndex::new();
        assert_eq!(
            search_results_json(&index.view()).expect("json"),
            r#"{"status":"notLoaded"}"#
        );

        index.load(Catalog::new(vec![entry(7, "Chess")]).expect("catalog"));
        index.set_query("zzz".to_string());
        assert_eq!(
            search_results_json(&index.view()).expect("json"),
            r#"{"status":"noMatches"}"#
        );

        index.set_query("che".to_string());
        let json: serde_json::Value =
            serde_json::from_str(&search_results_json(&index.view()).expect("json"))
                .expect("valid json");
        assert_eq!(json["status"], "matches");
        assert_eq!(json["entries"][0]["id"], 7);
    }

    #[test]
    fn entry_ids_beyond_u32_are_reachable() {
        assert_eq!(
            entry_id_from_js(5_000_000_000.0),
            Some(EntryId::new(5_000_000_000))
        );
        assert_eq!(entry_id_from_js(0.0), Some(EntryId::new(0)));
    }

    #[test]
    fn fractional_negative_and_unsafe_ids_are_rejected() {
        for value in [1.5, -1.0, f64::NAN, f64::INFINITY, 1e17] {
            assert_eq!(entry_id_from_js(value), None, "value {value}");
        }
    }
}
