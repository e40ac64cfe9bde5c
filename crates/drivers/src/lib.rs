pub mod bridge;
pub mod config;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::CalcStudyApp;

pub use bridge::{entry_id_from_js, search_results_json};

/// Catalog shipped with the page.
pub const BUNDLED_CATALOG: &str = include_str!("../data/resources.json");

#[cfg(test)]
mod tests {
    use calc_study_adapters::parse_catalog_json;

    use super::*;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = parse_catalog_json(BUNDLED_CATALOG).expect("bundled catalog is valid");
        assert!(!catalog.is_empty());
    }
}
