pub mod catalog;
pub mod headless;
pub mod presenters;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use catalog::{parse_catalog_json, EmbeddedCatalogSource, JsonFileCatalogSource};
pub use headless::{HeadlessHost, HeadlessPopup, HeadlessSnapshot, DEFAULT_HEADLESS_ADDRESS};
pub use presenters::{
    present_entry_row, present_preset_row, present_search_view, present_snapshot,
    present_viewer,
};
#[cfg(target_arch = "wasm32")]
pub use web::browser_ports;
