mod catalog;
mod disguise;
mod error;
mod viewer;

pub use catalog::{filter_entries, Catalog, CatalogEntry, EntryId};
pub use disguise::{AppearanceState, DisguisePreset, PresetKey};
pub use error::DomainError;
pub use viewer::{ViewerPhase, ViewerState};
