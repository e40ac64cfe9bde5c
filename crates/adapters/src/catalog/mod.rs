use std::fs;
use std::path::PathBuf;

use calc_study_application::{ApplicationError, CatalogSource};
use calc_study_domain::{Catalog, CatalogEntry};

/// Parses a JSON array of entries, keeping array order as display order.
pub fn parse_catalog_json(json: &str) -> Result<Catalog, ApplicationError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)
        .map_err(|error| ApplicationError::CatalogLoad(error.to_string()))?;
    Ok(Catalog::new(entries)?)
}

/// Catalog compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedCatalogSource {
    json: &'static str,
}

impl EmbeddedCatalogSource {
    pub fn new(json: &'static str) -> Self {
        Self { json }
    }
}

impl CatalogSource for EmbeddedCatalogSource {
    fn load_catalog(&self) -> Result<Catalog, ApplicationError> {
        parse_catalog_json(self.json)
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileCatalogSource {
    fn load_catalog(&self) -> Result<Catalog, ApplicationError> {
        let json = fs::read_to_string(&self.path).map_err(|error| {
            ApplicationError::CatalogLoad(format!("{}: {error}", self.path.display()))
        })?;
        let catalog = parse_catalog_json(&json)?;
        tracing::debug!(path = %self.path.display(), entries = catalog.len(), "catalog file read");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use calc_study_domain::DomainError;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const TWO_ENTRIES: &str = r#"[
        {"id": 2, "title": "Geometry", "description": "shapes",
         "thumbnail": "https://cdn.example/2.png", "url": "https://content.example/geometry/"},
        {"id": 1, "title": "Algebra Basics", "description": "intro",
         "thumbnail": "https://cdn.example/1.png", "url": "https://content.example/algebra/"}
    ]"#;

    #[test]
    fn parse_keeps_array_order() {
        let catalog = parse_catalog_json(TWO_ENTRIES).expect("parse");
        let titles: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|entry| entry.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Geometry", "Algebra Basics"]);
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "title": "a", "description": "", "thumbnail": "", "url": ""},
            {"id": 1, "title": "b", "description": "", "thumbnail": "", "url": ""}
        ]"#;
        let result = parse_catalog_json(json);
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::DuplicateEntryId(1)))
        ));
    }

    #[test]
    fn parse_accepts_zero_id() {
        let zero = r#"[{"id": 0, "title": "a", "description": "", "thumbnail": "", "url": ""}]"#;
        let catalog = parse_catalog_json(zero).expect("zero is a valid id");
        assert_eq!(catalog.entries()[0].id.get(), 0);
    }

    #[test]
    fn parse_rejects_missing_fields() {
        let missing = r#"[{"id": 1, "title": "a"}]"#;
        assert!(matches!(
            parse_catalog_json(missing),
            Err(ApplicationError::CatalogLoad(_))
        ));
    }

    #[test]
    fn file_source_reads_catalog_from_disk() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("resources.json");
        fs::write(&path, TWO_ENTRIES).expect("write");

        let catalog = JsonFileCatalogSource::new(&path)
            .load_catalog()
            .expect("load");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn file_source_reports_missing_file() {
        let dir = TempDir::new().expect("tempdir");
        let source = JsonFileCatalogSource::new(dir.path().join("absent.json"));
        assert!(matches!(
            source.load_catalog(),
            Err(ApplicationError::CatalogLoad(_))
        ));
    }

    #[test]
    fn embedded_source_parses_static_json() {
        let source = EmbeddedCatalogSource::new(TWO_ENTRIES);
        assert_eq!(source.load_catalog().expect("load").len(), 2);
    }
}
