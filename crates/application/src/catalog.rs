use calc_study_domain::{Catalog, CatalogEntry, EntryId};

/// What the grid should render for the current query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView<'a> {
    NotLoaded,
    NoMatches,
    Matches(Vec<&'a CatalogEntry>),
}

impl SearchView<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::NotLoaded | Self::NoMatches => 0,
            Self::Matches(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
pub struct CatalogIndex {
    catalog: Option<Catalog>,
    query: String,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, catalog: Catalog) {
        tracing::debug!(entries = catalog.len(), "catalog loaded");
        self.catalog = Some(catalog);
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn view(&self) -> SearchView<'_> {
        let Some(catalog) = &self.catalog else {
            return SearchView::NotLoaded;
        };
        let matches = catalog.filter(&self.query);
        if matches.is_empty() {
            return SearchView::NoMatches;
        }
        SearchView::Matches(matches)
    }

    pub fn result_count(&self) -> usize {
        self.view().len()
    }

    pub fn find(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.catalog.as_ref().and_then(|catalog| catalog.find(id))
    }
}
