use crate::CatalogEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerPhase {
    Closed,
    Open,
    OpenFullscreen,
}

/// Modal viewer state. Fullscreen only exists alongside a selected entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewerState {
    #[default]
    Closed,
    Open {
        entry: CatalogEntry,
        fullscreen: bool,
    },
}

impl ViewerState {
    pub fn phase(&self) -> ViewerPhase {
        match self {
            Self::Closed => ViewerPhase::Closed,
            Self::Open {
                fullscreen: false, ..
            } => ViewerPhase::Open,
            Self::Open {
                fullscreen: true, ..
            } => ViewerPhase::OpenFullscreen,
        }
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        match self {
            Self::Closed => None,
            Self::Open { entry, .. } => Some(entry),
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        matches!(
            self,
            Self::Open {
                fullscreen: true,
                ..
            }
        )
    }

    /// Switching to a different entry always leaves fullscreen.
    /// Returns whether the state changed.
    pub fn select(&mut self, entry: CatalogEntry) -> bool {
        if self.selected_entry().map(|current| current.id) == Some(entry.id) {
            return false;
        }
        *self = Self::Open {
            entry,
            fullscreen: false,
        };
        true
    }

    /// Returns the new fullscreen flag, or `None` when nothing is selected.
    pub fn toggle_fullscreen(&mut self) -> Option<bool> {
        match self {
            Self::Closed => None,
            Self::Open { fullscreen, .. } => {
                *fullscreen = !*fullscreen;
                Some(*fullscreen)
            }
        }
    }

    /// Returns whether an entry was open.
    pub fn close(&mut self) -> bool {
        let was_open = !matches!(self, Self::Closed);
        *self = Self::Closed;
        was_open
    }
}
