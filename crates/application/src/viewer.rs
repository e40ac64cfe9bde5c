use std::rc::Rc;

use calc_study_domain::{CatalogEntry, ViewerPhase, ViewerState};

use crate::{ApplicationError, ContentFrame, FrameSpec, Navigator, FRAME_PERMISSIONS};

pub struct Viewer {
    state: ViewerState,
    frame: Box<dyn ContentFrame>,
    navigator: Rc<dyn Navigator>,
}

impl Viewer {
    pub fn new(frame: Box<dyn ContentFrame>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            state: ViewerState::Closed,
            frame,
            navigator,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn phase(&self) -> ViewerPhase {
        self.state.phase()
    }

    /// Each transition is staged on a copy and committed only after the
    /// host accepted it, so a failed frame call leaves the state as it was.
    pub fn select(&mut self, entry: CatalogEntry) -> Result<(), ApplicationError> {
        let spec = frame_spec(&entry);
        let id = entry.id;
        let mut next = self.state.clone();
        if !next.select(entry) {
            return Ok(());
        }
        self.frame.mount(&spec)?;
        self.state = next;
        tracing::debug!(entry = %id, "viewer opened");
        Ok(())
    }

    pub fn toggle_fullscreen(&mut self) -> Result<(), ApplicationError> {
        let mut next = self.state.clone();
        let Some(fullscreen) = next.toggle_fullscreen() else {
            return Ok(());
        };
        self.frame.set_fullscreen(fullscreen)?;
        self.state = next;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), ApplicationError> {
        if self.state.selected_entry().is_none() {
            return Ok(());
        }
        self.frame.unmount()?;
        self.state.close();
        tracing::debug!("viewer closed");
        Ok(())
    }

    /// Opens the selected entry in its own tab; the viewer itself is untouched.
    pub fn open_external(&self) -> Result<(), ApplicationError> {
        match self.state.selected_entry() {
            Some(entry) => self.navigator.open_in_new_tab(&entry.url),
            None => Ok(()),
        }
    }
}

fn frame_spec(entry: &CatalogEntry) -> FrameSpec {
    FrameSpec {
        src: entry.url.clone(),
        title: entry.title.clone(),
        allow: FRAME_PERMISSIONS,
        allow_fullscreen: true,
    }
}
