use std::rc::Rc;

use calc_study_domain::{AppearanceState, Catalog, ViewerState};

use crate::{
    ApplicationError, CatalogIndex, CloakSettings, CloseViewerCommand, DetachCommand,
    DetachOutcome, DisguiseController, EscapeMechanisms, GoHomeCommand, HostPorts,
    OpenExternalCommand, SearchCommand, SearchView, SelectEntryCommand, SelectPresetCommand,
    SetPathMaskCommand, ShutdownCommand, StartSessionCommand, ToggleFullscreenCommand,
    TogglePathMaskCommand, Viewer,
};

pub struct ApplicationService {
    catalog: CatalogIndex,
    disguise: DisguiseController,
    escape: EscapeMechanisms,
    viewer: Viewer,
}

impl ApplicationService {
    pub fn new(ports: HostPorts, settings: CloakSettings) -> Self {
        let HostPorts {
            chrome,
            address_bar,
            navigator,
            notifier,
            keyboard,
            frame,
        } = ports;

        Self {
            catalog: CatalogIndex::new(),
            disguise: DisguiseController::new(settings.disguise, chrome, address_bar),
            escape: EscapeMechanisms::new(
                settings.escape,
                Rc::clone(&navigator),
                notifier,
                keyboard,
            ),
            viewer: Viewer::new(frame, navigator),
        }
    }

    pub fn load_catalog(&mut self, catalog: Catalog) {
        self.catalog.load(catalog);
    }

    /// Initial disguise sync plus panic key registration. Safe to repeat.
    pub fn start_session(&mut self, _command: StartSessionCommand) -> Result<(), ApplicationError> {
        self.disguise.initialize()?;
        self.escape.arm()
    }

    pub fn shutdown(&mut self, _command: ShutdownCommand) -> Result<(), ApplicationError> {
        self.viewer.close()?;
        self.escape.disarm()
    }

    pub fn search(&mut self, command: SearchCommand) -> SearchView<'_> {
        self.catalog.set_query(command.query);
        self.catalog.view()
    }

    pub fn results(&self) -> SearchView<'_> {
        self.catalog.view()
    }

    pub fn query(&self) -> &str {
        self.catalog.query()
    }

    pub fn result_count(&self) -> usize {
        self.catalog.result_count()
    }

    pub fn select_preset(&mut self, command: SelectPresetCommand) -> Result<(), ApplicationError> {
        self.disguise.select_preset(&command.key)
    }

    pub fn set_path_mask(&mut self, command: SetPathMaskCommand) -> Result<(), ApplicationError> {
        self.disguise.set_path_masked(command.masked)
    }

    pub fn toggle_path_mask(
        &mut self,
        _command: TogglePathMaskCommand,
    ) -> Result<(), ApplicationError> {
        self.disguise.toggle_path_mask()
    }

    pub fn appearance(&self) -> AppearanceState {
        self.disguise.appearance()
    }

    pub fn displayed_path(&self) -> &str {
        self.disguise.displayed_path()
    }

    pub fn select_entry(&mut self, command: SelectEntryCommand) -> Result<(), ApplicationError> {
        let entry = self
            .catalog
            .find(command.entry_id)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::NotFound(format!("entry not found for id={}", command.entry_id))
            })?;
        self.viewer.select(entry)
    }

    pub fn toggle_fullscreen(
        &mut self,
        _command: ToggleFullscreenCommand,
    ) -> Result<(), ApplicationError> {
        self.viewer.toggle_fullscreen()
    }

    pub fn close_viewer(&mut self, _command: CloseViewerCommand) -> Result<(), ApplicationError> {
        self.viewer.close()
    }

    pub fn open_external(&self, _command: OpenExternalCommand) -> Result<(), ApplicationError> {
        self.viewer.open_external()
    }

    pub fn viewer_state(&self) -> &ViewerState {
        self.viewer.state()
    }

    pub fn detach(&self, _command: DetachCommand) -> Result<DetachOutcome, ApplicationError> {
        self.escape.detach()
    }

    pub fn panic_armed(&self) -> bool {
        self.escape.is_armed()
    }

    pub fn panic_key(&self) -> &str {
        self.escape.panic_key()
    }

    /// Back to the full listing: viewer closed, query cleared.
    pub fn go_home(&mut self, _command: GoHomeCommand) -> Result<(), ApplicationError> {
        self.viewer.close()?;
        self.catalog.clear_query();
        Ok(())
    }
}
