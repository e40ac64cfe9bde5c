use calc_study_domain::{AppearanceState, PresetKey};

use crate::{AddressBar, ApplicationError, DisguiseSettings, DocumentChrome};

/// Owns the appearance state and keeps title, favicon and displayed path in
/// step with it.
pub struct DisguiseController {
    state: AppearanceState,
    settings: DisguiseSettings,
    chrome: Box<dyn DocumentChrome>,
    address_bar: Box<dyn AddressBar>,
    initialized: bool,
    applied_preset: Option<PresetKey>,
    applied_mask: Option<bool>,
}

impl DisguiseController {
    pub fn new(
        settings: DisguiseSettings,
        chrome: Box<dyn DocumentChrome>,
        address_bar: Box<dyn AddressBar>,
    ) -> Self {
        Self {
            state: AppearanceState::default(),
            settings,
            chrome,
            address_bar,
            initialized: false,
            applied_preset: None,
            applied_mask: None,
        }
    }

    pub fn appearance(&self) -> AppearanceState {
        self.state
    }

    pub fn active_preset(&self) -> PresetKey {
        self.state.active_preset
    }

    pub fn is_path_masked(&self) -> bool {
        self.state.path_masked
    }

    pub fn displayed_path(&self) -> &str {
        self.path_for(self.state.path_masked)
    }

    fn path_for(&self, masked: bool) -> &str {
        if masked {
            &self.settings.masked_path
        } else {
            &self.settings.root_path
        }
    }

    /// First synchronization with the host. Later calls do nothing.
    pub fn initialize(&mut self) -> Result<(), ApplicationError> {
        if self.initialized {
            return Ok(());
        }
        self.apply_identity(self.state.active_preset)?;
        self.apply_path(self.state.path_masked)?;
        self.initialized = true;
        Ok(())
    }

    /// Unknown keys leave the appearance untouched. The state only moves to
    /// the new preset once the host has taken both title and icon.
    pub fn select_preset(&mut self, key: &str) -> Result<(), ApplicationError> {
        let Some(preset) = PresetKey::parse(key) else {
            tracing::debug!(key, "ignoring unknown disguise preset");
            return Ok(());
        };
        self.apply_identity(preset)?;
        self.state.active_preset = preset;
        Ok(())
    }

    pub fn set_path_masked(&mut self, masked: bool) -> Result<(), ApplicationError> {
        self.apply_path(masked)?;
        self.state.path_masked = masked;
        Ok(())
    }

    pub fn toggle_path_mask(&mut self) -> Result<(), ApplicationError> {
        self.set_path_masked(!self.state.path_masked)
    }

    fn apply_identity(&mut self, key: PresetKey) -> Result<(), ApplicationError> {
        if self.applied_preset == Some(key) {
            return Ok(());
        }
        let preset = key.preset();
        self.chrome.set_title(preset.display_title)?;
        if let Err(error) = self.chrome.set_favicon(preset.icon_uri) {
            self.restore_title();
            return Err(error);
        }
        self.applied_preset = Some(key);
        tracing::debug!(preset = key.as_str(), "disguise applied");
        Ok(())
    }

    /// Puts back the title of the last fully applied preset.
    fn restore_title(&self) {
        let Some(previous) = self.applied_preset else {
            return;
        };
        if let Err(error) = self.chrome.set_title(previous.preset().display_title) {
            tracing::warn!(%error, "failed to restore document title");
        }
    }

    fn apply_path(&mut self, masked: bool) -> Result<(), ApplicationError> {
        if self.applied_mask == Some(masked) {
            return Ok(());
        }
        self.address_bar.replace_path(self.path_for(masked))?;
        self.applied_mask = Some(masked);
        tracing::debug!(masked, "displayed path rewritten");
        Ok(())
    }
}
