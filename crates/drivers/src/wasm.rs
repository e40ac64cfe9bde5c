use calc_study_adapters::{browser_ports, EmbeddedCatalogSource};
use calc_study_application::{
    ApplicationService, CatalogSource, CloseViewerCommand, DetachCommand, DetachOutcome,
    GoHomeCommand, OpenExternalCommand, SearchCommand, SelectEntryCommand,
    SelectPresetCommand, SetPathMaskCommand, ShutdownCommand, StartSessionCommand,
    ToggleFullscreenCommand, TogglePathMaskCommand,
};
use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::{entry_id_from_js, search_results_json, BUNDLED_CATALOG};

fn to_js(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Page-facing API. The shell renders; this owns every piece of state.
#[wasm_bindgen]
pub struct CalcStudyApp {
    service: ApplicationService,
}

#[wasm_bindgen]
impl CalcStudyApp {
    /// Builds the app against the live page, applies the default disguise and
    /// arms the panic key. `config_json` overrides individual config fields.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<CalcStudyApp, JsValue> {
        let config = match config_json {
            Some(json) => AppConfig::from_json_str(&json).map_err(to_js)?,
            None => AppConfig::default(),
        };
        let ports = browser_ports(&config.frame_container_id).map_err(to_js)?;
        let mut service = ApplicationService::new(ports, config.cloak_settings());
        let catalog = EmbeddedCatalogSource::new(BUNDLED_CATALOG)
            .load_catalog()
            .map_err(to_js)?;
        service.load_catalog(catalog);
        service
            .start_session(StartSessionCommand)
            .map_err(to_js)?;
        Ok(Self { service })
    }

    /// Outcome for `query` as tagged JSON: `notLoaded`, `noMatches`, or
    /// `matches` with the entries in catalog order.
    pub fn search(&mut self, query: String) -> Result<String, JsValue> {
        let view = self.service.search(SearchCommand { query });
        search_results_json(&view).map_err(to_js)
    }

    #[wasm_bindgen(js_name = resultCount)]
    pub fn result_count(&self) -> usize {
        self.service.result_count()
    }

    #[wasm_bindgen(js_name = selectPreset)]
    pub fn select_preset(&mut self, key: String) -> Result<(), JsValue> {
        self.service
            .select_preset(SelectPresetCommand { key })
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = activePreset)]
    pub fn active_preset(&self) -> String {
        self.service.appearance().active_preset.as_str().to_string()
    }

    #[wasm_bindgen(js_name = setPathMasked)]
    pub fn set_path_masked(&mut self, masked: bool) -> Result<(), JsValue> {
        self.service
            .set_path_mask(SetPathMaskCommand { masked })
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = togglePathMask)]
    pub fn toggle_path_mask(&mut self) -> Result<bool, JsValue> {
        self.service
            .toggle_path_mask(TogglePathMaskCommand)
            .map_err(to_js)?;
        Ok(self.service.appearance().path_masked)
    }

    #[wasm_bindgen(js_name = selectEntry)]
    pub fn select_entry(&mut self, id: f64) -> Result<(), JsValue> {
        let entry_id = entry_id_from_js(id)
            .ok_or_else(|| JsValue::from_str(&format!("invalid entry id: {id}")))?;
        self.service
            .select_entry(SelectEntryCommand { entry_id })
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = toggleFullscreen)]
    pub fn toggle_fullscreen(&mut self) -> Result<bool, JsValue> {
        self.service
            .toggle_fullscreen(ToggleFullscreenCommand)
            .map_err(to_js)?;
        Ok(self.service.viewer_state().is_fullscreen())
    }

    #[wasm_bindgen(js_name = closeViewer)]
    pub fn close_viewer(&mut self) -> Result<(), JsValue> {
        self.service
            .close_viewer(CloseViewerCommand)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = openExternal)]
    pub fn open_external(&self) -> Result<(), JsValue> {
        self.service
            .open_external(OpenExternalCommand)
            .map_err(to_js)
    }

    /// `false` when the popup was blocked; the user has already been told.
    pub fn detach(&self) -> Result<bool, JsValue> {
        let outcome = self.service.detach(DetachCommand).map_err(to_js)?;
        Ok(outcome == DetachOutcome::Detached)
    }

    #[wasm_bindgen(js_name = goHome)]
    pub fn go_home(&mut self) -> Result<(), JsValue> {
        self.service.go_home(GoHomeCommand).map_err(to_js)
    }

    /// Teardown for JS callers: closes the viewer and removes the key listener.
    pub fn destroy(&mut self) -> Result<(), JsValue> {
        self.service.shutdown(ShutdownCommand).map_err(to_js)
    }
}
