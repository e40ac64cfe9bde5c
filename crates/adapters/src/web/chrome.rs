use calc_study_application::{AddressBar, ApplicationError, DocumentChrome};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::js_error;

const ICON_SELECTOR: &str = "link[rel~='icon']";

pub struct WebDocumentChrome {
    document: Document,
}

impl WebDocumentChrome {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl DocumentChrome for WebDocumentChrome {
    fn set_title(&self, title: &str) -> Result<(), ApplicationError> {
        self.document.set_title(title);
        Ok(())
    }

    fn set_favicon(&self, href: &str) -> Result<(), ApplicationError> {
        let link = match self.document.query_selector(ICON_SELECTOR).map_err(js_error)? {
            Some(existing) => existing,
            None => {
                let created = self.document.create_element("link").map_err(js_error)?;
                created.set_attribute("rel", "icon").map_err(js_error)?;
                let head = self
                    .document
                    .head()
                    .ok_or_else(|| ApplicationError::Host("document has no <head>".to_string()))?;
                head.append_child(&created).map_err(js_error)?;
                created
            }
        };
        link.set_attribute("href", href).map_err(js_error)
    }
}

pub struct WebAddressBar {
    window: Window,
}

impl WebAddressBar {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl AddressBar for WebAddressBar {
    fn replace_path(&self, path: &str) -> Result<(), ApplicationError> {
        self.window
            .history()
            .map_err(js_error)?
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .map_err(js_error)
    }
}
