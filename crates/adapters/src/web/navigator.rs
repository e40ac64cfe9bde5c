use calc_study_application::{ApplicationError, BlankContext, Navigator, Notifier};
use web_sys::Window;

use super::{document_of, js_error};

const POPUP_FRAME_STYLE: &str = "border:none;width:100%;height:100%;margin:0";

pub struct WebNavigator {
    window: Window,
}

impl WebNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for WebNavigator {
    fn current_address(&self) -> Result<String, ApplicationError> {
        self.window.location().href().map_err(js_error)
    }

    fn assign(&self, url: &str) -> Result<(), ApplicationError> {
        self.window.location().set_href(url).map_err(js_error)
    }

    fn replace(&self, url: &str) -> Result<(), ApplicationError> {
        self.window.location().replace(url).map_err(js_error)
    }

    fn open_blank(&self) -> Result<Option<Box<dyn BlankContext>>, ApplicationError> {
        let popup = self.window.open().map_err(js_error)?;
        Ok(popup.map(|window| Box::new(WebBlankContext { window }) as Box<dyn BlankContext>))
    }

    fn open_in_new_tab(&self, url: &str) -> Result<(), ApplicationError> {
        self.window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map_err(js_error)?;
        Ok(())
    }
}

/// A freshly opened `about:blank` window.
pub struct WebBlankContext {
    window: Window,
}

impl BlankContext for WebBlankContext {
    fn fill_viewport(&self) -> Result<(), ApplicationError> {
        let body = document_of(&self.window)?
            .body()
            .ok_or_else(|| ApplicationError::Host("popup has no <body>".to_string()))?;
        let style = body.style();
        style.set_property("margin", "0").map_err(js_error)?;
        style.set_property("height", "100vh").map_err(js_error)
    }

    fn embed_frame(&self, address: &str) -> Result<(), ApplicationError> {
        let document = document_of(&self.window)?;
        let body = document
            .body()
            .ok_or_else(|| ApplicationError::Host("popup has no <body>".to_string()))?;
        let frame = document.create_element("iframe").map_err(js_error)?;
        frame
            .set_attribute("style", POPUP_FRAME_STYLE)
            .map_err(js_error)?;
        frame.set_attribute("src", address).map_err(js_error)?;
        body.append_child(&frame).map_err(js_error)?;
        Ok(())
    }

    fn close(&self) {
        if let Err(error) = self.window.close() {
            tracing::warn!(?error, "failed to close popup");
        }
    }
}

pub struct WebNotifier {
    window: Window,
}

impl WebNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for WebNotifier {
    fn alert(&self, message: &str) {
        if let Err(error) = self.window.alert_with_message(message) {
            tracing::warn!(?error, "alert failed");
        }
    }
}
