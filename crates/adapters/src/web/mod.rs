//! Browser host for `wasm32` builds, backed by `web-sys`.

mod chrome;
mod frame;
mod keyboard;
mod navigator;

use std::rc::Rc;

use calc_study_application::{ApplicationError, HostPorts};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

pub use chrome::{WebAddressBar, WebDocumentChrome};
pub use frame::WebContentFrame;
pub use keyboard::WebKeyboardHub;
pub use navigator::{WebBlankContext, WebNavigator, WebNotifier};

pub(crate) fn js_error(value: JsValue) -> ApplicationError {
    ApplicationError::Host(format!("{value:?}"))
}

pub fn current_window() -> Result<Window, ApplicationError> {
    web_sys::window().ok_or_else(|| ApplicationError::Host("no global window".to_string()))
}

pub(crate) fn document_of(window: &Window) -> Result<Document, ApplicationError> {
    window
        .document()
        .ok_or_else(|| ApplicationError::Host("window has no document".to_string()))
}

/// Wires every port to the live page. The viewer frame is mounted inside the
/// element with id `frame_container_id`.
pub fn browser_ports(frame_container_id: &str) -> Result<HostPorts, ApplicationError> {
    let window = current_window()?;
    let document = document_of(&window)?;
    Ok(HostPorts {
        chrome: Box::new(WebDocumentChrome::new(document.clone())),
        address_bar: Box::new(WebAddressBar::new(window.clone())),
        navigator: Rc::new(WebNavigator::new(window.clone())),
        notifier: Box::new(WebNotifier::new(window.clone())),
        keyboard: Rc::new(WebKeyboardHub::new(window)),
        frame: Box::new(WebContentFrame::new(document, frame_container_id)),
    })
}
