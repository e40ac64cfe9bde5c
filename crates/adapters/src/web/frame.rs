use calc_study_application::{ApplicationError, ContentFrame, FrameSpec};
use web_sys::{Document, Element};

use super::js_error;

const FULLSCREEN_CLASS: &str = "fullscreen";
const FRAME_STYLE: &str = "border:none;width:100%;height:100%";

/// Viewer iframe living inside a shell-provided container element.
pub struct WebContentFrame {
    document: Document,
    container_id: String,
}

impl WebContentFrame {
    pub fn new(document: Document, container_id: &str) -> Self {
        Self {
            document,
            container_id: container_id.to_string(),
        }
    }

    fn container(&self) -> Result<Element, ApplicationError> {
        self.document
            .get_element_by_id(&self.container_id)
            .ok_or_else(|| {
                ApplicationError::Host(format!("missing frame container #{}", self.container_id))
            })
    }
}

impl ContentFrame for WebContentFrame {
    fn mount(&self, spec: &FrameSpec) -> Result<(), ApplicationError> {
        let container = self.container()?;
        container.set_inner_html("");
        container
            .class_list()
            .remove_1(FULLSCREEN_CLASS)
            .map_err(js_error)?;

        let frame = self.document.create_element("iframe").map_err(js_error)?;
        frame.set_attribute("src", &spec.src).map_err(js_error)?;
        frame.set_attribute("title", &spec.title).map_err(js_error)?;
        frame.set_attribute("allow", spec.allow).map_err(js_error)?;
        frame.set_attribute("style", FRAME_STYLE).map_err(js_error)?;
        if spec.allow_fullscreen {
            frame.set_attribute("allowfullscreen", "").map_err(js_error)?;
        }
        container.append_child(&frame).map_err(js_error)?;
        Ok(())
    }

    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), ApplicationError> {
        self.container()?
            .class_list()
            .toggle_with_force(FULLSCREEN_CLASS, fullscreen)
            .map_err(js_error)?;
        Ok(())
    }

    fn unmount(&self) -> Result<(), ApplicationError> {
        let container = self.container()?;
        container.set_inner_html("");
        container
            .class_list()
            .remove_1(FULLSCREEN_CLASS)
            .map_err(js_error)
    }
}
