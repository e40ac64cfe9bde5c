use std::rc::Rc;

use calc_study_domain::Catalog;

use crate::ApplicationError;

/// Permissions granted to the embedded content frame.
pub const FRAME_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

pub trait CatalogSource {
    fn load_catalog(&self) -> Result<Catalog, ApplicationError>;
}

pub trait DocumentChrome {
    fn set_title(&self, title: &str) -> Result<(), ApplicationError>;

    /// Ensures exactly one icon link exists in the document, then points it at `href`.
    fn set_favicon(&self, href: &str) -> Result<(), ApplicationError>;
}

pub trait AddressBar {
    /// Rewrites the visible path with a history replace: no reload, no new entry.
    fn replace_path(&self, path: &str) -> Result<(), ApplicationError>;
}

pub trait BlankContext {
    fn fill_viewport(&self) -> Result<(), ApplicationError>;

    fn embed_frame(&self, address: &str) -> Result<(), ApplicationError>;

    fn close(&self);
}

pub trait Navigator {
    fn current_address(&self) -> Result<String, ApplicationError>;

    /// Full navigation that keeps the current page in history.
    fn assign(&self, url: &str) -> Result<(), ApplicationError>;

    /// Full navigation that replaces the current history entry.
    fn replace(&self, url: &str) -> Result<(), ApplicationError>;

    /// `Ok(None)` means the host refused to open the context (popup blocking).
    fn open_blank(&self) -> Result<Option<Box<dyn BlankContext>>, ApplicationError>;

    fn open_in_new_tab(&self, url: &str) -> Result<(), ApplicationError>;
}

pub trait Notifier {
    /// Blocking user-facing message.
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

pub type KeyHandler = Box<dyn Fn(&str)>;

pub trait KeyboardHub {
    /// Registers a document-wide key-down handler receiving the key value.
    fn subscribe(&self, handler: KeyHandler) -> Result<ListenerId, ApplicationError>;

    fn unsubscribe(&self, id: ListenerId) -> Result<(), ApplicationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSpec {
    pub src: String,
    pub title: String,
    pub allow: &'static str,
    pub allow_fullscreen: bool,
}

pub trait ContentFrame {
    fn mount(&self, spec: &FrameSpec) -> Result<(), ApplicationError>;

    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), ApplicationError>;

    fn unmount(&self) -> Result<(), ApplicationError>;
}

pub struct HostPorts {
    pub chrome: Box<dyn DocumentChrome>,
    pub address_bar: Box<dyn AddressBar>,
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Box<dyn Notifier>,
    pub keyboard: Rc<dyn KeyboardHub>,
    pub frame: Box<dyn ContentFrame>,
}
