//! In-memory browser model.
//!
//! Backs the native CLI and integration tests: every port call mutates a
//! snapshot that can be printed or asserted on afterwards.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use calc_study_application::{
    AddressBar, ApplicationError, BlankContext, ContentFrame, DocumentChrome, FrameSpec,
    HostPorts, KeyHandler, KeyboardHub, ListenerId, Navigator, Notifier,
};

pub const DEFAULT_HEADLESS_ADDRESS: &str = "https://calcstudy.local/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessPopup {
    pub fills_viewport: bool,
    pub frame_src: Option<String>,
    pub closed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessSnapshot {
    pub title: String,
    pub favicon: Option<String>,
    pub favicon_links: usize,
    pub location: String,
    pub history_len: usize,
    pub popups: Vec<HeadlessPopup>,
    pub tabs: Vec<String>,
    pub alerts: Vec<String>,
    pub frame: Option<FrameSpec>,
    pub frame_fullscreen: bool,
}

impl HeadlessSnapshot {
    pub fn path(&self) -> &str {
        split_origin(&self.location).1
    }
}

type SharedHandler = Rc<dyn Fn(&str)>;

#[derive(Clone)]
pub struct HeadlessHost {
    snapshot: Rc<RefCell<HeadlessSnapshot>>,
    handlers: Rc<RefCell<Vec<(ListenerId, SharedHandler)>>>,
    next_listener: Rc<Cell<u64>>,
    popups_allowed: Rc<Cell<bool>>,
}

impl HeadlessHost {
    pub fn new(address: &str) -> Self {
        Self {
            snapshot: Rc::new(RefCell::new(HeadlessSnapshot {
                location: address.to_string(),
                history_len: 1,
                ..HeadlessSnapshot::default()
            })),
            handlers: Rc::new(RefCell::new(Vec::new())),
            next_listener: Rc::new(Cell::new(1)),
            popups_allowed: Rc::new(Cell::new(true)),
        }
    }

    pub fn ports(&self) -> HostPorts {
        HostPorts {
            chrome: Box::new(self.clone()),
            address_bar: Box::new(self.clone()),
            navigator: Rc::new(self.clone()),
            notifier: Box::new(self.clone()),
            keyboard: Rc::new(self.clone()),
            frame: Box::new(self.clone()),
        }
    }

    pub fn snapshot(&self) -> HeadlessSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn block_popups(&self) {
        self.popups_allowed.set(false);
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Delivers a key-down to every subscribed handler.
    pub fn press_key(&self, key: &str) {
        let handlers: Vec<SharedHandler> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(key);
        }
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new(DEFAULT_HEADLESS_ADDRESS)
    }
}

impl DocumentChrome for HeadlessHost {
    fn set_title(&self, title: &str) -> Result<(), ApplicationError> {
        self.snapshot.borrow_mut().title = title.to_string();
        Ok(())
    }

    fn set_favicon(&self, href: &str) -> Result<(), ApplicationError> {
        let mut snapshot = self.snapshot.borrow_mut();
        if snapshot.favicon_links == 0 {
            snapshot.favicon_links = 1;
        }
        snapshot.favicon = Some(href.to_string());
        Ok(())
    }
}

impl AddressBar for HeadlessHost {
    fn replace_path(&self, path: &str) -> Result<(), ApplicationError> {
        let mut snapshot = self.snapshot.borrow_mut();
        let origin = split_origin(&snapshot.location).0.to_string();
        snapshot.location = format!("{origin}{path}");
        Ok(())
    }
}

struct HeadlessPopupContext {
    snapshot: Rc<RefCell<HeadlessSnapshot>>,
    index: usize,
}

impl HeadlessPopupContext {
    fn with_popup(&self, update: impl FnOnce(&mut HeadlessPopup)) -> Result<(), ApplicationError> {
        let mut snapshot = self.snapshot.borrow_mut();
        let popup = snapshot
            .popups
            .get_mut(self.index)
            .filter(|popup| !popup.closed)
            .ok_or_else(|| ApplicationError::Host("popup is no longer open".to_string()))?;
        update(popup);
        Ok(())
    }
}

impl BlankContext for HeadlessPopupContext {
    fn fill_viewport(&self) -> Result<(), ApplicationError> {
        self.with_popup(|popup| popup.fills_viewport = true)
    }

    fn embed_frame(&self, address: &str) -> Result<(), ApplicationError> {
        self.with_popup(|popup| popup.frame_src = Some(address.to_string()))
    }

    fn close(&self) {
        if let Some(popup) = self.snapshot.borrow_mut().popups.get_mut(self.index) {
            popup.closed = true;
        }
    }
}

impl Navigator for HeadlessHost {
    fn current_address(&self) -> Result<String, ApplicationError> {
        Ok(self.snapshot.borrow().location.clone())
    }

    fn assign(&self, url: &str) -> Result<(), ApplicationError> {
        let mut snapshot = self.snapshot.borrow_mut();
        snapshot.location = url.to_string();
        snapshot.history_len += 1;
        Ok(())
    }

    fn replace(&self, url: &str) -> Result<(), ApplicationError> {
        self.snapshot.borrow_mut().location = url.to_string();
        Ok(())
    }

    fn open_blank(&self) -> Result<Option<Box<dyn BlankContext>>, ApplicationError> {
        if !self.popups_allowed.get() {
            return Ok(None);
        }
        let index = {
            let mut snapshot = self.snapshot.borrow_mut();
            snapshot.popups.push(HeadlessPopup::default());
            snapshot.popups.len() - 1
        };
        Ok(Some(Box::new(HeadlessPopupContext {
            snapshot: Rc::clone(&self.snapshot),
            index,
        })))
    }

    fn open_in_new_tab(&self, url: &str) -> Result<(), ApplicationError> {
        self.snapshot.borrow_mut().tabs.push(url.to_string());
        Ok(())
    }
}

impl Notifier for HeadlessHost {
    fn alert(&self, message: &str) {
        self.snapshot.borrow_mut().alerts.push(message.to_string());
    }
}

impl KeyboardHub for HeadlessHost {
    fn subscribe(&self, handler: KeyHandler) -> Result<ListenerId, ApplicationError> {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.handlers.borrow_mut().push((id, Rc::from(handler)));
        Ok(id)
    }

    fn unsubscribe(&self, id: ListenerId) -> Result<(), ApplicationError> {
        self.handlers
            .borrow_mut()
            .retain(|(listener, _)| *listener != id);
        Ok(())
    }
}

impl ContentFrame for HeadlessHost {
    fn mount(&self, spec: &FrameSpec) -> Result<(), ApplicationError> {
        let mut snapshot = self.snapshot.borrow_mut();
        snapshot.frame = Some(spec.clone());
        snapshot.frame_fullscreen = false;
        Ok(())
    }

    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), ApplicationError> {
        self.snapshot.borrow_mut().frame_fullscreen = fullscreen;
        Ok(())
    }

    fn unmount(&self) -> Result<(), ApplicationError> {
        let mut snapshot = self.snapshot.borrow_mut();
        snapshot.frame = None;
        snapshot.frame_fullscreen = false;
        Ok(())
    }
}

/// Splits `scheme://host/path?query` into `("scheme://host", "/path?query")`.
fn split_origin(url: &str) -> (&str, &str) {
    let after_scheme = url.find("://").map_or(0, |index| index + 3);
    match url[after_scheme..].find('/') {
        Some(offset) => url.split_at(after_scheme + offset),
        None => (url, "/"),
    }
}
