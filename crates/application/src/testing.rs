use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{
    AddressBar, ApplicationError, BlankContext, ContentFrame, DocumentChrome, FrameSpec,
    HostPorts, KeyHandler, KeyboardHub, ListenerId, Navigator, Notifier,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostCall {
    SetTitle(String),
    SetFavicon(String),
    ReplacePath(String),
    Assign(String),
    Replace(String),
    OpenBlank,
    OpenInNewTab(String),
    FillViewport,
    EmbedFrame(String),
    ClosePopup,
    Alert(String),
    Subscribe(ListenerId),
    Unsubscribe(ListenerId),
    Mount(FrameSpec),
    SetFullscreen(bool),
    Unmount,
}

struct RecorderState {
    calls: RefCell<Vec<HostCall>>,
    handlers: RefCell<Vec<(ListenerId, Rc<dyn Fn(&str)>)>>,
    next_listener: Cell<u64>,
    block_popups: Cell<bool>,
    fail_embed: Cell<bool>,
    fail_favicon: Cell<bool>,
    fail_path: Cell<bool>,
    fail_frame: Cell<bool>,
    address: RefCell<String>,
}

/// Fake host that records every port call in order.
#[derive(Clone)]
pub(crate) struct RecordingHost {
    state: Rc<RecorderState>,
}

impl RecordingHost {
    pub(crate) fn new() -> Self {
        Self {
            state: Rc::new(RecorderState {
                calls: RefCell::new(Vec::new()),
                handlers: RefCell::new(Vec::new()),
                next_listener: Cell::new(1),
                block_popups: Cell::new(false),
                fail_embed: Cell::new(false),
                fail_favicon: Cell::new(false),
                fail_path: Cell::new(false),
                fail_frame: Cell::new(false),
                address: RefCell::new("https://calcstudy.example/?unit=4".to_string()),
            }),
        }
    }

    pub(crate) fn ports(&self) -> HostPorts {
        HostPorts {
            chrome: Box::new(self.clone()),
            address_bar: Box::new(self.clone()),
            navigator: Rc::new(self.clone()),
            notifier: Box::new(self.clone()),
            keyboard: Rc::new(self.clone()),
            frame: Box::new(self.clone()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<HostCall> {
        self.state.calls.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.state.calls.borrow_mut().clear();
    }

    pub(crate) fn block_popups(&self) {
        self.state.block_popups.set(true);
    }

    pub(crate) fn fail_embed(&self) {
        self.state.fail_embed.set(true);
    }

    pub(crate) fn fail_favicon(&self, fail: bool) {
        self.state.fail_favicon.set(fail);
    }

    pub(crate) fn fail_path(&self, fail: bool) {
        self.state.fail_path.set(fail);
    }

    /// Makes `mount` and `set_fullscreen` fail, as with a missing container.
    pub(crate) fn fail_frame(&self, fail: bool) {
        self.state.fail_frame.set(fail);
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.state.handlers.borrow().len()
    }

    pub(crate) fn press(&self, key: &str) {
        let handlers: Vec<Rc<dyn Fn(&str)>> = self
            .state
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(key);
        }
    }

    fn record(&self, call: HostCall) {
        self.state.calls.borrow_mut().push(call);
    }
}

impl DocumentChrome for RecordingHost {
    fn set_title(&self, title: &str) -> Result<(), ApplicationError> {
        self.record(HostCall::SetTitle(title.to_string()));
        Ok(())
    }

    fn set_favicon(&self, href: &str) -> Result<(), ApplicationError> {
        if self.state.fail_favicon.get() {
            return Err(ApplicationError::Host("document has no head".to_string()));
        }
        self.record(HostCall::SetFavicon(href.to_string()));
        Ok(())
    }
}

impl AddressBar for RecordingHost {
    fn replace_path(&self, path: &str) -> Result<(), ApplicationError> {
        if self.state.fail_path.get() {
            return Err(ApplicationError::Host("history unavailable".to_string()));
        }
        self.record(HostCall::ReplacePath(path.to_string()));
        Ok(())
    }
}

struct RecordingPopup {
    host: RecordingHost,
}

impl BlankContext for RecordingPopup {
    fn fill_viewport(&self) -> Result<(), ApplicationError> {
        self.host.record(HostCall::FillViewport);
        Ok(())
    }

    fn embed_frame(&self, address: &str) -> Result<(), ApplicationError> {
        if self.host.state.fail_embed.get() {
            return Err(ApplicationError::Host("popup document went away".to_string()));
        }
        self.host.record(HostCall::EmbedFrame(address.to_string()));
        Ok(())
    }

    fn close(&self) {
        self.host.record(HostCall::ClosePopup);
    }
}

impl Navigator for RecordingHost {
    fn current_address(&self) -> Result<String, ApplicationError> {
        Ok(self.state.address.borrow().clone())
    }

    fn assign(&self, url: &str) -> Result<(), ApplicationError> {
        self.record(HostCall::Assign(url.to_string()));
        Ok(())
    }

    fn replace(&self, url: &str) -> Result<(), ApplicationError> {
        self.record(HostCall::Replace(url.to_string()));
        Ok(())
    }

    fn open_blank(&self) -> Result<Option<Box<dyn BlankContext>>, ApplicationError> {
        self.record(HostCall::OpenBlank);
        if self.state.block_popups.get() {
            return Ok(None);
        }
        Ok(Some(Box::new(RecordingPopup { host: self.clone() })))
    }

    fn open_in_new_tab(&self, url: &str) -> Result<(), ApplicationError> {
        self.record(HostCall::OpenInNewTab(url.to_string()));
        Ok(())
    }
}

impl Notifier for RecordingHost {
    fn alert(&self, message: &str) {
        self.record(HostCall::Alert(message.to_string()));
    }
}

impl KeyboardHub for RecordingHost {
    fn subscribe(&self, handler: KeyHandler) -> Result<ListenerId, ApplicationError> {
        let id = ListenerId(self.state.next_listener.get());
        self.state.next_listener.set(id.0 + 1);
        self.state
            .handlers
            .borrow_mut()
            .push((id, Rc::from(handler)));
        self.record(HostCall::Subscribe(id));
        Ok(id)
    }

    fn unsubscribe(&self, id: ListenerId) -> Result<(), ApplicationError> {
        self.state
            .handlers
            .borrow_mut()
            .retain(|(listener, _)| *listener != id);
        self.record(HostCall::Unsubscribe(id));
        Ok(())
    }
}

impl ContentFrame for RecordingHost {
    fn mount(&self, spec: &FrameSpec) -> Result<(), ApplicationError> {
        if self.state.fail_frame.get() {
            return Err(ApplicationError::Host("missing frame container".to_string()));
        }
        self.record(HostCall::Mount(spec.clone()));
        Ok(())
    }

    fn set_fullscreen(&self, fullscreen: bool) -> Result<(), ApplicationError> {
        if self.state.fail_frame.get() {
            return Err(ApplicationError::Host("missing frame container".to_string()));
        }
        self.record(HostCall::SetFullscreen(fullscreen));
        Ok(())
    }

    fn unmount(&self) -> Result<(), ApplicationError> {
        self.record(HostCall::Unmount);
        Ok(())
    }
}
