use std::cell::{Cell, RefCell};

use calc_study_application::{ApplicationError, KeyHandler, KeyboardHub, ListenerId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

use super::js_error;

type KeyClosure = Closure<dyn FnMut(KeyboardEvent)>;

/// Window-level `keydown` listeners, so handlers fire regardless of focus.
pub struct WebKeyboardHub {
    target: Window,
    listeners: RefCell<Vec<(ListenerId, KeyClosure)>>,
    next_id: Cell<u64>,
}

impl WebKeyboardHub {
    pub fn new(target: Window) -> Self {
        Self {
            target,
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    fn detach(&self, closure: &KeyClosure) -> Result<(), ApplicationError> {
        self.target
            .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(js_error)
    }
}

impl KeyboardHub for WebKeyboardHub {
    fn subscribe(&self, handler: KeyHandler) -> Result<ListenerId, ApplicationError> {
        let closure = KeyClosure::new(move |event: KeyboardEvent| handler(&event.key()));
        self.target
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(js_error)?;

        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, closure));
        Ok(id)
    }

    fn unsubscribe(&self, id: ListenerId) -> Result<(), ApplicationError> {
        let removed = {
            let mut listeners = self.listeners.borrow_mut();
            listeners
                .iter()
                .position(|(listener, _)| *listener == id)
                .map(|index| listeners.remove(index))
        };
        match removed {
            Some((_, closure)) => self.detach(&closure),
            None => Ok(()),
        }
    }
}

impl Drop for WebKeyboardHub {
    fn drop(&mut self) {
        for (_, closure) in self.listeners.take() {
            if let Err(error) = self.detach(&closure) {
                tracing::warn!(%error, "failed to remove keydown listener");
            }
        }
    }
}
