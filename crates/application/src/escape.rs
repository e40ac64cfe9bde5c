use std::rc::Rc;

use crate::{
    ApplicationError, EscapeSettings, KeyHandler, KeyboardHub, ListenerId, Navigator, Notifier,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachOutcome {
    Detached,
    Blocked,
}

/// Keeps the panic key handler registered; dropping it unregisters.
pub struct PanicKeyGuard {
    keyboard: Rc<dyn KeyboardHub>,
    id: Option<ListenerId>,
}

impl PanicKeyGuard {
    pub fn listener(&self) -> Option<ListenerId> {
        self.id
    }

    pub fn release(mut self) -> Result<(), ApplicationError> {
        match self.id.take() {
            Some(id) => self.keyboard.unsubscribe(id),
            None => Ok(()),
        }
    }
}

impl Drop for PanicKeyGuard {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            if let Err(error) = self.keyboard.unsubscribe(id) {
                tracing::warn!(%error, "failed to unregister panic key handler");
            }
        }
    }
}

pub struct EscapeMechanisms {
    settings: EscapeSettings,
    navigator: Rc<dyn Navigator>,
    notifier: Box<dyn Notifier>,
    keyboard: Rc<dyn KeyboardHub>,
    guard: Option<PanicKeyGuard>,
}

impl EscapeMechanisms {
    pub fn new(
        settings: EscapeSettings,
        navigator: Rc<dyn Navigator>,
        notifier: Box<dyn Notifier>,
        keyboard: Rc<dyn KeyboardHub>,
    ) -> Self {
        Self {
            settings,
            navigator,
            notifier,
            keyboard,
            guard: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.guard.is_some()
    }

    pub fn panic_key(&self) -> &str {
        &self.settings.panic_key
    }

    /// Registers the panic key handler. Already armed means nothing to do.
    pub fn arm(&mut self) -> Result<(), ApplicationError> {
        if self.guard.is_some() {
            return Ok(());
        }

        let navigator = Rc::clone(&self.navigator);
        let panic_key = self.settings.panic_key.clone();
        let destination = self.settings.panic_destination.clone();
        let handler: KeyHandler = Box::new(move |pressed: &str| {
            if pressed != panic_key {
                return;
            }
            if let Err(error) = redirect(&*navigator, &destination) {
                tracing::warn!(%error, "panic redirect failed");
            }
        });

        let id = self.keyboard.subscribe(handler)?;
        tracing::debug!(listener = id.0, "panic key armed");
        self.guard = Some(PanicKeyGuard {
            keyboard: Rc::clone(&self.keyboard),
            id: Some(id),
        });
        Ok(())
    }

    pub fn disarm(&mut self) -> Result<(), ApplicationError> {
        match self.guard.take() {
            Some(guard) => guard.release(),
            None => Ok(()),
        }
    }

    /// Duplicates the page into a blank popup, then sends this context away.
    ///
    /// The popup and its frame are fully built before the current page
    /// navigates; a refused popup alerts the user and changes nothing.
    pub fn detach(&self) -> Result<DetachOutcome, ApplicationError> {
        let address = self.navigator.current_address()?;
        let Some(popup) = self.navigator.open_blank()? else {
            tracing::warn!("blank context refused by host");
            self.notifier.alert(&self.settings.popup_blocked_message);
            return Ok(DetachOutcome::Blocked);
        };

        if let Err(error) = popup
            .fill_viewport()
            .and_then(|()| popup.embed_frame(&address))
        {
            popup.close();
            return Err(error);
        }

        self.navigator.replace(&self.settings.detach_destination)?;
        tracing::info!("page detached into blank context");
        Ok(DetachOutcome::Detached)
    }
}

fn redirect(navigator: &dyn Navigator, destination: &str) -> Result<(), ApplicationError> {
    tracing::info!(destination, "panic redirect");
    navigator.assign(destination)
}
