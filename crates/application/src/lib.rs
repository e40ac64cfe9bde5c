mod catalog;
mod disguise;
mod error;
mod escape;
mod ports;
mod service;
mod settings;
mod use_cases;
mod viewer;

#[cfg(test)]
mod testing;

pub use catalog::{CatalogIndex, SearchView};
pub use disguise::DisguiseController;
pub use error::ApplicationError;
pub use escape::{DetachOutcome, EscapeMechanisms, PanicKeyGuard};
pub use ports::{
    AddressBar, BlankContext, CatalogSource, ContentFrame, DocumentChrome, FrameSpec, HostPorts,
    KeyHandler, KeyboardHub, ListenerId, Navigator, Notifier, FRAME_PERMISSIONS,
};
pub use service::ApplicationService;
pub use settings::{CloakSettings, DisguiseSettings, EscapeSettings};
pub use use_cases::{
    CloseViewerCommand, DetachCommand, GoHomeCommand, OpenExternalCommand,
    SearchCommand, SelectEntryCommand, SelectPresetCommand, SetPathMaskCommand,
    ShutdownCommand, StartSessionCommand, ToggleFullscreenCommand, TogglePathMaskCommand,
};
pub use viewer::Viewer;
