use calc_study_domain::EntryId;

#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand;

#[derive(Debug, Clone, Default)]
pub struct ShutdownCommand;

#[derive(Debug, Clone, Default)]
pub struct SearchCommand {
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct SelectPresetCommand {
    pub key: String,
}

#[derive(Debug, Clone, Copy)]
pub struct SetPathMaskCommand {
    pub masked: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TogglePathMaskCommand;

#[derive(Debug, Clone, Copy)]
pub struct SelectEntryCommand {
    pub entry_id: EntryId,
}

#[derive(Debug, Clone, Default)]
pub struct ToggleFullscreenCommand;

#[derive(Debug, Clone, Default)]
pub struct CloseViewerCommand;

#[derive(Debug, Clone, Default)]
pub struct OpenExternalCommand;

#[derive(Debug, Clone, Default)]
pub struct DetachCommand;

#[derive(Debug, Clone, Default)]
pub struct GoHomeCommand;
