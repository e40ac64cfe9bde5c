pub const DEFAULT_PANIC_KEY: &str = "`";
pub const DEFAULT_PANIC_DESTINATION: &str = "https://classroom.google.com";
pub const DEFAULT_DETACH_DESTINATION: &str = "https://google.com";
pub const DEFAULT_MASKED_PATH: &str = "/edu/math/calc/unit4/review";
pub const DEFAULT_ROOT_PATH: &str = "/";
pub const DEFAULT_POPUP_BLOCKED_MESSAGE: &str = "Please allow popups!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisguiseSettings {
    pub masked_path: String,
    pub root_path: String,
}

impl Default for DisguiseSettings {
    fn default() -> Self {
        Self {
            masked_path: DEFAULT_MASKED_PATH.to_string(),
            root_path: DEFAULT_ROOT_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeSettings {
    pub panic_key: String,
    pub panic_destination: String,
    pub detach_destination: String,
    pub popup_blocked_message: String,
}

impl Default for EscapeSettings {
    fn default() -> Self {
        Self {
            panic_key: DEFAULT_PANIC_KEY.to_string(),
            panic_destination: DEFAULT_PANIC_DESTINATION.to_string(),
            detach_destination: DEFAULT_DETACH_DESTINATION.to_string(),
            popup_blocked_message: DEFAULT_POPUP_BLOCKED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloakSettings {
    pub disguise: DisguiseSettings,
    pub escape: EscapeSettings,
}
