use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisguisePreset {
    pub key: PresetKey,
    pub display_title: &'static str,
    pub icon_uri: &'static str,
}

impl DisguisePreset {
    /// Label shown in the preset picker.
    pub fn short_label(&self) -> &'static str {
        if self.key == PresetKey::Default {
            return "Default";
        }
        self.display_title
            .split(' ')
            .next()
            .unwrap_or(self.display_title)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresetKey {
    #[default]
    Default,
    GoogleDocs,
    GoogleDrive,
    Classroom,
    Canvas,
}

impl PresetKey {
    pub const ALL: [PresetKey; 5] = [
        PresetKey::Default,
        PresetKey::GoogleDocs,
        PresetKey::GoogleDrive,
        PresetKey::Classroom,
        PresetKey::Canvas,
    ];

    /// Keys are matched exactly; anything else is not a preset.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == key)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::GoogleDocs => "googleDocs",
            Self::GoogleDrive => "googleDrive",
            Self::Classroom => "classroom",
            Self::Canvas => "canvas",
        }
    }

    pub fn preset(self) -> DisguisePreset {
        let (display_title, icon_uri) = match self {
            Self::Default => ("CalcStudy", "/vite.svg"),
            Self::GoogleDocs => (
                "Google Docs",
                "https://ssl.gstatic.com/docs/documents/images/kix-favicon7.ico",
            ),
            Self::GoogleDrive => (
                "My Drive - Google Drive",
                "https://ssl.gstatic.com/images/branding/product/1x/drive_2020q4_32dp.png",
            ),
            Self::Classroom => ("Classes", "https://ssl.gstatic.com/classroom/favicon.png"),
            Self::Canvas => (
                "Dashboard",
                "https://du11hjcvx0uqb.cloudfront.net/dist/images/favicon-e106157072.ico",
            ),
        };
        DisguisePreset {
            key: self,
            display_title,
            icon_uri,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppearanceState {
    pub active_preset: PresetKey,
    pub path_masked: bool,
}

impl AppearanceState {
    pub fn preset(&self) -> DisguisePreset {
        self.active_preset.preset()
    }
}
