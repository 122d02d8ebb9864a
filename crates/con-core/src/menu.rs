//! Application menu commands pushed from the back end to the UI.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// A menu command. Delivered with no payload to every listener.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum MenuCommand {
    #[strum(serialize = "menu-new-conference")]
    #[serde(rename = "menu-new-conference")]
    NewConference,
    #[strum(serialize = "menu-open-repo")]
    #[serde(rename = "menu-open-repo")]
    OpenRepo,
    #[strum(serialize = "menu-sync-website")]
    #[serde(rename = "menu-sync-website")]
    SyncWebsite,
    #[strum(serialize = "menu-validate-data")]
    #[serde(rename = "menu-validate-data")]
    ValidateData,
}

impl MenuCommand {
    /// Event name the UI subscribes to. Also used as the menu item id.
    pub fn event_name(&self) -> &'static str {
        (*self).into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::NewConference => "New Conference",
            MenuCommand::OpenRepo => "Open Website Repo",
            MenuCommand::SyncWebsite => "Sync with Website",
            MenuCommand::ValidateData => "Validate Data",
        }
    }

    pub fn accelerator(&self) -> Option<&'static str> {
        match self {
            MenuCommand::NewConference => Some("CmdOrCtrl+N"),
            MenuCommand::OpenRepo => Some("CmdOrCtrl+O"),
            MenuCommand::SyncWebsite => Some("CmdOrCtrl+S"),
            MenuCommand::ValidateData => None,
        }
    }

    /// Resolves a menu item id back to its command.
    pub fn from_event_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}
