//! Connectivity indicator shown above the submit button

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkStatus {
    #[default]
    Online,
    Offline,
    Slow,
}

impl NetworkStatus {
    pub fn from_online(online: bool) -> Self {
        if online {
            Self::Online
        } else {
            Self::Offline
        }
    }

    /// Warning banner for degraded connectivity
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Self::Online => None,
            Self::Offline => Some("You appear to be offline. Please check your connection."),
            Self::Slow => Some("Your connection seems slow. Verification might take longer."),
        }
    }
}
