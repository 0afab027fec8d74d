use serde::{Deserialize, Serialize};

/// Venue a swap token can be traded on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapPlatform {
    pub name: String,
    pub icon: String,
    pub url: String,
    #[serde(default)]
    pub background: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapToken {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub platforms: Vec<SwapPlatform>,
}
