//! Swap-aggregator listing

use crate::models::SwapToken;

/// One clickable entry: a token on one platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapListRow {
    pub token_id: String,
    pub token_name: String,
    pub token_icon: String,
    pub platform: String,
    pub platform_icon: String,
    pub url: String,
}

pub const SWAP_LIST_HEADERS: [&str; 2] = ["Token", "Platform"];

/// Flatten tokens into one row per (token, platform), keeping input order
pub fn swap_list_rows(tokens: &[SwapToken]) -> Vec<SwapListRow> {
    tokens
        .iter()
        .flat_map(|token| {
            token.platforms.iter().map(move |platform| SwapListRow {
                token_id: token.id.clone(),
                token_name: token.name.clone(),
                token_icon: token.icon.clone(),
                platform: platform.name.clone(),
                platform_icon: platform.icon.clone(),
                url: platform.url.clone(),
            })
        })
        .collect()
}
