use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the app persists: the tip-id to 0/1 completion map and the
/// one-shot prize flag. Serialized as a single JSON blob.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub status: BTreeMap<String, u8>,
    #[serde(default)]
    pub prize_claimed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub id: String,
    pub done: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub current: u64,
    pub total: u64,
    pub ratio: f64,
    pub label: String,
    pub ring_offset: f64,
    pub color: String,
    pub prize_claimed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizeImage {
    pub url: String,
    pub artist: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub checked: bool,
    pub progress: ProgressResponse,
    pub prize: Option<PrizeImage>,
    pub alert: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PrizeStateResponse {
    pub claimed: bool,
}
