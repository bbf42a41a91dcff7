//! One-shot prize image lookup against an external image search API.

use crate::errors::AppError;
use crate::models::PrizeImage;
use serde::Deserialize;
use std::env;

pub const DEFAULT_PRIZE_API: &str = "https://api.waifu.im";

/// Expected body: `{ "images": [ { "url": ..., "artist": { "name": ... } } ] }`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    images: Vec<SearchImage>,
}

#[derive(Debug, Deserialize)]
struct SearchImage {
    url: String,
    artist: Artist,
}

#[derive(Debug, Deserialize)]
struct Artist {
    name: String,
}

#[derive(Clone)]
pub struct PrizeClient {
    base_url: String,
    http: reqwest::Client,
}

impl PrizeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL from `PRIZE_API_URL`, falling back to the public API.
    pub fn from_env() -> Self {
        Self::new(env::var("PRIZE_API_URL").unwrap_or_else(|_| DEFAULT_PRIZE_API.to_string()))
    }

    /// Fetches one prize image. Single request, no retry.
    pub async fn fetch_prize(&self) -> Result<PrizeImage, AppError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .get(&url)
            .query(&[
                ("is_nsfw", "false"),
                ("included_tags", "kamisato-ayaka"),
                ("height", ">=2000"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::upstream(format!(
                "image search returned {}",
                response.status()
            )));
        }

        let body: SearchResponse = response.json().await?;
        let image = body
            .images
            .into_iter()
            .next()
            .ok_or_else(|| AppError::upstream("image search returned no images"))?;

        Ok(PrizeImage {
            url: image.url,
            artist: image.artist.name,
        })
    }
}
