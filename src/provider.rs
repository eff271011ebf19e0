//! YouTube Data API client for video duration lookups.
//!
//! The engine only ever needs one thing from the provider: the ISO 8601
//! duration string for a video id. Everything else about the API is kept
//! out of the core behind the [`DurationProvider`] trait.

use std::time::Duration;

use serde::Deserialize;

use crate::error::Error;

const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Narrow interface to the metadata provider.
///
/// "Video does not exist" is a distinct outcome ([`Error::VideoNotFound`])
/// from a transport or auth failure ([`Error::Provider`]).
pub trait DurationProvider {
    fn video_duration(&self, video_id: &str) -> Result<String, Error>;
}

/// Blocking client for the YouTube Data API v3 `videos` endpoint.
pub struct YouTubeClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: &str) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Provider(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: API_BASE_URL.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl DurationProvider for YouTubeClient {
    fn video_duration(&self, video_id: &str) -> Result<String, Error> {
        let url = format!("{}/videos", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "contentDetails"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .map_err(|e| Error::Provider(format!("failed to fetch video details: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(Error::Provider(format!(
                "metadata API returned {status}: {body}"
            )));
        }

        let list: VideoListResponse = response
            .json()
            .map_err(|e| Error::Provider(format!("failed to parse metadata response: {e}")))?;

        let item = list
            .items
            .into_iter()
            .next()
            .ok_or_else(|| Error::VideoNotFound(video_id.to_string()))?;

        Ok(item.content_details.duration)
    }
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    #[serde(rename = "contentDetails")]
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: String,
}
