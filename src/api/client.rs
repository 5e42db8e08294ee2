//! YouTube Music API client.
//!
//! This module provides a client for the `/youtubemusic` endpoints of the
//! catalog backend. No authentication is required.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use crate::error::{BrowserError, Result};
use crate::models::{
    Album, Artist, Charts, ChartsResponse, Lyrics, SearchResponse, SearchResult, Song,
};

/// Default backend base URL.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Default timeout for HTTP requests.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent.
pub const DEFAULT_USER_AGENT: &str = concat!("ytmusic-browser/", env!("CARGO_PKG_VERSION"));

/// Path prefix shared by every catalog endpoint.
const API_PREFIX: &str = "youtubemusic";

/// YouTube Music API client.
///
/// Provides one method per resource kind. Each call is a single GET with
/// no caching and no retry.
///
/// # Example
///
/// ```rust,no_run
/// use ytmusic_browser::MusicApi;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = MusicApi::new("http://localhost:8000")?;
///     let album = api.get_album("MPREb_4pL8gzRtw1p").await?;
///     println!("Album: {} by {}", album.title, album.artists_string(", "));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MusicApi {
    client: Client,
    base_url: Url,
}

impl MusicApi {
    /// Create a client for the given base URL with default settings.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a builder for configuring the client.
    pub fn builder() -> MusicApiBuilder {
        MusicApiBuilder::default()
    }

    /// The base URL requests are made against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/youtubemusic/{segments...}`. Segments are percent-encoded.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                BrowserError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .pop_if_empty()
            .push(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    /// Make a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // FastAPI-style error bodies carry the message in `detail`
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string));
            error!("API error {}: {}", status, detail.as_deref().unwrap_or("no detail"));
            return Err(BrowserError::HttpStatus {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Get the top charts.
    pub async fn get_charts(&self) -> Result<Charts> {
        let url = self.endpoint_url(&["charts"])?;
        let response: ChartsResponse = self.get_json(url).await?;
        Ok(response.into())
    }

    /// Search the catalog.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        if query.is_empty() {
            return Err(BrowserError::EmptyQuery);
        }

        let mut url = self.endpoint_url(&["search"])?;
        url.query_pairs_mut().append_pair("q", query);

        let response: SearchResponse = self.get_json(url).await?;
        debug!("Search '{}' returned {} results", query, response.results.len());
        Ok(response.results)
    }

    /// Get a song by video ID.
    pub async fn get_song(&self, video_id: &str) -> Result<Song> {
        require_id(video_id, "Video")?;
        let url = self.endpoint_url(&["song", video_id])?;
        self.get_json(url).await
    }

    /// Get an album by browse ID.
    pub async fn get_album(&self, browse_id: &str) -> Result<Album> {
        require_id(browse_id, "Browse")?;
        let url = self.endpoint_url(&["album", browse_id])?;
        self.get_json(url).await
    }

    /// Get an artist by channel ID.
    pub async fn get_artist(&self, artist_id: &str) -> Result<Artist> {
        require_id(artist_id, "Artist")?;
        let url = self.endpoint_url(&["artist", artist_id])?;
        self.get_json(url).await
    }

    /// Get the lyrics of a song by video ID.
    pub async fn get_lyrics(&self, video_id: &str) -> Result<Lyrics> {
        require_id(video_id, "Video")?;
        let url = self.endpoint_url(&["lyrics", video_id])?;
        self.get_json(url).await
    }
}

fn require_id(id: &str, kind: &'static str) -> Result<()> {
    if id.is_empty() {
        return Err(BrowserError::EmptyId(kind));
    }
    Ok(())
}

/// Builder for configuring a [`MusicApi`].
#[derive(Debug)]
pub struct MusicApiBuilder {
    client: Option<Client>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for MusicApiBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl MusicApiBuilder {
    /// Set a custom HTTP client. Timeout and user agent are then ignored.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the backend base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<MusicApi> {
        let base_url = Url::parse(&self.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(BrowserError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(MusicApi { client, base_url })
    }
}
