//! Song detail models.
//!
//! The song endpoint returns the raw player response: video details plus
//! the streaming formats the player can choose from.

use serde::{Deserialize, Serialize};

use super::common::{last_thumbnail, Thumbnail};

/// Wrapper around the thumbnail list inside `videoDetails`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailList {
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

/// Descriptive part of a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(default)]
    pub video_id: String,

    pub title: String,

    /// Channel name of the uploader, usually the artist.
    #[serde(default)]
    pub author: String,

    /// Length in seconds, sent as a string.
    #[serde(default)]
    pub length_seconds: Option<String>,

    #[serde(default)]
    pub thumbnail: ThumbnailList,
}

/// One stream variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    #[serde(default)]
    pub itag: Option<u32>,

    /// MIME type with codecs, e.g. `audio/webm; codecs="opus"`.
    #[serde(default)]
    pub mime_type: String,

    /// Direct URL. Ciphered formats have none.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub bitrate: Option<u64>,
}

impl Format {
    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio")
    }
}

/// Stream variants offered for a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamingData {
    #[serde(default)]
    pub formats: Vec<Format>,

    #[serde(default)]
    pub adaptive_formats: Vec<Format>,
}

/// A song as returned by the song endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub video_details: VideoDetails,

    #[serde(default)]
    pub streaming_data: StreamingData,
}

impl Song {
    /// First playable audio stream: muxed formats are checked before
    /// adaptive ones, and formats without a URL are skipped.
    pub fn audio_source(&self) -> Option<&Format> {
        self.streaming_data
            .formats
            .iter()
            .chain(self.streaming_data.adaptive_formats.iter())
            .find(|f| f.is_audio() && f.url.is_some())
    }

    /// Largest cover image.
    pub fn cover(&self) -> Option<&Thumbnail> {
        last_thumbnail(&self.video_details.thumbnail.thumbnails)
    }

    /// Length parsed to seconds.
    pub fn length_seconds(&self) -> Option<u64> {
        self.video_details
            .length_seconds
            .as_deref()
            .and_then(|s| s.parse().ok())
    }
}
