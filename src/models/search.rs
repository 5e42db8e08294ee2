//! Search result models.

use serde::{Deserialize, Serialize};

use super::common::{artists_string, ArtistRef, Thumbnail};

/// Kind of a search hit, taken from the `resultType` discriminator.
///
/// Kinds this crate does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultType {
    Song,
    Video,
    Album,
    Artist,
    Playlist,
    Podcast,
    Episode,
    Profile,
    Other(String),
    /// The hit carried no discriminator.
    #[default]
    Unknown,
}

impl ResultType {
    /// Label as the API spells it.
    pub fn label(&self) -> &str {
        match self {
            ResultType::Song => "song",
            ResultType::Video => "video",
            ResultType::Album => "album",
            ResultType::Artist => "artist",
            ResultType::Playlist => "playlist",
            ResultType::Podcast => "podcast",
            ResultType::Episode => "episode",
            ResultType::Profile => "profile",
            ResultType::Other(kind) => kind,
            ResultType::Unknown => "",
        }
    }
}

impl From<String> for ResultType {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "song" => ResultType::Song,
            "video" => ResultType::Video,
            "album" => ResultType::Album,
            "artist" => ResultType::Artist,
            "playlist" => ResultType::Playlist,
            "podcast" => ResultType::Podcast,
            "episode" => ResultType::Episode,
            "profile" => ResultType::Profile,
            "" => ResultType::Unknown,
            _ => ResultType::Other(kind),
        }
    }
}

impl From<ResultType> for String {
    fn from(kind: ResultType) -> Self {
        match kind {
            ResultType::Other(kind) => kind,
            known => known.label().to_string(),
        }
    }
}

/// A single search hit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub result_type: ResultType,

    #[serde(default)]
    pub title: Option<String>,

    /// Artist hits carry their name here instead of in `title`.
    #[serde(default)]
    pub artist: Option<String>,

    #[serde(default)]
    pub video_id: Option<String>,

    #[serde(default)]
    pub browse_id: Option<String>,

    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,

    #[serde(default)]
    pub artists: Option<Vec<ArtistRef>>,

    #[serde(default)]
    pub duration: Option<String>,
}

impl SearchResult {
    /// Display title, falling back to the artist name for artist hits.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.artist.as_deref())
            .unwrap_or("")
    }

    /// Artist names joined by a separator, or the result type when the hit
    /// lists no artists.
    pub fn subtitle(&self, separator: &str) -> String {
        match &self.artists {
            Some(artists) if !artists.is_empty() => artists_string(artists, separator),
            _ => self.result_type.label().to_string(),
        }
    }
}

/// Search response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}
