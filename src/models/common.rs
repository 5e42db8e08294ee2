//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Image with URL and dimensions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Thumbnail {
    /// URL to the image.
    pub url: String,

    /// Width in pixels.
    #[serde(default)]
    pub width: u32,

    /// Height in pixels.
    #[serde(default)]
    pub height: u32,
}

impl Thumbnail {
    /// Create a new thumbnail.
    pub fn new<S: Into<String>>(url: S, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }
}

/// Artist reference as it appears nested in songs, albums and search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistRef {
    /// Artist name.
    pub name: String,

    /// Channel/browse ID, when the API links the artist.
    #[serde(default)]
    pub id: Option<String>,
}

impl ArtistRef {
    /// Create a new artist reference with a name only.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }
}

/// Join artist names with a separator.
pub fn artists_string(artists: &[ArtistRef], separator: &str) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// First thumbnail in a list (the small card image).
pub fn first_thumbnail(thumbnails: &[Thumbnail]) -> Option<&Thumbnail> {
    thumbnails.first()
}

/// Last thumbnail in a list. The API orders thumbnails smallest first, so
/// this is the largest one.
pub fn last_thumbnail(thumbnails: &[Thumbnail]) -> Option<&Thumbnail> {
    thumbnails.last()
}
