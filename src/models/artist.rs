//! Artist-related models.

use serde::{Deserialize, Serialize};

use super::common::{last_thumbnail, ArtistRef, Thumbnail};

/// Album reference attached to an artist's song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlbumRef {
    pub name: String,

    #[serde(default)]
    pub id: Option<String>,
}

/// Song when nested inside an artist context.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSong {
    #[serde(default)]
    pub video_id: Option<String>,

    pub title: String,

    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,

    #[serde(default)]
    pub artists: Vec<ArtistRef>,

    #[serde(default)]
    pub album: Option<AlbumRef>,
}

/// The artist's song shelf.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSongs {
    /// Playlist browse ID holding the full list.
    #[serde(default)]
    pub browse_id: Option<String>,

    #[serde(default)]
    pub results: Vec<ArtistSong>,
}

/// A full artist record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    /// Artist name.
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub channel_id: Option<String>,

    #[serde(default)]
    pub subscribers: Option<String>,

    /// Artist images, smallest first.
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,

    #[serde(default)]
    pub songs: Option<ArtistSongs>,
}

impl Artist {
    /// Get the largest artist image available.
    pub fn cover(&self) -> Option<&Thumbnail> {
        last_thumbnail(&self.thumbnails)
    }

    /// Songs on the artist page, empty when the shelf is missing.
    pub fn song_list(&self) -> &[ArtistSong] {
        self.songs
            .as_ref()
            .map(|s| s.results.as_slice())
            .unwrap_or(&[])
    }
}
