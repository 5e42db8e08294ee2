//! Album-related models.
//!
//! This module contains models for representing albums and their
//! ordered track list.

use serde::{Deserialize, Serialize};

use super::common::{artists_string, last_thumbnail, ArtistRef, Thumbnail};

/// Track when nested inside an album context.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumTrack {
    /// Video ID. Unavailable tracks have none.
    #[serde(default)]
    pub video_id: Option<String>,

    /// Track title.
    pub title: String,

    /// Duration formatted by the API as M:SS.
    #[serde(default)]
    pub duration: Option<String>,

    /// Position on the album (1-indexed).
    #[serde(default)]
    pub track_number: Option<u32>,

    /// Artists who performed this track.
    #[serde(default)]
    pub artists: Vec<ArtistRef>,

    #[serde(default)]
    pub is_explicit: bool,
}

impl AlbumTrack {
    /// Duration in seconds, parsed from the M:SS or H:MM:SS text.
    pub fn duration_seconds(&self) -> Option<u64> {
        parse_duration(self.duration.as_deref()?)
    }
}

/// Parse "M:SS" or "H:MM:SS" into seconds.
pub fn parse_duration(text: &str) -> Option<u64> {
    text.split(':')
        .try_fold(0u64, |acc, part| Some(acc * 60 + part.trim().parse::<u64>().ok()?))
}

/// A full album record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Album title.
    pub title: String,

    /// "Album", "Single" or "EP".
    #[serde(default, rename = "type")]
    pub album_type: Option<String>,

    /// Album artists.
    #[serde(default)]
    pub artists: Vec<ArtistRef>,

    /// Cover images, smallest first.
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub year: Option<String>,

    #[serde(default)]
    pub track_count: Option<u32>,

    /// Total duration as displayed by the API (e.g. "42 minutes").
    #[serde(default)]
    pub duration: Option<String>,

    #[serde(default)]
    pub audio_playlist_id: Option<String>,

    /// Tracks in album order.
    #[serde(default)]
    pub tracks: Vec<AlbumTrack>,
}

impl Album {
    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        artists_string(&self.artists, separator)
    }

    /// Get the largest cover image available.
    pub fn cover(&self) -> Option<&Thumbnail> {
        last_thumbnail(&self.thumbnails)
    }

    /// Sum of the known track durations in seconds.
    pub fn total_duration_seconds(&self) -> u64 {
        self.tracks.iter().filter_map(|t| t.duration_seconds()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("3:35"), Some(215));
        assert_eq!(parse_duration("1:02:03"), Some(3723));
        assert_eq!(parse_duration("abc"), None);
    }

    #[test]
    fn test_album_total_duration() {
        let album = Album {
            tracks: vec![
                AlbumTrack {
                    duration: Some("3:00".to_string()),
                    ..Default::default()
                },
                AlbumTrack {
                    duration: Some("4:00".to_string()),
                    ..Default::default()
                },
                AlbumTrack::default(),
            ],
            ..Default::default()
        };
        assert_eq!(album.total_duration_seconds(), 420);
    }

    #[test]
    fn test_album_artists_string() {
        let album = Album {
            artists: vec![ArtistRef::new("Artist A"), ArtistRef::new("Artist B")],
            ..Default::default()
        };
        assert_eq!(album.artists_string(", "), "Artist A, Artist B");
    }

    #[test]
    fn test_deserialize_album() {
        let album: Album = serde_json::from_value(serde_json::json!({
            "title": "Abbey Road",
            "type": "Album",
            "trackCount": 2,
            "artists": [{"name": "The Beatles", "id": "UC9"}],
            "thumbnails": [
                {"url": "http://img/60.jpg", "width": 60, "height": 60},
                {"url": "http://img/544.jpg", "width": 544, "height": 544}
            ],
            "tracks": [
                {"videoId": "t1", "title": "Come Together", "duration": "4:20", "trackNumber": 1},
                {"videoId": "t2", "title": "Something", "duration": "3:03", "trackNumber": 2}
            ]
        }))
        .unwrap();

        assert_eq!(album.album_type.as_deref(), Some("Album"));
        assert_eq!(album.track_count, Some(2));
        assert_eq!(album.cover().unwrap().width, 544);
        assert_eq!(album.tracks[1].title, "Something");
    }
}
