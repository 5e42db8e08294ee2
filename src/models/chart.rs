//! Chart models.

use serde::{Deserialize, Serialize};

use super::common::{artists_string, ArtistRef, Thumbnail};

/// A ranked section of the charts page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSection<T> {
    /// Playlist ID backing this chart, if any.
    #[serde(default)]
    pub playlist: Option<String>,

    /// Chart entries in rank order.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for ChartSection<T> {
    fn default() -> Self {
        Self {
            playlist: None,
            items: Vec::new(),
        }
    }
}

/// A video entry in the top videos chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartVideo {
    /// Video title.
    pub title: String,

    /// Video ID used by the song endpoint.
    pub video_id: String,

    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,

    #[serde(default)]
    pub artists: Vec<ArtistRef>,

    /// View count as displayed by the API (e.g. "1.2B").
    #[serde(default)]
    pub views: Option<String>,
}

impl ChartVideo {
    /// Get all artist names joined by a separator.
    pub fn artists_string(&self, separator: &str) -> String {
        artists_string(&self.artists, separator)
    }
}

/// An artist entry in the top artists chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartArtist {
    /// Artist name.
    pub title: String,

    /// Browse ID used by the artist endpoint.
    pub browse_id: String,

    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,

    #[serde(default)]
    pub subscribers: Option<String>,

    #[serde(default)]
    pub rank: Option<String>,

    /// "up", "down" or "neutral".
    #[serde(default)]
    pub trend: Option<String>,
}

/// The charts page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Charts {
    #[serde(default)]
    pub videos: Option<ChartSection<ChartVideo>>,

    #[serde(default)]
    pub artists: Option<ChartSection<ChartArtist>>,
}

impl Charts {
    /// Top video entries, empty when the section is missing.
    pub fn video_items(&self) -> &[ChartVideo] {
        self.videos.as_ref().map(|s| s.items.as_slice()).unwrap_or(&[])
    }

    /// Top artist entries, empty when the section is missing.
    pub fn artist_items(&self) -> &[ChartArtist] {
        self.artists
            .as_ref()
            .map(|s| s.items.as_slice())
            .unwrap_or(&[])
    }
}

/// Charts response body. The backend has served both the bare charts object
/// and one wrapped in `results`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChartsResponse {
    Wrapped { results: Charts },
    Bare(Charts),
}

impl From<ChartsResponse> for Charts {
    fn from(response: ChartsResponse) -> Self {
        match response {
            ChartsResponse::Wrapped { results } => results,
            ChartsResponse::Bare(charts) => charts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn charts_json() -> serde_json::Value {
        json!({
            "videos": {
                "playlist": "PL123",
                "items": [{
                    "title": "Hit Song",
                    "videoId": "abc123",
                    "thumbnails": [{"url": "http://img/1.jpg", "width": 120, "height": 90}],
                    "artists": [{"name": "Singer", "id": "UC1"}],
                    "views": "10M"
                }]
            },
            "artists": {
                "playlist": null,
                "items": [{
                    "title": "Band",
                    "browseId": "UC2",
                    "thumbnails": [],
                    "rank": "1",
                    "trend": "up"
                }]
            }
        })
    }

    #[test]
    fn test_parse_bare_charts() {
        let charts: Charts = serde_json::from_value::<ChartsResponse>(charts_json())
            .unwrap()
            .into();
        assert_eq!(charts.video_items().len(), 1);
        assert_eq!(charts.video_items()[0].video_id, "abc123");
        assert_eq!(charts.artist_items()[0].browse_id, "UC2");
    }

    #[test]
    fn test_parse_wrapped_charts() {
        let charts: Charts =
            serde_json::from_value::<ChartsResponse>(json!({ "results": charts_json() }))
                .unwrap()
                .into();
        assert_eq!(charts.video_items()[0].artists_string(", "), "Singer");
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let charts = Charts::default();
        assert!(charts.video_items().is_empty());
        assert!(charts.artist_items().is_empty());
    }
}
