//! Data models for YouTube Music API responses.
//!
//! These mirror the JSON shapes served by the backend. They are lenient:
//! optional fields default and unknown fields are ignored.

pub mod album;
pub mod artist;
pub mod chart;
pub mod common;
pub mod lyrics;
pub mod search;
pub mod song;

// Re-exports for convenience
pub use album::{Album, AlbumTrack};
pub use artist::{AlbumRef, Artist, ArtistSong, ArtistSongs};
pub use chart::{ChartArtist, ChartSection, ChartVideo, Charts, ChartsResponse};
pub use common::{ArtistRef, Thumbnail};
pub use lyrics::Lyrics;
pub use search::{ResultType, SearchResponse, SearchResult};
pub use song::{Format, Song, StreamingData, VideoDetails};
