//! # ytmusic-browser
//!
//! A client for browsing a YouTube Music catalog backend: charts, search,
//! songs, albums, artists and lyrics, rendered as HTML fragments.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`App`] struct:
//!
//! ```rust,no_run
//! use ytmusic_browser::{App, HeadlessMedia, HtmlBuffer, MusicApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = MusicApi::new("http://localhost:8000")?;
//!     let mut app = App::new(api, HtmlBuffer::new(), HeadlessMedia::new());
//!
//!     // Charts
//!     app.navigate("#home").await;
//!     println!("{}", app.view().html());
//!
//!     // Search box submit
//!     app.submit_search("daft punk").await;
//!     println!("{}", app.view().html());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pieces
//!
//! - [`router`] - URL fragment to [`Route`]
//! - [`MusicApi`] - one fetch per resource kind
//! - [`render`] - one HTML renderer per page kind
//! - [`player`] - play/pause, seek and volume over a [`MediaElement`]

pub mod api;
mod app;
pub mod error;
pub mod models;
pub mod player;
pub mod render;
pub mod router;

// Main interface (recommended)
pub use app::{App, ContentView, HtmlBuffer};

pub use api::{MusicApi, MusicApiBuilder};
pub use error::BrowserError;
pub use models::{Album, Artist, Charts, Lyrics, SearchResult, Song};
pub use player::{HeadlessMedia, MediaElement, PlayerControls};
pub use router::Route;
