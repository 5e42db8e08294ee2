//! Browser application.
//!
//! Ties the router, API client, renderers and player together. Each
//! navigation writes a loading message, fetches the page data, renders it
//! and replaces the content container.

use tracing::{debug, error};

use crate::api::MusicApi;
use crate::error::Result;
use crate::player::{MediaElement, PlayerControls};
use crate::render;
use crate::router::{self, Route};

/// The content container pages are written into.
pub trait ContentView {
    /// Replace the container's markup.
    fn set_html(&mut self, html: String);
}

/// In-memory content container.
#[derive(Debug, Clone, Default)]
pub struct HtmlBuffer {
    html: String,
    writes: usize,
}

impl HtmlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Number of times the markup was replaced.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ContentView for HtmlBuffer {
    fn set_html(&mut self, html: String) {
        self.html = html;
        self.writes += 1;
    }
}

/// Turn a fetch result into the optional value renderers take. Failures are
/// logged and become `None`.
fn fetched<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Error fetching {}: {}", what, e);
            None
        }
    }
}

/// The browser: a content view, a player, and the client that feeds them.
#[derive(Debug)]
pub struct App<V, M> {
    api: MusicApi,
    view: V,
    player: PlayerControls<M>,
    current: Option<Route>,
}

impl<V: ContentView, M: MediaElement> App<V, M> {
    pub fn new(api: MusicApi, view: V, media: M) -> Self {
        Self {
            api,
            view,
            player: PlayerControls::new(media),
            current: None,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn player(&self) -> &PlayerControls<M> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerControls<M> {
        &mut self.player
    }

    /// Route of the last navigation.
    pub fn current_route(&self) -> Option<&Route> {
        self.current.as_ref()
    }

    /// Search box submit. Navigates to the search page unless the input is
    /// empty, and returns the fragment navigated to.
    pub async fn submit_search(&mut self, input: &str) -> Option<String> {
        let fragment = router::search_fragment(input)?;
        self.navigate(&fragment).await;
        Some(fragment)
    }

    /// Load the page for a fragment into the view.
    pub async fn navigate(&mut self, hash: &str) -> Route {
        let route = Route::parse(hash);
        debug!("Navigating to {} ({:?})", hash, route);

        self.view.set_html(render::loading_message(&route));

        let html = match &route {
            Route::Home => {
                let charts = fetched("charts", self.api.get_charts().await);
                render::render_charts(charts.as_ref())
            }
            Route::Search { query } => {
                let results = fetched("search results", self.api.search(query).await);
                render::render_search_results(results.as_deref())
            }
            Route::Song(id) => {
                let song = fetched("song", self.api.get_song(id).await);
                if let Some(song) = &song {
                    self.player.load_song(song);
                }
                render::render_song(song.as_ref())
            }
            Route::Album(id) => {
                let album = fetched("album", self.api.get_album(id).await);
                render::render_album(album.as_ref())
            }
            Route::Artist(id) => {
                let artist = fetched("artist", self.api.get_artist(id).await);
                render::render_artist(artist.as_ref())
            }
            Route::Lyrics(id) => {
                let lyrics = fetched("lyrics", self.api.get_lyrics(id).await);
                render::render_lyrics(lyrics.as_ref())
            }
            Route::Unknown { page } => render::render_placeholder(page),
        };

        self.view.set_html(html);
        self.current = Some(route.clone());
        route
    }
}
