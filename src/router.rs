//! Fragment router.
//!
//! Maps a URL hash fragment such as `#album/MPRE123` to a [`Route`]. This is
//! the only navigation surface of the browser.

use std::fmt;

/// A page the browser can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Charts page (`#home`, `#charts` or no fragment).
    Home,
    /// Search results (`#search?q=...`).
    Search { query: String },
    /// Song detail (`#song/{videoId}`).
    Song(String),
    /// Album detail (`#album/{browseId}`).
    Album(String),
    /// Artist detail (`#artist/{channelId}`).
    Artist(String),
    /// Song lyrics (`#lyrics/{videoId}`).
    Lyrics(String),
    /// Anything else. Rendered as a placeholder page.
    Unknown { page: String },
}

impl Route {
    /// Parse a fragment. The leading `#` is optional.
    ///
    /// The page name runs up to the first `/` or `?`. IDs keep every segment
    /// after the first `/`, so `#album/a/b` addresses the ID `a/b`.
    pub fn parse(hash: &str) -> Route {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);

        let (page, id, query) = match fragment.find(|c: char| c == '/' || c == '?') {
            Some(i) if fragment[i..].starts_with('/') => (&fragment[..i], &fragment[i + 1..], ""),
            Some(i) => (&fragment[..i], "", &fragment[i + 1..]),
            None => (fragment, "", ""),
        };

        match page {
            "" | "home" | "charts" => Route::Home,
            "search" => match search_query(query) {
                Some(query) => Route::Search { query },
                None => Route::Unknown {
                    page: page.to_string(),
                },
            },
            "song" | "album" | "artist" | "lyrics" if !id.is_empty() => {
                let id = id.to_string();
                match page {
                    "song" => Route::Song(id),
                    "album" => Route::Album(id),
                    "artist" => Route::Artist(id),
                    _ => Route::Lyrics(id),
                }
            }
            _ => Route::Unknown {
                page: page.to_string(),
            },
        }
    }

    /// Canonical fragment for this route, including the leading `#`.
    pub fn to_fragment(&self) -> String {
        match self {
            Route::Home => "#home".to_string(),
            Route::Search { query } => format!("#search?q={}", urlencoding::encode(query)),
            Route::Song(id) => format!("#song/{}", id),
            Route::Album(id) => format!("#album/{}", id),
            Route::Artist(id) => format!("#artist/{}", id),
            Route::Lyrics(id) => format!("#lyrics/{}", id),
            Route::Unknown { page } => format!("#{}", page),
        }
    }

    /// Page name as it appears in the fragment.
    pub fn page(&self) -> &str {
        match self {
            Route::Home => "home",
            Route::Search { .. } => "search",
            Route::Song(_) => "song",
            Route::Album(_) => "album",
            Route::Artist(_) => "artist",
            Route::Lyrics(_) => "lyrics",
            Route::Unknown { page } => page.as_str(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fragment())
    }
}

/// Decoded, non-empty `q` parameter of a query string.
fn search_query(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Fragment to navigate to when the search box is submitted, by button or
/// Enter key. Empty input does not navigate.
pub fn search_fragment(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    Some(
        Route::Search {
            query: input.to_string(),
        }
        .to_fragment(),
    )
}
