//! HTML renderers.
//!
//! One function per page kind. Each takes the fetched value, or `None` when
//! the fetch failed, and returns the markup for the content container. Every
//! interpolated value is escaped.

use std::fmt::Write as _;

use crate::models::common::{first_thumbnail, Thumbnail};
use crate::models::{Album, Artist, Charts, Lyrics, ResultType, SearchResult, Song};
use crate::router::Route;

/// Separator between artist names.
const ARTIST_SEPARATOR: &str = ", ";

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn error_message(what: &str) -> String {
    format!("<h1>Error loading {}</h1>", what)
}

fn img(thumbnail: Option<&Thumbnail>, alt: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}">"#,
        escape_html(thumbnail.map(|t| t.url.as_str()).unwrap_or("")),
        escape_html(alt)
    )
}

/// Seconds as "M:SS", or "H:MM:SS" from one hour up.
fn format_duration(seconds: u64) -> String {
    let (hours, minutes, seconds) = (seconds / 3600, seconds / 60 % 60, seconds % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

fn song_link(video_id: Option<&str>) -> String {
    match video_id {
        Some(id) => Route::Song(id.to_string()).to_fragment(),
        None => "#".to_string(),
    }
}

/// Message shown while a route's data is being fetched.
pub fn loading_message(route: &Route) -> String {
    match route {
        Route::Home => "<h1>Loading Charts...</h1>".to_string(),
        Route::Search { query } => format!("<h1>Searching for \"{}\"...</h1>", escape_html(query)),
        Route::Song(_) => "<h1>Loading song...</h1>".to_string(),
        Route::Album(_) => "<h1>Loading album...</h1>".to_string(),
        Route::Artist(_) => "<h1>Loading artist...</h1>".to_string(),
        Route::Lyrics(_) => "<h1>Loading lyrics...</h1>".to_string(),
        Route::Unknown { page } => render_placeholder(page),
    }
}

/// Placeholder for pages that have no handler.
pub fn render_placeholder(page: &str) -> String {
    let page = escape_html(page);
    format!(
        "<h1>{} Page</h1><p>Content for {} page will be loaded here.</p>",
        page, page
    )
}

/// Render the charts page.
pub fn render_charts(charts: Option<&Charts>) -> String {
    let Some(charts) = charts else {
        return error_message("charts");
    };

    let mut html = String::from(r#"<h1>Top Charts</h1><div class="charts-grid">"#);

    if charts.videos.is_some() {
        html.push_str("<h2>Top Videos</h2>");
        for item in charts.video_items() {
            let _ = write!(
                html,
                r#"<a href="{}" class="chart-item">{}<h3>{}</h3><p>{}</p></a>"#,
                escape_html(&Route::Song(item.video_id.clone()).to_fragment()),
                img(first_thumbnail(&item.thumbnails), &item.title),
                escape_html(&item.title),
                escape_html(&item.artists_string(ARTIST_SEPARATOR)),
            );
        }
    }

    if charts.artists.is_some() {
        html.push_str("<h2>Top Artists</h2>");
        for item in charts.artist_items() {
            let _ = write!(
                html,
                r#"<a href="{}" class="chart-item">{}<h3>{}</h3><p>{}</p></a>"#,
                escape_html(&Route::Artist(item.browse_id.clone()).to_fragment()),
                img(first_thumbnail(&item.thumbnails), &item.title),
                escape_html(&item.title),
                escape_html(item.subscribers.as_deref().unwrap_or("")),
            );
        }
    }

    html.push_str("</div>");
    html
}

/// Link target for a search hit, by result type.
pub fn search_result_link(item: &SearchResult) -> String {
    let route = match item.result_type {
        ResultType::Song | ResultType::Video => item.video_id.clone().map(Route::Song),
        ResultType::Album => item.browse_id.clone().map(Route::Album),
        ResultType::Artist => item.browse_id.clone().map(Route::Artist),
        _ => None,
    };
    route
        .map(|r| r.to_fragment())
        .unwrap_or_else(|| "#".to_string())
}

/// Render a list of search hits.
pub fn render_search_results(results: Option<&[SearchResult]>) -> String {
    let Some(results) = results else {
        return error_message("search results");
    };

    let mut html = String::from(r#"<h1>Search Results</h1><div class="search-results-grid">"#);

    for item in results {
        let title = item.display_title();
        let _ = write!(
            html,
            r#"<a href="{}" class="search-result-item">{}<h3>{}</h3><p>{}</p></a>"#,
            escape_html(&search_result_link(item)),
            img(first_thumbnail(&item.thumbnails), title),
            escape_html(title),
            escape_html(&item.subtitle(ARTIST_SEPARATOR)),
        );
    }

    html.push_str("</div>");
    html
}

/// Render the song detail page.
pub fn render_song(song: Option<&Song>) -> String {
    let Some(song) = song else {
        return error_message("song");
    };

    let details = &song.video_details;
    let mut html = format!(
        r#"<div class="song-details">{}<h1>{}</h1><h2>{}</h2>"#,
        img(song.cover(), &details.title),
        escape_html(&details.title),
        escape_html(&details.author),
    );
    if let Some(length) = song.length_seconds() {
        let _ = write!(html, r#"<p class="song-length">{}</p>"#, format_duration(length));
    }
    if !details.video_id.is_empty() {
        let _ = write!(
            html,
            r#"<a href="{}" class="lyrics-link">Lyrics</a>"#,
            escape_html(&Route::Lyrics(details.video_id.clone()).to_fragment())
        );
    }
    html.push_str("</div>");
    html
}

/// Render the album detail page with its track list in album order.
pub fn render_album(album: Option<&Album>) -> String {
    let Some(album) = album else {
        return error_message("album");
    };

    let mut html = format!(
        r#"<div class="album-details">{}<h1>{}</h1><h2>{}</h2>"#,
        img(album.cover(), &album.title),
        escape_html(&album.title),
        escape_html(&album.artists_string(ARTIST_SEPARATOR)),
    );

    let mut meta = Vec::new();
    if let Some(year) = &album.year {
        meta.push(escape_html(year));
    }
    let track_count = album.track_count.map_or(album.tracks.len(), |n| n as usize);
    if track_count > 0 {
        meta.push(format!("{} tracks", track_count));
    }
    let total = album.total_duration_seconds();
    if total > 0 {
        meta.push(format_duration(total));
    }
    if !meta.is_empty() {
        let _ = write!(html, r#"<p class="album-meta">{}</p>"#, meta.join(" • "));
    }
    html.push_str(r#"<div class="track-list">"#);

    for track in &album.tracks {
        let _ = write!(
            html,
            r#"<a href="{}" class="track-item"><p>{}</p><p>{}</p></a>"#,
            escape_html(&song_link(track.video_id.as_deref())),
            escape_html(&track.title),
            escape_html(track.duration.as_deref().unwrap_or("")),
        );
    }

    html.push_str("</div></div>");
    html
}

/// Render the artist detail page.
pub fn render_artist(artist: Option<&Artist>) -> String {
    let Some(artist) = artist else {
        return error_message("artist");
    };

    let mut html = format!(
        r#"<div class="artist-details">{}<h1>{}</h1><p>{}</p>"#,
        img(artist.cover(), &artist.name),
        escape_html(&artist.name),
        escape_html(artist.description.as_deref().unwrap_or("")),
    );

    let songs = artist.song_list();
    if !songs.is_empty() {
        html.push_str(r#"<h2>Songs</h2><div class="track-list">"#);
        for song in songs {
            let _ = write!(
                html,
                r#"<a href="{}" class="track-item"><p>{}</p><p>{}</p></a>"#,
                escape_html(&song_link(song.video_id.as_deref())),
                escape_html(&song.title),
                escape_html(song.album.as_ref().map(|a| a.name.as_str()).unwrap_or("")),
            );
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
    html
}

/// Render song lyrics, one paragraph line per lyric line.
pub fn render_lyrics(lyrics: Option<&Lyrics>) -> String {
    let Some(lyrics) = lyrics else {
        return error_message("lyrics");
    };

    let lines = lyrics.lines();
    if lines.is_empty() {
        return r#"<div class="lyrics"><p>No lyrics available.</p></div>"#.to_string();
    }

    let body = lines
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br>");
    let mut html = format!(r#"<div class="lyrics"><p>{}</p>"#, body);
    if let Some(source) = &lyrics.source {
        let _ = write!(html, r#"<p class="lyrics-source">{}</p>"#, escape_html(source));
    }
    html.push_str("</div>");
    html
}

/// Wrap page content in the full document: search box, content container
/// and player controls showing `button_label`.
pub fn render_document(content: &str, button_label: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>YouTube Music</title>
</head>
<body>
<header>
<input type="text" id="search-input" placeholder="Search">
<button id="search-button">Search</button>
</header>
<main id="main-content">{}</main>
<footer>
<audio id="audio-player"></audio>
<button id="play-pause-button">{}</button>
<input type="range" id="progress-bar" min="0" max="100" value="0">
<input type="range" id="volume-slider" min="0" max="1" step="0.01" value="1">
</footer>
</body>
</html>
"#,
        content,
        escape_html(button_label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AlbumTrack, ArtistRef, ChartSection, ChartVideo};

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(render_charts(None), "<h1>Error loading charts</h1>");
        assert_eq!(
            render_search_results(None),
            "<h1>Error loading search results</h1>"
        );
        assert_eq!(render_song(None), "<h1>Error loading song</h1>");
        assert_eq!(render_album(None), "<h1>Error loading album</h1>");
        assert_eq!(render_artist(None), "<h1>Error loading artist</h1>");
        assert_eq!(render_lyrics(None), "<h1>Error loading lyrics</h1>");
    }

    #[test]
    fn test_render_charts() {
        let charts = Charts {
            videos: Some(ChartSection {
                playlist: None,
                items: vec![ChartVideo {
                    title: "Hit".to_string(),
                    video_id: "v1".to_string(),
                    thumbnails: vec![Thumbnail::new("http://img/1.jpg", 120, 90)],
                    artists: vec![ArtistRef::new("A"), ArtistRef::new("B")],
                    views: None,
                }],
            }),
            artists: None,
        };

        let html = render_charts(Some(&charts));
        assert!(html.starts_with("<h1>Top Charts</h1>"));
        assert!(html.contains("<h2>Top Videos</h2>"));
        assert!(html.contains(r##"href="#song/v1""##));
        assert!(html.contains(r#"src="http://img/1.jpg""#));
        assert!(html.contains("<p>A, B</p>"));
        assert!(!html.contains("Top Artists"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_render_empty_charts() {
        let html = render_charts(Some(&Charts::default()));
        assert_eq!(html, r#"<h1>Top Charts</h1><div class="charts-grid"></div>"#);
    }

    #[test]
    fn test_search_result_links() {
        let song = SearchResult {
            result_type: ResultType::Song,
            video_id: Some("v1".into()),
            ..Default::default()
        };
        let album = SearchResult {
            result_type: ResultType::Album,
            browse_id: Some("MPRE1".into()),
            ..Default::default()
        };
        let artist = SearchResult {
            result_type: ResultType::Artist,
            browse_id: Some("UC1".into()),
            ..Default::default()
        };
        let playlist = SearchResult {
            result_type: ResultType::Playlist,
            browse_id: Some("VL1".into()),
            ..Default::default()
        };
        assert_eq!(search_result_link(&song), "#song/v1");
        assert_eq!(search_result_link(&album), "#album/MPRE1");
        assert_eq!(search_result_link(&artist), "#artist/UC1");
        assert_eq!(search_result_link(&playlist), "#");
    }

    #[test]
    fn test_render_search_results_subtitle() {
        let results = vec![SearchResult {
            result_type: ResultType::Artist,
            artist: Some("Queen".into()),
            browse_id: Some("UCq".into()),
            ..Default::default()
        }];
        let html = render_search_results(Some(results.as_slice()));
        assert!(html.contains("<h3>Queen</h3>"));
        assert!(html.contains("<p>artist</p>"));
        assert!(html.contains(r##"href="#artist/UCq""##));
    }

    #[test]
    fn test_render_search_results_unknown_type() {
        let results: Vec<SearchResult> = serde_json::from_value(serde_json::json!([
            {"resultType": "station", "title": "Radio", "browseId": "RD1"}
        ]))
        .unwrap();
        let html = render_search_results(Some(results.as_slice()));
        assert!(html.contains("<h3>Radio</h3>"));
        assert!(html.contains("<p>station</p>"));
        assert!(html.contains(r##"<a href="#" class="search-result-item">"##));
    }

    #[test]
    fn test_render_album_tracks_in_order() {
        let album = Album {
            title: "Record".into(),
            artists: vec![ArtistRef::new("Band")],
            thumbnails: vec![
                Thumbnail::new("http://img/small.jpg", 60, 60),
                Thumbnail::new("http://img/big.jpg", 544, 544),
            ],
            tracks: vec![
                AlbumTrack {
                    video_id: Some("t1".into()),
                    title: "First".into(),
                    duration: Some("3:01".into()),
                    ..Default::default()
                },
                AlbumTrack {
                    video_id: Some("t2".into()),
                    title: "Second".into(),
                    duration: Some("4:02".into()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let html = render_album(Some(&album));
        assert!(html.contains(r#"src="http://img/big.jpg""#));
        assert!(html.contains("<h2>Band</h2>"));
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert!(html.contains("<p>3:01</p>"));
        assert!(html.contains(r#"<p class="album-meta">2 tracks • 7:03</p>"#));
    }

    #[test]
    fn test_render_album_meta() {
        let album = Album {
            title: "Long".into(),
            year: Some("1973".into()),
            track_count: Some(12),
            tracks: vec![AlbumTrack {
                title: "Suite".into(),
                duration: Some("1:02:03".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let html = render_album(Some(&album));
        assert!(html.contains(r#"<p class="album-meta">1973 • 12 tracks • 1:02:03</p>"#));

        let html = render_album(Some(&Album::default()));
        assert!(!html.contains("album-meta"));
    }

    #[test]
    fn test_render_song_length() {
        let song: Song = serde_json::from_value(serde_json::json!({
            "videoDetails": {"videoId": "abc", "title": "T", "author": "A", "lengthSeconds": "215"}
        }))
        .unwrap();
        let html = render_song(Some(&song));
        assert!(html.contains(r#"<p class="song-length">3:35</p>"#));

        let song = Song::default();
        assert!(!render_song(Some(&song)).contains("song-length"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(3723), "1:02:03");
    }

    #[test]
    fn test_render_escapes_titles() {
        let album = Album {
            title: "<script>alert(1)</script>".into(),
            ..Default::default()
        };
        let html = render_album(Some(&album));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_loading_messages() {
        assert_eq!(loading_message(&Route::Home), "<h1>Loading Charts...</h1>");
        assert_eq!(
            loading_message(&Route::Search {
                query: "abba".into()
            }),
            "<h1>Searching for \"abba\"...</h1>"
        );
        assert_eq!(
            loading_message(&Route::Album("x".into())),
            "<h1>Loading album...</h1>"
        );
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(
            render_placeholder("library"),
            "<h1>library Page</h1><p>Content for library page will be loaded here.</p>"
        );
    }

    #[test]
    fn test_render_lyrics() {
        let lyrics = Lyrics {
            lyrics: Some("line one\nline two".into()),
            source: Some("Source: LyricFind".into()),
        };
        let html = render_lyrics(Some(&lyrics));
        assert!(html.contains("line one<br>line two"));
        assert!(html.contains("Source: LyricFind"));

        let html = render_lyrics(Some(&Lyrics::default()));
        assert!(html.contains("No lyrics available."));
    }

    #[test]
    fn test_render_document_wraps_content() {
        let html = render_document("<h1>Hi</h1>", crate::player::PLAY_LABEL);
        assert!(html.contains(r#"<main id="main-content"><h1>Hi</h1></main>"#));
        assert!(html.contains(r#"id="audio-player""#));
    }
}
