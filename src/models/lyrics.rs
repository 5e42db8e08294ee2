//! Lyrics model.

use serde::{Deserialize, Serialize};

/// Lyrics of a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Lyrics {
    /// Plain lyrics text, lines separated by `\n`.
    #[serde(default)]
    pub lyrics: Option<String>,

    /// Attribution line, e.g. "Source: LyricFind".
    #[serde(default)]
    pub source: Option<String>,
}

impl Lyrics {
    /// Lyrics split into lines. Empty when there is no text.
    pub fn lines(&self) -> Vec<&str> {
        self.lyrics
            .as_deref()
            .map(|text| text.lines().collect())
            .unwrap_or_default()
    }
}
