use serde::{Deserialize, Serialize};

/// A song, as listed under an artist
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    /// The song title
    pub title: String,
    /// The URL the song is stored with; not normalized
    pub url: String,
}
impl Song {
    /// Creates a new song.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// The key songs are ordered by within an artist.
    pub fn sort_key(&self) -> String {
        self.title.to_lowercase()
    }
}
