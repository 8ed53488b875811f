use std::path::PathBuf;

use webmark_state::{Artist, ArtistSongIndex, Song};

/// The song list compiled into the binary.
pub const BUNDLED_SONGS_CSV: &str = include_str!("../assets/songs.csv");

/// Where the song list is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SongSource {
    /// The `songs.csv` bundled with the app.
    #[default]
    Bundled,
    /// A song list on disk.
    File(PathBuf),
}
impl SongSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(SongSource::File).unwrap_or_default()
    }
}
impl std::fmt::Display for SongSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SongSource::Bundled => write!(f, "bundled songs.csv"),
            SongSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything the app displays: the artist roster and each artist's songs.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artists: Vec<Artist>,
    index: ArtistSongIndex,
}
impl Catalog {
    pub fn new(mut artists: Vec<Artist>, index: ArtistSongIndex) -> Self {
        artists.sort_by_cached_key(|a| a.name.to_lowercase());
        Self { artists, index }
    }

    /// Builds the catalog for the fixed roster.
    ///
    /// A song list that can't be read is logged and leaves every artist without
    /// songs; it never fails.
    pub fn load(source: &SongSource) -> Self {
        let index = match source {
            SongSource::Bundled => ArtistSongIndex::parse(BUNDLED_SONGS_CSV),
            SongSource::File(path) => ArtistSongIndex::read(path).unwrap_or_else(|e| {
                tracing::error!("could not load song list: {e}");
                ArtistSongIndex::default()
            }),
        };

        if index.rejected_rows() > 0 {
            tracing::trace!(
                "skipped {} malformed rows in {source}",
                index.rejected_rows()
            );
        }
        tracing::info!(
            "loaded {} songs for {} artists from {source}",
            index.song_count(),
            index.artists().count()
        );

        let catalog = Self::new(Artist::roster(), index);
        for name in catalog.index.artists() {
            if !catalog.artists.iter().any(|a| &a.name == name) {
                tracing::warn!("songs for {name} have no artist entry and won't be shown");
            }
        }
        catalog
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn artist(&self, artist: usize) -> Option<&Artist> {
        self.artists.get(artist)
    }

    /// Returns the songs for the artist at `artist`; empty if it has none or is out of range.
    pub fn songs(&self, artist: usize) -> &[Song] {
        self.artist(artist)
            .map(|a| self.index.songs(&a.name))
            .unwrap_or_default()
    }

    pub fn song(&self, artist: usize, song: usize) -> Option<&Song> {
        self.songs(artist).get(song)
    }

    pub fn index(&self) -> &ArtistSongIndex {
        &self.index
    }
}
