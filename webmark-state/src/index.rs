use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use smol_str::SmolStr;

use crate::Song;

/// The number of fields every accepted row must have: artist, title, URL.
const FIELDS_PER_ROW: usize = 3;

/// An error that occurred while reading a song list from disk.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or was not valid UTF-8.
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
}
impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
        }
    }
}
impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
        }
    }
}

/// A mapping from artist name to that artist's songs, ordered by title.
///
/// Built once from a CSV song list and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistSongIndex {
    songs: BTreeMap<SmolStr, Vec<Song>>,
    rejected_rows: usize,
}
impl ArtistSongIndex {
    /// Parses a song list.
    ///
    /// The first line is a header and is skipped without looking at it. Every
    /// other line is split on commas with no quoting or escaping, and is kept
    /// only if it has exactly three fields (artist, title, URL) and none of them
    /// is empty. Fields are not trimmed. A URL containing a comma therefore
    /// splits into extra fields and its row is dropped, as does a trailing or
    /// doubled comma, since empty fields are kept by the split.
    ///
    /// Lines end at `\n`; a `\r` before it is dropped, and a `\r` anywhere
    /// else is part of the field. Blank lines are ignored.
    pub fn parse(content: &str) -> Self {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_reader(content.as_bytes());

        let mut index = Self::default();
        for record in reader.records() {
            let Ok(record) = record else {
                index.rejected_rows += 1;
                continue;
            };

            let mut fields: Vec<&str> = record.iter().collect();
            if let Some(last) = fields.last_mut() {
                *last = last.strip_suffix('\r').unwrap_or(last);
            }
            if fields == [""] {
                continue;
            }

            let [artist, title, url] = fields[..] else {
                index.rejected_rows += 1;
                continue;
            };
            if [artist, title, url].iter().any(|field| field.is_empty()) {
                index.rejected_rows += 1;
                continue;
            }

            index
                .songs
                .entry(SmolStr::new(artist))
                .or_default()
                .push(Song::new(title, url));
        }

        for songs in index.songs.values_mut() {
            songs.sort_by_cached_key(Song::sort_key);
        }

        index
    }

    /// Reads and parses a song list from disk.
    pub fn read(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Returns the songs for `artist`, or an empty slice if it has none.
    pub fn songs(&self, artist: &str) -> &[Song] {
        self.songs.get(artist).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the names of all artists with at least one song, in byte order.
    pub fn artists(&self) -> impl Iterator<Item = &SmolStr> {
        self.songs.keys()
    }

    /// Iterates over every artist and their songs, in artist-name byte order.
    pub fn iter(&self) -> impl Iterator<Item = (&SmolStr, &[Song])> {
        self.songs.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// The total number of songs across all artists.
    pub fn song_count(&self) -> usize {
        self.songs.values().map(Vec::len).sum()
    }

    /// The number of rows that were dropped for being malformed.
    pub fn rejected_rows(&self) -> usize {
        self.rejected_rows
    }

    /// Whether the index has no songs at all.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "artist,title,url\n";

    fn titles(index: &ArtistSongIndex, artist: &str) -> Vec<String> {
        index
            .songs(artist)
            .iter()
            .map(|s| s.title.clone())
            .collect()
    }

    #[test]
    fn test_single_row() {
        let index = ArtistSongIndex::parse("artist,title,url\naespa,Spicy,https://youtu.be/xyz");
        assert_eq!(
            index.songs("aespa"),
            &[Song::new("Spicy", "https://youtu.be/xyz")]
        );
        assert_eq!(index.song_count(), 1);
        assert_eq!(index.rejected_rows(), 0);
    }

    #[test]
    fn test_header_is_discarded_without_validation() {
        let index = ArtistSongIndex::parse("aespa,Drama,https://a\nITZY,WANNABE,https://b\n");
        assert!(index.songs("aespa").is_empty());
        assert_eq!(titles(&index, "ITZY"), ["WANNABE"]);
    }

    #[test]
    fn test_header_only() {
        assert!(ArtistSongIndex::parse(HEADER).is_empty());
        assert!(ArtistSongIndex::parse("").is_empty());
    }

    #[test]
    fn test_malformed_rows_are_dropped() {
        let content = format!(
            "{HEADER}\
             aespa,Spicy\n\
             aespa,Spicy,https://a,extra\n\
             aespa,,https://a\n\
             ,Spicy,https://a\n\
             aespa,Spicy,\n\
             aespa,Next Level,https://b\n"
        );
        let index = ArtistSongIndex::parse(&content);
        assert_eq!(titles(&index, "aespa"), ["Next Level"]);
        assert_eq!(index.rejected_rows(), 5);
        for (_, songs) in index.iter() {
            for song in songs {
                assert!(!song.title.is_empty());
                assert!(!song.url.is_empty());
            }
        }
    }

    #[test]
    fn test_empty_fields_are_not_collapsed() {
        // A trailing or doubled comma leaves an empty field behind, so neither
        // row counts as three fields.
        let content = format!(
            "{HEADER}\
             aespa,Spicy,https://a,\n\
             aespa,,Drama,https://b\n"
        );
        let index = ArtistSongIndex::parse(&content);
        assert!(index.is_empty());
        assert_eq!(index.rejected_rows(), 2);
    }

    #[test]
    fn test_lone_carriage_return_stays_in_field() {
        let content = format!("{HEADER}aespa,Sp\ricy,https://a\n");
        let index = ArtistSongIndex::parse(&content);
        assert_eq!(titles(&index, "aespa"), ["Sp\ricy"]);
        assert_eq!(index.rejected_rows(), 0);
    }

    #[test]
    fn test_url_with_comma_is_dropped() {
        let content = format!("{HEADER}IVE,LOVE DIVE,https://example.com/?a=1,2\n");
        let index = ArtistSongIndex::parse(&content);
        assert!(index.is_empty());
        assert_eq!(index.rejected_rows(), 1);
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let content = format!("{HEADER}IVE, ELEVEN ,https://a\n");
        let index = ArtistSongIndex::parse(&content);
        assert_eq!(titles(&index, "IVE"), [" ELEVEN "]);
    }

    #[test]
    fn test_quotes_are_literal() {
        let content = format!("{HEADER}ITZY,\"ICY\",https://a\n");
        let index = ArtistSongIndex::parse(&content);
        assert_eq!(titles(&index, "ITZY"), ["\"ICY\""]);
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let content = "artist,title,url\r\n\r\nBIGBANG,BANG BANG BANG,https://a\r\n\r\n";
        let index = ArtistSongIndex::parse(content);
        assert_eq!(
            index.songs("BIGBANG"),
            &[Song::new("BANG BANG BANG", "https://a")]
        );
        assert_eq!(index.rejected_rows(), 0);

        let index = ArtistSongIndex::parse("artist,title,url\r\nIVE,ELEVEN,\r\n");
        assert!(index.is_empty());
        assert_eq!(index.rejected_rows(), 1);
    }

    #[test]
    fn test_songs_sorted_case_insensitively() {
        let content = format!(
            "{HEADER}\
             Stray_Kids,Thunderous,https://a\n\
             Stray_Kids,back door,https://b\n\
             Stray_Kids,MANIAC,https://c\n\
             Stray_Kids,Astronaut,https://d\n\
             aespa,savage,https://e\n\
             aespa,Black Mamba,https://f\n"
        );
        let index = ArtistSongIndex::parse(&content);
        assert_eq!(
            titles(&index, "Stray_Kids"),
            ["Astronaut", "back door", "MANIAC", "Thunderous"]
        );
        for (_, songs) in index.iter() {
            for pair in songs.windows(2) {
                assert!(pair[0].title.to_lowercase() <= pair[1].title.to_lowercase());
            }
        }
    }

    #[test]
    fn test_artist_names_are_case_sensitive_keys() {
        let content = format!("{HEADER}ive,a,https://a\nIVE,b,https://b\n");
        let index = ArtistSongIndex::parse(&content);
        assert_eq!(titles(&index, "IVE"), ["b"]);
        assert_eq!(titles(&index, "ive"), ["a"]);
        assert_eq!(index.artists().count(), 2);
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("webmark-state-missing/songs.csv");
        let err = ArtistSongIndex::read(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("songs.csv"));
    }

    #[test]
    fn test_read_from_disk() {
        let dir = std::env::temp_dir().join(format!("webmark-state-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("songs.csv");
        std::fs::write(&path, format!("{HEADER}ITZY,DALLA DALLA,https://a\n")).unwrap();

        let index = ArtistSongIndex::read(&path).unwrap();
        assert_eq!(titles(&index, "ITZY"), ["DALLA DALLA"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = std::env::temp_dir().join(format!("webmark-state-utf8-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("songs.csv");
        std::fs::write(&path, b"artist,title,url\n\xff,\xfe,x\n").unwrap();

        let err = ArtistSongIndex::read(&path).unwrap_err();
        let LoadError::Io { path: err_path, source } = &err;
        assert_eq!(err_path, &path);
        assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
