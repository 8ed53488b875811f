use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The artists shown in the app, as `(name, image reference)` pairs.
const ROSTER: &[(&str, &str)] = &[
    ("aespa", "aespa_img"),
    ("BIGBANG", "bigbang_img"),
    ("ITZY", "itzy_img"),
    ("IVE", "ive_img"),
    ("Stray_Kids", "stray_kids_img"),
];

/// An artist, as `webmark` cares about it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artist {
    /// The artist name; also the key into the song index
    pub name: SmolStr,
    /// The name of the artist's photo asset, without extension
    pub image_ref: SmolStr,
}
impl Artist {
    /// Creates a new artist.
    pub fn new(name: impl Into<SmolStr>, image_ref: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            image_ref: image_ref.into(),
        }
    }

    /// Returns the fixed artist roster, sorted case-insensitively by name.
    pub fn roster() -> Vec<Artist> {
        let mut artists: Vec<Artist> = ROSTER
            .iter()
            .map(|(name, image_ref)| Artist::new(*name, *image_ref))
            .collect();
        artists.sort_by_cached_key(|a| a.name.to_lowercase());
        artists
    }
}
impl std::fmt::Display for Artist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_is_sorted_case_insensitively() {
        let roster = Artist::roster();
        assert_eq!(roster.len(), 5);
        for pair in roster.windows(2) {
            assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
        }
        assert_eq!(roster[0].name, "aespa");
        assert_eq!(roster[4].name, "Stray_Kids");
    }

    #[test]
    fn test_roster_image_refs() {
        let roster = Artist::roster();
        let bigbang = roster.iter().find(|a| a.name == "BIGBANG").unwrap();
        assert_eq!(bigbang.image_ref, "bigbang_img");
    }
}
