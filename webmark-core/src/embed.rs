//! Rewriting of song URLs into a form that plays inline in an embedded browser.

use serde::{Deserialize, Serialize};

/// Query parameters appended to YouTube links so they play inline without autoplay.
pub const EMBED_PARAMS: &str = "autoplay=0&playsinline=1";

/// Host fragments that mark a URL as a YouTube link.
const YOUTUBE_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];

/// How YouTube links are rewritten into embed links.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmbedStyle {
    /// Rewrites exactly as the app always has.
    ///
    /// A `watch?v=` link keeps no `?` once rewritten, so the parameters end up in
    /// the path (`/embed/abc123&autoplay=0&playsinline=1`). Normalizing an
    /// already normalized link appends the parameters a second time.
    #[default]
    Legacy,
    /// Produces a well-formed query string and never appends the parameters twice.
    Corrected,
}
impl EmbedStyle {
    /// All styles, in the order they're offered.
    pub const ALL: [EmbedStyle; 2] = [EmbedStyle::Legacy, EmbedStyle::Corrected];

    /// The name used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedStyle::Legacy => "legacy",
            EmbedStyle::Corrected => "corrected",
        }
    }
}
impl std::fmt::Display for EmbedStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl std::str::FromStr for EmbedStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmbedStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown embed style: {s}"))
    }
}

/// Whether `url` points at YouTube, judged by its text alone.
pub fn is_youtube(url: &str) -> bool {
    YOUTUBE_HOSTS.iter().any(|host| url.contains(host))
}

/// Rewrites a YouTube link into an embed link. Other links are returned unchanged.
pub fn normalize(url: &str, style: EmbedStyle) -> String {
    if !is_youtube(url) {
        return url.to_string();
    }

    match style {
        EmbedStyle::Legacy => normalize_legacy(url),
        EmbedStyle::Corrected => normalize_corrected(url),
    }
}

/// Normalizes `url`, falling back to the original if the result isn't a valid URL.
pub fn resolve(url: &str, style: EmbedStyle) -> String {
    let normalized = normalize(url, style);
    if normalized == url {
        return normalized;
    }

    match url::Url::parse(&normalized) {
        Ok(_) => normalized,
        Err(e) => {
            tracing::warn!("normalized url {normalized:?} is invalid ({e}), using {url:?}");
            url.to_string()
        }
    }
}

/// Whether any `&`-joined parameters in `url` come after the `?` that starts its query.
///
/// Legacy rewriting of `watch?v=` links fails this check.
pub fn query_is_well_formed(url: &str) -> bool {
    match (url.find('?'), url.find('&')) {
        (None, Some(_)) => false,
        (Some(query), Some(amp)) => query < amp,
        _ => true,
    }
}

fn normalize_legacy(url: &str) -> String {
    // The separator is picked from the URL as stored, before `watch?v=` loses its `?`.
    let separator = query_separator(url);
    if url.contains("embed") {
        format!("{url}{separator}{EMBED_PARAMS}")
    } else {
        let rewritten = url.replace("watch?v=", "embed/");
        format!("{rewritten}{separator}{EMBED_PARAMS}")
    }
}

fn normalize_corrected(url: &str) -> String {
    let mut rewritten = if url.contains("embed") {
        url.to_string()
    } else {
        url.replace("watch?v=", "embed/")
    };

    // `watch?v=abc&t=10` becomes `embed/abc&t=10`; promote the first `&` to start the query.
    if !rewritten.contains('?')
        && let Some(amp) = rewritten.find('&')
    {
        rewritten.replace_range(amp..amp + 1, "?");
    }

    if rewritten.contains("playsinline=") {
        return rewritten;
    }

    let separator = query_separator(&rewritten);
    format!("{rewritten}{separator}{EMBED_PARAMS}")
}

fn query_separator(url: &str) -> char {
    if url.contains('?') { '&' } else { '?' }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_youtube() {
        assert!(is_youtube("https://www.youtube.com/watch?v=abc123"));
        assert!(is_youtube("https://m.youtube.com/watch?v=abc123"));
        assert!(is_youtube("https://youtu.be/xyz"));
        assert!(!is_youtube("https://example.com/song"));
        assert!(!is_youtube("https://vimeo.com/123"));
    }

    #[test]
    fn test_legacy_watch_url() {
        assert_eq!(
            normalize("https://www.youtube.com/watch?v=abc123", EmbedStyle::Legacy),
            "https://www.youtube.com/embed/abc123&autoplay=0&playsinline=1"
        );
        assert_eq!(
            normalize("https://www.youtube.com/watch?v=abc&t=10", EmbedStyle::Legacy),
            "https://www.youtube.com/embed/abc&t=10&autoplay=0&playsinline=1"
        );
    }

    #[test]
    fn test_legacy_short_url() {
        assert_eq!(
            normalize("https://youtu.be/xyz", EmbedStyle::Legacy),
            "https://youtu.be/xyz?autoplay=0&playsinline=1"
        );
        assert_eq!(
            normalize("https://youtu.be/xyz?si=share", EmbedStyle::Legacy),
            "https://youtu.be/xyz?si=share&autoplay=0&playsinline=1"
        );
    }

    #[test]
    fn test_legacy_embed_url() {
        assert_eq!(
            normalize("https://www.youtube.com/embed/abc", EmbedStyle::Legacy),
            "https://www.youtube.com/embed/abc?autoplay=0&playsinline=1"
        );
        assert_eq!(
            normalize("https://www.youtube.com/embed/abc?start=5", EmbedStyle::Legacy),
            "https://www.youtube.com/embed/abc?start=5&autoplay=0&playsinline=1"
        );
    }

    #[test]
    fn test_legacy_is_not_idempotent() {
        let once = normalize("https://www.youtube.com/embed/abc", EmbedStyle::Legacy);
        let twice = normalize(&once, EmbedStyle::Legacy);
        assert_eq!(
            twice,
            "https://www.youtube.com/embed/abc?autoplay=0&playsinline=1&autoplay=0&playsinline=1"
        );
    }

    #[test]
    fn test_non_youtube_passes_through() {
        for style in EmbedStyle::ALL {
            assert_eq!(
                normalize("https://example.com/song", style),
                "https://example.com/song"
            );
            assert_eq!(
                normalize("https://example.com/watch?v=abc", style),
                "https://example.com/watch?v=abc"
            );
        }
    }

    #[test]
    fn test_corrected_watch_url() {
        assert_eq!(
            normalize("https://www.youtube.com/watch?v=abc123", EmbedStyle::Corrected),
            "https://www.youtube.com/embed/abc123?autoplay=0&playsinline=1"
        );
        assert_eq!(
            normalize("https://www.youtube.com/watch?v=abc&t=10", EmbedStyle::Corrected),
            "https://www.youtube.com/embed/abc?t=10&autoplay=0&playsinline=1"
        );
        assert_eq!(
            normalize("https://youtu.be/xyz", EmbedStyle::Corrected),
            "https://youtu.be/xyz?autoplay=0&playsinline=1"
        );
    }

    #[test]
    fn test_corrected_is_idempotent() {
        for url in [
            "https://www.youtube.com/watch?v=abc123",
            "https://www.youtube.com/embed/abc",
            "https://youtu.be/xyz?si=share",
        ] {
            let once = normalize(url, EmbedStyle::Corrected);
            assert_eq!(normalize(&once, EmbedStyle::Corrected), once);
        }
    }

    #[test]
    fn test_resolve_keeps_valid_normalized_url() {
        assert_eq!(
            resolve("https://www.youtube.com/watch?v=abc123", EmbedStyle::Legacy),
            "https://www.youtube.com/embed/abc123&autoplay=0&playsinline=1"
        );
    }

    #[test]
    fn test_resolve_falls_back_on_invalid_url() {
        // No scheme, so the normalized form doesn't parse as an absolute URL.
        assert_eq!(
            resolve("youtube.com/watch?v=abc", EmbedStyle::Legacy),
            "youtube.com/watch?v=abc"
        );
        assert_eq!(
            resolve("https://youtu.be:99999/xyz", EmbedStyle::Corrected),
            "https://youtu.be:99999/xyz"
        );
    }

    #[test]
    fn test_resolve_passes_through_non_youtube() {
        assert_eq!(
            resolve("not a url at all", EmbedStyle::Legacy),
            "not a url at all"
        );
    }

    #[test]
    fn test_query_is_well_formed() {
        let legacy = normalize("https://www.youtube.com/watch?v=abc123", EmbedStyle::Legacy);
        assert!(!query_is_well_formed(&legacy));
        let corrected = normalize("https://www.youtube.com/watch?v=abc123", EmbedStyle::Corrected);
        assert!(query_is_well_formed(&corrected));
        assert!(query_is_well_formed("https://example.com/song"));
        assert!(query_is_well_formed("https://youtu.be/xyz?autoplay=0&playsinline=1"));
    }

    #[test]
    fn test_embed_style_from_str() {
        assert_eq!("legacy".parse::<EmbedStyle>(), Ok(EmbedStyle::Legacy));
        assert_eq!("Corrected".parse::<EmbedStyle>(), Ok(EmbedStyle::Corrected));
        assert!("fixed".parse::<EmbedStyle>().is_err());
    }
}
