//! Representations of webmark's data: the artist roster, and the song index built from a
//! CSV song list.
//!
//! Separated out to allow for use in other utilities.
#![deny(missing_docs)]

mod artist;
pub use artist::Artist;

mod song;
pub use song::Song;

mod index;
pub use index::{ArtistSongIndex, LoadError};
