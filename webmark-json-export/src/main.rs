use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use serde::Serialize;
use webmark_core::{
    BUNDLED_SONGS_CSV, Catalog, EmbedStyle, embed,
    webmark_state::{Artist, ArtistSongIndex},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Where to write the JSON
    output: PathBuf,

    /// Song list to export instead of the bundled one
    #[arg(long)]
    songs: Option<PathBuf>,

    /// How YouTube links are rewritten (legacy or corrected)
    #[arg(long, default_value_t = EmbedStyle::default())]
    embed_style: EmbedStyle,
}

#[derive(Serialize, Debug, PartialEq)]
struct OutputSong {
    title: String,
    url: String,
    embed_url: String,
}

#[derive(Serialize, Debug, PartialEq)]
struct OutputArtist {
    name: String,
    image_ref: String,
    songs: Vec<OutputSong>,
}

fn build_output(catalog: &Catalog, embed_style: EmbedStyle) -> Vec<OutputArtist> {
    catalog
        .artists()
        .iter()
        .enumerate()
        .map(|(i, artist)| OutputArtist {
            name: artist.name.to_string(),
            image_ref: artist.image_ref.to_string(),
            songs: catalog
                .songs(i)
                .iter()
                .map(|song| OutputSong {
                    title: song.title.clone(),
                    url: song.url.clone(),
                    embed_url: embed::resolve(&song.url, embed_style),
                })
                .collect(),
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let index = match &args.songs {
        Some(path) => ArtistSongIndex::read(path)
            .with_context(|| format!("Failed to load songs from {path:?}"))?,
        None => ArtistSongIndex::parse(BUNDLED_SONGS_CSV),
    };
    if index.rejected_rows() > 0 {
        println!("Skipped {} malformed rows", index.rejected_rows());
    }

    let catalog = Catalog::new(Artist::roster(), index);
    let output = build_output(&catalog, args.embed_style);
    println!(
        "Exporting {} songs for {} artists",
        catalog.index().song_count(),
        output.len()
    );

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write to {:?}", args.output))?;

    Ok(())
}
