use std::{collections::HashMap, path::PathBuf};

use ratatui::style::Color;
use smol_str::SmolStr;
use webmark_core::webmark_state::Artist;

use crate::style::string_to_color;

/// Image formats an artist photo may be stored as, in lookup order.
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// 4 columns × 2 rows of colours extracted from an artist photo.
/// This ratio better matches terminal character aspect ratio (chars are ~2x tall as wide).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtColors {
    /// Colors arranged as [row][col], where row 0 is top, col 0 is left.
    pub colors: [[Color; 4]; 2],
}

impl Default for ArtColors {
    fn default() -> Self {
        Self::solid(Color::DarkGray)
    }
}

impl ArtColors {
    pub fn solid(color: Color) -> Self {
        Self {
            colors: [[color; 4]; 2],
        }
    }
}

/// Artist avatars, computed once per artist from the photos in the assets directory.
pub struct ArtworkCache {
    assets_dir: PathBuf,
    cache: HashMap<SmolStr, ArtColors>,
}

impl ArtworkCache {
    pub fn new(assets_dir: PathBuf) -> Self {
        Self {
            assets_dir,
            cache: HashMap::new(),
        }
    }

    /// Returns the avatar for `artist`. Artists without a readable photo get a
    /// solid colour derived from their name.
    pub fn get(&mut self, artist: &Artist) -> ArtColors {
        if let Some(colors) = self.cache.get(&artist.image_ref) {
            return *colors;
        }

        let colors = self.load(artist).unwrap_or_else(|| {
            tracing::debug!("no photo for {artist} in {}", self.assets_dir.display());
            ArtColors::solid(string_to_color(&artist.name))
        });
        self.cache.insert(artist.image_ref.clone(), colors);
        colors
    }

    fn load(&self, artist: &Artist) -> Option<ArtColors> {
        let path = IMAGE_EXTENSIONS
            .iter()
            .map(|ext| self.assets_dir.join(format!("{}.{ext}", artist.image_ref)))
            .find(|path| path.is_file())?;

        let data = match std::fs::read(&path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("failed to read {}: {e}", path.display());
                return None;
            }
        };

        let colors = compute_quadrant_colors(&data);
        if colors.is_none() {
            tracing::warn!("failed to decode {}", path.display());
        }
        colors
    }
}

/// Computes the average colour of each region in a 4×2 grid (4 cols, 2 rows).
fn compute_quadrant_colors(image_data: &[u8]) -> Option<ArtColors> {
    let img = image::load_from_memory(image_data).ok()?;

    let rgb = img.to_rgb8();
    let (w, h) = (rgb.width() as usize, rgb.height() as usize);

    if w == 0 || h == 0 {
        return None;
    }

    let average_region = |x0: usize, y0: usize, x1: usize, y1: usize| -> Color {
        let mut sum = [0u64; 3];
        let mut count: u64 = 0;

        for y in y0..y1.min(h) {
            for x in x0..x1.min(w) {
                let pixel = rgb.get_pixel(x as u32, y as u32);
                for (total, channel) in sum.iter_mut().zip(pixel.0) {
                    *total += channel as u64;
                }
                count += 1;
            }
        }

        if count == 0 {
            return Color::DarkGray;
        }

        Color::Rgb(
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
        )
    };

    let col_width = w / 4;
    let row_height = h / 2;

    let mut colors = [[Color::DarkGray; 4]; 2];
    for (row, row_colors) in colors.iter_mut().enumerate() {
        for (col, color) in row_colors.iter_mut().enumerate() {
            let x0 = col * col_width;
            let y0 = row * row_height;
            let x1 = if col == 3 { w } else { (col + 1) * col_width };
            let y1 = if row == 1 { h } else { (row + 1) * row_height };
            *color = average_region(x0, y0, x1.max(x0 + 1), y1.max(y0 + 1));
        }
    }

    Some(ArtColors { colors })
}
