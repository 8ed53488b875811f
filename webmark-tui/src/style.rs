//! Colours for the TUI, configured as HSV and converted to terminal colours on use.

use std::hash::{Hash, Hasher};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// HSV color representation (hue 0-1, saturation 0-1, value 0-1).
pub type Hsv = [f32; 3];

/// Hashes a string and produces a pleasing colour from that hash.
pub fn string_to_hsv(s: &str) -> Hsv {
    const DISTINCT_COLOURS: u64 = 36_000;

    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    s.hash(&mut hasher);
    let hash = hasher.finish();
    let hue = (hash % DISTINCT_COLOURS) as f32 / DISTINCT_COLOURS as f32;

    [hue, 0.75, 0.75]
}

/// Hashes a string to produce a pleasing terminal colour.
pub fn string_to_color(s: &str) -> Color {
    hsv_to_color(string_to_hsv(s))
}

macro_rules! style_fields {
    ($(($field:ident, $fn_name:ident, $default:expr)),* $(,)?) => {
        /// Style configuration with HSV colors for various UI elements.
        #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
        #[serde(default)]
        pub struct Style {
            $(
                #[doc = concat!("HSV colour for ", stringify!($fn_name))]
                pub $field: Hsv,
            )*
        }
        impl Default for Style {
            fn default() -> Self {
                Self {
                    $($field: $default,)*
                }
            }
        }
        impl Style {
            $(
                pub fn $fn_name(&self) -> Color {
                    hsv_to_color(self.$field)
                }
            )*
        }
    }
}

style_fields![
    (background_hsv, background_color, [0.69, 0.44, 0.18]),
    (banner_hsv, banner_color, [0.61, 1.0, 0.85]),
    (text_hsv, text_color, [0.0, 0.0, 1.0]),
    (muted_hsv, muted_color, [0.0, 0.0, 0.5]),
    (border_hsv, border_color, [0.61, 0.90, 0.90]),
    (selected_hsv, selected_color, [0.69, 0.40, 0.35]),
    (hovered_hsv, hovered_color, [0.6, 0.6, 1.0]),
    (song_title_hsv, song_title_color, [0.0, 0.0, 1.0]),
    (url_hsv, url_color, [0.55, 0.70, 1.0]),
    (accent_hsv, accent_color, [0.55, 0.70, 1.0]),
    (error_hsv, error_color, [0.0, 0.75, 0.9]),
];

/// Converts HSV (all ranges 0-1) to a gamma-corrected terminal colour.
pub fn hsv_to_color([h, s, v]: Hsv) -> Color {
    #![allow(clippy::many_single_char_names)]
    let h = (h.fract() + 1.0).fract(); // wrap
    let s = s.clamp(0.0, 1.0);

    let f = h * 6.0 - (h * 6.0).floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let [r, g, b] = match (h * 6.0).floor() as i32 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        5 => [v, p, q],
        _ => unreachable!(),
    };

    Color::Rgb(
        gamma_u8_from_linear_f32(r),
        gamma_u8_from_linear_f32(g),
        gamma_u8_from_linear_f32(b),
    )
}

fn gamma_u8_from_linear_f32(l: f32) -> u8 {
    if l <= 0.0 {
        0
    } else if l <= 0.0031308 {
        fast_round(3294.6 * l)
    } else if l <= 1.0 {
        fast_round(269.025 * l.powf(1.0 / 2.4) - 14.025)
    } else {
        255
    }
}

fn fast_round(r: f32) -> u8 {
    (r + 0.5) as _ // rust does a saturating cast since 1.45
}
