//! Colour palette loaded from embedded RON.
//!
//! Every body, attack and landmark is drawn as a flat coloured rectangle.

use bevy::prelude::*;
use serde::Deserialize;

const PALETTE_RON: &str = include_str!("../../assets/data/palette.ron");

type Rgb = (f32, f32, f32);

/// Colours for everything on screen, as sRGB triples.
#[derive(Resource, Clone, Debug, Deserialize)]
pub struct Palette {
    pub sky: Rgb,
    pub ground: Rgb,
    pub player: Rgb,
    pub bandit: Rgb,
    pub boss: Rgb,
    pub hit_flash: Rgb,
    pub player_swing: Rgb,
    pub enemy_swing: Rgb,
    pub bolt: Rgb,
    pub shop: Rgb,
    pub portal: Rgb,
    pub dust: Rgb,
    pub spark: Rgb,
    pub blood: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky: (0.53, 0.81, 0.92),
            ground: (0.27, 0.55, 0.2),
            player: (0.2, 0.4, 0.9),
            bandit: (0.78, 0.16, 0.16),
            boss: (0.47, 0.08, 0.08),
            hit_flash: (1.0, 1.0, 1.0),
            player_swing: (0.85, 0.85, 0.9),
            enemy_swing: (0.6, 0.6, 0.6),
            bolt: (0.0, 1.0, 1.0),
            shop: (0.55, 0.35, 0.17),
            portal: (0.78, 0.39, 1.0),
            dust: (0.2, 0.4, 0.9),
            spark: (0.0, 1.0, 1.0),
            blood: (0.9, 0.1, 0.1),
        }
    }
}

impl Palette {
    /// Parse the palette compiled into the binary, falling back to defaults.
    pub fn load() -> Self {
        match ron::from_str(PALETTE_RON) {
            Ok(palette) => {
                info!("Loaded palette");
                palette
            }
            Err(e) => {
                error!("Failed to parse palette: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn color(rgb: Rgb) -> Color {
        Color::srgb(rgb.0, rgb.1, rgb.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_palette_parses() {
        assert!(ron::from_str::<Palette>(PALETTE_RON).is_ok());
    }
}
