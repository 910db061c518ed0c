// HSLA color, picked once per particle from a violet hue band and handed
// to the canvas as a CSS color string

use rand::Rng;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    // Ranges are [min, min + spread)
    pub const HUE_MIN: f64 = 250.0;
    pub const HUE_SPREAD: f64 = 40.0;
    pub const SATURATION_MIN: f64 = 70.0;
    pub const SATURATION_SPREAD: f64 = 30.0;
    pub const LIGHTNESS_MIN: f64 = 50.0;
    pub const LIGHTNESS_SPREAD: f64 = 20.0;
    pub const ALPHA_MIN: f64 = 0.3;
    pub const ALPHA_SPREAD: f64 = 0.4;

    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Hsla {
        Hsla {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Random purple/violet with varying opacity.
    pub fn random_violet<R: Rng + ?Sized>(rng: &mut R) -> Hsla {
        let hue = Hsla::HUE_MIN + rng.gen::<f64>() * Hsla::HUE_SPREAD;
        let saturation = Hsla::SATURATION_MIN + rng.gen::<f64>() * Hsla::SATURATION_SPREAD;
        let lightness = Hsla::LIGHTNESS_MIN + rng.gen::<f64>() * Hsla::LIGHTNESS_SPREAD;
        let alpha = Hsla::ALPHA_MIN + rng.gen::<f64>() * Hsla::ALPHA_SPREAD;
        Hsla::new(hue, saturation, lightness, alpha)
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}
