//! Precomputed 256-entry palette mapping triangle intensity to a CSS color.

use crate::api::types::Rgb;

/// Number of palette entries.
pub const RAMP_LEN: usize = 256;

/// Source gradient, brightest first. The ramp is stored reversed, so tight
/// triangles (intensity 1) land on the first stop.
pub const DEFAULT_GRADIENT: [Rgb; 4] = [
    Rgb::new(255, 255, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(42, 10, 94),
];

/// Ordered palette indexed by `round(intensity * 255)`.
#[derive(Debug, Clone)]
pub struct ColorRamp {
    entries: Vec<Rgb>,
    /// `#RRGGBB` per entry, cached so painting only appends the alpha byte.
    hex: Vec<String>,
}

impl ColorRamp {
    /// Interpolate `stops` into 256 entries, then reverse them.
    /// Fewer than two stops degrade to a flat ramp (black if empty).
    pub fn from_gradient(stops: &[Rgb]) -> Self {
        let mut entries: Vec<Rgb> = (0..RAMP_LEN)
            .map(|i| sample_gradient(stops, i as f64 / (RAMP_LEN - 1) as f64))
            .collect();
        entries.reverse();
        let hex = entries.iter().map(|c| c.to_hex()).collect();
        Self { entries, hex }
    }

    /// Palette index for an intensity, clamped to [0, 255].
    pub fn index_for(intensity: f64) -> usize {
        if intensity.is_nan() {
            return 0;
        }
        (intensity * (RAMP_LEN - 1) as f64).round().clamp(0.0, (RAMP_LEN - 1) as f64) as usize
    }

    pub fn entry(&self, index: usize) -> Rgb {
        self.entries[index.min(RAMP_LEN - 1)]
    }

    /// `#RRGGBBAA`: the palette color for `intensity`, with alpha
    /// `round(intensity * 100)` as a hex byte.
    pub fn color_at(&self, intensity: f64) -> String {
        let mut color = self.hex[Self::index_for(intensity)].clone();
        let alpha = if intensity.is_nan() { 0 } else { (intensity * 100.0).round() as i64 };
        color.push_str(&alpha_hex(alpha));
        color
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::from_gradient(&DEFAULT_GRADIENT)
    }
}

fn sample_gradient(stops: &[Rgb], t: f64) -> Rgb {
    match stops {
        [] => Rgb::default(),
        [only] => *only,
        _ => {
            let segments = (stops.len() - 1) as f64;
            let scaled = t.clamp(0.0, 1.0) * segments;
            let seg = (scaled.floor() as usize).min(stops.len() - 2);
            stops[seg].lerp(stops[seg + 1], scaled - seg as f64)
        }
    }
}

/// Uppercase hex, padded to at least two digits. Negative values are taken
/// as their 32-bit two's complement.
pub fn alpha_hex(value: i64) -> String {
    let value = if value < 0 { 0xFFFF_FFFF + value + 1 } else { value };
    format!("{:02X}", value)
}
