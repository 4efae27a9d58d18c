use std::fmt;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Rgb – renderer-agnostic colour
// ---------------------------------------------------------------------------

/// An sRGB colour carried inside chart specs. Serializes as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const GRAY: Rgb = Rgb(128, 128, 128);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Rgb> for Color32 {
    fn from(c: Rgb) -> Self {
        Color32::from_rgb(c.0, c.1, c.2)
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Rgb
// ---------------------------------------------------------------------------

/// Maps category labels to colours, in legend order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColorMap {
    entries: Vec<(String, Rgb)>,
}

impl ColorMap {
    /// Assign palette colours to `categories` in the order given.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = categories.into_iter().map(Into::into).collect();
        let palette = generate_palette(labels.len());
        ColorMap {
            entries: labels.into_iter().zip(palette).collect(),
        }
    }

    /// A caller-chosen mapping, e.g. fixed outcome colours.
    pub fn fixed(entries: &[(&str, Rgb)]) -> Self {
        ColorMap {
            entries: entries.iter().map(|(l, c)| (l.to_string(), *c)).collect(),
        }
    }

    /// Look up the colour for a label; unknown labels are gray.
    pub fn color_for(&self, label: &str) -> Rgb {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(Rgb::GRAY)
    }

    /// Return the legend entries (label → colour).
    pub fn legend_entries(&self) -> &[(String, Rgb)] {
        &self.entries
    }
}
