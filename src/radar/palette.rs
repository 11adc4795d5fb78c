use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, ColorPair};

const SERIES_FILL_ALPHA: f64 = 0.3;

/// Deterministic per-dataset colors with cyclic reuse.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    entries: SmallVec<[ColorPair; 4]>,
}

impl ColorPalette {
    /// Fails when `entries` is empty or holds an invalid color.
    pub fn new(entries: impl IntoIterator<Item = ColorPair>) -> ChartResult<Self> {
        let entries: SmallVec<[ColorPair; 4]> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(ChartError::InvalidConfig(
                "color palette needs at least one entry".to_owned(),
            ));
        }
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self { entries })
    }

    /// Red, blue, green comparison colors.
    #[must_use]
    pub fn comparison() -> Self {
        Self {
            entries: SmallVec::from_slice(&[
                ColorPair::from_stroke(Color::rgb8(255, 85, 85), SERIES_FILL_ALPHA),
                ColorPair::from_stroke(Color::rgb8(85, 144, 240), SERIES_FILL_ALPHA),
                ColorPair::from_stroke(Color::rgb8(76, 175, 80), SERIES_FILL_ALPHA),
            ]),
        }
    }

    /// Single indigo accent used for one-entity charts.
    #[must_use]
    pub fn accent() -> Self {
        Self {
            entries: SmallVec::from_slice(&[ColorPair::from_stroke(
                Color::rgb8(100, 108, 255),
                0.25,
            )]),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[ColorPair] {
        &self.entries
    }

    /// `requested` wins; otherwise entry `index mod len`.
    #[must_use]
    pub fn color_for(&self, index: usize, requested: Option<ColorPair>) -> ColorPair {
        requested.unwrap_or(self.entries[index % self.entries.len()])
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::comparison()
    }
}
