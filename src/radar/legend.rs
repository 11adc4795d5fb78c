use serde::{Deserialize, Serialize};

use crate::core::Dataset;
use crate::radar::ColorPalette;
use crate::render::Color;

/// Legend row for one dataset of an overlay chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub id: String,
    pub label: String,
    pub color: Color,
}

/// Legend rows in draw order, colored like the rendered outlines.
#[must_use]
pub fn legend_entries(datasets: &[Dataset], palette: &ColorPalette) -> Vec<LegendEntry> {
    datasets
        .iter()
        .enumerate()
        .map(|(index, dataset)| LegendEntry {
            id: dataset.id.clone(),
            label: dataset.label.clone(),
            color: palette.color_for(index, dataset.color).stroke,
        })
        .collect()
}
