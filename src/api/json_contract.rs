use serde::{Deserialize, Serialize};

use crate::core::{Axis, ChartConfig, Dataset};
use crate::error::{ChartError, ChartResult};
use crate::radar::{ColorPalette, RadarStyle};
use crate::render::{ColorPair, DrawingSurface};

use super::{RadarChart, RadarFrame, RenderMode};

pub const RADAR_REQUEST_JSON_SCHEMA_V1: u32 = 1;
pub const RADAR_FRAME_JSON_SCHEMA_V1: u32 = 1;

/// Everything a host hands over for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarRequest {
    pub mode: RenderMode,
    pub config: ChartConfig,
    pub axes: Vec<Axis>,
    pub datasets: Vec<Dataset>,
    #[serde(default)]
    pub style: Option<RadarStyle>,
    #[serde(default)]
    pub palette: Option<Vec<ColorPair>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarRequestJsonContractV1 {
    pub schema_version: u32,
    pub request: RadarRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RadarFrame,
}

impl RadarRequest {
    /// Builds the chart for this request, using the mode's presets for
    /// anything left unset.
    pub fn chart(&self) -> ChartResult<RadarChart> {
        let (default_style, default_palette) = match self.mode {
            RenderMode::Single => (RadarStyle::single_entity(), ColorPalette::accent()),
            RenderMode::Overlay => (RadarStyle::overlay(), ColorPalette::comparison()),
        };
        let palette = match &self.palette {
            Some(entries) => ColorPalette::new(entries.iter().copied())?,
            None => default_palette,
        };
        RadarChart::with_parts(self.config, self.style.unwrap_or(default_style), palette)
    }

    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> ChartResult<RadarFrame> {
        let chart = self.chart()?;
        match self.mode {
            RenderMode::Single => match self.datasets.as_slice() {
                [] => Err(ChartError::EmptyDatasetList),
                [dataset] => chart.render_single(surface, dataset, &self.axes),
                more => Err(ChartError::InvalidData(format!(
                    "single mode expects exactly one dataset, got {}",
                    more.len()
                ))),
            },
            RenderMode::Overlay => chart.render_overlay(surface, &self.datasets, &self.axes),
        }
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RadarRequestJsonContractV1 {
            schema_version: RADAR_REQUEST_JSON_SCHEMA_V1,
            request: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize request contract v1: {e}"))
        })
    }

    /// Accepts either a bare request or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(request) = serde_json::from_str::<RadarRequest>(input) {
            return Ok(request);
        }
        let payload: RadarRequestJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse radar request json payload: {e}"))
        })?;
        if payload.schema_version != RADAR_REQUEST_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported radar request schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.request)
    }
}

impl RadarFrame {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize frame json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RadarFrameJsonContractV1 {
            schema_version: RADAR_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize frame contract v1: {e}"))
        })
    }
}
