mod json_contract;
mod radar_chart;

pub use json_contract::{
    RADAR_FRAME_JSON_SCHEMA_V1, RADAR_REQUEST_JSON_SCHEMA_V1, RadarFrameJsonContractV1,
    RadarRequest, RadarRequestJsonContractV1,
};
pub use radar_chart::{
    RadarChart, RadarFrame, RenderMode, render, render_overlay, render_single,
};
