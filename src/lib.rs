//! radar-chart-rs: deterministic radar (stat) chart rendering.
//!
//! Values flow one way: caller data -> `api::RadarChart` -> grid and series
//! layers -> polar mapping -> a host-supplied `render::DrawingSurface`.
//! Nothing is cached between frames.

pub mod api;
pub mod core;
pub mod error;
pub mod radar;
pub mod render;
pub mod telemetry;

pub use api::{RadarChart, RadarFrame, RenderMode};
pub use error::{ChartError, ChartResult};
