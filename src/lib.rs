//! radar-rs: radar (spider) chart rendering.
//!
//! This crate keeps a strict architectural split: pure geometry in
//! [`core`] produces a backend-agnostic [`render::RadarFrame`] of drawable
//! primitives, rendering backends such as [`render::SvgRenderer`] consume
//! the frame, and point hover/selection is an explicit state owned by the
//! [`api::RadarChart`] instance rather than scattered across the scene.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{RadarChart, RadarChartConfig, RadarDocument};
pub use error::{RadarError, RadarResult};
