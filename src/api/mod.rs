mod chart;
mod config;
mod document;

pub use chart::RadarChart;
pub use config::RadarChartConfig;
pub use document::RadarDocument;
