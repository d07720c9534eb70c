//! Logistic map time series and their discrete Fourier spectra, served over
//! HTTP as JSON or as SVG line charts.

pub mod chart;
pub mod config;
pub mod error;
pub mod server;
pub mod signal;
pub mod template;

pub use signal::{SpectrumTransform, frequency_transform, logistic_map};
