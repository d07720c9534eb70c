pub mod logistic;
pub mod spectrum;

pub use logistic::logistic_map;
pub use spectrum::{SpectrumTransform, frequency_transform};
