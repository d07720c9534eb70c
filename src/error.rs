use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateError {
    #[error("invalid rate {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("rate {0:?} overflows f64")]
    OutOfRange(String),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart has {x} x values but {y} y values")]
    LengthMismatch { x: usize, y: usize },
    #[error("chart has no points")]
    Empty,
    #[error("failed to draw chart: {0}")]
    Plot(String),
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unclosed placeholder at byte {0}")]
    Unclosed(usize),
    #[error("unknown placeholder {{{{{0}}}}}")]
    UnknownPlaceholder(String),
    #[error("template is missing the {{{{{0}}}}} placeholder")]
    MissingPlaceholder(&'static str),
}
