pub mod line;

pub use line::LineChart;

use crate::config::{FREQUENCY_SPAN, ITERATIONS, TIME_SPAN};
use crate::error::ChartError;

/// `count` x-coordinates starting at 0 in steps of `span / count`.
pub fn evenly_spaced(span: f64, count: usize) -> Vec<f64> {
    let step = span / count as f64;
    (0..count).map(|i| i as f64 * step).collect()
}

/// Renders the time-domain chart followed by the frequency-domain chart as
/// two concatenated `<svg>` elements.
pub fn render_series_charts(
    time_series: &[f64; ITERATIONS],
    frequency_series: &[f64; ITERATIONS],
) -> Result<String, ChartError> {
    let time_x = evenly_spaced(TIME_SPAN, ITERATIONS);
    let frequency_x = evenly_spaced(FREQUENCY_SPAN, ITERATIONS);

    let mut body = LineChart::new(&time_x, time_series).render_svg()?;
    body.push_str(&LineChart::new(&frequency_x, frequency_series).render_svg()?);

    Ok(body)
}
