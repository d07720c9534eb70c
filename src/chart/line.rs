use plotters::prelude::*;

use crate::config::{CHART_HEIGHT, CHART_WIDTH};
use crate::error::ChartError;

const MARGIN: u32 = 10;
const X_LABEL_AREA: u32 = 20;
const Y_LABEL_AREA: u32 = 50;
const LABELS: usize = 6;

const BACKGROUND: RGBColor = RGBColor(20, 20, 30);
const GRID: RGBAColor = RGBAColor(100, 100, 100, 0.4);
const NO_LINE: RGBAColor = RGBAColor(0, 0, 0, 0.0);
const LABEL: RGBColor = RGBColor(180, 180, 180);
const LINE: RGBColor = RGBColor(50, 120, 250);

/// A single continuous series drawn as an SVG line chart.
pub struct LineChart<'a> {
    pub width: u32,
    pub height: u32,
    pub x_values: &'a [f64],
    pub y_values: &'a [f64],
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    // Bounds over the finite values only, padded when flat or empty
    fn of(values: &[f64]) -> Self {
        let (min, max) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if min > max {
            return Self { min: 0.0, max: 1.0 };
        }
        if min == max {
            return Self {
                min: min - 0.5,
                max: max + 0.5,
            };
        }
        Self { min, max }
    }

    fn span(&self) -> std::ops::Range<f64> {
        self.min..self.max
    }
}

/// Runs of consecutive finite points. A NaN or infinity ends the current run.
fn finite_segments(x_values: &[f64], y_values: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (&x, &y) in x_values.iter().zip(y_values.iter()) {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

fn plot_error(err: impl std::fmt::Display) -> ChartError {
    ChartError::Plot(err.to_string())
}

impl<'a> LineChart<'a> {
    pub fn new(x_values: &'a [f64], y_values: &'a [f64]) -> Self {
        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            x_values,
            y_values,
        }
    }

    pub fn render_svg(&self) -> Result<String, ChartError> {
        if self.x_values.len() != self.y_values.len() {
            return Err(ChartError::LengthMismatch {
                x: self.x_values.len(),
                y: self.y_values.len(),
            });
        }
        if self.x_values.is_empty() {
            return Err(ChartError::Empty);
        }

        let x_range = Range::of(self.x_values);
        let y_range = Range::of(self.y_values);

        let mut svg = String::new();
        {
            let root =
                SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            root.fill(&BACKGROUND).map_err(plot_error)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(MARGIN)
                .x_label_area_size(X_LABEL_AREA)
                .y_label_area_size(Y_LABEL_AREA)
                .build_cartesian_2d(x_range.span(), y_range.span())
                .map_err(plot_error)?;

            chart
                .configure_mesh()
                .x_labels(LABELS)
                .y_labels(LABELS)
                .x_label_formatter(&|x| format!("{x:.2}"))
                .y_label_formatter(&|y| format!("{y:.2}"))
                .label_style(("sans-serif", 9.0).into_font().color(&LABEL))
                .axis_style(LABEL.stroke_width(1))
                .bold_line_style(GRID.stroke_width(1))
                .light_line_style(NO_LINE.stroke_width(0))
                .draw()
                .map_err(plot_error)?;

            for segment in finite_segments(self.x_values, self.y_values) {
                chart
                    .draw_series(LineSeries::new(segment, LINE.stroke_width(2)))
                    .map_err(plot_error)?;
            }

            root.present().map_err(plot_error)?;
        }

        Ok(svg)
    }
}
