pub const ITERATIONS: usize = 100;
pub const START: f64 = 0.1;
pub const DEFAULT_RATE: f64 = 3.5;

pub const DEFAULT_PORT: u16 = 3030;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_TEMPLATE: &str = "./template.html";

pub const CHART_WIDTH: u32 = 400;
pub const CHART_HEIGHT: u32 = 300;

// x-axis extents: time spans [0, 1), frequency spans [0, 0.5)
pub const TIME_SPAN: f64 = 1.0;
pub const FREQUENCY_SPAN: f64 = 0.5;
