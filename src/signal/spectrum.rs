use rustfft::FftPlanner;
use rustfft::num_complex::Complex64;

use crate::config::ITERATIONS;

/// Forward and inverse DFT over real-valued series.
///
/// The planner caches twiddle tables per length, so one transform can be
/// reused across calls. Nothing is windowed, shifted or normalized on the
/// forward path; bins come back in natural order.
pub struct SpectrumTransform {
    fft_planner: FftPlanner<f64>,
    fft_buffer: Vec<Complex64>,
}

impl SpectrumTransform {
    pub fn new() -> Self {
        Self {
            fft_planner: FftPlanner::new(),
            fft_buffer: Vec::with_capacity(ITERATIONS),
        }
    }

    /// Full complex spectrum of `series`, before any real-part truncation.
    pub fn forward(&mut self, series: &[f64]) -> Vec<Complex64> {
        self.fft_buffer.clear();
        self.fft_buffer
            .extend(series.iter().map(|&x| Complex64::new(x, 0.0)));

        let fft = self.fft_planner.plan_fft_forward(self.fft_buffer.len());
        fft.process(&mut self.fft_buffer);

        self.fft_buffer.clone()
    }

    /// Inverse DFT scaled by `1/N`, so that `inverse(forward(x))` gives back `x`.
    pub fn inverse(&mut self, spectrum: &[Complex64]) -> Vec<Complex64> {
        self.fft_buffer.clear();
        self.fft_buffer.extend_from_slice(spectrum);

        let len = self.fft_buffer.len();
        let fft = self.fft_planner.plan_fft_inverse(len);
        fft.process(&mut self.fft_buffer);

        // rustfft leaves the inverse unnormalized
        let scale = 1.0 / len.max(1) as f64;
        self.fft_buffer.iter().map(|&c| c * scale).collect()
    }

    /// Real part of each forward coefficient. Imaginary parts are dropped.
    pub fn real_spectrum(&mut self, series: &[f64; ITERATIONS]) -> [f64; ITERATIONS] {
        let spectrum = self.forward(series);

        let mut output = [0.0; ITERATIONS];
        for (out, coefficient) in output.iter_mut().zip(spectrum.iter()) {
            *out = coefficient.re;
        }
        output
    }
}

impl Default for SpectrumTransform {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a time series to the real components of its DFT, indexed by frequency bin.
pub fn frequency_transform(series: &[f64; ITERATIONS]) -> [f64; ITERATIONS] {
    SpectrumTransform::new().real_spectrum(series)
}
