//! Butterworth bandpass design and IIR filtering.
//!
//! The design follows the classic analog-prototype route: Butterworth
//! poles spaced on the left half of the unit circle, a
//! lowpass-to-bandpass transform around the prewarped band edges, then
//! a bilinear transform into the digital domain. The resulting
//! magnitude response is 3 dB down at both cutoffs with monotonic
//! rolloff outside the band.
//!
//! High orders combined with a narrow band push poles close to the
//! unit circle; the direct-form realization can then ring or lose
//! precision. That is inherent to the recipe and is not detected here.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::{Result, ScrubError};

/// Transfer-function coefficients of a designed filter.
///
/// `b` holds the feed-forward taps, `a` the feed-back taps; `a[0]` is
/// always 1. A bandpass of prototype order N has 2N + 1 of each.
#[derive(Debug, Clone)]
pub struct FilterCoefficients {
    pub b: Vec<f64>,
    pub a: Vec<f64>,
}

/// Design a digital Butterworth bandpass filter.
///
/// # Arguments
/// * `low_hz` / `high_hz` - passband edges in Hz; the magnitude
///   response is 3 dB down at both
/// * `sample_rate` - sample rate in Hz
/// * `order` - prototype order; the bandpass has twice this many poles
pub fn design_bandpass(
    low_hz: f64,
    high_hz: f64,
    sample_rate: f64,
    order: usize,
) -> Result<FilterCoefficients> {
    if order < 1 {
        return Err(ScrubError::InvalidFilterSpec(
            "filter order must be at least 1".to_string(),
        ));
    }
    if low_hz >= high_hz {
        return Err(ScrubError::InvalidFilterSpec(format!(
            "low cutoff {} Hz must be below high cutoff {} Hz",
            low_hz, high_hz
        )));
    }
    let nyquist = sample_rate / 2.0;
    if low_hz <= 0.0 || high_hz >= nyquist {
        return Err(ScrubError::InvalidFilterSpec(format!(
            "cutoffs must lie strictly between 0 Hz and Nyquist ({} Hz)",
            nyquist
        )));
    }

    // Work at a nominal sample rate of 2 so Nyquist normalizes to 1,
    // and prewarp the band edges for the bilinear transform.
    let fs = 2.0;
    let warped_low = 2.0 * fs * (PI * (low_hz / nyquist) / fs).tan();
    let warped_high = 2.0 * fs * (PI * (high_hz / nyquist) / fs).tan();
    let bandwidth = warped_high - warped_low;
    let center = (warped_low * warped_high).sqrt();

    // Analog lowpass prototype: N poles, no zeros, unit gain.
    let mut prototype_poles = Vec::with_capacity(order);
    for k in 0..order {
        let m = (2 * k + 1) as f64 - order as f64;
        let theta = PI * m / (2.0 * order as f64);
        prototype_poles.push(-Complex64::new(0.0, theta).exp());
    }

    // Lowpass -> bandpass: each prototype pole splits into a pair
    // around the band center, and N zeros appear at the origin.
    let half_bw = bandwidth / 2.0;
    let mut analog_poles = Vec::with_capacity(2 * order);
    for &p in &prototype_poles {
        let scaled = p * half_bw;
        let offset = (scaled * scaled - center * center).sqrt();
        analog_poles.push(scaled + offset);
        analog_poles.push(scaled - offset);
    }
    let analog_zeros = vec![Complex64::new(0.0, 0.0); order];
    let analog_gain = bandwidth.powi(order as i32);

    // Bilinear transform into the z-domain. The N zeros the analog
    // bandpass holds at infinity land at z = -1.
    let fs2 = 2.0 * fs;
    let digital_poles: Vec<Complex64> = analog_poles
        .iter()
        .map(|&p| (fs2 + p) / (fs2 - p))
        .collect();
    let mut digital_zeros: Vec<Complex64> = analog_zeros
        .iter()
        .map(|&z| (fs2 + z) / (fs2 - z))
        .collect();
    digital_zeros.extend(std::iter::repeat(Complex64::new(-1.0, 0.0)).take(order));

    let num: Complex64 = analog_zeros.iter().map(|&z| fs2 - z).product();
    let den: Complex64 = analog_poles.iter().map(|&p| fs2 - p).product();
    let gain = analog_gain * (num / den).re;

    let b = poly(&digital_zeros).iter().map(|c| c.re * gain).collect();
    let a = poly(&digital_poles).iter().map(|c| c.re).collect();

    Ok(FilterCoefficients { b, a })
}

/// Expand a monic polynomial from its roots, highest degree first.
fn poly(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &root in roots {
        coeffs.push(Complex64::new(0.0, 0.0));
        for i in (1..coeffs.len()).rev() {
            let lower = coeffs[i - 1];
            coeffs[i] -= root * lower;
        }
    }
    coeffs
}

/// Magnitude of the filter's frequency response at `freq_hz`.
pub fn magnitude_response(coeffs: &FilterCoefficients, freq_hz: f64, sample_rate: f64) -> f64 {
    let omega = 2.0 * PI * freq_hz / sample_rate;
    let z_inv = Complex64::new(0.0, -omega).exp();

    let mut num = Complex64::new(0.0, 0.0);
    let mut power = Complex64::new(1.0, 0.0);
    for &b in &coeffs.b {
        num += b * power;
        power *= z_inv;
    }

    let mut den = Complex64::new(0.0, 0.0);
    let mut power = Complex64::new(1.0, 0.0);
    for &a in &coeffs.a {
        den += a * power;
        power *= z_inv;
    }

    (num / den).norm()
}

/// Direct-form IIR filter with internal state.
///
/// Applies `y[n] = (1/a[0]) * (Σ b[i]·x[n-i] − Σ a[j]·y[n-j])` with
/// zero initial conditions, one sample at a time.
pub struct IirFilter {
    coeffs: FilterCoefficients,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl IirFilter {
    pub fn new(coeffs: FilterCoefficients) -> Self {
        let x = vec![0.0; coeffs.b.len().saturating_sub(1)];
        let y = vec![0.0; coeffs.a.len().saturating_sub(1)];
        Self { coeffs, x, y }
    }

    /// Run one sample through the recurrence and update the delay lines.
    pub fn process_sample(&mut self, input: f64) -> f64 {
        let b = &self.coeffs.b;
        let a = &self.coeffs.a;

        let mut output = b[0] * input;
        for i in 0..self.x.len() {
            output += b[i + 1] * self.x[i];
        }
        for j in 0..self.y.len() {
            output -= a[j + 1] * self.y[j];
        }
        output /= a[0];

        for i in (1..self.x.len()).rev() {
            self.x[i] = self.x[i - 1];
        }
        if let Some(first) = self.x.first_mut() {
            *first = input;
        }
        for j in (1..self.y.len()).rev() {
            self.y[j] = self.y[j - 1];
        }
        if let Some(first) = self.y.first_mut() {
            *first = output;
        }

        output
    }

    /// Filter a whole signal in a single left-to-right pass.
    ///
    /// The recurrence is strictly sequential: each output depends on
    /// preceding outputs, so there is no parallel variant here.
    pub fn process(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| self.process_sample(x)).collect()
    }

    /// Reset the delay lines to zero.
    pub fn reset(&mut self) {
        self.x.fill(0.0);
        self.y.fill(0.0);
    }
}
