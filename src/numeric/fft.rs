//! Real-input FFT magnitudes for the Spectral DFT kernel.
//!
//! Neither the teacher nor the rest of the pack carries an FFT dependency;
//! `rustfft` is the ecosystem-standard pure-Rust choice and is added for
//! this one purpose (see DESIGN.md).

use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

/// Computes `|X_k|` for `k = 0, ..., floor(n/2)` of the discrete Fourier
/// transform of `signal`, via a standard double-precision complex FFT with
/// the imaginary part set to zero.
pub fn real_fft_magnitudes(signal: &[f64]) -> Vec<f64> {
    if signal.is_empty() {
        return Vec::new();
    }
    let n = signal.len();
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    fft.process(&mut buffer);
    buffer[..=n / 2].iter().map(|c| c.norm()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dc_signal_has_energy_only_at_zero() {
        let signal = vec![1.0; 16];
        let mags = real_fft_magnitudes(&signal);
        assert_eq!(mags.len(), 9);
        assert!((mags[0] - 16.0).abs() < 1e-9);
        for &m in &mags[1..] {
            assert!(m < 1e-9);
        }
    }

    #[test]
    fn empty_signal_yields_no_bins() {
        assert!(real_fft_magnitudes(&[]).is_empty());
    }
}
