//! Spectral DFT test. No direct teacher precedent (the teacher has no FFT
//! dependency); built on [`crate::numeric::fft::real_fft_magnitudes`].

use std::f64::consts::SQRT_2;

use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::{erfc, fft::real_fft_magnitudes};
use crate::result::TestResult;

pub fn run(seq: &BitSequence) -> Result<TestResult, TestError> {
    let n = seq.len();
    if n < 2 {
        return Err(TestError::InvalidParameter("spectral dft requires n >= 2".into()));
    }
    let signal: Vec<f64> = seq.iter_signed().map(f64::from).collect();
    let mags = real_fft_magnitudes(&signal);
    let half = n / 2;
    let mags = &mags[..half];

    let threshold = (n as f64 * (1.0 / 0.05f64).ln()).sqrt();
    let n0 = 0.95 * n as f64 / 2.0;
    let n1 = mags.iter().filter(|&&m| m < threshold).count() as f64;

    let d = (n1 - n0) / (n as f64 * 0.95 * 0.05 / 4.0).sqrt();
    let p = erfc(d.abs() / SQRT_2);
    let p = check_finite(p, "spectral dft p-value")?;
    Ok(TestResult::new(p))
}
