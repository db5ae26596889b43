//! Approximate Entropy test. Shares the circular pattern-frequency idiom
//! with Serial but on the log-weighted phi statistic instead of psi-squared.

use crate::args::ApproximateEntropyArgs;
use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::{floor_log2, igamc};
use crate::result::TestResult;

fn pattern_frequencies(seq: &BitSequence, k: usize) -> Vec<u64> {
    let n = seq.len();
    let mut counts = vec![0u64; 1 << k];
    let mut window = 0usize;
    for i in 0..k {
        window = (window << 1) | seq.bit(i % n) as usize;
    }
    counts[window] += 1;
    for i in 1..n {
        let next_bit = seq.bit((i + k - 1) % n);
        window = ((window << 1) | next_bit as usize) & ((1 << k) - 1);
        counts[window] += 1;
    }
    counts
}

fn phi(seq: &BitSequence, k: usize) -> f64 {
    let n = seq.len() as f64;
    pattern_frequencies(seq, k)
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let freq = c as f64 / n;
            freq * freq.ln()
        })
        .sum()
}

pub fn run(seq: &BitSequence, args: ApproximateEntropyArgs) -> Result<TestResult, TestError> {
    let n = seq.len();
    if n < 2 {
        return Err(TestError::InvalidParameter("approximate entropy requires n >= 2".into()));
    }
    let m = args.block_length();
    let max_m = floor_log2(n).saturating_sub(5) as usize;
    if m >= max_m {
        return Err(TestError::InvalidParameter(format!(
            "approximate entropy block length {m} must be < floor(log2(n)) - 5 = {max_m}"
        )));
    }

    let phi_m = phi(seq, m);
    let phi_m1 = phi(seq, m + 1);
    let chi_sq = 2.0 * n as f64 * (2.0f64.ln() - (phi_m - phi_m1));

    let p = igamc(2f64.powi(m as i32 - 1), chi_sq / 2.0)?;
    let p = check_finite(p, "approximate entropy p-value")?;
    Ok(TestResult::new(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_sequence_rejects() {
        let bits: Vec<bool> = (0..1024).map(|i| i % 2 == 1).collect();
        let seq = BitSequence::from_bools(&bits);
        let args = ApproximateEntropyArgs::new(2).unwrap();
        let result = run(&seq, args).unwrap();
        assert!(result.p_value() < 1e-3);
    }

    #[test]
    fn block_length_too_large_errors() {
        let seq = BitSequence::from_bools(&[true; 16]);
        let args = ApproximateEntropyArgs::new(2).unwrap();
        assert!(run(&seq, args).is_err());
    }
}
