//! Frequency Within a Block test. Generalized from the teacher's
//! `u64_block_bit_frequency_test`, parameterized on `M` instead of a fixed
//! 64-bit block.

use crate::args::FrequencyBlockArgs;
use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::igamc;
use crate::result::TestResult;

pub fn run(seq: &BitSequence, args: FrequencyBlockArgs) -> Result<TestResult, TestError> {
    let n = seq.len();
    if n == 0 {
        return Err(TestError::InvalidParameter("block frequency requires n >= 1".into()));
    }
    let m = args.resolve(n);
    let blocks = n / m;
    if blocks == 0 {
        return Err(TestError::InvalidParameter(format!(
            "block length {m} exceeds sequence length {n}"
        )));
    }

    let mut chi_sq = 0.0f64;
    for b in 0..blocks {
        let ones: usize = (0..m).map(|i| seq.bit(b * m + i) as usize).sum();
        let pi = ones as f64 / m as f64;
        chi_sq += (pi - 0.5).powi(2);
    }
    chi_sq *= 4.0 * m as f64;

    let p = igamc(blocks as f64 / 2.0, chi_sq / 2.0)?;
    let p = check_finite(p, "block frequency p-value")?;
    Ok(TestResult::new(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_sequence_with_fixed_block_passes() {
        let bits: Vec<bool> = (0..100).map(|i| i % 2 == 1).collect();
        let seq = BitSequence::from_bools(&bits);
        let args = FrequencyBlockArgs::new(10).unwrap();
        let result = run(&seq, args).unwrap();
        assert!((result.p_value() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn block_length_larger_than_sequence_errors() {
        let seq = BitSequence::from_bools(&[true; 5]);
        let args = FrequencyBlockArgs::new(10).unwrap();
        assert!(run(&seq, args).is_err());
    }
}
