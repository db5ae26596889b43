//! Frequency (Monobit) test. Generalized from the teacher's `monobit_test`.

use std::f64::consts::SQRT_2;

use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::erfc;
use crate::result::TestResult;

pub fn run(seq: &BitSequence) -> Result<TestResult, TestError> {
    let n = seq.len();
    if n == 0 {
        return Err(TestError::InvalidParameter("frequency requires n >= 1".into()));
    }
    let sum: i64 = seq.iter_signed().map(i64::from).sum();
    let s_obs = (sum.unsigned_abs() as f64) / (n as f64).sqrt();
    let p = erfc(s_obs / SQRT_2);
    let p = check_finite(p, "frequency p-value")?;
    Ok(TestResult::new(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zeros_strongly_rejects() {
        let seq = BitSequence::from_bools(&[false; 128]);
        let result = run(&seq).unwrap();
        assert!(result.p_value() < 1e-6);
    }

    #[test]
    fn alternating_sequence_passes() {
        let bits: Vec<bool> = (0..128).map(|i| i % 2 == 1).collect();
        let seq = BitSequence::from_bools(&bits);
        let result = run(&seq).unwrap();
        assert!((result.p_value() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_sequence_errors() {
        let seq = BitSequence::from_bools(&[]);
        assert!(run(&seq).is_err());
    }
}
