//! Runs test. Generalized from the teacher's `runs_test`.

use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::erfc;
use crate::result::TestResult;

pub fn run(seq: &BitSequence) -> Result<TestResult, TestError> {
    let n = seq.len();
    if n == 0 {
        return Err(TestError::InvalidParameter("runs requires n >= 1".into()));
    }
    let ones: usize = seq.iter().map(usize::from).sum();
    let pi = ones as f64 / n as f64;

    if (pi - 0.5).abs() >= 2.0 / (n as f64).sqrt() {
        return Ok(TestResult::with_comment(0.0, "pi estimator failed"));
    }

    let v_n = 1 + (0..n - 1).filter(|&i| seq.bit(i) != seq.bit(i + 1)).count();
    let expected = 2.0 * n as f64 * pi * (1.0 - pi);
    let denom = 2.0 * (2.0 * n as f64).sqrt() * pi * (1.0 - pi);
    let p = erfc((v_n as f64 - expected).abs() / denom);
    let p = check_finite(p, "runs p-value")?;
    Ok(TestResult::new(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternating_sequence_strongly_rejects() {
        let bits: Vec<bool> = (0..100).map(|i| i % 2 == 1).collect();
        let seq = BitSequence::from_bools(&bits);
        let result = run(&seq).unwrap();
        assert!(result.p_value() < 1e-15);
    }

    #[test]
    fn all_zeros_fails_pi_estimator() {
        let seq = BitSequence::from_bools(&[false; 128]);
        let result = run(&seq).unwrap();
        assert_eq!(result.p_value(), 0.0);
        assert_eq!(result.comment(), Some("pi estimator failed"));
    }
}
