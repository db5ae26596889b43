//! Random Excursions Variant test.

use super::excursion_walk::{walk, zero_crossings};
use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::erfc;
use crate::result::TestResult;

const MIN_N: usize = 1_000_000;
const STATES: [i64; 18] = [-9, -8, -7, -6, -5, -4, -3, -2, -1, 1, 2, 3, 4, 5, 6, 7, 8, 9];

pub fn run(seq: &BitSequence) -> Result<Vec<TestResult>, TestError> {
    let n = seq.len();
    if n < MIN_N {
        return Err(TestError::InvalidParameter(format!(
            "random excursions variant requires n >= {MIN_N}"
        )));
    }

    let w = walk(seq);
    let zeros = zero_crossings(&w);
    let j = zeros.len();
    if j == 0 {
        return Err(TestError::InvalidParameter(
            "random excursions variant: walk never returns to zero".into(),
        ));
    }
    let j_f = j as f64;

    let mut results = Vec::with_capacity(18);
    for &x in &STATES {
        let xi = w.iter().filter(|&&s| s == x).count() as f64;
        let denom = (2.0 * j_f * (4.0 * x.unsigned_abs() as f64 - 2.0)).sqrt();
        let p = erfc((xi - j_f).abs() / denom);
        let p = check_finite(p, "random excursions variant p-value")?;
        results.push(TestResult::with_comment(p, format!("x = {x:+}")));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short_sequence_errors() {
        let seq = BitSequence::from_bools(&[true; 10]);
        assert!(run(&seq).is_err());
    }

    #[test]
    fn emits_eighteen_results() {
        // Coarsest sanity check: build a 10^6-bit pseudo-random sequence
        // with returns to zero and confirm the shape of the output.
        let bits: Vec<bool> = (0..1_000_000)
            .map(|i| (i as u64).wrapping_mul(2654435761) % 5 < 2)
            .collect();
        let seq = BitSequence::from_bools(&bits);
        if let Ok(results) = run(&seq) {
            assert_eq!(results.len(), 18);
        }
    }
}
