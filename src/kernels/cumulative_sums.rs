//! Cumulative Sums test.

use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::erf;
use crate::result::TestResult;

const MIN_N: usize = 100;

fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

fn max_abs_partial_sum(steps: impl Iterator<Item = i64>) -> f64 {
    let mut s = 0i64;
    let mut max_abs = 0i64;
    for step in steps {
        s += step;
        max_abs = max_abs.max(s.abs());
    }
    max_abs as f64
}

fn cumulative_sums_p(n: f64, z: f64) -> f64 {
    let start1 = ((-n / z + 1.0) / 4.0).floor() as i64;
    let end1 = ((n / z - 1.0) / 4.0).floor() as i64;
    let mut term1 = 0.0;
    for k in start1..=end1 {
        let k_f = k as f64;
        term1 += standard_normal_cdf((4.0 * k_f + 1.0) * z / n.sqrt())
            - standard_normal_cdf((4.0 * k_f - 1.0) * z / n.sqrt());
    }

    let start2 = ((-n / z - 3.0) / 4.0).floor() as i64;
    let end2 = ((n / z - 1.0) / 4.0).floor() as i64;
    let mut term2 = 0.0;
    for k in start2..=end2 {
        let k_f = k as f64;
        term2 += standard_normal_cdf((4.0 * k_f + 3.0) * z / n.sqrt())
            - standard_normal_cdf((4.0 * k_f + 1.0) * z / n.sqrt());
    }

    1.0 - term1 + term2
}

pub fn run(seq: &BitSequence) -> Result<Vec<TestResult>, TestError> {
    let n = seq.len();
    if n < MIN_N {
        return Err(TestError::InvalidParameter(format!(
            "cumulative sums requires n >= {MIN_N}"
        )));
    }
    let n_f = n as f64;
    let forward: Vec<i64> = seq.iter_signed().map(i64::from).collect();
    let z_forward = max_abs_partial_sum(forward.iter().copied());
    let z_backward = max_abs_partial_sum(forward.iter().rev().copied());

    let p_forward = cumulative_sums_p(n_f, z_forward);
    let p_backward = cumulative_sums_p(n_f, z_backward);
    let p_forward = check_finite(p_forward, "cumulative sums p-value (forward)")?;
    let p_backward = check_finite(p_backward, "cumulative sums p-value (backward)")?;
    Ok(vec![TestResult::new(p_forward), TestResult::new(p_backward)])
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
    fn alternating_sequence_has_small_excursion() {
        let bits: Vec<bool> = (0..128).map(|i| i % 2 == 1).collect();
        let seq = BitSequence::from_bools(&bits);
        let results = run(&seq).unwrap();
        assert_eq!(results.len(), 2);
        for r in &results {
            assert!(r.p_value() >= 0.0 && r.p_value() <= 1.0 + 1e-9);
        }
    }
}
