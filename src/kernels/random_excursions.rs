//! Random Excursions test.

use super::excursion_walk::{cycles, walk, zero_crossings};
use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::igamc;
use crate::result::TestResult;
use crate::tables::RANDOM_EXCURSIONS_PI;

const MIN_N: usize = 1_000_000;
const STATES: [i64; 8] = [-4, -3, -2, -1, 1, 2, 3, 4];

fn visits_bucket(count: usize) -> usize {
    count.min(5)
}

pub fn run(seq: &BitSequence) -> Result<Vec<TestResult>, TestError> {
    let n = seq.len();
    if n < MIN_N {
        return Err(TestError::InvalidParameter(format!(
            "random excursions requires n >= {MIN_N}"
        )));
    }

    let w = walk(seq);
    let zeros = zero_crossings(&w);
    let j = zeros.len();
    let min_cycles = (0.005 * (n as f64).sqrt()).max(500.0);

    if (j as f64) < min_cycles {
        return Ok(STATES
            .iter()
            .map(|x| {
                TestResult::with_comment(
                    0.0,
                    format!("insufficient cycles (J={j}); x = {x:+}"),
                )
            })
            .collect());
    }

    let segments = cycles(&w, &zeros);
    let j_f = j as f64;

    let mut results = Vec::with_capacity(8);
    for &x in &STATES {
        let pi = &RANDOM_EXCURSIONS_PI[x.unsigned_abs() as usize - 1];
        let mut buckets = [0u64; 6];
        for segment in &segments {
            let visits = segment.iter().filter(|&&s| s == x).count();
            buckets[visits_bucket(visits)] += 1;
        }

        let mut chi_sq = 0.0;
        for (count, p) in buckets.iter().zip(pi) {
            let expected = j_f * p;
            chi_sq += (*count as f64 - expected).powi(2) / expected;
        }

        let p = igamc(2.5, chi_sq / 2.0)?;
        let p = check_finite(p, "random excursions p-value")?;
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
    fn visits_bucket_caps_at_five() {
        assert_eq!(visits_bucket(0), 0);
        assert_eq!(visits_bucket(4), 4);
        assert_eq!(visits_bucket(5), 5);
        assert_eq!(visits_bucket(100), 5);
    }
}
