//! Longest Run of Ones test. Generalized from the teacher's
//! `longest_ones_run`, which fixed `M=8`; this resolves `M` from NIST's
//! `n`-keyed table instead.

use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::igamc;
use crate::result::TestResult;
use crate::tables::{self, LongestRunParams};

fn bucket(longest: usize, m: usize) -> usize {
    match m {
        8 => match longest {
            0..=1 => 0,
            2 => 1,
            3 => 2,
            _ => 3,
        },
        128 => match longest {
            0..=4 => 0,
            5 => 1,
            6 => 2,
            7 => 3,
            8 => 4,
            _ => 5,
        },
        _ => match longest {
            0..=10 => 0,
            11 => 1,
            12 => 2,
            13 => 3,
            14 => 4,
            15 => 5,
            _ => 6,
        },
    }
}

fn longest_run_in_block(seq: &BitSequence, start: usize, m: usize) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for i in start..start + m {
        if seq.bit(i) == 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

pub fn run(seq: &BitSequence) -> Result<TestResult, TestError> {
    let n = seq.len();
    let LongestRunParams { m, k, pi } = tables::longest_run_params(n)
        .ok_or_else(|| TestError::InvalidParameter("longest run requires n >= 128".into()))?;

    let blocks = n / m;
    let mut counts = vec![0u64; k + 1];
    for b in 0..blocks {
        let longest = longest_run_in_block(seq, b * m, m);
        counts[bucket(longest, m)] += 1;
    }

    let blocks_f = blocks as f64;
    let mut chi_sq = 0.0;
    for (v, &p) in counts.iter().zip(pi) {
        let expected = blocks_f * p;
        chi_sq += (*v as f64 - expected).powi(2) / expected;
    }

    let p = igamc(k as f64 / 2.0, chi_sq / 2.0)?;
    let p = check_finite(p, "longest run p-value")?;
    Ok(TestResult::new(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short_sequence_errors() {
        let seq = BitSequence::from_bools(&[true; 127]);
        assert!(run(&seq).is_err());
    }

    #[test]
    fn all_ones_strongly_rejects() {
        let seq = BitSequence::from_bools(&[true; 128]);
        let result = run(&seq).unwrap();
        assert!(result.p_value() < 0.01);
    }

    #[test]
    fn bucket_boundaries_for_m8() {
        assert_eq!(bucket(0, 8), 0);
        assert_eq!(bucket(1, 8), 0);
        assert_eq!(bucket(2, 8), 1);
        assert_eq!(bucket(3, 8), 2);
        assert_eq!(bucket(4, 8), 3);
        assert_eq!(bucket(100, 8), 3);
    }
}
