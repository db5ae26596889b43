//! Linear Complexity test, built on [`crate::numeric::lfsr::berlekamp_massey`].

use crate::args::LinearComplexityArgs;
use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::{igamc, lfsr::berlekamp_massey};
use crate::result::TestResult;
use crate::tables::LINEAR_COMPLEXITY_PI;

const MIN_N: usize = 1_000_000;

pub fn run(seq: &BitSequence, args: LinearComplexityArgs) -> Result<TestResult, TestError> {
    let n = seq.len();
    if n < MIN_N {
        return Err(TestError::InvalidParameter(format!(
            "linear complexity requires n >= {MIN_N}"
        )));
    }
    let m = args.resolve(n);
    let blocks = n / m;
    if blocks < 200 {
        return Err(TestError::InvalidParameter(format!(
            "linear complexity needs n/M >= 200, got {blocks}"
        )));
    }

    let m_f = m as f64;
    let sign = if m % 2 == 0 { 1.0 } else { -1.0 };
    let mu = m_f / 2.0 + (9.0 + if (m + 1) % 2 == 0 { 1.0 } else { -1.0 }) / 36.0
        - (m_f / 3.0 + 2.0 / 9.0) / 2f64.powi(m as i32);

    let mut counts = [0u64; 7];
    for b in 0..blocks {
        let block_bits: Vec<u8> = (0..m).map(|i| seq.bit(b * m + i)).collect();
        let l = berlekamp_massey(&block_bits) as f64;
        let t = sign * (l - mu) + 2.0 / 9.0;
        let bucket = if t <= -2.5 {
            0
        } else if t <= -1.5 {
            1
        } else if t <= -0.5 {
            2
        } else if t <= 0.5 {
            3
        } else if t <= 1.5 {
            4
        } else if t <= 2.5 {
            5
        } else {
            6
        };
        counts[bucket] += 1;
    }

    let blocks_f = blocks as f64;
    let mut chi_sq = 0.0;
    for (count, p) in counts.iter().zip(LINEAR_COMPLEXITY_PI) {
        let expected = blocks_f * p;
        chi_sq += (*count as f64 - expected).powi(2) / expected;
    }

    let p = igamc(3.0, chi_sq / 2.0)?;
    let p = check_finite(p, "linear complexity p-value")?;
    Ok(TestResult::new(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short_sequence_errors() {
        let seq = BitSequence::from_bools(&vec![true; MIN_N - 1]);
        let args = LinearComplexityArgs::Fixed(500);
        assert!(run(&seq, args).is_err());
    }
}
