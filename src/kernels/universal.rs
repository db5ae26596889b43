//! Maurer's Universal Statistical test. No direct teacher precedent.

use std::f64::consts::SQRT_2;

use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::erfc;
use crate::result::TestResult;
use crate::tables;

const MIN_N: usize = 2020;

fn block_value(seq: &BitSequence, start: usize, l: usize) -> usize {
    let mut v = 0usize;
    for i in 0..l {
        v = (v << 1) | seq.bit(start + i) as usize;
    }
    v
}

fn choose_l(n: usize) -> Option<usize> {
    (6..=16usize)
        .rev()
        .find(|&l| n >= (tables::universal_q(l) + 1000) * l)
}

pub fn run(seq: &BitSequence) -> Result<TestResult, TestError> {
    let n = seq.len();
    if n < MIN_N {
        return Err(TestError::InvalidParameter(format!(
            "universal requires n >= {MIN_N}"
        )));
    }
    let l = choose_l(n)
        .ok_or_else(|| TestError::InvalidParameter("universal: n too small for any valid L".into()))?;
    let q = tables::universal_q(l);
    let total_blocks = n / l;
    let k = total_blocks - q;

    let mut table = vec![0usize; 1 << l];
    for i in 0..q {
        table[block_value(seq, i * l, l)] = i + 1;
    }

    let mut sum = 0.0f64;
    for i in q..q + k {
        let v = block_value(seq, i * l, l);
        let last = table[v];
        sum += ((i + 1 - last) as f64).log2();
        table[v] = i + 1;
    }
    let f = sum / k as f64;

    let params = tables::universal_params(l)
        .ok_or_else(|| TestError::InvalidParameter("universal: no table entry for L".into()))?;
    let l_f = l as f64;
    let k_f = k as f64;
    let c = 0.7 - 0.8 / l_f + (4.0 + 32.0 / l_f) * k_f.powf(-3.0 / l_f) / 15.0;
    let sigma = c * (params.variance / k_f).sqrt();

    let p = erfc(((f - params.expected_value) / (sigma * SQRT_2)).abs());
    let p = check_finite(p, "universal p-value")?;
    Ok(TestResult::new(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short_sequence_errors() {
        let seq = BitSequence::from_bools(&vec![true; MIN_N - 1]);
        assert!(run(&seq).is_err());
    }

    #[test]
    fn choose_l_picks_largest_feasible() {
        assert_eq!(choose_l(9840), Some(6));
        assert!(choose_l(5).is_none());
        assert!(choose_l(2020).is_none());
    }
}
