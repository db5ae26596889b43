//! Binary Matrix Rank test. Generalized from the teacher's `matrix_ranks`,
//! which already builds 32x32 matrices and calls `utils::rank_binary_matrix`
//! (now [`crate::numeric::gf2::rank_32x32`]); this crops to a general `n`
//! instead of the teacher's fixed sample size.

use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::gf2::rank_32x32;
use crate::result::TestResult;
use crate::tables::MATRIX_RANK_EXPECTED;

const ROWS: usize = 32;
const COLS: usize = 32;
const MATRIX_BITS: usize = ROWS * COLS;
const MIN_N: usize = 38_912;

fn read_matrix(seq: &BitSequence, start: usize) -> [u32; ROWS] {
    let mut rows = [0u32; ROWS];
    for (r, row) in rows.iter_mut().enumerate() {
        let mut word = 0u32;
        for c in 0..COLS {
            word = (word << 1) | seq.bit(start + r * COLS + c) as u32;
        }
        *row = word;
    }
    rows
}

pub fn run(seq: &BitSequence) -> Result<TestResult, TestError> {
    let n = seq.len();
    if n < MIN_N {
        return Err(TestError::InvalidParameter(format!(
            "binary matrix rank requires n >= {MIN_N}"
        )));
    }
    let matrices = n / MATRIX_BITS;
    let mut counts = [0u64; 3];
    for i in 0..matrices {
        let rank = rank_32x32(read_matrix(seq, i * MATRIX_BITS));
        let bucket = match rank {
            32 => 0,
            31 => 1,
            _ => 2,
        };
        counts[bucket] += 1;
    }

    let matrices_f = matrices as f64;
    let mut chi_sq = 0.0;
    for (count, expected_p) in counts.iter().zip(MATRIX_RANK_EXPECTED) {
        let expected = matrices_f * expected_p;
        chi_sq += (*count as f64 - expected).powi(2) / expected;
    }

    let p = (-chi_sq / 2.0).exp();
    let p = check_finite(p, "binary matrix rank p-value")?;
    Ok(TestResult::new(p))
}
