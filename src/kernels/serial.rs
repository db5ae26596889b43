//! Serial test. Implements the reference's halved `igamc` argument per the
//! documented departure from the literal NIST text (see DESIGN.md).

use crate::args::SerialArgs;
use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::{floor_log2, igamc};
use crate::result::TestResult;

/// Circular overlapping `k`-bit pattern frequencies: the sequence's first
/// `k-1` bits are conceptually appended to its end.
fn pattern_frequencies(seq: &BitSequence, k: usize) -> Vec<u64> {
    let n = seq.len();
    if k == 0 {
        return vec![n as u64];
    }
    let mut counts = vec![0u64; 1 << k];
    let mut window = 0usize;
    for i in 0..k {
        window = (window << 1) | seq.bit(i % n) as usize;
    }
    counts[window] += 1;
    for i in 1..n {
        let next_bit = seq.bit((i + k - 1) % n);
        window = ((window << 1) | next_bit as usize) & ((1 << k) - 1);
        counts[window] += 1;
    }
    counts
}

fn psi_sq(seq: &BitSequence, k: usize) -> f64 {
    let n = seq.len() as f64;
    let counts = pattern_frequencies(seq, k);
    let sum_sq: f64 = counts.iter().map(|&v| (v as f64).powi(2)).sum();
    (2f64.powi(k as i32) / n) * sum_sq - n
}

pub fn run(seq: &BitSequence, args: SerialArgs) -> Result<Vec<TestResult>, TestError> {
    let n = seq.len();
    if n < 4 {
        return Err(TestError::InvalidParameter("serial requires n >= 4".into()));
    }
    let m = args.block_length();
    let max_m = floor_log2(n).saturating_sub(2) as usize;
    if m >= max_m {
        return Err(TestError::InvalidParameter(format!(
            "serial block length {m} must be < floor(log2(n)) - 2 = {max_m}"
        )));
    }

    let psi_m = psi_sq(seq, m);
    let psi_m1 = psi_sq(seq, m - 1);
    let psi_m2 = psi_sq(seq, m - 2);

    let nabla = psi_m - psi_m1;
    let nabla2 = psi_m - 2.0 * psi_m1 + psi_m2;

    let p1 = igamc(2f64.powi(m as i32 - 2), nabla / 2.0)?;
    let p2 = igamc(2f64.powi(m as i32 - 3), nabla2 / 2.0)?;
    let p1 = check_finite(p1, "serial p-value (nabla)")?;
    let p2 = check_finite(p2, "serial p-value (nabla^2)")?;
    Ok(vec![TestResult::new(p1), TestResult::new(p2)])
}
