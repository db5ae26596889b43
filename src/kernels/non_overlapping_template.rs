//! Non-Overlapping Template Matching test. No direct teacher precedent;
//! grounded in the aperiodic-template and non-overlapping-scan definitions
//! given by the kernel contract itself.

use crate::args::NonOverlappingTemplateArgs;
use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::igamc;
use crate::result::TestResult;

/// The bits of `v` (an `m`-bit integer), MSB-first.
fn template_bits(v: u64, m: usize) -> Vec<u8> {
    (0..m).map(|i| ((v >> (m - 1 - i)) & 1) as u8).collect()
}

/// A template has no non-trivial proper prefix equal to its corresponding
/// suffix.
fn is_aperiodic(bits: &[u8]) -> bool {
    let m = bits.len();
    for i in 1..m {
        if bits[..i] == bits[m - i..] {
            return false;
        }
    }
    true
}

fn matches_at(seq: &BitSequence, pos: usize, template: &[u8]) -> bool {
    template.iter().enumerate().all(|(j, &b)| seq.bit(pos + j) == b)
}

/// Counts non-overlapping (jump-on-match) occurrences of `template` within
/// `seq[block_start..block_start + block_len]`.
fn count_in_block(seq: &BitSequence, block_start: usize, block_len: usize, template: &[u8]) -> u64 {
    let m = template.len();
    let mut count = 0u64;
    let mut i = 0usize;
    while i + m <= block_len {
        if matches_at(seq, block_start + i, template) {
            count += 1;
            i += m;
        } else {
            i += 1;
        }
    }
    count
}

pub fn run(
    seq: &BitSequence,
    args: NonOverlappingTemplateArgs,
) -> Result<Vec<TestResult>, TestError> {
    let n = seq.len();
    let m = args.template_len();
    let blocks = args.block_count();
    let block_len = n / blocks;
    if block_len == 0 || block_len < m {
        return Err(TestError::InvalidParameter(format!(
            "non-overlapping template block length {block_len} too small for template length {m}"
        )));
    }

    let mu = (block_len - m + 1) as f64 / 2f64.powi(m as i32);
    let sigma_sq = block_len as f64
        * (1.0 / 2f64.powi(m as i32) - (2.0 * m as f64 - 1.0) / 2f64.powi(2 * m as i32));

    let mut results = Vec::new();
    for v in 0u64..(1u64 << m) {
        let bits = template_bits(v, m);
        if !is_aperiodic(&bits) {
            continue;
        }
        let mut chi_sq = 0.0;
        for b in 0..blocks {
            let w = count_in_block(seq, b * block_len, block_len, &bits) as f64;
            chi_sq += (w - mu).powi(2) / sigma_sq;
        }
        let p = igamc(blocks as f64 / 2.0, chi_sq / 2.0)?;
        let p = check_finite(p, "non-overlapping template p-value")?;
        results.push(TestResult::new(p));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aperiodic_check_rejects_self_overlapping_patterns() {
        assert!(!is_aperiodic(&[1, 1, 1]));
        assert!(!is_aperiodic(&[0, 0, 0]));
        assert!(is_aperiodic(&[0, 0, 1]));
    }

    #[test]
    fn small_template_produces_expected_template_count() {
        // m=2 has 4 patterns; only 01 and 10 are aperiodic.
        let aperiodic_count = (0u64..4)
            .filter(|&v| is_aperiodic(&template_bits(v, 2)))
            .count();
        assert_eq!(aperiodic_count, 2);
    }

    #[test]
    fn runs_without_error_on_random_like_input() {
        let bits: Vec<bool> = (0..2000).map(|i| (i * 2654435761u32) % 7 < 3).collect();
        let seq = BitSequence::from_bools(&bits);
        let args = NonOverlappingTemplateArgs::new(9, 8).unwrap();
        let results = run(&seq, args).unwrap();
        assert!(!results.is_empty());
        for r in &results {
            assert!(r.p_value() >= 0.0 && r.p_value() <= 1.0);
        }
    }
}
