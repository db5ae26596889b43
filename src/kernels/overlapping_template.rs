//! Overlapping Template Matching test.
//!
//! The "corrected" π distribution is computed exactly via a small Markov
//! chain over the run-length of trailing ones, rather than the NIST
//! reference's Poisson-style closed form — the Hamano-Kaneko correction's
//! intent (an exact occurrence distribution) realized directly instead of
//! through their published series. Legacy mode reproduces the reference's
//! known-inaccurate fixed vector bit-for-bit. Results are cached process-wide
//! per `(m, block_len, k, legacy)`, first-write-wins, per the concurrency
//! contract.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use crate::args::OverlappingTemplateArgs;
use crate::bitseq::BitSequence;
use crate::error::{check_finite, TestError};
use crate::numeric::igamc;
use crate::result::TestResult;

const MIN_N: usize = 1_000_000;
const LEGACY_PI: [f64; 5] = [0.367879, 0.183940, 0.137955, 0.099634, 0.210507];

type CacheKey = (usize, usize, usize, bool);

fn pi_cache() -> &'static Mutex<HashMap<CacheKey, Vec<f64>>> {
    static CACHE: OnceLock<Mutex<HashMap<CacheKey, Vec<f64>>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Exact distribution of "number of overlapping occurrences of an all-ones
/// template of length `m`, capped at `k`" within a window of `block_len`
/// independent fair bits, via a DP over (run length, match count).
fn occurrence_distribution(m: usize, block_len: usize, k: usize) -> Vec<f64> {
    // dp[run][matches]: run in 0..=m, matches in 0..=k.
    let mut dp = vec![vec![0.0f64; k + 1]; m + 1];
    dp[0][0] = 1.0;
    for _ in 0..block_len {
        let mut next = vec![vec![0.0f64; k + 1]; m + 1];
        for run in 0..=m {
            for matches in 0..=k {
                let p = dp[run][matches];
                if p == 0.0 {
                    continue;
                }
                // bit = 0
                next[0][matches] += p * 0.5;
                // bit = 1
                let new_run = (run + 1).min(m);
                let new_matches = if new_run == m { (matches + 1).min(k) } else { matches };
                next[new_run][new_matches] += p * 0.5;
            }
        }
        dp = next;
    }
    let mut pi = vec![0.0f64; k + 1];
    for run_row in &dp {
        for (matches, &p) in run_row.iter().enumerate() {
            pi[matches] += p;
        }
    }
    pi
}

fn compute_pi(m: usize, block_len: usize, k: usize, legacy: bool) -> Vec<f64> {
    if legacy {
        let mut pi = LEGACY_PI.to_vec();
        pi.push((1.0 - LEGACY_PI.iter().sum::<f64>()).max(0.0));
        return pi;
    }
    occurrence_distribution(m, block_len, k)
}

fn cached_pi(m: usize, block_len: usize, k: usize, legacy: bool) -> Vec<f64> {
    let key = (m, block_len, k, legacy);
    let mut cache = pi_cache().lock().expect("pi cache mutex poisoned");
    cache
        .entry(key)
        .or_insert_with(|| compute_pi(m, block_len, k, legacy))
        .clone()
}

/// Count of overlapping occurrences of the all-ones template in
/// `seq[start..start+block_len]`, capped at `k`.
fn count_occurrences(seq: &BitSequence, start: usize, block_len: usize, m: usize, k: usize) -> usize {
    let mut run = 0usize;
    let mut matches = 0usize;
    for i in 0..block_len {
        if seq.bit(start + i) == 1 {
            run += 1;
            if run >= m {
                matches = (matches + 1).min(k);
            }
        } else {
            run = 0;
        }
    }
    matches
}

pub fn run(seq: &BitSequence, args: OverlappingTemplateArgs) -> Result<TestResult, TestError> {
    let n = seq.len();
    if n < MIN_N {
        return Err(TestError::InvalidParameter(format!(
            "overlapping template requires n >= {MIN_N}"
        )));
    }
    let m = args.m;
    let block_len = args.block_len;
    let k = args.k;
    let blocks = n / block_len;
    if blocks == 0 {
        return Err(TestError::InvalidParameter(
            "overlapping template block length exceeds sequence length".into(),
        ));
    }

    let pi = cached_pi(m, block_len, k, args.legacy_nist);
    let mut counts = vec![0u64; k + 1];
    for b in 0..blocks {
        let matches = count_occurrences(seq, b * block_len, block_len, m, k);
        counts[matches] += 1;
    }

    let blocks_f = blocks as f64;
    let mut chi_sq = 0.0;
    for (count, p) in counts.iter().zip(&pi) {
        let expected = blocks_f * p;
        if expected > 0.0 {
            chi_sq += (*count as f64 - expected).powi(2) / expected;
        }
    }

    let p = igamc(k as f64 / 2.0, chi_sq / 2.0)?;
    let p = check_finite(p, "overlapping template p-value")?;
    Ok(TestResult::new(p))
}
