//! Shared cumulative-sum random walk and cycle detection for Random
//! Excursions and Random Excursions Variant.

use crate::bitseq::BitSequence;

/// The walk `S_1, ..., S_n` (excludes the implicit `S_0 = 0`).
pub(super) fn walk(seq: &BitSequence) -> Vec<i64> {
    let mut s = 0i64;
    seq.iter_signed()
        .map(|step| {
            s += step as i64;
            s
        })
        .collect()
}

/// Indices (1-based into the walk, i.e. positions of `S_k = 0`) at which the
/// walk returns to zero, in order. The number of cycles is `zero_indices.len()`;
/// any walk suffix after the last zero crossing belongs to no complete cycle.
pub(super) fn zero_crossings(walk: &[i64]) -> Vec<usize> {
    walk.iter()
        .enumerate()
        .filter(|&(_, &s)| s == 0)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Splits `walk` into complete cycles using `zero_crossings`. Each cycle is
/// `walk[start..end]`, excluding the zero that begins it but including the
/// zero that ends it is excluded too, matching the glossary's
/// "inclusive of starting zero, exclusive of terminating zero" definition
/// transposed onto a 1-indexed walk that omits `S_0`.
pub(super) fn cycles<'a>(walk: &'a [i64], zero_indices: &[usize]) -> Vec<&'a [i64]> {
    let mut out = Vec::with_capacity(zero_indices.len());
    let mut start = 0usize;
    for &end in zero_indices {
        out.push(&walk[start..end]);
        start = end;
    }
    out
}
