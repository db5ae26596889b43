//! NIST SP 800-22 constant tables shared by several kernels.

/// Per-`n` parameters for the Longest Run of Ones test: block length `M`,
/// degrees of freedom `K`, and the expected-proportion vector `pi` of
/// length `K+1`.
pub struct LongestRunParams {
    pub m: usize,
    pub k: usize,
    pub pi: &'static [f64],
}

/// Selects the `(M, K, pi)` regime NIST SP 800-22 section 2.4 specifies for
/// a given sequence length. Returns `None` for `n < 128`.
pub fn longest_run_params(n: usize) -> Option<LongestRunParams> {
    if n < 128 {
        None
    } else if n < 6272 {
        Some(LongestRunParams {
            m: 8,
            k: 3,
            pi: &[0.2148, 0.3672, 0.2305, 0.1875],
        })
    } else if n < 750_000 {
        Some(LongestRunParams {
            m: 128,
            k: 5,
            pi: &[0.1174, 0.2430, 0.2494, 0.1752, 0.1027, 0.1124],
        })
    } else {
        Some(LongestRunParams {
            m: 10000,
            k: 6,
            pi: &[0.0882, 0.2092, 0.2483, 0.1933, 0.1208, 0.0675, 0.0727],
        })
    }
}

/// Expected distribution for the three Binary Matrix Rank bins
/// `{full rank, full-1, <= full-2}` (NIST SP 800-22 section 3.5).
pub const MATRIX_RANK_EXPECTED: [f64; 3] = [0.2888, 0.5776, 0.1336];

/// Per-block-size `L` expected mean and variance for Maurer's Universal
/// Statistical test (NIST SP 800-22 Table 2.9), covering the supported
/// range `L in 6..=16`.
pub struct UniversalParams {
    pub expected_value: f64,
    pub variance: f64,
}

pub fn universal_params(l: usize) -> Option<UniversalParams> {
    let (expected_value, variance) = match l {
        6 => (5.2177052, 2.954),
        7 => (6.1962507, 3.125),
        8 => (7.1836656, 3.238),
        9 => (8.1764248, 3.311),
        10 => (9.1723243, 3.356),
        11 => (10.170032, 3.384),
        12 => (11.168765, 3.401),
        13 => (12.168070, 3.410),
        14 => (13.167693, 3.416),
        15 => (14.167488, 3.419),
        16 => (15.167379, 3.421),
        _ => return None,
    };
    Some(UniversalParams {
        expected_value,
        variance,
    })
}

/// `Q = 10 * 2^L` initialization blocks, per NIST's recommended minimum.
pub fn universal_q(l: usize) -> usize {
    10usize << l
}

/// Fixed probabilities for the Linear Complexity test's 7 bins (NIST
/// SP 800-22 section 2.10).
pub const LINEAR_COMPLEXITY_PI: [f64; 7] = [
    0.010417, 0.031250, 0.125000, 0.500000, 0.250000, 0.062500, 0.020833,
];

/// Random Excursions expected visit-count distribution, indexed
/// `[|x| - 1][k]` for `|x| in 1..=4`, `k in 0..=5` (bin 5 is "`>= 5`
/// visits"). NIST SP 800-22 section 2.14.
pub const RANDOM_EXCURSIONS_PI: [[f64; 6]; 4] = [
    [0.5000000000, 0.25000000000, 0.12500000000, 0.06250000000, 0.03125000000, 0.0312500000],
    [0.7500000000, 0.06250000000, 0.04687500000, 0.03515625000, 0.02636718750, 0.0791015625],
    [0.8333333333, 0.02777777778, 0.02314814815, 0.01929012346, 0.01607510288, 0.0803755143],
    [0.8750000000, 0.01562500000, 0.01367187500, 0.01196289063, 0.01046752930, 0.0732727051],
];
