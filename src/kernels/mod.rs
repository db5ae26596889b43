//! The fifteen NIST SP 800-22 test kernels and their dispatch enum.
//!
//! Every kernel is a pure function of `(BitSequence, validated args)` to
//! `Result<Vec<TestResult>, TestError>`. None of them touch the thread-local
//! error channel directly — the runner does that once, after the call
//! returns, matching the teacher's own separation (`stats.rs` computes;
//! `rng_testing.rs` reports).

pub mod approximate_entropy;
pub mod block_frequency;
pub mod cumulative_sums;
mod excursion_walk;
pub mod frequency;
pub mod linear_complexity;
pub mod longest_run;
pub mod matrix_rank;
pub mod non_overlapping_template;
pub mod overlapping_template;
pub mod random_excursions;
pub mod random_excursions_variant;
pub mod runs;
pub mod serial;
pub mod spectral;
pub mod universal;

/// One of the fifteen NIST SP 800-22 tests. Ordering matches the original
/// C ABI's enum (`original_source/sts-cbindings/sts-lib.h`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestKind {
    Frequency,
    FrequencyWithinABlock,
    Runs,
    LongestRunOfOnes,
    BinaryMatrixRank,
    SpectralDft,
    NonOverlappingTemplateMatching,
    OverlappingTemplateMatching,
    MaurersUniversalStatistical,
    LinearComplexity,
    Serial,
    ApproximateEntropy,
    CumulativeSums,
    RandomExcursions,
    RandomExcursionsVariant,
}

/// Every test kind, in the same order as the enum declaration.
pub const ALL_TESTS: [TestKind; 15] = [
    TestKind::Frequency,
    TestKind::FrequencyWithinABlock,
    TestKind::Runs,
    TestKind::LongestRunOfOnes,
    TestKind::BinaryMatrixRank,
    TestKind::SpectralDft,
    TestKind::NonOverlappingTemplateMatching,
    TestKind::OverlappingTemplateMatching,
    TestKind::MaurersUniversalStatistical,
    TestKind::LinearComplexity,
    TestKind::Serial,
    TestKind::ApproximateEntropy,
    TestKind::CumulativeSums,
    TestKind::RandomExcursions,
    TestKind::RandomExcursionsVariant,
];
