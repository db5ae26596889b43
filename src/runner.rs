//! Stateful test orchestrator. Generalizes the teacher's
//! `rng_testing::test_suite_with_seeds` dispatch-and-collect loop (which
//! already iterates a fixed list of test functions and tallies outcomes)
//! into a `TestKind`-keyed dispatch table running under the shared rayon
//! pool (see [`crate::threadpool`]).

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::args::TestArgBundle;
use crate::bitseq::BitSequence;
use crate::error::{set_last_error, TestError};
use crate::kernels::{
    approximate_entropy, block_frequency, cumulative_sums, frequency, linear_complexity,
    longest_run, matrix_rank, non_overlapping_template, overlapping_template, random_excursions,
    random_excursions_variant, runs, serial, spectral, universal, TestKind, ALL_TESTS,
};
use crate::result::TestResult;
use crate::threadpool;

fn dispatch(
    kind: TestKind,
    seq: &BitSequence,
    bundle: &TestArgBundle,
) -> Result<Vec<TestResult>, TestError> {
    match kind {
        TestKind::Frequency => frequency::run(seq).map(|r| vec![r]),
        TestKind::FrequencyWithinABlock => {
            block_frequency::run(seq, bundle.frequency_block()).map(|r| vec![r])
        }
        TestKind::Runs => runs::run(seq).map(|r| vec![r]),
        TestKind::LongestRunOfOnes => longest_run::run(seq).map(|r| vec![r]),
        TestKind::BinaryMatrixRank => matrix_rank::run(seq).map(|r| vec![r]),
        TestKind::SpectralDft => spectral::run(seq).map(|r| vec![r]),
        TestKind::NonOverlappingTemplateMatching => {
            non_overlapping_template::run(seq, bundle.non_overlapping_template())
        }
        TestKind::OverlappingTemplateMatching => {
            overlapping_template::run(seq, bundle.overlapping_template()).map(|r| vec![r])
        }
        TestKind::MaurersUniversalStatistical => universal::run(seq).map(|r| vec![r]),
        TestKind::LinearComplexity => {
            linear_complexity::run(seq, bundle.linear_complexity()).map(|r| vec![r])
        }
        TestKind::Serial => serial::run(seq, bundle.serial()),
        TestKind::ApproximateEntropy => {
            approximate_entropy::run(seq, bundle.approximate_entropy()).map(|r| vec![r])
        }
        TestKind::CumulativeSums => cumulative_sums::run(seq),
        TestKind::RandomExcursions => random_excursions::run(seq),
        TestKind::RandomExcursionsVariant => random_excursions_variant::run(seq),
    }
}

/// Runner dispatch status, matching spec.md's tri-state return convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// All requested kernels succeeded.
    AllSucceeded,
    /// The requested test list was invalid (duplicate or, in a future
    /// extension, unknown `TestKind`); nothing ran.
    InvalidTestList,
    /// At least one kernel failed; surviving results are still available.
    PartialFailure,
}

/// Holds one result slot per `TestKind` that has been run but not yet
/// taken.
#[derive(Debug, Default)]
pub struct TestRunner {
    slots: HashMap<TestKind, Vec<TestResult>>,
}

impl TestRunner {
    pub fn new() -> Self {
        TestRunner::default()
    }

    /// Runs all 15 tests with default arguments.
    pub fn run_all_automatic(&mut self, seq: &BitSequence) -> RunStatus {
        self.run_tests(seq, &ALL_TESTS, &TestArgBundle::new())
    }

    /// Runs the named subset of tests with default arguments.
    pub fn run_automatic(&mut self, seq: &BitSequence, tests: &[TestKind]) -> RunStatus {
        self.run_tests(seq, tests, &TestArgBundle::new())
    }

    /// Runs all 15 tests with the supplied argument bundle.
    pub fn run_all_tests(&mut self, seq: &BitSequence, bundle: &TestArgBundle) -> RunStatus {
        self.run_tests(seq, &ALL_TESTS, bundle)
    }

    /// Runs the named subset of tests with the supplied argument bundle.
    /// `tests` may not contain duplicates. Validation precedes execution.
    pub fn run_tests(
        &mut self,
        seq: &BitSequence,
        tests: &[TestKind],
        bundle: &TestArgBundle,
    ) -> RunStatus {
        let mut seen = HashSet::with_capacity(tests.len());
        for &t in tests {
            if !seen.insert(t) {
                return RunStatus::InvalidTestList;
            }
        }

        let outcomes: Vec<(TestKind, Result<Vec<TestResult>, TestError>)> =
            threadpool::install(|| {
                tests
                    .par_iter()
                    .map(|&kind| (kind, dispatch(kind, seq, bundle)))
                    .collect()
            });

        let mut any_failed = false;
        for (kind, outcome) in outcomes {
            match outcome {
                Ok(results) => {
                    self.slots.insert(kind, results);
                }
                Err(err) => {
                    set_last_error(&err);
                    any_failed = true;
                }
            }
        }

        if any_failed {
            RunStatus::PartialFailure
        } else {
            RunStatus::AllSucceeded
        }
    }

    /// Removes and returns the result slot for `test`. Returns
    /// [`TestError::TestWasNotRun`] if the slot is empty (including after a
    /// prior `take_result` call for the same test).
    pub fn take_result(&mut self, test: TestKind) -> Result<Vec<TestResult>, TestError> {
        self.slots.remove(&test).ok_or(TestError::TestWasNotRun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sequence(n: usize) -> BitSequence {
        let bits: Vec<bool> = (0..n).map(|i| (i as u64).wrapping_mul(2654435761) % 5 < 2).collect();
        BitSequence::from_bools(&bits)
    }

    #[test]
    fn duplicate_test_is_rejected_before_execution() {
        let mut runner = TestRunner::new();
        let seq = sample_sequence(200);
        let status = runner.run_automatic(&seq, &[TestKind::Frequency, TestKind::Frequency]);
        assert_eq!(status, RunStatus::InvalidTestList);
        assert!(runner.take_result(TestKind::Frequency).is_err());
    }

    #[test]
    fn take_result_empties_the_slot() {
        let mut runner = TestRunner::new();
        let seq = sample_sequence(200);
        let status = runner.run_automatic(&seq, &[TestKind::Frequency]);
        assert_eq!(status, RunStatus::AllSucceeded);
        assert!(runner.take_result(TestKind::Frequency).is_ok());
        assert_eq!(
            runner.take_result(TestKind::Frequency).unwrap_err(),
            TestError::TestWasNotRun
        );
    }

    #[test]
    fn untaken_test_reports_not_run() {
        let mut runner = TestRunner::new();
        assert_eq!(
            runner.take_result(TestKind::Runs).unwrap_err(),
            TestError::TestWasNotRun
        );
    }

    #[test]
    fn partial_failure_preserves_successful_results() {
        let mut runner = TestRunner::new();
        let seq = sample_sequence(50); // too short for Longest Run (needs 128)
        let status =
            runner.run_automatic(&seq, &[TestKind::Frequency, TestKind::LongestRunOfOnes]);
        assert_eq!(status, RunStatus::PartialFailure);
        assert!(runner.take_result(TestKind::Frequency).is_ok());
        assert!(runner.take_result(TestKind::LongestRunOfOnes).is_err());
    }
}
