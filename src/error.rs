//! Error kinds and the thread-local last-error channel.

use std::cell::RefCell;

use thiserror::Error;

/// Closed set of failure kinds a kernel or the runner can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoError,
    Overflow,
    NaN,
    Infinite,
    GammaFunctionFailed,
    InvalidParameter,
    SetMaxThreads,
    InvalidTest,
    DuplicateTest,
    TestFailed,
    TestWasNotRun,
}

/// A kernel or runner failure, carrying both the closed [`ErrorCode`] and a
/// human-readable message.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TestError {
    #[error("integer overflow while computing {0}")]
    Overflow(String),

    #[error("statistic produced NaN while computing {0}")]
    NaN(String),

    #[error("statistic produced +/-infinity while computing {0}")]
    Infinite(String),

    #[error("the regularized incomplete gamma function failed for a={a}, x={x}")]
    GammaFunctionFailed { a: f64, x: f64 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("set_max_threads failed: {0}")]
    SetMaxThreads(String),

    #[error("unknown test kind requested")]
    InvalidTest,

    #[error("test kind {0:?} was requested more than once")]
    DuplicateTest(String),

    #[error("test failed: {0}")]
    TestFailed(String),

    #[error("test was not run")]
    TestWasNotRun,
}

impl TestError {
    /// The closed [`ErrorCode`] this error maps to.
    pub fn code(&self) -> ErrorCode {
        match self {
            TestError::Overflow(_) => ErrorCode::Overflow,
            TestError::NaN(_) => ErrorCode::NaN,
            TestError::Infinite(_) => ErrorCode::Infinite,
            TestError::GammaFunctionFailed { .. } => ErrorCode::GammaFunctionFailed,
            TestError::InvalidParameter(_) => ErrorCode::InvalidParameter,
            TestError::SetMaxThreads(_) => ErrorCode::SetMaxThreads,
            TestError::InvalidTest => ErrorCode::InvalidTest,
            TestError::DuplicateTest(_) => ErrorCode::DuplicateTest,
            TestError::TestFailed(_) => ErrorCode::TestFailed,
            TestError::TestWasNotRun => ErrorCode::TestWasNotRun,
        }
    }
}

/// The last error recorded on the calling thread.
#[derive(Debug, Clone, PartialEq)]
pub struct LastError {
    pub code: ErrorCode,
    pub message: String,
}

thread_local! {
    static LAST_ERROR: RefCell<Option<LastError>> = const { RefCell::new(None) };
}

/// Overwrites the thread-local error slot. Called by the runner when a
/// kernel fails; kernels themselves stay pure and only return `Result`.
pub(crate) fn set_last_error(err: &TestError) {
    LAST_ERROR.with(|slot| {
        *slot.borrow_mut() = Some(LastError {
            code: err.code(),
            message: err.to_string(),
        });
    });
}

/// Returns the last error recorded on this thread without clearing it.
pub fn peek_last_error() -> Option<LastError> {
    LAST_ERROR.with(|slot| slot.borrow().clone())
}

/// Returns and clears the last error recorded on this thread.
pub fn take_last_error() -> Option<LastError> {
    LAST_ERROR.with(|slot| slot.borrow_mut().take())
}

/// Explicitly clears the thread-local error slot.
pub fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Checks a kernel's final statistic for `NaN`/`±infinity`, the two
/// "statistic produced a non-finite value" failure modes spec.md §4.3
/// requires every kernel to detect, naming the offending computation in
/// `context`.
pub(crate) fn check_finite(value: f64, context: &str) -> Result<f64, TestError> {
    if value.is_nan() {
        Err(TestError::NaN(context.to_string()))
    } else if value.is_infinite() {
        Err(TestError::Infinite(context.to_string()))
    } else {
        Ok(value)
    }
}
