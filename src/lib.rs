//! NIST SP 800-22 statistical randomness test battery for binary sequences.
//!
//! Build a [`BitSequence`], pick the tests you want via [`TestKind`], and
//! dispatch them through a [`TestRunner`]. Kernels can also be called
//! directly through the `kernels` module when you don't need the runner's
//! bookkeeping.

pub mod args;
pub mod bitseq;
pub mod error;
pub mod kernels;
pub mod numeric;
pub mod result;
pub mod runner;
pub mod tables;
pub mod threadpool;

pub use args::TestArgBundle;
pub use bitseq::BitSequence;
pub use error::{clear_last_error, peek_last_error, take_last_error, ErrorCode, LastError, TestError};
pub use kernels::{TestKind, ALL_TESTS};
pub use result::TestResult;
pub use runner::{RunStatus, TestRunner};
pub use threadpool::set_max_threads;
