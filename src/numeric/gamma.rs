//! Regularized incomplete gamma function, grounded in `statrs::function::gamma`
//! the same way the teacher's `byte_distribution_test`/`matrix_ranks` call
//! `statrs::function::gamma::checked_gamma_lr`/`checked_gamma_ur`.

use crate::error::TestError;

/// `igamc(a, x) = Q(a, x) = Gamma(a, x) / Gamma(a)`, the regularized upper
/// incomplete gamma function, for `a > 0, x >= 0`.
///
/// Returns [`TestError::GammaFunctionFailed`] distinctly from a successful
/// `0.0` result, per the contract every chi-square-like kernel depends on.
pub fn igamc(a: f64, x: f64) -> Result<f64, TestError> {
    if !(a > 0.0) || !(x >= 0.0) {
        return Err(TestError::GammaFunctionFailed { a, x });
    }
    statrs::function::gamma::checked_gamma_ur(a, x)
        .map_err(|_| TestError::GammaFunctionFailed { a, x })
}
