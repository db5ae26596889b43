//! One-shot thread-pool configuration, grounded in the original
//! implementation's documented use of rayon
//! (`original_source/sts-cbindings/sts-lib.h`'s `set_max_threads` doc
//! comment forwards to `ThreadPoolBuilder::num_threads`).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::TestError;

static POOL: OnceLock<ThreadPool> = OnceLock::new();

/// Set as soon as any kernel has been dispatched through [`install`],
/// whether or not a pool was ever configured. `set_max_threads` checks this
/// in addition to `POOL` itself, since the implicit default pool used by
/// `None => f()` below is itself a commitment the caller can no longer
/// retract.
static DISPATCHED: AtomicBool = AtomicBool::new(false);

/// Sets the maximum number of worker threads used by parallelizable
/// kernels and the runner's fan-out. May be called exactly once, strictly
/// before any kernel runs; subsequent calls fail with
/// [`TestError::SetMaxThreads`].
pub fn set_max_threads(max_threads: usize) -> Result<(), TestError> {
    if max_threads == 0 {
        return Err(TestError::SetMaxThreads("max_threads must be >= 1".into()));
    }
    if DISPATCHED.load(Ordering::SeqCst) {
        return Err(TestError::SetMaxThreads(
            "set_max_threads must be called before any kernel runs".into(),
        ));
    }
    let pool = ThreadPoolBuilder::new()
        .num_threads(max_threads)
        .build()
        .map_err(|e| TestError::SetMaxThreads(e.to_string()))?;
    POOL.set(pool)
        .map_err(|_| TestError::SetMaxThreads("set_max_threads may only be called once".into()))
}

/// Runs `f` inside the configured pool, lazily building a platform-default
/// pool (rayon's own global default thread count) if `set_max_threads` was
/// never called. Marks [`DISPATCHED`] so a later `set_max_threads` call is
/// rejected even along this fallback path.
pub(crate) fn install<R: Send>(f: impl FnOnce() -> R + Send) -> R {
    DISPATCHED.store(true, Ordering::SeqCst);
    match POOL.get() {
        Some(pool) => pool.install(f),
        None => f(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    #[test]
    fn rejects_zero_threads() {
        assert!(set_max_threads(0).is_err());
    }

    #[test]
    fn second_call_fails_after_first_succeeds() {
        INIT.call_once(|| {
            let _ = set_max_threads(2);
        });
        assert!(set_max_threads(4).is_err());
    }
}
