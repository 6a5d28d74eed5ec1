//! Performance instrumentation for the drag hot path.
//!
//! Drag samples arrive at display rate for as long as a gesture lasts, so the
//! handler is timed when the `profiling` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! keyboard-handoff = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn drag_sample(&mut self, sample: DragSample) {
//!     profile_scope!("drag_sample", DRAG_SAMPLE_BUDGET_MS);
//!     // ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Default threshold for timers created without one
const DEFAULT_THRESHOLD_MS: f64 = 16.67;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// RAII timer that warns when its scope runs over a threshold
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the default frame-budget threshold
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, DEFAULT_THRESHOLD_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(
                "Slow operation '{}': {:.3}ms (budget {:.3}ms)",
                self.name, elapsed, self.threshold_ms
            );
        }
        #[cfg(feature = "profiling")]
        trace!(name = self.name, elapsed_ms = elapsed, "Scope timing");
    }
}
