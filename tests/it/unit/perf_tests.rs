//! Unit tests for perf module.

use keyboard_handoff::perf::{ScopedTimer, is_profiling_enabled, set_profiling_enabled};

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping never warns
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_runtime_toggle() {
    let initial = is_profiling_enabled();
    set_profiling_enabled(true);
    assert!(is_profiling_enabled());
    set_profiling_enabled(false);
    assert!(!is_profiling_enabled());
    set_profiling_enabled(initial);
}
