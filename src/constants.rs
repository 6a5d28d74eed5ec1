//! Crate-wide constants.
//!
//! Centralizes the tuning values for keyboard handoff so the controller
//! and config defaults agree.

// ============================================================================
// Drag Catch-Up
// ============================================================================

/// Drag distance (from the bottom of the view) at which a catch-up
/// animation takes no time at all
pub const REFERENCE_DRAG_DISTANCE: f64 = 336.0;

/// Catch-up animation duration in seconds when the drag starts at the
/// very bottom of the view
pub const CATCH_UP_MAX_DURATION: f64 = 0.25;

// ============================================================================
// Hide
// ============================================================================

/// Duration used when a will-hide payload carries no duration
pub const DEFAULT_HIDE_DURATION: f64 = 0.0;

// ============================================================================
// Logging
// ============================================================================

/// Environment variable read by `logging::init`
pub const LOG_ENV_VAR: &str = "KEYBOARD_HANDOFF_LOG";

/// Filter used when the environment variable is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// ============================================================================
// Profiling
// ============================================================================

/// A single drag sample should never take longer than this
pub const DRAG_SAMPLE_BUDGET_MS: f64 = 1.0;
