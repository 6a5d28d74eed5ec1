//! Interaction state machine - who owns the keyboard offset right now.
//!
//! ## State Transitions
//!
//! ```text
//! Idle            -> SystemAnimating   (will-show, pre-arm animation issued)
//! SystemAnimating -> UserControlling   (pre-arm finished, or drag catch-up)
//! Idle            -> UserControlling   (drag catch-up)
//! Any             -> Idle              (did-hide)
//! ```
//!
//! A will-show while `UserControlling` updates the offset in place and does
//! not change state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    /// Keyboard hidden or not yet shown
    #[default]
    Idle,
    /// System show animation in flight
    SystemAnimating,
    /// Drag samples drive the offset 1:1
    UserControlling,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_system_animating(&self) -> bool {
        matches!(self, Self::SystemAnimating)
    }

    pub fn is_user_controlling(&self) -> bool {
        matches!(self, Self::UserControlling)
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// Observable controller state at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub state: InteractionState,
    /// Last known fully-shown keyboard height
    pub max_height: f64,
    /// Current anchor offset, in `[-max_height, 0]` outside the pre-arm window
    pub offset: f64,
    pub drag_attached: bool,
}
