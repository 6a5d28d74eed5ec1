//! Animation commands emitted by the controller.
//!
//! The controller never animates anything itself. It hands an
//! `AnimationRequest` to the layout collaborator, which runs its own
//! animated layout pass and later reports back through
//! `KeyboardOffsetController::animation_finished` with the request's ticket.

use serde::{Deserialize, Serialize};

/// Host easing curve, passed through as opaque bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationCurve(u32);

impl AnimationCurve {
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// How the collaborator should run an animated layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimationOptions {
    /// Host curve, if the event supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<AnimationCurve>,
    /// Start from the presentation value of any in-flight animation
    pub begin_from_current_state: bool,
}

impl AnimationOptions {
    /// Options for system keyboard animations
    pub fn from_current_state(curve: Option<AnimationCurve>) -> Self {
        Self {
            curve,
            begin_from_current_state: true,
        }
    }
}

/// Why an animation was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationPurpose {
    /// System show animation; completion hands control to the user
    PreArm,
    /// Eases the layout into place when a drag beats the pre-arm completion
    CatchUp,
    /// Layout returning to rest as the keyboard hides
    Hide,
}

/// Identifies one issued animation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationTicket {
    pub id: u64,
    pub purpose: AnimationPurpose,
}

/// A single animated layout pass for the collaborator to run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationRequest {
    pub ticket: AnimationTicket,
    /// Duration in seconds, never negative
    pub duration: f64,
    pub options: AnimationOptions,
}

impl AnimationRequest {
    /// Raw curve bits, zero when the event carried none
    pub fn curve_bits(&self) -> u32 {
        self.options.curve.map(AnimationCurve::bits).unwrap_or(0)
    }
}

/// Hands out tickets with increasing ids
#[derive(Debug, Default)]
pub(crate) struct TicketIssuer {
    next_id: u64,
}

impl TicketIssuer {
    pub(crate) fn issue(&mut self, purpose: AnimationPurpose) -> AnimationTicket {
        let ticket = AnimationTicket {
            id: self.next_id,
            purpose,
        };
        self.next_id += 1;
        ticket
    }
}
