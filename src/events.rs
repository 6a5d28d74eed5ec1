//! Input events - keyboard visibility notifications and drag samples.
//!
//! Hosts deliver keyboard notifications as loosely-typed payloads
//! (`KeyboardNotification`). They are validated into `KeyboardEvent`
//! before reaching the controller, so the controller only ever sees
//! complete, finite values.

use crate::animation::AnimationCurve;
use crate::error::{PayloadError, PayloadResult};
use serde::{Deserialize, Serialize};

/// Which keyboard notification the host posted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    WillShow,
    WillHide,
    DidHide,
}

/// Raw notification payload as posted by the host.
///
/// Every payload field is optional here; `KeyboardEvent::try_from` decides
/// which ones the kind requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardNotification {
    pub kind: NotificationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_end_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_curve: Option<u32>,
}

impl KeyboardNotification {
    pub fn will_show(height: f64, duration: f64, curve: u32) -> Self {
        Self {
            kind: NotificationKind::WillShow,
            frame_end_height: Some(height),
            animation_duration: Some(duration),
            animation_curve: Some(curve),
        }
    }

    pub fn will_hide(duration: Option<f64>, curve: Option<u32>) -> Self {
        Self {
            kind: NotificationKind::WillHide,
            frame_end_height: None,
            animation_duration: duration,
            animation_curve: curve,
        }
    }

    pub fn did_hide() -> Self {
        Self {
            kind: NotificationKind::DidHide,
            frame_end_height: None,
            animation_duration: None,
            animation_curve: None,
        }
    }
}

/// Keyboard is about to appear or change height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardShow {
    /// Height of the keyboard's end frame
    pub height: f64,
    /// System animation duration in seconds
    pub duration: f64,
    pub curve: AnimationCurve,
}

/// Keyboard is about to disappear
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyboardHide {
    pub duration: Option<f64>,
    pub curve: Option<AnimationCurve>,
}

/// A validated keyboard visibility event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyboardEvent {
    WillShow(KeyboardShow),
    WillHide(KeyboardHide),
    DidHide,
}

impl TryFrom<&KeyboardNotification> for KeyboardEvent {
    type Error = PayloadError;

    fn try_from(note: &KeyboardNotification) -> PayloadResult<Self> {
        match note.kind {
            NotificationKind::WillShow => {
                let duration = required(note.animation_duration, "animation_duration")?;
                let curve = note
                    .animation_curve
                    .ok_or(PayloadError::MissingField("animation_curve"))?;
                let height = required(note.frame_end_height, "frame_end_height")?;
                Ok(Self::WillShow(KeyboardShow {
                    height,
                    duration,
                    curve: AnimationCurve::from_bits(curve),
                }))
            }
            NotificationKind::WillHide => Ok(Self::WillHide(KeyboardHide {
                // Optional on hide: an unusable duration falls back to the default
                duration: note
                    .animation_duration
                    .and_then(|d| non_negative(d, "animation_duration").ok()),
                curve: note.animation_curve.map(AnimationCurve::from_bits),
            })),
            NotificationKind::DidHide => Ok(Self::DidHide),
        }
    }
}

fn required(value: Option<f64>, field: &'static str) -> PayloadResult<f64> {
    let value = value.ok_or(PayloadError::MissingField(field))?;
    non_negative(value, field)
}

fn non_negative(value: f64, field: &'static str) -> PayloadResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PayloadError::InvalidValue { field, value })
    }
}

/// One pointer sample from the drag input source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSample {
    /// Distance of the pointer above the bottom edge of the view
    pub distance_from_bottom: f64,
}

impl DragSample {
    pub fn new(distance_from_bottom: f64) -> Self {
        Self {
            distance_from_bottom,
        }
    }

    /// Derive a sample from a pointer position in view coordinates
    #[inline]
    pub fn at_pointer(pointer_y: f64, view_height: f64) -> Self {
        Self::new(view_height - pointer_y)
    }
}
