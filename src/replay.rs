//! Scripted replay of keyboard and drag events.
//!
//! A script is a JSON list of steps fed to a controller backed by a
//! `CommandLog`. Each step yields a frame with the commands it produced and
//! the controller state afterwards, which makes handoff races easy to
//! reproduce outside a real host:
//!
//! ```json
//! {
//!   "view_height": 800,
//!   "steps": [
//!     { "step": "notification", "kind": "will_show", "frame_end_height": 300,
//!       "animation_duration": 0.25, "animation_curve": 7 },
//!     { "step": "pointer", "y": 632 },
//!     { "step": "complete", "done": true }
//!   ]
//! }
//! ```

use crate::config::ControllerConfig;
use crate::controller::KeyboardOffsetController;
use crate::error::{ReplayError, ReplayResult};
use crate::events::{DragSample, KeyboardNotification};
use crate::layout::{Command, CommandLog};
use crate::state::ControllerSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ControllerConfig>,
    /// Height of the hosting view, used to turn pointer positions into
    /// distances from the bottom edge
    pub view_height: f64,
    pub steps: Vec<ReplayStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Deliver a keyboard notification
    Notification(KeyboardNotification),
    /// Deliver a drag sample at this pointer y
    Pointer { y: f64 },
    /// Finish the oldest outstanding animation
    Complete { done: bool },
}

/// Result of one replayed step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayFrame {
    pub step: usize,
    pub commands: Vec<Command>,
    pub snapshot: ControllerSnapshot,
}

/// Parse a JSON script and replay it
pub fn replay_json(json: &str) -> ReplayResult<Vec<ReplayFrame>> {
    let script: ReplayScript = serde_json::from_str(json)?;
    replay(&script)
}

pub fn replay(script: &ReplayScript) -> ReplayResult<Vec<ReplayFrame>> {
    if !script.view_height.is_finite() || script.view_height <= 0.0 {
        return Err(ReplayError::InvalidViewHeight(script.view_height));
    }

    let config = script.config.unwrap_or_default();
    config.validate()?;

    let mut controller = KeyboardOffsetController::with_config(CommandLog::new(), config);
    let mut frames = Vec::with_capacity(script.steps.len());

    for (step, action) in script.steps.iter().enumerate() {
        match action {
            ReplayStep::Notification(notification) => controller.handle_notification(notification),
            ReplayStep::Pointer { y } => {
                controller.drag_sample(DragSample::at_pointer(*y, script.view_height));
            }
            ReplayStep::Complete { done } => {
                let ticket = controller
                    .layout_mut()
                    .pop_pending()
                    .ok_or(ReplayError::NothingToComplete { step })?;
                controller.animation_finished(ticket, *done);
            }
        }

        frames.push(ReplayFrame {
            step,
            commands: controller.layout_mut().take(),
            snapshot: controller.snapshot(),
        });
    }

    tracing::debug!(steps = frames.len(), "Replay finished");
    Ok(frames)
}
