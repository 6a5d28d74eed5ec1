//! Layout-apply collaborator seam.
//!
//! The controller talks to the host's layout layer only through
//! `LayoutApply`. Hosts implement it over their constraint system; tests and
//! the replay tool use `CommandLog`, which just records what was asked.

use crate::animation::{AnimationRequest, AnimationTicket};
use serde::{Deserialize, Serialize};

/// Receives the controller's output commands.
///
/// `set_offset` is always issued before the `animate` call that should
/// animate towards it. For each `animate` the implementor must call
/// `KeyboardOffsetController::animation_finished` with the request's ticket
/// exactly once.
pub trait LayoutApply {
    /// Apply a new anchor offset (zero or negative)
    fn set_offset(&mut self, offset: f64);

    /// Run an animated layout pass
    fn animate(&mut self, request: AnimationRequest);

    /// Start delivering drag samples to the controller
    fn attach_drag_source(&mut self);

    /// Stop delivering drag samples
    fn detach_drag_source(&mut self);
}

/// One output command, as recorded by `CommandLog`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    SetOffset { offset: f64 },
    Animate(AnimationRequest),
    AttachDragSource,
    DetachDragSource,
}

/// Recording collaborator.
///
/// Keeps every command in order and tracks which animations have not yet
/// been reported finished.
#[derive(Debug, Default)]
pub struct CommandLog {
    commands: Vec<Command>,
    pending: Vec<AnimationTicket>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded since the last `take`
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Drain recorded commands
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Animations issued but not yet finished, oldest first
    pub fn pending_animations(&self) -> &[AnimationTicket] {
        &self.pending
    }

    /// Remove and return the oldest unfinished animation
    pub fn pop_pending(&mut self) -> Option<AnimationTicket> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    /// Most recent animation request, if any was recorded
    pub fn last_animation(&self) -> Option<&AnimationRequest> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::Animate(request) => Some(request),
            _ => None,
        })
    }
}

impl LayoutApply for CommandLog {
    fn set_offset(&mut self, offset: f64) {
        self.commands.push(Command::SetOffset { offset });
    }

    fn animate(&mut self, request: AnimationRequest) {
        self.pending.push(request.ticket);
        self.commands.push(Command::Animate(request));
    }

    fn attach_drag_source(&mut self) {
        self.commands.push(Command::AttachDragSource);
    }

    fn detach_drag_source(&mut self) {
        self.commands.push(Command::DetachDragSource);
    }
}
