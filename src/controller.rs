//! Keyboard offset controller - the single owner of the keyboard anchor.
//!
//! Two input streams compete for the offset: keyboard visibility events
//! from the system, and drag samples from the user's pan gesture. The
//! controller arbitrates between them with `InteractionState`:
//!
//! - On will-show the offset jumps to the target and a pre-arm animation is
//!   issued. When it finishes, control passes to the user and the drag
//!   source is attached before any drag starts.
//! - If a drag sample beats the pre-arm completion, the controller takes
//!   control immediately and issues a short catch-up animation so the
//!   layout eases into place instead of jumping.
//! - While the user controls, samples move the offset 1:1, clamped to
//!   `[0, max_height]`.
//! - Did-hide detaches the drag source and returns to `Idle`.
//!
//! All handlers run to completion on the host's UI thread. Animations are
//! fire-and-forget from the controller's side: the collaborator reports
//! completion later through `animation_finished`, and tickets that no
//! longer match the pending pre-arm are ignored.

use crate::animation::{
    AnimationOptions, AnimationPurpose, AnimationRequest, AnimationTicket, TicketIssuer,
};
use crate::config::ControllerConfig;
use crate::constants::{DEFAULT_HIDE_DURATION, DRAG_SAMPLE_BUDGET_MS};
use crate::events::{DragSample, KeyboardEvent, KeyboardHide, KeyboardNotification, KeyboardShow};
use crate::layout::LayoutApply;
use crate::profile_scope;
use crate::state::{ControllerSnapshot, InteractionState};
use tracing::{debug, trace};

pub struct KeyboardOffsetController<L: LayoutApply> {
    layout: L,
    config: ControllerConfig,
    state: InteractionState,
    max_height: f64,
    offset: f64,
    drag_attached: bool,
    /// Pre-arm animation whose completion will hand control to the user
    pending_pre_arm: Option<AnimationTicket>,
    tickets: TicketIssuer,
}

impl<L: LayoutApply> KeyboardOffsetController<L> {
    pub fn new(layout: L) -> Self {
        Self::with_config(layout, ControllerConfig::default())
    }

    pub fn with_config(layout: L, config: ControllerConfig) -> Self {
        Self {
            layout,
            config,
            state: InteractionState::default(),
            max_height: 0.0,
            offset: 0.0,
            drag_attached: false,
            pending_pre_arm: None,
            tickets: TicketIssuer::default(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    pub fn is_drag_attached(&self) -> bool {
        self.drag_attached
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            state: self.state,
            max_height: self.max_height,
            offset: self.offset,
            drag_attached: self.drag_attached,
        }
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn into_layout(self) -> L {
        self.layout
    }

    // ========================================================================
    // Keyboard visibility
    // ========================================================================

    /// Validate a raw host notification and dispatch it. Malformed payloads
    /// are dropped without touching any state.
    pub fn handle_notification(&mut self, notification: &KeyboardNotification) {
        match KeyboardEvent::try_from(notification) {
            Ok(event) => self.handle_event(event),
            Err(err) => {
                debug!(kind = ?notification.kind, %err, "Dropping malformed keyboard notification");
            }
        }
    }

    pub fn handle_event(&mut self, event: KeyboardEvent) {
        match event {
            KeyboardEvent::WillShow(show) => self.keyboard_will_show(show),
            KeyboardEvent::WillHide(hide) => self.keyboard_will_hide(hide),
            KeyboardEvent::DidHide => self.keyboard_did_hide(),
        }
    }

    pub fn keyboard_will_show(&mut self, show: KeyboardShow) {
        self.max_height = show.height;
        self.apply_offset(anchor_for(show.height));

        if self.state.is_user_controlling() {
            // Height change mid-interaction: track it without re-arming
            debug!(height = show.height, "Keyboard resized while user controls");
            return;
        }

        self.state = InteractionState::SystemAnimating;
        let ticket = self.tickets.issue(AnimationPurpose::PreArm);
        if let Some(superseded) = self.pending_pre_arm.replace(ticket) {
            trace!(id = superseded.id, "Pre-arm superseded");
        }
        debug!(
            height = show.height,
            duration = show.duration,
            id = ticket.id,
            "Keyboard will show, pre-arming"
        );
        self.layout.animate(AnimationRequest {
            ticket,
            duration: show.duration,
            options: AnimationOptions::from_current_state(Some(show.curve)),
        });
    }

    /// Hide can still be cancelled by the system, so the state is left alone
    /// until did-hide confirms it.
    pub fn keyboard_will_hide(&mut self, hide: KeyboardHide) {
        self.max_height = 0.0;
        self.apply_offset(0.0);

        if let Some(invalidated) = self.pending_pre_arm.take() {
            debug!(id = invalidated.id, "Pre-arm invalidated by hide");
        }

        let ticket = self.tickets.issue(AnimationPurpose::Hide);
        let duration = hide.duration.unwrap_or(DEFAULT_HIDE_DURATION);
        debug!(duration, state = ?self.state, "Keyboard will hide");
        self.layout.animate(AnimationRequest {
            ticket,
            duration,
            options: AnimationOptions::from_current_state(hide.curve),
        });
    }

    pub fn keyboard_did_hide(&mut self) {
        self.pending_pre_arm = None;
        self.set_drag_attached(false);
        if !self.state.is_idle() {
            debug!(from = ?self.state, "Keyboard did hide, back to idle");
        }
        self.state.reset();

        if self.max_height != 0.0 || self.offset != 0.0 {
            debug!(
                max_height = self.max_height,
                offset = self.offset,
                "Clearing stale keyboard geometry"
            );
            self.max_height = 0.0;
            self.apply_offset(0.0);
        }
    }

    // ========================================================================
    // Animation completion
    // ========================================================================

    /// Report that an animation issued through `LayoutApply::animate` has
    /// ended. `done` is false when it was interrupted.
    pub fn animation_finished(&mut self, ticket: AnimationTicket, done: bool) {
        if ticket.purpose != AnimationPurpose::PreArm {
            trace!(id = ticket.id, purpose = ?ticket.purpose, done, "Animation finished");
            return;
        }
        if self.pending_pre_arm != Some(ticket) {
            debug!(id = ticket.id, state = ?self.state, "Ignoring stale pre-arm completion");
            return;
        }
        self.pending_pre_arm = None;

        if !done {
            debug!(id = ticket.id, "Pre-arm interrupted, not handing off");
            return;
        }

        debug!(id = ticket.id, "Pre-arm complete, user controls keyboard");
        self.state = InteractionState::UserControlling;
        self.set_drag_attached(true);
    }

    // ========================================================================
    // Drag input
    // ========================================================================

    /// Handle a pointer sample from the drag source
    pub fn drag_sample(&mut self, sample: DragSample) {
        profile_scope!("drag_sample", DRAG_SAMPLE_BUDGET_MS);

        let distance = sample.distance_from_bottom;
        if !distance.is_finite() {
            trace!(distance, "Ignoring non-finite drag sample");
            return;
        }

        if !self.state.is_user_controlling() {
            self.catch_up(distance);
            return;
        }

        let keyboard_height = self.offset.abs();
        // Below the keyboard the offset may shrink to zero; above it, it
        // never exceeds the last fully-shown height.
        let tracked = if distance < keyboard_height {
            distance.max(0.0)
        } else {
            distance
        };
        let new_height = tracked.min(self.max_height);

        if new_height == keyboard_height {
            return;
        }
        trace!(distance, new_height, "Tracking drag");
        self.apply_offset(anchor_for(new_height));
    }

    /// A drag started before the pre-arm completion arrived. Take control now
    /// and ease the layout to its already-applied target.
    fn catch_up(&mut self, distance: f64) {
        let duration = self.config.catch_up_duration(distance);
        debug!(from = ?self.state, distance, duration, "Drag beat pre-arm, catching up");

        self.state = InteractionState::UserControlling;
        self.pending_pre_arm = None;
        self.set_drag_attached(true);

        let ticket = self.tickets.issue(AnimationPurpose::CatchUp);
        self.layout.animate(AnimationRequest {
            ticket,
            duration,
            options: AnimationOptions::default(),
        });
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn apply_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.layout.set_offset(offset);
    }

    /// Emits attach/detach only on an actual change
    fn set_drag_attached(&mut self, attached: bool) {
        if self.drag_attached == attached {
            return;
        }
        self.drag_attached = attached;
        if attached {
            self.layout.attach_drag_source();
        } else {
            self.layout.detach_drag_source();
        }
    }
}

/// Anchor offset for a keyboard height. Subtracting from zero keeps a zero
/// height at +0.0 rather than -0.0.
#[inline]
fn anchor_for(height: f64) -> f64 {
    0.0 - height
}
