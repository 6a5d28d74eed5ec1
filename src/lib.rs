//! Interactive keyboard offset controller.
//!
//! Tracks an on-screen keyboard's visibility, keeps a layout anchor in sync
//! with its height, and lets the user drag the keyboard down with a pan
//! gesture. Control of the anchor is handed back and forth between system
//! keyboard animations and the user's finger.
//!
//! ## Modules
//!
//! - `controller` - `KeyboardOffsetController`, the state machine
//! - `state` - `InteractionState` and observable snapshots
//! - `events` - keyboard notification payloads and drag samples
//! - `animation` - animation requests and completion tickets
//! - `layout` - the `LayoutApply` collaborator seam and `CommandLog`
//! - `config` - catch-up tuning loaded from JSON
//! - `replay` - scripted event replay for debugging handoff races

pub mod animation;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod events;
pub mod layout;
pub mod logging;
pub mod perf;
pub mod replay;
pub mod state;

pub use animation::{AnimationCurve, AnimationOptions, AnimationPurpose, AnimationRequest, AnimationTicket};
pub use config::ControllerConfig;
pub use controller::KeyboardOffsetController;
pub use error::{ConfigError, PayloadError, ReplayError};
pub use events::{DragSample, KeyboardEvent, KeyboardHide, KeyboardNotification, KeyboardShow, NotificationKind};
pub use layout::{Command, CommandLog, LayoutApply};
pub use state::{ControllerSnapshot, InteractionState};
