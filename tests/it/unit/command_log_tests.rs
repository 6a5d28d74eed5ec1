//! Unit tests for the recording layout collaborator.

use keyboard_handoff::{
    AnimationOptions, AnimationPurpose, AnimationRequest, AnimationTicket, Command, CommandLog,
    LayoutApply,
};

fn request(id: u64, purpose: AnimationPurpose) -> AnimationRequest {
    AnimationRequest {
        ticket: AnimationTicket { id, purpose },
        duration: 0.25,
        options: AnimationOptions::default(),
    }
}

#[test]
fn test_records_in_order() {
    let mut log = CommandLog::new();
    log.set_offset(-120.0);
    log.animate(request(0, AnimationPurpose::PreArm));
    log.attach_drag_source();
    log.detach_drag_source();

    assert_eq!(
        log.commands(),
        &[
            Command::SetOffset { offset: -120.0 },
            Command::Animate(request(0, AnimationPurpose::PreArm)),
            Command::AttachDragSource,
            Command::DetachDragSource,
        ]
    );
}

#[test]
fn test_pending_is_fifo_and_survives_take() {
    let mut log = CommandLog::new();
    log.animate(request(0, AnimationPurpose::PreArm));
    log.animate(request(1, AnimationPurpose::CatchUp));

    assert_eq!(log.take().len(), 2);
    assert!(log.commands().is_empty());
    assert_eq!(log.pending_animations().len(), 2);

    assert_eq!(log.pop_pending().map(|t| t.id), Some(0));
    assert_eq!(log.pop_pending().map(|t| t.id), Some(1));
    assert_eq!(log.pop_pending(), None);
}

#[test]
fn test_last_animation() {
    let mut log = CommandLog::new();
    assert!(log.last_animation().is_none());

    log.animate(request(3, AnimationPurpose::Hide));
    log.set_offset(0.0);
    assert_eq!(log.last_animation().map(|r| r.ticket.id), Some(3));
}

#[test]
fn test_command_json_shape() {
    let json = serde_json::to_string(&Command::SetOffset { offset: -42.5 }).unwrap();
    assert_eq!(json, r#"{"command":"set_offset","offset":-42.5}"#);

    let json = serde_json::to_string(&Command::AttachDragSource).unwrap();
    assert_eq!(json, r#"{"command":"attach_drag_source"}"#);
}
