//! Replay scripts and the frames they produce.

use crate::helpers::render_frames;
use keyboard_handoff::replay::{ReplayScript, ReplayStep, replay, replay_json};
use keyboard_handoff::{InteractionState, KeyboardNotification, ReplayError};

#[test]
fn test_full_interaction_snapshot() {
    let frames = replay_json(
        r#"{
            "view_height": 800,
            "steps": [
                {"step":"notification","kind":"will_show","frame_end_height":300,"animation_duration":0.25,"animation_curve":7},
                {"step":"complete","done":true},
                {"step":"pointer","y":450},
                {"step":"pointer","y":700},
                {"step":"pointer","y":600},
                {"step":"notification","kind":"will_hide","animation_duration":0.2,"animation_curve":3},
                {"step":"complete","done":true},
                {"step":"notification","kind":"did_hide"}
            ]
        }"#,
    )
    .unwrap();

    insta::assert_snapshot!(render_frames(&frames), @r"
0: SystemAnimating offset=-300 max=300 attached=false | set_offset(-300), animate(PreArm#0 0.25s curve=7)
1: UserControlling offset=-300 max=300 attached=true | attach
2: UserControlling offset=-300 max=300 attached=true | -
3: UserControlling offset=-100 max=300 attached=true | set_offset(-100)
4: UserControlling offset=-200 max=300 attached=true | set_offset(-200)
5: UserControlling offset=0 max=0 attached=true | set_offset(0), animate(Hide#1 0.2s curve=3)
6: UserControlling offset=0 max=0 attached=true | -
7: Idle offset=0 max=0 attached=false | detach
");
}

#[test]
fn test_drag_race_snapshot() {
    let frames = replay_json(
        r#"{
            "view_height": 800,
            "steps": [
                {"step":"notification","kind":"will_show","frame_end_height":300,"animation_duration":0.25,"animation_curve":7},
                {"step":"pointer","y":632},
                {"step":"complete","done":true},
                {"step":"complete","done":true},
                {"step":"pointer","y":700}
            ]
        }"#,
    )
    .unwrap();

    insta::assert_snapshot!(render_frames(&frames), @r"
0: SystemAnimating offset=-300 max=300 attached=false | set_offset(-300), animate(PreArm#0 0.25s curve=7)
1: UserControlling offset=-300 max=300 attached=true | attach, animate(CatchUp#1 0.125s curve=0)
2: UserControlling offset=-300 max=300 attached=true | -
3: UserControlling offset=-300 max=300 attached=true | -
4: UserControlling offset=-100 max=300 attached=true | set_offset(-100)
");
}

#[test]
fn test_malformed_notification_produces_empty_frame() {
    let script = ReplayScript {
        config: None,
        view_height: 800.0,
        steps: vec![ReplayStep::Notification(KeyboardNotification {
            animation_duration: None,
            ..KeyboardNotification::will_show(300.0, 0.25, 7)
        })],
    };

    let frames = replay(&script).unwrap();
    assert_eq!(frames.len(), 1);
    assert!(frames[0].commands.is_empty());
    assert_eq!(frames[0].snapshot.state, InteractionState::Idle);
}

#[test]
fn test_script_with_invalid_config_fails() {
    let result = replay_json(
        r#"{"config":{"reference_drag_distance":-1},"view_height":800,"steps":[]}"#,
    );
    assert!(matches!(result, Err(ReplayError::Config(_))));
}

#[test]
fn test_script_round_trips_through_json() {
    let script = ReplayScript {
        config: None,
        view_height: 640.0,
        steps: vec![
            ReplayStep::Notification(KeyboardNotification::did_hide()),
            ReplayStep::Pointer { y: 10.0 },
            ReplayStep::Complete { done: false },
        ],
    };
    let json = serde_json::to_string(&script).unwrap();
    let parsed: ReplayScript = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, script);
}
