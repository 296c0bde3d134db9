//! Integration tests for the action table and channel decomposition.
//!
//! These tests exercise the public API the server uses: parse an action name,
//! expand it to key-event identifiers, and build channel sequences.  They pin
//! the exact `KEYCODE_*` strings that end up on the bridge command line.

use tvcontrol_core::{channel_key_sequence, Action, AndroidKeyCode, ChannelError};

/// Expands an action name to the identifiers passed to `input keyevent`.
fn expand(name: &str) -> Vec<&'static str> {
    let action: Action = name.parse().expect("known action");
    action.key_events().iter().map(|k| k.as_str()).collect()
}

#[test]
fn test_expected_key_sequences_for_every_action() {
    let expected: &[(&str, &[&str])] = &[
        ("power_toggle", &["KEYCODE_POWER"]),
        ("power_on", &["KEYCODE_WAKEUP"]),
        ("power_off", &["KEYCODE_SLEEP"]),
        ("home", &["KEYCODE_HOME"]),
        ("back", &["KEYCODE_BACK"]),
        ("menu", &["KEYCODE_MENU"]),
        ("info", &["KEYCODE_INFO"]),
        ("tv_guide", &["KEYCODE_GUIDE"]),
        ("settings", &["KEYCODE_SETTINGS"]),
        ("source", &["KEYCODE_TV_INPUT"]),
        ("volume_up", &["KEYCODE_VOLUME_UP"]),
        ("volume_down", &["KEYCODE_VOLUME_DOWN"]),
        ("mute", &["KEYCODE_VOLUME_MUTE"]),
        ("channel_up", &["KEYCODE_CHANNEL_UP"]),
        ("channel_down", &["KEYCODE_CHANNEL_DOWN"]),
        ("play_pause", &["KEYCODE_MEDIA_PLAY_PAUSE"]),
        ("stop", &["KEYCODE_MEDIA_STOP"]),
        ("rewind", &["KEYCODE_MEDIA_REWIND"]),
        ("fast_forward", &["KEYCODE_MEDIA_FAST_FORWARD"]),
        ("dpad_up", &["KEYCODE_DPAD_UP"]),
        ("dpad_down", &["KEYCODE_DPAD_DOWN"]),
        ("dpad_left", &["KEYCODE_DPAD_LEFT"]),
        ("dpad_right", &["KEYCODE_DPAD_RIGHT"]),
        ("dpad_center", &["KEYCODE_DPAD_CENTER"]),
        ("color_red", &["KEYCODE_PROG_RED"]),
        ("color_green", &["KEYCODE_PROG_GREEN"]),
        ("color_yellow", &["KEYCODE_PROG_YELLOW"]),
        ("color_blue", &["KEYCODE_PROG_BLUE"]),
        ("enter", &["KEYCODE_ENTER"]),
        ("digit_0", &["KEYCODE_0"]),
        ("digit_1", &["KEYCODE_1"]),
        ("digit_2", &["KEYCODE_2"]),
        ("digit_3", &["KEYCODE_3"]),
        ("digit_4", &["KEYCODE_4"]),
        ("digit_5", &["KEYCODE_5"]),
        ("digit_6", &["KEYCODE_6"]),
        ("digit_7", &["KEYCODE_7"]),
        ("digit_8", &["KEYCODE_8"]),
        ("digit_9", &["KEYCODE_9"]),
    ];

    // Every action in the vocabulary must be covered by this table.
    assert_eq!(expected.len(), Action::ALL.len());

    for (name, keys) in expected {
        assert_eq!(expand(name), *keys, "action {name}");
    }
}

#[test]
fn test_channel_101_is_three_digits_then_enter() {
    let keys: Vec<_> = channel_key_sequence("101", true)
        .unwrap()
        .into_iter()
        .map(AndroidKeyCode::as_str)
        .collect();

    assert_eq!(keys, ["KEYCODE_1", "KEYCODE_0", "KEYCODE_1", "KEYCODE_ENTER"]);
}

#[test]
fn test_channel_digits_match_digit_actions() {
    // Typing "2" on the number pad and entering channel "2" must send the
    // same key code.
    let from_channel = channel_key_sequence("2", false).unwrap();
    let from_action = Action::Digit2.key_events();
    assert_eq!(from_channel.as_slice(), from_action);
}

#[test]
fn test_channel_rejects_non_numeric_input() {
    assert_eq!(channel_key_sequence("1O1", true), Err(ChannelError::NonNumeric));
    assert_eq!(
        channel_key_sequence("1O1", true).unwrap_err().to_string(),
        "Channel number must be numeric."
    );
}

#[test]
fn test_unknown_action_is_rejected() {
    assert!("volume_up_max".parse::<Action>().is_err());
    assert!("".parse::<Action>().is_err());
}
