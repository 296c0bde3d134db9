//! The closed vocabulary of remote-control actions.
//!
//! An [`Action`] is what the browser asks for ("volume_up", "digit_7"); the
//! key-event codes it expands to are defined by [`Action::key_events`].  The
//! mapping is an exhaustive `match`, so adding a variant without giving it a
//! key sequence is a compile error rather than a runtime 400.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::android::AndroidKeyCode;

/// The requested action name is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Command '{0}' is not supported.")]
pub struct UnknownAction(pub String);

/// A named remote-control action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PowerToggle,
    PowerOn,
    PowerOff,
    Home,
    Back,
    Menu,
    Info,
    TvGuide,
    Settings,
    Source,
    VolumeUp,
    VolumeDown,
    Mute,
    ChannelUp,
    ChannelDown,
    PlayPause,
    Stop,
    Rewind,
    FastForward,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    DpadCenter,
    ColorRed,
    ColorGreen,
    ColorYellow,
    ColorBlue,
    Enter,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
}

impl Action {
    /// Every supported action, grouped the way the browser remote lays them out.
    pub const ALL: &'static [Action] = &[
        Action::PowerToggle,
        Action::PowerOn,
        Action::PowerOff,
        Action::Home,
        Action::Back,
        Action::Menu,
        Action::Info,
        Action::TvGuide,
        Action::Settings,
        Action::Source,
        Action::VolumeUp,
        Action::VolumeDown,
        Action::Mute,
        Action::ChannelUp,
        Action::ChannelDown,
        Action::PlayPause,
        Action::Stop,
        Action::Rewind,
        Action::FastForward,
        Action::DpadUp,
        Action::DpadDown,
        Action::DpadLeft,
        Action::DpadRight,
        Action::DpadCenter,
        Action::ColorRed,
        Action::ColorGreen,
        Action::ColorYellow,
        Action::ColorBlue,
        Action::Enter,
        Action::Digit0,
        Action::Digit1,
        Action::Digit2,
        Action::Digit3,
        Action::Digit4,
        Action::Digit5,
        Action::Digit6,
        Action::Digit7,
        Action::Digit8,
        Action::Digit9,
    ];

    /// Returns the wire name used in `POST /api/command` bodies.
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::PowerToggle => "power_toggle",
            Action::PowerOn => "power_on",
            Action::PowerOff => "power_off",
            Action::Home => "home",
            Action::Back => "back",
            Action::Menu => "menu",
            Action::Info => "info",
            Action::TvGuide => "tv_guide",
            Action::Settings => "settings",
            Action::Source => "source",
            Action::VolumeUp => "volume_up",
            Action::VolumeDown => "volume_down",
            Action::Mute => "mute",
            Action::ChannelUp => "channel_up",
            Action::ChannelDown => "channel_down",
            Action::PlayPause => "play_pause",
            Action::Stop => "stop",
            Action::Rewind => "rewind",
            Action::FastForward => "fast_forward",
            Action::DpadUp => "dpad_up",
            Action::DpadDown => "dpad_down",
            Action::DpadLeft => "dpad_left",
            Action::DpadRight => "dpad_right",
            Action::DpadCenter => "dpad_center",
            Action::ColorRed => "color_red",
            Action::ColorGreen => "color_green",
            Action::ColorYellow => "color_yellow",
            Action::ColorBlue => "color_blue",
            Action::Enter => "enter",
            Action::Digit0 => "digit_0",
            Action::Digit1 => "digit_1",
            Action::Digit2 => "digit_2",
            Action::Digit3 => "digit_3",
            Action::Digit4 => "digit_4",
            Action::Digit5 => "digit_5",
            Action::Digit6 => "digit_6",
            Action::Digit7 => "digit_7",
            Action::Digit8 => "digit_8",
            Action::Digit9 => "digit_9",
        }
    }

    /// Returns the ordered key-event codes this action sends.
    pub const fn key_events(self) -> &'static [AndroidKeyCode] {
        use AndroidKeyCode as K;
        match self {
            Action::PowerToggle => &[K::Power],
            Action::PowerOn => &[K::Wakeup],
            Action::PowerOff => &[K::Sleep],
            Action::Home => &[K::Home],
            Action::Back => &[K::Back],
            Action::Menu => &[K::Menu],
            Action::Info => &[K::Info],
            Action::TvGuide => &[K::Guide],
            Action::Settings => &[K::Settings],
            Action::Source => &[K::TvInput],
            Action::VolumeUp => &[K::VolumeUp],
            Action::VolumeDown => &[K::VolumeDown],
            Action::Mute => &[K::VolumeMute],
            Action::ChannelUp => &[K::ChannelUp],
            Action::ChannelDown => &[K::ChannelDown],
            Action::PlayPause => &[K::MediaPlayPause],
            Action::Stop => &[K::MediaStop],
            Action::Rewind => &[K::MediaRewind],
            Action::FastForward => &[K::MediaFastForward],
            Action::DpadUp => &[K::DpadUp],
            Action::DpadDown => &[K::DpadDown],
            Action::DpadLeft => &[K::DpadLeft],
            Action::DpadRight => &[K::DpadRight],
            Action::DpadCenter => &[K::DpadCenter],
            Action::ColorRed => &[K::ProgRed],
            Action::ColorGreen => &[K::ProgGreen],
            Action::ColorYellow => &[K::ProgYellow],
            Action::ColorBlue => &[K::ProgBlue],
            Action::Enter => &[K::Enter],
            Action::Digit0 => &[K::Digit0],
            Action::Digit1 => &[K::Digit1],
            Action::Digit2 => &[K::Digit2],
            Action::Digit3 => &[K::Digit3],
            Action::Digit4 => &[K::Digit4],
            Action::Digit5 => &[K::Digit5],
            Action::Digit6 => &[K::Digit6],
            Action::Digit7 => &[K::Digit7],
            Action::Digit8 => &[K::Digit8],
            Action::Digit9 => &[K::Digit9],
        }
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    /// Parses a wire name.  Matching is exact: `"Volume_Up"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_action_name() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>(), Ok(*action));
        }
    }

    #[test]
    fn test_unknown_action_carries_name_and_message() {
        let err = "launch_rockets".parse::<Action>().unwrap_err();
        assert_eq!(err, UnknownAction("launch_rockets".to_string()));
        assert_eq!(err.to_string(), "Command 'launch_rockets' is not supported.");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("VOLUME_UP".parse::<Action>().is_err());
    }

    #[test]
    fn test_every_action_has_at_least_one_key_event() {
        for action in Action::ALL {
            assert!(!action.key_events().is_empty(), "{action} maps to nothing");
        }
    }

    #[test]
    fn test_volume_up_maps_to_volume_up_keycode() {
        assert_eq!(Action::VolumeUp.key_events(), &[AndroidKeyCode::VolumeUp]);
    }

    #[test]
    fn test_digit_actions_match_digit_keycodes() {
        for (i, c) in ('0'..='9').enumerate() {
            let action: Action = format!("digit_{i}").parse().unwrap();
            assert_eq!(
                action.key_events(),
                &[AndroidKeyCode::from_digit(c).unwrap()]
            );
        }
    }

    #[test]
    fn test_all_has_39_distinct_actions() {
        let names: std::collections::HashSet<_> = Action::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(names.len(), 39);
        assert_eq!(Action::ALL.len(), 39);
    }
}
