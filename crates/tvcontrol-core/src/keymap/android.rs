//! Android key-event codes understood by `input keyevent`.
//!
//! The bridge tool forwards these identifiers verbatim to the device's input
//! service, so the string form (`KEYCODE_*`) is the canonical representation
//! on the wire.  Only the codes a TV remote actually needs are modelled; the
//! free-form single key-event path on the server still accepts any string.
//!
//! Reference: `android.view.KeyEvent` constant names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A key-event code sent to the device with `shell input keyevent <CODE>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum AndroidKeyCode {
    // Power
    Power,
    Wakeup,
    Sleep,

    // System navigation
    Home,
    Back,
    Menu,
    Info,
    Guide,
    Settings,
    TvInput,

    // Volume
    VolumeUp,
    VolumeDown,
    VolumeMute,

    // Channels
    ChannelUp,
    ChannelDown,

    // Media transport
    MediaPlayPause,
    MediaStop,
    MediaRewind,
    MediaFastForward,

    // Directional pad
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    DpadCenter,

    // Programmable colour keys
    ProgRed,
    ProgGreen,
    ProgYellow,
    ProgBlue,

    Enter,

    // Digits
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

/// Digit codes indexed by their numeric value.
const DIGITS: [AndroidKeyCode; 10] = [
    AndroidKeyCode::Digit0,
    AndroidKeyCode::Digit1,
    AndroidKeyCode::Digit2,
    AndroidKeyCode::Digit3,
    AndroidKeyCode::Digit4,
    AndroidKeyCode::Digit5,
    AndroidKeyCode::Digit6,
    AndroidKeyCode::Digit7,
    AndroidKeyCode::Digit8,
    AndroidKeyCode::Digit9,
];

impl AndroidKeyCode {
    /// Returns the `KEYCODE_*` identifier passed to `input keyevent`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Power => "KEYCODE_POWER",
            Self::Wakeup => "KEYCODE_WAKEUP",
            Self::Sleep => "KEYCODE_SLEEP",
            Self::Home => "KEYCODE_HOME",
            Self::Back => "KEYCODE_BACK",
            Self::Menu => "KEYCODE_MENU",
            Self::Info => "KEYCODE_INFO",
            Self::Guide => "KEYCODE_GUIDE",
            Self::Settings => "KEYCODE_SETTINGS",
            Self::TvInput => "KEYCODE_TV_INPUT",
            Self::VolumeUp => "KEYCODE_VOLUME_UP",
            Self::VolumeDown => "KEYCODE_VOLUME_DOWN",
            Self::VolumeMute => "KEYCODE_VOLUME_MUTE",
            Self::ChannelUp => "KEYCODE_CHANNEL_UP",
            Self::ChannelDown => "KEYCODE_CHANNEL_DOWN",
            Self::MediaPlayPause => "KEYCODE_MEDIA_PLAY_PAUSE",
            Self::MediaStop => "KEYCODE_MEDIA_STOP",
            Self::MediaRewind => "KEYCODE_MEDIA_REWIND",
            Self::MediaFastForward => "KEYCODE_MEDIA_FAST_FORWARD",
            Self::DpadUp => "KEYCODE_DPAD_UP",
            Self::DpadDown => "KEYCODE_DPAD_DOWN",
            Self::DpadLeft => "KEYCODE_DPAD_LEFT",
            Self::DpadRight => "KEYCODE_DPAD_RIGHT",
            Self::DpadCenter => "KEYCODE_DPAD_CENTER",
            Self::ProgRed => "KEYCODE_PROG_RED",
            Self::ProgGreen => "KEYCODE_PROG_GREEN",
            Self::ProgYellow => "KEYCODE_PROG_YELLOW",
            Self::ProgBlue => "KEYCODE_PROG_BLUE",
            Self::Enter => "KEYCODE_ENTER",
            Self::Digit0 => "KEYCODE_0",
            Self::Digit1 => "KEYCODE_1",
            Self::Digit2 => "KEYCODE_2",
            Self::Digit3 => "KEYCODE_3",
            Self::Digit4 => "KEYCODE_4",
            Self::Digit5 => "KEYCODE_5",
            Self::Digit6 => "KEYCODE_6",
            Self::Digit7 => "KEYCODE_7",
            Self::Digit8 => "KEYCODE_8",
            Self::Digit9 => "KEYCODE_9",
        }
    }

    /// Maps an ASCII digit character to its numeric key code.
    ///
    /// Returns `None` for anything other than `'0'..='9'`; non-ASCII digits
    /// (e.g. Arabic-Indic numerals) are deliberately not accepted.
    pub fn from_digit(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            Some(DIGITS[(c as u8 - b'0') as usize])
        } else {
            None
        }
    }

    /// Looks up a code by its `KEYCODE_*` identifier (case-insensitive).
    pub fn from_identifier(ident: &str) -> Option<Self> {
        ALL_CODES
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(ident))
    }
}

/// Every modelled key code, in declaration order.
pub const ALL_CODES: &[AndroidKeyCode] = &[
    AndroidKeyCode::Power,
    AndroidKeyCode::Wakeup,
    AndroidKeyCode::Sleep,
    AndroidKeyCode::Home,
    AndroidKeyCode::Back,
    AndroidKeyCode::Menu,
    AndroidKeyCode::Info,
    AndroidKeyCode::Guide,
    AndroidKeyCode::Settings,
    AndroidKeyCode::TvInput,
    AndroidKeyCode::VolumeUp,
    AndroidKeyCode::VolumeDown,
    AndroidKeyCode::VolumeMute,
    AndroidKeyCode::ChannelUp,
    AndroidKeyCode::ChannelDown,
    AndroidKeyCode::MediaPlayPause,
    AndroidKeyCode::MediaStop,
    AndroidKeyCode::MediaRewind,
    AndroidKeyCode::MediaFastForward,
    AndroidKeyCode::DpadUp,
    AndroidKeyCode::DpadDown,
    AndroidKeyCode::DpadLeft,
    AndroidKeyCode::DpadRight,
    AndroidKeyCode::DpadCenter,
    AndroidKeyCode::ProgRed,
    AndroidKeyCode::ProgGreen,
    AndroidKeyCode::ProgYellow,
    AndroidKeyCode::ProgBlue,
    AndroidKeyCode::Enter,
    AndroidKeyCode::Digit0,
    AndroidKeyCode::Digit1,
    AndroidKeyCode::Digit2,
    AndroidKeyCode::Digit3,
    AndroidKeyCode::Digit4,
    AndroidKeyCode::Digit5,
    AndroidKeyCode::Digit6,
    AndroidKeyCode::Digit7,
    AndroidKeyCode::Digit8,
    AndroidKeyCode::Digit9,
];

impl AsRef<str> for AndroidKeyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AndroidKeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AndroidKeyCode> for &'static str {
    fn from(code: AndroidKeyCode) -> Self {
        code.as_str()
    }
}

impl TryFrom<String> for AndroidKeyCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_identifier(&value).ok_or_else(|| format!("unknown key code: {value}"))
    }
}
