//! Action and key-event tables.
//!
//! The canonical representation on the wire is the Android `KEYCODE_*`
//! identifier.  Named actions are translated to ordered key-event sequences
//! here, before anything reaches the bridge executable, so invalid input is
//! rejected without spawning a process.

pub mod action;
pub mod android;

pub use action::{Action, UnknownAction};
pub use android::AndroidKeyCode;

use thiserror::Error;

/// Reasons a channel number cannot be turned into a key sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("Channel number is required.")]
    Empty,
    #[error("Channel number must be numeric.")]
    NonNumeric,
}

/// Decomposes a channel number into per-digit key codes.
///
/// Surrounding whitespace is ignored.  When `confirm` is set the sequence is
/// terminated with [`AndroidKeyCode::Enter`] so the tuner commits the number
/// immediately instead of waiting for its own entry timeout.
///
/// # Errors
///
/// [`ChannelError::Empty`] for blank input, [`ChannelError::NonNumeric`] if
/// any character is not an ASCII digit.
///
/// # Example
///
/// ```rust
/// use tvcontrol_core::keymap::{channel_key_sequence, AndroidKeyCode};
///
/// let keys = channel_key_sequence("42", true).unwrap();
/// assert_eq!(
///     keys,
///     vec![AndroidKeyCode::Digit4, AndroidKeyCode::Digit2, AndroidKeyCode::Enter]
/// );
/// ```
pub fn channel_key_sequence(text: &str, confirm: bool) -> Result<Vec<AndroidKeyCode>, ChannelError> {
    let digits = text.trim();
    if digits.is_empty() {
        return Err(ChannelError::Empty);
    }

    let mut keys = digits
        .chars()
        .map(AndroidKeyCode::from_digit)
        .collect::<Option<Vec<_>>>()
        .ok_or(ChannelError::NonNumeric)?;

    if confirm {
        keys.push(AndroidKeyCode::Enter);
    }
    Ok(keys)
}
