//! # tvcontrol-core
//!
//! Shared, I/O-free building blocks for TVControl: the remote-control action
//! vocabulary, the Android key-event codes those actions expand to, and the
//! parsing of the bridge tool's device list.
//!
//! This crate has no dependency on async runtimes, processes, or HTTP.
//!
//! # Architecture overview
//!
//! TVControl drives an Android TV through an external device-bridge
//! executable (`adb`).  The server turns HTTP requests into invocations of
//! that tool; this crate decides *what* to send:
//!
//! - **`keymap`** – The closed [`Action`] vocabulary, its exhaustive mapping
//!   to ordered [`AndroidKeyCode`] sequences, and channel-number
//!   decomposition.
//!
//! - **`domain`** – [`Device`] records reconstructed from `devices` output,
//!   and escaping for `input text`.

pub mod domain;
pub mod keymap;

pub use domain::device::{parse_device_list, Device, DeviceState};
pub use keymap::{channel_key_sequence, Action, AndroidKeyCode, ChannelError, UnknownAction};
