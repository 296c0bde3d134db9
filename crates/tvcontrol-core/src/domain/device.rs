//! Device records and `devices` output parsing.
//!
//! A [`Device`] is rebuilt from the bridge tool's text output on every status
//! poll; nothing here is persisted.  The expected output looks like:
//!
//! ```text
//! List of devices attached
//! 192.168.1.30:5555	device
//! emulator-5554	offline
//! R3DN123456	unauthorized
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Serial prefix the bridge uses for local emulator instances.
pub const EMULATOR_PREFIX: &str = "emulator-";

/// Connection state reported for a device.
///
/// States the remote cares about are named; anything else the tool reports
/// (e.g. `no permissions (...)`) is preserved verbatim in [`DeviceState::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceState {
    /// Connected and ready to accept commands.
    Device,
    Offline,
    Unauthorized,
    Authorizing,
    Recovery,
    Sideload,
    Bootloader,
    /// The tool printed a serial with no state column.
    Unknown,
    Other(String),
}

impl DeviceState {
    pub fn as_str(&self) -> &str {
        match self {
            DeviceState::Device => "device",
            DeviceState::Offline => "offline",
            DeviceState::Unauthorized => "unauthorized",
            DeviceState::Authorizing => "authorizing",
            DeviceState::Recovery => "recovery",
            DeviceState::Sideload => "sideload",
            DeviceState::Bootloader => "bootloader",
            DeviceState::Unknown => "unknown",
            DeviceState::Other(s) => s,
        }
    }
}

impl From<&str> for DeviceState {
    fn from(s: &str) -> Self {
        match s {
            "device" => DeviceState::Device,
            "offline" => DeviceState::Offline,
            "unauthorized" => DeviceState::Unauthorized,
            "authorizing" => DeviceState::Authorizing,
            "recovery" => DeviceState::Recovery,
            "sideload" => DeviceState::Sideload,
            "bootloader" => DeviceState::Bootloader,
            "unknown" | "" => DeviceState::Unknown,
            other => DeviceState::Other(other.to_string()),
        }
    }
}

impl From<String> for DeviceState {
    fn from(s: String) -> Self {
        DeviceState::from(s.as_str())
    }
}

impl From<DeviceState> for String {
    fn from(state: DeviceState) -> Self {
        state.as_str().to_string()
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry from the device list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// USB serial number or `address:port` for network devices.
    pub serial: String,
    pub state: DeviceState,
    /// Derived from the serial prefix; never read from the tool.
    pub is_emulator: bool,
}

impl Device {
    pub fn new(serial: impl Into<String>, state: DeviceState) -> Self {
        let serial = serial.into();
        let is_emulator = serial.starts_with(EMULATOR_PREFIX);
        Self {
            serial,
            state,
            is_emulator,
        }
    }

    /// `true` when the device will accept key events.
    pub fn is_online(&self) -> bool {
        self.state == DeviceState::Device
    }
}

/// Parses the stdout of the `devices` command.
///
/// The first line is the tool's header and is always discarded.  Remaining
/// lines are trimmed; blank lines and daemon notices (`* daemon started
/// successfully`) are skipped.  Identifier and state are split on a tab,
/// falling back to any whitespace.  Order is preserved.
pub fn parse_device_list(output: &str) -> Vec<Device> {
    output
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let notice = line.starts_with('*');
            if notice {
                debug!("skipping daemon notice in device list: {line}");
            }
            !notice
        })
        .map(parse_device_line)
        .collect()
}

fn parse_device_line(line: &str) -> Device {
    let (serial, state) = match line.split_once('\t') {
        Some((serial, rest)) => (serial.trim(), rest.trim()),
        None => {
            let mut parts = line.split_whitespace();
            let serial = parts.next().unwrap_or_default();
            (serial, parts.next().unwrap_or_default())
        }
    };
    Device::new(serial, DeviceState::from(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_returns_one_record_per_data_line() {
        // Arrange
        let output = "List of devices attached\n\
                      192.168.1.30:5555\tdevice\n\
                      emulator-5554\toffline\n\
                      R3DN123456\tunauthorized\n";

        // Act
        let devices = parse_device_list(output);

        // Assert
        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0], Device::new("192.168.1.30:5555", DeviceState::Device));
        assert_eq!(devices[1].serial, "emulator-5554");
        assert_eq!(devices[1].state, DeviceState::Offline);
        assert_eq!(devices[2].state, DeviceState::Unauthorized);
    }

    #[test]
    fn test_emulator_prefix_sets_flag() {
        let devices = parse_device_list("header\nemulator-5556\tdevice\nemulatorx\tdevice");
        assert!(devices[0].is_emulator);
        assert!(!devices[1].is_emulator);
    }

    #[test]
    fn test_header_only_yields_empty_list() {
        assert!(parse_device_list("List of devices attached\n\n").is_empty());
        assert!(parse_device_list("").is_empty());
    }

    #[test]
    fn test_missing_state_defaults_to_unknown() {
        let devices = parse_device_list("List of devices attached\nABC123");
        assert_eq!(devices[0].serial, "ABC123");
        assert_eq!(devices[0].state, DeviceState::Unknown);
    }

    #[test]
    fn test_space_separated_line_is_accepted() {
        let devices = parse_device_list("List of devices attached\nABC123   device");
        assert_eq!(devices[0].serial, "ABC123");
        assert!(devices[0].is_online());
    }

    #[test]
    fn test_daemon_notices_are_skipped() {
        let output = "List of devices attached\n\
                      * daemon not running; starting now at tcp:5037\n\
                      * daemon started successfully\n\
                      10.0.0.2:5555\tdevice";
        let devices = parse_device_list(output);
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].serial, "10.0.0.2:5555");
    }

    #[test]
    fn test_unrecognised_state_is_preserved() {
        let devices = parse_device_list("header\nXYZ\tno permissions");
        assert_eq!(devices[0].state, DeviceState::Other("no permissions".into()));
        assert_eq!(devices[0].state.to_string(), "no permissions");
    }

    #[test]
    fn test_windows_line_endings() {
        let devices = parse_device_list("List of devices attached\r\nABC\tdevice\r\n");
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].state, DeviceState::Device);
    }

    #[test]
    fn test_device_serializes_with_camel_case_fields() {
        let device = Device::new("emulator-5554", DeviceState::Device);
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"serial": "emulator-5554", "state": "device", "isEmulator": true})
        );
    }
}
