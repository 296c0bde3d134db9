//! Domain entities with no I/O: device records and text escaping.

pub mod device;
pub mod text;

pub use device::{parse_device_list, Device, DeviceState, EMULATOR_PREFIX};
pub use text::escape_input_text;
