mod identity;

pub use identity::{DeviceIdentity, FileDeviceIdentity, StaticDeviceIdentity};
