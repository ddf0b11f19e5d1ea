//! Conversion between raw register bytes and physical quantities.
//!
//! Everything here is a total function over fixed-width buffers and never
//! touches the bus.

use core::fmt;

use crate::registers::{EXPECTED_PRODUCT_ID, EXPECTED_VENDOR_ID, RAINFALL_SCALE, WORKING_TIME_SCALE};

/// Vendor and product identifiers packed into the PRODUCT_ID register word.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceIdentity {
    /// 14-bit vendor ID.
    pub vendor_id: u16,
    /// Product ID, up to 18 bits wide.
    pub product_id: u32,
}

impl DeviceIdentity {
    /// Returns `true` if this identity belongs to a SEN0575.
    pub fn is_sen0575(&self) -> bool {
        self.vendor_id == EXPECTED_VENDOR_ID && self.product_id == EXPECTED_PRODUCT_ID
    }
}

/// Firmware version reported by the VERSION register.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub build: u8,
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.patch, self.build)
    }
}

/// Unpacks the 4-byte identity word read at PRODUCT_ID.
///
/// The two top bits of the last byte extend the product ID; the remaining six
/// are the high bits of the vendor ID.
pub fn decode_identity(bytes: [u8; 4]) -> DeviceIdentity {
    let [b0, b1, b2, b3] = bytes;
    let product_id = u32::from(b0) | u32::from(b1) << 8 | u32::from(b3 & 0xC0) << 10;
    let vendor_id = u16::from(b2) | u16::from(b3 & 0x3F) << 8;

    DeviceIdentity {
        vendor_id,
        product_id,
    }
}

/// Splits the little-endian VERSION word into its four nibbles.
pub fn decode_firmware_version(bytes: [u8; 2]) -> FirmwareVersion {
    let version = u16::from_le_bytes(bytes);

    FirmwareVersion {
        major: (version >> 12) as u8,
        minor: (version >> 8 & 0x0F) as u8,
        patch: (version >> 4 & 0x0F) as u8,
        build: (version & 0x0F) as u8,
    }
}

/// Converts a rainfall register value to millimetres.
pub fn decode_rainfall(bytes: [u8; 4]) -> f32 {
    u32::from_le_bytes(bytes) as f32 / RAINFALL_SCALE
}

/// Returns the raw bucket count as-is.
pub fn decode_raw_count(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

/// Converts the working time register (minutes) to hours.
pub fn decode_working_time(bytes: [u8; 2]) -> f32 {
    u16::from_le_bytes(bytes) as f32 / WORKING_TIME_SCALE
}

/// Encodes a base rainfall in millimetres for the BASE_RAINFALL register.
///
/// The value is rounded to the nearest 1/10000 mm. Returns `None` if it is not
/// finite, negative, or does not fit in 16 bits (above 6.5535 mm).
pub fn encode_base_rainfall(value: f32) -> Option<[u8; 2]> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    // no f32::round in core; the value is non-negative here
    let scaled = value * RAINFALL_SCALE + 0.5;
    if scaled >= 65_536.0 {
        return None;
    }

    Some((scaled as u16).to_le_bytes())
}
