//! Register map of the SEN0575 rainfall sensor.
//!
//! Every register is accessed as a whole at a fixed width; the device defines
//! no partial-register access. All multi-byte fields are little-endian.

/// Register offsets of the SEN0575.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Product ID. A 4-byte read here also covers the vendor ID.
    ProductId = 0x00,
    /// Vendor ID (upper half of the identity word).
    VendorId = 0x02,
    /// Firmware version, one nibble per field.
    Version = 0x0A,
    /// Rainfall over the window selected by [`Register::RainHourWindow`].
    TimeRainfall = 0x0C,
    /// Cumulative rainfall since the last reset, 1/10000 mm.
    CumulativeRainfall = 0x10,
    /// Raw bucket tip count.
    RawData = 0x14,
    /// Working time in minutes.
    SystemTime = 0x18,
    /// Number of trailing hours aggregated by [`Register::TimeRainfall`].
    RainHourWindow = 0x26,
    /// Base value of the cumulative rainfall counter, 1/10000 mm.
    BaseRainfall = 0x28,
}

impl Register {
    /// Register offset on the wire.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Number of bytes every read or write of this register transfers.
    pub const fn width(self) -> usize {
        match self {
            Register::ProductId
            | Register::TimeRainfall
            | Register::CumulativeRainfall
            | Register::RawData => 4,
            Register::VendorId
            | Register::Version
            | Register::SystemTime
            | Register::BaseRainfall => 2,
            Register::RainHourWindow => 1,
        }
    }
}

/// Default 7-bit I2C address of the SEN0575.
pub const DEFAULT_ADDRESS: u8 = 0x1D;

/// Vendor ID reported by a genuine SEN0575.
pub const EXPECTED_VENDOR_ID: u16 = 0x3343;

/// Product ID reported by a genuine SEN0575.
pub const EXPECTED_PRODUCT_ID: u32 = 0x100C0;

/// Raw rainfall counts per millimetre.
pub const RAINFALL_SCALE: f32 = 10_000.0;

/// Working time counts (minutes) per hour.
pub const WORKING_TIME_SCALE: f32 = 60.0;
