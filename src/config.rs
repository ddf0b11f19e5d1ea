use crate::registers::DEFAULT_ADDRESS;

/// Settle delay applied after every register write, in milliseconds.
///
/// The device gives no acknowledgement once a write has been processed, so the
/// driver waits this long before touching the bus again.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 100;

/// Suggested interval between two polls, in milliseconds.
///
/// Polling is scheduled by the host; the driver never uses this value itself.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 15_000;

/// Suggested window for the windowed rainfall measurement, in hours.
pub const DEFAULT_RAIN_WINDOW_HOURS: u8 = 1;

/// Driver configuration, fixed for the lifetime of a driver instance.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    address: u8,
    settle_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl Config {
    /// Sets the 7-bit I2C address of the sensor.
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Sets the delay applied after each register write.
    pub fn with_settle_delay_ms(mut self, settle_delay_ms: u32) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn settle_delay_ms(&self) -> u32 {
        self.settle_delay_ms
    }
}
