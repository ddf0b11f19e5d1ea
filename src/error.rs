use core::fmt;

use crate::decode::DeviceIdentity;

/// Possible errors from the SEN0575 driver.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The identity registers do not belong to a SEN0575.
    IdentityMismatch(DeviceIdentity),
    /// An I2C transaction did not complete.
    I2c(E),
    /// The driver has not been initialized, or its last initialization failed.
    NotInitialized,
    /// The base rainfall is negative, not finite, or above 6.5535 mm.
    InvalidBaseRainfall,
}

impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IdentityMismatch(id) => write!(
                f,
                "Unexpected device identity (vendor {:#06x}, product {:#07x})",
                id.vendor_id, id.product_id
            ),
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::NotInitialized => write!(f, "Sensor not initialized"),
            Error::InvalidBaseRainfall => write!(f, "Base rainfall out of range (0 to 6.5535 mm)"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::IdentityMismatch(id) => defmt::write!(f, "Unexpected device identity {}", id),
            Error::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            Error::NotInitialized => defmt::write!(f, "Sensor not initialized"),
            Error::InvalidBaseRainfall => defmt::write!(f, "Base rainfall out of range"),
        }
    }
}
