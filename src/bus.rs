//! Register transport for the SEN0575.
//!
//! Reads are a single `write_read` of the register offset followed by the full
//! register width. Writes send the offset and payload in one transaction and
//! then wait for the settle delay, so no other register operation can reach the
//! device before it has absorbed the write.

use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::config::Config;
use crate::registers::Register;

/// Largest register width plus the offset byte.
const MAX_FRAME: usize = 5;

/// Owns the I2C bus and delay provider for one sensor.
pub(crate) struct RegisterBus<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    settle_delay_ms: u32,
}

impl<I2C, D> RegisterBus<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D, config: &Config) -> Self {
        Self {
            i2c,
            delay,
            address: config.address(),
            settle_delay_ms: config.settle_delay_ms(),
        }
    }

    /// Reads the whole register.
    ///
    /// `N` must equal the register width. The buffer is either filled
    /// completely or the bus error is returned.
    pub fn read<const N: usize>(&mut self, register: Register) -> Result<[u8; N], I2C::Error> {
        debug_assert_eq!(N, register.width());

        let mut buf = [0u8; N];
        match self.i2c.write_read(self.address, &[register.addr()], &mut buf) {
            Ok(()) => {
                trace!("read register {:#x}, {} bytes", register.addr(), N);
                Ok(buf)
            }
            Err(e) => {
                error!("read error register {:#x}, {} bytes", register.addr(), N);
                Err(e)
            }
        }
    }

    /// Writes the whole register, then waits for the settle delay.
    ///
    /// No delay is applied when the write itself fails.
    pub fn write<const N: usize>(&mut self, register: Register, bytes: [u8; N]) -> Result<(), I2C::Error> {
        debug_assert_eq!(N, register.width());

        let mut frame = [0u8; MAX_FRAME];
        frame[0] = register.addr();
        frame[1..=N].copy_from_slice(&bytes);

        if let Err(e) = self.i2c.write(self.address, &frame[..=N]) {
            error!("write error register {:#x}, {} bytes", register.addr(), N);
            return Err(e);
        }
        trace!("wrote register {:#x}, {} bytes", register.addr(), N);

        self.delay.delay_ms(self.settle_delay_ms);
        Ok(())
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}
