use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::bus::RegisterBus;
use crate::config::Config;
use crate::decode::{
    DeviceIdentity, FirmwareVersion, decode_firmware_version, decode_identity, decode_rainfall,
    decode_raw_count, decode_working_time, encode_base_rainfall,
};
use crate::error::Error;
use crate::poll::{PollReport, Request, Sample};
use crate::registers::Register;

/// Lifecycle state of the driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// [`Sen0575::initialize`] has not been called yet.
    Uninitialized,
    /// The device was identified as a SEN0575.
    Ready,
    /// The last initialization failed. The device must be initialized again before polling.
    Failed,
}

/// Driver for the DFRobot SEN0575 rainfall sensor.
///
/// Every method takes `&mut self`, so a poll cycle, including the window
/// write and the read that depends on it, always runs to completion before
/// any other register operation can start.
pub struct Sen0575<I2C, D> {
    bus: RegisterBus<I2C, D>,
    config: Config,
    state: State,
    identity: Option<DeviceIdentity>,
    firmware: Option<FirmwareVersion>,
}

impl<I2C, D> Sen0575<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Creates a new driver using the default address and settle delay.
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C bus the sensor is attached to.
    /// * `delay` - A delay provider implementing the `DelayNs` trait, used to let writes settle.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, Config::default())
    }

    /// Creates a new driver with an explicit [`Config`].
    pub fn with_config(i2c: I2C, delay: D, config: Config) -> Self {
        Sen0575 {
            bus: RegisterBus::new(i2c, delay, &config),
            config,
            state: State::Uninitialized,
            identity: None,
            firmware: None,
        }
    }

    /// Verifies the device identity and reads its firmware version.
    ///
    /// May be called again after a failure to bring the driver back into service.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(version))` if the device was identified and reported its firmware version.
    /// * `Ok(None)` if the device was identified but the version read failed.
    /// * `Err(Error::IdentityMismatch)` if another device answered at the address.
    /// * `Err(Error::I2c)` if the identity registers could not be read.
    ///
    /// On error the driver is marked [`State::Failed`] and refuses to poll.
    pub fn initialize(&mut self) -> Result<Option<FirmwareVersion>, Error<I2C::Error>> {
        info!("Setting up SEN0575 at {:#x}", self.config.address());

        self.identity = None;
        self.firmware = None;

        if let Err(e) = self.identify() {
            error!("Failed to initialize sensor");
            self.state = State::Failed;
            return Err(e);
        }
        self.state = State::Ready;

        // the device is already identified; a missing version only costs diagnostics
        self.firmware = self.read_firmware_version().ok();
        match self.firmware {
            Some(version) => info!("Setup complete (firmware {})", version),
            None => warn!("Setup complete, firmware version unavailable"),
        }

        Ok(self.firmware)
    }

    /// Reads the identity word and checks it against the SEN0575 constants.
    fn identify(&mut self) -> Result<DeviceIdentity, Error<I2C::Error>> {
        let identity = decode_identity(self.bus.read(Register::ProductId)?);
        debug!(
            "vendor_id {:#x}, product_id {:#x}",
            identity.vendor_id,
            identity.product_id
        );
        self.identity = Some(identity);

        if identity.is_sen0575() {
            Ok(identity)
        } else {
            Err(Error::IdentityMismatch(identity))
        }
    }

    /// Reads the firmware version.
    pub fn read_firmware_version(&mut self) -> Result<FirmwareVersion, Error<I2C::Error>> {
        let version = decode_firmware_version(self.bus.read(Register::Version)?);
        debug!("firmware version: {}", version);
        Ok(version)
    }

    /// Reads the cumulative rainfall in millimetres.
    pub fn read_cumulative_rainfall(&mut self) -> Result<f32, Error<I2C::Error>> {
        let rainfall = decode_rainfall(self.bus.read(Register::CumulativeRainfall)?);
        debug!("rainfall: {} mm", rainfall);
        Ok(rainfall)
    }

    /// Reads the rainfall over the trailing `hours` hours.
    ///
    /// The window is written to the device first and the settle delay elapses
    /// before the rainfall register is read. If either step fails the value
    /// cannot be determined this cycle and [`Sample::Unavailable`] is returned;
    /// this never produces an error.
    pub fn read_windowed_rainfall(&mut self, hours: u8) -> Sample<f32> {
        if self.bus.write(Register::RainHourWindow, [hours]).is_err() {
            warn!("could not select a {} h rainfall window", hours);
            return Sample::Unavailable;
        }

        match self.bus.read(Register::TimeRainfall) {
            Ok(bytes) => {
                let rainfall = decode_rainfall(bytes);
                debug!("rainfall ({} h): {} mm", hours, rainfall);
                Sample::Value(rainfall)
            }
            Err(_) => Sample::Unavailable,
        }
    }

    /// Reads the raw bucket count.
    pub fn read_raw_count(&mut self) -> Result<u32, Error<I2C::Error>> {
        let raw_count = decode_raw_count(self.bus.read(Register::RawData)?);
        debug!("raw data: {}", raw_count);
        Ok(raw_count)
    }

    /// Reads the sensor working time in hours.
    pub fn read_working_time(&mut self) -> Result<f32, Error<I2C::Error>> {
        let working_time = decode_working_time(self.bus.read(Register::SystemTime)?);
        debug!("working time: {} h", working_time);
        Ok(working_time)
    }

    /// Re-baselines the cumulative rainfall counter.
    ///
    /// `value` is in millimetres and is rounded to 1/10000 mm.
    ///
    /// # Errors
    ///
    /// * [`Error::NotInitialized`] if the device has not been identified.
    /// * [`Error::InvalidBaseRainfall`] if `value` does not fit the 16-bit register.
    /// * [`Error::I2c`] if the write failed.
    pub fn set_base_rainfall(&mut self, value: f32) -> Result<(), Error<I2C::Error>> {
        if self.state != State::Ready {
            return Err(Error::NotInitialized);
        }
        let bytes = encode_base_rainfall(value).ok_or(Error::InvalidBaseRainfall)?;

        self.bus.write(Register::BaseRainfall, bytes)?;
        debug!("base rainfall set to {} mm", value);
        Ok(())
    }

    /// Collects every requested measurement.
    ///
    /// A measurement that fails is reported as [`Sample::Unavailable`] and does
    /// not prevent the remaining ones from being read. Measurements that were
    /// not requested are left as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] without touching the bus if the device
    /// has not been successfully initialized.
    pub fn poll(&mut self, request: &Request) -> Result<PollReport, Error<I2C::Error>> {
        if self.state != State::Ready {
            return Err(Error::NotInitialized);
        }

        let mut report = PollReport::default();

        if request.cumulative_rainfall {
            report.cumulative_rainfall = Some(self.read_cumulative_rainfall().into());
        }
        if let Some(hours) = request.windowed_rainfall {
            report.windowed_rainfall = Some(self.read_windowed_rainfall(hours));
        }
        if request.raw_count {
            report.raw_count = Some(self.read_raw_count().into());
        }
        if request.working_time {
            report.working_time = Some(self.read_working_time().into());
        }

        Ok(report)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Identity read during the last initialization, even if it did not match.
    pub fn identity(&self) -> Option<DeviceIdentity> {
        self.identity
    }

    /// Firmware version read during the last successful initialization.
    pub fn firmware_version(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    /// Logs the driver configuration and status.
    pub fn log_config(&self) {
        info!("DFRobot SEN0575 I2C:");
        info!("  Address: {:#x}", self.config.address());
        info!("  Settle delay: {} ms", self.config.settle_delay_ms());
        if self.state == State::Failed {
            error!("Communication with DFRobot SEN0575 failed!");
        }
        if let Some(version) = self.firmware {
            info!("  Firmware: {}", version);
        }
    }

    /// Releases the I2C bus and delay provider.
    pub fn release(self) -> (I2C, D) {
        self.bus.release()
    }
}
