//! SEN0575 Rainfall Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DFRobot SEN0575 I2C
//! rainfall sensor, built on top of the [`embedded-hal`] traits.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Device identification, firmware version, cumulative and windowed rainfall,
//!   raw bucket count and working time
//! - Per-measurement failure reporting, so one bad read never aborts a poll
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`I2c`] for register access
//! - [`DelayNs`] for the settle delay after register writes
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs through `defmt`
//! - `log`: Logs through the `log` facade (mutually exclusive with `defmt`)
//!
//! # Example
//!
//! ```no_run
//! # fn run<I2C: embedded_hal::i2c::I2c, D: embedded_hal::delay::DelayNs>(i2c: I2C, delay: D) {
//! use sen0575_sensor::{Measurement, Request, Sen0575};
//!
//! let mut sensor = Sen0575::new(i2c, delay);
//! sensor.initialize().ok();
//!
//! let request = Request::all(1);
//! if let Ok(report) = sensor.poll(&request) {
//!     for measurement in Measurement::ALL {
//!         let _sample = report.get(measurement);
//!     }
//! }
//! # }
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`I2c`]: embedded_hal::i2c::I2c
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

mod bus;
pub mod config;
pub mod decode;
pub mod error;
pub mod poll;
pub mod registers;
pub mod sen0575;

pub use config::{Config, DEFAULT_POLL_INTERVAL_MS, DEFAULT_RAIN_WINDOW_HOURS, DEFAULT_SETTLE_DELAY_MS};
pub use decode::{DeviceIdentity, FirmwareVersion};
pub use error::Error;
pub use poll::{Measurement, PollReport, Request, Sample};
pub use registers::{DEFAULT_ADDRESS, Register};
pub use sen0575::{Sen0575, State};
