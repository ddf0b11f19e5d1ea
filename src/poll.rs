//! Types exchanged with the host on every poll.

/// Outcome of one measurement in one poll cycle.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample<T> {
    /// The measurement was read and decoded.
    Value(T),
    /// The measurement could not be obtained this cycle. The next poll may succeed.
    Unavailable,
}

impl<T> Sample<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Sample::Value(v) => Some(v),
            Sample::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Sample::Value(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Sample<U> {
        match self {
            Sample::Value(v) => Sample::Value(f(v)),
            Sample::Unavailable => Sample::Unavailable,
        }
    }
}

impl<T, E> From<Result<T, E>> for Sample<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Sample::Value(v),
            Err(_) => Sample::Unavailable,
        }
    }
}

/// The measurements the sensor can publish.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Measurement {
    CumulativeRainfall,
    WindowedRainfall,
    RawCount,
    WorkingTime,
}

impl Measurement {
    pub const ALL: [Measurement; 4] = [
        Measurement::CumulativeRainfall,
        Measurement::WindowedRainfall,
        Measurement::RawCount,
        Measurement::WorkingTime,
    ];

    /// Unit of measurement a host should publish the value with.
    pub const fn unit(self) -> &'static str {
        match self {
            Measurement::CumulativeRainfall => "mm",
            Measurement::WindowedRainfall => "mm/h",
            Measurement::RawCount => "count",
            Measurement::WorkingTime => "h",
        }
    }

    /// Number of decimals worth displaying.
    pub const fn accuracy_decimals(self) -> u8 {
        match self {
            Measurement::CumulativeRainfall | Measurement::WindowedRainfall => 2,
            Measurement::RawCount | Measurement::WorkingTime => 0,
        }
    }
}

/// Selects which measurements a poll collects.
///
/// # Example
///
/// ```
/// use sen0575_sensor::Request;
///
/// let request = Request::new().with_cumulative_rainfall().with_windowed_rainfall(1);
/// assert!(!request.is_empty());
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Request {
    pub cumulative_rainfall: bool,
    /// Window in hours, if windowed rainfall is requested.
    pub windowed_rainfall: Option<u8>,
    pub raw_count: bool,
    pub working_time: bool,
}

impl Request {
    /// A request for nothing.
    pub const fn new() -> Self {
        Self {
            cumulative_rainfall: false,
            windowed_rainfall: None,
            raw_count: false,
            working_time: false,
        }
    }

    /// A request for every measurement, using `hours` as the rainfall window.
    pub const fn all(hours: u8) -> Self {
        Self {
            cumulative_rainfall: true,
            windowed_rainfall: Some(hours),
            raw_count: true,
            working_time: true,
        }
    }

    pub fn with_cumulative_rainfall(mut self) -> Self {
        self.cumulative_rainfall = true;
        self
    }

    pub fn with_windowed_rainfall(mut self, hours: u8) -> Self {
        self.windowed_rainfall = Some(hours);
        self
    }

    pub fn with_raw_count(mut self) -> Self {
        self.raw_count = true;
        self
    }

    pub fn with_working_time(mut self) -> Self {
        self.working_time = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        !self.cumulative_rainfall
            && self.windowed_rainfall.is_none()
            && !self.raw_count
            && !self.working_time
    }
}

/// Result of one poll cycle. Measurements that were not requested are `None`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PollReport {
    /// Cumulative rainfall in millimetres.
    pub cumulative_rainfall: Option<Sample<f32>>,
    /// Rainfall over the requested window in millimetres.
    pub windowed_rainfall: Option<Sample<f32>>,
    pub raw_count: Option<Sample<u32>>,
    /// Working time in hours.
    pub working_time: Option<Sample<f32>>,
}

impl PollReport {
    /// Returns a measurement as a float, the way most hosts publish sensor states.
    pub fn get(&self, measurement: Measurement) -> Option<Sample<f32>> {
        match measurement {
            Measurement::CumulativeRainfall => self.cumulative_rainfall,
            Measurement::WindowedRainfall => self.windowed_rainfall,
            Measurement::RawCount => self.raw_count.map(|s| s.map(|count| count as f32)),
            Measurement::WorkingTime => self.working_time,
        }
    }
}
