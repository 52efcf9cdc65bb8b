/// Amplifier output at 0 °C on common AD8495 breakouts (V).
pub const DEFAULT_OFFSET_VOLTAGE: f32 = 1.25;

/// Typical AD849x sensitivity: 5 mV/°C.
pub const DEFAULT_SENSITIVITY: f32 = 0.005;

pub const DEFAULT_SAMPLING: u8 = 10;
pub const MIN_SAMPLING: u8 = 1;
/// Upper bound on averaged samples, which keeps a single read from blocking for long.
pub const MAX_SAMPLING: u8 = 200;

/// ADC and amplifier parameters used to turn a raw count into a temperature.
///
/// The offset voltage and sensitivity depend on the exact IC and breakout. Check the
/// module's datasheet.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub(crate) reference_voltage: f32,
    pub(crate) resolution: u16,
    pub(crate) offset_voltage: f32,
    pub(crate) sensitivity: f32,
    pub(crate) sampling: u8,
}

impl Config {
    /// Returns a config with the default amplifier constants.
    ///
    /// # Arguments
    ///
    /// - `reference_voltage`: The voltage corresponding to `resolution` (V)
    /// - `resolution`: The largest count the ADC can return (eg. `4095` for a 12-bit
    ///   ADC, not `12` or `4096`). See [`max_count`](crate::max_count).
    ///
    /// # Examples
    ///
    /// ```
    /// use ad849x::Config;
    ///
    /// let config = Config::new(3.3, 4095)
    ///     .with_offset_voltage(0.0)
    ///     .with_sampling(32);
    ///
    /// assert_eq!(config.sampling(), 32);
    /// ```
    pub const fn new(reference_voltage: f32, resolution: u16) -> Self {
        Self {
            reference_voltage,
            resolution,
            offset_voltage: DEFAULT_OFFSET_VOLTAGE,
            sensitivity: DEFAULT_SENSITIVITY,
            sampling: DEFAULT_SAMPLING,
        }
    }

    pub const fn with_offset_voltage(mut self, offset_voltage: f32) -> Self {
        self.offset_voltage = offset_voltage;
        self
    }

    pub const fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Sets the number of samples averaged per read, clamped to `1..=200`.
    pub const fn with_sampling(mut self, samples: u8) -> Self {
        self.sampling = clamp_sampling(samples);
        self
    }

    pub fn reference_voltage(&self) -> f32 {
        self.reference_voltage
    }

    pub fn resolution(&self) -> u16 {
        self.resolution
    }

    pub fn offset_voltage(&self) -> f32 {
        self.offset_voltage
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn sampling(&self) -> u8 {
        self.sampling
    }
}

pub(crate) const fn clamp_sampling(samples: u8) -> u8 {
    if samples < MIN_SAMPLING {
        MIN_SAMPLING
    } else if samples > MAX_SAMPLING {
        MAX_SAMPLING
    } else {
        samples
    }
}
