use crate::calibration::Calibration;
use crate::config::{clamp_sampling, Config, DEFAULT_SAMPLING};
use crate::convert::{self, Unit};
use crate::filter::ExponentialFilter;
use core::marker::PhantomData;
use embedded_hal::adc::{Channel, OneShot};

/// Readings within this distance of either ADC rail (V) are treated as a fault.
pub const FAULT_MARGIN: f32 = 0.1;

/// An AD849x thermocouple amplifier connected to an ADC input.
///
/// Every read blocks until all configured samples have been taken from the ADC.
#[derive(Debug)]
pub struct Ad849x<Pin, Word = u16> {
    pin: Pin,
    config: Config,
    calibration: Calibration,
    filter: ExponentialFilter,
    _word: PhantomData<Word>,
}

impl<Pin, Word> Ad849x<Pin, Word> {
    /// Returns a driver for the amplifier connected to `pin`, using the default
    /// offset voltage (1.25 V) and sensitivity (5 mV/°C).
    ///
    /// `resolution` is the largest count the ADC returns (eg. `4095` for 12 bits).
    ///
    /// # Examples
    ///
    /// ```
    /// use ad849x::Ad849x;
    /// # use embedded_hal_mock::adc::{Mock, MockChan0, Transaction};
    /// #
    /// # let expectations: [Transaction<u16>; 1] = [Transaction::read(0, 1750)];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let mut thermocouple = Ad849x::new(pin, 5.0, 5000);
    /// thermocouple.set_sampling(1);
    ///
    /// // 1.75 V is 100 °C above the 1.25 V offset at 5 mV/°C
    /// let celsius = thermocouple.read_celsius(&mut adc).unwrap();
    /// assert!((celsius - 100.0).abs() < 0.01);
    /// ```
    pub fn new<ADC>(pin: Pin, reference_voltage: f32, resolution: u16) -> Self
    where
        Pin: Channel<ADC>,
    {
        Self::with_config(pin, Config::new(reference_voltage, resolution))
    }

    /// Returns a driver using a fully specified [`Config`].
    pub fn with_config<ADC>(pin: Pin, config: Config) -> Self
    where
        Pin: Channel<ADC>,
    {
        debug_assert!(
            config.reference_voltage > 0.0,
            "The reference voltage must be positive"
        );
        debug_assert!(config.resolution > 0, "The resolution must be positive");

        debug!(
            "ad849x: vref={} resolution={}",
            config.reference_voltage, config.resolution
        );

        Self {
            pin,
            config,
            calibration: Calibration::IDENTITY,
            filter: ExponentialFilter::new(),
            _word: PhantomData,
        }
    }

    /// Destroys the driver and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.pin
    }

    /// Clears calibration, filter state and sampling back to their initial values.
    ///
    /// The ADC parameters, offset voltage and sensitivity are kept.
    pub fn reset(&mut self) {
        self.calibration = Calibration::IDENTITY;
        self.config.sampling = DEFAULT_SAMPLING;
        self.filter.reset();
        debug!("ad849x: reset");
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn set_reference_voltage(&mut self, reference_voltage: f32) {
        self.config.reference_voltage = reference_voltage;
    }

    pub fn reference_voltage(&self) -> f32 {
        self.config.reference_voltage
    }

    /// Sets the largest count the ADC returns. This is not the bit width.
    pub fn set_resolution(&mut self, resolution: u16) {
        self.config.resolution = resolution;
    }

    pub fn resolution(&self) -> u16 {
        self.config.resolution
    }

    /// Sets the amplifier output voltage at 0 °C.
    pub fn set_offset_voltage(&mut self, offset_voltage: f32) {
        self.config.offset_voltage = offset_voltage;
    }

    pub fn offset_voltage(&self) -> f32 {
        self.config.offset_voltage
    }

    /// Sets the amplifier gain in V/°C.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.config.sensitivity = sensitivity;
    }

    pub fn sensitivity(&self) -> f32 {
        self.config.sensitivity
    }

    /// Sets how many ADC samples are averaged per read. `0` becomes `1` and anything
    /// above `200` becomes `200`.
    pub fn set_sampling(&mut self, samples: u8) {
        self.config.sampling = clamp_sampling(samples);
    }

    pub fn sampling(&self) -> u8 {
        self.config.sampling
    }

    /// Converts an ADC count to volts.
    pub fn raw_to_voltage(&self, raw: u32) -> f32 {
        convert::raw_to_voltage(raw, self.config.reference_voltage, self.config.resolution)
    }

    /// Converts an amplifier output voltage to °C, including calibration.
    pub fn voltage_to_celsius(&self, voltage: f32) -> f32 {
        let celsius = convert::voltage_to_celsius(
            voltage,
            self.config.offset_voltage,
            self.config.sensitivity,
        );

        self.calibration.apply(celsius)
    }

    /// Returns the average of [`sampling`](Ad849x::sampling) consecutive ADC reads.
    /// The remainder of the division is discarded.
    pub fn read_raw<Adc, ADC>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<u32, <Adc as OneShot<ADC, Word, Pin>>::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let samples = self.config.sampling;
        let mut sum: u64 = 0;

        for _ in 0..samples {
            let value: u32 = nb::block!(adc.read(&mut self.pin))?.into();
            sum += u64::from(value);
        }

        let raw = (sum / u64::from(samples)) as u32;
        trace!("ad849x: raw={} over {} samples", raw, samples);

        Ok(raw)
    }

    pub fn read_voltage<Adc, ADC>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<f32, <Adc as OneShot<ADC, Word, Pin>>::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let raw = self.read_raw(adc)?;
        Ok(self.raw_to_voltage(raw))
    }

    pub fn read_celsius<Adc, ADC>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<f32, <Adc as OneShot<ADC, Word, Pin>>::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let voltage = self.read_voltage(adc)?;
        Ok(self.voltage_to_celsius(voltage))
    }

    pub fn read_fahrenheit<Adc, ADC>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<f32, <Adc as OneShot<ADC, Word, Pin>>::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        self.read_celsius(adc).map(convert::celsius_to_fahrenheit)
    }

    pub fn read_kelvin<Adc, ADC>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<f32, <Adc as OneShot<ADC, Word, Pin>>::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        self.read_celsius(adc).map(convert::celsius_to_kelvin)
    }

    /// Reads the temperature in `unit`.
    pub fn read_temperature<Adc, ADC>(
        &mut self,
        adc: &mut Adc,
        unit: Unit,
    ) -> Result<f32, <Adc as OneShot<ADC, Word, Pin>>::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        self.read_celsius(adc).map(|celsius| unit.convert(celsius))
    }

    /// One-point calibration: takes a reading and adjusts the offset so that the
    /// same conditions read as `actual_celsius`.
    ///
    /// Put the thermocouple at a known, stable temperature (eg. an ice bath) before
    /// calling this. Only the offset is corrected, not the slope.
    pub fn calibrate<Adc, ADC>(
        &mut self,
        adc: &mut Adc,
        actual_celsius: f32,
    ) -> Result<(), <Adc as OneShot<ADC, Word, Pin>>::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let measured = self.read_celsius(adc)?;
        self.calibration.set_one_point(actual_celsius, measured);

        debug!(
            "ad849x: calibrated, measured={} actual={} offset={}",
            measured,
            actual_celsius,
            self.calibration.offset()
        );

        Ok(())
    }

    /// Takes a reading and feeds it through an exponential moving average with
    /// smoothing factor `alpha`, returning the filtered temperature in °C.
    ///
    /// The first call returns the reading unchanged. `alpha` is not checked: `1.0`
    /// disables smoothing and values near `0.0` barely move. See
    /// [`DEFAULT_FILTER_ALPHA`](crate::DEFAULT_FILTER_ALPHA).
    pub fn read_filtered_celsius<Adc, ADC>(
        &mut self,
        adc: &mut Adc,
        alpha: f32,
    ) -> Result<f32, <Adc as OneShot<ADC, Word, Pin>>::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let current = self.read_celsius(adc)?;
        Ok(self.filter.update(current, alpha))
    }

    /// Returns the last filtered temperature without reading the ADC, or `None` if
    /// [`read_filtered_celsius`](Ad849x::read_filtered_celsius) has not been called.
    pub fn filtered_celsius(&self) -> Option<f32> {
        self.filter.value()
    }

    pub fn reset_filter(&mut self) {
        self.filter.reset();
    }

    /// Returns `true` if the amplifier output is more than 0.1 V away from both ADC
    /// rails.
    ///
    /// An open or shorted thermocouple usually pins the output to a rail, but this
    /// can't tell the two apart and won't catch reversed polarity.
    pub fn is_connected<Adc, ADC>(
        &mut self,
        adc: &mut Adc,
    ) -> Result<bool, <Adc as OneShot<ADC, Word, Pin>>::Error>
    where
        Word: Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let voltage = self.read_voltage(adc)?;
        let connected =
            voltage > FAULT_MARGIN && voltage < self.config.reference_voltage - FAULT_MARGIN;

        if !connected {
            warn!("ad849x: output {} V is near a rail", voltage);
        }

        Ok(connected)
    }
}
