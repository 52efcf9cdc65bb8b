/// Offset between degrees Celsius and Kelvin.
pub const KELVIN_OFFSET: f32 = 273.15;

/// The temperature unit to read in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl Unit {
    /// Converts degrees Celsius into this unit.
    pub fn convert(&self, celsius: f32) -> f32 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => celsius_to_fahrenheit(celsius),
            Unit::Kelvin => celsius_to_kelvin(celsius),
        }
    }
}

pub fn raw_to_voltage(raw: u32, reference_voltage: f32, resolution: u16) -> f32 {
    (raw as f32 * reference_voltage) / resolution as f32
}

pub fn voltage_to_celsius(voltage: f32, offset_voltage: f32, sensitivity: f32) -> f32 {
    (voltage - offset_voltage) / sensitivity
}

pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn celsius_to_kelvin(celsius: f32) -> f32 {
    celsius + KELVIN_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "{} is not close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn raw_to_voltage_is_linear() {
        for raw in [0, 1, 512, 2048, 4000, 4095] {
            assert_close(
                raw_to_voltage(raw, 3.3, 4095),
                raw as f32 * 3.3 / 4095.0,
            );
        }
        assert_close(raw_to_voltage(4095, 3.3, 4095), 3.3);
        assert_eq!(raw_to_voltage(0, 3.3, 4095), 0.0);
    }

    #[test]
    fn raw_to_voltage_with_zero_resolution_is_not_finite() {
        assert!(!raw_to_voltage(100, 3.3, 0).is_finite());
    }

    #[test]
    fn voltage_to_celsius_follows_sensitivity_sign() {
        let lower = voltage_to_celsius(1.0, 1.25, 0.005);
        let higher = voltage_to_celsius(1.5, 1.25, 0.005);
        assert!(higher > lower);

        let lower = voltage_to_celsius(1.0, 1.25, -0.005);
        let higher = voltage_to_celsius(1.5, 1.25, -0.005);
        assert!(higher < lower);
    }

    #[test]
    fn celsius_round_trips_through_voltage() {
        for celsius in [-200.0, -40.0, 0.0, 25.0, 100.0, 350.0] {
            let voltage = celsius * 0.005 + 1.25;
            assert_close(voltage_to_celsius(voltage, 1.25, 0.005), celsius);
        }
    }

    #[test]
    fn fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn kelvin() {
        assert_close(celsius_to_kelvin(0.0), 273.15);
        assert_close(celsius_to_kelvin(-273.15), 0.0);
    }

    #[test]
    fn unit_convert() {
        assert_eq!(Unit::Celsius.convert(25.0), 25.0);
        assert_eq!(Unit::Fahrenheit.convert(25.0), 77.0);
        assert_close(Unit::Kelvin.convert(25.0), 298.15);
    }
}
