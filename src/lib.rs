//! A driver for AD849x (AD8494, AD8495 and similar) analog thermocouple amplifiers.
//!
//! The amplifier output is read with any [`embedded_hal::adc::OneShot`] ADC, averaged,
//! converted to a voltage and then to a temperature using the amplifier's offset
//! voltage and sensitivity. One-point calibration, exponential filtering and a basic
//! connection check are also provided.
//!
//! Enable the `defmt` feature to log through [`defmt`](https://docs.rs/defmt).

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

mod ad849x;
mod calibration;
mod config;
mod convert;
mod filter;

pub use crate::ad849x::{Ad849x, FAULT_MARGIN};
pub use calibration::Calibration;
pub use config::{
    Config, DEFAULT_OFFSET_VOLTAGE, DEFAULT_SAMPLING, DEFAULT_SENSITIVITY, MAX_SAMPLING,
    MIN_SAMPLING,
};
pub use convert::{Unit, KELVIN_OFFSET};
pub use filter::{ExponentialFilter, DEFAULT_FILTER_ALPHA};

/// Returns the largest count an ADC with `precision` bits can return, for use as the
/// `resolution` of an [`Ad849x`].
///
/// Precisions of 16 bits or more saturate at `u16::MAX`.
///
/// # Examples
///
/// ```
/// use ad849x::max_count;
///
/// assert_eq!(max_count(10), 1023);
/// assert_eq!(max_count(12), 4095);
/// ```
pub fn max_count(precision: u32) -> u16 {
    let max_adc_value = 1u32.checked_shl(precision).unwrap_or(u32::MAX) - 1;

    max_adc_value.min(u32::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_count_from_precision() {
        assert_eq!(max_count(0), 0);
        assert_eq!(max_count(8), 255);
        assert_eq!(max_count(10), 1023);
        assert_eq!(max_count(12), 4095);
        assert_eq!(max_count(16), u16::MAX);
        assert_eq!(max_count(24), u16::MAX);
        assert_eq!(max_count(40), u16::MAX);
    }
}
