/// Correction applied on top of the amplifier's nominal transfer function.
///
/// `celsius = nominal * gain + offset`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Additive correction in °C, set by one-point calibration.
    pub(crate) offset: f32,
    /// Multiplicative correction. Fixed at `1.0`; there is no gain calibration yet.
    pub(crate) gain: f32,
}

impl Calibration {
    pub const IDENTITY: Self = Self {
        offset: 0.0,
        gain: 1.0,
    };

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub(crate) fn apply(&self, celsius: f32) -> f32 {
        celsius * self.gain + self.offset
    }

    /// Sets the offset so that a reading of `measured` becomes `actual`.
    pub(crate) fn set_one_point(&mut self, actual: f32, measured: f32) {
        self.offset = actual - measured;
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_value_alone() {
        assert_eq!(Calibration::default().apply(42.5), 42.5);
    }

    #[test]
    fn applies_gain_then_offset() {
        let calibration = Calibration {
            offset: 2.0,
            gain: 1.5,
        };
        assert_eq!(calibration.apply(10.0), 17.0);
    }

    #[test]
    fn one_point_replaces_previous_offset() {
        let mut calibration = Calibration::default();
        calibration.set_one_point(100.0, 97.0);
        assert_eq!(calibration.offset(), 3.0);
        calibration.set_one_point(0.0, 1.5);
        assert_eq!(calibration.offset(), -1.5);
        assert_eq!(calibration.gain(), 1.0);
    }
}
