/// Smoothing factor used when the caller has no better value.
pub const DEFAULT_FILTER_ALPHA: f32 = 0.1;

/// First-order exponential moving average.
///
/// The filter starts empty and is seeded by the first value it sees, so there is no
/// startup transient from an arbitrary initial value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExponentialFilter {
    state: Option<f32>,
}

impl ExponentialFilter {
    pub const fn new() -> Self {
        Self { state: None }
    }

    /// Feeds `value` into the filter and returns the new output.
    ///
    /// `alpha` is expected in `(0, 1]` and is not checked. `1.0` disables smoothing.
    pub fn update(&mut self, value: f32, alpha: f32) -> f32 {
        let next = match self.state {
            None => {
                debug!("filter seeded with {}", value);
                value
            }
            Some(previous) => alpha * value + (1.0 - alpha) * previous,
        };

        self.state = Some(next);
        next
    }

    pub fn value(&self) -> Option<f32> {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_seeds_filter() {
        let mut filter = ExponentialFilter::new();
        assert_eq!(filter.value(), None);
        assert_eq!(filter.update(25.0, DEFAULT_FILTER_ALPHA), 25.0);
        assert_eq!(filter.value(), Some(25.0));
    }

    #[test]
    fn smooths_towards_new_values() {
        let mut filter = ExponentialFilter::new();
        filter.update(20.0, 0.25);
        let expected = 0.25 * 30.0 + 0.75 * 20.0;
        assert_eq!(filter.update(30.0, 0.25), expected);
        assert_eq!(filter.update(30.0, 0.25), 0.25 * 30.0 + 0.75 * expected);
    }

    #[test]
    fn alpha_one_follows_input() {
        let mut filter = ExponentialFilter::new();
        for value in [10.0, -5.0, 80.0, 12.5] {
            assert_eq!(filter.update(value, 1.0), value);
        }
    }

    #[test]
    fn reset_clears_state() {
        let mut filter = ExponentialFilter::new();
        filter.update(10.0, 0.5);
        filter.reset();
        assert_eq!(filter.value(), None);
        assert_eq!(filter.update(40.0, 0.5), 40.0);
    }
}
