/// A range of ray parameters.
///
/// Traversal expresses its cutoffs as intervals: nearest-hit queries search
/// `(minimum_t, +inf)` and shadow queries search `(epsilon, distance)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Interval from `min` to positive infinity.
    pub fn from_min(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Same interval with the upper bound pulled in to `max`.
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }

    /// The unit interval, used for color channels.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(1.0, 10.0);

        // Exclusive bounds - the near-plane cutoff itself is rejected
        assert!(!interval.surrounds(1.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(1.0 + 1e-9));
        assert!(interval.surrounds(9.9));
        assert!(!interval.surrounds(-0.1));
    }

    #[test]
    fn test_interval_clamp() {
        assert_eq!(Interval::UNIT.clamp(-5.0), 0.0);
        assert_eq!(Interval::UNIT.clamp(0.5), 0.5);
        assert_eq!(Interval::UNIT.clamp(1.5), 1.0);
    }

    #[test]
    fn test_interval_from_min_and_with_max() {
        let open = Interval::from_min(1e-6);
        assert!(open.surrounds(1e12));
        assert!(!open.surrounds(0.0));

        let shortened = open.with_max(2.0);
        assert_eq!(shortened.min, 1e-6);
        assert!(!shortened.surrounds(3.0));
    }
}
