//! Output-stage effects.

/// Soft limiter using tanh saturation.
///
/// The input is driven into a tanh curve and scaled back down, which rounds
/// off peaks instead of hard-clipping them. With the `tape()` settings the
/// output magnitude never reaches 0.95, leaving headroom before
/// quantization no matter how hot the summed mix runs.
///
/// # Examples
///
/// ```
/// use driftbeat::Saturator;
///
/// let saturator = Saturator::tape();
/// assert_eq!(saturator.process(0.0), 0.0);
/// assert!(saturator.process(10.0) < 0.95);
/// assert!(saturator.process(-10.0) > -0.95);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saturator {
    drive: f64,
    level: f64,
}

impl Saturator {
    /// Creates a saturator with explicit drive and output level.
    pub const fn new(drive: f64, level: f64) -> Self {
        Self { drive, level }
    }

    /// The gentle tape-style setting used on the study mix:
    /// `tanh(x * 1.1) * 0.95`.
    pub const fn tape() -> Self {
        Self::new(1.1, 0.95)
    }

    /// Applies the curve to one sample.
    pub fn process(&self, input: f64) -> f64 {
        (input * self.drive).tanh() * self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_passes_through() {
        assert_eq!(Saturator::tape().process(0.0), 0.0);
    }

    #[test]
    fn test_output_bounded_by_level() {
        let saturator = Saturator::tape();
        for i in -1000..=1000 {
            let out = saturator.process(i as f64 * 0.01);
            assert!(out.abs() < 0.95);
        }
    }

    #[test]
    fn test_odd_symmetry() {
        let saturator = Saturator::tape();
        assert!((saturator.process(0.3) + saturator.process(-0.3)).abs() < 1e-12);
    }

    #[test]
    fn test_small_signals_nearly_linear() {
        let saturator = Saturator::tape();
        let out = saturator.process(0.01);
        // tanh(x) ~ x for small x, so gain is close to drive * level.
        assert!((out - 0.01 * 1.1 * 0.95).abs() < 1e-5);
    }

    #[test]
    fn test_monotonic() {
        let saturator = Saturator::tape();
        let mut last = saturator.process(-10.0);
        for i in -99..=100 {
            let current = saturator.process(i as f64 * 0.1);
            assert!(current > last);
            last = current;
        }
    }
}
