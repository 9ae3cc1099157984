//! Deterministic white noise.
//!
//! Noise here is a pure function of time, not a stateful generator: each
//! sample instant is mapped to an index on a fixed grid, the index seeds a
//! fresh PCG32, and one uniform value is drawn. Two renders therefore
//! produce identical noise, and samples can be evaluated in any order.

use crate::Signal;
use rand::Rng;
use rand_pcg::Pcg32;

/// Default grid the time axis is quantized on before seeding, in Hz.
///
/// The grid only decides how often the noise value changes; it does not have
/// to match the output sample rate.
pub const DEFAULT_GRID_HZ: f64 = 44100.0;

/// Multiplier that scrambles the sample index before it becomes a PCG seed,
/// so adjacent indices land on unrelated generator states.
const SEED_SCRAMBLE: u64 = 0x9E37_79B9_7F4A_7C15;

/// A white noise source, uniform in `[-0.5, 0.5)`.
///
/// The centered unit-width draw means a layer gain of `g` yields a peak
/// amplitude of `g / 2`. Independent layers must use distinct `stream`
/// constants: at equal `t` they will then draw unrelated values.
///
/// # Examples
///
/// ```
/// use driftbeat::{Signal, WhiteNoise};
///
/// let noise = WhiteNoise::new(7);
/// // Pure function of t: re-sampling an instant gives the same value.
/// assert_eq!(noise.sample(0.25), noise.sample(0.25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhiteNoise {
    grid_hz: f64,
    stream: u64,
}

impl WhiteNoise {
    /// Creates a noise source on the default 44.1 kHz grid.
    pub const fn new(stream: u64) -> Self {
        Self {
            grid_hz: DEFAULT_GRID_HZ,
            stream,
        }
    }

    /// Creates a noise source with a custom grid rate.
    pub const fn with_grid(grid_hz: f64, stream: u64) -> Self {
        Self { grid_hz, stream }
    }
}

impl Signal for WhiteNoise {
    fn sample(&self, t: f64) -> f64 {
        let index = (t * self.grid_hz).round() as u64;
        let mut rng = Pcg32::new(index.wrapping_mul(SEED_SCRAMBLE), self.stream);
        rng.gen_range(-0.5..0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let noise = WhiteNoise::new(1);
        for i in 0..1000 {
            let t = i as f64 / 44100.0;
            assert_eq!(noise.sample(t), noise.sample(t));
        }
    }

    #[test]
    fn test_sample_range() {
        let noise = WhiteNoise::new(2);
        for i in 0..10_000 {
            let sample = noise.sample(i as f64 / 44100.0);
            assert!((-0.5..0.5).contains(&sample));
        }
    }

    #[test]
    fn test_streams_are_independent() {
        let a = WhiteNoise::new(1);
        let b = WhiteNoise::new(2);
        let t = 0.5;
        assert_ne!(a.sample(t), b.sample(t));
    }

    #[test]
    fn test_varies_over_time() {
        let noise = WhiteNoise::new(3);
        let first = noise.sample(0.0);
        let all_same = (1..100).all(|i| noise.sample(i as f64 / 44100.0) == first);
        assert!(!all_same, "noise should vary across sample indices");
    }

    #[test]
    fn test_roughly_zero_mean() {
        let noise = WhiteNoise::new(4);
        let n = 100_000;
        let sum: f64 = (0..n).map(|i| noise.sample(i as f64 / 44100.0)).sum();
        assert!((sum / n as f64).abs() < 0.01);
    }

    #[test]
    fn test_custom_grid_holds_values() {
        // A 1 Hz grid keeps the same draw for a whole second.
        let noise = WhiteNoise::with_grid(1.0, 5);
        assert_eq!(noise.sample(1.1), noise.sample(0.9));
    }
}
