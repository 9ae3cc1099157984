//! Bass layer: sustained root notes with a walking passing tone.

use super::progression::{self, SLOT_SECONDS};
use crate::envelopes::ExpDecay;
use crate::oscillators::Sine;
use crate::Signal;

/// Offset of the walking note's trigger inside the 4-second bar.
const WALK_OFFSET_SECONDS: f64 = 2.0;

/// One sustained bass note per chord slot, pulsed by a slow tremolo, plus a
/// short walking note at 1.125x the sustained pitch that fires at a fixed
/// offset phase in every bar, simulating a passing tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BassLine {
    level: f64,
    tremolo_base: f64,
    tremolo_depth: f64,
    tremolo_rate: f64,
    walk_ratio: f64,
    walk_window: f64,
    walk_decay: ExpDecay,
    walk_level: f64,
}

impl BassLine {
    pub const fn new() -> Self {
        Self {
            level: 0.06,
            tremolo_base: 0.6,
            tremolo_depth: 0.15,
            tremolo_rate: 1.5,
            walk_ratio: 1.125,
            walk_window: 0.1,
            walk_decay: ExpDecay::new(15.0),
            walk_level: 0.03,
        }
    }
}

impl Default for BassLine {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for BassLine {
    fn sample(&self, t: f64) -> f64 {
        let note = progression::active(t).bass_at(t);

        let tremolo = self.tremolo_base + (self.tremolo_rate * t).sin() * self.tremolo_depth;
        let mut sample = Sine::new(note).sample(t) * self.level * tremolo;

        let walk_phase = (t + WALK_OFFSET_SECONDS).rem_euclid(SLOT_SECONDS);
        if walk_phase < self.walk_window {
            let walking = note * self.walk_ratio;
            sample +=
                Sine::new(walking).sample(t) * self.walk_decay.value(walk_phase) * self.walk_level;
        }

        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_bound() {
        let bass = BassLine::new();
        // Sustained note peaks at level * (base + depth); walking note adds
        // at most its own level.
        let bound = 0.06 * 0.75 + 0.03;
        for i in 0..50_000 {
            let sample = bass.sample(i as f64 / 1000.0);
            assert!(sample.abs() <= bound + 1e-9);
        }
    }

    #[test]
    fn test_walking_note_fires_at_offset_phase() {
        let bass = BassLine::new();
        // At t = 2.0 the walk phase wraps to zero, so the walking note is
        // at full envelope; compare with the sustained-only value.
        let t = 2.0005;
        let note = progression::active(t).bass_at(t);
        let tremolo = 0.6 + (1.5 * t).sin() * 0.15;
        let sustained = Sine::new(note).sample(t) * 0.06 * tremolo;
        let with_walk = bass.sample(t);
        assert!((with_walk - sustained).abs() > 1e-6);
    }

    #[test]
    fn test_no_walking_note_outside_window() {
        let bass = BassLine::new();
        // Walk phase at t = 0.5 is 2.5, well outside the 0.1 s window.
        let t = 0.5;
        let note = progression::active(t).bass_at(t);
        let tremolo = 0.6 + (1.5 * t).sin() * 0.15;
        let sustained = Sine::new(note).sample(t) * 0.06 * tremolo;
        assert!((bass.sample(t) - sustained).abs() < 1e-12);
    }

    #[test]
    fn test_bass_follows_progression_rotation() {
        // Slot 0 bass differs between the first and second progression.
        let first = progression::active(1.0).bass_at(1.0);
        let second = progression::active(65.0).bass_at(65.0);
        assert_eq!(first, 73.42);
        assert_eq!(second, 55.00);
    }
}
