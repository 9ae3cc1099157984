//! The lead melody line.

use crate::envelopes::ExpDecay;
use crate::oscillators::Sine;
use crate::Signal;

/// The six melody pitches: F4, G4, E4, D4, A4, G4.
const PITCHES: [f64; 6] = [349.23, 392.00, 329.63, 293.66, 440.00, 392.00];

/// Primary note ordering.
const PRIMARY: [usize; 8] = [0, 2, 1, 3, 2, 4, 1, 5];
/// Variation ordering: same pitch content, different walk.
const VARIATION: [usize; 8] = [0, 4, 2, 1, 3, 5, 1, 2];

/// Seconds after which the melody alternates between the two orderings.
const VARIATION_PERIOD: f64 = 32.0;

/// Melody that walks a fixed pitch table, two seconds per note.
///
/// Each note decays exponentially and is gated off for the last 10% of its
/// slot, leaving a short rest before the next note. A perfect-fifth
/// overtone rides the note at reduced gain. The note ordering switches to
/// the variation pattern in the second half of every 32-second macro-cycle,
/// which changes the contour without touching the harmony.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Melody {
    note_seconds: f64,
    envelope: ExpDecay,
    gate: f64,
    level: f64,
    overtone_ratio: f64,
    overtone_level: f64,
}

impl Melody {
    pub const fn new() -> Self {
        Self {
            note_seconds: 2.0,
            envelope: ExpDecay::new(1.5),
            gate: 0.9,
            level: 0.04,
            overtone_ratio: 1.5,
            overtone_level: 0.12,
        }
    }

    /// True when the variation ordering is active at `t`.
    pub fn is_variation(t: f64) -> bool {
        t.rem_euclid(VARIATION_PERIOD) >= VARIATION_PERIOD / 2.0
    }

    /// The note sounding at `t`, as `(frequency, progress)` with progress
    /// normalized over the 2-second note slot, or `None` during the rest at
    /// the tail of a slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use driftbeat::music::Melody;
    ///
    /// let melody = Melody::new();
    /// let (frequency, progress) = melody.note_at(0.0).unwrap();
    /// assert_eq!(frequency, 349.23);
    /// assert_eq!(progress, 0.0);
    /// // The last 10% of each slot is a rest.
    /// assert!(melody.note_at(1.9).is_none());
    /// ```
    pub fn note_at(&self, t: f64) -> Option<(f64, f64)> {
        let pattern = if Self::is_variation(t) {
            &VARIATION
        } else {
            &PRIMARY
        };
        let cycle = self.note_seconds * pattern.len() as f64;
        let phase = t.rem_euclid(cycle);
        let step = (phase / self.note_seconds) as usize;
        let progress = phase.rem_euclid(self.note_seconds) / self.note_seconds;
        if progress >= self.gate {
            return None;
        }
        Some((PITCHES[pattern[step] % PITCHES.len()], progress))
    }
}

impl Default for Melody {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for Melody {
    fn sample(&self, t: f64) -> f64 {
        let Some((frequency, progress)) = self.note_at(t) else {
            return 0.0;
        };
        let envelope = self.envelope.value(progress) * self.level;
        let fundamental = Sine::new(frequency).sample(t) * envelope;
        let fifth =
            Sine::new(frequency * self.overtone_ratio).sample(t) * envelope * self.overtone_level;
        fundamental + fifth
    }
}
