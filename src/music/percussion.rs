//! Drum layer: kick, snare, and swung hi-hats on a four-second beat cycle.
//!
//! Every drum is a gate: a trigger phase against `t mod 4`, a decay rate,
//! and a timbre (tone, noise, or both). Outside its gate window a drum
//! contributes exactly zero.

use crate::envelopes::ExpDecay;
use crate::noise::WhiteNoise;
use crate::oscillators::Sine;
use crate::Signal;

/// Length of the beat cycle all trigger phases are measured against.
pub const BEAT_SECONDS: f64 = 4.0;

/// Noise stream for the snare body.
const SNARE_STREAM: u64 = 1;
/// Noise stream for the hi-hats.
const HAT_STREAM: u64 = 2;

const KICK_PHASES: [f64; 2] = [0.0, 2.0];
const HAT_PHASES: [f64; 6] = [0.0, 0.75, 1.5, 2.25, 3.0, 3.75];

/// Time since the most recent trigger at `phase`, folded into the beat
/// cycle. Values below a drum's gate window mean the drum is sounding.
fn gate_phase(t: f64, phase: f64) -> f64 {
    (t.rem_euclid(BEAT_SECONDS) + (BEAT_SECONDS - phase)).rem_euclid(BEAT_SECONDS)
}

/// Low sine thump on beats one and three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kick {
    tone: f64,
    window: f64,
    decay: ExpDecay,
    level: f64,
}

impl Kick {
    pub const fn new() -> Self {
        Self {
            tone: 55.0,
            window: 0.08,
            decay: ExpDecay::new(20.0),
            level: 0.08,
        }
    }
}

impl Default for Kick {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for Kick {
    fn sample(&self, t: f64) -> f64 {
        let mut sample = 0.0;
        for &phase in &KICK_PHASES {
            let x = gate_phase(t, phase);
            if x < self.window {
                sample += Sine::new(self.tone).sample(t) * self.decay.value(x) * self.level;
            }
        }
        sample
    }
}

/// Noise burst plus a 200 Hz tone at the back-beat phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snare {
    tone: f64,
    phase: f64,
    window: f64,
    noise: WhiteNoise,
    noise_decay: ExpDecay,
    tone_decay: ExpDecay,
    level: f64,
}

impl Snare {
    pub const fn new() -> Self {
        Self {
            tone: 200.0,
            phase: 2.0,
            window: 0.06,
            noise: WhiteNoise::new(SNARE_STREAM),
            noise_decay: ExpDecay::new(25.0),
            tone_decay: ExpDecay::new(30.0),
            level: 0.04,
        }
    }
}

impl Default for Snare {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for Snare {
    fn sample(&self, t: f64) -> f64 {
        let x = gate_phase(t, self.phase);
        if x >= self.window {
            return 0.0;
        }
        let noise = self.noise.sample(t) * self.noise_decay.value(x);
        let tone = Sine::new(self.tone).sample(t) * self.tone_decay.value(x);
        (noise + tone) * self.level
    }
}

/// Six swung noise ticks per bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiHat {
    window: f64,
    noise: WhiteNoise,
    decay: ExpDecay,
    level: f64,
}

impl HiHat {
    pub const fn new() -> Self {
        Self {
            window: 0.02,
            noise: WhiteNoise::new(HAT_STREAM),
            decay: ExpDecay::new(60.0),
            level: 0.015,
        }
    }
}

impl Default for HiHat {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for HiHat {
    fn sample(&self, t: f64) -> f64 {
        let mut sample = 0.0;
        for &phase in &HAT_PHASES {
            let x = gate_phase(t, phase);
            if x < self.window {
                sample += self.noise.sample(t) * self.decay.value(x) * self.level;
            }
        }
        sample
    }
}

/// The full rhythm section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrumKit {
    kick: Kick,
    snare: Snare,
    hat: HiHat,
}

impl DrumKit {
    pub const fn new() -> Self {
        Self {
            kick: Kick::new(),
            snare: Snare::new(),
            hat: HiHat::new(),
        }
    }
}

impl Default for DrumKit {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for DrumKit {
    fn sample(&self, t: f64) -> f64 {
        self.kick.sample(t) + self.snare.sample(t) + self.hat.sample(t)
    }
}
