//! Track styles and the composition root.

use std::str::FromStr;

use crate::effects::Saturator;
use crate::error::Error;
use crate::music::{BassLine, ChordBed, DrumKit, Melody};
use crate::noise::WhiteNoise;
use crate::oscillators::DriftingSine;
use crate::Signal;

/// Noise stream for the vinyl-crackle texture.
const CRACKLE_STREAM: u64 = 3;

/// Which arrangement to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// The full lofi arrangement: chords, melody, bass, drums, crackle.
    Study,
    /// A single slowly detuning sine pad.
    Ambient,
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "study" => Ok(Style::Study),
            "ambient" => Ok(Style::Ambient),
            other => Err(Error::InvalidArgument(format!(
                "unknown style \"{other}\" (expected \"study\" or \"ambient\")"
            ))),
        }
    }
}

/// The summed study arrangement behind a tape-style soft limiter.
///
/// The dry layer sum stays inside the limiter's near-linear region; after
/// saturation every output sample lies strictly inside `(-0.95, 0.95)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudyMix {
    chords: ChordBed,
    melody: Melody,
    bass: BassLine,
    drums: DrumKit,
    crackle: WhiteNoise,
    crackle_level: f64,
    saturator: Saturator,
}

impl StudyMix {
    pub const fn new() -> Self {
        Self {
            chords: ChordBed::new(),
            melody: Melody::new(),
            bass: BassLine::new(),
            drums: DrumKit::new(),
            crackle: WhiteNoise::new(CRACKLE_STREAM),
            crackle_level: 0.004,
            saturator: Saturator::tape(),
        }
    }
}

impl Default for StudyMix {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for StudyMix {
    fn sample(&self, t: f64) -> f64 {
        let dry = self.chords.sample(t)
            + self.melody.sample(t)
            + self.bass.sample(t)
            + self.drums.sample(t)
            + self.crackle.sample(t) * self.crackle_level;
        self.saturator.process(dry)
    }
}

/// The ambient pad: one quiet sine wandering around 220 Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientPad {
    osc: DriftingSine,
    level: f64,
}

impl AmbientPad {
    pub const fn new() -> Self {
        Self {
            osc: DriftingSine::new(220.0, 20.0, 0.1),
            level: 0.1,
        }
    }
}

impl Default for AmbientPad {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for AmbientPad {
    fn sample(&self, t: f64) -> f64 {
        self.osc.sample(t) * self.level
    }
}

/// A fully assembled track, dispatching on [`Style`].
///
/// # Examples
///
/// ```
/// use driftbeat::{Signal, Style, Track};
///
/// let track = Track::new(Style::Study);
/// let sample = track.sample(1.0);
/// assert!((-1.0..=1.0).contains(&sample));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    Study(StudyMix),
    Ambient(AmbientPad),
}

impl Track {
    pub const fn new(style: Style) -> Self {
        match style {
            Style::Study => Track::Study(StudyMix::new()),
            Style::Ambient => Track::Ambient(AmbientPad::new()),
        }
    }
}

impl Signal for Track {
    fn sample(&self, t: f64) -> f64 {
        match self {
            Track::Study(mix) => mix.sample(t),
            Track::Ambient(pad) => pad.sample(t),
        }
    }
}
