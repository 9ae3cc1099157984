//! Musical layers of the study arrangement.
//!
//! Each layer is an independent `Signal`; the track module sums them and
//! applies the output saturation.

mod bass;
mod melody;
mod percussion;
pub mod progression;

pub use bass::BassLine;
pub use melody::Melody;
pub use percussion::{DrumKit, HiHat, Kick, Snare};
pub use progression::{Chord, ChordBed, Progression};
