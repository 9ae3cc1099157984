//! Driftbeat - procedurally generated lofi background music.
//!
//! This library synthesizes a fixed multi-layered arrangement (chords,
//! melody, bass, percussion, vinyl texture) as a pure function of time and
//! renders it to an uncompressed 16-bit PCM WAV file. Every render of the
//! same spec and style is byte-identical.

pub mod effects;
pub mod envelopes;
pub mod error;
pub mod music;
pub mod noise;
pub mod oscillators;
pub mod signal;
pub mod track;
pub mod wav;

// Re-export commonly used types at the crate root
pub use effects::Saturator;
pub use envelopes::ExpDecay;
pub use error::{Error, Result};
pub use noise::WhiteNoise;
pub use oscillators::{DriftingSine, Sine};
pub use signal::Signal;
pub use track::{AmbientPad, Style, StudyMix, Track};
pub use wav::{render_to_file, write_wav, AudioSpec};
