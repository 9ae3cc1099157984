//! Command-line renderer.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use driftbeat::{render_to_file, AudioSpec, Style, Track};

/// Renders procedurally generated background music to a WAV file.
#[derive(Parser)]
#[command(name = "driftbeat", version, about)]
struct Cli {
    /// Output WAV path; missing parent directories are created
    output: PathBuf,

    /// Track length in seconds
    #[arg(short, long, default_value_t = 180.0)]
    duration: f64,

    /// Track style ("study" or "ambient")
    #[arg(short, long, default_value = "study")]
    style: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let style: Style = cli.style.parse()?;
    let spec = AudioSpec::stereo_cd(cli.duration);
    render_to_file(&cli.output, &spec, &Track::new(style))
        .with_context(|| format!("failed to render {}", cli.output.display()))?;

    println!("Generated {}", cli.output.display());
    Ok(())
}
