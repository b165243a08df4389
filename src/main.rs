//! `inkpad` binary: replay a recorded stroke trace and write the exported
//! signature image.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use inkpad::surface::encode;
use inkpad::{Error, PadConfig, SignaturePad, StrokeTrace};

#[derive(Parser, Debug)]
#[command(
    name = "inkpad",
    version,
    about = "Replay a recorded stroke trace and export the signature as PNG"
)]
struct Args {
    /// Path to a JSON stroke trace
    trace: PathBuf,

    /// Output path
    #[arg(short, long, default_value = "signature.png")]
    out: PathBuf,

    /// Write a data:image/png;base64 URL instead of raw PNG bytes
    #[arg(long)]
    data_url: bool,

    /// Stroke width in backing-buffer pixels
    #[arg(long, default_value_t = 4.0)]
    stroke_width: f64,

    /// Backing-buffer scale factor (device pixel ratio)
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let json = fs::read_to_string(&args.trace)
        .with_context(|| format!("reading trace {}", args.trace.display()))?;
    let trace = StrokeTrace::from_json(&json)?;

    let config = PadConfig {
        stroke_width: args.stroke_width,
        scale: args.scale,
        ..Default::default()
    };
    let mut pad = SignaturePad::new(config)?;
    trace.replay(&mut pad);
    log::info!(
        "replayed {} events at container width {}",
        trace.events.len(),
        trace.width
    );

    let snapshot = match pad.export() {
        Ok(snapshot) => snapshot,
        Err(e @ Error::EmptySignature) => bail!("{e}: the trace committed no marks"),
        Err(e) => return Err(e.into()),
    };

    if args.data_url {
        fs::write(&args.out, encode::to_data_url(&snapshot))
            .with_context(|| format!("writing {}", args.out.display()))?;
    } else {
        fs::write(&args.out, &snapshot.png_data)
            .with_context(|| format!("writing {}", args.out.display()))?;
    }
    log::info!(
        "wrote {} ({}x{})",
        args.out.display(),
        snapshot.width,
        snapshot.height
    );
    Ok(())
}
