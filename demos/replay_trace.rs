//! Demo of the stroke-trace format: build a trace in code, round-trip it
//! through JSON, replay it, and print the exported data URL prefix.
//!
//! cargo run --example replay_trace

use inkpad::surface::encode;
use inkpad::{PadConfig, StrokeTrace, TraceEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let trace = StrokeTrace {
        width: 400.0,
        events: vec![
            TraceEvent::Down { x: 50.0, y: 150.0 },
            TraceEvent::Move { x: 150.0, y: 80.0 },
            TraceEvent::Move { x: 250.0, y: 180.0 },
            TraceEvent::Up,
        ],
    };

    let json = trace.to_json()?;
    println!("trace:\n{json}\n");

    let mut pad = inkpad::new_pad(PadConfig::default())?;
    StrokeTrace::from_json(&json)?.replay(&mut pad);

    let snapshot = pad.export()?;
    let url = encode::to_data_url(&snapshot);
    println!("exported {} bytes; data URL starts {}", snapshot.png_data.len(), &url[..48]);
    Ok(())
}
