//! Minimal demo: drive a pad with synthetic pointer events and write the
//! exported PNG next to the working directory.
//!
//! cargo run --example draw_signature

use inkpad::{ContainerBounds, PadConfig, PointerEvent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut pad = inkpad::new_pad(PadConfig::default())?;
    pad.activate(ContainerBounds::new(0.0, 0.0, 500.0));

    // A looping scribble, the kind a finger produces
    pad.pointer_down(&PointerEvent::mouse(60.0, 200.0));
    for i in 1..=120 {
        let t = f64::from(i) * 0.1;
        let x = 60.0 + t * 30.0;
        let y = 200.0 - (t * 2.0).sin() * 60.0;
        pad.pointer_move(&PointerEvent::mouse(x, y));
    }
    pad.pointer_up();

    let snapshot = pad.export()?;
    std::fs::write("signature-demo.png", &snapshot.png_data)?;
    println!(
        "wrote signature-demo.png ({}x{}, {} bytes)",
        snapshot.width,
        snapshot.height,
        snapshot.png_data.len()
    );
    Ok(())
}
