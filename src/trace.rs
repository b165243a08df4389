//! Recorded stroke traces.
//!
//! A trace is a JSON record of one capture session: the container width at
//! activation time followed by the pointer events in delivery order. Traces
//! make capture behavior reproducible without a host: the test suite and the
//! `inkpad` binary both drive pads from them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::input::{ContainerBounds, PointerEvent};
use crate::pad::SignaturePad;

/// One recorded pointer or layout event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    TouchDown { points: Vec<(f64, f64)> },
    TouchMove { points: Vec<(f64, f64)> },
    TouchEnd,
    Resize { width: f64 },
}

/// A full recorded capture session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeTrace {
    /// Container width at activation time.
    pub width: f64,
    pub events: Vec<TraceEvent>,
}

impl StrokeTrace {
    pub fn from_json(json: &str) -> Result<Self> {
        let trace: StrokeTrace =
            serde_json::from_str(json).map_err(|e| Error::TraceError(e.to_string()))?;
        if !(trace.width > 0.0) {
            return Err(Error::TraceError(format!(
                "container width must be positive, got {}",
                trace.width
            )));
        }
        Ok(trace)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::TraceError(e.to_string()))
    }

    /// Activate the pad at the recorded width and replay every event in
    /// order. Replay is deterministic: the same trace always produces the
    /// same pixels.
    pub fn replay(&self, pad: &mut SignaturePad) {
        pad.activate(ContainerBounds::new(0.0, 0.0, self.width));
        for event in &self.events {
            match event {
                TraceEvent::Down { x, y } => {
                    pad.pointer_down(&PointerEvent::mouse(*x, *y));
                }
                TraceEvent::Move { x, y } => {
                    pad.pointer_move(&PointerEvent::mouse(*x, *y));
                }
                TraceEvent::Up => {
                    pad.pointer_up();
                }
                TraceEvent::Leave => {
                    pad.pointer_leave();
                }
                TraceEvent::TouchDown { points } => {
                    pad.pointer_down(&PointerEvent::touch(points.clone()));
                }
                TraceEvent::TouchMove { points } => {
                    pad.pointer_move(&PointerEvent::touch(points.clone()));
                }
                TraceEvent::TouchEnd => {
                    pad.pointer_up();
                }
                TraceEvent::Resize { width } => {
                    pad.handle_resize(ContainerBounds::new(0.0, 0.0, *width));
                }
            }
        }
    }
}
