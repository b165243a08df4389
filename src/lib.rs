//! Inkpad
//!
//! A headless signature-capture surface for Rust: a raster target, a
//! pointer-tracking state machine, and gated PNG export, with no display or
//! windowing dependency. Hosts deliver pointer events and an open/close
//! signal; the pad owns everything else.
//!
//! # Design
//!
//! - **Headless core**: drawing happens on an owned RGBA8 buffer; any UI
//!   toolkit (or none) can sit on top.
//! - **Gated export**: a drawing can only be exported once a mark has been
//!   committed; empty saves fail with a user-reportable error.
//! - **Safe degradation**: when the platform cannot provide a surface the
//!   pad keeps accepting events and does nothing, rather than crashing.
//!
//! # Example
//!
//! ```
//! use inkpad::{ContainerBounds, PadConfig, PointerEvent};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pad = inkpad::new_pad(PadConfig::default())?;
//! pad.activate(ContainerBounds::new(0.0, 0.0, 400.0));
//!
//! pad.pointer_down(&PointerEvent::mouse(50.0, 50.0));
//! pad.pointer_move(&PointerEvent::mouse(80.0, 50.0));
//! pad.pointer_up();
//!
//! let snapshot = pad.export()?;
//! assert!(!snapshot.png_data.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod input;
pub mod pad;
pub mod platform;
pub mod session;
pub mod surface;
pub mod trace;

pub use input::{
    ClientPoint, ContainerBounds, InputDisposition, PointerEvent, SurfaceGeometry, SurfacePoint,
};
pub use pad::{SessionState, SignaturePad};
pub use platform::{HeapSurfaceProvider, SurfaceProvider, UnavailableSurfaceProvider};
pub use session::{Notice, NoticeLevel, PadSession, SaveOutcome};
pub use surface::raster::Color;
pub use surface::{RasterSurface, Snapshot};
pub use trace::{StrokeTrace, TraceEvent};

/// Configuration for a signature pad
///
/// The defaults match the conventional capture dialog: a 300-unit-tall
/// strip as wide as its container, a 4-unit black stroke with round caps,
/// and a 1:1 backing buffer.
///
/// # Examples
///
/// ```
/// let cfg = inkpad::PadConfig::default();
/// assert_eq!(cfg.height, 300);
/// assert_eq!(cfg.scale, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct PadConfig {
    /// Fixed logical height of the surface, in display units
    pub height: u32,
    /// Backing-buffer pixels per display unit (the device pixel ratio)
    pub scale: f64,
    /// Stroke width for segments, in backing-buffer pixels
    pub stroke_width: f64,
    /// Radius of the start-of-stroke dot committed at pointer-down
    pub dot_radius: f64,
    /// Stroke and dot color (RGBA, straight alpha)
    pub stroke_color: Color,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            height: 300,
            scale: 1.0,
            stroke_width: 4.0,
            dot_radius: 2.5,
            stroke_color: [0, 0, 0, 255],
        }
    }
}

impl PadConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.height == 0 {
            return Err(Error::ConfigError("height must be positive".into()));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(Error::ConfigError(format!(
                "scale must be a positive finite number, got {}",
                self.scale
            )));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(Error::ConfigError(format!(
                "stroke width must be a positive finite number, got {}",
                self.stroke_width
            )));
        }
        if !(self.dot_radius.is_finite() && self.dot_radius > 0.0) {
            return Err(Error::ConfigError(format!(
                "dot radius must be a positive finite number, got {}",
                self.dot_radius
            )));
        }
        Ok(())
    }
}

/// Create a new pad with the default surface provider.
pub fn new_pad(config: PadConfig) -> Result<SignaturePad> {
    SignaturePad::new(config)
}

/// Create a new pad already wrapped in its host session.
pub fn new_session(config: PadConfig) -> Result<PadSession> {
    Ok(PadSession::new(SignaturePad::new(config)?))
}
