//! Capture surface: the owned raster target and exported snapshots.
//!
//! The surface and its pixel buffer are owned exclusively by the pad for its
//! active lifetime; nothing outside this crate holds a reference to them.

pub mod encode;
pub mod raster;

pub use raster::RasterSurface;

/// An exported signature image.
///
/// Produced on demand by [`crate::SignaturePad::export`]; ownership passes to
/// whoever receives it and the pad retains nothing.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}
