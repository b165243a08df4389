//! Raster -> PNG conversion for export.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageBuffer, ImageFormat, Rgba};

use crate::error::{Error, Result};
use crate::surface::raster::RasterSurface;
use crate::surface::Snapshot;

/// Encode the surface contents as a PNG snapshot.
///
/// The surface is read, never mutated; encoding failures surface as
/// [`Error::EncodeError`] and leave no partial state behind.
pub fn encode_png(surface: &RasterSurface) -> Result<Snapshot> {
    let (width, height) = (surface.width(), surface.height());
    let buf: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, surface.pixels().to_vec())
            .ok_or_else(|| Error::EncodeError("pixel buffer does not match dimensions".into()))?;

    let mut out = Cursor::new(Vec::new());
    buf.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| Error::EncodeError(e.to_string()))?;

    Ok(Snapshot {
        width,
        height,
        png_data: out.into_inner(),
    })
}

/// Render a snapshot as a `data:image/png;base64,` URL for hosts that embed
/// the signature directly in a document.
pub fn to_data_url(snapshot: &Snapshot) -> String {
    format!(
        "data:image/png;base64,{}",
        STANDARD.encode(&snapshot.png_data)
    )
}
