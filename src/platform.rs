//! Platform seam for surface allocation.
//!
//! The pad never assumes a drawing surface can be created: an environment
//! may fail to provide one, and the component must keep accepting events
//! without crashing. The provider trait is that boundary; tests use the
//! failing provider to exercise the degraded path.

use crate::surface::RasterSurface;

/// Allocates backing buffers for the pad.
pub trait SurfaceProvider: Send + Sync {
    /// Create a surface, or `None` when the platform cannot provide one.
    fn create_surface(&self, width: u32, height: u32) -> Option<RasterSurface>;
}

/// Default provider: plain heap-allocated buffers. Never fails.
#[derive(Debug, Default)]
pub struct HeapSurfaceProvider;

impl HeapSurfaceProvider {
    pub fn new() -> Self {
        HeapSurfaceProvider
    }
}

impl SurfaceProvider for HeapSurfaceProvider {
    fn create_surface(&self, width: u32, height: u32) -> Option<RasterSurface> {
        Some(RasterSurface::new(width, height))
    }
}

/// Provider that models a platform without a drawing context. Every drawing
/// operation on a pad built over this must no-op safely.
#[derive(Debug, Default)]
pub struct UnavailableSurfaceProvider;

impl UnavailableSurfaceProvider {
    pub fn new() -> Self {
        UnavailableSurfaceProvider
    }
}

impl SurfaceProvider for UnavailableSurfaceProvider {
    fn create_surface(&self, _width: u32, _height: u32) -> Option<RasterSurface> {
        None
    }
}
