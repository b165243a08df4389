//! The signature pad: a drawable surface plus the pointer-tracking state
//! machine and content flag that gate export.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::input::{
    ClientPoint, ContainerBounds, InputDisposition, PointerEvent, SurfaceGeometry, SurfacePoint,
};
use crate::platform::{HeapSurfaceProvider, SurfaceProvider};
use crate::surface::{encode, RasterSurface, Snapshot};
use crate::PadConfig;

/// Drawing session state. `Idle` is both the initial state and the resting
/// state between strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Drawing,
}

/// Signature capture surface.
///
/// Owns the raster buffer, the session state machine, and the content flag.
/// The host drives it with the activation signal ([`activate`]), resize
/// notifications ([`handle_resize`]) and pointer events; it exposes
/// [`clear`] and [`export`] as the only other operations.
///
/// A pad whose platform could not provide a surface stays safe: every
/// pointer handler and `clear` become no-ops and only [`export`] reports
/// the condition.
///
/// [`activate`]: SignaturePad::activate
/// [`handle_resize`]: SignaturePad::handle_resize
/// [`clear`]: SignaturePad::clear
/// [`export`]: SignaturePad::export
pub struct SignaturePad {
    config: PadConfig,
    provider: Box<dyn SurfaceProvider>,
    surface: Option<RasterSurface>,
    geometry: SurfaceGeometry,
    state: SessionState,
    last_point: Option<SurfacePoint>,
    has_content: bool,
}

impl SignaturePad {
    /// Create an inactive pad with the default heap surface provider. The
    /// pad draws nothing until [`SignaturePad::activate`] runs.
    pub fn new(config: PadConfig) -> Result<Self> {
        Self::with_provider(config, Box::new(HeapSurfaceProvider::new()))
    }

    /// Create an inactive pad over a custom surface provider.
    pub fn with_provider(config: PadConfig, provider: Box<dyn SurfaceProvider>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            provider,
            surface: None,
            geometry: SurfaceGeometry {
                origin: ClientPoint::new(0.0, 0.0),
                display_width: 0.0,
                display_height: 0.0,
                pixel_width: 0,
                pixel_height: 0,
            },
            state: SessionState::Idle,
            last_point: None,
            has_content: false,
        })
    }

    fn geometry_for(&self, bounds: ContainerBounds) -> SurfaceGeometry {
        let display_width = bounds.width.max(1.0);
        let display_height = f64::from(self.config.height);
        SurfaceGeometry {
            origin: ClientPoint::new(bounds.left, bounds.top),
            display_width,
            display_height,
            pixel_width: (display_width * self.config.scale).round().max(1.0) as u32,
            pixel_height: (display_height * self.config.scale).round().max(1.0) as u32,
        }
    }

    /// Activation protocol: recreate the backing buffer at the container's
    /// current width and the fixed logical height, clear it, and reset the
    /// session state, content flag and last-point reference.
    pub fn activate(&mut self, bounds: ContainerBounds) {
        self.geometry = self.geometry_for(bounds);
        self.surface = self
            .provider
            .create_surface(self.geometry.pixel_width, self.geometry.pixel_height);
        match &mut self.surface {
            Some(surface) => {
                // The provider contract does not promise a blank buffer.
                surface.clear();
                debug!(
                    "pad activated: {}x{} buffer for {}x{} display",
                    surface.width(),
                    surface.height(),
                    self.geometry.display_width,
                    self.geometry.display_height,
                );
            }
            None => warn!("no drawing surface available; pointer input will be ignored"),
        }
        self.state = SessionState::Idle;
        self.last_point = None;
        self.has_content = false;
    }

    /// Resize-preservation protocol: keep existing pixel content across a
    /// container resize. The content flag and session state are untouched.
    pub fn handle_resize(&mut self, bounds: ContainerBounds) {
        self.geometry = self.geometry_for(bounds);
        if let Some(surface) = &mut self.surface {
            surface.resize_preserving(self.geometry.pixel_width, self.geometry.pixel_height);
            debug!(
                "pad resized: {}x{} buffer",
                surface.width(),
                surface.height()
            );
        }
    }

    /// Start a stroke: commit the start dot, enter `Drawing`, and mark the
    /// surface as having content. An event with no position (a touch event
    /// with zero active touches) is ignored.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> InputDisposition {
        let Some(pos) = event.position() else {
            return InputDisposition::Pass;
        };
        let point = self.geometry.map(pos);
        let Some(surface) = self.surface.as_mut() else {
            return InputDisposition::Pass;
        };
        surface.fill_dot(
            point.x,
            point.y,
            self.config.dot_radius,
            self.config.stroke_color,
        );
        self.state = SessionState::Drawing;
        self.last_point = Some(point);
        self.has_content = true;
        InputDisposition::Consumed
    }

    /// Continue a stroke: draw a segment from the last point to the current
    /// position. Acts only while `Drawing`.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> InputDisposition {
        if self.state != SessionState::Drawing {
            return InputDisposition::Pass;
        }
        let Some(pos) = event.position() else {
            return InputDisposition::Pass;
        };
        let point = self.geometry.map(pos);
        let Some(surface) = self.surface.as_mut() else {
            return InputDisposition::Pass;
        };
        if let Some(last) = self.last_point {
            surface.stroke_line(
                last.x,
                last.y,
                point.x,
                point.y,
                self.config.stroke_width,
                self.config.stroke_color,
            );
        }
        self.last_point = Some(point);
        self.has_content = true;
        InputDisposition::Consumed
    }

    /// End the stroke. Leaving the surface boundary ends it the same way;
    /// there is no interpolation beyond the boundary.
    pub fn pointer_up(&mut self) -> InputDisposition {
        self.end_stroke()
    }

    /// See [`SignaturePad::pointer_up`].
    pub fn pointer_leave(&mut self) -> InputDisposition {
        self.end_stroke()
    }

    fn end_stroke(&mut self) -> InputDisposition {
        if self.surface.is_none() {
            return InputDisposition::Pass;
        }
        self.state = SessionState::Idle;
        self.last_point = None;
        InputDisposition::Consumed
    }

    /// Wipe the surface and reset the content flag. Always available,
    /// idempotent.
    pub fn clear(&mut self) {
        if let Some(surface) = &mut self.surface {
            surface.clear();
        }
        self.has_content = false;
    }

    /// Export the current drawing as a PNG snapshot.
    ///
    /// Fails with [`Error::EmptySignature`] until at least one mark has been
    /// committed since the last activation or clear. Neither the buffer nor
    /// the session state are modified.
    pub fn export(&self) -> Result<Snapshot> {
        let surface = self.surface.as_ref().ok_or(Error::SurfaceUnavailable)?;
        if !self.has_content {
            return Err(Error::EmptySignature);
        }
        encode::encode_png(surface)
    }

    /// True once a mark has been committed since the last activation or
    /// clear.
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Read-only view of the backing surface, if the platform provided one.
    pub fn surface(&self) -> Option<&RasterSurface> {
        self.surface.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::UnavailableSurfaceProvider;

    fn active_pad() -> SignaturePad {
        let mut pad = SignaturePad::new(PadConfig::default()).expect("pad");
        pad.activate(ContainerBounds::new(0.0, 0.0, 400.0));
        pad
    }

    #[test]
    fn activation_resets_everything() {
        let mut pad = active_pad();
        pad.pointer_down(&PointerEvent::mouse(50.0, 50.0));
        pad.pointer_up();
        assert!(pad.has_content());

        pad.activate(ContainerBounds::new(0.0, 0.0, 400.0));
        assert!(!pad.has_content());
        assert_eq!(pad.state(), SessionState::Idle);
        assert!(pad.surface().expect("surface").is_blank());
    }

    #[test]
    fn buffer_matches_container_width_and_fixed_height() {
        let pad = active_pad();
        let surface = pad.surface().expect("surface");
        assert_eq!(surface.width(), 400);
        assert_eq!(surface.height(), 300);
    }

    #[test]
    fn scale_factor_sizes_the_backing_buffer() {
        let config = PadConfig {
            scale: 2.0,
            ..Default::default()
        };
        let mut pad = SignaturePad::new(config).expect("pad");
        pad.activate(ContainerBounds::new(0.0, 0.0, 400.0));
        let surface = pad.surface().expect("surface");
        assert_eq!(surface.width(), 800);
        assert_eq!(surface.height(), 600);

        // Input at display (50, 50) lands at buffer (100, 100)
        pad.pointer_down(&PointerEvent::mouse(50.0, 50.0));
        assert_eq!(
            pad.surface().expect("surface").pixel(100, 100),
            Some([0, 0, 0, 255])
        );
    }

    #[test]
    fn single_tap_registers_content() {
        let mut pad = active_pad();
        assert_eq!(
            pad.pointer_down(&PointerEvent::mouse(50.0, 50.0)),
            InputDisposition::Consumed
        );
        assert_eq!(pad.pointer_up(), InputDisposition::Consumed);
        assert!(pad.has_content());
        assert!(!pad.surface().expect("surface").is_blank());
    }

    #[test]
    fn move_without_down_draws_nothing() {
        let mut pad = active_pad();
        assert_eq!(
            pad.pointer_move(&PointerEvent::mouse(80.0, 50.0)),
            InputDisposition::Pass
        );
        assert!(!pad.has_content());
        assert!(pad.surface().expect("surface").is_blank());
    }

    #[test]
    fn leave_ends_the_stroke() {
        let mut pad = active_pad();
        pad.pointer_down(&PointerEvent::mouse(50.0, 50.0));
        assert_eq!(pad.state(), SessionState::Drawing);
        assert_eq!(pad.pointer_leave(), InputDisposition::Consumed);
        assert_eq!(pad.state(), SessionState::Idle);

        // A move after leaving draws nothing new
        let before = pad.surface().expect("surface").clone();
        pad.pointer_move(&PointerEvent::mouse(200.0, 200.0));
        assert_eq!(
            pad.surface().expect("surface").pixels(),
            before.pixels()
        );
    }

    #[test]
    fn empty_touch_event_is_ignored() {
        let mut pad = active_pad();
        assert_eq!(
            pad.pointer_down(&PointerEvent::touch(vec![])),
            InputDisposition::Pass
        );
        assert_eq!(pad.state(), SessionState::Idle);
        assert!(!pad.has_content());
    }

    #[test]
    fn first_touch_point_draws() {
        let mut pad = active_pad();
        pad.pointer_down(&PointerEvent::touch(vec![(60.0, 70.0), (200.0, 200.0)]));
        assert_eq!(
            pad.surface().expect("surface").pixel(60, 70),
            Some([0, 0, 0, 255])
        );
        // The second touch point must not have drawn
        assert_eq!(
            pad.surface().expect("surface").pixel(200, 200),
            Some([0, 0, 0, 0])
        );
    }

    #[test]
    fn origin_offset_applies_to_input() {
        let mut pad = SignaturePad::new(PadConfig::default()).expect("pad");
        pad.activate(ContainerBounds::new(100.0, 40.0, 400.0));
        pad.pointer_down(&PointerEvent::mouse(150.0, 90.0));
        assert_eq!(
            pad.surface().expect("surface").pixel(50, 50),
            Some([0, 0, 0, 255])
        );
    }

    #[test]
    fn clear_resets_content_flag_and_is_idempotent() {
        let mut pad = active_pad();
        pad.pointer_down(&PointerEvent::mouse(50.0, 50.0));
        pad.pointer_up();
        pad.clear();
        assert!(!pad.has_content());
        assert!(pad.surface().expect("surface").is_blank());
        pad.clear();
        assert!(!pad.has_content());
        assert!(pad.surface().expect("surface").is_blank());
    }

    #[test]
    fn export_fails_until_first_mark() {
        let mut pad = active_pad();
        assert!(matches!(pad.export(), Err(Error::EmptySignature)));
        pad.pointer_down(&PointerEvent::mouse(50.0, 50.0));
        pad.pointer_up();
        let snap = pad.export().expect("export");
        assert_eq!(snap.width, 400);
        assert_eq!(snap.height, 300);
        // Export does not consume the drawing
        assert!(pad.has_content());
        assert!(pad.export().is_ok());
    }

    #[test]
    fn resize_preserves_content_and_stroke_settings() {
        let mut pad = active_pad();
        pad.pointer_down(&PointerEvent::mouse(50.0, 50.0));
        pad.pointer_up();

        pad.handle_resize(ContainerBounds::new(0.0, 0.0, 600.0));
        let surface = pad.surface().expect("surface");
        assert_eq!(surface.width(), 600);
        assert!(!surface.is_blank());
        assert!(pad.has_content());

        // Subsequent strokes draw with the same configured color
        pad.pointer_down(&PointerEvent::mouse(500.0, 50.0));
        assert_eq!(
            pad.surface().expect("surface").pixel(500, 50),
            Some([0, 0, 0, 255])
        );
    }

    #[test]
    fn unavailable_surface_never_panics() {
        let mut pad = SignaturePad::with_provider(
            PadConfig::default(),
            Box::new(UnavailableSurfaceProvider::new()),
        )
        .expect("pad");
        pad.activate(ContainerBounds::new(0.0, 0.0, 400.0));

        assert_eq!(
            pad.pointer_down(&PointerEvent::mouse(50.0, 50.0)),
            InputDisposition::Pass
        );
        assert_eq!(
            pad.pointer_move(&PointerEvent::mouse(80.0, 50.0)),
            InputDisposition::Pass
        );
        assert_eq!(pad.pointer_up(), InputDisposition::Pass);
        pad.clear();
        assert!(!pad.has_content());
        assert!(matches!(pad.export(), Err(Error::SurfaceUnavailable)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = PadConfig {
            stroke_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            SignaturePad::new(config),
            Err(Error::ConfigError(_))
        ));
    }
}
