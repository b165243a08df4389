//! Pointer input abstraction and display-to-surface coordinate mapping.
//!
//! Mouse and touch input reduce to one event type with a single
//! position-extraction rule: a mouse event always has a position, a touch
//! event has one only while at least one touch point is active.

/// A raw input coordinate in the host's client space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientPoint {
    pub x: f64,
    pub y: f64,
}

impl ClientPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A surface-local stroke point, in backing-buffer pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

/// A pointer event from either input family.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Mouse(ClientPoint),
    /// Active touch points, in contact order. May be empty at touch-end.
    Touch(Vec<ClientPoint>),
}

impl PointerEvent {
    pub fn mouse(x: f64, y: f64) -> Self {
        PointerEvent::Mouse(ClientPoint::new(x, y))
    }

    pub fn touch(points: Vec<(f64, f64)>) -> Self {
        PointerEvent::Touch(points.into_iter().map(|(x, y)| ClientPoint::new(x, y)).collect())
    }

    /// The event's drawing position: the mouse position, or the first active
    /// touch point. `None` when a touch event carries no active touches.
    pub fn position(&self) -> Option<ClientPoint> {
        match self {
            PointerEvent::Mouse(p) => Some(*p),
            PointerEvent::Touch(points) => points.first().copied(),
        }
    }
}

/// What the pad did with a pointer event.
///
/// `Consumed` means the host must suppress the platform's default gesture
/// handling for this event (text selection, scrolling, touch-pan). `Pass`
/// means the event produced no position or arrived while the surface was
/// inert, and default handling may proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDisposition {
    Consumed,
    Pass,
}

/// The container's on-screen placement, sampled by the host when the
/// surface is activated or resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

impl ContainerBounds {
    pub fn new(left: f64, top: f64, width: f64) -> Self {
        Self { left, top, width }
    }
}

/// Mapping between the surface's on-screen box and its backing buffer.
///
/// Client input is made surface-local by subtracting the origin, then scaled
/// by (backing size / displayed size) independently per axis, so drawing
/// stays pixel-accurate under any device pixel ratio or CSS scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    pub origin: ClientPoint,
    pub display_width: f64,
    pub display_height: f64,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl SurfaceGeometry {
    pub fn map(&self, p: ClientPoint) -> SurfacePoint {
        let sx = if self.display_width > 0.0 {
            f64::from(self.pixel_width) / self.display_width
        } else {
            1.0
        };
        let sy = if self.display_height > 0.0 {
            f64::from(self.pixel_height) / self.display_height
        } else {
            1.0
        };
        SurfacePoint {
            x: (p.x - self.origin.x) * sx,
            y: (p.y - self.origin.y) * sy,
        }
    }
}
