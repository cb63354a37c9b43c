//! Geometry primitives and the geometry provider seam.

use std::ops::{Add, Mul, Sub};

/// A 2D point or offset in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// A width/height pair in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A size is degenerate if either side is non-positive or non-finite.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Centre point of a box of this size anchored at the origin.
    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Live layout measurements, taken fresh for every clamp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometrySnapshot {
    /// Visible container (the viewport window onto the content)
    pub container: Size,
    /// Rendered content size at zoom 1
    pub content: Size,
}

impl GeometrySnapshot {
    pub fn new(container: Size, content: Size) -> Self {
        Self { container, content }
    }

    /// True when either size cannot be used for bounds arithmetic.
    pub fn is_degenerate(&self) -> bool {
        self.container.is_degenerate() || self.content.is_degenerate()
    }
}

/// Supplies the current container and content sizes on demand.
///
/// The engine never caches the returned snapshot; layout can change between
/// any two events (window resize, image load).
pub trait GeometryProvider {
    fn snapshot(&self) -> GeometrySnapshot;
}

/// A provider returning a fixed snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGeometry(pub GeometrySnapshot);

impl FixedGeometry {
    pub fn new(container: Size, content: Size) -> Self {
        Self(GeometrySnapshot::new(container, content))
    }

    /// Replace the snapshot, e.g. after the host observed a resize.
    pub fn set(&mut self, snapshot: GeometrySnapshot) {
        self.0 = snapshot;
    }
}

impl GeometryProvider for FixedGeometry {
    fn snapshot(&self) -> GeometrySnapshot {
        self.0
    }
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &G {
    fn snapshot(&self) -> GeometrySnapshot {
        (**self).snapshot()
    }
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for std::rc::Rc<G> {
    fn snapshot(&self) -> GeometrySnapshot {
        (**self).snapshot()
    }
}

impl<G: GeometryProvider> GeometryProvider for std::cell::RefCell<G> {
    fn snapshot(&self) -> GeometrySnapshot {
        self.borrow().snapshot()
    }
}
