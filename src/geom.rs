//! Geometric primitives shared by the axis and selection pipelines.
//!
//! [`Point3`] holds data-space or normalized scene-space coordinates.
//! [`ScreenPoint`] holds pointer positions in logical pixels.

/// A point in three dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    /// X value.
    pub x: f64,
    /// Y value.
    pub y: f64,
    /// Z value.
    pub z: f64,
}

impl Point3 {
    /// Create a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Check whether all coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A point in screen space (pixel coordinates, Y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn delta_from(self, other: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x - other.x, self.y - other.y)
    }
}

/// A size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ScreenSize {
    /// Create a new size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check whether the size has positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}
