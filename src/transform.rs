//! Coordinate transforms between data space and normalized scene space.

use crate::axis::Axis;
use crate::geom::Point3;

/// Transform from data coordinates into the renderer's normalized scene space.
#[derive(Debug, Clone, Copy)]
pub struct SceneTransform<'a> {
    x: &'a Axis,
    y: &'a Axis,
    z: &'a Axis,
}

impl<'a> SceneTransform<'a> {
    /// Create a transform over the three graph axes.
    pub fn new(x: &'a Axis, y: &'a Axis, z: &'a Axis) -> Self {
        Self { x, y, z }
    }

    /// Map a data point into scene space.
    pub fn data_to_scene(&self, point: Point3) -> Option<Point3> {
        if !point.is_finite() {
            return None;
        }
        let scene = Point3::new(
            self.x.position_at(point.x),
            self.y.position_at(point.y),
            self.z.position_at(point.z),
        );
        scene.is_finite().then_some(scene)
    }

    /// Map a scene point back into data space.
    pub fn scene_to_data(&self, point: Point3) -> Option<Point3> {
        if !point.is_finite() {
            return None;
        }
        let data = Point3::new(
            self.x.value_at(point.x),
            self.y.value_at(point.y),
            self.z.value_at(point.z),
        );
        data.is_finite().then_some(data)
    }

    /// Check whether a data point lies inside all three axis ranges.
    pub fn contains(&self, point: Point3) -> bool {
        let inside = |axis: &Axis, value: f64| value >= axis.min() && value <= axis.max();
        inside(self.x, point.x) && inside(self.y, point.y) && inside(self.z, point.z)
    }
}
