//! Axis dragging and wheel zooming.
//!
//! The free functions implement the panning and zooming rules on a single
//! axis. [`InputHandler`] tracks the drag gesture across pointer events and
//! routes deltas to the axis whose label was grabbed.

use tracing::{trace, warn};

use crate::axis::{Axis, AxisOrientation};
use crate::camera::CameraRotation;
use crate::config::{DragConfig, ZoomConfig};
use crate::geom::ScreenPoint;
use crate::view::Range;

const UNBOUNDED: Range = Range {
    min: f64::NEG_INFINITY,
    max: f64::INFINITY,
};

/// Pointer interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging the X axis label.
    DraggingX,
    /// Dragging the Y axis label.
    DraggingY,
    /// Dragging the Z axis label.
    DraggingZ,
}

impl InputState {
    /// Axis affected by this state.
    pub fn axis(self) -> AxisOrientation {
        match self {
            Self::Idle => AxisOrientation::None,
            Self::DraggingX => AxisOrientation::X,
            Self::DraggingY => AxisOrientation::Y,
            Self::DraggingZ => AxisOrientation::Z,
        }
    }

    fn dragging(axis: AxisOrientation) -> Self {
        match axis {
            AxisOrientation::None => Self::Idle,
            AxisOrientation::X => Self::DraggingX,
            AxisOrientation::Y => Self::DraggingY,
            AxisOrientation::Z => Self::DraggingZ,
        }
    }
}

/// An active drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Axis being dragged.
    pub active_axis: AxisOrientation,
    /// Pointer position at the previous event.
    pub previous: ScreenPoint,
    /// Pointer position at the latest event.
    pub current: ScreenPoint,
}

impl DragState {
    fn new(active_axis: AxisOrientation, start: ScreenPoint) -> Self {
        Self {
            active_axis,
            previous: start,
            current: start,
        }
    }
}

/// Data-space shift produced by dragging `axis` by `delta` pixels.
///
/// Horizontal axes project the delta through the camera's horizontal
/// rotation; the vertical screen component flips when the scene is viewed
/// from below. The result is added to both range bounds.
pub fn drag_distance(
    axis: AxisOrientation,
    delta: ScreenPoint,
    rotation: CameraRotation,
    speed_modifier: f64,
) -> f64 {
    let (sin, cos) = rotation.horizontal.to_radians().sin_cos();
    let move_x = delta.x as f64;
    let move_y = delta.y as f64;
    let adjusted_y = if rotation.vertical < 0.0 { -move_y } else { move_y };
    match axis {
        AxisOrientation::X => -(move_x * cos - adjusted_y * sin) / speed_modifier,
        AxisOrientation::Z => (move_x * sin + adjusted_y * cos) / speed_modifier,
        AxisOrientation::Y => move_y / speed_modifier,
        AxisOrientation::None => 0.0,
    }
}

/// Intersect `area` with the half-line the axis constraints allow.
///
/// An area lying entirely outside the half-line is replaced by the half-line.
fn bounded_area(axis: &Axis, area: Option<Range>) -> Range {
    let allowed = axis.allowed_window();
    match area {
        Some(area) => {
            let bounded = area.intersected(allowed);
            if bounded.min <= bounded.max { bounded } else { allowed }
        }
        None => allowed,
    }
}

/// Pan `axis` by a pixel drag, keeping the window inside `area` if given.
///
/// Returns the resulting range. Axes restricted to positive values treat
/// their allowed half-line as an extra area, so panning keeps the window
/// width unless the window is wider than the area.
pub fn apply_drag(
    axis: &mut Axis,
    role: AxisOrientation,
    delta: ScreenPoint,
    rotation: CameraRotation,
    speed_modifier: f64,
    area: Option<Range>,
) -> Range {
    if !(speed_modifier.is_finite() && speed_modifier > 0.0) {
        warn!(speed_modifier, "drag speed modifier must be positive");
        return axis.range();
    }
    let distance = drag_distance(role, delta, rotation, speed_modifier);
    if distance == 0.0 {
        return axis.range();
    }
    let next = axis
        .range()
        .shifted(distance)
        .clamped_into(bounded_area(axis, area));
    trace!(?role, distance, min = next.min, max = next.max, "axis drag");
    axis.set_range(next.min, next.max);
    axis.range()
}

/// Zoom `axis` symmetrically by `wheel_delta` data units on each side.
///
/// Positive deltas widen the window, negative deltas narrow it. The result
/// stays inside `area` and never gets narrower than `min_span` unless the
/// area itself is narrower. A window crossing the half-line allowed by the
/// axis constraints is moved back onto it with its width kept.
pub fn apply_zoom(axis: &mut Axis, wheel_delta: f64, area: Range, min_span: f64) -> Range {
    let configured = area;
    let area = bounded_area(axis, Some(configured));
    let current = axis.range();
    let mut next = Range {
        min: current.min - wheel_delta,
        max: current.max + wheel_delta,
    };
    if next.min > next.max {
        let center = next.center();
        next = Range {
            min: center,
            max: center,
        };
    }
    next = if next.min >= area.max || next.max <= area.min {
        next.clamped_into(area)
    } else {
        // The configured area trims the window; the allowed half-line only moves it.
        let cut = Range {
            min: configured.min.min(area.min),
            max: area.max,
        };
        next.intersected(cut).clamped_into(area)
    };
    if next.span() < min_span {
        next = next.with_min_span(min_span).clamped_into(area);
    }
    trace!(wheel_delta, min = next.min, max = next.max, "axis zoom");
    axis.set_range(next.min, next.max);
    axis.range()
}

/// Tracks pointer gestures and applies them to graph axes.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    drag: Option<DragState>,
    drag_config: DragConfig,
    zoom_config: ZoomConfig,
}

impl InputHandler {
    /// Create a handler with the given configuration.
    pub fn new(drag_config: DragConfig, zoom_config: ZoomConfig) -> Self {
        Self {
            drag: None,
            drag_config,
            zoom_config,
        }
    }

    /// Current interaction state.
    pub fn state(&self) -> InputState {
        self.drag
            .map_or(InputState::Idle, |drag| InputState::dragging(drag.active_axis))
    }

    /// Active drag gesture, if any.
    pub fn drag(&self) -> Option<DragState> {
        self.drag
    }

    /// Drag configuration.
    pub fn drag_config(&self) -> &DragConfig {
        &self.drag_config
    }

    /// Zoom configuration.
    pub fn zoom_config(&self) -> &ZoomConfig {
        &self.zoom_config
    }

    /// Replace the drag configuration.
    pub fn set_drag_config(&mut self, config: DragConfig) {
        self.drag_config = config;
    }

    /// Replace the zoom configuration.
    pub fn set_zoom_config(&mut self, config: ZoomConfig) {
        self.zoom_config = config;
    }

    /// Begin a drag if an axis label is under the pointer.
    pub fn mouse_press(
        &mut self,
        label_axis: Option<AxisOrientation>,
        pos: ScreenPoint,
    ) -> InputState {
        self.drag = label_axis
            .filter(|axis| *axis != AxisOrientation::None)
            .map(|axis| DragState::new(axis, pos));
        self.state()
    }

    /// Apply pointer motion to the dragged axis.
    ///
    /// `axis` must be the axis matching [`InputHandler::state`]. Returns the
    /// updated range when a drag is active.
    pub fn mouse_move(
        &mut self,
        pos: ScreenPoint,
        rotation: CameraRotation,
        axis: Option<&mut Axis>,
    ) -> Option<Range> {
        let drag = self.drag.as_mut()?;
        drag.previous = drag.current;
        drag.current = pos;
        let delta = drag.current.delta_from(drag.previous);
        let role = drag.active_axis;
        let axis = axis?;
        Some(apply_drag(
            axis,
            role,
            delta,
            rotation,
            self.drag_config.speed_modifier,
            self.drag_config.area(role),
        ))
    }

    /// End any gesture.
    pub fn mouse_release(&mut self) {
        self.drag = None;
    }

    /// Zoom an axis by a wheel delta in wheel units.
    pub fn wheel(&self, delta: f64, axis: &mut Axis) -> Range {
        apply_zoom(
            axis,
            delta * self.zoom_config.step,
            self.zoom_config.area.unwrap_or(UNBOUNDED),
            self.zoom_config.min_span,
        )
    }
}
