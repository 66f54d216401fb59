use std::sync::{Arc, RwLock};

use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, ScrollWheelEvent,
    px,
};

use crate::geom::{ScreenPoint, ScreenSize};
use crate::graph::Graph;
use crate::interaction::InputState;
use crate::selection::Rgba8;

/// Pixels per wheel line when converting GPUI scroll deltas.
const WHEEL_LINE_HEIGHT: f32 = 16.0;

/// Reads one pixel of the selection buffer under the pointer.
///
/// Implemented by the host view, which owns the off-screen render target.
pub trait PickSource: Send + Sync {
    /// Selection buffer pixel at a position, or `None` if nothing was rendered yet.
    fn pick(&self, position: ScreenPoint) -> Option<Rgba8>;
}

/// Routes GPUI input events to a shared [`Graph`].
///
/// Left press picks and may start an axis label drag. Right drag rotates the camera. Every
/// handler returns `true` when the graph changed and the view should be notified.
#[derive(Clone)]
pub struct GpuiGraphInput {
    graph: Arc<RwLock<Graph>>,
    picker: Option<Arc<dyn PickSource>>,
    viewport: ScreenSize,
    rotate_from: Option<ScreenPoint>,
}

impl GpuiGraphInput {
    /// Create an input adapter for the given graph.
    pub fn new(graph: Graph) -> Self {
        Self {
            graph: Arc::new(RwLock::new(graph)),
            picker: None,
            viewport: ScreenSize::new(0.0, 0.0),
            rotate_from: None,
        }
    }

    /// Attach the selection buffer reader.
    pub fn with_pick_source(mut self, picker: Arc<dyn PickSource>) -> Self {
        self.picker = Some(picker);
        self
    }

    /// Get a handle for mutating the underlying graph.
    pub fn graph_handle(&self) -> GraphHandle {
        GraphHandle {
            graph: Arc::clone(&self.graph),
        }
    }

    /// Update the viewport size used for camera rotation speed.
    pub fn set_viewport_size(&mut self, width: Pixels, height: Pixels) {
        self.viewport = ScreenSize::new(f32::from(width), f32::from(height));
    }

    /// Handle a mouse press.
    pub fn on_mouse_down(&mut self, ev: &MouseDownEvent) -> bool {
        let pos = screen_point(ev.position);
        match ev.button {
            MouseButton::Left => {
                let pixel = self.picker.as_ref().and_then(|picker| picker.pick(pos));
                let mut graph = self.graph.write().expect("graph lock");
                graph.mouse_press(pos, pixel);
                true
            }
            MouseButton::Right => {
                self.rotate_from = Some(pos);
                false
            }
            _ => false,
        }
    }

    /// Handle pointer motion.
    pub fn on_mouse_move(&mut self, ev: &MouseMoveEvent) -> bool {
        let pos = screen_point(ev.position);
        let mut graph = self.graph.write().expect("graph lock");
        if graph.input().state() != InputState::Idle {
            return graph.mouse_move(pos).is_some();
        }
        let Some(from) = self.rotate_from else {
            return false;
        };
        graph.rotate_camera(pos.delta_from(from), self.viewport);
        self.rotate_from = Some(pos);
        true
    }

    /// Handle a mouse release.
    pub fn on_mouse_up(&mut self, ev: &MouseUpEvent) -> bool {
        match ev.button {
            MouseButton::Left => {
                let mut graph = self.graph.write().expect("graph lock");
                let was_dragging = graph.input().state() != InputState::Idle;
                graph.mouse_release();
                was_dragging
            }
            MouseButton::Right => self.rotate_from.take().is_some(),
            _ => false,
        }
    }

    /// Handle a scroll wheel event. Scrolling up zooms in.
    pub fn on_scroll(&mut self, ev: &ScrollWheelEvent) -> bool {
        let delta = ev.delta.pixel_delta(px(WHEEL_LINE_HEIGHT));
        let lines = f32::from(delta.y) / WHEEL_LINE_HEIGHT;
        if lines.abs() < 0.01 {
            return false;
        }
        let mut graph = self.graph.write().expect("graph lock");
        graph.wheel(-lines as f64);
        true
    }
}

/// A handle for mutating a graph shared with a GPUI view.
#[derive(Clone)]
pub struct GraphHandle {
    graph: Arc<RwLock<Graph>>,
}

impl GraphHandle {
    /// Read the graph state.
    ///
    /// The graph is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&Graph) -> R) -> R {
        let graph = self.graph.read().expect("graph lock");
        f(&graph)
    }

    /// Mutate the graph state.
    ///
    /// The graph is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut Graph) -> R) -> R {
        let mut graph = self.graph.write().expect("graph lock");
        f(&mut graph)
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x), f32::from(point.y))
}
