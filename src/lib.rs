//! gpui_graph3d is the interaction core of an interactive 3D graph for GPUI.
//! It keeps axis ranges valid under dragging and zooming, and resolves picks from a
//! color-coded selection buffer back into series items, axis labels and custom items.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod axis;
pub mod camera;
pub mod config;
pub mod error;
pub mod formatter;
pub mod geom;
pub mod graph;
pub mod interaction;
pub mod proxy;
pub mod selection;
pub mod series;
pub mod transform;
pub mod view;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use axis::{Axis, AxisConstraints, AxisKind, AxisObserver, AxisOrientation, RangeUpdate};
pub use camera::{Camera, CameraPreset, CameraRotation};
pub use config::{DragConfig, GraphConfig, ZoomConfig};
pub use error::{GraphError, Result};
pub use formatter::{AxisTicks, LabelFormatter, LogFormatter, ValueFormatter};
pub use geom::{Point3, ScreenPoint, ScreenSize};
pub use graph::{CustomItem, Graph, GraphBuilder, SelectedElement, SelectionObserver};
pub use interaction::{DragState, InputHandler, InputState, apply_drag, apply_zoom, drag_distance};
pub use proxy::{BarDataProxy, BarRecord};
pub use selection::{
    COLUMN_LABEL_ALPHA, CUSTOM_ITEM_ALPHA, ITEM_ALPHA, MAX_SELECTION_INDEX, ROW_LABEL_ALPHA,
    Rgba8, SKIP_COLOR, SelectionIndexTable, SelectionResolver, SelectionResult,
    VALUE_LABEL_ALPHA, index_to_color,
};
pub use series::{Bounds3, Series, SeriesId, SeriesKind};
pub use transform::SceneTransform;
pub use view::Range;
