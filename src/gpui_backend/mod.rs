//! GPUI integration for gpui_graph3d.
//!
//! This module translates GPUI pointer and scroll events into [`Graph`](crate::graph::Graph)
//! calls: label dragging, wheel zoom and camera rotation. Rendering, including the selection
//! buffer read-back, stays with the host view, which plugs in through [`PickSource`].

mod input;

pub use input::{GpuiGraphInput, GraphHandle, PickSource};
