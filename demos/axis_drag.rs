//! Drives a graph headlessly: label drag, wheel zoom, camera presets and picks.
//!
//! Run with `RUST_LOG=gpui_graph3d=trace` to see every range adjustment.

use gpui_graph3d::selection::label_color;
use gpui_graph3d::{
    BarDataProxy, BarRecord, COLUMN_LABEL_ALPHA, CameraPreset, Graph, GraphConfig, ScreenPoint,
    SelectedElement, index_to_color,
};
use tracing_subscriber::EnvFilter;

fn main() -> gpui_graph3d::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GraphConfig::from_json(
        r#"{ "drag": { "speed_modifier": 10.0, "area_x": { "min": 0.0, "max": 11.0 } },
             "zoom": { "min_span": 2.0, "axes": ["Y"] } }"#,
    )?;

    let proxy = BarDataProxy::default().with_records([
        BarRecord::new("2024", "Jan", 4.0),
        BarRecord::new("2024", "Feb", 7.5),
        BarRecord::new("2025", "Jan", 3.2),
        BarRecord::new("2025", "Mar", 9.1),
    ]);
    let mut graph = Graph::builder()
        .x_axis(proxy.column_axis().with_title("Month"))
        .z_axis(proxy.row_axis().with_title("Year"))
        .config(config)
        .series(proxy.to_series("sales"))
        .build();
    graph.update_auto_adjusted_ranges();
    tracing::info!(y = ?graph.y_axis().range(), "value axis fitted to data");

    graph.camera_mut().set_preset(CameraPreset::IsometricRight);
    graph.mouse_press(
        ScreenPoint::new(200.0, 300.0),
        Some(label_color(COLUMN_LABEL_ALPHA, 0)),
    );
    for step in 1..=5 {
        let pos = ScreenPoint::new(200.0 - 12.0 * step as f32, 300.0);
        if let Some(range) = graph.mouse_move(pos) {
            tracing::info!(step, min = range.min, max = range.max, "dragging column axis");
        }
    }
    graph.mouse_release();

    graph.wheel(-3.0);
    tracing::info!(y = ?graph.y_axis().range(), "value axis after zoom in");

    let table = graph.prepare_selection_pass()?;
    tracing::info!(items = table.total(), "selection table published");
    match graph.resolve_pick(index_to_color(2)) {
        SelectedElement::Series { series, index } => {
            let scene = graph.item_scene_position(series, index);
            tracing::info!(?series, index, ?scene, "picked bar");
        }
        other => tracing::info!(?other, "picked"),
    }
    Ok(())
}
