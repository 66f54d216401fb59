use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;
use gpui_graph3d::selection::label_color;
use gpui_graph3d::{
    Axis, AxisObserver, AxisOrientation, COLUMN_LABEL_ALPHA, CameraPreset, Graph, GraphConfig,
    InputState, Point3, ROW_LABEL_ALPHA, Range, SKIP_COLOR, ScreenPoint, SelectedElement, Series,
    SeriesKind, VALUE_LABEL_ALPHA, apply_zoom, index_to_color,
};

#[derive(Default)]
struct RangeLog(Mutex<Vec<(AxisOrientation, Range)>>);

impl AxisObserver for RangeLog {
    fn range_changed(&self, orientation: AxisOrientation, range: Range) {
        self.0.lock().expect("range log lock").push((orientation, range));
    }
}

fn items(n: usize) -> Vec<Point3> {
    (0..n).map(|i| Point3::new(i as f64, i as f64 * 2.0, 1.0)).collect()
}

#[test]
fn set_min_past_max_pushes_max() {
    let mut axis = Axis::value();
    axis.set_range(-20.0, 20.0);
    let update = axis.set_min(25.0);
    assert_eq!(axis.range(), Range::new(25.0, 26.0));
    assert!(update.adjusted);
    assert!(!axis.is_auto_adjust_range());
}

#[test]
fn label_drag_is_clamped_to_area() {
    let mut config = GraphConfig::default();
    config.drag.area_x = Some(Range::new(0.0, 100.0));
    let mut graph = Graph::builder().config(config).build();
    graph
        .axis_mut(AxisOrientation::X)
        .expect("x axis")
        .set_range(10.0, 30.0);

    let start = ScreenPoint::new(500.0, 200.0);
    let state = graph.mouse_press(start, Some(label_color(COLUMN_LABEL_ALPHA, 0)));
    assert_eq!(state, InputState::DraggingX);
    let range = graph
        .mouse_move(ScreenPoint::new(900.0, 200.0))
        .expect("active drag");
    assert_eq!(range, Range::new(0.0, 20.0));
    graph.mouse_release();
    assert_eq!(graph.input().state(), InputState::Idle);
}

#[test]
fn drag_there_and_back_restores_range() {
    let mut graph = Graph::new();
    graph.camera_mut().set_preset(CameraPreset::IsometricLeft);
    graph
        .axis_mut(AxisOrientation::Z)
        .expect("z axis")
        .set_range(-5.0, 5.0);
    graph.mouse_press(
        ScreenPoint::new(0.0, 0.0),
        Some(label_color(ROW_LABEL_ALPHA, 2)),
    );
    graph.mouse_move(ScreenPoint::new(37.0, -12.0));
    graph.mouse_move(ScreenPoint::new(0.0, 0.0));
    graph.mouse_release();
    let range = graph.z_axis().range();
    assert_relative_eq!(range.min, -5.0, epsilon = 1e-9);
    assert_relative_eq!(range.max, 5.0, epsilon = 1e-9);
}

#[test]
fn value_label_drag_moves_y_axis() {
    let mut graph = Graph::new();
    graph
        .axis_mut(AxisOrientation::Y)
        .expect("y axis")
        .set_range(0.0, 10.0);
    graph.mouse_press(
        ScreenPoint::new(0.0, 0.0),
        Some(label_color(VALUE_LABEL_ALPHA, 0)),
    );
    let range = graph.mouse_move(ScreenPoint::new(0.0, 40.0)).expect("drag");
    assert_eq!(range, Range::new(2.0, 12.0));
}

#[test]
fn press_on_item_does_not_drag() {
    let mut graph = Graph::new();
    graph.add_series(Series::from_iter_points("s", items(3), SeriesKind::Scatter));
    graph.prepare_selection_pass().expect("table");
    let state = graph.mouse_press(ScreenPoint::new(0.0, 0.0), Some(index_to_color(1)));
    assert_eq!(state, InputState::Idle);
    assert!(graph.mouse_move(ScreenPoint::new(40.0, 0.0)).is_none());
}

#[test]
fn wheel_zooms_configured_axes() {
    let mut graph = Graph::new();
    for orientation in [AxisOrientation::X, AxisOrientation::Y, AxisOrientation::Z] {
        graph
            .axis_mut(orientation)
            .expect("axis")
            .set_range(0.0, 10.0);
    }
    graph.wheel(-2.0);
    assert_eq!(graph.x_axis().range(), Range::new(2.0, 8.0));
    assert_eq!(graph.z_axis().range(), Range::new(2.0, 8.0));
    assert_eq!(graph.y_axis().range(), Range::new(0.0, 10.0));

    graph.wheel(-10.0);
    assert_relative_eq!(graph.x_axis().range().span(), 1.0);
    assert_relative_eq!(graph.x_axis().range().center(), 5.0);
}

#[test]
fn zoom_out_below_min_span_keeps_wider_window() {
    let mut axis = Axis::value();
    axis.set_range(48.0, 52.0);
    let range = apply_zoom(&mut axis, 1.0, Range::new(f64::MIN, f64::MAX), 5.0);
    assert_eq!(range, Range::new(47.0, 53.0));
}

#[test]
fn observers_see_drag_updates() {
    let log = Arc::new(RangeLog::default());
    let mut axis = Axis::value();
    axis.add_observer(log.clone());
    let mut graph = Graph::builder().x_axis(axis).build();
    graph.mouse_press(
        ScreenPoint::new(0.0, 0.0),
        Some(label_color(COLUMN_LABEL_ALPHA, 0)),
    );
    graph.mouse_move(ScreenPoint::new(-20.0, 0.0));
    let seen = log.0.lock().expect("range log lock").clone();
    assert_eq!(seen, vec![(AxisOrientation::X, Range::new(1.0, 11.0))]);
}

#[test]
fn picks_follow_visibility_changes() {
    let mut graph = Graph::new();
    let a = graph.add_series(Series::from_iter_points("a", items(5), SeriesKind::Bar));
    let b = graph.add_series(Series::from_iter_points("b", items(3), SeriesKind::Bar));
    graph.prepare_selection_pass().expect("table");
    assert_eq!(
        graph.resolve_pick(index_to_color(6)),
        SelectedElement::Series { series: b, index: 1 }
    );

    graph.set_series_visible(a, false).expect("known series");
    graph.prepare_selection_pass().expect("table");
    assert_eq!(
        graph.resolve_pick(index_to_color(1)),
        SelectedElement::Series { series: b, index: 1 }
    );
    assert_eq!(graph.resolve_pick(index_to_color(6)), SelectedElement::None);
    assert_eq!(graph.resolve_pick(SKIP_COLOR), SelectedElement::None);
}

#[test]
fn auto_adjust_then_scene_positions() {
    let mut graph = Graph::new();
    let id = graph.add_series(Series::from_iter_points(
        "s",
        [Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 8.0, 2.0)],
        SeriesKind::Scatter,
    ));
    graph.update_auto_adjusted_ranges();
    let scene = graph.item_scene_position(id, 1).expect("item");
    assert_relative_eq!(scene.x, 1.0);
    assert_relative_eq!(scene.y, 1.0);
    assert_relative_eq!(scene.z, 1.0);
    let scene = graph.item_scene_position(id, 0).expect("item");
    assert_relative_eq!(scene.x, -1.0);
}

#[test]
fn config_loaded_from_json_drives_graph() {
    let config = GraphConfig::from_json(r#"{ "zoom": { "axes": ["Y"], "step": 0.5 } }"#)
        .expect("valid config");
    let mut graph = Graph::builder().config(config).build();
    graph
        .axis_mut(AxisOrientation::Y)
        .expect("y axis")
        .set_range(0.0, 10.0);
    graph.wheel(2.0);
    assert_eq!(graph.y_axis().range(), Range::new(-1.0, 11.0));
    assert_eq!(graph.config().zoom.step, 0.5);
}
