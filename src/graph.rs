//! Graph controller and builder.
//!
//! [`Graph`] owns the three axes, the data series, custom items, the camera and the selection
//! index table. Input events and picked pixels are routed through it so that every axis change
//! and selection change goes through the same validation and notification paths.

use std::sync::Arc;

use tracing::debug;

use crate::axis::{Axis, AxisKind, AxisOrientation};
use crate::camera::Camera;
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::geom::{Point3, ScreenPoint, ScreenSize};
use crate::interaction::{InputHandler, InputState};
use crate::selection::{
    Rgba8, SelectionIndexTable, SelectionResolver, SelectionResult, index_to_color,
};
use crate::series::{Bounds3, Series, SeriesId};
use crate::transform::SceneTransform;
use crate::view::Range;

/// Element under the last resolved pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectedElement {
    /// Nothing selected.
    #[default]
    None,
    /// An item of a series.
    Series {
        /// Owning series.
        series: SeriesId,
        /// Item index within the series.
        index: usize,
    },
    /// A label of the X axis.
    AxisXLabel(usize),
    /// A label of the Y axis.
    AxisYLabel(usize),
    /// A label of the Z axis.
    AxisZLabel(usize),
    /// A custom item.
    CustomItem(usize),
}

impl SelectedElement {
    /// Axis owning the selected label, if a label is selected.
    pub fn label_axis(&self) -> Option<AxisOrientation> {
        match self {
            Self::AxisXLabel(_) => Some(AxisOrientation::X),
            Self::AxisYLabel(_) => Some(AxisOrientation::Y),
            Self::AxisZLabel(_) => Some(AxisOrientation::Z),
            Self::None | Self::Series { .. } | Self::CustomItem(_) => None,
        }
    }
}

/// Receives selection change notifications.
pub trait SelectionObserver: Send + Sync {
    /// Called after the selected element changed.
    fn selection_changed(&self, element: SelectedElement);
}

#[derive(Clone, Default)]
struct SelectionObservers(Vec<Arc<dyn SelectionObserver>>);

impl std::fmt::Debug for SelectionObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SelectionObservers({})", self.0.len())
    }
}

/// A decoration placed in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomItem {
    position: Point3,
    position_absolute: bool,
    visible: bool,
}

impl CustomItem {
    /// Create an item positioned in data space.
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            position_absolute: false,
            visible: true,
        }
    }

    /// Create an item positioned directly in normalized scene space.
    pub fn absolute(position: Point3) -> Self {
        Self {
            position,
            position_absolute: true,
            visible: true,
        }
    }

    /// Item position.
    pub fn position(&self) -> Point3 {
        self.position
    }

    /// Set the item position.
    pub fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    /// Whether the position is in scene space rather than data space.
    pub fn is_position_absolute(&self) -> bool {
        self.position_absolute
    }

    /// Check if the item is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the item.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Interactive 3D graph state.
#[derive(Debug, Clone)]
pub struct Graph {
    x_axis: Axis,
    y_axis: Axis,
    z_axis: Axis,
    series: Vec<Series>,
    custom_items: Vec<CustomItem>,
    camera: Camera,
    input: InputHandler,
    resolver: SelectionResolver,
    selection_dirty: bool,
    selection_enabled: bool,
    selected: SelectedElement,
    observers: SelectionObservers,
}

impl Graph {
    /// Create a graph with value axes and default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a graph with custom configuration.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Access the X axis.
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    /// Access the Y axis.
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// Access the Z axis.
    pub fn z_axis(&self) -> &Axis {
        &self.z_axis
    }

    /// Access an axis by orientation.
    pub fn axis(&self, orientation: AxisOrientation) -> Option<&Axis> {
        match orientation {
            AxisOrientation::X => Some(&self.x_axis),
            AxisOrientation::Y => Some(&self.y_axis),
            AxisOrientation::Z => Some(&self.z_axis),
            AxisOrientation::None => None,
        }
    }

    /// Access an axis mutably by orientation.
    pub fn axis_mut(&mut self, orientation: AxisOrientation) -> Option<&mut Axis> {
        match orientation {
            AxisOrientation::X => Some(&mut self.x_axis),
            AxisOrientation::Y => Some(&mut self.y_axis),
            AxisOrientation::Z => Some(&mut self.z_axis),
            AxisOrientation::None => None,
        }
    }

    /// Replace an axis. Returns the previous one.
    pub fn set_axis(&mut self, orientation: AxisOrientation, mut axis: Axis) -> Option<Axis> {
        axis.set_orientation(orientation);
        let slot = self.axis_mut(orientation)?;
        Some(std::mem::replace(slot, axis))
    }

    /// Access the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Access the camera mutably.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Access the input handler.
    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    /// Current configuration.
    pub fn config(&self) -> GraphConfig {
        GraphConfig {
            drag: self.input.drag_config().clone(),
            zoom: self.input.zoom_config().clone(),
            selection_enabled: self.selection_enabled,
        }
    }

    /// Validate and apply a configuration.
    pub fn set_config(&mut self, config: GraphConfig) -> Result<()> {
        config.validate()?;
        self.input.set_drag_config(config.drag);
        self.input.set_zoom_config(config.zoom);
        self.selection_enabled = config.selection_enabled;
        if !self.selection_enabled {
            self.set_selected(SelectedElement::None);
        }
        Ok(())
    }

    /// Access all series in draw order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Find a series by id.
    pub fn series_by_id(&self, id: SeriesId) -> Option<&Series> {
        self.series.iter().find(|series| series.id() == id)
    }

    fn series_mut(&mut self, id: SeriesId) -> Result<&mut Series> {
        self.series
            .iter_mut()
            .find(|series| series.id() == id)
            .ok_or(GraphError::UnknownSeries(id))
    }

    /// Add a series and return its id.
    pub fn add_series(&mut self, series: Series) -> SeriesId {
        let id = series.id();
        self.series.push(series);
        self.selection_dirty = true;
        id
    }

    /// Remove a series, clearing its selection.
    pub fn remove_series(&mut self, id: SeriesId) -> Result<Series> {
        let position = self
            .series
            .iter()
            .position(|series| series.id() == id)
            .ok_or(GraphError::UnknownSeries(id))?;
        let removed = self.series.remove(position);
        self.selection_dirty = true;
        if matches!(self.selected, SelectedElement::Series { series, .. } if series == id) {
            self.set_selected(SelectedElement::None);
        }
        Ok(removed)
    }

    /// Replace the items of a series.
    pub fn set_series_items(&mut self, id: SeriesId, items: Vec<Point3>) -> Result<()> {
        let len = items.len();
        self.series_mut(id)?.set_items(items);
        self.selection_dirty = true;
        let stale = matches!(
            self.selected,
            SelectedElement::Series { series, index } if series == id && index >= len
        );
        if stale {
            self.set_selected(SelectedElement::None);
        }
        Ok(())
    }

    /// Append one item to a series and return its index.
    pub fn push_series_item(&mut self, id: SeriesId, item: Point3) -> Result<usize> {
        let index = self.series_mut(id)?.push(item);
        self.selection_dirty = true;
        Ok(index)
    }

    /// Show or hide a series.
    pub fn set_series_visible(&mut self, id: SeriesId, visible: bool) -> Result<()> {
        let target = self.series_mut(id)?;
        if target.is_visible() == visible {
            return Ok(());
        }
        target.set_visible(visible);
        self.selection_dirty = true;
        if !visible
            && matches!(self.selected, SelectedElement::Series { series, .. } if series == id)
        {
            self.set_selected(SelectedElement::None);
        }
        Ok(())
    }

    /// Access the custom items.
    pub fn custom_items(&self) -> &[CustomItem] {
        &self.custom_items
    }

    /// Add a custom item and return its index.
    pub fn add_custom_item(&mut self, item: CustomItem) -> usize {
        self.custom_items.push(item);
        self.custom_items.len() - 1
    }

    /// Remove a custom item by index.
    pub fn remove_custom_item(&mut self, index: usize) -> Option<CustomItem> {
        if index >= self.custom_items.len() {
            return None;
        }
        let removed = self.custom_items.remove(index);
        let selected = self.selected;
        match selected {
            SelectedElement::CustomItem(selected) if selected == index => {
                self.set_selected(SelectedElement::None);
            }
            SelectedElement::CustomItem(selected) if selected > index => {
                self.selected = SelectedElement::CustomItem(selected - 1);
            }
            _ => {}
        }
        Some(removed)
    }

    /// Whether the index table is stale.
    pub fn is_selection_dirty(&self) -> bool {
        self.selection_dirty
    }

    /// Rebuild the selection index table if series changed since the last pass.
    ///
    /// Call before rendering the selection buffer.
    pub fn prepare_selection_pass(&mut self) -> Result<Arc<SelectionIndexTable>> {
        if self.selection_dirty {
            let table = SelectionIndexTable::build(
                self.series
                    .iter()
                    .filter(|series| series.is_visible())
                    .map(|series| (series.id(), series.len())),
            )?;
            self.resolver.publish(table);
            self.selection_dirty = false;
        }
        Ok(self.resolver.table())
    }

    /// Selection color of a series item under the published table.
    pub fn selection_color(&self, id: SeriesId, index: usize) -> Option<Rgba8> {
        let range = self.resolver.table().range_of(id)?;
        (index < range.count).then(|| index_to_color(range.offset + index))
    }

    /// Currently selected element.
    pub fn selected_element(&self) -> SelectedElement {
        self.selected
    }

    /// Register a selection observer.
    pub fn add_selection_observer(&mut self, observer: Arc<dyn SelectionObserver>) {
        self.observers.0.push(observer);
    }

    /// Decode a picked pixel and make it the current selection.
    pub fn resolve_pick(&mut self, pixel: Rgba8) -> SelectedElement {
        if !self.selection_enabled {
            return SelectedElement::None;
        }
        let element = match self.resolver.decode(pixel) {
            SelectionResult::None => SelectedElement::None,
            SelectionResult::ColumnLabel(index) => SelectedElement::AxisXLabel(index),
            SelectionResult::ValueLabel(index) => SelectedElement::AxisYLabel(index),
            SelectionResult::RowLabel(index) => SelectedElement::AxisZLabel(index),
            SelectionResult::CustomItem(index) if index < self.custom_items.len() => {
                SelectedElement::CustomItem(index)
            }
            SelectionResult::CustomItem(_) => SelectedElement::None,
            SelectionResult::Item { series, index } => {
                match self.series_by_id(series) {
                    Some(owner) if owner.is_visible() && index < owner.len() => {
                        SelectedElement::Series { series, index }
                    }
                    _ => SelectedElement::None,
                }
            }
        };
        self.set_selected(element);
        element
    }

    /// Set the selection directly.
    pub fn set_selected(&mut self, element: SelectedElement) {
        if self.selected == element {
            return;
        }
        if let SelectedElement::Series { series, .. } = self.selected
            && let Ok(previous) = self.series_mut(series)
        {
            previous.set_selected_item(None);
        }
        if let SelectedElement::Series { series, index } = element
            && let Ok(current) = self.series_mut(series)
        {
            current.set_selected_item(Some(index));
        }
        self.selected = element;
        debug!(?element, "selection changed");
        for observer in &self.observers.0 {
            observer.selection_changed(element);
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.set_selected(SelectedElement::None);
    }

    /// Extents of all visible series.
    pub fn data_bounds(&self) -> Option<Bounds3> {
        let mut bounds: Option<Bounds3> = None;
        for series in self.series.iter().filter(|series| series.is_visible()) {
            if let Some(next) = series.bounds() {
                bounds = Some(match bounds {
                    None => next,
                    Some(existing) => Bounds3::union(existing, next)?,
                });
            }
        }
        bounds
    }

    /// Refit every auto-adjusting axis to the visible data.
    pub fn update_auto_adjusted_ranges(&mut self) {
        let bounds = self.data_bounds();
        let axes = [
            (&mut self.x_axis, bounds.map(|b| b.x)),
            (&mut self.y_axis, bounds.map(|b| b.y)),
            (&mut self.z_axis, bounds.map(|b| b.z)),
        ];
        for (axis, data_range) in axes {
            if !axis.is_auto_adjust_range() {
                continue;
            }
            let target = match axis.kind() {
                AxisKind::Category if !axis.labels().is_empty() => {
                    Some(Range::new(0.0, (axis.labels().len() - 1) as f64))
                }
                AxisKind::Category | AxisKind::Value => data_range,
            };
            if let Some(target) = target {
                axis.adjust_to_data(target);
            }
        }
    }

    /// Transform over the current axes.
    pub fn scene_transform(&self) -> SceneTransform<'_> {
        SceneTransform::new(&self.x_axis, &self.y_axis, &self.z_axis)
    }

    /// Scene position of a series item.
    pub fn item_scene_position(&self, id: SeriesId, index: usize) -> Option<Point3> {
        let point = *self.series_by_id(id)?.items().get(index)?;
        self.scene_transform().data_to_scene(point)
    }

    /// Scene position of a custom item.
    pub fn custom_item_scene_position(&self, index: usize) -> Option<Point3> {
        let item = self.custom_items.get(index)?;
        if item.is_position_absolute() {
            return Some(item.position());
        }
        self.scene_transform().data_to_scene(item.position())
    }

    /// Handle a pointer press.
    ///
    /// When `pixel` is provided it is resolved first. A drag starts if the selection is an axis
    /// label.
    pub fn mouse_press(&mut self, pos: ScreenPoint, pixel: Option<Rgba8>) -> InputState {
        if let Some(pixel) = pixel {
            self.resolve_pick(pixel);
        }
        self.input.mouse_press(self.selected.label_axis(), pos)
    }

    /// Handle pointer motion. Returns the dragged axis range, if any.
    pub fn mouse_move(&mut self, pos: ScreenPoint) -> Option<Range> {
        let rotation = self.camera.rotation();
        let axis = match self.input.state().axis() {
            AxisOrientation::X => Some(&mut self.x_axis),
            AxisOrientation::Y => Some(&mut self.y_axis),
            AxisOrientation::Z => Some(&mut self.z_axis),
            AxisOrientation::None => None,
        };
        self.input.mouse_move(pos, rotation, axis)
    }

    /// Handle a pointer release.
    pub fn mouse_release(&mut self) {
        self.input.mouse_release();
    }

    /// Zoom the configured axes by a wheel delta.
    pub fn wheel(&mut self, delta: f64) {
        for orientation in &self.input.zoom_config().axes {
            let axis = match orientation {
                AxisOrientation::X => &mut self.x_axis,
                AxisOrientation::Y => &mut self.y_axis,
                AxisOrientation::Z => &mut self.z_axis,
                AxisOrientation::None => continue,
            };
            self.input.wheel(delta, axis);
        }
    }

    /// Rotate the camera by a pointer delta unless an axis drag is active.
    pub fn rotate_camera(&mut self, delta: ScreenPoint, viewport: ScreenSize) {
        if self.input.state() == InputState::Idle {
            self.camera.rotate_by_pixels(delta, viewport);
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a graph before construction.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    x_axis: Option<Axis>,
    y_axis: Option<Axis>,
    z_axis: Option<Axis>,
    camera: Camera,
    config: GraphConfig,
    series: Vec<Series>,
    custom_items: Vec<CustomItem>,
}

impl GraphBuilder {
    /// Set the X axis.
    pub fn x_axis(mut self, axis: Axis) -> Self {
        self.x_axis = Some(axis);
        self
    }

    /// Set the Y axis.
    pub fn y_axis(mut self, axis: Axis) -> Self {
        self.y_axis = Some(axis);
        self
    }

    /// Set the Z axis.
    pub fn z_axis(mut self, axis: Axis) -> Self {
        self.z_axis = Some(axis);
        self
    }

    /// Set the camera.
    pub fn camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Set the interaction configuration.
    pub fn config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a series to the graph.
    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Add a custom item to the graph.
    pub fn custom_item(mut self, item: CustomItem) -> Self {
        self.custom_items.push(item);
        self
    }

    /// Build the graph.
    pub fn build(self) -> Graph {
        let mut x_axis = self.x_axis.unwrap_or_default();
        let mut y_axis = self.y_axis.unwrap_or_default();
        let mut z_axis = self.z_axis.unwrap_or_default();
        x_axis.set_orientation(AxisOrientation::X);
        y_axis.set_orientation(AxisOrientation::Y);
        z_axis.set_orientation(AxisOrientation::Z);
        Graph {
            x_axis,
            y_axis,
            z_axis,
            series: self.series,
            custom_items: self.custom_items,
            camera: self.camera,
            input: InputHandler::new(self.config.drag, self.config.zoom),
            resolver: SelectionResolver::new(),
            selection_dirty: true,
            selection_enabled: self.config.selection_enabled,
            selected: SelectedElement::None,
            observers: SelectionObservers::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{COLUMN_LABEL_ALPHA, SKIP_COLOR, custom_item_color, label_color};
    use crate::series::SeriesKind;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<SelectedElement>>);

    impl SelectionObserver for Recorder {
        fn selection_changed(&self, element: SelectedElement) {
            self.0.lock().expect("recorder lock").push(element);
        }
    }

    fn points(n: usize) -> Vec<Point3> {
        (0..n).map(|i| Point3::new(i as f64, 1.0, 0.0)).collect()
    }

    #[test]
    fn picks_resolve_after_selection_pass() {
        let a = Series::from_iter_points("a", points(5), SeriesKind::Bar);
        let b = Series::from_iter_points("b", points(3), SeriesKind::Bar);
        let b_id = b.id();
        let mut graph = Graph::builder().series(a).series(b).build();
        graph.prepare_selection_pass().unwrap();
        let element = graph.resolve_pick(index_to_color(6));
        assert_eq!(element, SelectedElement::Series { series: b_id, index: 1 });
        assert_eq!(graph.series_by_id(b_id).unwrap().selected_item(), Some(1));
    }

    #[test]
    fn hidden_series_shift_offsets() {
        let mut graph = Graph::new();
        let a = graph.add_series(Series::from_iter_points("a", points(5), SeriesKind::Scatter));
        let b = graph.add_series(Series::from_iter_points("b", points(3), SeriesKind::Scatter));
        graph.set_series_visible(a, false).unwrap();
        assert!(graph.is_selection_dirty());
        graph.prepare_selection_pass().unwrap();
        assert_eq!(graph.selection_color(b, 0), Some(index_to_color(0)));
        assert_eq!(graph.selection_color(a, 0), None);
        assert_eq!(
            graph.resolve_pick(index_to_color(2)),
            SelectedElement::Series { series: b, index: 2 }
        );
    }

    #[test]
    fn pick_on_series_hidden_after_pass_is_none() {
        let mut graph = Graph::new();
        graph.add_series(Series::from_iter_points("a", points(5), SeriesKind::Bar));
        let b = graph.add_series(Series::from_iter_points("b", points(3), SeriesKind::Bar));
        graph.prepare_selection_pass().unwrap();
        graph.set_series_visible(b, false).unwrap();
        assert_eq!(graph.resolve_pick(index_to_color(6)), SelectedElement::None);
        assert_eq!(graph.series_by_id(b).unwrap().selected_item(), None);
        assert_eq!(graph.selected_element(), SelectedElement::None);
    }

    #[test]
    fn observers_fire_only_on_change() {
        let recorder = Arc::new(Recorder::default());
        let mut graph = Graph::new();
        graph.add_selection_observer(recorder.clone());
        graph.add_custom_item(CustomItem::new(Point3::new(1.0, 1.0, 1.0)));
        graph.prepare_selection_pass().unwrap();
        graph.resolve_pick(custom_item_color(0));
        graph.resolve_pick(custom_item_color(0));
        graph.resolve_pick(SKIP_COLOR);
        let seen = recorder.0.lock().unwrap().clone();
        assert_eq!(seen, vec![SelectedElement::CustomItem(0), SelectedElement::None]);
    }

    #[test]
    fn out_of_range_custom_item_is_none() {
        let mut graph = Graph::new();
        assert_eq!(graph.resolve_pick(custom_item_color(3)), SelectedElement::None);
    }

    #[test]
    fn disabled_selection_ignores_picks() {
        let mut graph = Graph::builder()
            .config(GraphConfig {
                selection_enabled: false,
                ..GraphConfig::default()
            })
            .build();
        assert_eq!(
            graph.resolve_pick(label_color(COLUMN_LABEL_ALPHA, 0)),
            SelectedElement::None
        );
        assert_eq!(graph.selected_element(), SelectedElement::None);
    }

    #[test]
    fn removing_selected_series_clears_selection() {
        let mut graph = Graph::new();
        let id = graph.add_series(Series::from_iter_points("a", points(2), SeriesKind::Scatter));
        graph.prepare_selection_pass().unwrap();
        graph.resolve_pick(index_to_color(1));
        graph.remove_series(id).unwrap();
        assert_eq!(graph.selected_element(), SelectedElement::None);
        assert!(matches!(
            graph.remove_series(id),
            Err(GraphError::UnknownSeries(_))
        ));
    }

    #[test]
    fn auto_adjust_fits_visible_data() {
        let mut graph = Graph::new();
        graph.add_series(Series::from_iter_points(
            "a",
            [Point3::new(-2.0, 3.0, 5.0), Point3::new(4.0, 9.0, 5.0)],
            SeriesKind::Scatter,
        ));
        graph.update_auto_adjusted_ranges();
        assert_eq!(graph.x_axis().range(), Range::new(-2.0, 4.0));
        assert_eq!(graph.y_axis().range(), Range::new(3.0, 9.0));
        assert_eq!(graph.z_axis().range(), Range::new(5.0, 6.0));
        assert!(graph.x_axis().is_auto_adjust_range());
    }

    #[test]
    fn auto_adjust_skips_manual_axes() {
        let mut graph = Graph::new();
        graph.axis_mut(AxisOrientation::X).unwrap().set_range(0.0, 100.0);
        graph.add_series(Series::from_iter_points("a", points(3), SeriesKind::Scatter));
        graph.update_auto_adjusted_ranges();
        assert_eq!(graph.x_axis().range(), Range::new(0.0, 100.0));
    }

    #[test]
    fn category_axes_adjust_to_label_count() {
        let labels = ["a", "b", "c", "d"].map(String::from).to_vec();
        let mut graph = Graph::builder().x_axis(Axis::category(labels)).build();
        graph.add_series(Series::from_iter_points("a", points(2), SeriesKind::Bar));
        graph.update_auto_adjusted_ranges();
        assert_eq!(graph.x_axis().range(), Range::new(0.0, 3.0));
    }

    #[test]
    fn label_press_starts_drag_on_matching_axis() {
        let mut graph = Graph::new();
        graph.axis_mut(AxisOrientation::X).unwrap().set_range(0.0, 10.0);
        let state = graph.mouse_press(
            ScreenPoint::new(100.0, 100.0),
            Some(label_color(COLUMN_LABEL_ALPHA, 1)),
        );
        assert_eq!(state, InputState::DraggingX);
        let range = graph.mouse_move(ScreenPoint::new(120.0, 100.0)).expect("drag");
        assert_eq!(range, Range::new(-1.0, 9.0));
        graph.mouse_release();
        assert_eq!(graph.input().state(), InputState::Idle);
    }

    #[test]
    fn absolute_custom_items_skip_axis_mapping() {
        let mut graph = Graph::new();
        let index = graph.add_custom_item(CustomItem::absolute(Point3::new(0.5, 0.5, 0.5)));
        assert_eq!(
            graph.custom_item_scene_position(index),
            Some(Point3::new(0.5, 0.5, 0.5))
        );
        let index = graph.add_custom_item(CustomItem::new(Point3::new(10.0, 0.0, 5.0)));
        assert_eq!(
            graph.custom_item_scene_position(index),
            Some(Point3::new(1.0, -1.0, 0.0))
        );
    }
}
