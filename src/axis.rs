//! Axis range control and value-to-scene mapping.
//!
//! An [`Axis`] owns a `[min, max]` domain and keeps it valid under any
//! sequence of setter calls. Invalid input is corrected in place and logged;
//! no setter fails.

use std::sync::Arc;

use tracing::warn;

use crate::formatter::{AxisTicks, LabelFormatter, ValueFormatter};
use crate::view::Range;

const DEFAULT_SCALE: f64 = 2.0;
const DEFAULT_TRANSLATE: f64 = -1.0;

/// Scene direction an axis is attached to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum AxisOrientation {
    /// Not attached to a graph.
    #[default]
    None,
    /// Horizontal axis (bar columns).
    X,
    /// Vertical axis (bar values).
    Y,
    /// Depth axis (bar rows).
    Z,
}

/// Axis flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    /// Continuous value axis.
    Value,
    /// Labelled category axis indexed by row or column.
    Category,
}

/// Which range bounds an axis accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisConstraints {
    /// Negative bounds are accepted.
    pub allow_negatives: bool,
    /// A zero bound is accepted when negatives are not.
    pub allow_zero: bool,
    /// `min == max` is a valid range.
    pub allow_min_max_same: bool,
}

impl AxisConstraints {
    /// Constraints for a value axis using the given formatter.
    pub fn for_formatter(formatter: &ValueFormatter) -> Self {
        Self {
            allow_negatives: formatter.allows_negatives(),
            allow_zero: formatter.allows_zero(),
            allow_min_max_same: false,
        }
    }

    /// Constraints for a category axis.
    pub fn category() -> Self {
        Self {
            allow_negatives: false,
            allow_zero: true,
            allow_min_max_same: true,
        }
    }

    /// Whether bounds are restricted to non-negative values.
    pub fn only_positive_values(&self) -> bool {
        !self.allow_negatives
    }

    fn is_ordered(&self, min: f64, max: f64) -> bool {
        if self.allow_min_max_same {
            min <= max
        } else {
            min < max
        }
    }

    /// Half-line a panned or zoomed window must stay in.
    ///
    /// Axes that forbid zero keep their current minimum when it is already below 1.
    fn allowed_window(&self, current_min: f64) -> Range {
        let min = if self.allow_negatives {
            f64::NEG_INFINITY
        } else if self.allow_zero {
            0.0
        } else {
            current_min.min(1.0)
        };
        Range {
            min,
            max: f64::INFINITY,
        }
    }

    /// Clamp a bound into the allowed half-line. Returns the value and whether it moved.
    fn clamp_bound(&self, value: f64) -> (f64, bool) {
        if self.allow_negatives {
            (value, false)
        } else if self.allow_zero {
            if value < 0.0 { (0.0, true) } else { (value, false) }
        } else if value <= 0.0 {
            (1.0, true)
        } else {
            (value, false)
        }
    }
}

/// Outcome of a range mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeUpdate {
    /// At least one bound changed.
    pub changed: bool,
    /// The requested bounds were invalid and got corrected.
    pub adjusted: bool,
}

/// Receives axis change notifications.
pub trait AxisObserver: Send + Sync {
    /// Called after either bound changed.
    fn range_changed(&self, orientation: AxisOrientation, range: Range);

    /// Called when automatic range adjustment is toggled.
    fn auto_adjust_changed(&self, _orientation: AxisOrientation, _enabled: bool) {}
}

#[derive(Clone, Default)]
struct Observers(Vec<Arc<dyn AxisObserver>>);

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observers({})", self.0.len())
    }
}

/// A graph axis: validated range, formatter, and scene mapping.
#[derive(Debug, Clone)]
pub struct Axis {
    kind: AxisKind,
    orientation: AxisOrientation,
    title: Option<String>,
    labels: Vec<String>,
    min: f64,
    max: f64,
    auto_adjust: bool,
    constraints: AxisConstraints,
    formatter: ValueFormatter,
    label_formatter: LabelFormatter,
    reversed: bool,
    segment_count: usize,
    sub_segment_count: usize,
    scale: f64,
    translate: f64,
    observers: Observers,
}

impl Axis {
    fn with_kind(kind: AxisKind, constraints: AxisConstraints, max: f64) -> Self {
        Self {
            kind,
            orientation: AxisOrientation::None,
            title: None,
            labels: Vec::new(),
            min: 0.0,
            max,
            auto_adjust: true,
            constraints,
            formatter: ValueFormatter::Linear,
            label_formatter: LabelFormatter::default(),
            reversed: false,
            segment_count: 5,
            sub_segment_count: 1,
            scale: DEFAULT_SCALE,
            translate: DEFAULT_TRANSLATE,
            observers: Observers::default(),
        }
    }

    /// Create a linear value axis spanning `[0, 10]` with auto adjust enabled.
    pub fn value() -> Self {
        Self::with_kind(
            AxisKind::Value,
            AxisConstraints::for_formatter(&ValueFormatter::Linear),
            10.0,
        )
    }

    /// Create a category axis with the given labels.
    pub fn category(labels: Vec<String>) -> Self {
        let max = labels.len().saturating_sub(1) as f64;
        let mut axis = Self::with_kind(AxisKind::Category, AxisConstraints::category(), max);
        axis.labels = labels;
        axis
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the value formatter.
    pub fn with_formatter(mut self, formatter: ValueFormatter) -> Self {
        self.set_formatter(formatter);
        self
    }

    /// Set the label formatter.
    pub fn with_label_formatter(mut self, formatter: LabelFormatter) -> Self {
        self.label_formatter = formatter;
        self
    }

    /// Axis flavor.
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    /// Orientation assigned by the owning graph.
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    pub(crate) fn set_orientation(&mut self, orientation: AxisOrientation) {
        self.orientation = orientation;
    }

    /// Axis title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the axis title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Category labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Replace the category labels.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }

    /// Current minimum.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Current maximum.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Current domain.
    pub fn range(&self) -> Range {
        Range {
            min: self.min,
            max: self.max,
        }
    }

    /// Active range constraints.
    pub fn constraints(&self) -> AxisConstraints {
        self.constraints
    }

    /// Region a dragged or zoomed window can move in without its bounds being clamped.
    pub fn allowed_window(&self) -> Range {
        self.constraints.allowed_window(self.min)
    }

    /// Active value formatter.
    pub fn formatter(&self) -> &ValueFormatter {
        &self.formatter
    }

    /// Whether the range follows the data extents.
    pub fn is_auto_adjust_range(&self) -> bool {
        self.auto_adjust
    }

    /// Register a change observer.
    pub fn add_observer(&mut self, observer: Arc<dyn AxisObserver>) {
        self.observers.0.push(observer);
    }

    /// Enable or disable automatic range adjustment.
    pub fn set_auto_adjust_range(&mut self, enabled: bool) {
        if self.auto_adjust == enabled {
            return;
        }
        self.auto_adjust = enabled;
        for observer in &self.observers.0 {
            observer.auto_adjust_changed(self.orientation, enabled);
        }
    }

    /// Set both bounds. Disables auto adjust.
    pub fn set_range(&mut self, min: f64, max: f64) -> RangeUpdate {
        let update = self.apply_range(min, max, false);
        self.set_auto_adjust_range(false);
        update
    }

    /// Apply a range derived from data extents without touching auto adjust.
    pub fn adjust_to_data(&mut self, range: Range) -> RangeUpdate {
        self.apply_range(range.min, range.max, true)
    }

    fn apply_range(
        &mut self,
        requested_min: f64,
        requested_max: f64,
        suppress_warnings: bool,
    ) -> RangeUpdate {
        let (min, min_clamped) = self.constraints.clamp_bound(requested_min);
        let (max, max_clamped) = self.constraints.clamp_bound(requested_max);
        let mut adjusted = min_clamped || max_clamped;

        let mut changed = false;
        if self.min != min {
            self.min = min;
            changed = true;
        }
        let ordered = self.constraints.is_ordered(min, max);
        if !ordered {
            self.max = min + 1.0;
            adjusted = true;
            changed = true;
        } else if self.max != max {
            self.max = max;
            changed = true;
        }

        if changed {
            if adjusted && !suppress_warnings {
                warn!(
                    requested_min,
                    requested_max,
                    min = self.min,
                    max = self.max,
                    "invalid axis range adjusted"
                );
            }
            self.notify_range();
        }
        RangeUpdate { changed, adjusted }
    }

    /// Set the minimum, pushing the maximum up if needed. Disables auto adjust.
    pub fn set_min(&mut self, min: f64) -> RangeUpdate {
        let (min, mut adjusted) = self.constraints.clamp_bound(min);
        if adjusted {
            warn!(min, "axis minimum clamped to allowed bound");
        }
        let mut changed = false;
        if self.min != min {
            if !self.constraints.is_ordered(min, self.max) {
                let old_max = self.max;
                self.max = min + 1.0;
                adjusted = true;
                warn!(old_max, max = self.max, "axis maximum pushed above new minimum");
            }
            self.min = min;
            changed = true;
            self.notify_range();
        }
        self.set_auto_adjust_range(false);
        RangeUpdate { changed, adjusted }
    }

    /// Set the maximum, pushing the minimum down if needed. Disables auto adjust.
    pub fn set_max(&mut self, max: f64) -> RangeUpdate {
        let (max, mut adjusted) = self.constraints.clamp_bound(max);
        if adjusted {
            warn!(max, "axis maximum clamped to allowed bound");
        }
        let mut changed = false;
        if self.max != max {
            if !self.constraints.is_ordered(self.min, max) {
                let old_min = self.min;
                let mut min = max - 1.0;
                if self.constraints.only_positive_values() && min < 0.0 {
                    min = if self.constraints.allow_zero { 0.0 } else { max / 2.0 };
                    if !self.constraints.allow_min_max_same && max == 0.0 {
                        warn!("axis maximum cannot be zero");
                        self.set_auto_adjust_range(false);
                        return RangeUpdate {
                            changed: false,
                            adjusted: true,
                        };
                    }
                }
                self.min = min;
                adjusted = true;
                warn!(old_min, min = self.min, "axis minimum pushed below new maximum");
            }
            self.max = max;
            changed = true;
            self.notify_range();
        }
        self.set_auto_adjust_range(false);
        RangeUpdate { changed, adjusted }
    }

    /// Replace the value formatter and revalidate the current range.
    pub fn set_formatter(&mut self, formatter: ValueFormatter) {
        if self.kind == AxisKind::Category {
            warn!("category axes use linear placement; formatter ignored");
            return;
        }
        self.formatter = formatter;
        self.constraints = AxisConstraints::for_formatter(&self.formatter);
        self.apply_range(self.min, self.max, true);
    }

    /// Replace the label formatter.
    pub fn set_label_formatter(&mut self, formatter: LabelFormatter) {
        self.label_formatter = formatter;
    }

    /// Whether positions are mirrored.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Mirror positions so that `max` maps to the start of the axis.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Number of major grid segments.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Set the number of major grid segments (at least one).
    pub fn set_segment_count(&mut self, count: usize) {
        if count == 0 {
            warn!("segment count must be at least one");
        }
        self.segment_count = count.max(1);
    }

    /// Number of sub segments per segment.
    pub fn sub_segment_count(&self) -> usize {
        self.sub_segment_count
    }

    /// Set the number of sub segments per segment (at least one).
    pub fn set_sub_segment_count(&mut self, count: usize) {
        if count == 0 {
            warn!("sub segment count must be at least one");
        }
        self.sub_segment_count = count.max(1);
    }

    /// Scale applied after the formatter step.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Translation applied after scaling.
    pub fn translate(&self) -> f64 {
        self.translate
    }

    /// Set the affine mapping from formatter output into scene space.
    pub fn set_scale_translate(&mut self, scale: f64, translate: f64) {
        if scale == 0.0 || !scale.is_finite() {
            warn!(scale, "axis scale must be finite and non-zero");
            return;
        }
        self.scale = scale;
        self.translate = translate;
    }

    /// Formatter position of a value in `[0, 1]` for values inside the range.
    pub fn formatter_position(&self, value: f64) -> f64 {
        let range = self.range();
        if range.span() <= 0.0 {
            return 0.0;
        }
        let position = self.formatter.position_at(value, range);
        if self.reversed { 1.0 - position } else { position }
    }

    /// Normalized scene position of a value.
    pub fn position_at(&self, value: f64) -> f64 {
        self.formatter_position(value) * self.scale + self.translate
    }

    /// Value at a normalized scene position.
    pub fn value_at(&self, position: f64) -> f64 {
        let mut unit = (position - self.translate) / self.scale;
        if self.reversed {
            unit = 1.0 - unit;
        }
        self.formatter.value_at(unit, self.range())
    }

    /// Grid and label layout for the current range.
    pub fn ticks(&self) -> AxisTicks {
        if self.kind == AxisKind::Category {
            return self.category_ticks();
        }
        let mut ticks = self.formatter.ticks(
            self.range(),
            self.segment_count,
            self.sub_segment_count,
            &self.label_formatter,
        );
        if self.reversed {
            for position in ticks
                .grid_positions
                .iter_mut()
                .chain(ticks.sub_grid_positions.iter_mut())
                .chain(ticks.label_positions.iter_mut())
            {
                *position = 1.0 - *position;
            }
        }
        ticks
    }

    fn category_ticks(&self) -> AxisTicks {
        let mut ticks = AxisTicks::default();
        let first = self.min.ceil().max(0.0) as usize;
        let last = self.max.floor().max(0.0) as usize;
        for index in first..=last {
            let Some(label) = self.labels.get(index) else {
                break;
            };
            let position = self.formatter_position(index as f64);
            ticks.label_positions.push(position);
            ticks.label_values.push(index as f64);
            ticks.labels.push(label.clone());
        }
        ticks
    }

    fn notify_range(&self) {
        let range = self.range();
        for observer in &self.observers.0 {
            observer.range_changed(self.orientation, range);
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::value()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::camera::CameraRotation;
    use crate::formatter::LogFormatter;
    use crate::geom::ScreenPoint;
    use crate::interaction::{apply_drag, apply_zoom};
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct Recorder {
        ranges: Mutex<Vec<Range>>,
        auto: Mutex<Vec<bool>>,
    }

    impl AxisObserver for Recorder {
        fn range_changed(&self, _orientation: AxisOrientation, range: Range) {
            self.ranges.lock().unwrap().push(range);
        }

        fn auto_adjust_changed(&self, _orientation: AxisOrientation, enabled: bool) {
            self.auto.lock().unwrap().push(enabled);
        }
    }

    fn positive_axis() -> Axis {
        let mut axis = Axis::category(vec!["a".into(); 11]);
        axis.set_range(0.0, 10.0);
        axis
    }

    #[test]
    fn set_min_above_max_pushes_max() {
        let mut axis = Axis::value();
        axis.set_range(-20.0, 20.0);
        let update = axis.set_min(25.0);
        assert_eq!(axis.range(), Range::new(25.0, 26.0));
        assert!(update.changed);
        assert!(update.adjusted);
    }

    #[test]
    fn set_min_negative_on_positive_axis_clamps() {
        let mut axis = positive_axis();
        let update = axis.set_min(-5.0);
        assert_eq!(axis.min(), 0.0);
        assert_eq!(axis.max(), 10.0);
        assert!(update.adjusted);
        assert!(!update.changed);
    }

    #[test]
    fn set_range_inverted_forces_unit_span() {
        let mut axis = Axis::value();
        let update = axis.set_range(5.0, 2.0);
        assert_eq!(axis.range(), Range::new(5.0, 6.0));
        assert!(update.adjusted);
    }

    #[test]
    fn set_range_equal_bounds_on_category_axis_is_valid() {
        let mut axis = positive_axis();
        let update = axis.set_range(3.0, 3.0);
        assert_eq!(axis.range(), Range { min: 3.0, max: 3.0 });
        assert!(!update.adjusted);
    }

    #[test]
    fn set_range_clamps_negative_bounds_on_positive_axis() {
        let mut axis = positive_axis();
        axis.set_range(-4.0, -1.0);
        assert_eq!(axis.min(), 0.0);
        assert_eq!(axis.max(), 0.0);
    }

    #[test]
    fn set_max_below_min_pushes_min() {
        let mut axis = Axis::value();
        axis.set_range(10.0, 20.0);
        let update = axis.set_max(5.0);
        assert_eq!(axis.range(), Range::new(4.0, 5.0));
        assert!(update.adjusted);
    }

    #[test]
    fn set_max_on_log_axis_keeps_min_positive() {
        let mut axis = Axis::value().with_formatter(ValueFormatter::Log(LogFormatter::base10()));
        axis.set_range(1.0, 100.0);
        axis.set_range(2.0, 100.0);
        axis.set_max(0.8);
        assert!(axis.min() > 0.0);
        assert!(axis.min() < axis.max());
        assert_relative_eq!(axis.min(), 0.4);
    }

    #[test]
    fn log_axis_replaces_non_positive_bounds() {
        let mut axis = Axis::value().with_formatter(ValueFormatter::Log(LogFormatter::base10()));
        axis.set_range(-10.0, 100.0);
        assert_eq!(axis.min(), 1.0);
        assert_eq!(axis.max(), 100.0);
    }

    #[test]
    fn switching_to_log_revalidates_range() {
        let mut axis = Axis::value();
        axis.set_range(-5.0, 50.0);
        axis.set_formatter(ValueFormatter::Log(LogFormatter::base10()));
        assert_eq!(axis.range(), Range::new(1.0, 50.0));
        assert!(axis.constraints().only_positive_values());
    }

    #[test]
    fn explicit_setters_disable_auto_adjust() {
        let mut axis = Axis::value();
        assert!(axis.is_auto_adjust_range());
        axis.set_max(42.0);
        assert!(!axis.is_auto_adjust_range());

        axis.set_auto_adjust_range(true);
        axis.adjust_to_data(Range::new(1.0, 2.0));
        assert!(axis.is_auto_adjust_range());
        assert_eq!(axis.range(), Range::new(1.0, 2.0));
    }

    #[test]
    fn observers_fire_only_on_change() {
        let recorder = Arc::new(Recorder::default());
        let mut axis = Axis::value();
        axis.add_observer(recorder.clone());

        axis.set_range(0.0, 10.0);
        axis.set_range(0.0, 20.0);
        axis.set_range(0.0, 20.0);

        assert_eq!(*recorder.ranges.lock().unwrap(), vec![Range::new(0.0, 20.0)]);
        assert_eq!(*recorder.auto.lock().unwrap(), vec![false]);
    }

    #[test]
    fn positions_follow_formatter_scale_and_translate() {
        let mut axis = Axis::value();
        axis.set_range(-20.0, 20.0);
        assert_relative_eq!(axis.formatter_position(-20.0), 0.0);
        assert_relative_eq!(axis.formatter_position(20.0), 1.0);
        assert_relative_eq!(axis.position_at(-20.0), -1.0);
        assert_relative_eq!(axis.position_at(20.0), 1.0);
        assert_relative_eq!(axis.position_at(0.0), 0.0);

        axis.set_scale_translate(1.0, 0.0);
        assert_relative_eq!(axis.position_at(10.0), 0.75);
        assert_relative_eq!(axis.value_at(0.75), 10.0);
    }

    #[test]
    fn reversed_axis_mirrors_positions() {
        let mut axis = Axis::value();
        axis.set_range(0.0, 4.0);
        axis.set_reversed(true);
        assert_relative_eq!(axis.formatter_position(0.0), 1.0);
        assert_relative_eq!(axis.formatter_position(1.0), 0.75);
        assert_relative_eq!(axis.value_at(axis.position_at(3.0)), 3.0);
    }

    #[test]
    fn zero_scale_is_rejected() {
        let mut axis = Axis::value();
        axis.set_scale_translate(0.0, 5.0);
        assert_eq!(axis.scale(), 2.0);
        assert_eq!(axis.translate(), -1.0);
    }

    #[test]
    fn category_ticks_use_labels() {
        let mut axis = Axis::category(vec!["Jan".into(), "Feb".into(), "Mar".into()]);
        axis.set_range(1.0, 2.0);
        let ticks = axis.ticks();
        assert_eq!(ticks.labels, vec!["Feb".to_string(), "Mar".to_string()]);
        assert_relative_eq!(ticks.label_positions[0], 0.0);
        assert_relative_eq!(ticks.label_positions[1], 1.0);
    }

    fn check_invariants(axis: &Axis) {
        assert!(axis.min().is_finite() && axis.max().is_finite());
        if axis.constraints().allow_min_max_same {
            assert!(axis.min() <= axis.max());
        } else {
            assert!(axis.min() < axis.max());
        }
        if axis.constraints().only_positive_values() {
            assert!(axis.min() >= 0.0);
        }
        if !axis.constraints().allow_zero && axis.constraints().only_positive_values() {
            assert!(axis.min() > 0.0);
        }
    }

    #[test]
    fn range_invariants_hold_for_mixed_setter_sequences() {
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 2001) as f64 / 10.0 - 100.0
        };
        let mut value_axis = Axis::value();
        let mut log_axis =
            Axis::value().with_formatter(ValueFormatter::Log(LogFormatter::base10()));
        let mut positive = positive_axis();
        for step in 0..1000 {
            for axis in [&mut value_axis, &mut log_axis, &mut positive] {
                let bounded = step % 2 == 0;
                let area = Range::new(next(), next());
                match step % 5 {
                    0 => {
                        axis.set_range(next(), next());
                    }
                    1 => {
                        axis.set_min(next());
                    }
                    2 => {
                        axis.set_max(next());
                    }
                    3 => {
                        let before = axis.range();
                        let after = apply_drag(
                            axis,
                            AxisOrientation::X,
                            ScreenPoint::new(next() as f32, 0.0),
                            CameraRotation::default(),
                            20.0,
                            bounded.then_some(area),
                        );
                        if !bounded {
                            assert_relative_eq!(after.span(), before.span(), epsilon = 1e-6);
                        }
                    }
                    _ => {
                        let area = if bounded {
                            area
                        } else {
                            Range::new(f64::MIN, f64::MAX)
                        };
                        apply_zoom(axis, next() / 10.0, area, 0.5);
                    }
                }
                check_invariants(axis);
            }
        }
    }
}
