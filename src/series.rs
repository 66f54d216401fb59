//! Data series configuration and storage.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::geom::Point3;
use crate::view::Range;

static SERIES_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(u64);

impl SeriesId {
    fn next() -> Self {
        Self(SERIES_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Series rendering kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// One bar per item.
    Bar,
    /// One point per item.
    Scatter,
    /// One surface vertex per item.
    Surface,
}

/// Per-axis extents of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3 {
    /// X extent.
    pub x: Range,
    /// Y extent.
    pub y: Range,
    /// Z extent.
    pub z: Range,
}

impl Bounds3 {
    fn from_point(point: Point3) -> Self {
        Self {
            x: Range::new(point.x, point.x),
            y: Range::new(point.y, point.y),
            z: Range::new(point.z, point.z),
        }
    }

    fn include(&mut self, point: Point3) {
        self.x.expand_to_include(point.x);
        self.y.expand_to_include(point.y);
        self.z.expand_to_include(point.z);
    }

    /// Union two bounds.
    pub fn union(a: Self, b: Self) -> Option<Self> {
        Some(Self {
            x: Range::union(a.x, b.x)?,
            y: Range::union(a.y, b.y)?,
            z: Range::union(a.z, b.z)?,
        })
    }
}

/// A named list of items drawn with one kind.
#[derive(Debug, Clone)]
pub struct Series {
    id: SeriesId,
    name: String,
    kind: SeriesKind,
    items: Vec<Point3>,
    visible: bool,
    selected_item: Option<usize>,
}

impl Series {
    /// Create an empty series.
    pub fn new(name: impl Into<String>, kind: SeriesKind) -> Self {
        Self {
            id: SeriesId::next(),
            name: name.into(),
            kind,
            items: Vec::new(),
            visible: true,
            selected_item: None,
        }
    }

    /// Create an empty scatter series.
    pub fn scatter(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::Scatter)
    }

    /// Create an empty bar series.
    pub fn bar(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::Bar)
    }

    /// Create an empty surface series.
    pub fn surface(name: impl Into<String>) -> Self {
        Self::new(name, SeriesKind::Surface)
    }

    /// Build a series from an iterator of points.
    pub fn from_iter_points<I>(name: impl Into<String>, iter: I, kind: SeriesKind) -> Self
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut series = Self::new(name, kind);
        series.items = iter.into_iter().collect();
        series
    }

    /// Access the series identifier.
    pub fn id(&self) -> SeriesId {
        self.id
    }

    /// Access the series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the series kind.
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    /// Access the items.
    pub fn items(&self) -> &[Point3] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the series holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace all items. Clears a selection that no longer fits.
    pub(crate) fn set_items(&mut self, items: Vec<Point3>) {
        self.items = items;
        if self.selected_item.is_some_and(|index| index >= self.items.len()) {
            self.selected_item = None;
        }
    }

    /// Append one item and return its index.
    pub(crate) fn push(&mut self, item: Point3) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Check if the series is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Selected item index.
    pub fn selected_item(&self) -> Option<usize> {
        self.selected_item
    }

    pub(crate) fn set_selected_item(&mut self, index: Option<usize>) {
        self.selected_item = index.filter(|index| *index < self.items.len());
    }

    /// Extents over finite items.
    pub fn bounds(&self) -> Option<Bounds3> {
        let mut finite = self.items.iter().copied().filter(Point3::is_finite);
        let mut bounds = Bounds3::from_point(finite.next()?);
        for point in finite {
            bounds.include(point);
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Series::scatter("a");
        let b = Series::scatter("b");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn bounds_skip_non_finite_items() {
        let series = Series::from_iter_points(
            "s",
            [
                Point3::new(1.0, 5.0, -2.0),
                Point3::new(f64::NAN, 0.0, 0.0),
                Point3::new(-3.0, 2.0, 4.0),
            ],
            SeriesKind::Scatter,
        );
        let bounds = series.bounds().expect("bounds");
        assert_eq!(bounds.x, Range::new(-3.0, 1.0));
        assert_eq!(bounds.y, Range::new(2.0, 5.0));
        assert_eq!(bounds.z, Range::new(-2.0, 4.0));
    }

    #[test]
    fn shrinking_items_drops_stale_selection() {
        let mut series = Series::from_iter_points(
            "s",
            (0..4).map(|i| Point3::new(i as f64, 0.0, 0.0)),
            SeriesKind::Scatter,
        );
        series.set_selected_item(Some(3));
        assert_eq!(series.selected_item(), Some(3));
        series.set_items(vec![Point3::default()]);
        assert_eq!(series.selected_item(), None);
    }
}
