//! Numeric ranges and window clamping.

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range.
    pub fn center(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Union two ranges if both are finite.
    pub fn union(a: Self, b: Self) -> Option<Self> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        Some(Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        })
    }

    /// Shift both bounds by the same amount.
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Ensure the range has at least the given span.
    pub fn with_min_span(&self, min_span: f64) -> Self {
        let span = self.span();
        if span >= min_span {
            return *self;
        }
        let center = self.center();
        let half = min_span * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Move the window back inside `area` while keeping its width.
    ///
    /// A window wider than the area collapses onto the area itself.
    pub fn clamped_into(&self, area: Range) -> Self {
        let width = self.span();
        if width >= area.span() {
            return area;
        }
        if self.min < area.min {
            Self {
                min: area.min,
                max: area.min + width,
            }
        } else if self.max > area.max {
            Self {
                min: area.max - width,
                max: area.max,
            }
        } else {
            *self
        }
    }

    /// Intersect the bounds with `area` independently.
    pub fn intersected(&self, area: Range) -> Self {
        Self {
            min: self.min.max(area.min),
            max: self.max.min(area.max),
        }
    }
}
