//! Value formatters mapping axis values into the unit interval, plus tick layout.

use std::sync::Arc;

use crate::error::{GraphError, Result};
use crate::view::Range;

const EDGE_EPSILON: f64 = 1e-9;

/// Logarithmic formatter settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogFormatter {
    base: f64,
    auto_sub_grid: bool,
    show_edge_labels: bool,
}

impl LogFormatter {
    /// Create a log formatter. A base of zero selects the natural logarithm.
    pub fn new(base: f64) -> Result<Self> {
        if !base.is_finite() || base < 0.0 || base == 1.0 {
            return Err(GraphError::LogBase(base));
        }
        Ok(Self {
            base,
            auto_sub_grid: true,
            show_edge_labels: true,
        })
    }

    /// Base-10 formatter.
    pub fn base10() -> Self {
        Self {
            base: 10.0,
            auto_sub_grid: true,
            show_edge_labels: true,
        }
    }

    /// Set whether sub grid lines follow the integer multiples of each power.
    pub fn with_auto_sub_grid(mut self, enabled: bool) -> Self {
        self.auto_sub_grid = enabled;
        self
    }

    /// Set whether labels are drawn at range edges that are not powers of the base.
    pub fn with_show_edge_labels(mut self, enabled: bool) -> Self {
        self.show_edge_labels = enabled;
        self
    }

    /// Logarithm base; zero means natural log.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Whether automatic sub grid is enabled.
    pub fn auto_sub_grid(&self) -> bool {
        self.auto_sub_grid
    }

    /// Whether edge labels are shown.
    pub fn show_edge_labels(&self) -> bool {
        self.show_edge_labels
    }

    fn ln_base(&self) -> f64 {
        if self.base == 0.0 { 1.0 } else { self.base.ln() }
    }

    fn log(&self, value: f64) -> f64 {
        value.ln() / self.ln_base()
    }

    fn exp(&self, value: f64) -> f64 {
        (value * self.ln_base()).exp()
    }

    fn log_range(&self, range: Range) -> (f64, f64) {
        let log_min = self.log(range.min);
        let log_max = self.log(range.max);
        (log_min, log_max - log_min)
    }
}

/// Monotonic mapping from an axis range into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ValueFormatter {
    /// Linear interpolation between min and max.
    #[default]
    Linear,
    /// Logarithmic interpolation.
    Log(LogFormatter),
}

impl ValueFormatter {
    /// Whether this formatter accepts negative range bounds.
    pub fn allows_negatives(&self) -> bool {
        matches!(self, Self::Linear)
    }

    /// Whether this formatter accepts a zero range bound.
    pub fn allows_zero(&self) -> bool {
        matches!(self, Self::Linear)
    }

    /// Map a value into the unit interval for the given range.
    pub fn position_at(&self, value: f64, range: Range) -> f64 {
        match self {
            Self::Linear => (value - range.min) / range.span(),
            Self::Log(log) => {
                let (log_min, normalizer) = log.log_range(range);
                (log.log(value) - log_min) / normalizer
            }
        }
    }

    /// Map a unit-interval position back into a value.
    pub fn value_at(&self, position: f64, range: Range) -> f64 {
        match self {
            Self::Linear => position * range.span() + range.min,
            Self::Log(log) => {
                let (log_min, normalizer) = log.log_range(range);
                log.exp(position * normalizer + log_min)
            }
        }
    }

    /// Lay out grid lines and labels for the range.
    pub fn ticks(
        &self,
        range: Range,
        segment_count: usize,
        sub_segment_count: usize,
        labels: &LabelFormatter,
    ) -> AxisTicks {
        let segment_count = segment_count.max(1);
        let sub_grid_count = sub_segment_count.max(1) - 1;
        let mut ticks = match self {
            Self::Log(log) if log.auto_sub_grid && log.base > 0.0 => log_power_ticks(log, range),
            _ => self.even_ticks(range, segment_count, sub_grid_count),
        };
        if let Self::Log(log) = self
            && !log.show_edge_labels
        {
            drop_edge_labels(log, &mut ticks);
        }
        ticks.labels = ticks
            .label_values
            .iter()
            .map(|value| labels.format(*value))
            .collect();
        ticks
    }

    fn even_ticks(&self, range: Range, segment_count: usize, sub_grid_count: usize) -> AxisTicks {
        let segment_step = 1.0 / segment_count as f64;
        let sub_step = segment_step / (sub_grid_count + 1) as f64;
        let mut ticks = AxisTicks::default();
        for i in 0..segment_count {
            let position = segment_step * i as f64;
            ticks.grid_positions.push(position);
            ticks.label_positions.push(position);
            ticks.label_values.push(self.value_at(position, range));
            for j in 0..sub_grid_count {
                ticks.sub_grid_positions.push(position + sub_step * (j + 1) as f64);
            }
        }
        ticks.grid_positions.push(1.0);
        ticks.label_positions.push(1.0);
        ticks.label_values.push(range.max);
        ticks
    }
}

fn log_power_ticks(log: &LogFormatter, range: Range) -> AxisTicks {
    let formatter = ValueFormatter::Log(*log);
    let (log_min, normalizer) = log.log_range(range);
    let log_max = log_min + normalizer;
    let mut ticks = AxisTicks::default();

    let push_grid = |ticks: &mut AxisTicks, value: f64| {
        let position = formatter.position_at(value, range);
        ticks.grid_positions.push(position);
        ticks.label_positions.push(position);
        ticks.label_values.push(value);
    };

    let first_power = (log_min - EDGE_EPSILON).ceil();
    let last_power = (log_max + EDGE_EPSILON).floor();
    if first_power - log_min > EDGE_EPSILON {
        push_grid(&mut ticks, range.min);
    }
    let mut power = first_power;
    while power <= last_power {
        push_grid(&mut ticks, log.base.powi(power as i32));
        power += 1.0;
    }
    if log_max - last_power > EDGE_EPSILON {
        push_grid(&mut ticks, range.max);
    }

    let multiples = log.base.ceil() as usize;
    let mut decade = (log_min + EDGE_EPSILON).floor();
    while decade <= log_max {
        let start = log.base.powi(decade as i32);
        for k in 2..multiples {
            let value = start * k as f64;
            if value > range.min && value < range.max {
                ticks
                    .sub_grid_positions
                    .push(formatter.position_at(value, range));
            }
        }
        decade += 1.0;
    }
    ticks
}

fn drop_edge_labels(log: &LogFormatter, ticks: &mut AxisTicks) {
    let (positions, values): (Vec<f64>, Vec<f64>) = ticks
        .label_positions
        .iter()
        .zip(&ticks.label_values)
        .filter(|(position, value)| {
            let at_edge = **position <= EDGE_EPSILON || **position >= 1.0 - EDGE_EPSILON;
            let exponent = log.log(**value);
            !at_edge || (exponent - exponent.round()).abs() <= EDGE_EPSILON
        })
        .map(|(position, value)| (*position, *value))
        .unzip();
    ticks.label_positions = positions;
    ticks.label_values = values;
}

/// Grid and label layout in unit-interval coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisTicks {
    /// Major grid line positions.
    pub grid_positions: Vec<f64>,
    /// Minor grid line positions.
    pub sub_grid_positions: Vec<f64>,
    /// Label anchor positions.
    pub label_positions: Vec<f64>,
    /// Axis values at each label.
    pub label_values: Vec<f64>,
    /// Formatted label strings.
    pub labels: Vec<String>,
}

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum LabelFormatter {
    /// Two-decimal numeric formatter.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl LabelFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => format!("{value:.2}"),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "LabelFormatter::Default"),
            Self::Custom(_) => write!(f, "LabelFormatter::Custom(..)"),
        }
    }
}
