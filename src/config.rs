//! Interaction configuration.

use serde::{Deserialize, Serialize};

use crate::axis::AxisOrientation;
use crate::error::{GraphError, Result};
use crate::view::Range;

/// Axis label dragging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Pixels per data unit; larger values drag more slowly.
    pub speed_modifier: f64,
    /// Outer bound for the X axis window while dragging.
    pub area_x: Option<Range>,
    /// Outer bound for the Y axis window while dragging.
    pub area_y: Option<Range>,
    /// Outer bound for the Z axis window while dragging.
    pub area_z: Option<Range>,
}

impl DragConfig {
    /// Drag bound for an axis.
    pub fn area(&self, axis: AxisOrientation) -> Option<Range> {
        match axis {
            AxisOrientation::X => self.area_x,
            AxisOrientation::Y => self.area_y,
            AxisOrientation::Z => self.area_z,
            AxisOrientation::None => None,
        }
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            speed_modifier: 20.0,
            area_x: None,
            area_y: None,
            area_z: None,
        }
    }
}

/// Wheel zoom settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Data units added to each side per wheel unit.
    pub step: f64,
    /// Outer bound for zoomed windows; unbounded when absent.
    pub area: Option<Range>,
    /// Narrowest allowed window.
    pub min_span: f64,
    /// Axes the wheel zooms.
    pub axes: Vec<AxisOrientation>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: 1.0,
            area: None,
            min_span: 1.0,
            axes: vec![AxisOrientation::X, AxisOrientation::Z],
        }
    }
}

/// Graph interaction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Axis dragging.
    pub drag: DragConfig,
    /// Wheel zoom.
    pub zoom: ZoomConfig,
    /// Resolve picks into series selections.
    pub selection_enabled: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            drag: DragConfig::default(),
            zoom: ZoomConfig::default(),
            selection_enabled: true,
        }
    }
}

impl GraphConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.drag.speed_modifier.is_finite() && self.drag.speed_modifier > 0.0) {
            return Err(GraphError::InvalidConfig(format!(
                "drag speed modifier must be positive, got {}",
                self.drag.speed_modifier
            )));
        }
        if !(self.zoom.min_span.is_finite() && self.zoom.min_span > 0.0) {
            return Err(GraphError::InvalidConfig(format!(
                "zoom min span must be positive, got {}",
                self.zoom.min_span
            )));
        }
        if !self.zoom.step.is_finite() {
            return Err(GraphError::InvalidConfig("zoom step must be finite".into()));
        }
        let areas = [
            ("drag.area_x", self.drag.area_x),
            ("drag.area_y", self.drag.area_y),
            ("drag.area_z", self.drag.area_z),
            ("zoom.area", self.zoom.area),
        ];
        for (name, area) in areas {
            if let Some(area) = area
                && !area.is_valid()
            {
                return Err(GraphError::InvalidConfig(format!(
                    "{name} must have min < max, got [{}, {}]",
                    area.min, area.max
                )));
            }
        }
        Ok(())
    }
}
