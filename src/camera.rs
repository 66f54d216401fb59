//! Scene camera rotation state and presets.

use tracing::warn;

use crate::geom::{ScreenPoint, ScreenSize};

/// Degrees of rotation per viewport extent when rotating with the pointer.
const ROTATION_SPEED: f64 = 100.0;

/// Camera orientation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraRotation {
    /// Rotation around the vertical axis.
    pub horizontal: f64,
    /// Elevation; negative values look at the scene from below.
    pub vertical: f64,
}

impl CameraRotation {
    /// Create a rotation from horizontal and vertical angles.
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Predefined camera positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraPreset {
    /// Front view at eye level.
    FrontLow,
    /// Front view from slightly above.
    Front,
    /// Front view from 45 degrees above.
    FrontHigh,
    /// Left side view at eye level.
    LeftLow,
    /// Left side view from slightly above.
    Left,
    /// Left side view from 45 degrees above.
    LeftHigh,
    /// Right side view at eye level.
    RightLow,
    /// Right side view from slightly above.
    Right,
    /// Right side view from 45 degrees above.
    RightHigh,
    /// Rear view at eye level.
    BehindLow,
    /// Rear view from slightly above.
    Behind,
    /// Rear view from 45 degrees above.
    BehindHigh,
    /// Front left corner from slightly above.
    IsometricLeft,
    /// Front left corner from 45 degrees above.
    IsometricLeftHigh,
    /// Front right corner from slightly above.
    IsometricRight,
    /// Front right corner from 45 degrees above.
    IsometricRightHigh,
    /// Top-down view.
    DirectlyAbove,
    /// Top-down view turned 45 degrees clockwise.
    DirectlyAboveCw45,
    /// Top-down view turned 45 degrees counterclockwise.
    DirectlyAboveCcw45,
    /// Front view from 45 degrees below.
    FrontBelow,
    /// Left side view from 45 degrees below.
    LeftBelow,
    /// Right side view from 45 degrees below.
    RightBelow,
    /// Rear view from 45 degrees below.
    BehindBelow,
    /// Bottom-up view.
    DirectlyBelow,
}

impl CameraPreset {
    /// All presets in cycling order.
    pub const ALL: [CameraPreset; 24] = [
        Self::FrontLow,
        Self::Front,
        Self::FrontHigh,
        Self::LeftLow,
        Self::Left,
        Self::LeftHigh,
        Self::RightLow,
        Self::Right,
        Self::RightHigh,
        Self::BehindLow,
        Self::Behind,
        Self::BehindHigh,
        Self::IsometricLeft,
        Self::IsometricLeftHigh,
        Self::IsometricRight,
        Self::IsometricRightHigh,
        Self::DirectlyAbove,
        Self::DirectlyAboveCw45,
        Self::DirectlyAboveCcw45,
        Self::FrontBelow,
        Self::LeftBelow,
        Self::RightBelow,
        Self::BehindBelow,
        Self::DirectlyBelow,
    ];

    /// Rotation the preset places the camera at.
    pub fn rotation(self) -> CameraRotation {
        let (horizontal, vertical) = match self {
            Self::FrontLow => (0.0, 0.0),
            Self::Front => (0.0, 22.5),
            Self::FrontHigh => (0.0, 45.0),
            Self::LeftLow => (90.0, 0.0),
            Self::Left => (90.0, 22.5),
            Self::LeftHigh => (90.0, 45.0),
            Self::RightLow => (-90.0, 0.0),
            Self::Right => (-90.0, 22.5),
            Self::RightHigh => (-90.0, 45.0),
            Self::BehindLow => (180.0, 0.0),
            Self::Behind => (180.0, 22.5),
            Self::BehindHigh => (180.0, 45.0),
            Self::IsometricLeft => (45.0, 22.5),
            Self::IsometricLeftHigh => (45.0, 45.0),
            Self::IsometricRight => (-45.0, 22.5),
            Self::IsometricRightHigh => (-45.0, 45.0),
            Self::DirectlyAbove => (0.0, 90.0),
            Self::DirectlyAboveCw45 => (-45.0, 90.0),
            Self::DirectlyAboveCcw45 => (45.0, 90.0),
            Self::FrontBelow => (0.0, -45.0),
            Self::LeftBelow => (90.0, -45.0),
            Self::RightBelow => (-90.0, -45.0),
            Self::BehindBelow => (180.0, -45.0),
            Self::DirectlyBelow => (0.0, -90.0),
        };
        CameraRotation::new(horizontal, vertical)
    }
}

/// Orbiting scene camera.
#[derive(Debug, Clone)]
pub struct Camera {
    rotation: CameraRotation,
    wrap_x_rotation: bool,
    min_x_rotation: f64,
    max_x_rotation: f64,
    min_y_rotation: f64,
    max_y_rotation: f64,
    preset: Option<CameraPreset>,
    current_preset_index: usize,
}

impl Camera {
    /// Create a camera at the front-low preset.
    pub fn new() -> Self {
        Self {
            rotation: CameraRotation::default(),
            wrap_x_rotation: true,
            min_x_rotation: -180.0,
            max_x_rotation: 180.0,
            min_y_rotation: -90.0,
            max_y_rotation: 90.0,
            preset: None,
            current_preset_index: 0,
        }
    }

    /// Current rotation.
    pub fn rotation(&self) -> CameraRotation {
        self.rotation
    }

    /// Horizontal rotation in degrees.
    pub fn x_rotation(&self) -> f64 {
        self.rotation.horizontal
    }

    /// Vertical rotation in degrees.
    pub fn y_rotation(&self) -> f64 {
        self.rotation.vertical
    }

    /// Last applied preset, cleared by manual rotation.
    pub fn preset(&self) -> Option<CameraPreset> {
        self.preset
    }

    /// Whether horizontal rotation wraps around instead of clamping.
    pub fn wrap_x_rotation(&self) -> bool {
        self.wrap_x_rotation
    }

    /// Set horizontal wrapping.
    pub fn set_wrap_x_rotation(&mut self, wrap: bool) {
        self.wrap_x_rotation = wrap;
        self.set_x_rotation(self.rotation.horizontal);
    }

    /// Limit horizontal rotation. Inverted limits are swapped.
    pub fn set_x_rotation_limits(&mut self, min: f64, max: f64) {
        let (min, max) = ordered_limits(min, max);
        self.min_x_rotation = min;
        self.max_x_rotation = max;
        self.set_x_rotation(self.rotation.horizontal);
    }

    /// Limit vertical rotation. Inverted limits are swapped.
    pub fn set_y_rotation_limits(&mut self, min: f64, max: f64) {
        let (min, max) = ordered_limits(min, max);
        self.min_y_rotation = min;
        self.max_y_rotation = max;
        self.set_y_rotation(self.rotation.vertical);
    }

    /// Set the horizontal rotation, wrapping or clamping into the limits.
    pub fn set_x_rotation(&mut self, degrees: f64) {
        self.rotation.horizontal = if self.wrap_x_rotation {
            wrap_value(degrees, self.min_x_rotation, self.max_x_rotation)
        } else {
            degrees.clamp(self.min_x_rotation, self.max_x_rotation)
        };
        self.preset = None;
    }

    /// Set the vertical rotation, clamped into the limits.
    pub fn set_y_rotation(&mut self, degrees: f64) {
        self.rotation.vertical = degrees.clamp(self.min_y_rotation, self.max_y_rotation);
        self.preset = None;
    }

    /// Rotate by a pointer delta across a viewport.
    pub fn rotate_by_pixels(&mut self, delta: ScreenPoint, viewport: ScreenSize) {
        if !viewport.is_valid() {
            return;
        }
        let move_x = delta.x as f64 / (viewport.width as f64 / ROTATION_SPEED);
        let move_y = delta.y as f64 / (viewport.height as f64 / ROTATION_SPEED);
        self.set_x_rotation(self.rotation.horizontal - move_x);
        self.set_y_rotation(self.rotation.vertical + move_y);
    }

    /// Jump to a preset.
    pub fn set_preset(&mut self, preset: CameraPreset) {
        let rotation = preset.rotation();
        if rotation.vertical < self.min_y_rotation || rotation.vertical > self.max_y_rotation {
            warn!(?preset, "camera preset outside vertical rotation limits");
        }
        self.set_x_rotation(rotation.horizontal);
        self.set_y_rotation(rotation.vertical);
        self.preset = Some(preset);
        if let Some(index) = CameraPreset::ALL.iter().position(|p| *p == preset) {
            self.current_preset_index = index;
        }
    }

    /// Apply the preset at the cycling cursor and advance the cursor.
    pub fn next_preset(&mut self) -> CameraPreset {
        let preset = CameraPreset::ALL[self.current_preset_index % CameraPreset::ALL.len()];
        self.set_preset(preset);
        self.current_preset_index = (self.current_preset_index + 1) % CameraPreset::ALL.len();
        preset
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

fn ordered_limits(min: f64, max: f64) -> (f64, f64) {
    if min > max { (max, min) } else { (min, max) }
}

fn wrap_value(value: f64, min: f64, max: f64) -> f64 {
    let mut value = value;
    if value > max {
        value = min + (value - max);
        if value > max {
            value = min;
        }
    }
    if value < min {
        value = max + (value - min);
        if value < min {
            value = max;
        }
    }
    value
}
