use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Size of the drawing canvas `[0, x] × [0, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingSize {
    pub x: f64,
    pub y: f64,
}

impl DrawingSize {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for DrawingSize {
    fn default() -> Self {
        Self { x: 1000.0, y: 600.0 }
    }
}

/// Numeric parameters driving shape construction and vertex constraints.
///
/// Field names serialize in camelCase (`minStroke`, `shapesGap`, ...) so the
/// record can be read straight from the host application's settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrawingParameters {
    /// Canvas size.
    pub drawing_size: DrawingSize,
    /// Distance between a shape boundary and its offset guides.
    pub shapes_gap: f64,
    /// Minimum distance of the next vertex from the last one (exclusive).
    pub min_stroke: f64,
    /// Maximum distance of the next vertex from the last one (inclusive).
    pub max_stroke: f64,
    /// Half-angle of the dead zone around the previous edge, in radians.
    pub min_angle: f64,
    /// Angle grid in radians; `0` means continuous angles.
    pub angle_step: f64,
    /// Cursor distance under which a snap target is picked.
    pub snap_threshold: f64,
}

impl Default for DrawingParameters {
    fn default() -> Self {
        Self {
            drawing_size: DrawingSize::default(),
            shapes_gap: 10.0,
            min_stroke: 0.0,
            max_stroke: 1000.0,
            min_angle: 10f64.to_radians(),
            angle_step: 0.0,
            snap_threshold: 20.0,
        }
    }
}

impl DrawingParameters {
    /// Checks that every parameter is usable by the constraint engine.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` for non-finite or negative
    /// values, an empty canvas, or `min_stroke > max_stroke`.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("shapesGap", self.shapes_gap),
            ("minStroke", self.min_stroke),
            ("maxStroke", self.max_stroke),
            ("minAngle", self.min_angle),
            ("angleStep", self.angle_step),
            ("snapThreshold", self.snap_threshold),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParameter {
                    name,
                    value,
                    reason: "must be a finite, non-negative number",
                }
                .into());
            }
        }

        for (name, value) in [("drawingSize.x", self.drawing_size.x), ("drawingSize.y", self.drawing_size.y)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidParameter {
                    name,
                    value,
                    reason: "canvas dimensions must be positive",
                }
                .into());
            }
        }

        if self.min_stroke > self.max_stroke {
            return Err(ConfigError::InvalidParameter {
                name: "minStroke",
                value: self.min_stroke,
                reason: "must not exceed maxStroke",
            }
            .into());
        }

        Ok(())
    }
}
