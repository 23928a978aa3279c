// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use serde::{Deserialize, Serialize};
use understory_camera2d::{CameraConfig, MiniMapConfig};
use understory_event_state::drag::DEFAULT_TAP_THRESHOLD;

use crate::error::ConfigError;

/// Tunables for a [`crate::CameraScene`].
///
/// Every field has a default, so a JSON document only needs to name the
/// values it changes:
///
/// ```rust
/// use overstory_camera::SceneConfig;
///
/// let cfg = SceneConfig::from_json_str(r#"{ "camera": { "max_scale": 3.0 } }"#).unwrap();
/// assert_eq!(cfg.camera.max_scale, 3.0);
/// assert_eq!(cfg.camera.min_scale, 0.5);
/// assert_eq!(cfg.tap_threshold, 8.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Rendering surface size at scene start.
    pub surface: Size,
    /// Smallest world size; the world is otherwise twice the surface.
    pub min_world_size: Size,
    /// Camera tunables.
    pub camera: CameraConfig,
    /// Mini‑map drawing tunables.
    pub minimap: MiniMapConfig,
    /// Mini‑map display size.
    pub minimap_display: Size,
    /// Pointer travel above which a gesture stops being a tap.
    pub tap_threshold: f64,
    /// Distance a D‑pad step moves the tracked entity, in world units.
    pub entity_step: f64,
    /// Duration of a tracked‑entity move, in seconds.
    pub entity_move_duration: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            surface: Size::new(750.0, 1334.0),
            min_world_size: Size::new(2000.0, 1500.0),
            camera: CameraConfig::default(),
            minimap: MiniMapConfig::default(),
            minimap_display: Size::new(150.0, 120.0),
            tap_threshold: DEFAULT_TAP_THRESHOLD,
            entity_step: 40.0,
            entity_move_duration: 0.35,
        }
    }
}

impl SceneConfig {
    /// Parses and validates a config from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that every tunable is usable.
    ///
    /// The camera and mini‑map clamp whatever they are given, so this only
    /// rejects values that would make the clamps meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("surface.width", self.surface.width)?;
        positive("surface.height", self.surface.height)?;
        non_negative("min_world_size.width", self.min_world_size.width)?;
        non_negative("min_world_size.height", self.min_world_size.height)?;
        non_negative("minimap_display.width", self.minimap_display.width)?;
        non_negative("minimap_display.height", self.minimap_display.height)?;
        let cam = &self.camera;
        positive("camera.min_scale", cam.min_scale)?;
        positive("camera.max_scale", cam.max_scale)?;
        if cam.min_scale > cam.max_scale {
            return Err(ConfigError::EmptyScaleRange {
                min: cam.min_scale,
                max: cam.max_scale,
            });
        }
        positive("camera.zoom_in_step", cam.zoom_in_step)?;
        positive("camera.zoom_out_step", cam.zoom_out_step)?;
        non_negative("camera.scale_duration", cam.scale_duration)?;
        non_negative("camera.pan_duration", cam.pan_duration)?;
        // Zero turns the grid off.
        non_negative("minimap.grid_spacing", self.minimap.grid_spacing)?;
        non_negative("minimap.marker_radius", self.minimap.marker_radius)?;
        non_negative("tap_threshold", self.tap_threshold)?;
        non_negative("entity_step", self.entity_step)?;
        non_negative("entity_move_duration", self.entity_move_duration)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
