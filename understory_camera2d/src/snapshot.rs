// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect, Size};

use crate::camera::{CameraController, CameraState};
use crate::viewport::visible_world_rect;

/// Value‑type copy of everything an overlay reads from a running scene.
///
/// Overlays (HUD text, mini‑map) poll this at their own rate. Because it is a
/// plain `Copy` value, a snapshot can be one tick stale but never partially
/// updated.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneSnapshot {
    /// World bounds.
    pub world: Rect,
    /// Rendering surface size.
    pub surface: Size,
    /// Position of the tracked entity.
    pub tracked: Point,
    /// Logical camera state.
    pub camera: CameraState,
    /// In‑flight camera position.
    pub presented_position: Point,
    /// In‑flight camera scale.
    pub presented_scale: f64,
}

impl SceneSnapshot {
    /// Captures the state of `camera` together with the tracked position.
    #[must_use]
    pub fn capture(camera: &CameraController, tracked: Point) -> Self {
        Self {
            world: camera.bounds().rect(),
            surface: camera.surface(),
            tracked,
            camera: camera.state(),
            presented_position: camera.presented_position(),
            presented_scale: camera.presented_scale(),
        }
    }

    /// Visible world rectangle for the logical camera state.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        visible_world_rect(self.camera.position, self.camera.scale, self.surface)
    }

    /// Visible world rectangle for the in‑flight camera state.
    #[must_use]
    pub fn presented_world_rect(&self) -> Rect {
        visible_world_rect(self.presented_position, self.presented_scale, self.surface)
    }
}

/// One‑line HUD readout of the presented camera scale and position.
impl fmt::Display for SceneSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}  Camera: x={:.0}, y={:.0}",
            self.presented_scale, self.presented_position.x, self.presented_position.y
        )
    }
}
