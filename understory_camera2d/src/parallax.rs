// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// A background layer that scrolls at a fraction of the camera's speed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallaxLayer {
    /// Fraction of the camera movement the layer is shifted back by.
    pub factor: f64,
}

impl ParallaxLayer {
    /// Distant layer, nearly static.
    pub const FAR: Self = Self { factor: 0.05 };
    /// Middle layer.
    pub const MID: Self = Self { factor: 0.15 };
    /// Near layer.
    pub const NEAR: Self = Self { factor: 0.35 };

    /// Layer offset for a camera centered at `camera`.
    #[must_use]
    pub fn offset(&self, camera: Point) -> Vec2 {
        -camera.to_vec2() * self.factor
    }
}
