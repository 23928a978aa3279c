// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Smallest extent, scale or display size used as a divisor.
///
/// Every division by a world extent or camera scale is floored to this value
/// so degenerate inputs degrade to finite results instead of infinities.
pub const MIN_EXTENT: f64 = 1e-4;

/// Axis‑aligned rectangle of the playable world, in Y‑up world coordinates.
///
/// The rectangle always has `min_x < max_x` and `min_y < max_y`: construction
/// normalizes flipped input and floors each extent to [`MIN_EXTENT`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBounds {
    rect: Rect,
}

impl WorldBounds {
    /// Creates world bounds from a rectangle.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        let rect = rect.abs();
        let width = rect.width().max(MIN_EXTENT);
        let height = rect.height().max(MIN_EXTENT);
        Self {
            rect: Rect::from_origin_size(rect.origin(), Size::new(width, height)),
        }
    }

    /// Creates world bounds from the minimum and maximum corners.
    #[must_use]
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Rect::new(min_x, min_y, max_x, max_y))
    }

    /// Sizes a world anchored at the origin for a rendering surface.
    ///
    /// Each axis is twice the surface extent, but never smaller than
    /// `minimum`, so the camera always has room to move on a typical screen.
    #[must_use]
    pub fn for_surface(surface: Size, minimum: Size) -> Self {
        let width = minimum.width.max(surface.width * 2.0);
        let height = minimum.height.max(surface.height * 2.0);
        Self::new(Rect::from_origin_size(Point::ZERO, Size::new(width, height)))
    }

    /// Returns the bounds as a rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Minimum X coordinate.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.rect.x0
    }

    /// Minimum Y coordinate.
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.rect.y0
    }

    /// Maximum X coordinate.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.rect.x1
    }

    /// Maximum Y coordinate.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.rect.y1
    }

    /// World width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// World height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Center of the world.
    #[must_use]
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Clamps a point into the world rectangle.
    ///
    /// This is the clamp used for entities; cameras use the tighter region
    /// from [`crate::clamp_position`].
    #[must_use]
    pub fn clamp_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x.clamp(self.rect.x0, self.rect.x1),
            pt.y.clamp(self.rect.y0, self.rect.y1),
        )
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::from_min_max(0.0, 0.0, 2000.0, 1500.0)
    }
}

impl From<Rect> for WorldBounds {
    fn from(rect: Rect) -> Self {
        Self::new(rect)
    }
}
