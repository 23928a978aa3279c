// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible‑world computation.
//!
//! The viewport is never stored. It is derived on every query from the camera
//! position, the camera scale, and the size of the rendering surface:
//!
//! ```text
//! half_w = surface.width  / (2 * scale)
//! half_h = surface.height / (2 * scale)
//! visible = [pos.x - half_w, pos.y - half_h, pos.x + half_w, pos.y + half_h]
//! ```
//!
//! Surface coordinates are Y‑down with the origin at the top‑left corner of
//! the rendering surface; world coordinates are Y‑up.

use kurbo::{Point, Rect, Size, Vec2};

use crate::bounds::MIN_EXTENT;

/// Half of the visible world extent on each axis.
///
/// `scale` is floored to [`MIN_EXTENT`] before dividing. Negative or NaN
/// surface extents count as zero.
#[must_use]
pub fn half_extent(surface: Size, scale: f64) -> Vec2 {
    let scale = scale.max(MIN_EXTENT);
    Vec2::new(
        surface.width.max(0.0) / (2.0 * scale),
        surface.height.max(0.0) / (2.0 * scale),
    )
}

/// Returns `surface` with negative extents floored to zero, or `None` when
/// either extent is not finite.
#[must_use]
pub fn sanitize_surface(surface: Size) -> Option<Size> {
    surface
        .is_finite()
        .then(|| Size::new(surface.width.max(0.0), surface.height.max(0.0)))
}

/// Returns the world‑space rectangle visible through a camera centered at
/// `position` with the given `scale`, on a surface of size `surface`.
#[must_use]
pub fn visible_world_rect(position: Point, scale: f64, surface: Size) -> Rect {
    let half = half_extent(surface, scale);
    Rect::new(
        position.x - half.x,
        position.y - half.y,
        position.x + half.x,
        position.y + half.y,
    )
}

/// Maps a point on the rendering surface (Y‑down) to world space (Y‑up).
///
/// The surface center maps to `position`.
#[must_use]
pub fn surface_to_world(pt: Point, position: Point, scale: f64, surface: Size) -> Point {
    let scale = scale.max(MIN_EXTENT);
    Point::new(
        position.x + (pt.x - surface.width * 0.5) / scale,
        position.y - (pt.y - surface.height * 0.5) / scale,
    )
}

/// Converts a drag delta on the surface into the world delta that keeps the
/// content under the pointer, i.e. the camera moves the opposite way.
#[must_use]
pub fn surface_drag_to_camera_delta(delta: Vec2, scale: f64) -> Vec2 {
    let scale = scale.max(MIN_EXTENT);
    Vec2::new(-delta.x / scale, delta.y / scale)
}
