// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::bounds::WorldBounds;
use crate::config::CameraConfig;
use crate::minimap::MiniMapProjector;
use crate::transition::{Easing, Transition};
use crate::viewport::{half_extent, sanitize_surface, visible_world_rect};

/// Logical camera state.
///
/// This is a plain value: copying it out of a [`CameraController`] yields a
/// consistent snapshot that later mutation cannot tear.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraState {
    /// Camera center in world coordinates.
    pub position: Point,
    /// Camera scale. Larger values show less of the world.
    pub scale: f64,
    /// Whether the camera follows the tracked entity on every update.
    pub focused: bool,
}

/// Clamps one axis of a camera position.
///
/// The valid range is `[world_min + half_extent, world_max - half_extent]`.
/// When that range is empty (the world is smaller than the viewport on this
/// axis) the result is the world midpoint, whatever `value` was.
#[must_use]
pub fn clamp_axis(value: f64, world_min: f64, world_max: f64, half_extent: f64) -> f64 {
    let lo = world_min + half_extent;
    let hi = world_max - half_extent;
    if lo > hi {
        (world_min + world_max) * 0.5
    } else {
        value.clamp(lo, hi)
    }
}

/// Clamps a camera position so the viewport stays inside `bounds`.
#[must_use]
pub fn clamp_position(pt: Point, bounds: &WorldBounds, surface: Size, scale: f64) -> Point {
    let half = half_extent(surface, scale);
    Point::new(
        clamp_axis(pt.x, bounds.min_x(), bounds.max_x(), half.x),
        clamp_axis(pt.y, bounds.min_y(), bounds.max_y(), half.y),
    )
}

/// Returns the set of valid camera positions as a rectangle.
///
/// Axes on which the world is smaller than the viewport collapse to the
/// world midpoint, giving a zero‑width (or zero‑height) region.
#[must_use]
pub fn clamp_region(bounds: &WorldBounds, surface: Size, scale: f64) -> Rect {
    let lo = clamp_position(
        Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        bounds,
        surface,
        scale,
    );
    let hi = clamp_position(
        Point::new(f64::INFINITY, f64::INFINITY),
        bounds,
        surface,
        scale,
    );
    Rect::from_points(lo, hi)
}

/// Follow camera with world‑clamped panning and scale‑clamped zooming.
///
/// Every mutation ends with the position clamped for the scale in effect, so
/// the visible world rectangle never extends past the world bounds (or, when
/// the world is smaller than the viewport on an axis, stays centered on it).
///
/// Animated changes store the final clamped value immediately; the in‑flight
/// value a renderer should show is available from
/// [`CameraController::presented_position`] and
/// [`CameraController::presented_scale`].
///
/// ```rust
/// use kurbo::{Point, Size};
/// use understory_camera2d::{CameraConfig, CameraController, WorldBounds};
///
/// let bounds = WorldBounds::from_min_max(0.0, 0.0, 2000.0, 1500.0);
/// let mut camera = CameraController::new(bounds, Size::new(800.0, 600.0), CameraConfig::default());
///
/// // Requests outside the world are clamped, never rejected.
/// camera.set_position(Point::new(-500.0, 99_999.0), false);
/// assert_eq!(camera.position(), Point::new(400.0, 1200.0));
/// ```
#[derive(Clone, Debug)]
pub struct CameraController {
    config: CameraConfig,
    bounds: WorldBounds,
    surface: Size,
    state: CameraState,
    scale_transition: Option<Transition<f64>>,
    position_transition: Option<Transition<Point>>,
}

impl CameraController {
    /// Creates a focused camera centered on the world at scale `1.0`
    /// (clamped into the configured scale range).
    ///
    /// A non‑finite `surface` is replaced by [`Size::ZERO`]; negative extents
    /// are floored to zero.
    #[must_use]
    pub fn new(bounds: WorldBounds, surface: Size, config: CameraConfig) -> Self {
        let config = config.normalized();
        let mut camera = Self {
            config,
            bounds,
            surface: sanitize_surface(surface).unwrap_or(Size::ZERO),
            state: CameraState {
                position: bounds.center(),
                scale: 1.0_f64.clamp(config.min_scale, config.max_scale),
                focused: true,
            },
            scale_transition: None,
            position_transition: None,
        };
        camera.reclamp();
        camera
    }

    /// Returns a copy of the logical camera state.
    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Returns the camera tunables.
    #[must_use]
    pub fn config(&self) -> CameraConfig {
        self.config
    }

    /// Returns the world bounds.
    #[must_use]
    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// Returns the rendering surface size.
    #[must_use]
    pub fn surface(&self) -> Size {
        self.surface
    }

    /// Logical (target) camera position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.state.position
    }

    /// Logical (target) camera scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Whether the camera follows the tracked entity.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    /// Sets the rendering surface size and re‑clamps the position.
    ///
    /// Non‑finite sizes are ignored; negative extents are floored to zero.
    pub fn set_surface_size(&mut self, surface: Size) {
        let Some(surface) = sanitize_surface(surface) else {
            return;
        };
        if self.surface == surface {
            return;
        }
        self.surface = surface;
        self.reclamp();
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The range is normalized so that `min <= max`, and the current scale is
    /// clamped into it without animation.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        self.config.min_scale = min_scale;
        self.config.max_scale = max_scale;
        self.config = self.config.normalized();
        self.set_scale(self.state.scale, false);
    }

    /// Toggles following of the tracked entity.
    pub fn set_focus(&mut self, enabled: bool) {
        self.state.focused = enabled;
        self.reclamp();
    }

    /// Sets the camera scale, clamped into `[min_scale, max_scale]`.
    ///
    /// With `animated`, the presented scale eases from its current value to
    /// the clamped target over [`CameraConfig::scale_duration`]. Non‑finite
    /// requests are ignored.
    pub fn set_scale(&mut self, requested: f64, animated: bool) {
        if !requested.is_finite() {
            return;
        }
        let clamped = requested.clamp(self.config.min_scale, self.config.max_scale);
        self.scale_transition = if animated {
            Some(Transition::new(
                self.presented_scale(),
                clamped,
                self.config.scale_duration,
                Easing::EaseInOut,
            ))
        } else {
            None
        };
        self.state.scale = clamped;
        self.reclamp();
    }

    /// Multiplies the scale by [`CameraConfig::zoom_in_step`], animated.
    pub fn zoom_in(&mut self) {
        self.set_scale(self.state.scale * self.config.zoom_in_step, true);
    }

    /// Multiplies the scale by [`CameraConfig::zoom_out_step`], animated.
    pub fn zoom_out(&mut self) {
        self.set_scale(self.state.scale * self.config.zoom_out_step, true);
    }

    /// Applies an incremental pinch factor.
    ///
    /// A factor of `1.0` is no change; spreading the fingers (`factor > 1`)
    /// divides the scale. Non‑positive or non‑finite factors are ignored.
    pub fn pinch(&mut self, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        self.set_scale(self.state.scale / factor, false);
    }

    /// Moves the camera to `target`, clamped into the valid region.
    ///
    /// With `animated`, the presented position eases from where it currently
    /// is; calling this again mid‑flight re‑targets the move. Non‑finite
    /// targets are ignored.
    pub fn set_position(&mut self, target: Point, animated: bool) {
        if !target.is_finite() {
            return;
        }
        let clamped = self.clamp(target);
        self.position_transition = if animated {
            Some(Transition::new(
                self.presented_position(),
                clamped,
                self.config.pan_duration,
                Easing::EaseInOut,
            ))
        } else {
            None
        };
        self.state.position = clamped;
    }

    /// Moves the camera by a world‑space delta, without animation.
    pub fn move_by(&mut self, delta: Vec2) {
        self.set_position(self.state.position + delta, false);
    }

    /// Moves the camera to the world point under a mini‑map display point.
    pub fn look_at_minimap_point(&mut self, projector: &MiniMapProjector, pt: Point) {
        self.set_position(projector.mini_to_world(pt), true);
    }

    /// Per‑frame update.
    ///
    /// Advances running transitions by `dt` seconds, snaps to `tracked` when
    /// focused, and always re‑applies the position clamp.
    pub fn update(&mut self, dt: f64, tracked: Point) {
        if let Some(t) = self.scale_transition.as_mut() {
            t.advance(dt);
            if t.is_finished() {
                self.scale_transition = None;
            }
        }
        if let Some(t) = self.position_transition.as_mut() {
            t.advance(dt);
            if t.is_finished() {
                self.position_transition = None;
            }
        }
        if self.state.focused && tracked.is_finite() {
            self.state.position = tracked;
            self.position_transition = None;
        }
        self.reclamp();
    }

    /// Scale a renderer should currently show.
    #[must_use]
    pub fn presented_scale(&self) -> f64 {
        self.scale_transition.map_or(self.state.scale, |t| t.value())
    }

    /// Position a renderer should currently show.
    #[must_use]
    pub fn presented_position(&self) -> Point {
        self.position_transition.map_or(self.state.position, |t| t.value())
    }

    /// Progress of the running scale animation, `1.0` when idle.
    #[must_use]
    pub fn scale_progress(&self) -> f64 {
        self.scale_transition.map_or(1.0, |t| t.progress())
    }

    /// Progress of the running position animation, `1.0` when idle.
    #[must_use]
    pub fn position_progress(&self) -> f64 {
        self.position_transition.map_or(1.0, |t| t.progress())
    }

    /// Visible world rectangle for the logical state.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        visible_world_rect(self.state.position, self.state.scale, self.surface)
    }

    /// Visible world rectangle for the presented (in‑flight) state.
    #[must_use]
    pub fn presented_world_rect(&self) -> Rect {
        visible_world_rect(
            self.presented_position(),
            self.presented_scale(),
            self.surface,
        )
    }

    /// Valid camera positions for the current scale and surface.
    #[must_use]
    pub fn clamp_region(&self) -> Rect {
        clamp_region(&self.bounds, self.surface, self.state.scale)
    }

    /// Snapshot of the controller for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            state: self.state,
            surface: self.surface,
            world_bounds: self.bounds.rect(),
            visible_world_rect: self.visible_world_rect(),
            clamp_region: self.clamp_region(),
            presented_scale: self.presented_scale(),
            presented_position: self.presented_position(),
            scale_progress: self.scale_progress(),
            position_progress: self.position_progress(),
            min_scale: self.config.min_scale,
            max_scale: self.config.max_scale,
        }
    }

    fn clamp(&self, pt: Point) -> Point {
        clamp_position(pt, &self.bounds, self.surface, self.state.scale)
    }

    fn reclamp(&mut self) {
        let clamped = self.clamp(self.state.position);
        self.state.position = clamped;
        if let Some(t) = self.position_transition.as_mut() {
            t.set_target(clamped);
        }
    }
}

/// Debug snapshot of a [`CameraController`].
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Logical camera state.
    pub state: CameraState,
    /// Rendering surface size.
    pub surface: Size,
    /// World bounds.
    pub world_bounds: Rect,
    /// Visible world rectangle for the logical state.
    pub visible_world_rect: Rect,
    /// Valid camera positions.
    pub clamp_region: Rect,
    /// In‑flight scale.
    pub presented_scale: f64,
    /// In‑flight position.
    pub presented_position: Point,
    /// Scale animation progress.
    pub scale_progress: f64,
    /// Position animation progress.
    pub position_progress: f64,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{CameraController, clamp_axis, clamp_position};
    use crate::{CameraConfig, MiniMapProjector, WorldBounds};

    fn camera(surface: Size) -> CameraController {
        CameraController::new(WorldBounds::default(), surface, CameraConfig::default())
    }

    fn assert_in_region(cam: &CameraController) {
        let region = cam.clamp_region();
        let p = cam.position();
        assert!(
            p.x >= region.min_x() - 1e-9 && p.x <= region.max_x() + 1e-9,
            "x {} outside {:?}",
            p.x,
            region
        );
        assert!(
            p.y >= region.min_y() - 1e-9 && p.y <= region.max_y() + 1e-9,
            "y {} outside {:?}",
            p.y,
            region
        );
    }

    #[test]
    fn clamp_axis_limits_and_centers() {
        assert_eq!(clamp_axis(-50.0, 0.0, 1000.0, 100.0), 100.0);
        assert_eq!(clamp_axis(5000.0, 0.0, 1000.0, 100.0), 900.0);
        assert_eq!(clamp_axis(400.0, 0.0, 1000.0, 100.0), 400.0);
        // World narrower than the viewport: always the midpoint.
        assert_eq!(clamp_axis(0.0, 0.0, 300.0, 400.0), 150.0);
        assert_eq!(clamp_axis(9999.0, 0.0, 300.0, 400.0), 150.0);
    }

    #[test]
    fn narrow_world_forces_mid_x() {
        let bounds = WorldBounds::from_min_max(0.0, 0.0, 300.0, 5000.0);
        let surface = Size::new(800.0, 600.0);
        let mut cam = CameraController::new(bounds, surface, CameraConfig::default());
        cam.set_focus(false);
        for x in [-1000.0, 0.0, 150.0, 299.0, 7000.0] {
            cam.set_position(Point::new(x, 2500.0), false);
            assert_eq!(cam.position().x, 150.0);
            assert_eq!(cam.position().y, 2500.0);
        }
        let p = clamp_position(Point::new(12.0, 2500.0), &bounds, surface, 1.0);
        assert_eq!(p.x, 150.0);
    }

    #[test]
    fn set_position_clamps_for_scale_in_effect() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.set_focus(false);
        for scale in [0.5, 0.8, 1.0, 1.6, 2.0] {
            cam.set_scale(scale, false);
            for target in [
                Point::new(-1e6, -1e6),
                Point::new(1e6, 1e6),
                Point::new(10.0, 1490.0),
                Point::new(1000.0, 750.0),
            ] {
                cam.set_position(target, false);
                assert_in_region(&cam);
                let visible = cam.visible_world_rect();
                let world = cam.bounds().rect();
                assert!(visible.min_x() >= world.min_x() - 1e-9);
                assert!(visible.max_x() <= world.max_x() + 1e-9);
                assert!(visible.min_y() >= world.min_y() - 1e-9);
                assert!(visible.max_y() <= world.max_y() + 1e-9);
            }
        }
    }

    #[test]
    fn scale_is_always_clamped() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.set_scale(100.0, false);
        assert_eq!(cam.scale(), 2.0);
        cam.set_scale(0.0001, true);
        assert_eq!(cam.scale(), 0.5);
        cam.set_scale(f64::NAN, false);
        assert_eq!(cam.scale(), 0.5);
        for _ in 0..50 {
            cam.zoom_in();
        }
        assert_eq!(cam.scale(), 0.5);
        for _ in 0..50 {
            cam.zoom_out();
        }
        assert_eq!(cam.scale(), 2.0);
    }

    #[test]
    fn zoom_steps_are_multiplicative() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.zoom_in();
        assert!((cam.scale() - 0.85).abs() < 1e-12);
        cam.zoom_out();
        assert!((cam.scale() - 0.85 * 1.15).abs() < 1e-12);
    }

    #[test]
    fn zoom_pair_is_not_invertible_at_clamp_boundary() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.set_scale(0.55, false);
        cam.zoom_in(); // 0.4675 is absorbed by the 0.5 floor
        assert_eq!(cam.scale(), 0.5);
        cam.zoom_out();
        assert!((cam.scale() - 0.575).abs() < 1e-12);
        assert!((cam.scale() - 0.55).abs() > 1e-3);
    }

    #[test]
    fn scale_change_reclamps_position() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.set_focus(false);
        cam.set_scale(2.0, false);
        // At scale 2 the half extent is 200 x 150.
        cam.set_position(Point::new(200.0, 150.0), false);
        assert_eq!(cam.position(), Point::new(200.0, 150.0));
        // Zooming out to 0.5 widens the viewport to 1600 x 1200.
        cam.set_scale(0.5, false);
        assert_eq!(cam.position(), Point::new(800.0, 600.0));
    }

    #[test]
    fn animated_scale_reports_progress_and_final_value() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.set_scale(2.0, true);
        assert_eq!(cam.scale(), 2.0);
        assert_eq!(cam.scale_progress(), 0.0);
        assert_eq!(cam.presented_scale(), 1.0);

        let tracked = cam.position();
        cam.update(0.125, tracked);
        assert!((cam.scale_progress() - 0.5).abs() < 1e-12);
        assert!((cam.presented_scale() - 1.5).abs() < 1e-12);

        cam.update(0.125, tracked);
        assert_eq!(cam.scale_progress(), 1.0);
        assert_eq!(cam.presented_scale(), 2.0);
    }

    #[test]
    fn animated_position_can_be_retargeted() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.set_focus(false);
        cam.set_position(Point::new(600.0, 600.0), false);

        cam.set_position(Point::new(1400.0, 600.0), true);
        assert_eq!(cam.position(), Point::new(1400.0, 600.0));
        let tracked = Point::ZERO;
        cam.update(0.125, tracked);
        let mid = cam.presented_position();
        assert!((mid.x - 1000.0).abs() < 1e-9, "halfway at {mid:?}");

        cam.set_position(Point::new(600.0, 600.0), true);
        assert_eq!(cam.position_progress(), 0.0);
        assert_eq!(cam.presented_position(), mid);
        cam.update(1.0, tracked);
        assert_eq!(cam.presented_position(), Point::new(600.0, 600.0));
    }

    #[test]
    fn focused_update_follows_tracked_entity() {
        let mut cam = camera(Size::new(800.0, 600.0));
        assert!(cam.is_focused());
        cam.update(1.0 / 60.0, Point::new(1200.0, 900.0));
        assert_eq!(cam.position(), Point::new(1200.0, 900.0));

        // Near the corner the follow is clamped.
        cam.update(1.0 / 60.0, Point::new(0.0, 0.0));
        assert_eq!(cam.position(), Point::new(400.0, 300.0));

        cam.set_focus(false);
        cam.update(1.0 / 60.0, Point::new(1200.0, 900.0));
        assert_eq!(cam.position(), Point::new(400.0, 300.0));
    }

    #[test]
    fn move_by_is_relative_and_clamped() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.set_focus(false);
        cam.set_position(Point::new(1000.0, 750.0), false);
        cam.move_by(Vec2::new(100.0, -50.0));
        assert_eq!(cam.position(), Point::new(1100.0, 700.0));
        cam.move_by(Vec2::new(10_000.0, 0.0));
        assert_eq!(cam.position().x, 1600.0);
    }

    #[test]
    fn pinch_divides_scale() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.pinch(2.0);
        assert_eq!(cam.scale(), 0.5);
        cam.pinch(0.8);
        assert!((cam.scale() - 0.625).abs() < 1e-12);
        cam.pinch(0.0);
        cam.pinch(-1.0);
        assert!((cam.scale() - 0.625).abs() < 1e-12);
    }

    #[test]
    fn minimap_point_targets_camera_with_animation() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.set_focus(false);
        let projector = MiniMapProjector::new(WorldBounds::default(), Size::new(150.0, 120.0));
        // Bottom-left corner of the content maps to the world origin.
        cam.look_at_minimap_point(&projector, Point::new(0.0, 116.25));
        assert_eq!(cam.position(), Point::new(400.0, 300.0));
        assert!(cam.position_progress() < 1.0);
    }

    #[test]
    fn surface_change_reclamps() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.set_focus(false);
        cam.set_position(Point::new(400.0, 300.0), false);
        cam.set_surface_size(Size::new(1200.0, 1000.0));
        assert_eq!(cam.position(), Point::new(600.0, 500.0));
    }

    #[test]
    fn unusable_surface_sizes_are_sanitized() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.set_focus(false);
        cam.set_surface_size(Size::new(f64::NAN, 600.0));
        assert_eq!(cam.surface(), Size::new(800.0, 600.0));

        cam.set_surface_size(Size::new(-800.0, 600.0));
        assert_eq!(cam.surface(), Size::new(0.0, 600.0));
        cam.set_position(Point::new(-1000.0, 750.0), false);
        assert_eq!(cam.position(), Point::new(0.0, 750.0));
        let visible = cam.visible_world_rect();
        assert_eq!(visible, Rect::new(0.0, 450.0, 0.0, 1050.0));

        let fresh = CameraController::new(
            WorldBounds::default(),
            Size::new(f64::INFINITY, f64::NAN),
            CameraConfig::default(),
        );
        assert_eq!(fresh.surface(), Size::ZERO);
        assert_eq!(fresh.position(), Point::new(1000.0, 750.0));
    }

    #[test]
    fn clamp_region_collapses_degenerate_axis() {
        let bounds = WorldBounds::from_min_max(0.0, 0.0, 300.0, 2000.0);
        let cam = CameraController::new(bounds, Size::new(800.0, 600.0), CameraConfig::default());
        assert_eq!(cam.clamp_region(), Rect::new(150.0, 300.0, 150.0, 1700.0));
    }

    #[test]
    fn scale_limits_are_normalized_and_applied() {
        let mut cam = camera(Size::new(800.0, 600.0));
        cam.set_scale_limits(1.5, 1.2);
        let info = cam.debug_info();
        assert_eq!(info.min_scale, 1.2);
        assert_eq!(info.max_scale, 1.5);
        assert_eq!(cam.scale(), 1.2);
    }
}
