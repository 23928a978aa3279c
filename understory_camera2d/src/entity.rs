// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::bounds::WorldBounds;
use crate::transition::{Easing, Transition};

/// An entity the camera can follow, such as the player marker.
///
/// Moves are clamped to the world bounds (not the camera clamp region) and
/// play out as an ease‑out transition. The camera never owns the entity: the
/// scene passes [`TrackedEntity::position`] into
/// [`crate::CameraController::update`] each tick.
#[derive(Clone, Copy, Debug)]
pub struct TrackedEntity {
    position: Point,
    move_duration: f64,
    motion: Option<Transition<Point>>,
}

impl TrackedEntity {
    /// Default duration of a move, in seconds.
    pub const DEFAULT_MOVE_DURATION: f64 = 0.35;

    /// Creates an entity at rest at `position`.
    #[must_use]
    pub fn new(position: Point) -> Self {
        Self {
            position,
            move_duration: Self::DEFAULT_MOVE_DURATION,
            motion: None,
        }
    }

    /// Sets the duration used by subsequent moves.
    #[must_use]
    pub fn with_move_duration(mut self, seconds: f64) -> Self {
        self.move_duration = seconds.max(0.0);
        self
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Where the entity is heading; its position when at rest.
    #[must_use]
    pub fn destination(&self) -> Point {
        self.motion.map_or(self.position, |m| m.target())
    }

    /// Returns `true` while a move is playing.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    /// Starts moving toward `target`, clamped into `bounds`.
    ///
    /// A move already in progress is replaced, starting from the current
    /// position.
    pub fn move_toward(&mut self, target: Point, bounds: &WorldBounds) {
        if !target.is_finite() {
            return;
        }
        let clamped = bounds.clamp_point(target);
        self.motion = Some(Transition::new(
            self.position,
            clamped,
            self.move_duration,
            Easing::EaseOut,
        ));
        self.settle();
    }

    /// Starts moving by `delta` from the current position.
    pub fn move_by(&mut self, delta: Vec2, bounds: &WorldBounds) {
        self.move_toward(self.position + delta, bounds);
    }

    /// Places the entity at `pt` immediately, clamped into `bounds`.
    pub fn teleport(&mut self, pt: Point, bounds: &WorldBounds) {
        if pt.is_finite() {
            self.position = bounds.clamp_point(pt);
            self.motion = None;
        }
    }

    /// Advances the current move by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        if let Some(m) = self.motion.as_mut() {
            m.advance(dt);
        }
        self.settle();
    }

    fn settle(&mut self) {
        if let Some(m) = self.motion {
            self.position = m.value();
            if m.is_finished() {
                self.motion = None;
            }
        }
    }
}
