// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed interpolation between two values.
//!
//! Animated camera and entity moves are modeled as a [`Transition`]: the
//! logical value jumps to the target immediately, while the presented value
//! follows an easing curve over a fixed duration. Re‑targeting a transition
//! starts a new one from the currently presented value.

use kurbo::Point;

/// Easing curve applied to the linear progress of a [`Transition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Fast start, slow finish: `1 - (1 - t)^2`.
    EaseOut,
    /// Slow start and finish: `t^2 (3 - 2t)`.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    /// Interpolates from `self` to `other` by `t`.
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Point {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(self.x.lerp(other.x, t), self.y.lerp(other.y, t))
    }
}

/// An in‑flight interpolation from one value to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition<T> {
    from: T,
    to: T,
    elapsed: f64,
    duration: f64,
    easing: Easing,
}

impl<T: Lerp> Transition<T> {
    /// Starts a transition. Non‑positive durations finish immediately.
    #[must_use]
    pub fn new(from: T, to: T, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Advances the transition by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// The presented value at the current progress.
    #[must_use]
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(self.progress()))
    }

    /// The value the transition ends at.
    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    /// Replaces the target without restarting the clock.
    ///
    /// Used when a clamp moves the destination while the transition is
    /// already running.
    pub fn set_target(&mut self, to: T) {
        self.to = to;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Easing, Transition};

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric_around_midpoint() {
        let e = Easing::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-12);
        assert!(e.apply(0.1) < 0.1, "ease-in-out starts slower than linear");
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.3) > 0.3);
    }

    #[test]
    fn transition_reaches_target_after_duration() {
        let mut t = Transition::new(1.0_f64, 2.0, 0.25, Easing::EaseInOut);
        assert_eq!(t.progress(), 0.0);
        assert_eq!(t.value(), 1.0);

        t.advance(0.125);
        assert!((t.progress() - 0.5).abs() < 1e-12);
        assert!((t.value() - 1.5).abs() < 1e-12);

        t.advance(10.0);
        assert!(t.is_finished());
        assert_eq!(t.value(), 2.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let t = Transition::new(Point::ZERO, Point::new(4.0, 4.0), 0.0, Easing::Linear);
        assert!(t.is_finished());
        assert_eq!(t.value(), Point::new(4.0, 4.0));
    }

    #[test]
    fn negative_advance_is_ignored() {
        let mut t = Transition::new(0.0_f64, 10.0, 1.0, Easing::Linear);
        t.advance(0.5);
        t.advance(-1.0);
        assert!((t.progress() - 0.5).abs() < 1e-12);
    }
}
