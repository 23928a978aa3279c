// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch state helper: turn a cumulative pinch scale into incremental factors.
//!
//! Platform pinch recognizers report the scale relative to the start of the
//! gesture. Camera code wants the change since the previous event, so that
//! every event can be applied on top of whatever the camera did in between
//! (clamping included).
//!
//! ```
//! use understory_event_state::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! pinch.begin();
//! assert_eq!(pinch.update(2.0), Some(2.0));
//! assert_eq!(pinch.update(3.0), Some(1.5));
//! pinch.end();
//! assert_eq!(pinch.update(4.0), None);
//! ```

/// Tracks the last cumulative scale of an active pinch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinchState {
    last_scale: Option<f64>,
}

impl PinchState {
    /// Starts a pinch; the cumulative scale is `1.0` at this point.
    pub fn begin(&mut self) {
        self.last_scale = Some(1.0);
    }

    /// Records a new cumulative scale and returns the factor since the last
    /// update.
    ///
    /// Returns `None` when no pinch is active or the scale is not a positive,
    /// finite number.
    pub fn update(&mut self, cumulative: f64) -> Option<f64> {
        let last = self.last_scale?;
        if !(cumulative.is_finite() && cumulative > 0.0) {
            return None;
        }
        self.last_scale = Some(cumulative);
        Some(cumulative / last)
    }

    /// Ends the pinch.
    pub fn end(&mut self) {
        self.last_scale = None;
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_scale.is_some()
    }
}
