// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: movement deltas, total offsets, and drag‑vs‑tap classification.
//!
//! ## Usage
//!
//! 1) Start a gesture by calling [`DragState::start`] with the pointer‑down position.
//! 2) On each move event, call [`DragState::update`] to get the movement delta since the last update.
//! 3) Optionally call [`DragState::total_offset`] to get the cumulative offset from the start position.
//! 4) End the gesture with [`DragState::end`], which reports whether it was a tap or a drag.
//!
//! Every move adds its length to [`DragState::travel`]. Once the travel
//! exceeds the tap threshold (8 display units by default) the gesture is a
//! drag for the rest of its lifetime, even if the pointer comes back to
//! where it started.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::{DragEnd, DragState};
//!
//! let mut drag = DragState::default();
//!
//! // Press at (10, 20) and wiggle a little: still a tap.
//! drag.start(Point::new(10.0, 20.0));
//! let delta = drag.update(Point::new(13.0, 24.0)).unwrap();
//! assert_eq!(delta.x, 3.0);
//! assert_eq!(delta.y, 4.0);
//! assert!(drag.is_tap_candidate());
//!
//! // Move further: the gesture becomes a drag.
//! drag.update(Point::new(30.0, 24.0));
//! assert!(!drag.is_tap_candidate());
//! assert_eq!(drag.end(), Some(DragEnd::Drag { total: (20.0, 4.0).into() }));
//! ```

use kurbo::{Point, Vec2};

/// Default travel, in display units, above which a gesture is no longer a tap.
pub const DEFAULT_TAP_THRESHOLD: f64 = 8.0;

/// How a gesture ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEnd {
    /// The pointer never travelled further than the tap threshold.
    ///
    /// Carries the pointer‑down position.
    Tap(Point),
    /// The pointer travelled past the threshold.
    Drag {
        /// Offset from the start position to the last recorded position.
        total: Vec2,
    },
}

/// Tracks drag state for move event processing
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    /// Start position of the drag operation
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during drag
    pub last_pos: Option<Point>,
    /// Sum of the lengths of all moves since the start
    pub travel: f64,
    tap_threshold: f64,
}

impl Default for DragState {
    fn default() -> Self {
        Self::with_tap_threshold(DEFAULT_TAP_THRESHOLD)
    }
}

impl DragState {
    /// Creates an idle state with a custom tap threshold.
    ///
    /// Negative thresholds are treated as zero, which makes any movement a drag.
    #[must_use]
    pub fn with_tap_threshold(threshold: f64) -> Self {
        Self {
            start_pos: None,
            last_pos: None,
            travel: 0.0,
            tap_threshold: threshold.max(0.0),
        }
    }

    /// Returns the tap threshold.
    #[must_use]
    pub fn tap_threshold(&self) -> f64 {
        self.tap_threshold
    }

    /// Start tracking a new drag operation from the given position.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.travel = 0.0;
    }

    /// Update the drag state with a new position, returning the movement delta since last update.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        if let Some(last_pos) = self.last_pos {
            let delta = pos - last_pos;
            self.last_pos = Some(pos);
            self.travel += delta.hypot();
            Some(delta)
        } else {
            self.last_pos = Some(pos);
            None
        }
    }

    /// Get total offset from drag start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Returns `true` while a gesture is active and has not travelled past
    /// the tap threshold.
    #[must_use]
    pub fn is_tap_candidate(&self) -> bool {
        self.start_pos.is_some() && self.travel <= self.tap_threshold
    }

    /// End the current gesture, reset state, and classify it.
    ///
    /// Returns `None` when no gesture was active.
    pub fn end(&mut self) -> Option<DragEnd> {
        let start = self.start_pos?;
        let result = if self.travel <= self.tap_threshold {
            DragEnd::Tap(start)
        } else {
            let last = self.last_pos.unwrap_or(start);
            DragEnd::Drag {
                total: last - start,
            }
        };
        self.start_pos = None;
        self.last_pos = None;
        self.travel = 0.0;
        Some(result)
    }

    /// Returns `true` while a drag operation is active
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
