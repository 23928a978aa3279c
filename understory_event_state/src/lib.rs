// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: gesture state managers for camera input.
//!
//! This crate provides small, focused state machines for the gestures that
//! drive a 2D camera and its mini‑map. Each module handles one pattern:
//!
//! - [`drag`]: Track drag operations with movement deltas, total offsets and
//!   drag‑vs‑tap classification
//! - [`pinch`]: Turn a recognizer's cumulative pinch scale into incremental
//!   zoom factors
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to classify the gesture
//! - **Integration-friendly**: Accept raw positions and scales from any input layer
//!
//! The crate does not assume any particular UI framework, event system, or
//! camera model. Managers accept raw pointer positions or pinch scales and
//! produce deltas, factors, or an end‑of‑gesture classification that
//! applications can interpret.
//!
//! ## Usage Patterns
//!
//! ### Tap or drag
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::drag::{DragEnd, DragState};
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 10.0));
//! drag.update(Point::new(12.0, 11.0));
//! assert_eq!(drag.end(), Some(DragEnd::Tap(Point::new(10.0, 10.0))));
//! # }
//! ```
//!
//! ### Pinch zoom
//!
//! ```rust
//! use understory_event_state::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! pinch.begin();
//! let factor = pinch.update(1.25).unwrap();
//! assert_eq!(factor, 1.25);
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

#[cfg(feature = "drag")]
pub mod drag;
pub mod pinch;
