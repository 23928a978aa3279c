// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_camera2d --heading-base-level=0

//! Understory Camera 2D: a headless follow camera with a mini‑map.
//!
//! This crate models a camera looking at a bounded, Y‑up world. It covers:
//! - World bounds and the camera clamp region (the viewport never shows
//!   anything outside the world).
//! - Clamped pan and zoom, optional follow of a tracked entity, and eased
//!   transitions for animated moves.
//! - The visible world rectangle for a camera position, scale and surface.
//! - A letterboxed, aspect‑preserving mini‑map projection (Y‑down display
//!   space) and its clamped inverse.
//!
//! It does **not** render anything or read input. Callers are expected to:
//! - Feed pointer/pinch gestures (for example via `understory_event_state`)
//!   into [`CameraController`] and [`TrackedEntity`].
//! - Call [`CameraController::update`] once per frame with the tracked
//!   entity's position.
//! - Draw from [`SceneSnapshot`] values and [`MiniMapFrame`]s.
//!
//! Out‑of‑range input is never an error: scales, positions and mini‑map
//! points are clamped, and every division is floored to [`MIN_EXTENT`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_camera2d::{CameraConfig, CameraController, MiniMapProjector, WorldBounds};
//!
//! let world = WorldBounds::from_min_max(0.0, 0.0, 2000.0, 1500.0);
//! let surface = Size::new(750.0, 1334.0);
//! let mut camera = CameraController::new(world, surface, CameraConfig::default());
//!
//! // Follow the player for one frame.
//! camera.update(1.0 / 60.0, Point::new(1000.0, 750.0));
//! assert_eq!(camera.visible_world_rect(), Rect::new(625.0, 83.0, 1375.0, 1417.0));
//!
//! // Draw the camera box on a 150x120 mini-map.
//! let map = MiniMapProjector::new(world, Size::new(150.0, 120.0));
//! let boxed = map.world_rect_to_mini_rect(camera.visible_world_rect());
//! assert!(map.content_rect().contains(boxed.center()));
//!
//! // A tap on the mini-map re-targets the camera (animated).
//! camera.set_focus(false);
//! camera.look_at_minimap_point(&map, Point::new(30.0, 60.0));
//! ```
//!
//! ## Scale convention
//!
//! The visible half extent on each axis is `surface / (2 * scale)`, so a
//! larger scale shows less of the world. [`CameraController::zoom_in`]
//! multiplies the scale by `0.85` and [`CameraController::zoom_out`] by
//! `1.15`; the pair is not an exact inverse, and a step absorbed by the scale
//! limits cannot be undone by the opposite step.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod camera;
mod config;
mod entity;
mod minimap;
mod parallax;
mod snapshot;
pub mod transition;
pub mod viewport;

pub use bounds::{MIN_EXTENT, WorldBounds};
pub use camera::{
    CameraController, CameraDebugInfo, CameraState, clamp_axis, clamp_position, clamp_region,
};
pub use config::CameraConfig;
pub use entity::TrackedEntity;
pub use minimap::{GridLines, MiniMapConfig, MiniMapFrame, MiniMapProjector};
pub use parallax::ParallaxLayer;
pub use snapshot::SceneSnapshot;
pub use transition::{Easing, Transition};
pub use viewport::{surface_drag_to_camera_delta, surface_to_world, visible_world_rect};
