// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Camera: a follow camera scene assembled from Understory kernels.
//!
//! [`CameraScene`] wires together:
//! - `understory_camera2d` for world bounds, the clamped camera, the tracked
//!   entity, parallax offsets and the mini‑map projection.
//! - `understory_event_state` for drag‑vs‑tap classification and pinch
//!   tracking.
//!
//! The host owns the frame loop. Each frame it forwards input with
//! [`CameraScene::handle`], advances time with [`CameraScene::tick`], and reads
//! [`CameraScene::snapshot`] / [`CameraScene::minimap_frame`] to draw. Overlays
//! that refresh on their own timer should keep the [`SceneSnapshot`] they
//! copied rather than hold a reference into the scene.
//!
//! ```rust
//! use kurbo::Point;
//! use overstory_camera::{CameraScene, InputEvent, PointerTarget, SceneConfig};
//!
//! let mut scene = CameraScene::new(SceneConfig::default());
//! scene.handle(InputEvent::ToggleFocus);
//!
//! // Drag on the mini-map: the camera eases toward the world point under it.
//! scene.handle(InputEvent::PointerDown { target: PointerTarget::MiniMap, pos: Point::new(20.0, 60.0) });
//! scene.handle(InputEvent::PointerUp { target: PointerTarget::MiniMap, pos: Point::new(20.0, 60.0) });
//! for _ in 0..20 {
//!     scene.tick(1.0 / 60.0);
//! }
//! let snap = scene.snapshot();
//! assert_eq!(snap.presented_position, snap.camera.position);
//! ```
//!
//! Configuration is plain data ([`SceneConfig`]) and can be loaded from JSON
//! with [`SceneConfig::from_json_str`]; that is the only fallible operation in
//! the crate. Diagnostics are emitted through `tracing`.

mod config;
mod error;
mod scene;

pub use config::SceneConfig;
pub use error::ConfigError;
pub use scene::{CameraScene, Direction, InputEvent, PointerTarget};
pub use understory_camera2d::{MiniMapFrame, SceneSnapshot};
