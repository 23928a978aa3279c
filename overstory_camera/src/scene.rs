// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use tracing::{debug, info, trace};
use understory_camera2d::{
    CameraController, GridLines, MiniMapFrame, MiniMapProjector, ParallaxLayer, SceneSnapshot,
    TrackedEntity, WorldBounds, surface_drag_to_camera_delta, surface_to_world,
};
use understory_event_state::drag::{DragEnd, DragState};
use understory_event_state::pinch::PinchState;

use crate::config::SceneConfig;

/// Which surface a pointer event landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// The main rendering surface. Positions are Y‑down surface coordinates.
    Scene,
    /// The mini‑map. Positions are Y‑down display coordinates.
    MiniMap,
}

/// D‑pad direction for [`InputEvent::Step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// +Y in world space.
    Up,
    /// −Y in world space.
    Down,
    /// −X in world space.
    Left,
    /// +X in world space.
    Right,
}

impl Direction {
    fn unit(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, 1.0),
            Self::Down => Vec2::new(0.0, -1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Input consumed by [`CameraScene::handle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed.
    PointerDown {
        /// Surface the pointer is on.
        target: PointerTarget,
        /// Position in that surface's coordinates.
        pos: Point,
    },
    /// Pointer moved while pressed.
    PointerMove {
        /// Surface the gesture started on.
        target: PointerTarget,
        /// Position in that surface's coordinates.
        pos: Point,
    },
    /// Pointer released.
    PointerUp {
        /// Surface the gesture started on.
        target: PointerTarget,
        /// Position in that surface's coordinates.
        pos: Point,
    },
    /// Cumulative pinch scale since the pinch began.
    Pinch {
        /// `1.0` at the start of the pinch.
        scale: f64,
    },
    /// Pinch finished.
    PinchEnd,
    /// Zoom in by one step.
    ZoomIn,
    /// Zoom out by one step.
    ZoomOut,
    /// Toggle following of the tracked entity.
    ToggleFocus,
    /// Move the tracked entity one step.
    Step(Direction),
    /// The rendering surface changed size.
    Resize(Size),
    /// The mini‑map display changed size.
    ResizeMiniMap(Size),
}

/// A follow camera looking at a bounded world with a tracked entity and a
/// mini‑map.
///
/// Pointer handling on the main surface depends on focus:
/// - Focused: pressing or dragging moves the tracked entity toward the
///   pointer, and the camera follows it.
/// - Unfocused: dragging pans the camera; a tap moves the tracked entity to
///   the tapped point.
///
/// Pressing or dragging on the mini‑map re‑targets the camera (animated) to
/// the corresponding world point. While focused the follow wins on the next
/// tick.
#[derive(Clone, Debug)]
pub struct CameraScene {
    config: SceneConfig,
    bounds: WorldBounds,
    entity: TrackedEntity,
    camera: CameraController,
    minimap_display: Size,
    scene_drag: DragState,
    minimap_drag: DragState,
    pinch: PinchState,
}

impl CameraScene {
    /// Builds a scene sized for `config.surface`.
    ///
    /// The entity starts at the world center and the camera starts focused on it.
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        let bounds = WorldBounds::for_surface(config.surface, config.min_world_size);
        let entity = TrackedEntity::new(bounds.center())
            .with_move_duration(config.entity_move_duration);
        let mut camera = CameraController::new(bounds, config.surface, config.camera);
        camera.update(0.0, entity.position());
        info!(
            world = ?bounds.rect(),
            surface = ?config.surface,
            "camera scene created"
        );
        Self {
            config,
            bounds,
            entity,
            camera,
            minimap_display: config.minimap_display,
            scene_drag: DragState::with_tap_threshold(config.tap_threshold),
            minimap_drag: DragState::with_tap_threshold(config.tap_threshold),
            pinch: PinchState::default(),
        }
    }

    /// Scene tunables.
    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// World bounds.
    #[must_use]
    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// The tracked entity.
    #[must_use]
    pub fn entity(&self) -> &TrackedEntity {
        &self.entity
    }

    /// Applies one input event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { target, pos } => self.pointer_down(target, pos),
            InputEvent::PointerMove { target, pos } => self.pointer_move(target, pos),
            InputEvent::PointerUp { target, pos } => self.pointer_up(target, pos),
            InputEvent::Pinch { scale } => {
                if !self.pinch.is_active() {
                    self.pinch.begin();
                }
                if let Some(factor) = self.pinch.update(scale) {
                    self.camera.pinch(factor);
                }
            }
            InputEvent::PinchEnd => self.pinch.end(),
            InputEvent::ZoomIn => {
                self.camera.zoom_in();
                debug!(scale = self.camera.scale(), "zoom in");
            }
            InputEvent::ZoomOut => {
                self.camera.zoom_out();
                debug!(scale = self.camera.scale(), "zoom out");
            }
            InputEvent::ToggleFocus => {
                let focused = !self.camera.is_focused();
                self.camera.set_focus(focused);
                debug!(focused, "camera focus toggled");
            }
            InputEvent::Step(dir) => {
                self.entity.move_by(dir.unit() * self.config.entity_step, &self.bounds);
            }
            InputEvent::Resize(surface) => self.resize(surface),
            InputEvent::ResizeMiniMap(display) => {
                self.minimap_display = display;
            }
        }
    }

    /// Advances the scene by `dt` seconds: entity first, then the camera.
    pub fn tick(&mut self, dt: f64) {
        self.entity.advance(dt);
        self.camera.update(dt, self.entity.position());
    }

    /// Value snapshot for overlays.
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(&self.camera, self.entity.position())
    }

    /// Mini‑map projection for the current world and display size.
    #[must_use]
    pub fn minimap(&self) -> MiniMapProjector {
        MiniMapProjector::new(self.bounds, self.minimap_display)
    }

    /// Drawing list for the current mini‑map frame.
    #[must_use]
    pub fn minimap_frame(&self) -> MiniMapFrame {
        self.minimap().frame(&self.snapshot(), &self.config.minimap)
    }

    /// Mini‑map grid lines at the configured spacing.
    #[must_use]
    pub fn minimap_grid(&self) -> GridLines {
        self.minimap().grid_lines(self.config.minimap.grid_spacing)
    }

    /// Far, mid and near background offsets for the presented camera position.
    #[must_use]
    pub fn parallax_offsets(&self) -> [Vec2; 3] {
        let cam = self.camera.presented_position();
        [
            ParallaxLayer::FAR.offset(cam),
            ParallaxLayer::MID.offset(cam),
            ParallaxLayer::NEAR.offset(cam),
        ]
    }

    /// Maps a main‑surface point to world space using the presented camera.
    #[must_use]
    pub fn surface_to_world(&self, pos: Point) -> Point {
        surface_to_world(
            pos,
            self.camera.presented_position(),
            self.camera.presented_scale(),
            self.camera.surface(),
        )
    }

    fn pointer_down(&mut self, target: PointerTarget, pos: Point) {
        match target {
            PointerTarget::Scene => {
                self.scene_drag.start(pos);
                if self.camera.is_focused() {
                    self.move_entity_to_surface_point(pos);
                }
            }
            PointerTarget::MiniMap => {
                self.minimap_drag.start(pos);
                self.look_at_minimap(pos);
            }
        }
    }

    fn pointer_move(&mut self, target: PointerTarget, pos: Point) {
        match target {
            PointerTarget::Scene => {
                let was_tap = self.scene_drag.is_tap_candidate();
                let Some(delta) = self.scene_drag.update(pos) else {
                    return;
                };
                if self.camera.is_focused() {
                    self.move_entity_to_surface_point(pos);
                } else if !self.scene_drag.is_tap_candidate() {
                    // The move that leaves the tap zone pans by everything
                    // since pointer down, keeping the content under the pointer.
                    let delta = if was_tap {
                        self.scene_drag.total_offset(pos).unwrap_or(delta)
                    } else {
                        delta
                    };
                    let world_delta = surface_drag_to_camera_delta(delta, self.camera.scale());
                    self.camera.move_by(world_delta);
                }
            }
            PointerTarget::MiniMap => {
                if self.minimap_drag.update(pos).is_some() {
                    self.look_at_minimap(pos);
                }
            }
        }
    }

    fn pointer_up(&mut self, target: PointerTarget, pos: Point) {
        match target {
            PointerTarget::Scene => {
                if let Some(DragEnd::Tap(at)) = self.scene_drag.end() {
                    if !self.camera.is_focused() {
                        self.move_entity_to_surface_point(at);
                    }
                    trace!(?at, "scene tap");
                }
            }
            PointerTarget::MiniMap => {
                if let Some(end) = self.minimap_drag.end() {
                    trace!(?end, ?pos, "mini-map gesture ended");
                }
            }
        }
    }

    fn move_entity_to_surface_point(&mut self, pos: Point) {
        let world = self.surface_to_world(pos);
        self.entity.move_toward(world, &self.bounds);
        trace!(?world, destination = ?self.entity.destination(), "entity retargeted");
    }

    fn look_at_minimap(&mut self, pos: Point) {
        let projector = self.minimap();
        let requested = projector.mini_to_world(pos);
        self.camera.look_at_minimap_point(&projector, pos);
        if self.camera.position() != requested {
            trace!(?requested, clamped = ?self.camera.position(), "mini-map target clamped");
        }
    }

    fn resize(&mut self, surface: Size) {
        self.camera.set_surface_size(surface);
        self.camera.set_position(self.entity.position(), false);
        debug!(?surface, position = ?self.camera.position(), "surface resized");
    }
}
