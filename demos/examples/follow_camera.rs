// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Follow camera with a mini-map, driven headlessly.
//!
//! Plays a short scripted session against `overstory_camera::CameraScene` at
//! 60 frames per second. A HUD overlay polls the scene at 30 Hz and prints the
//! presented scale and camera position plus the mini-map drawing list.
//!
//! Run:
//! - `cargo run -p understory_demos --example follow_camera`
//! - `cargo run -p understory_demos --example follow_camera -- scene.json`
//!
//! Set `RUST_LOG=overstory_camera=trace` to see input routing.

use std::path::PathBuf;

use kurbo::{Point, Size};
use overstory_camera::{CameraScene, Direction, InputEvent, PointerTarget};
use tracing::info;
use understory_demos::{DemoError, OverlayPoller, init_tracing, load_config};

const FRAME: f64 = 1.0 / 60.0;

fn down(target: PointerTarget, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown {
        target,
        pos: Point::new(x, y),
    }
}

fn drag(target: PointerTarget, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove {
        target,
        pos: Point::new(x, y),
    }
}

fn up(target: PointerTarget, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerUp {
        target,
        pos: Point::new(x, y),
    }
}

/// `(frame, event)` pairs, in frame order.
fn script() -> Vec<(u32, InputEvent)> {
    use PointerTarget::{MiniMap, Scene};
    vec![
        // Focused: tap to walk the player, camera follows.
        (10, down(Scene, 600.0, 400.0)),
        (11, up(Scene, 600.0, 400.0)),
        (40, InputEvent::Step(Direction::Up)),
        (60, InputEvent::ZoomIn),
        (80, InputEvent::ZoomIn),
        // Free camera: drag to pan, then tap to send the player.
        (100, InputEvent::ToggleFocus),
        (110, down(Scene, 375.0, 667.0)),
        (112, drag(Scene, 300.0, 600.0)),
        (114, drag(Scene, 150.0, 500.0)),
        (116, up(Scene, 150.0, 500.0)),
        (130, down(Scene, 200.0, 200.0)),
        (131, up(Scene, 201.0, 202.0)),
        // Mini-map: jump to the far corner, then drag back.
        (150, down(MiniMap, 140.0, 10.0)),
        (160, drag(MiniMap, 100.0, 40.0)),
        (170, up(MiniMap, 100.0, 40.0)),
        // Pinch out, rotate the device, and re-focus.
        (190, InputEvent::Pinch { scale: 1.0 }),
        (192, InputEvent::Pinch { scale: 1.6 }),
        (194, InputEvent::PinchEnd),
        (210, InputEvent::Resize(Size::new(1334.0, 750.0))),
        (220, InputEvent::ToggleFocus),
    ]
}

fn main() -> Result<(), DemoError> {
    init_tracing();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(path.as_deref())?;
    let mut scene = CameraScene::new(config);
    let mut hud = OverlayPoller::new(30.0);

    let script = script();
    let last_frame = script.last().map_or(0, |(f, _)| *f) + 30;
    let mut pending = script.into_iter().peekable();

    for frame in 0..=last_frame {
        while let Some((_, event)) = pending.next_if(|(f, _)| *f == frame) {
            info!(frame, ?event, "input");
            scene.handle(event);
        }
        scene.tick(FRAME);

        if let Some(snap) = hud.tick(FRAME, &scene) {
            // Print every fifth poll to keep the output readable.
            if frame % 10 == 0 {
                println!("[{frame:>3}] {snap}");
            }
        }
    }

    let frame = scene.minimap_frame();
    println!("mini-map content: {:?}", frame.content_rect);
    println!("mini-map marker:  {:?}", frame.marker.center);
    println!("mini-map camera:  {:?}", frame.viewport);
    println!("mini-map grid:    {} lines", scene.minimap_grid().count());
    println!("parallax:         {:?}", scene.parallax_offsets());
    println!("{:?}", scene.camera().debug_info());
    Ok(())
}
