// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory camera demos.
//!
//! - [`OverlayPoller`]: reads scene snapshots at a fixed rate, the way a HUD
//!   or mini‑map overlay refreshes independently of the frame loop.
//! - [`load_config`]: loads a [`SceneConfig`] from an optional JSON file.
//! - [`init_tracing`]: installs a `tracing` subscriber honoring `RUST_LOG`.

use std::path::{Path, PathBuf};

use overstory_camera::{CameraScene, ConfigError, SceneConfig, SceneSnapshot};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors surfaced by the demo binaries.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file was read but is not a valid scene config.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Loads a scene config from `path`, or the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<SceneConfig, DemoError> {
    let Some(path) = path else {
        return Ok(SceneConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SceneConfig::from_json_str(&text)?)
}

/// Installs a formatting subscriber; `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Polls a scene for overlay snapshots at a fixed rate.
///
/// The poller never holds on to the scene; each poll copies a
/// [`SceneSnapshot`], so an overlay drawing from [`OverlayPoller::latest`]
/// is at most one poll interval stale.
#[derive(Clone, Debug)]
pub struct OverlayPoller {
    interval: f64,
    since_last: f64,
    latest: Option<SceneSnapshot>,
}

impl OverlayPoller {
    /// Creates a poller firing `hz` times per second. The first call to
    /// [`OverlayPoller::tick`] always polls.
    #[must_use]
    pub fn new(hz: f64) -> Self {
        let interval = if hz.is_finite() && hz > 0.0 { 1.0 / hz } else { 0.0 };
        Self {
            interval,
            since_last: interval,
            latest: None,
        }
    }

    /// Advances the poller clock by `dt`, returning a fresh snapshot when
    /// the interval has elapsed.
    pub fn tick(&mut self, dt: f64, scene: &CameraScene) -> Option<SceneSnapshot> {
        self.since_last += dt.max(0.0);
        if self.since_last + 1e-9 < self.interval {
            return None;
        }
        self.since_last = 0.0;
        let snap = scene.snapshot();
        self.latest = Some(snap);
        Some(snap)
    }

    /// Most recent snapshot, if any poll has happened.
    #[must_use]
    pub fn latest(&self) -> Option<SceneSnapshot> {
        self.latest
    }
}
