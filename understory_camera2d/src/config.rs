// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunables for a [`crate::CameraController`].
///
/// The defaults reproduce the follow camera of a phone‑sized scene: scale in
/// `[0.5, 2.0]`, multiplicative zoom steps of `0.85` / `1.15`, and quarter
/// second animations. None of these values is an invariant; callers are free
/// to pick other ranges.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraConfig {
    /// Smallest allowed camera scale.
    pub min_scale: f64,
    /// Largest allowed camera scale.
    pub max_scale: f64,
    /// Factor applied to the scale by [`crate::CameraController::zoom_in`].
    pub zoom_in_step: f64,
    /// Factor applied to the scale by [`crate::CameraController::zoom_out`].
    pub zoom_out_step: f64,
    /// Duration in seconds of animated scale changes.
    pub scale_duration: f64,
    /// Duration in seconds of animated position changes.
    pub pan_duration: f64,
}

impl CameraConfig {
    /// Returns the config with finite, positive scale limits and
    /// `min_scale <= max_scale`.
    ///
    /// A limit that is not finite and positive falls back to its default.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            self.min_scale = defaults.min_scale;
        }
        if !(self.max_scale.is_finite() && self.max_scale > 0.0) {
            self.max_scale = defaults.max_scale;
        }
        if self.min_scale > self.max_scale {
            core::mem::swap(&mut self.min_scale, &mut self.max_scale);
        }
        self
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 2.0,
            zoom_in_step: 0.85,
            zoom_out_step: 1.15,
            scale_duration: 0.25,
            pan_duration: 0.25,
        }
    }
}
