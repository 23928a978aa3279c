// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors from loading or validating a [`crate::SceneConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON or did not match the config shape.
    #[error("malformed scene config: {0}")]
    Json(#[from] serde_json::Error),
    /// `min_scale` is greater than `max_scale`.
    #[error("camera scale range is empty: min_scale {min} > max_scale {max}")]
    EmptyScaleRange {
        /// Configured minimum scale.
        min: f64,
        /// Configured maximum scale.
        max: f64,
    },
    /// A tunable that must be strictly positive and finite is not.
    #[error("`{field}` must be positive and finite, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value found.
        value: f64,
    },
    /// A tunable that must be non‑negative and finite is not.
    #[error("`{field}` must be non-negative and finite, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// Value found.
        value: f64,
    },
}
