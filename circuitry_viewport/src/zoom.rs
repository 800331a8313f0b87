// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Zoom range and step configuration.
///
/// Zoom is tracked as a normalized value in `[0, 1]` and mapped onto the
/// actual scale multiplier by interpolating between `min` and `max` in the
/// logarithmic domain, so each normalized step multiplies the scale by the
/// same ratio regardless of where in the range it lands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomSpec {
    /// Actual zoom at normalized value `0.0`.
    pub min: f64,
    /// Actual zoom at normalized value `1.0`.
    pub max: f64,
    /// Normalized increment applied per zoom-in/out step.
    pub step: f64,
}

impl Default for ZoomSpec {
    fn default() -> Self {
        Self {
            min: 0.25,
            max: 10.0,
            step: 0.05,
        }
    }
}

impl ZoomSpec {
    /// Returns the normalized value corresponding to an actual zoom ratio.
    ///
    /// The result is deliberately not clamped: callers that accept arbitrary
    /// ratios pass them through here and apply range policy themselves.
    #[must_use]
    pub fn value_for(&self, actual: f64) -> f64 {
        (self.min / actual).ln() / (self.min / self.max).ln()
    }

    /// Returns the actual zoom ratio for a normalized value.
    #[must_use]
    pub fn actual_for(&self, value: f64) -> f64 {
        (self.min.ln() + (self.max.ln() - self.min.ln()) * value).exp()
    }
}

/// Range policy for keyboard-driven zoom stepping.
///
/// Wheel zoom always clamps the normalized value into `[0, 1]`. Keyboard
/// zoom historically did not, allowing a transient overshoot beyond the
/// configured range; whether to keep that behavior is a policy choice rather
/// than something this crate decides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ZoomPolicy {
    /// Clamp the normalized value into `[0, 1]` on keyboard zoom steps.
    pub clamp_on_keyboard_zoom: bool,
}
