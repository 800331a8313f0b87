// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rendering preferences the host applies on the viewport's behalf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewSettings {
    /// Whether the host should render with antialiasing.
    pub antialiasing: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self { antialiasing: true }
    }
}

/// Fixed margins the viewport applies around content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Padding added around the item union when fitting all items into view,
    /// in scene units.
    pub fit_padding: f64,
    /// Margin added around the visible region when growing the scene rect,
    /// in scene units.
    pub scene_rect_margin: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            fit_padding: 20.0,
            scene_rect_margin: 50.0,
        }
    }
}
