// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Editing mode of a scene.
///
/// Exactly one mode is active at a time. The viewport maps modes onto
/// cursors (arrow for [`SceneMode::Normal`], crosshair for
/// [`SceneMode::Wire`]) and routes delete/backspace differently per mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SceneMode {
    /// Selecting and moving items.
    #[default]
    Normal,
    /// Placing wire segments; pointer input extends the in-progress wire.
    Wire,
}

/// Routing orientation of the in-progress wire segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WirePosture {
    /// Route the horizontal leg first.
    #[default]
    HorizontalFirst,
    /// Route the vertical leg first.
    VerticalFirst,
}

impl WirePosture {
    /// Returns the opposite posture.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::HorizontalFirst => Self::VerticalFirst,
            Self::VerticalFirst => Self::HorizontalFirst,
        }
    }
}
