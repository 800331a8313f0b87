// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Circuitry demos.

use circuitry_events::CursorIcon;
use circuitry_viewport::Notice;
use kurbo::Rect;

/// A stand-in for the windowing layer a real host would mirror notices into.
///
/// [`HostShell::apply`] folds a batch of [`Notice`]s into plain state that the
/// demos can print, the same way a real host would set cursors and render
/// hints on its widgets.
#[derive(Debug, Default)]
pub struct HostShell {
    /// Pointer shape currently shown.
    pub cursor: CursorIcon,
    /// Whether the host renders with antialiasing.
    pub antialiasing: bool,
    /// Last zoom ratio reported by the viewport.
    pub zoom: Option<f64>,
    /// Scene rect last handed to the scroll machinery.
    pub scene_rect: Option<Rect>,
}

impl HostShell {
    /// Folds a batch of notices into the shell state.
    pub fn apply(&mut self, notices: impl IntoIterator<Item = Notice>) {
        for notice in notices {
            match notice {
                Notice::ZoomChanged(zoom) => self.zoom = Some(zoom),
                Notice::CursorChanged(cursor) => self.cursor = cursor,
                Notice::SceneRectChanged(rect) => self.scene_rect = Some(rect),
                Notice::RenderHintsChanged { antialiasing } => self.antialiasing = antialiasing,
                Notice::ModeChanged(_) => {}
            }
        }
    }
}
