// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use circuitry_events::CursorIcon;
use kurbo::Rect;

use crate::ViewportMode;

/// Outbound notification from the viewport to its host.
///
/// Notices accumulate while input hooks run and are drained with
/// [`Viewport::take_notices`](crate::Viewport::take_notices). They carry
/// everything a host must mirror into its windowing layer: the cursor shape,
/// render hints, the scene rect handed to the scroll machinery, and the
/// zoom/mode values an application surfaces in its UI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Notice {
    /// The actual zoom ratio changed.
    ZoomChanged(f64),
    /// The viewport's interaction mode changed.
    ModeChanged(ViewportMode),
    /// The host should display a different pointer shape.
    CursorChanged(CursorIcon),
    /// The scene rect grew; the host should adopt the new bounds.
    SceneRectChanged(Rect),
    /// Render hints changed; currently only antialiasing.
    RenderHintsChanged {
        /// Whether to render with antialiasing.
        antialiasing: bool,
    },
}
