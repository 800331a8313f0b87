// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use circuitry_events::{EventStatus, KeyEvent, PointerEvent, WheelEvent};
use circuitry_scene::SceneMode;

/// Input hooks a host offers events to.
///
/// This is the seam between a host's event loop and the viewport: one method
/// per inbound event kind, each returning an [`EventStatus`]. A host offers
/// the event to the sink first and runs its own default behavior only when
/// the sink returns [`EventStatus::Ignored`]. Composition over inheritance:
/// the sink never sees the host's widget types, and the host never needs to
/// subclass anything.
pub trait InputSink {
    /// Offers a key press.
    fn key_down(&mut self, event: &KeyEvent) -> EventStatus;

    /// Offers wheel motion.
    fn wheel(&mut self, event: &WheelEvent) -> EventStatus;

    /// Offers a pointer button press.
    fn pointer_down(&mut self, event: &PointerEvent) -> EventStatus;

    /// Offers a pointer move.
    fn pointer_move(&mut self, event: &PointerEvent) -> EventStatus;

    /// Offers a pointer button release.
    fn pointer_up(&mut self, event: &PointerEvent) -> EventStatus;

    /// Notifies the sink that the scene's editing mode changed externally.
    fn scene_mode_changed(&mut self, mode: SceneMode) -> EventStatus;
}
