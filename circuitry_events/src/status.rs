// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Result of offering an input event to a viewport hook.
///
/// Hosts must run their own default handling for an event when the hook
/// returns [`EventStatus::Ignored`]; a [`EventStatus::Handled`] event is
/// consumed and must not be processed further.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum EventStatus {
    /// The event was consumed by the viewport.
    Handled,
    /// The event was not of interest; run the host's default behavior.
    Ignored,
}

impl EventStatus {
    /// Returns `true` if the event was consumed.
    #[must_use]
    pub fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// Pointer shapes the viewport asks its host to display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorIcon {
    /// The normal arrow pointer.
    #[default]
    Arrow,
    /// Closed hand, shown while panning.
    ClosedHand,
    /// Crosshair, shown while drawing wires.
    Crosshair,
}
