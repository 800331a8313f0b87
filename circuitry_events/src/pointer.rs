// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::Modifiers;

/// Pointer buttons the viewport distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button.
    Left,
    /// Middle button / wheel click. Drives viewport panning.
    Middle,
    /// Secondary button.
    Right,
}

/// A pointer press, move, or release in view/device coordinates.
///
/// For move events `button` is `None`; for presses and releases it names the
/// button that changed state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Pointer position in view/device coordinates.
    pub pos: Point,
    /// The button that changed state, if any.
    pub button: Option<PointerButton>,
    /// Modifier state at event time.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Creates a press/release event for `button` at `pos`.
    #[must_use]
    pub fn button(pos: Point, button: PointerButton) -> Self {
        Self {
            pos,
            button: Some(button),
            modifiers: Modifiers::empty(),
        }
    }

    /// Creates a move event at `pos`.
    #[must_use]
    pub fn moved(pos: Point) -> Self {
        Self {
            pos,
            button: None,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns a copy with the given modifier state.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Wheel motion at a pointer position.
///
/// `delta_y` is positive for wheel-up / scroll-away, matching the sign
/// convention of the host toolkits this crate is fed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Pointer position in view/device coordinates.
    pub pos: Point,
    /// Vertical wheel delta; positive is wheel-up.
    pub delta_y: f64,
    /// Modifier state at event time.
    pub modifiers: Modifiers,
}

impl WheelEvent {
    /// Creates a wheel event at `pos` with the given vertical delta.
    #[must_use]
    pub fn new(pos: Point, delta_y: f64, modifiers: Modifiers) -> Self {
        Self {
            pos,
            delta_y,
            modifiers,
        }
    }
}
