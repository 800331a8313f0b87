// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

/// Keys the Circuitry viewport distinguishes.
///
/// Anything outside the viewport's bindings arrives as [`Key::Other`] with the
/// host's own key code, so a host can still tell delegated keys apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// The `+` key (zoom in when combined with [`Modifiers::CTRL`]).
    Plus,
    /// The `-` key (zoom out when combined with [`Modifiers::CTRL`]).
    Minus,
    /// The `0` key (zoom reset when combined with [`Modifiers::CTRL`]).
    Digit0,
    /// The `W` key (wire mode when combined with [`Modifiers::CTRL`]).
    KeyW,
    /// The space bar (wire posture toggle when combined with [`Modifiers::CTRL`]).
    Space,
    /// The escape key.
    Escape,
    /// The delete key.
    Delete,
    /// The backspace key.
    Backspace,
    /// Any other key, carrying the host's key code.
    Other(u32),
}

bitflags! {
    /// Keyboard modifier state at the time of an input event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// Control held.
        const CTRL = 1 << 0;
        /// Shift held.
        const SHIFT = 1 << 1;
        /// Alt/Option held.
        const ALT = 1 << 2;
        /// Super/Command held.
        const META = 1 << 3;
    }
}

/// A key press delivered to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed key.
    pub key: Key,
    /// Modifier state at press time.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a key event from a key and its modifier state.
    #[must_use]
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a key event with no modifiers held.
    #[must_use]
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{Key, KeyEvent, Modifiers};

    #[test]
    fn plain_events_carry_no_modifiers() {
        let ev = KeyEvent::plain(Key::Escape);
        assert!(ev.modifiers.is_empty());
        assert_eq!(ev.key, Key::Escape);
    }

    #[test]
    fn modifier_flags_combine() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
    }

    #[test]
    fn other_keys_preserve_host_codes() {
        let ev = KeyEvent::plain(Key::Other(0x41));
        assert_eq!(ev.key, Key::Other(0x41));
        assert_ne!(ev.key, Key::Other(0x42));
    }
}
