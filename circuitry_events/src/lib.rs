// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circuitry Events: the input vocabulary shared by Circuitry's viewport layer.
//!
//! This crate defines the plain-data event types a host window system feeds
//! into a Circuitry viewport: key presses, pointer presses/moves/releases and
//! wheel motion, all expressed in view/device coordinates. It carries no
//! routing or state of its own; it exists so that the viewport controller and
//! any host adapter agree on one small vocabulary.
//!
//! Two supporting types shape how hosts integrate:
//!
//! - [`EventStatus`] is returned by every viewport input hook. [`EventStatus::Ignored`]
//!   means "run your default behavior"; [`EventStatus::Handled`] means the
//!   event was consumed and the host must not process it further.
//! - [`CursorIcon`] names the pointer shapes the viewport asks the host to
//!   display. The viewport never touches a windowing API itself.
//!
//! ## Minimal example
//!
//! ```rust
//! use circuitry_events::{EventStatus, Key, KeyEvent, Modifiers};
//!
//! let event = KeyEvent::new(Key::Plus, Modifiers::CTRL);
//! assert!(event.modifiers.contains(Modifiers::CTRL));
//!
//! // A host falls back to its own handling on `Ignored`.
//! let status = EventStatus::Ignored;
//! assert!(!status.is_handled());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod keyboard;
mod pointer;
mod status;

pub use keyboard::{Key, KeyEvent, Modifiers};
pub use pointer::{PointerButton, PointerEvent, WheelEvent};
pub use status::{CursorIcon, EventStatus};
