// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circuitry Viewport: the interactive viewport controller of a Circuitry editor.
//!
//! This crate provides a headless model of the scrollable, zoomable canvas a
//! schematic editor presents: a pan+zoom transform between scene (world) and
//! view (device) coordinates, an interaction mode, and the translation of raw
//! input events into transform updates and scene edits. It owns no rendering
//! backend and no window; a host feeds events in through the [`InputSink`]
//! hooks and reads results back through accessors and the [`Notice`] stream.
//!
//! ## Zoom model
//!
//! Zoom is stored as a normalized value in `[0, 1]` and mapped onto the
//! actual scale multiplier by exponential interpolation between a minimum and
//! maximum ratio (see [`ZoomSpec`]). Stepping the normalized value changes
//! the perceived zoom speed uniformly across the whole range, which is why
//! the interpolation happens in the logarithmic domain. Rescaling keeps the
//! scene point under the pointer fixed.
//!
//! ## Input routing
//!
//! Every [`InputSink`] hook returns an [`EventStatus`]; a host runs its own
//! default handling when it gets [`EventStatus::Ignored`] back. The bindings:
//!
//! - Ctrl+`+` / Ctrl+`-` / Ctrl+`0`: zoom in / out / reset to 1.0×.
//! - Ctrl+wheel: zoom, clamped into `[0, 1]` normalized.
//! - Middle button drag: pan; the cursor switches to a closed hand.
//! - Ctrl+`W`, Ctrl+Space, Escape: wire mode, posture toggle, normal mode.
//! - Delete / Backspace: remove selected items or the last wire point,
//!   depending on the scene mode.
//!
//! ## Minimal example
//!
//! ```rust
//! use circuitry_events::{EventStatus, Key, KeyEvent, Modifiers};
//! use circuitry_scene::SimpleScene;
//! use circuitry_viewport::{InputSink, Viewport};
//! use kurbo::Rect;
//!
//! let mut viewport: Viewport<SimpleScene> = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! viewport.set_scene(Some(SimpleScene::new()));
//!
//! // Zoom in one step via the keyboard binding.
//! let status = viewport.key_down(&KeyEvent::new(Key::Plus, Modifiers::CTRL));
//! assert_eq!(status, EventStatus::Handled);
//! assert!(viewport.zoom() > 1.0);
//! ```
//!
//! [`EventStatus`]: circuitry_events::EventStatus
//! [`EventStatus::Ignored`]: circuitry_events::EventStatus::Ignored

mod notice;
mod settings;
mod sink;
mod viewport;
mod zoom;

pub use notice::Notice;
pub use settings::{ViewSettings, ViewportConfig};
pub use sink::InputSink;
pub use viewport::{Viewport, ViewportDebugInfo, ViewportMode};
pub use zoom::{ZoomPolicy, ZoomSpec};
