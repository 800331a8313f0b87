// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circuitry Scene: the scene collaborator surface of a Circuitry editor.
//!
//! The viewport controller in `circuitry_viewport` never owns schematic data;
//! it talks to a scene through the [`Scene`] trait defined here. The trait
//! covers exactly what the viewport needs:
//!
//! - The current editing [`SceneMode`] and transitions into it.
//! - Wire-drawing sub-state: posture toggling and removal of the last placed
//!   wire point.
//! - Selected top-level items, in selection-iteration order, so the viewport
//!   can turn a delete key into per-item [`Command`]s.
//! - The positioned bounding rectangles of all top-level items, so the
//!   viewport can fit them into view.
//! - A command stack to push undoable mutations onto.
//!
//! Mode changes fan out through [`ModeObservers`], an explicit registry with
//! token-based unsubscription: subscribers get a [`Subscription`] back and can
//! detach exactly the closure they registered, so replacing a scene never
//! leaves a stale subscription behind.
//!
//! [`SimpleScene`] is a reference implementation backing the demos and the
//! viewport's tests. A real editor brings its own scene; the viewport is
//! generic over anything implementing [`Scene`].
//!
//! ## Minimal example
//!
//! ```rust
//! use circuitry_scene::{Scene, SceneMode, SimpleScene};
//! use kurbo::{Point, Rect};
//!
//! let mut scene = SimpleScene::new();
//! let id = scene.add_item(Rect::new(0.0, 0.0, 40.0, 20.0), Point::new(100.0, 50.0));
//! scene.select(id);
//!
//! scene.set_mode(SceneMode::Wire);
//! assert_eq!(scene.mode(), SceneMode::Wire);
//! assert_eq!(scene.selected_top_level_items(), vec![id]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod item;
mod mode;
mod observers;
mod simple;

use alloc::vec::Vec;

pub use command::Command;
pub use item::{ItemBounds, ItemId};
pub use mode::{SceneMode, WirePosture};
pub use observers::{ModeObserver, ModeObservers, Subscription};
pub use simple::SimpleScene;

/// The scene collaborator a viewport drives.
///
/// All operations are total; implementations must not panic on redundant
/// calls (for example removing a wire point when none was placed).
pub trait Scene {
    /// Returns the current editing mode.
    fn mode(&self) -> SceneMode;

    /// Switches the editing mode, notifying mode observers on change.
    fn set_mode(&mut self, mode: SceneMode);

    /// Flips the routing orientation of the in-progress wire segment.
    fn toggle_wire_posture(&mut self);

    /// Removes the most recently placed point of the in-progress wire.
    fn remove_last_wire_point(&mut self);

    /// Returns the selected top-level items in selection-iteration order.
    fn selected_top_level_items(&self) -> Vec<ItemId>;

    /// Returns the positioned bounding rectangles of all top-level items.
    fn item_bounds(&self) -> Vec<ItemBounds>;

    /// Pushes an undoable mutation onto the scene's command stack.
    fn push_command(&mut self, command: Command);
}
