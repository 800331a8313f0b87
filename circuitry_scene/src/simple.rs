// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::{Command, ItemBounds, ItemId, ModeObservers, Scene, SceneMode, WirePosture};

/// A reference [`Scene`] implementation.
///
/// `SimpleScene` keeps just enough state to exercise a viewport: top-level
/// items with positioned bounds, a selection in selection-iteration order,
/// the editing mode with observer notification, the in-progress wire of wire
/// mode, and an ordered command stack. Editors are expected to bring their
/// own scene; this one backs the demos and tests.
#[derive(Debug, Default)]
pub struct SimpleScene {
    items: Vec<ItemBounds>,
    selection: Vec<ItemId>,
    mode: SceneMode,
    wire_posture: WirePosture,
    wire_points: Vec<Point>,
    commands: Vec<Command>,
    observers: ModeObservers,
    next_id: u64,
}

impl SimpleScene {
    /// Creates an empty scene in [`SceneMode::Normal`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level item and returns its id.
    pub fn add_item(&mut self, bounding_rect: Rect, scene_pos: Point) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(ItemBounds {
            id,
            bounding_rect,
            scene_pos,
        });
        id
    }

    /// Adds `id` to the selection unless already selected.
    ///
    /// Selection-iteration order is the order of `select` calls.
    pub fn select(&mut self, id: ItemId) {
        if !self.selection.contains(&id) {
            self.selection.push(id);
        }
    }

    /// Removes `id` from the selection.
    pub fn deselect(&mut self, id: ItemId) {
        self.selection.retain(|s| *s != id);
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Returns the current wire posture.
    #[must_use]
    pub fn wire_posture(&self) -> WirePosture {
        self.wire_posture
    }

    /// Appends a point to the in-progress wire.
    pub fn add_wire_point(&mut self, point: Point) {
        self.wire_points.push(point);
    }

    /// Returns the points of the in-progress wire.
    #[must_use]
    pub fn wire_points(&self) -> &[Point] {
        &self.wire_points
    }

    /// Returns the commands pushed so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns the mode-change observer registry.
    pub fn mode_observers(&mut self) -> &mut ModeObservers {
        &mut self.observers
    }
}

impl Scene for SimpleScene {
    fn mode(&self) -> SceneMode {
        self.mode
    }

    fn set_mode(&mut self, mode: SceneMode) {
        if self.mode == mode {
            return;
        }
        // Leaving wire mode discards the in-progress wire.
        if self.mode == SceneMode::Wire {
            self.wire_points.clear();
        }
        self.mode = mode;
        self.observers.notify(mode);
    }

    fn toggle_wire_posture(&mut self) {
        self.wire_posture = self.wire_posture.toggled();
    }

    fn remove_last_wire_point(&mut self) {
        let _ = self.wire_points.pop();
    }

    fn selected_top_level_items(&self) -> Vec<ItemId> {
        self.selection.clone()
    }

    fn item_bounds(&self) -> Vec<ItemBounds> {
        self.items.clone()
    }

    fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }
}
