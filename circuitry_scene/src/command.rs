// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ItemId;

/// An undoable scene mutation produced by the viewport.
///
/// This is a vocabulary, not an undo framework: scenes decide how pushed
/// commands are executed and reverted. The viewport only ever constructs
/// them and pushes them via [`Scene::push_command`](crate::Scene::push_command).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Remove a top-level item from the scene.
    RemoveItem(ItemId),
}
