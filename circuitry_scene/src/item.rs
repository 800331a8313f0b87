// Copyright 2026 the Circuitry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Identity of a top-level scene item.
///
/// Opaque to the viewport; scenes decide how ids are allocated. Ids are never
/// reused within one scene's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

/// The positioned bounding rectangle of a top-level item.
///
/// `bounding_rect` is in the item's local coordinates; `scene_pos` is where
/// the item's local origin sits in scene space. [`ItemBounds::scene_rect`]
/// combines the two, which is what view fitting consumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemBounds {
    /// The item this rectangle belongs to.
    pub id: ItemId,
    /// Bounding rectangle in item-local coordinates.
    pub bounding_rect: Rect,
    /// Position of the item's local origin in scene coordinates.
    pub scene_pos: Point,
}

impl ItemBounds {
    /// Returns the bounding rectangle translated to the item's scene position.
    #[must_use]
    pub fn scene_rect(&self) -> Rect {
        self.bounding_rect + self.scene_pos.to_vec2()
    }
}
