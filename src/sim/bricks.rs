//! Brick row layout and slot arena
//!
//! Bricks live in fixed slots for the whole round. Removing a brick empties
//! its slot; the slot sequence itself never shrinks, so slot indices stay
//! valid until the next rebuild.

use glam::Vec2;

use crate::scene::{EntityHandle, Rect};

/// Bricks of the current round
#[derive(Debug, Clone, Default)]
pub struct BrickField {
    slots: Vec<Option<EntityHandle>>,
    removed: usize,
}

impl BrickField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field with a full set of brick handles
    pub fn rebuild(&mut self, bricks: impl IntoIterator<Item = EntityHandle>) {
        self.slots = bricks.into_iter().map(Some).collect();
        self.removed = 0;
    }

    /// Empty every slot, returning the handles that were still live
    pub fn clear(&mut self) -> Vec<EntityHandle> {
        let live = self.live().map(|(_, handle)| handle).collect();
        self.slots.clear();
        self.removed = 0;
        live
    }

    /// Remove the brick in `slot`. Removing an empty slot is a no-op.
    pub fn remove(&mut self, slot: usize) -> Option<EntityHandle> {
        let handle = self.slots.get_mut(slot)?.take()?;
        self.removed += 1;
        Some(handle)
    }

    pub fn get(&self, slot: usize) -> Option<EntityHandle> {
        self.slots.get(slot).copied().flatten()
    }

    /// Live bricks with their slot index, in slot order
    pub fn live(&self) -> impl Iterator<Item = (usize, EntityHandle)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, handle)| handle.map(|h| (i, h)))
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn removed(&self) -> usize {
        self.removed
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.total() - self.removed
    }

    /// True once a non-empty field has been fully cleared
    pub fn is_cleared(&self) -> bool {
        self.total() > 0 && self.remaining() == 0
    }
}

/// Number of bricks that fit across `frame`
pub fn brick_count(frame: &Rect, stride: i32) -> usize {
    let width = frame.width() as i32;
    (width / stride).max(0) as usize
}

/// Brick centers for one centered row along the top edge.
///
/// Integer arithmetic so the row lands on whole units for any frame.
pub fn brick_layout(frame: &Rect, stride: i32, brick_width: f32, top_offset: i32) -> Vec<Vec2> {
    let count = brick_count(frame, stride) as i32;
    let width = frame.width() as i32;
    let x_offset = (width - count * stride) / 2 + frame.min_x() as i32 + brick_width as i32 / 2;
    let y = (frame.max_y() as i32).saturating_sub(top_offset);

    (0..count)
        .map(|i| Vec2::new((i * stride + x_offset) as f32, y as f32))
        .collect()
}
