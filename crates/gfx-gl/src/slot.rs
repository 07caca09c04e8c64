//! [`Slots`] — round-robin native handles behind one logical resource.
//!
//! Streamed meshes and textures own up to [`MAX_NUM_SLOTS`] GL names. Each
//! update advances the active slot so the driver can keep reading the
//! previous one while the new data is written. Static resources have a
//! single slot and never rotate.

use gl::types::GLuint;
use tracing::{trace, warn};

/// Maximum number of native handles per slotted resource.
pub const MAX_NUM_SLOTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("resource already updated in frame {frame}")]
    AlreadyUpdated { frame: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots {
    handles: [GLuint; MAX_NUM_SLOTS],
    num_slots: u8,
    active_slot: u8,
    /// Frame of the last write, -1 if never written.
    update_frame_index: i32,
}

impl Default for Slots {
    fn default() -> Self {
        Self {
            handles: [0; MAX_NUM_SLOTS],
            num_slots: 1,
            active_slot: 0,
            update_frame_index: -1,
        }
    }
}

impl Slots {
    /// A slot set with `num_slots` entries (1 for static resources).
    ///
    /// Values outside `1..=MAX_NUM_SLOTS` are clamped.
    pub fn new(num_slots: u8) -> Self {
        debug_assert!(
            (1..=MAX_NUM_SLOTS as u8).contains(&num_slots),
            "num_slots {num_slots} out of range"
        );
        Self {
            num_slots: num_slots.clamp(1, MAX_NUM_SLOTS as u8),
            ..Self::default()
        }
    }

    pub fn num_slots(&self) -> u8 {
        self.num_slots
    }

    pub fn active_slot(&self) -> u8 {
        self.active_slot
    }

    pub fn update_frame_index(&self) -> i32 {
        self.update_frame_index
    }

    /// Handles of the valid slots.
    pub fn handles(&self) -> &[GLuint] {
        &self.handles[..self.num_slots as usize]
    }

    /// The handle the draw path reads from.
    pub fn active_handle(&self) -> GLuint {
        self.handles[self.active_slot as usize]
    }

    /// Assign the native handle of `slot` at creation time.
    pub fn set_handle(&mut self, slot: usize, handle: GLuint) {
        debug_assert!(slot < self.num_slots as usize, "slot {slot} out of range");
        self.handles[slot] = handle;
    }

    /// Whether the resource was written in `frame_index`.
    pub fn updated_in_frame(&self, frame_index: i32) -> bool {
        self.update_frame_index == frame_index
    }

    /// Record a write in `frame_index` and advance to the next slot.
    ///
    /// Returns `false` when the set has a single slot; the frame index is
    /// still recorded.
    pub fn rotate(&mut self, frame_index: i32) -> bool {
        self.update_frame_index = frame_index;
        if self.num_slots <= 1 {
            return false;
        }
        self.active_slot = (self.active_slot + 1) % self.num_slots;
        trace!(active_slot = self.active_slot, frame_index, "slot rotated");
        true
    }

    /// Start a streamed update: rotate and return the handle to write into.
    ///
    /// Only one update per frame is allowed, since the second write would
    /// land in a slot that may still be in flight. Frame indices are
    /// non-negative; -1 marks a resource that was never written.
    pub fn begin_update(&mut self, frame_index: i32) -> Result<GLuint, SlotError> {
        debug_assert!(frame_index >= 0, "negative frame index {frame_index}");
        if self.updated_in_frame(frame_index) {
            warn!(frame_index, "resource updated twice in one frame");
            return Err(SlotError::AlreadyUpdated { frame: frame_index });
        }
        self.rotate(frame_index);
        Ok(self.active_handle())
    }

    /// Pass every non-zero handle to `release` once and reset to defaults.
    pub fn clear(&mut self, release: impl FnOnce(&[GLuint])) {
        let mut live = [0; MAX_NUM_SLOTS];
        let mut n = 0;
        for &h in self.handles.iter().filter(|&&h| h != 0) {
            live[n] = h;
            n += 1;
        }
        if n > 0 {
            release(&live[..n]);
        }
        *self = Self::default();
    }
}
