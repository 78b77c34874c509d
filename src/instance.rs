//! CPU staging for the per-instance transform buffer.
//!
//! The animator overwrites one slot per particle each frame and marks the
//! buffer dirty; [`InstanceBuffer::upload`] pushes the staging bytes to the
//! GPU with `queue.write_buffer` only when something changed. The staging
//! array is allocated once and never resized.

use bytemuck::{Pod, Zeroable};

/// Per-instance data consumed by the render pipeline: world-space position
/// plus a uniform scale. Laid out to match the instance vertex attributes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub position: [f32; 3],
    pub scale: f32,
}

/// Fixed-capacity staging array for instance transforms, with a dirty flag
/// gating GPU re-upload.
#[derive(Debug, Clone)]
pub struct InstanceBuffer {
    slots: Vec<InstanceRaw>,
    dirty: bool,
}

impl InstanceBuffer {
    /// Allocate `count` zeroed slots.
    pub fn new(count: u32) -> Self {
        Self {
            slots: vec![InstanceRaw::zeroed(); count as usize],
            dirty: false,
        }
    }

    /// Overwrite slot `index`. Does not touch the dirty flag; the animator
    /// marks the buffer once after writing every slot.
    #[inline]
    pub fn set(&mut self, index: usize, position: [f32; 3], scale: f32) {
        self.slots[index] = InstanceRaw { position, scale };
    }

    /// Request re-upload before the next draw.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether the staging contents have changed since the last upload.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the buffer has zero slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read-only view of the staged transforms.
    #[inline]
    pub fn slots(&self) -> &[InstanceRaw] {
        &self.slots
    }

    /// Staged contents as raw bytes, ready for `write_buffer`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.slots)
    }

    /// Write the staging contents into `buffer` if dirty, then clear the
    /// flag. A clean buffer uploads nothing.
    pub fn upload(&mut self, queue: &wgpu::Queue, buffer: &wgpu::Buffer) {
        if !self.dirty {
            return;
        }
        queue.write_buffer(buffer, 0, self.as_bytes());
        self.dirty = false;
    }
}
