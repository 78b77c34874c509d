//! Cursor tracking for the swarm.
//!
//! Translates `CursorMoved` events into viewport-center-relative
//! coordinates: `(x - width / 2, y - height / 2)` in physical pixels, so the
//! center of the window is the origin and screen-space Y grows downward.
//!
//! The tracker is a single-slot, last-write-wins value holder. Events write
//! it, the animator reads a snapshot once per frame; both happen on the
//! event-loop thread, so the worst case is one frame of staleness.

use glam::Vec2;
use winit::event::WindowEvent;

/// Tracks the latest cursor position relative to the viewport center.
#[derive(Debug)]
pub struct PointerTracker {
    position: Vec2,
    window_size: (u32, u32),
}

impl PointerTracker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: Vec2::ZERO,
            window_size: (width, height),
        }
    }

    /// Latest center-relative cursor position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Record a cursor position in window pixels.
    pub fn set_cursor(&mut self, x: f64, y: f64) {
        let (w, h) = self.window_size;
        self.position = Vec2::new(x as f32 - w as f32 / 2.0, y as f32 - h as f32 / 2.0);
    }

    /// Update the window size used for centering.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Process a winit window event. Only cursor movement and resizes are
    /// of interest; everything else passes through untouched.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.set_cursor(position.x, position.y);
            }
            WindowEvent::Resized(size) => {
                self.set_window_size(size.width, size.height);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_window_is_origin() {
        let mut tracker = PointerTracker::new(800, 600);
        tracker.set_cursor(400.0, 300.0);
        assert_eq!(tracker.position(), Vec2::ZERO);
    }

    #[test]
    fn top_left_is_negative_both_axes() {
        let mut tracker = PointerTracker::new(800, 600);
        tracker.set_cursor(0.0, 0.0);
        assert_eq!(tracker.position(), Vec2::new(-400.0, -300.0));
    }

    #[test]
    fn resize_recenters_subsequent_positions() {
        let mut tracker = PointerTracker::new(800, 600);
        tracker.set_window_size(1000, 400);
        tracker.set_cursor(500.0, 200.0);
        assert_eq!(tracker.position(), Vec2::ZERO);
    }

    #[test]
    fn last_write_wins() {
        let mut tracker = PointerTracker::new(800, 600);
        tracker.set_cursor(100.0, 100.0);
        tracker.set_cursor(700.0, 500.0);
        assert_eq!(tracker.position(), Vec2::new(300.0, 200.0));
    }
}
