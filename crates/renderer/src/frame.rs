//! Per-frame bookkeeping.

use campus_scene::StackCounters;

/// What one render traversal did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame counter, starting at 0
    pub frame_index: u64,
    /// Draw groups that completed
    pub groups_drawn: u32,
    /// Draw groups abandoned after a backend error
    pub groups_failed: u32,
    /// Successful primitive draws
    pub draw_calls: u32,
    /// Transform stack pushes and pops during the traversal
    pub stack: StackCounters,
    /// True when the backend refused the frame and nothing was drawn
    pub skipped: bool,
}

impl FrameStats {
    /// True when every push of the traversal was matched by a pop.
    pub fn is_balanced(&self) -> bool {
        self.stack.is_balanced()
    }

    /// True when every group drew without error.
    pub fn is_complete(&self) -> bool {
        !self.skipped && self.groups_failed == 0
    }
}

/// Monotonic frame counter.
#[derive(Debug, Default)]
pub struct FrameCounter {
    next: u64,
}

impl FrameCounter {
    /// Create a counter starting at frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the frame about to be rendered.
    pub fn current(&self) -> u64 {
        self.next
    }

    /// Return the current index and advance to the next frame.
    pub fn advance(&mut self) -> u64 {
        let index = self.next;
        self.next = self.next.wrapping_add(1);
        index
    }
}
