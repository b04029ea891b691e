use crate::constants::DRAG_SCROLL_MULTIPLIER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging { origin_x: i32, origin_offset: i32 },
}

/// Horizontal drag-to-scroll for a carousel track, independent of how the
/// track is drawn. Offsets are in whatever unit the renderer uses.
#[derive(Debug, Clone)]
pub struct DragScroll {
    state: DragState,
    offset: i32,
    max_offset: i32,
    step: i32,
    multiplier: i32,
}

impl DragScroll {
    pub fn new(step: i32) -> Self {
        Self {
            state: DragState::Idle,
            offset: 0,
            max_offset: 0,
            step,
            multiplier: DRAG_SCROLL_MULTIPLIER,
        }
    }

    pub fn with_multiplier(mut self, multiplier: i32) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Content width minus viewport width; re-clamps the current offset.
    pub fn set_extent(&mut self, max_offset: i32) {
        self.max_offset = max_offset.max(0);
        self.offset = self.clamp(self.offset);
    }

    /// Pointer or touch went down at `x`.
    pub fn press(&mut self, x: i32) {
        self.state = DragState::Dragging {
            origin_x: x,
            origin_offset: self.offset,
        };
    }

    /// Pointer moved to `x`. Returns whether the offset changed.
    pub fn drag(&mut self, x: i32) -> bool {
        let DragState::Dragging { origin_x, origin_offset } = self.state else {
            return false;
        };

        let walk = (x - origin_x) * self.multiplier;
        let next = self.clamp(origin_offset - walk);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.offset = self.clamp(self.offset + delta);
    }

    pub fn step_left(&mut self) {
        self.scroll_by(-self.step);
    }

    pub fn step_right(&mut self) {
        self.scroll_by(self.step);
    }

    pub fn reset(&mut self) {
        self.state = DragState::Idle;
        self.offset = 0;
    }

    fn clamp(&self, offset: i32) -> i32 {
        offset.clamp(0, self.max_offset)
    }
}
