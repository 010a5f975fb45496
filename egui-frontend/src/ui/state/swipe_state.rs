//! # Swipe State Module
//!
//! The "swipeable" flag decides whether drag motion on the month panels is
//! month navigation. The expense chart takes it away while a bar selection is
//! in progress and hands it back on release; the month carousel reads it.

/// Read/write access to the swipeable flag
pub trait SwipeControl {
    fn is_swipeable(&self) -> bool;
    fn set_swipeable(&mut self, swipeable: bool);
}

/// Stand-alone flag for charts hosted outside a carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeFlag {
    swipeable: bool,
}

impl Default for SwipeFlag {
    fn default() -> Self {
        Self { swipeable: true }
    }
}

impl SwipeControl for SwipeFlag {
    fn is_swipeable(&self) -> bool {
        self.swipeable
    }

    fn set_swipeable(&mut self, swipeable: bool) {
        self.swipeable = swipeable;
    }
}
