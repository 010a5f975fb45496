//! # Carousel Coordinator
//!
//! Owns the current month index (`view`), the live drag offset (`pos`) and the
//! swipeable flag shared with the expense chart's gesture controller.
//!
//! ## Drag model:
//! - `pan_to()` while the flag is set turns the finger travel into `pos`
//!   (positive when the finger moves left, i.e. towards the next month)
//! - `finish_pan()` settles on the previous, same or next month depending on
//!   how far the drag went relative to the panel width
//! - `jump_to()` is the header shortcut; it never animates through a drag
//!
//! Every settled index is reported to a [`PageSink`] so the host can persist it.

use log::{debug, info};
use crate::config::CarouselConfig;
use crate::ui::state::SwipeControl;

/// Receives the settled page after a drag or a header jump
pub trait PageSink {
    fn set_page(&mut self, index: usize);
}

/// Snapshot handed to panels and the header each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetState {
    /// Index of the centred month
    pub view: usize,
    /// Current drag offset in points
    pub pos: f32,
    /// A drag is in progress, so motion follows the finger without easing
    pub swiping: bool,
}

impl OffsetState {
    pub fn animated(&self) -> bool {
        !self.swiping
    }
}

#[derive(Debug, Clone)]
pub struct CarouselCoordinator {
    view: usize,
    count: usize,
    pos: f32,
    swiping: bool,
    swipeable: bool,
    swipe_threshold: f32,
}

impl CarouselCoordinator {
    /// New coordinator over `count` months starting at `start` (clamped)
    pub fn new(count: usize, start: usize, config: &CarouselConfig) -> Self {
        let view = start.min(count.saturating_sub(1));
        if view != start {
            debug!("🎠 Start page {} out of range for {} months, using {}", start, count, view);
        }
        Self {
            view,
            count,
            pos: 0.0,
            swiping: false,
            swipeable: true,
            swipe_threshold: config.swipe_threshold.clamp(0.0, 1.0),
        }
    }

    pub fn view(&self) -> usize {
        self.view
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn pos(&self) -> f32 {
        self.pos
    }

    pub fn is_swiping(&self) -> bool {
        self.swiping
    }

    pub fn offset_state(&self) -> OffsetState {
        OffsetState { view: self.view, pos: self.pos, swiping: self.swiping }
    }

    /// Follow a delegated drag. Returns false when swiping is currently locked.
    pub fn pan_to(&mut self, origin_x: f32, current_x: f32) -> bool {
        if !self.swipeable {
            return false;
        }
        if !self.swiping {
            debug!("🎠 Drag started on page {}", self.view);
        }
        self.swiping = true;
        self.pos = origin_x - current_x;
        true
    }

    /// End a drag and snap to a page.
    ///
    /// Returns the settled index, or `None` if no drag was in progress.
    pub fn finish_pan(&mut self, panel_width: f32, sink: &mut dyn PageSink) -> Option<usize> {
        if !self.swiping {
            return None;
        }

        let threshold = self.swipe_threshold * panel_width.max(0.0);
        let target = if self.pos > threshold {
            (self.view + 1).min(self.count.saturating_sub(1))
        } else if self.pos < -threshold {
            self.view.saturating_sub(1)
        } else {
            self.view
        };

        debug!(
            "🎠 Drag of {:.1} (threshold {:.1}) settles on page {}",
            self.pos, threshold, target
        );
        self.view = target;
        self.pos = 0.0;
        self.swiping = false;

        info!("📄 Settled on page {}", self.view);
        sink.set_page(self.view);
        Some(self.view)
    }

    /// Jump straight to a page, e.g. from a header label. Out-of-range or
    /// current indices are ignored.
    pub fn jump_to(&mut self, index: usize, sink: &mut dyn PageSink) -> bool {
        if index >= self.count || index == self.view {
            return false;
        }

        info!("📄 Jumping from page {} to {}", self.view, index);
        self.view = index;
        self.pos = 0.0;
        self.swiping = false;
        sink.set_page(self.view);
        true
    }
}

impl SwipeControl for CarouselCoordinator {
    fn is_swipeable(&self) -> bool {
        self.swipeable
    }

    fn set_swipeable(&mut self, swipeable: bool) {
        if self.swipeable != swipeable {
            debug!("🎠 Swipe {}", if swipeable { "unlocked" } else { "locked" });
        }
        self.swipeable = swipeable;
    }
}
