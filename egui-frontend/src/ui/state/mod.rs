//! # State Module
//!
//! Small pieces of interaction state shared by the expense chart and the
//! month carousel.
//!
//! ## Module Organization:
//! - `highlight_state` - Which day bar is active/dimmed
//! - `hold_timer` - Cancellable one-shot long-press timer
//! - `swipe_state` - The swipeable flag and its access trait

pub mod highlight_state;
pub mod hold_timer;
pub mod swipe_state;

pub use highlight_state::Highlight;
pub use hold_timer::HoldTimer;
pub use swipe_state::{SwipeControl, SwipeFlag};
