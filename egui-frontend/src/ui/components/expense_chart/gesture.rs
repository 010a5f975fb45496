//! # Expense Chart Gestures
//!
//! Touch state machine that lets one surface serve two purposes: swiping
//! between months and long-pressing to inspect a single day.
//!
//! ## States:
//! - `Idle` - no touch in progress
//! - `PendingHold` - finger down, hold timer running
//! - `Selecting` - hold committed; bars follow the finger, swiping is locked
//! - `SwipingExternal` - finger moved before the hold fired; motion belongs
//!   to the month carousel
//!
//! Commitment is delayed: movement before the hold timer fires means "swipe",
//! an unmoving hold past the threshold means "select" until release.

use std::time::Duration;
use log::debug;
use shared::TouchPoint;
use crate::ui::state::{Highlight, HoldTimer, SwipeControl};
use super::scene::HitTarget;

/// Where the touch state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    PendingHold,
    Selecting,
    SwipingExternal,
}

/// Input events the controller understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    TouchStart(TouchPoint),
    TouchMove(TouchPoint),
    TouchEnd,
    TouchCancel,
    /// Platform long-press / right-click menu request
    ContextMenu,
}

/// What the host should do after an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing happened
    Ignored,
    /// Touch registered, waiting to see whether it becomes a hold
    HoldPending,
    /// Selection ran; carries the day under the finger (None on a miss,
    /// which leaves the previous highlight untouched)
    Selected(Option<u32>),
    /// Motion belongs to the carousel
    Pan { origin: TouchPoint, current: TouchPoint },
    /// A delegated pan was released; the carousel should settle
    PanFinished,
    /// Touch released; `open_detail` is the active day when a selection was
    /// released with a finger lift
    Released { open_detail: Option<u32> },
    /// Event swallowed (context menus during touches)
    Suppressed,
}

/// Long-press vs swipe disambiguation for one chart surface
#[derive(Debug, Clone)]
pub struct GestureController {
    state: GestureState,
    hold_duration: Duration,
    timer: HoldTimer,
    origin: Option<TouchPoint>,
    highlight: Highlight,
}

impl GestureController {
    pub fn new(hold_duration: Duration) -> Self {
        Self {
            state: GestureState::Idle,
            hold_duration,
            timer: HoldTimer::new(),
            origin: None,
            highlight: Highlight::Uniform,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn hold_duration(&self) -> Duration {
        self.hold_duration
    }

    /// When the pending hold will fire, for scheduling a repaint
    pub fn hold_deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    /// `swipeable` is false exactly while this controller is selecting
    pub fn invariant_holds(&self, swipe: &dyn SwipeControl) -> bool {
        swipe.is_swipeable() != (self.state == GestureState::Selecting)
    }

    /// Fire the hold timer if it is due
    pub fn tick(
        &mut self,
        now: Duration,
        target: &dyn HitTarget,
        swipe: &mut dyn SwipeControl,
    ) -> GestureOutcome {
        let Some(point) = self.timer.fire_if_due(now) else {
            return GestureOutcome::Ignored;
        };
        if self.state != GestureState::PendingHold {
            return GestureOutcome::Ignored;
        }

        debug!("👆 Hold fired at ({:.0}, {:.0}), entering selection", point.x, point.y);
        self.state = GestureState::Selecting;
        swipe.set_swipeable(false);
        GestureOutcome::Selected(self.select_bar(point, target))
    }

    /// Feed one input event through the state machine
    pub fn handle(
        &mut self,
        event: GestureEvent,
        now: Duration,
        target: &dyn HitTarget,
        swipe: &mut dyn SwipeControl,
    ) -> GestureOutcome {
        match event {
            GestureEvent::TouchStart(point) => self.touch_start(point, now),
            GestureEvent::TouchMove(point) => {
                // a hold that is already due wins over the move
                if let GestureOutcome::Selected(_) = self.tick(now, target, swipe) {
                    debug!("👆 Hold was due before move was processed");
                }
                self.touch_move(point, target)
            }
            GestureEvent::TouchEnd => self.release(swipe, true),
            GestureEvent::TouchCancel => self.release(swipe, false),
            GestureEvent::ContextMenu => GestureOutcome::Suppressed,
        }
    }

    /// Drop any gesture in progress, e.g. when the panel goes away
    pub fn reset(&mut self, swipe: &mut dyn SwipeControl) {
        self.timer.cancel();
        self.deselect_bars();
        if self.state == GestureState::Selecting {
            swipe.set_swipeable(true);
        }
        self.state = GestureState::Idle;
        self.origin = None;
    }

    fn touch_start(&mut self, point: TouchPoint, now: Duration) -> GestureOutcome {
        if self.state != GestureState::Idle {
            debug!("👆 Ignoring extra touch start in {:?}", self.state);
            return GestureOutcome::Ignored;
        }

        self.origin = Some(point);
        self.timer.arm(now, self.hold_duration, point);
        self.state = GestureState::PendingHold;
        GestureOutcome::HoldPending
    }

    fn touch_move(&mut self, point: TouchPoint, target: &dyn HitTarget) -> GestureOutcome {
        match self.state {
            GestureState::Idle => GestureOutcome::Ignored,
            GestureState::PendingHold => {
                self.timer.cancel();
                self.state = GestureState::SwipingExternal;
                debug!("👆 Moved before hold, handing motion to the carousel");
                self.pan_outcome(point)
            }
            GestureState::SwipingExternal => self.pan_outcome(point),
            GestureState::Selecting => GestureOutcome::Selected(self.select_bar(point, target)),
        }
    }

    fn pan_outcome(&self, current: TouchPoint) -> GestureOutcome {
        GestureOutcome::Pan {
            origin: self.origin.unwrap_or(current),
            current,
        }
    }

    fn release(&mut self, swipe: &mut dyn SwipeControl, finger_lifted: bool) -> GestureOutcome {
        // cancel first so the hold can never fire after a release
        self.timer.cancel();

        let previous = self.state;
        let open_detail = if finger_lifted && previous == GestureState::Selecting {
            self.highlight.active_day()
        } else {
            None
        };

        self.deselect_bars();
        swipe.set_swipeable(true);
        self.state = GestureState::Idle;
        self.origin = None;

        debug!("👆 Released from {:?}", previous);
        match previous {
            GestureState::SwipingExternal => GestureOutcome::PanFinished,
            _ => GestureOutcome::Released { open_detail },
        }
    }

    /// Activate the day under `point`; a miss keeps the current highlight
    fn select_bar(&mut self, point: TouchPoint, target: &dyn HitTarget) -> Option<u32> {
        let hit = target.day_at(point);
        if let Some(day) = hit {
            self.highlight.focus(day);
        }
        hit
    }

    fn deselect_bars(&mut self) {
        self.highlight.clear();
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}
