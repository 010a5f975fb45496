//! # Expense Chart Module
//!
//! Touch-interactive bar chart of one month's per-day spending.
//!
//! ## Key Components:
//! - `data_preparation.rs` - Fill missing days so every day has an entry
//! - `scales.rs` - Day/amount scales and axis ticks
//! - `scene.rs` - Pure scene builder (visual bars + invisible hit overlays)
//! - `gesture.rs` - Long-press vs swipe state machine
//! - `painter.rs` - egui painting and pointer-event translation
//!
//! ## Rebuilds:
//! The scene is rebuilt wholesale, and only when the incoming month is not
//! equal to the last one. The host passes every month in again on each frame,
//! so an unchanged dataset costs one comparison and no rebuild.

pub mod data_preparation;
pub mod gesture;
pub mod painter;
pub mod scales;
pub mod scene;

use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use eframe::egui;
use log::{debug, warn};
use shared::{CurrencyFormat, DetailRequest, MonthId, MonthlyExpenseSet, TouchPoint};

use crate::config::ChartConfig;
use crate::errors::TimelineError;
use crate::ui::components::month_carousel::{OffsetState, Panel};
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::SwipeControl;

pub use data_preparation::{complete_month, fill_gaps, CompletedMonth};
pub use gesture::{GestureController, GestureEvent, GestureOutcome, GestureState};
pub use painter::{ChartViewport, ScreenHitTest};
pub use scales::{AxisTick, ChartGeometry, ChartScales, LinearScale};
pub use scene::{build_scene, BarShape, ChartRect, ChartScene, HitOverlay, HitTarget};

/// Why a panel shows its placeholder instead of a chart
#[derive(Debug, Clone, PartialEq)]
pub enum EmptyReason {
    /// The month has no spending entries
    NoData,
    /// The month id could not be interpreted
    InvalidMonth(String),
}

/// What the chart currently displays
#[derive(Debug, Clone, PartialEq)]
pub enum ChartContent {
    Empty(EmptyReason),
    Figure { month: CompletedMonth, scene: ChartScene },
}

/// Readout for the day under a selection
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total: u64,
    pub total_label: String,
}

/// What happened on the chart this frame, for the host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartInteraction {
    /// Latest delegated drag: (touch origin, current point)
    pub pan: Option<(TouchPoint, TouchPoint)>,
    /// A delegated drag ended
    pub pan_finished: bool,
    pub open_detail: Option<DetailRequest>,
}

/// Hit target for a panel with nothing drawn; gestures on it can only pan
struct NoTarget;

impl HitTarget for NoTarget {
    fn day_at(&self, _point: TouchPoint) -> Option<u32> {
        None
    }
}

fn record_outcome(
    outcome: GestureOutcome,
    month_id: Option<MonthId>,
    interaction: &mut ChartInteraction,
) {
    match outcome {
        GestureOutcome::Pan { origin, current } => interaction.pan = Some((origin, current)),
        GestureOutcome::PanFinished => interaction.pan_finished = true,
        GestureOutcome::Released { open_detail: Some(day) } => {
            if let Some(month_id) = month_id {
                interaction.open_detail = Some(DetailRequest { month_id, day });
            }
        }
        _ => {}
    }
}

/// One month's chart panel: data, memoized scene, and gesture state
#[derive(Debug, Clone)]
pub struct ExpenseChart {
    config: ChartConfig,
    currency: CurrencyFormat,
    /// Last month supplied, compared by value to gate rebuilds
    data: Option<MonthlyExpenseSet>,
    content: ChartContent,
    rebuild_count: usize,
    gesture: GestureController,
    /// A pointer press started on this chart and has not been released
    tracking_pointer: bool,
}

impl ExpenseChart {
    pub fn new(config: ChartConfig, currency: CurrencyFormat) -> Self {
        let gesture = GestureController::new(config.hold_duration());
        Self {
            config,
            currency,
            data: None,
            content: ChartContent::Empty(EmptyReason::NoData),
            rebuild_count: 0,
            gesture,
            tracking_pointer: false,
        }
    }

    /// Supply the month to draw; rebuilds only on a structural change.
    ///
    /// Returns whether the scene was rebuilt.
    pub fn set_data(&mut self, set: &MonthlyExpenseSet) -> bool {
        if self.data.as_ref() == Some(set) {
            return false;
        }

        self.content = self.build_content(set);
        self.data = Some(set.clone());
        self.rebuild_count += 1;
        debug!("📊 Rebuilt chart for {} (rebuild #{})", set.id, self.rebuild_count);
        true
    }

    fn build_content(&self, set: &MonthlyExpenseSet) -> ChartContent {
        if set.groups.is_empty() {
            return ChartContent::Empty(EmptyReason::NoData);
        }

        let month = match complete_month(set) {
            Ok(month) => month,
            Err(source) => {
                let error = TimelineError::InvalidMonth { id: set.id, source };
                warn!("⚠️ {}", error);
                return ChartContent::Empty(EmptyReason::InvalidMonth(error.to_string()));
            }
        };

        match ChartScales::build(&month, ChartGeometry::from(&self.config)) {
            Some(scales) => {
                let scene = build_scene(&scales, &month, &self.currency, self.config.show_y_axis);
                ChartContent::Figure { month, scene }
            }
            None => ChartContent::Empty(EmptyReason::NoData),
        }
    }

    pub fn content(&self) -> &ChartContent {
        &self.content
    }

    pub fn scene(&self) -> Option<&ChartScene> {
        match &self.content {
            ChartContent::Figure { scene, .. } => Some(scene),
            ChartContent::Empty(_) => None,
        }
    }

    pub fn month(&self) -> Option<&CompletedMonth> {
        match &self.content {
            ChartContent::Figure { month, .. } => Some(month),
            ChartContent::Empty(_) => None,
        }
    }

    /// How many times the scene has been rebuilt
    pub fn rebuild_count(&self) -> usize {
        self.rebuild_count
    }

    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    /// Feed one gesture event, hit-testing through `target`
    pub fn handle_event(
        &mut self,
        event: GestureEvent,
        now: Duration,
        target: &dyn HitTarget,
        swipe: &mut dyn SwipeControl,
    ) -> GestureOutcome {
        self.gesture.handle(event, now, target, swipe)
    }

    /// Let a due hold timer fire
    pub fn tick(
        &mut self,
        now: Duration,
        target: &dyn HitTarget,
        swipe: &mut dyn SwipeControl,
    ) -> GestureOutcome {
        self.gesture.tick(now, target, swipe)
    }

    /// Abandon any gesture, e.g. when the panel scrolls away
    pub fn reset_gesture(&mut self, swipe: &mut dyn SwipeControl) {
        self.tracking_pointer = false;
        self.gesture.reset(swipe);
    }

    /// Date and amount of the active day while selecting
    pub fn active_summary(&self) -> Option<DaySummary> {
        let day = self.gesture.highlight().active_day()?;
        let month = self.month()?;
        let entry = month.day(day)?;
        let date = month.id.first_day().ok()?.with_day(day)?;

        Some(DaySummary {
            date,
            total: entry.total,
            total_label: self.currency.format(entry.total),
        })
    }

    /// Draw the panel and, when `interactive`, run this frame's input.
    ///
    /// Non-interactive panels (neighbours visible during a swipe) only paint.
    /// Empty panels still take input so a drag on them reaches the carousel.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        swipe: &mut dyn SwipeControl,
        interactive: bool,
    ) -> ChartInteraction {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let area = response.rect;
        let mut interaction = ChartInteraction::default();

        let figure = match &self.content {
            ChartContent::Figure { scene, .. } => {
                Some((scene, ChartViewport::fit(area, scene.width, scene.height)))
            }
            ChartContent::Empty(_) => None,
        };

        if interactive {
            let now = Duration::from_secs_f64(ui.input(|i| i.time).max(0.0));
            let events = ui.input(|i| i.events.clone());
            let gestures =
                painter::collect_gesture_events(&events, area, &mut self.tracking_pointer);
            let month_id = self.data.as_ref().map(|set| set.id);

            let screen_target = figure.map(|(scene, viewport)| ScreenHitTest { scene, viewport });
            let target: &dyn HitTarget = match &screen_target {
                Some(target) => target,
                None => &NoTarget,
            };

            for event in gestures {
                let outcome = self.gesture.handle(event, now, target, swipe);
                record_outcome(outcome, month_id, &mut interaction);
            }
            self.gesture.tick(now, target, swipe);

            if let Some(deadline) = self.gesture.hold_deadline() {
                ui.ctx().request_repaint_after(deadline.saturating_sub(now));
            }
        }

        match figure {
            Some((scene, viewport)) => {
                painter::paint_scene(
                    &painter,
                    &viewport,
                    scene,
                    self.gesture.highlight(),
                    &CURRENT_THEME.chart,
                    self.config.label_font_size,
                );
                self.paint_summary(&painter, area);
            }
            None => self.paint_empty_state(&painter, area),
        }

        interaction
    }

    fn paint_summary(&self, painter: &egui::Painter, area: egui::Rect) {
        let Some(summary) = self.active_summary() else {
            return;
        };
        painter.text(
            area.center_top() + egui::vec2(0.0, 4.0),
            egui::Align2::CENTER_TOP,
            format!("{} · {}", summary.date.format("%a %d %b"), summary.total_label),
            egui::FontId::proportional(16.0),
            CURRENT_THEME.typography.primary,
        );
    }

    fn paint_empty_state(&self, painter: &egui::Painter, area: egui::Rect) {
        let message = match &self.content {
            ChartContent::Empty(EmptyReason::InvalidMonth(reason)) => reason.clone(),
            _ => "📊 No expenses this month".to_string(),
        };
        painter.text(
            area.center(),
            egui::Align2::CENTER_CENTER,
            message,
            egui::FontId::proportional(16.0),
            CURRENT_THEME.typography.secondary,
        );
    }
}

impl Panel for ExpenseChart {
    type Output = ChartInteraction;

    fn render(
        &mut self,
        ui: &mut egui::Ui,
        _offset: &OffsetState,
        active: bool,
        swipe: &mut dyn SwipeControl,
    ) -> ChartInteraction {
        if !active && self.gesture.state() != GestureState::Idle {
            self.reset_gesture(swipe);
        }
        self.show(ui, swipe, active)
    }
}
