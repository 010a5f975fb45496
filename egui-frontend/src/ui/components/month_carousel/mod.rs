//! # Month Carousel Module
//!
//! Horizontally swipeable strip of month panels with a relative month header.
//!
//! ## Key Components:
//! - `coordinator.rs` - Current month, drag offset, settling and page reporting
//! - `header.rs` - Five-slot header layout and its egui rendering
//!
//! ## Interfaces:
//! Panels and the header never see the coordinator itself, only an
//! [`OffsetState`] snapshot for the frame. Panels also get the swipeable flag
//! so a bar selection can lock month navigation.

pub mod coordinator;
pub mod header;

use eframe::egui;
use crate::ui::state::SwipeControl;

pub use coordinator::{CarouselCoordinator, OffsetState, PageSink};
pub use header::{header_layout, HeaderLabel, HeaderSlot, MonthHeader};

/// One month's content inside the carousel
pub trait Panel {
    type Output;

    /// Draw into `ui`. `active` is true only for the centred month, which is
    /// the one that receives input.
    fn render(
        &mut self,
        ui: &mut egui::Ui,
        offset: &OffsetState,
        active: bool,
        swipe: &mut dyn SwipeControl,
    ) -> Self::Output;
}

/// The strip of month names; returns the index of a clicked label
pub trait Header {
    fn render(
        &mut self,
        ui: &mut egui::Ui,
        offset: &OffsetState,
        labels: &[String],
    ) -> Option<usize>;
}

/// What the panel strip produced this frame
pub struct PanelsResponse<T> {
    /// Output of the centred panel
    pub active: Option<T>,
    /// Width of one panel, for settling drags
    pub panel_width: f32,
}

/// Lay out the centred panel and its neighbours side by side, shifted by the
/// drag offset. Only the panels that can be on screen are rendered.
pub fn show_panels<P: Panel>(
    ui: &mut egui::Ui,
    offset: &OffsetState,
    panels: &mut [P],
    swipe: &mut dyn SwipeControl,
    transition_secs: f32,
) -> PanelsResponse<P::Output> {
    let area = egui::Rect::from_min_size(ui.cursor().min, ui.available_size());
    ui.allocate_rect(area, egui::Sense::hover());

    let width = area.width();
    let target = offset.view as f32 * width + offset.pos;
    let duration = if offset.animated() { transition_secs } else { 0.0 };
    let scroll_id = ui.id().with("month_panels_scroll");
    let scroll = ui.ctx().animate_value_with_time(scroll_id, target, duration);

    let mut active = None;
    let first = offset.view.saturating_sub(1);
    let last = (offset.view + 1).min(panels.len().saturating_sub(1));

    for (index, panel) in panels.iter_mut().enumerate().take(last + 1).skip(first) {
        let left = area.left() + index as f32 * width - scroll;
        let panel_rect = egui::Rect::from_min_size(egui::pos2(left, area.top()), area.size());
        if !panel_rect.intersects(area) {
            continue;
        }

        let is_active = index == offset.view;
        let mut child = ui.child_ui(panel_rect, egui::Layout::top_down(egui::Align::Center), None);
        child.set_clip_rect(area.intersect(ui.clip_rect()));
        let result = child.push_id(index, |ui| panel.render(ui, offset, is_active, swipe)).inner;
        if is_active {
            active = Some(result);
        }
    }

    PanelsResponse { active, panel_width: width }
}
