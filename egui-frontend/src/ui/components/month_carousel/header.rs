//! # Month Header
//!
//! Five-slot strip of month names above the panels: two months back, the
//! current month in the middle, two months ahead. Labels follow the drag
//! offset at a third of its speed and ease back into their slots when the
//! drag ends. Clicking a side label jumps to that month.

use eframe::egui;
use crate::config::CarouselConfig;
use crate::ui::components::theme::CURRENT_THEME;
use super::coordinator::OffsetState;
use super::Header;

/// Each slot is this share of the header width
const SLOT_WIDTH_PERCENT: f32 = 33.33;
/// Header labels move at this fraction of the drag offset
const HEADER_PARALLAX: f32 = 0.33;

/// Position of a label relative to the current month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSlot {
    L2,
    L1,
    Center,
    R1,
    R2,
}

impl HeaderSlot {
    /// Slot for a label `offset` months away from the current one
    pub fn for_offset(offset: i64) -> Option<Self> {
        match offset {
            -2 => Some(HeaderSlot::L2),
            -1 => Some(HeaderSlot::L1),
            0 => Some(HeaderSlot::Center),
            1 => Some(HeaderSlot::R1),
            2 => Some(HeaderSlot::R2),
            _ => None,
        }
    }

    /// Distance of the label's right edge from the header's right edge, in
    /// percent of the header width
    pub fn base_right_percent(&self) -> f32 {
        match self {
            HeaderSlot::L2 => 100.0,
            HeaderSlot::L1 => 66.66,
            HeaderSlot::Center => 33.33,
            HeaderSlot::R1 => 0.0,
            HeaderSlot::R2 => -33.33,
        }
    }

    pub fn opacity(&self) -> f32 {
        if *self == HeaderSlot::Center { 1.0 } else { 0.5 }
    }
}

/// One month name placed in the header
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderLabel {
    pub index: usize,
    pub slot: HeaderSlot,
    pub name: String,
    /// Drag-driven shift added to the slot's right offset, in points
    pub offset_px: f32,
    /// False while dragging: labels track the finger directly
    pub animated: bool,
    /// Where clicking this label goes; `None` for the centre label
    pub jump_target: Option<usize>,
}

impl HeaderLabel {
    /// Left edge of the label inside a header `width` points wide
    pub fn left(&self, width: f32) -> f32 {
        let right = self.slot.base_right_percent() / 100.0 * width + self.offset_px;
        width - right - label_width(width)
    }
}

pub fn label_width(width: f32) -> f32 {
    SLOT_WIDTH_PERCENT / 100.0 * width
}

/// Lay out the labels around `view`; months outside the five slots are left out
pub fn header_layout(labels: &[String], offset: &OffsetState) -> Vec<HeaderLabel> {
    let offset_px = offset.pos * HEADER_PARALLAX;

    labels
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let slot = HeaderSlot::for_offset(index as i64 - offset.view as i64)?;
            Some(HeaderLabel {
                index,
                slot,
                name: name.clone(),
                offset_px,
                animated: offset.animated(),
                jump_target: (slot != HeaderSlot::Center).then_some(index),
            })
        })
        .collect()
}

/// egui rendering of the header strip
pub struct MonthHeader {
    height: f32,
    transition_secs: f32,
}

impl MonthHeader {
    pub fn new(config: &CarouselConfig) -> Self {
        Self { height: config.header_height, transition_secs: config.transition_secs }
    }
}

impl Header for MonthHeader {
    fn render(
        &mut self,
        ui: &mut egui::Ui,
        offset: &OffsetState,
        labels: &[String],
    ) -> Option<usize> {
        let size = egui::vec2(ui.available_width(), self.height);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, egui::Rounding::ZERO, CURRENT_THEME.header.background);

        let width = rect.width();
        // Whole strip scroll; eases only once the drag has ended
        let target = offset.view as f32 * label_width(width) + offset.pos * HEADER_PARALLAX;
        let duration = if offset.animated() { self.transition_secs } else { 0.0 };
        let scroll_id = ui.id().with("month_header_scroll");
        let scroll = ui.ctx().animate_value_with_time(scroll_id, target, duration);
        let lag = scroll - target;

        let mut clicked = None;
        for label in header_layout(labels, offset) {
            let left = rect.left() + label.left(width) - lag;
            let label_rect = egui::Rect::from_min_size(
                egui::pos2(left, rect.top()),
                egui::vec2(label_width(width), rect.height()),
            );

            let sense = match label.jump_target {
                Some(_) => egui::Sense::click(),
                None => egui::Sense::hover(),
            };
            let label_id = ui.id().with(("month_header_label", label.index));
            let response = ui.interact(label_rect, label_id, sense);

            let opacity = if response.hovered() { 1.0 } else { label.slot.opacity() };
            painter.text(
                label_rect.center(),
                egui::Align2::CENTER_CENTER,
                &label.name,
                egui::FontId::proportional(16.0),
                CURRENT_THEME.month_text_with_opacity(opacity),
            );

            if response.clicked() {
                clicked = label.jump_target;
            }
        }

        clicked
    }
}
