//! # Expense Chart Scene
//!
//! Pure scene construction: `(scales, month) → shapes`. Every data change
//! rebuilds the whole scene; nothing is patched in place.
//!
//! Each day gets a bar group made of two rects:
//! - a visual bar sized by the day's total
//! - an invisible hit overlay spanning the whole group width and the full
//!   chart height, so touch hit-testing never depends on thin bars

use shared::{CurrencyFormat, MonthId, TouchPoint};
use super::data_preparation::CompletedMonth;
use super::scales::{AxisTick, ChartScales};

/// Axis-aligned rect in chart space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The visible bar for one day
#[derive(Debug, Clone, PartialEq)]
pub struct BarShape {
    pub day: u32,
    pub total: u64,
    pub rect: ChartRect,
}

/// Invisible touch target for one day
#[derive(Debug, Clone, PartialEq)]
pub struct HitOverlay {
    pub day: u32,
    pub rect: ChartRect,
}

/// Everything needed to draw one month's chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub month_id: MonthId,
    pub width: f64,
    pub height: f64,
    pub bars: Vec<BarShape>,
    pub overlays: Vec<HitOverlay>,
    /// Baseline the day labels hang from
    pub x_axis_y: f64,
    pub x_ticks: Vec<AxisTick>,
    /// Left edge the amount labels are right-aligned to
    pub y_axis_x: f64,
    /// Empty unless the amount axis is enabled
    pub y_ticks: Vec<AxisTick>,
}

/// Anything that can resolve a screen point to the day under it
pub trait HitTarget {
    fn day_at(&self, point: TouchPoint) -> Option<u32>;
}

impl ChartScene {
    /// Day whose overlay contains the chart-space point
    pub fn hit_test(&self, x: f64, y: f64) -> Option<u32> {
        self.overlays
            .iter()
            .find(|overlay| overlay.rect.contains(x, y))
            .map(|overlay| overlay.day)
    }

    pub fn bar(&self, day: u32) -> Option<&BarShape> {
        self.bars.iter().find(|bar| bar.day == day)
    }
}

/// Chart space used directly as screen space
impl HitTarget for ChartScene {
    fn day_at(&self, point: TouchPoint) -> Option<u32> {
        self.hit_test(point.x as f64, point.y as f64)
    }
}

/// Build the full scene for a month
pub fn build_scene(
    scales: &ChartScales,
    month: &CompletedMonth,
    currency: &CurrencyFormat,
    show_y_axis: bool,
) -> ChartScene {
    let geometry = scales.geometry;
    let group_half_width = scales.bar_group_half_width();
    let group_width = scales.bar_group_width();
    let bar_width = (group_width - geometry.bar_padding * 2.0).max(0.0);
    let baseline = scales.y.apply(0.0);
    let top = scales.y.apply(scales.y.domain().1);

    let mut bars = Vec::with_capacity(month.days.len());
    let mut overlays = Vec::with_capacity(month.days.len());

    for entry in &month.days {
        let center = scales.x.apply(entry.day as f64);
        let bar_top = scales.y.apply(entry.total as f64);

        bars.push(BarShape {
            day: entry.day,
            total: entry.total,
            rect: ChartRect::new(
                center + geometry.bar_padding - group_half_width,
                bar_top,
                bar_width,
                baseline - bar_top,
            ),
        });

        // overlays reach one padding below the baseline to cover the day labels
        overlays.push(HitOverlay {
            day: entry.day,
            rect: ChartRect::new(
                center - group_half_width,
                top,
                group_width,
                baseline - top + geometry.padding,
            ),
        });
    }

    ChartScene {
        month_id: month.id,
        width: geometry.width,
        height: geometry.height,
        bars,
        overlays,
        x_axis_y: geometry.height - geometry.padding + 2.0,
        x_ticks: scales.x_ticks(),
        y_axis_x: geometry.padding,
        y_ticks: if show_y_axis { scales.y_ticks(currency) } else { Vec::new() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{DayTotal, MonthlyExpenseSet};
    use crate::ui::components::expense_chart::data_preparation::complete_month;
    use crate::ui::components::expense_chart::scales::ChartGeometry;

    fn scene_for(groups: Vec<DayTotal>, show_y_axis: bool) -> ChartScene {
        let month = complete_month(&MonthlyExpenseSet::new(MonthId(202402), groups)).unwrap();
        let scales = ChartScales::build(&month, ChartGeometry::default()).unwrap();
        build_scene(&scales, &month, &CurrencyFormat::default(), show_y_axis)
    }

    #[test]
    fn test_one_bar_group_per_day() {
        let scene = scene_for(vec![DayTotal::new(14, 1000)], false);

        assert_eq!(scene.bars.len(), 29);
        assert_eq!(scene.overlays.len(), 29);
        for (bar, overlay) in scene.bars.iter().zip(&scene.overlays) {
            assert_eq!(bar.day, overlay.day);
        }
        assert!(scene.y_ticks.is_empty());
    }

    #[test]
    fn test_bar_heights_follow_totals() {
        let scene = scene_for(vec![DayTotal::new(14, 1000), DayTotal::new(3, 500)], false);

        let tallest = scene.bar(14).unwrap();
        let half = scene.bar(3).unwrap();
        let empty = scene.bar(1).unwrap();

        assert!((tallest.rect.y - 40.0).abs() < 1e-9);
        assert!((tallest.rect.bottom() - 360.0).abs() < 1e-9);
        assert!((half.rect.height * 2.0 - tallest.rect.height).abs() < 1e-9);
        assert_eq!(empty.rect.height, 0.0);
    }

    #[test]
    fn test_all_zero_month_keeps_bars_on_baseline() {
        let scene = scene_for(vec![DayTotal::new(3, 0), DayTotal::new(9, 0)], false);

        for bar in &scene.bars {
            assert!((bar.rect.y - 360.0).abs() < 1e-9);
            assert_eq!(bar.rect.height, 0.0);
        }
        // overlays still cover the whole plot down to the day labels
        for overlay in &scene.overlays {
            assert!((overlay.rect.y - 40.0).abs() < 1e-9);
            assert!((overlay.rect.bottom() - 400.0).abs() < 1e-9);
        }
        assert!(scene.hit_test(140.0, 200.0).is_some());
    }

    #[test]
    fn test_overlay_is_wider_and_taller_than_bar() {
        let scene = scene_for(vec![DayTotal::new(14, 1000)], false);
        let bar = scene.bar(14).unwrap();
        let overlay = scene.overlays.iter().find(|o| o.day == 14).unwrap();

        assert!(overlay.rect.x < bar.rect.x);
        assert!(overlay.rect.right() > bar.rect.right());
        assert!((overlay.rect.width - bar.rect.width - 6.0).abs() < 1e-9);
        assert!((overlay.rect.y - 40.0).abs() < 1e-9);
        assert!((overlay.rect.bottom() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlays_tile_without_overlap() {
        let scene = scene_for(vec![DayTotal::new(1, 10)], false);
        for pair in scene.overlays.windows(2) {
            assert!((pair[0].rect.right() - pair[1].rect.x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hit_test() {
        let scene = scene_for(vec![DayTotal::new(14, 1000)], false);
        let overlay = scene.overlays.iter().find(|o| o.day == 14).unwrap().rect;

        // inside the overlay but well above the short visual bar of an empty day
        let day_5 = scene.overlays.iter().find(|o| o.day == 5).unwrap().rect;
        assert_eq!(scene.hit_test(day_5.x + 1.0, 100.0), Some(5));

        assert_eq!(scene.hit_test(overlay.x + overlay.width / 2.0, 200.0), Some(14));
        assert_eq!(scene.hit_test(overlay.x, 200.0), Some(14));
        assert_eq!(scene.hit_test(5.0, 200.0), None);
        assert_eq!(scene.hit_test(overlay.x + 1.0, 10.0), None);
        assert_eq!(scene.day_at(TouchPoint::new((overlay.x + 2.0) as f32, 300.0)), Some(14));
    }

    #[test]
    fn test_y_axis_only_when_enabled() {
        let scene = scene_for(vec![DayTotal::new(14, 1000)], true);
        assert_eq!(scene.y_ticks.len(), 4);
    }
}
