//! # Expense Chart Scales
//!
//! Linear day→pixel and amount→pixel mappings plus axis tick generation.
//! All positions are in chart space: a fixed `width × height` canvas that the
//! painter later fits into whatever screen rect it is given.

use shared::CurrencyFormat;
use crate::config::ChartConfig;
use super::data_preparation::CompletedMonth;

/// A linear mapping from a data domain to a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range.
    ///
    /// A zero-width domain maps everything to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Canvas dimensions the scales are built against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Gap between a visual bar and the edge of its bar group
    pub bar_padding: f64,
}

impl From<&ChartConfig> for ChartGeometry {
    fn from(config: &ChartConfig) -> Self {
        Self {
            width: config.width as f64,
            height: config.height as f64,
            padding: config.padding as f64,
            bar_padding: config.bar_padding as f64,
        }
    }
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self::from(&ChartConfig::default())
    }
}

/// One axis tick in chart space
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    /// Position along the axis (x for the day axis, y for the amount axis)
    pub position: f64,
    pub label: String,
    /// Whether the label text is drawn; hidden ticks still take part in layout
    pub label_visible: bool,
}

/// Scales for one month's chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub geometry: ChartGeometry,
    pub days_in_month: u32,
    pub max_total: u64,
}

impl ChartScales {
    /// Build scales for a completed month.
    ///
    /// Returns `None` for an empty day list so callers never construct a
    /// scale over an empty domain.
    pub fn build(month: &CompletedMonth, geometry: ChartGeometry) -> Option<Self> {
        if month.days.is_empty() {
            return None;
        }

        let days_in_month = month.days_in_month;
        let max_total = month.max_total();

        let x = LinearScale::new(
            (0.0, days_in_month as f64 + 1.0),
            (geometry.padding, geometry.width - geometry.padding),
        );
        // a month of zero totals still spans the full height
        let y = LinearScale::new(
            (0.0, max_total.max(1) as f64),
            (geometry.height - geometry.padding, geometry.padding),
        );

        Some(Self { x, y, geometry, days_in_month, max_total })
    }

    /// Half the width of one day's bar group
    pub fn bar_group_half_width(&self) -> f64 {
        self.x.apply(0.5) - self.geometry.padding
    }

    /// Full width of one day's bar group
    pub fn bar_group_width(&self) -> f64 {
        self.x.apply(1.0) - self.geometry.padding
    }

    /// Day-axis ticks: one per day plus a half-step tick between days.
    ///
    /// Labels are two-digit day numbers, shown only on days 1, 4, 7, ... and
    /// never on the leading zero tick.
    pub fn x_ticks(&self) -> Vec<AxisTick> {
        let mut values = vec![0.0];
        for day in 1..=self.days_in_month {
            values.push(day as f64);
            values.push(day as f64 + 0.5);
        }

        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| AxisTick {
                value,
                position: self.x.apply(value),
                label: format!("{:02}", value.floor() as u32),
                label_visible: index != 0 && value.fract() == 0.0 && (value as u32 + 2) % 3 == 0,
            })
            .collect()
    }

    /// Amount-axis ticks at 25/50/75/100% of the largest daily total
    pub fn y_ticks(&self, currency: &CurrencyFormat) -> Vec<AxisTick> {
        [0.25, 0.5, 0.75, 1.0]
            .iter()
            .map(|fraction| {
                let value = (self.max_total as f64 * fraction).floor();
                AxisTick {
                    value,
                    position: self.y.apply(value),
                    label: currency.format(value as u64),
                    label_visible: true,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{DayTotal, MonthId, MonthlyExpenseSet};
    use crate::ui::components::expense_chart::data_preparation::complete_month;

    fn month(id: u32, groups: Vec<DayTotal>) -> CompletedMonth {
        complete_month(&MonthlyExpenseSet::new(MonthId(id), groups)).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 10.0), (40.0, 140.0));
        assert!(close(scale.apply(0.0), 40.0));
        assert!(close(scale.apply(5.0), 90.0));
        assert!(close(scale.apply(10.0), 140.0));

        let inverted = LinearScale::new((0.0, 100.0), (360.0, 40.0));
        assert!(close(inverted.apply(100.0), 40.0));
        assert!(inverted.apply(75.0) < inverted.apply(25.0));
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((0.0, 0.0), (360.0, 40.0));
        assert!(close(scale.apply(0.0), 200.0));
    }

    #[test]
    fn test_build_scales_against_default_canvas() {
        // 29 days → domain [0, 30] over [40, 560]
        let february = month(202402, vec![DayTotal::new(14, 1000)]);
        let scales = ChartScales::build(&february, ChartGeometry::default()).unwrap();

        assert_eq!(scales.x.domain(), (0.0, 30.0));
        assert_eq!(scales.x.range(), (40.0, 560.0));
        assert_eq!(scales.y.domain(), (0.0, 1000.0));
        assert_eq!(scales.y.range(), (360.0, 40.0));
        assert!(close(scales.bar_group_width(), 520.0 / 30.0));
        assert!(close(scales.bar_group_half_width() * 2.0, scales.bar_group_width()));
    }

    #[test]
    fn test_all_zero_month_keeps_full_height() {
        let scales = ChartScales::build(&month(202402, vec![]), ChartGeometry::default()).unwrap();

        assert_eq!(scales.max_total, 0);
        assert_eq!(scales.y.domain(), (0.0, 1.0));
        assert!(close(scales.y.apply(0.0), 360.0));
        assert!(close(scales.y.apply(1.0), 40.0));
    }

    #[test]
    fn test_empty_day_list_skips_scales() {
        let empty = CompletedMonth { id: MonthId(202402), days_in_month: 0, days: vec![] };
        assert!(ChartScales::build(&empty, ChartGeometry::default()).is_none());
    }

    #[test]
    fn test_x_ticks_labels_are_sparse() {
        let scales = ChartScales::build(&month(202401, vec![]), ChartGeometry::default()).unwrap();
        let ticks = scales.x_ticks();

        // zero tick + a day tick and a half tick per day
        assert_eq!(ticks.len(), 1 + 31 * 2);
        assert_eq!(ticks[0].label, "00");
        assert!(!ticks[0].label_visible);
        assert_eq!(ticks[1].label, "01");
        assert_eq!(ticks[2].label, "01");

        let visible: Vec<&str> =
            ticks.iter().filter(|t| t.label_visible).map(|t| t.label.as_str()).collect();
        assert_eq!(visible, vec!["01", "04", "07", "10", "13", "16", "19", "22", "25", "28", "31"]);

        // half ticks sit between their neighbours
        assert!(ticks[1].position < ticks[2].position && ticks[2].position < ticks[3].position);
    }

    #[test]
    fn test_y_ticks_are_quartiles() {
        let february = month(202402, vec![DayTotal::new(3, 1001)]);
        let scales = ChartScales::build(&february, ChartGeometry::default()).unwrap();
        let ticks = scales.y_ticks(&CurrencyFormat::for_code("USD"));

        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![250.0, 500.0, 750.0, 1001.0]);
        assert_eq!(ticks[3].label, "10.01 USD");
        assert!(close(ticks[3].position, 40.0));
    }
}
