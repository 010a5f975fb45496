//! # App State Module
//!
//! Central state for the expense timeline window.
//!
//! ## Key Types:
//! - `ExpenseTimelineApp` - Months, their chart panels, the carousel and header
//! - `LastPage` - Page sink remembering the settled month for persistence
//!
//! ## Start-up:
//! Configuration comes from [`TimelineConfig::load`]. Months come from the
//! configured data file, or demo data when none is set or it cannot be read.
//! The opening page is the persisted one, then the data file's `last_page`.
//!
//! Every frame hands each chart its month again; charts compare it with what
//! they last drew and only rebuild when it changed.

use anyhow::Context;
use log::{info, warn};
use shared::{CurrencyFormat, DetailRequest, MonthlyExpenseSet};

use crate::config::TimelineConfig;
use crate::data_loading::TimelineData;
use crate::ui::components::expense_chart::ExpenseChart;
use crate::ui::components::month_carousel::{CarouselCoordinator, MonthHeader, PageSink};

/// eframe storage key for the settled page
pub const LAST_PAGE_KEY: &str = "last_page";

/// Remembers the latest settled page until eframe saves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LastPage {
    pub page: usize,
}

impl PageSink for LastPage {
    fn set_page(&mut self, index: usize) {
        self.page = index;
    }
}

/// Main application struct for the expense timeline
pub struct ExpenseTimelineApp {
    pub config: TimelineConfig,
    pub currency: CurrencyFormat,
    pub labels: Vec<String>,
    pub months: Vec<MonthlyExpenseSet>,
    /// One chart per month, same order as `months`
    pub charts: Vec<ExpenseChart>,
    pub carousel: CarouselCoordinator,
    pub header: MonthHeader,
    pub last_page: LastPage,
    /// Most recent "open detail" request from a chart
    pub last_detail: Option<DetailRequest>,
}

impl ExpenseTimelineApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = TimelineConfig::load();
        let stored_page = cc
            .storage
            .and_then(|storage| eframe::get_value::<usize>(storage, LAST_PAGE_KEY));
        Self::from_parts(config, load_timeline_data, stored_page)
    }

    /// Build the app from a config, a data source and an optional persisted page
    pub fn from_parts(
        config: TimelineConfig,
        load: impl FnOnce(&TimelineConfig) -> anyhow::Result<TimelineData>,
        stored_page: Option<usize>,
    ) -> Self {
        let data = load(&config).unwrap_or_else(|e| {
            warn!("⚠️ {:#}; showing demo data", e);
            TimelineData::demo(chrono::Local::now().date_naive())
        });

        let currency = data.currency.clone().unwrap_or_else(|| config.currency.clone());
        let labels = data.labels();
        let charts: Vec<ExpenseChart> = data
            .months
            .iter()
            .map(|_| ExpenseChart::new(config.chart.clone(), currency.clone()))
            .collect();

        let start = stored_page.or(data.last_page).unwrap_or(0);
        let carousel = CarouselCoordinator::new(charts.len(), start, &config.carousel);
        info!(
            "🚀 Expense timeline ready: {} months, opening page {}",
            charts.len(),
            carousel.view()
        );

        let mut app = Self {
            header: MonthHeader::new(&config.carousel),
            last_page: LastPage { page: carousel.view() },
            config,
            currency,
            labels,
            months: data.months,
            charts,
            carousel,
            last_detail: None,
        };
        app.sync_charts();
        app
    }

    /// Hand every chart its month; unchanged months do not rebuild.
    ///
    /// Returns how many charts rebuilt.
    pub fn sync_charts(&mut self) -> usize {
        self.charts
            .iter_mut()
            .zip(&self.months)
            .map(|(chart, set)| chart.set_data(set))
            .filter(|rebuilt| *rebuilt)
            .count()
    }
}

/// Load the configured data file, or demo data when none is configured
pub fn load_timeline_data(config: &TimelineConfig) -> anyhow::Result<TimelineData> {
    match &config.data_file {
        Some(path) => TimelineData::from_file(path)
            .with_context(|| format!("Failed to load expense data from {}", path.display())),
        None => {
            info!("🎲 No data file configured, using demo data");
            Ok(TimelineData::demo(chrono::Local::now().date_naive()))
        }
    }
}
