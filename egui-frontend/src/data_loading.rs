//! # Data Loading Module
//!
//! Host data for the timeline: the ordered months to show, an optional
//! currency and an optional page to open on.
//!
//! ## Accepted JSON shapes:
//! - a bare array of month sets: `[{"id": 202402, "groups": [...]}, ...]`
//! - an object: `{"months": [...], "currency": {...}, "last_page": 3}`
//!
//! When no data file is configured, [`TimelineData::demo`] produces six months
//! of made-up spending ending with the current month.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::{CurrencyFormat, DayTotal, MonthId, MonthlyExpenseSet};

use crate::errors::TimelineError;

/// Months shown by the demo data
const DEMO_MONTHS: u32 = 6;

/// Everything the host supplies to the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineData {
    pub months: Vec<MonthlyExpenseSet>,
    #[serde(default)]
    pub currency: Option<CurrencyFormat>,
    #[serde(default)]
    pub last_page: Option<usize>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HostFile {
    Full(TimelineData),
    Months(Vec<MonthlyExpenseSet>),
}

impl TimelineData {
    pub fn new(months: Vec<MonthlyExpenseSet>) -> Self {
        Self { months, currency: None, last_page: None }
    }

    pub fn from_json(content: &str) -> Result<Self, TimelineError> {
        let data = match serde_json::from_str::<HostFile>(content)? {
            HostFile::Full(data) => data,
            HostFile::Months(months) => Self::new(months),
        };

        if data.months.is_empty() {
            return Err(TimelineError::NoMonths);
        }
        Ok(data)
    }

    pub fn from_file(path: &Path) -> Result<Self, TimelineError> {
        let content = std::fs::read_to_string(path).map_err(|source| TimelineError::DataRead {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json(&content)?;
        info!("📂 Loaded {} months from {}", data.months.len(), path.display());
        Ok(data)
    }

    /// Header labels, one per month
    pub fn labels(&self) -> Vec<String> {
        self.months.iter().map(MonthlyExpenseSet::display_name).collect()
    }

    /// Six months of deterministic sample spending ending with `today`'s month.
    ///
    /// Days after `today` in the current month are left empty.
    pub fn demo(today: NaiveDate) -> Self {
        let mut year = today.year();
        let mut month = today.month() as i32 - (DEMO_MONTHS as i32 - 1);
        while month < 1 {
            month += 12;
            year -= 1;
        }

        let mut id = MonthId::from_year_month(year, month as u32);
        let mut months = Vec::new();
        for _ in 0..DEMO_MONTHS {
            months.push(demo_month(id, today));
            match id.next() {
                Ok(next) => id = next,
                Err(_) => break,
            }
        }

        debug!("🎲 Generated {} demo months", months.len());
        let mut data = Self::new(months);
        data.last_page = Some(data.months.len().saturating_sub(1));
        data
    }
}

/// Small linear congruential generator; the demo only needs repeatable noise
struct DemoRng(u64);

impl DemoRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn demo_month(id: MonthId, today: NaiveDate) -> MonthlyExpenseSet {
    let mut rng = DemoRng(id.0 as u64);
    let days = id.days_in_month().unwrap_or(0);
    let is_current = MonthId::from_year_month(today.year(), today.month()) == id;
    let last_day = if is_current { today.day().min(days) } else { days };

    let groups = (1..=last_day)
        .filter_map(|day| {
            let roll = rng.next_u64();
            // roughly three days in five have spending
            (roll % 5 < 3).then(|| DayTotal::new(day, 300 + rng.next_u64() % 8700))
        })
        .collect();

    MonthlyExpenseSet::new(id, groups)
}
