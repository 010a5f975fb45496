use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::{Datelike, NaiveDate};

/// Month identifier in `YYYYMM` form, e.g. `202402` for February 2024.
///
/// The value is kept exactly as the host supplied it; it is only interpreted
/// when a panel needs calendar information, so a malformed id stays contained
/// to the panel that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthId(pub u32);

impl MonthId {
    /// Build an id from calendar parts
    pub fn from_year_month(year: i32, month: u32) -> Self {
        MonthId(year.max(0) as u32 * 100 + month)
    }

    /// Split the id into (year, month).
    ///
    /// The year is the first four digits and the month is whatever remains,
    /// so `20241` reads as January 2024 and `202412` as December 2024.
    pub fn parse(&self) -> Result<(i32, u32), MonthIdError> {
        let raw = self.0.to_string();
        if raw.len() < 5 || raw.len() > 6 {
            return Err(MonthIdError::InvalidFormat);
        }

        let (year_part, month_part) = raw.split_at(4);
        let year = year_part.parse::<i32>().map_err(|_| MonthIdError::InvalidYear)?;
        let month = month_part.parse::<u32>().map_err(|_| MonthIdError::InvalidMonth)?;

        if !(1..=12).contains(&month) {
            return Err(MonthIdError::InvalidMonth);
        }

        Ok((year, month))
    }

    /// First calendar day of this month
    pub fn first_day(&self) -> Result<NaiveDate, MonthIdError> {
        let (year, month) = self.parse()?;
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(MonthIdError::InvalidYear)
    }

    /// Number of days in this month (leap-year aware).
    ///
    /// Computed by stepping to the first day of the following month and going
    /// back one day, which handles December rolling into the next year.
    pub fn days_in_month(&self) -> Result<u32, MonthIdError> {
        let (year, month) = self.parse()?;
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };

        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .map(|last_day| last_day.day())
            .ok_or(MonthIdError::InvalidYear)
    }

    /// The month after this one
    pub fn next(&self) -> Result<MonthId, MonthIdError> {
        let (year, month) = self.parse()?;
        Ok(if month == 12 {
            MonthId::from_year_month(year + 1, 1)
        } else {
            MonthId::from_year_month(year, month + 1)
        })
    }

    /// Short display label such as "Feb 2024"
    pub fn label(&self) -> Result<String, MonthIdError> {
        Ok(self.first_day()?.format("%b %Y").to_string())
    }
}

impl fmt::Display for MonthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Days in the month identified by a raw `YYYYMM` number
pub fn days_in_month(month_id: u32) -> Result<u32, MonthIdError> {
    MonthId(month_id).days_in_month()
}

/// Errors produced while interpreting a [`MonthId`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthIdError {
    InvalidFormat,
    InvalidYear,
    InvalidMonth,
}

impl fmt::Display for MonthIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthIdError::InvalidFormat => write!(f, "Month id must look like YYYYMM"),
            MonthIdError::InvalidYear => write!(f, "Invalid year in month id"),
            MonthIdError::InvalidMonth => write!(f, "Invalid month in month id"),
        }
    }
}

impl std::error::Error for MonthIdError {}

/// Aggregated spending for one day of a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayTotal {
    /// Day of month, starting at 1
    pub day: u32,
    /// Total spent that day in currency minor units (cents, pence, yen...)
    pub total: u64,
}

impl DayTotal {
    pub fn new(day: u32, total: u64) -> Self {
        Self { day, total }
    }

    /// Placeholder entry for a day with no spending
    pub fn empty(day: u32) -> Self {
        Self { day, total: 0 }
    }
}

/// Per-day expense totals for a single month, as supplied by the host.
///
/// `groups` may be sparse; days without spending are usually omitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthlyExpenseSet {
    pub id: MonthId,
    /// Display name for the month header (falls back to the id's label)
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub groups: Vec<DayTotal>,
}

impl MonthlyExpenseSet {
    pub fn new(id: MonthId, groups: Vec<DayTotal>) -> Self {
        Self { id, name: String::new(), groups }
    }

    /// Header label for this month
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        self.id.label().unwrap_or_else(|_| self.id.to_string())
    }

    /// Total spending across the month in minor units
    pub fn month_total(&self) -> u64 {
        self.groups.iter().map(|g| g.total).sum()
    }
}

/// How integer minor-unit amounts turn into display values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// ISO 4217 code shown next to amounts
    #[serde(default = "CurrencyFormat::default_code")]
    pub code: String,
    /// Digits after the decimal separator
    #[serde(default = "CurrencyFormat::default_decimal_places")]
    pub decimal_places: u32,
}

impl CurrencyFormat {
    fn default_code() -> String {
        "USD".to_string()
    }

    fn default_decimal_places() -> u32 {
        2
    }

    pub fn new(code: &str, decimal_places: u32) -> Self {
        Self { code: code.to_string(), decimal_places }
    }

    /// Format for a known ISO currency code; unknown codes get two decimals
    pub fn for_code(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        let decimal_places = match code.as_str() {
            "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
            "BHD" | "KWD" | "OMR" | "JOD" | "TND" => 3,
            _ => 2,
        };
        Self { code, decimal_places }
    }

    fn divisor(&self) -> u64 {
        // u64 holds at most 10^19
        10u64.pow(self.decimal_places.min(18))
    }

    /// Convert minor units to a display value
    pub fn to_display(&self, minor: u64) -> f64 {
        minor as f64 / self.divisor() as f64
    }

    /// Render an amount with exactly `decimal_places` fraction digits
    pub fn format(&self, minor: u64) -> String {
        let places = self.decimal_places.min(18) as usize;
        let divisor = self.divisor();
        let whole = minor / divisor;
        if places == 0 {
            format!("{} {}", whole, self.code)
        } else {
            let fraction = minor % divisor;
            format!("{}.{:0width$} {}", whole, fraction, self.code, width = places)
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::for_code("USD")
    }
}

/// Screen coordinates of a touch or pointer at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Request to open the detail view for one day of one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DetailRequest {
    pub month_id: MonthId,
    pub day: u32,
}
