//! # Expense Chart Data Preparation
//!
//! Turns the sparse per-day totals supplied by the host into a complete month:
//! one entry per calendar day, sorted by day, with zero totals for days that
//! had no spending.

use shared::{DayTotal, MonthId, MonthIdError, MonthlyExpenseSet};
use log::warn;

/// A month whose day list covers every calendar day exactly once
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedMonth {
    pub id: MonthId,
    pub days_in_month: u32,
    /// Entries for days 1..=days_in_month in ascending order
    pub days: Vec<DayTotal>,
}

impl CompletedMonth {
    /// Largest daily total in the month
    pub fn max_total(&self) -> u64 {
        self.days.iter().map(|d| d.total).max().unwrap_or(0)
    }

    /// Entry for a given day, if the day is in range
    pub fn day(&self, day: u32) -> Option<&DayTotal> {
        day.checked_sub(1).and_then(|index| self.days.get(index as usize))
    }
}

/// Insert a zero entry for every missing day and sort ascending.
///
/// Provided entries are kept as-is. Entries outside `1..=days_in_month` are
/// dropped, and when a day appears more than once the first entry wins.
pub fn fill_gaps(raw_groups: &[DayTotal], days_in_month: u32) -> Vec<DayTotal> {
    let mut slots: Vec<Option<DayTotal>> = vec![None; days_in_month as usize];

    for group in raw_groups {
        if group.day == 0 || group.day > days_in_month {
            warn!("📊 Dropping total for day {} outside 1..={}", group.day, days_in_month);
            continue;
        }

        let slot = &mut slots[(group.day - 1) as usize];
        if slot.is_some() {
            warn!("📊 Duplicate total for day {}, keeping the first", group.day);
            continue;
        }
        *slot = Some(*group);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.unwrap_or_else(|| DayTotal::empty(index as u32 + 1)))
        .collect()
}

/// Complete a host-supplied month, failing only if its id cannot be read
pub fn complete_month(set: &MonthlyExpenseSet) -> Result<CompletedMonth, MonthIdError> {
    let days_in_month = set.id.days_in_month()?;
    Ok(CompletedMonth {
        id: set.id,
        days_in_month,
        days: fill_gaps(&set.groups, days_in_month),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_contiguous(days: &[DayTotal], expected_len: u32) {
        assert_eq!(days.len(), expected_len as usize);
        for (index, entry) in days.iter().enumerate() {
            assert_eq!(entry.day, index as u32 + 1);
        }
    }

    #[test]
    fn test_fill_gaps_sparse_input() {
        let raw = vec![DayTotal::new(14, 2500), DayTotal::new(3, 120)];
        let filled = fill_gaps(&raw, 30);

        assert_contiguous(&filled, 30);
        assert_eq!(filled[2], DayTotal::new(3, 120));
        assert_eq!(filled[13], DayTotal::new(14, 2500));
        assert_eq!(filled.iter().filter(|d| d.total == 0).count(), 28);
    }

    #[test]
    fn test_fill_gaps_empty_and_full_input() {
        assert_contiguous(&fill_gaps(&[], 28), 28);

        let full: Vec<DayTotal> =
            (1..=31).rev().map(|day| DayTotal::new(day, day as u64 * 10)).collect();
        let filled = fill_gaps(&full, 31);
        assert_contiguous(&filled, 31);
        assert_eq!(filled[30].total, 310);
    }

    #[test]
    fn test_fill_gaps_drops_out_of_range_and_duplicates() {
        let raw = vec![
            DayTotal::new(0, 5),
            DayTotal::new(31, 5),
            DayTotal::new(2, 100),
            DayTotal::new(2, 900),
        ];
        let filled = fill_gaps(&raw, 30);

        assert_contiguous(&filled, 30);
        assert_eq!(filled[1].total, 100);
    }

    #[test]
    fn test_complete_month_length_matches_calendar() {
        let calendar = [(202402, 29), (202102, 28), (202412, 31), (202401, 31), (202306, 30)];
        for (id, expected) in calendar {
            let set = MonthlyExpenseSet::new(MonthId(id), vec![DayTotal::new(1, 10)]);
            let month = complete_month(&set).unwrap();
            assert_contiguous(&month.days, expected);
            assert_eq!(month.days_in_month, expected);
        }
    }

    #[test]
    fn test_complete_month_rejects_bad_id() {
        let set = MonthlyExpenseSet::new(MonthId(12), vec![DayTotal::new(1, 10)]);
        assert!(complete_month(&set).is_err());
    }

    #[test]
    fn test_max_total_and_day_lookup() {
        let groups = vec![DayTotal::new(5, 700), DayTotal::new(9, 300)];
        let set = MonthlyExpenseSet::new(MonthId(202402), groups);
        let month = complete_month(&set).unwrap();

        assert_eq!(month.max_total(), 700);
        assert_eq!(month.day(9), Some(&DayTotal::new(9, 300)));
        assert_eq!(month.day(0), None);
        assert_eq!(month.day(30), None);
    }
}
