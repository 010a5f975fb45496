//! # Highlight State Module
//!
//! Tracks which day of the expense chart is emphasised. The chart is either
//! uniform (nothing dimmed) or focused on exactly one day with every other
//! day dimmed, so "one active day while selecting" holds by construction.

/// Highlight state of a month's bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// All bars drawn the same way
    #[default]
    Uniform,
    /// One bar active, all others dimmed
    Focused(u32),
}

impl Highlight {
    /// Whether a day's bar should be drawn dimmed
    pub fn is_dimmed(&self, day: u32) -> bool {
        matches!(self, Highlight::Focused(active) if *active != day)
    }

    pub fn active_day(&self) -> Option<u32> {
        match self {
            Highlight::Uniform => None,
            Highlight::Focused(day) => Some(*day),
        }
    }

    /// Make `day` the only undimmed bar
    pub fn focus(&mut self, day: u32) {
        *self = Highlight::Focused(day);
    }

    /// Return to uniform appearance
    pub fn clear(&mut self) {
        *self = Highlight::Uniform;
    }

    /// Number of dimmed bars among days `1..=days`
    pub fn dimmed_count(&self, days: u32) -> usize {
        (1..=days).filter(|day| self.is_dimmed(*day)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_dims_nothing() {
        let highlight = Highlight::default();
        assert_eq!(highlight.dimmed_count(31), 0);
        assert_eq!(highlight.active_day(), None);
    }

    #[test]
    fn test_focus_dims_all_but_one() {
        let mut highlight = Highlight::default();
        highlight.focus(14);

        assert_eq!(highlight.active_day(), Some(14));
        assert!(!highlight.is_dimmed(14));
        assert!(highlight.is_dimmed(13));
        assert_eq!(highlight.dimmed_count(30), 29);

        highlight.focus(2);
        assert_eq!(highlight.dimmed_count(30), 29);
        assert!(highlight.is_dimmed(14));

        highlight.clear();
        assert_eq!(highlight.dimmed_count(30), 0);
    }
}
