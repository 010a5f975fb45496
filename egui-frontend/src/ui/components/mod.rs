//! # UI Components Module
//!
//! Building blocks of the expense timeline window.
//!
//! ## Module Organization:
//! - `expense_chart` - One month's touch-interactive bar chart
//! - `month_carousel` - Swipeable month panels and the relative month header
//! - `theme` - Shared colors

pub mod expense_chart;
pub mod month_carousel;
pub mod theme;

pub use theme::*;
