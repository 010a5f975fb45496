//! Monthly expense timeline: a per-day spending bar chart for each month,
//! browsed through a swipeable month carousel.
//!
//! Long-pressing a bar selects a day; a quick drag swipes to the neighbouring
//! month. See [`ui::components::expense_chart`] and
//! [`ui::components::month_carousel`].

pub mod config;
pub mod data_loading;
pub mod errors;
pub mod ui;

pub use config::TimelineConfig;
pub use data_loading::TimelineData;
pub use errors::TimelineError;
pub use ui::ExpenseTimelineApp;
