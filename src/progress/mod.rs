//! Streak and progress aggregation
//!
//! Pure transformations from a per-day solve map into calendar grids,
//! streak lengths and badge states.

pub mod badges;
pub mod calendar;
pub mod streak;

pub use badges::{badges, Badge};
pub use calendar::{intensity, month_view, year_view, DayCell, MonthSummary, MonthView, YearView};
pub use streak::{current_streak, longest_streak};
