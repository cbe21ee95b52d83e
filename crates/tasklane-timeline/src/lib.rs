//! Timeline constraints between projects, milestones and tasks.
//!
//! A project's start and due dates form an envelope. Task and milestone
//! dates must fall inside it, and a task may not start after it is due.
//! Validation never fails: a violated rule comes back as a
//! [`DateValidation`] carrying a message and a suggested replacement date.

use chrono::NaiveDate;
use thiserror::Error;

pub mod calendar;
mod checks;
mod envelope;
mod form;
mod validator;

pub use calendar::{CalendarWeek, DateRange, WeekStart};
pub use checks::{validate_milestone_date, validate_project_dates};
pub use envelope::DateEnvelope;
pub use form::TaskDateForm;
pub use validator::{validate_task_dates, DateField, DateValidation, Violation, RULE_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("start date {start} is after due date {due}")]
    StartAfterDue { start: NaiveDate, due: NaiveDate },
    #[error("range start {start} is after range end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("invalid calendar month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("calendar grid for {year}-{month:02} falls outside the supported date range")]
    OutOfRange { year: i32, month: u32 },
    #[error("invalid week start: {0}")]
    InvalidWeekStart(String),
}
