//! Task date form state.
//!
//! Mirrors the task editor: the selected project's envelope plus the two
//! task dates. Every change re-runs validation so the submit gate and the
//! suggestion shown to the user are always current.

use chrono::NaiveDate;
use tracing::debug;

use crate::{validate_task_dates, DateEnvelope, DateField, DateValidation, RULE_COUNT};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDateForm {
    envelope: Option<DateEnvelope>,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    validation: DateValidation,
}

impl TaskDateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dates(start_date: Option<NaiveDate>, due_date: Option<NaiveDate>) -> Self {
        let mut form = Self {
            start_date,
            due_date,
            ..Self::default()
        };
        form.revalidate();
        form
    }

    pub fn envelope(&self) -> Option<&DateEnvelope> {
        self.envelope.as_ref()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Current validation. Without a project there is nothing to check
    /// against and the dates count as valid.
    pub fn validation(&self) -> &DateValidation {
        &self.validation
    }

    pub fn select_project(&mut self, envelope: DateEnvelope) {
        self.envelope = Some(envelope);
        self.revalidate();
    }

    pub fn clear_project(&mut self) {
        self.envelope = None;
        self.revalidate();
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
        self.revalidate();
    }

    pub fn set_due_date(&mut self, date: Option<NaiveDate>) {
        self.due_date = date;
        self.revalidate();
    }

    pub fn can_submit(&self) -> bool {
        self.envelope.is_some() && self.validation.is_valid()
    }

    /// Write the current suggestion into its field. Returns false when
    /// there was nothing to apply.
    pub fn apply_suggestion(&mut self) -> bool {
        let Some(violation) = self.validation.violation().copied() else {
            return false;
        };
        let suggested = Some(violation.suggested_date());
        match violation.target() {
            DateField::Start => self.start_date = suggested,
            DateField::Due => self.due_date = suggested,
        }
        self.revalidate();
        true
    }

    /// Apply suggestions until the dates are valid. Returns whether that
    /// happened within one pass per rule; a task due before the project
    /// starts cannot be fixed by suggestions alone.
    pub fn resolve(&mut self) -> bool {
        for _ in 0..RULE_COUNT {
            if !self.apply_suggestion() {
                return true;
            }
        }
        let converged = self.validation.is_valid();
        if !converged {
            debug!(
                start = ?self.start_date,
                due = ?self.due_date,
                "task dates did not converge"
            );
        }
        converged
    }

    fn revalidate(&mut self) {
        self.validation = match &self.envelope {
            Some(envelope) => validate_task_dates(envelope, self.start_date, self.due_date),
            None => DateValidation::valid(),
        };
    }
}
