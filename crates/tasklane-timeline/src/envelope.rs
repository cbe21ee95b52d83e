use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tasklane_model::Project;

use crate::EnvelopeError;

/// Start/due bounds of a project. The due date is mandatory and never
/// precedes the start date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawEnvelope")]
pub struct DateEnvelope {
    start_date: Option<NaiveDate>,
    due_date: NaiveDate,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    #[serde(default)]
    start_date: Option<NaiveDate>,
    due_date: NaiveDate,
}

impl TryFrom<RawEnvelope> for DateEnvelope {
    type Error = EnvelopeError;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        DateEnvelope::new(raw.start_date, raw.due_date)
    }
}

impl DateEnvelope {
    pub fn new(start_date: Option<NaiveDate>, due_date: NaiveDate) -> Result<Self, EnvelopeError> {
        if let Some(start) = start_date {
            if start > due_date {
                return Err(EnvelopeError::StartAfterDue {
                    start,
                    due: due_date,
                });
            }
        }
        Ok(Self {
            start_date,
            due_date,
        })
    }

    /// Envelope of a stored project. Fails if the record itself is
    /// inconsistent.
    pub fn from_project(project: &Project) -> Result<Self, EnvelopeError> {
        Self::new(project.start_date, project.due_date)
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date <= self.due_date && self.start_date.map_or(true, |start| date >= start)
    }
}
