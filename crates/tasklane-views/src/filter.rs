//! Conjunctive view filters.

use std::str::FromStr;

use tasklane_model::{Priority, ProjectId, UserId};
use tasklane_timeline::DateRange;

use crate::{ViewError, ViewItem};

/// A filter slot that is either inactive or requires an exact match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterValue<T> {
    #[default]
    Any,
    Is(T),
}

impl<T> FilterValue<T> {
    pub fn is_active(&self) -> bool {
        matches!(self, FilterValue::Is(_))
    }

    /// An inactive slot matches everything, including missing values.
    pub fn matches(&self, value: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        match self {
            FilterValue::Any => true,
            FilterValue::Is(expected) => value == Some(expected),
        }
    }
}

impl<T> FilterValue<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    /// Parse a selector value. Empty input and `all` turn the filter off.
    pub fn parse(s: &str) -> Result<Self, ViewError> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(FilterValue::Any);
        }
        s.parse::<T>()
            .map(FilterValue::Is)
            .map_err(|e| ViewError::InvalidFilter {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl<T> From<Option<T>> for FilterValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FilterValue::Is(v),
            None => FilterValue::Any,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewFilter {
    /// Case-insensitive substring of the title or name.
    pub search: Option<String>,
    pub status: FilterValue<String>,
    pub priority: FilterValue<Priority>,
    pub project_id: FilterValue<ProjectId>,
    pub assignee_id: FilterValue<UserId>,
    /// Items without a due date never fall inside a range.
    pub due_within: Option<DateRange>,
}

impl ViewFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn active_count(&self) -> usize {
        [
            self.search_needle().is_some(),
            self.status.is_active(),
            self.priority.is_active(),
            self.project_id.is_active(),
            self.assignee_id.is_active(),
            self.due_within.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn matches<T: ViewItem + ?Sized>(&self, item: &T) -> bool {
        if let Some(needle) = self.search_needle() {
            if !item.title().to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let FilterValue::Is(status) = &self.status {
            if item.status() != status {
                return false;
            }
        }
        if !self.priority.matches(item.priority().as_ref()) {
            return false;
        }
        if !self.project_id.matches(item.project_id()) {
            return false;
        }
        if !self.assignee_id.matches(item.assignee_id()) {
            return false;
        }
        if let Some(range) = &self.due_within {
            match item.due_date() {
                Some(due) if range.contains(due) => {}
                _ => return false,
            }
        }
        true
    }

    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}
