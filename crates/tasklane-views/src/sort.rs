//! Column sorting.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{ViewError, ViewFilter, ViewItem};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    DueDate,
    Value,
    Probability,
    CreatedAt,
    UpdatedAt,
    Title,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::DueDate,
        SortField::Value,
        SortField::Probability,
        SortField::CreatedAt,
        SortField::UpdatedAt,
        SortField::Title,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::DueDate => "dueDate",
            SortField::Value => "value",
            SortField::Probability => "probability",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
            SortField::Title => "title",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ViewError::UnknownSortField(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ViewError::UnknownSortDirection(s.to_string())),
        }
    }
}

/// Selected sort column and direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::DueDate,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column header click: the same field flips direction, a new field
    /// starts ascending.
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Compare two items. Items missing the sort key go last in either
    /// direction.
    pub fn compare<T: ViewItem + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        match (SortKey::of(a, self.field), SortKey::of(b, self.field)) {
            (Some(x), Some(y)) => self.direction.apply(x.cmp_same(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

enum SortKey {
    Date(NaiveDate),
    Time(DateTime<Utc>),
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of<T: ViewItem + ?Sized>(item: &T, field: SortField) -> Option<Self> {
        match field {
            SortField::DueDate => item.due_date().map(SortKey::Date),
            SortField::Value => item.value().map(SortKey::Number),
            SortField::Probability => item.probability().map(|p| SortKey::Number(f64::from(p))),
            SortField::CreatedAt => Some(SortKey::Time(item.created_at())),
            SortField::UpdatedAt => Some(SortKey::Time(item.updated_at())),
            SortField::Title => Some(SortKey::Text(item.title().to_lowercase())),
        }
    }

    // Both keys always come from the same field.
    fn cmp_same(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Time(a), SortKey::Time(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Filter then sort. The sort is stable, so equal keys keep their input
/// order.
pub fn apply_view<'a, T: ViewItem>(
    items: &'a [T],
    filter: &ViewFilter,
    sort: &SortState,
) -> Vec<&'a T> {
    let mut visible: Vec<&T> = items.iter().filter(|item| filter.matches(*item)).collect();
    visible.sort_by(|a, b| sort.compare(*a, *b));
    trace!(
        total = items.len(),
        visible = visible.len(),
        field = %sort.field,
        "applied view"
    );
    visible
}
