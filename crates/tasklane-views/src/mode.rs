use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ViewError, ViewItem};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Board,
    #[default]
    List,
    Calendar,
    Timeline,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Board => "board",
            ViewMode::List => "list",
            ViewMode::Calendar => "calendar",
            ViewMode::Timeline => "timeline",
        }
    }
}

impl FromStr for ViewMode {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "board" => Ok(ViewMode::Board),
            "list" => Ok(ViewMode::List),
            "calendar" => Ok(ViewMode::Calendar),
            "timeline" => Ok(ViewMode::Timeline),
            _ => Err(ViewError::UnknownViewMode(s.to_string())),
        }
    }
}

/// Board columns: one per status, in order of first appearance. Items keep
/// their relative order inside a column.
pub fn group_by_status<'a, T, I>(items: I) -> Vec<(String, Vec<&'a T>)>
where
    T: ViewItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut columns: Vec<(String, Vec<&'a T>)> = Vec::new();
    for item in items {
        match columns.iter_mut().find(|(status, _)| status.as_str() == item.status()) {
            Some((_, column)) => column.push(item),
            None => columns.push((item.status().to_string(), vec![item])),
        }
    }
    columns
}

/// Calendar cells keyed by due date. Undated items are left out.
pub fn group_by_due_date<'a, T, I>(items: I) -> BTreeMap<NaiveDate, Vec<&'a T>>
where
    T: ViewItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut days: BTreeMap<NaiveDate, Vec<&'a T>> = BTreeMap::new();
    for item in items {
        if let Some(due) = item.due_date() {
            days.entry(due).or_default().push(item);
        }
    }
    days
}
