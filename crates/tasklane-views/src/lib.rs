//! View state for list, board, calendar and timeline screens.
//!
//! A view is a filter, a sort and a display mode applied to an in-memory
//! collection. Nothing here fetches or mutates records.

use thiserror::Error;

mod filter;
mod item;
mod mode;
mod sort;

pub use filter::{FilterValue, ViewFilter};
pub use item::ViewItem;
pub use mode::{group_by_due_date, group_by_status, ViewMode};
pub use sort::{apply_view, SortDirection, SortField, SortState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
    #[error("unknown view mode: {0}")]
    UnknownViewMode(String),
    #[error("invalid filter value '{value}': {reason}")]
    InvalidFilter { value: String, reason: String },
}
