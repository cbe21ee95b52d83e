use std::path::Path;

use chrono::NaiveDate;
use tasklane_model::Task;
use tasklane_timeline::DateRange;
use tasklane_views::{
    apply_view, group_by_status, FilterValue, SortDirection, SortField, SortState, ViewFilter,
};
use tracing::debug;

use crate::config::find_workspace_config;

fn load_tasks(file: &Path) -> Result<Vec<Task>, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(file)
        .map_err(|e| format!("failed to read {}: {}", file.display(), e))?;
    let tasks: Vec<Task> = serde_json::from_str(&contents)?;
    debug!(count = tasks.len(), file = %file.display(), "loaded tasks");
    Ok(tasks)
}

fn filter_slot<T>(value: Option<&str>) -> Result<FilterValue<T>, Box<dyn std::error::Error>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(v) => Ok(FilterValue::parse(v)?),
        None => Ok(FilterValue::Any),
    }
}

pub struct ListArgs<'a> {
    pub search: Option<&'a str>,
    pub status: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub project: Option<&'a str>,
    pub assignee: Option<&'a str>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub sort: Option<&'a str>,
    pub desc: bool,
}

fn build_filter(args: &ListArgs<'_>) -> Result<ViewFilter, Box<dyn std::error::Error>> {
    let due_within = match (args.from, args.to) {
        (Some(from), Some(to)) => Some(DateRange::new(from, to)?),
        _ => None,
    };
    Ok(ViewFilter {
        search: args.search.map(str::to_string),
        status: filter_slot(args.status)?,
        priority: filter_slot(args.priority)?,
        project_id: filter_slot(args.project)?,
        assignee_id: filter_slot(args.assignee)?,
        due_within,
    })
}

fn build_sort(args: &ListArgs<'_>) -> Result<SortState, Box<dyn std::error::Error>> {
    let field = match args.sort {
        Some(s) => s.parse::<SortField>()?,
        None => match find_workspace_config().and_then(|c| c.defaults.sort) {
            Some(s) => s.parse::<SortField>()?,
            None => SortState::default().field,
        },
    };
    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    Ok(SortState::new(field, direction))
}

pub fn cmd_tasks_list(file: &Path, args: ListArgs<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = load_tasks(file)?;
    let filter = build_filter(&args)?;
    let sort = build_sort(&args)?;

    let visible = apply_view(&tasks, &filter, &sort);
    if visible.is_empty() {
        println!("No tasks match.");
        return Ok(());
    }
    for task in visible {
        println!(
            "{}\t{}\t{}\t{}",
            task.due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            task.status,
            task.priority.as_str(),
            task.title
        );
    }
    Ok(())
}

pub fn cmd_tasks_board(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = load_tasks(file)?;
    for (status, column) in group_by_status(&tasks) {
        println!("{} ({})", status, column.len());
        for task in column {
            println!("  {}", task.title);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklane_model::Priority;

    fn args() -> ListArgs<'static> {
        ListArgs {
            search: None,
            status: None,
            priority: None,
            project: None,
            assignee: None,
            from: None,
            to: None,
            sort: None,
            desc: false,
        }
    }

    #[test]
    fn test_build_filter_treats_all_as_inactive() {
        let filter = build_filter(&ListArgs {
            status: Some("all"),
            priority: Some("high"),
            ..args()
        })
        .unwrap();
        assert_eq!(filter.status, FilterValue::Any);
        assert_eq!(filter.priority, FilterValue::Is(Priority::High));
    }

    #[test]
    fn test_build_filter_rejects_bad_values() {
        assert!(build_filter(&ListArgs {
            priority: Some("someday"),
            ..args()
        })
        .is_err());
        assert!(build_filter(&ListArgs {
            from: NaiveDate::from_ymd_opt(2024, 2, 1),
            to: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..args()
        })
        .is_err());
    }

    #[test]
    fn test_build_sort() {
        let sort = build_sort(&ListArgs {
            sort: Some("title"),
            desc: true,
            ..args()
        })
        .unwrap();
        assert_eq!(sort, SortState::new(SortField::Title, SortDirection::Desc));
        assert!(build_sort(&ListArgs {
            sort: Some("priority"),
            ..args()
        })
        .is_err());
    }
}
