use chrono::{Datelike, NaiveDate};
use tasklane_timeline::{
    calendar::month_grid, validate_milestone_date, validate_project_dates, DateEnvelope,
    DateField, DateValidation, TaskDateForm, WeekStart,
};

use crate::config::find_workspace_config;

fn describe(validation: &DateValidation) {
    match validation.violation() {
        None => println!("valid"),
        Some(v) => {
            println!("invalid: {}", v.message());
            let field = match v.target() {
                DateField::Start => "start",
                DateField::Due => "due",
            };
            println!("suggested {} date: {}", field, v.suggested_date());
        }
    }
}

fn show(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn cmd_dates_validate(
    project_start: Option<NaiveDate>,
    project_due: NaiveDate,
    task_start: Option<NaiveDate>,
    task_due: Option<NaiveDate>,
    fix: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let project_check = validate_project_dates(project_start, project_due);
    if !project_check.is_valid() {
        describe(&project_check);
        return Err("project dates are inconsistent".into());
    }
    let envelope = DateEnvelope::new(project_start, project_due)?;

    let mut form = TaskDateForm::with_dates(task_start, task_due);
    form.select_project(envelope);
    describe(form.validation());

    if fix && !form.validation().is_valid() {
        if form.resolve() {
            println!(
                "fixed: start={} due={}",
                show(form.start_date()),
                show(form.due_date())
            );
        } else {
            return Err(format!(
                "suggestions did not converge (start={} due={})",
                show(form.start_date()),
                show(form.due_date())
            )
            .into());
        }
    }

    Ok(())
}

pub fn cmd_dates_milestone(
    project_start: Option<NaiveDate>,
    project_due: NaiveDate,
    due: NaiveDate,
) -> Result<(), Box<dyn std::error::Error>> {
    let envelope = DateEnvelope::new(project_start, project_due)?;
    describe(&validate_milestone_date(&envelope, due));
    Ok(())
}

pub fn cmd_dates_calendar(
    year: i32,
    month: u32,
    week_start: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let week_start = match week_start {
        Some(s) => s.parse::<WeekStart>()?,
        None => find_workspace_config()
            .and_then(|c| c.defaults.week_start)
            .unwrap_or_default(),
    };
    let weeks = month_grid(year, month, week_start)?;

    println!("{}-{:02}", year, month);
    let header: Vec<String> = weeks
        .first()
        .map(|w| w.days.iter().map(|d| d.weekday().to_string()).collect())
        .unwrap_or_default();
    println!("{}", header.join(" "));
    for week in &weeks {
        let cells: Vec<String> = week
            .days
            .iter()
            .map(|d| {
                if d.month() == month {
                    format!("{:>3}", d.day())
                } else {
                    "  .".to_string()
                }
            })
            .collect();
        println!("{}", cells.join(" "));
    }

    Ok(())
}
