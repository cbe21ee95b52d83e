//! Calendar arithmetic for the calendar and timeline views.
//!
//! Everything here takes dates by value and returns new ones.

use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::EnvelopeError;

/// First column of a rendered week.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    #[serde(alias = "mon")]
    Monday,
    #[serde(alias = "sun")]
    Sunday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

impl FromStr for WeekStart {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mon" | "monday" => Ok(WeekStart::Monday),
            "sun" | "sunday" => Ok(WeekStart::Sunday),
            _ => Err(EnvelopeError::InvalidWeekStart(s.to_string())),
        }
    }
}

/// `date` shifted by a signed number of days, or `None` outside the
/// representable range.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

/// `date` shifted by whole months. Days past the end of the target month
/// clamp to its last day (Jan 31 + 1 month = Feb 29 in a leap year).
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let magnitude = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

/// First day of the week containing `date`, or `None` when that day falls
/// before the earliest representable date.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> Option<NaiveDate> {
    let offset = match week_start {
        WeekStart::Monday => date.weekday().num_days_from_monday(),
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
    };
    date.checked_sub_days(Days::new(u64::from(offset)))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 31,
    }
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}

/// Inclusive range of calendar days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EnvelopeError> {
        if start > end {
            return Err(EnvelopeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        Self {
            start: date.with_day(1).unwrap_or(date),
            end: end_of_month(date),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Number of days in the range, counting both ends.
    pub fn days(&self) -> u64 {
        (self.end - self.start).num_days().unsigned_abs() + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Seven consecutive days starting on the configured week start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarWeek {
    pub days: [NaiveDate; 7],
}

impl CalendarWeek {
    fn starting(first: NaiveDate) -> Option<Self> {
        let mut days = [first; 7];
        for (offset, day) in days.iter_mut().enumerate().skip(1) {
            *day = first.checked_add_days(Days::new(offset as u64))?;
        }
        Some(Self { days })
    }

    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.days[0],
            end: self.days[6],
        }
    }
}

/// Full weeks covering a month, padded with days from the neighbouring
/// months so every row has seven cells. Months whose padding would run past
/// either end of the representable range are rejected.
pub fn month_grid(
    year: i32,
    month: u32,
    week_start: WeekStart,
) -> Result<Vec<CalendarWeek>, EnvelopeError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(EnvelopeError::InvalidMonth { year, month })?;
    let last = end_of_month(first);

    let out_of_range = || EnvelopeError::OutOfRange { year, month };

    let mut weeks = Vec::with_capacity(6);
    let mut cursor = start_of_week(first, week_start).ok_or_else(out_of_range)?;
    loop {
        let week = CalendarWeek::starting(cursor).ok_or_else(out_of_range)?;
        weeks.push(week);
        if week.days[6] >= last {
            break;
        }
        cursor = week.days[6].checked_add_days(Days::new(1)).ok_or_else(out_of_range)?;
    }
    Ok(weeks)
}
