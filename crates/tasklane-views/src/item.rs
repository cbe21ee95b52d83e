use chrono::{DateTime, NaiveDate, Utc};
use tasklane_model::{Deal, Priority, Project, ProjectId, Task, UserId};

/// Fields a record exposes to filtering and sorting. Optional accessors
/// default to "not present", which never matches an active filter and
/// sorts last.
pub trait ViewItem {
    /// Title or name used for search and title sort.
    fn title(&self) -> &str;
    fn status(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;

    fn priority(&self) -> Option<Priority> {
        None
    }

    fn project_id(&self) -> Option<&ProjectId> {
        None
    }

    fn assignee_id(&self) -> Option<&UserId> {
        None
    }

    fn due_date(&self) -> Option<NaiveDate> {
        None
    }

    fn value(&self) -> Option<f64> {
        None
    }

    fn probability(&self) -> Option<u8> {
        None
    }
}

impl ViewItem for Task {
    fn title(&self) -> &str {
        &self.title
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn priority(&self) -> Option<Priority> {
        Some(self.priority)
    }

    fn project_id(&self) -> Option<&ProjectId> {
        Some(&self.project_id)
    }

    fn assignee_id(&self) -> Option<&UserId> {
        self.assigned_to.as_ref()
    }

    fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }
}

impl ViewItem for Project {
    fn title(&self) -> &str {
        &self.name
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn project_id(&self) -> Option<&ProjectId> {
        Some(&self.id)
    }

    // Project lists filter "assignee" by owner.
    fn assignee_id(&self) -> Option<&UserId> {
        Some(&self.owner_id)
    }

    fn due_date(&self) -> Option<NaiveDate> {
        Some(self.due_date)
    }
}

impl ViewItem for Deal {
    fn title(&self) -> &str {
        &self.title
    }

    fn status(&self) -> &str {
        &self.stage
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn assignee_id(&self) -> Option<&UserId> {
        Some(&self.owner_id)
    }

    fn due_date(&self) -> Option<NaiveDate> {
        self.expected_close_date
    }

    fn value(&self) -> Option<f64> {
        Some(self.value)
    }

    fn probability(&self) -> Option<u8> {
        Some(self.probability)
    }
}
