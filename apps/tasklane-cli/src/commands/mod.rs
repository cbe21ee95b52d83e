pub mod dates;
pub mod permission;
pub mod profile;
pub mod tasks;

pub use dates::{cmd_dates_calendar, cmd_dates_milestone, cmd_dates_validate};
pub use permission::{
    cmd_permission_check, cmd_permission_defaults, cmd_permission_delegate,
    cmd_permission_matrix, cmd_permission_self_assign,
};
pub use profile::{cmd_profile_add, cmd_profile_current, cmd_profile_list, cmd_profile_use};
pub use tasks::{cmd_tasks_board, cmd_tasks_list, ListArgs};
