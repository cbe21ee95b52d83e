mod cli;
mod commands;
mod config;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, DatesCommand, PermissionCommand, ProfileCommand, TasksCommand};
use commands::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = config::config_path(cli.config.as_deref());

    match cli.command {
        Command::Permission { permission_cmd } => match permission_cmd {
            PermissionCommand::Check {
                action,
                resource,
                role,
                subject,
                owner,
                level,
                allow_users,
            } => {
                cmd_permission_check(
                    &config_path,
                    &action,
                    &resource,
                    role.as_deref(),
                    subject.as_deref(),
                    owner.as_deref(),
                    level.as_deref(),
                    &allow_users,
                )?;
            }
            PermissionCommand::Matrix { role } => {
                cmd_permission_matrix(&config_path, role.as_deref())?;
            }
            PermissionCommand::SelfAssign { role } => {
                cmd_permission_self_assign(&config_path, role.as_deref())?;
            }
            PermissionCommand::Defaults { creator } => {
                cmd_permission_defaults(&creator)?;
            }
            PermissionCommand::Delegate { target, role } => {
                cmd_permission_delegate(&config_path, &target, role.as_deref())?;
            }
        },
        Command::Dates { dates_cmd } => match dates_cmd {
            DatesCommand::Validate {
                project_due,
                project_start,
                task_start,
                task_due,
                fix,
            } => {
                cmd_dates_validate(project_start, project_due, task_start, task_due, fix)?;
            }
            DatesCommand::Milestone {
                project_due,
                project_start,
                due,
            } => {
                cmd_dates_milestone(project_start, project_due, due)?;
            }
            DatesCommand::Calendar {
                year,
                month,
                week_start,
            } => {
                cmd_dates_calendar(year, month, week_start.as_deref())?;
            }
        },
        Command::Tasks { tasks_cmd } => match tasks_cmd {
            TasksCommand::List {
                file,
                search,
                status,
                priority,
                project,
                assignee,
                from,
                to,
                sort,
                desc,
            } => {
                cmd_tasks_list(
                    &file,
                    ListArgs {
                        search: search.as_deref(),
                        status: status.as_deref(),
                        priority: priority.as_deref(),
                        project: project.as_deref(),
                        assignee: assignee.as_deref(),
                        from,
                        to,
                        sort: sort.as_deref(),
                        desc,
                    },
                )?;
            }
            TasksCommand::Board { file } => {
                cmd_tasks_board(&file)?;
            }
        },
        Command::Profile { profile_cmd } => match profile_cmd {
            ProfileCommand::Add {
                name,
                role,
                user,
                organization,
            } => {
                cmd_profile_add(
                    &config_path,
                    &name,
                    &role,
                    user.as_deref(),
                    organization.as_deref(),
                )?;
            }
            ProfileCommand::Use { name } => {
                cmd_profile_use(&config_path, &name)?;
            }
            ProfileCommand::List => {
                cmd_profile_list(&config_path)?;
            }
            ProfileCommand::Current => {
                cmd_profile_current(&config_path)?;
            }
        },
    }

    Ok(())
}
