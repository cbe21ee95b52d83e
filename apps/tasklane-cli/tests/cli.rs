use std::path::Path;
use std::process::{Command, Output};

const ALICE: &str = "0190a5d2-3c4e-7000-8000-0000000000a1";
const BOB: &str = "0190a5d2-3c4e-7000-8000-0000000000b0";

fn tasklane(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tasklane"))
        .args(args)
        .current_dir(dir)
        .env("TASKLANE_CONFIG", dir.join("config.json"))
        .env("HOME", dir)
        .env_remove("TASKLANE_ROLE")
        .env_remove("TASKLANE_USER")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tasklane")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_member_may_edit_own_task() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(
        dir.path(),
        &[
            "permission", "check", "--action", "update", "--resource", "task", "--role",
            "member", "--subject", ALICE, "--owner", ALICE,
        ],
    );
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "allow: owner may edit own task");

    let out = tasklane(
        dir.path(),
        &[
            "permission", "check", "--action", "update", "--resource", "task", "--role",
            "member", "--subject", ALICE, "--owner", BOB,
        ],
    );
    assert_eq!(stdout(&out).trim(), "deny: role lacks edit_tasks");
}

#[test]
fn test_override_decides_over_role() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(
        dir.path(),
        &[
            "permission", "check", "-a", "delete", "-r", "project", "--role", "super_admin",
            "--level", "none",
        ],
    );
    assert_eq!(stdout(&out).trim(), "deny: resource override allows nobody");

    let out = tasklane(
        dir.path(),
        &[
            "permission", "check", "-a", "update", "-r", "project", "--role", "viewer",
            "--subject", BOB, "--level", "specific", "--allow-user", BOB,
        ],
    );
    assert_eq!(stdout(&out).trim(), "allow: subject listed in resource override");
}

#[test]
fn test_unknown_role_is_denied() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(
        dir.path(),
        &["permission", "check", "-a", "read", "-r", "project", "--role", "owner"],
    );
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "deny: unknown role 'owner'");
}

#[test]
fn test_unmapped_action_is_denied() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(
        dir.path(),
        &["permission", "check", "-a", "assign", "-r", "project", "--role", "super_admin"],
    );
    assert_eq!(stdout(&out).trim(), "deny: action not supported on this resource");
}

#[test]
fn test_self_assign() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(dir.path(), &["permission", "self-assign", "--role", "manager"]);
    assert_eq!(stdout(&out).trim(), "manager cannot assign tasks to themselves");

    let out = tasklane(dir.path(), &["permission", "self-assign", "--role", "viewer"]);
    assert_eq!(stdout(&out).trim(), "viewer can assign tasks to themselves");
}

#[test]
fn test_project_defaults_json() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(dir.path(), &["permission", "defaults", "--creator", ALICE]);
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["read"]["level"], "all");
    assert_eq!(value["assignToUser"]["level"], "specific");
    assert_eq!(value["delete"]["specificUsers"][0], ALICE);
}

#[test]
fn test_dates_due_checked_before_start() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(
        dir.path(),
        &[
            "dates", "validate", "--project-start", "2024-01-01", "--project-due",
            "2024-01-31", "--task-start", "2023-12-01", "--task-due", "2024-02-15",
        ],
    );
    let text = stdout(&out);
    assert!(text.contains(
        "invalid: Task due date must be on or before the project due date (2024-01-31)"
    ));
    assert!(text.contains("suggested due date: 2024-01-31"));
}

#[test]
fn test_dates_fix() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(
        dir.path(),
        &[
            "dates", "validate", "--project-due", "2024-06-30", "--task-start", "2024-06-10",
            "--task-due", "2024-06-05", "--fix",
        ],
    );
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("suggested start date: 2024-06-05"));
    assert!(text.contains("fixed: start=2024-06-05 due=2024-06-05"));
}

#[test]
fn test_dates_fix_reports_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(
        dir.path(),
        &[
            "dates", "validate", "--project-start", "2024-01-01", "--project-due",
            "2024-01-31", "--task-start", "2024-01-10", "--task-due", "2023-12-20", "--fix",
        ],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("did not converge"));
}

#[test]
fn test_dates_valid() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(
        dir.path(),
        &[
            "dates", "validate", "--project-start", "2024-01-01", "--project-due",
            "2024-12-31", "--task-start", "2024-03-01", "--task-due", "2024-03-15",
        ],
    );
    assert_eq!(stdout(&out).trim(), "valid");
}

#[test]
fn test_calendar_grid() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(
        dir.path(),
        &["dates", "calendar", "--year", "2024", "--month", "2", "--week-start", "mon"],
    );
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "2024-02");
    assert_eq!(lines[1], "Mon Tue Wed Thu Fri Sat Sun");
    assert_eq!(lines.len(), 2 + 5);
}

#[test]
fn test_calendar_at_last_representable_year() {
    let dir = tempfile::tempdir().unwrap();
    for week_start in ["mon", "sun"] {
        let out = tasklane(
            dir.path(),
            &["dates", "calendar", "--year", "262142", "--month", "12", "--week-start", week_start],
        );
        // 101 is the exit code of a panicking Rust process.
        assert_ne!(out.status.code(), Some(101));
        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            assert!(stderr.contains("OutOfRange"));
        }
    }
}

#[test]
fn test_tasks_list_filters() {
    let dir = tempfile::tempdir().unwrap();
    let tasks = serde_json::json!([
        {
            "id": "0190a5d2-3c4e-7000-8000-000000000101",
            "projectId": "0190a5d2-3c4e-7000-8000-000000000001",
            "title": "Launch checklist",
            "status": "in_progress",
            "priority": "high",
            "dueDate": "2024-03-01",
            "createdBy": ALICE,
            "createdAt": "2024-01-02T10:00:00Z",
            "updatedAt": "2024-01-02T10:00:00Z"
        },
        {
            "id": "0190a5d2-3c4e-7000-8000-000000000102",
            "projectId": "0190a5d2-3c4e-7000-8000-000000000001",
            "title": "Launch retro",
            "status": "todo",
            "dueDate": "2024-02-01",
            "createdBy": BOB,
            "createdAt": "2024-01-03T10:00:00Z",
            "updatedAt": "2024-01-03T10:00:00Z"
        },
        {
            "id": "0190a5d2-3c4e-7000-8000-000000000103",
            "projectId": "0190a5d2-3c4e-7000-8000-000000000001",
            "title": "Budget",
            "status": "todo",
            "createdBy": BOB,
            "createdAt": "2024-01-04T10:00:00Z",
            "updatedAt": "2024-01-04T10:00:00Z"
        }
    ]);
    let file = dir.path().join("tasks.json");
    std::fs::write(&file, tasks.to_string()).unwrap();
    let file = file.to_str().unwrap();

    let out = tasklane(
        dir.path(),
        &["tasks", "list", "-f", file, "--search", "launch", "--status", "done"],
    );
    assert_eq!(stdout(&out).trim(), "No tasks match.");

    let out = tasklane(
        dir.path(),
        &["tasks", "list", "-f", file, "--search", "launch", "--status", "all"],
    );
    let text = stdout(&out);
    let titles: Vec<&str> = text.lines().map(|l| l.rsplit('\t').next().unwrap()).collect();
    assert_eq!(titles, ["Launch retro", "Launch checklist"]);

    let out = tasklane(dir.path(), &["tasks", "list", "-f", file, "--desc"]);
    let text = stdout(&out);
    let titles: Vec<&str> = text.lines().map(|l| l.rsplit('\t').next().unwrap()).collect();
    assert_eq!(titles, ["Launch checklist", "Launch retro", "Budget"]);
}

#[test]
fn test_profile_drives_role() {
    let dir = tempfile::tempdir().unwrap();

    let out = tasklane(
        dir.path(),
        &["profile", "add", "review", "--role", "viewer", "--user", BOB],
    );
    assert!(out.status.success());
    assert!(dir.path().join("config.json").exists());

    let out = tasklane(dir.path(), &["profile", "current"]);
    let text = stdout(&out);
    assert!(text.starts_with("review"));
    assert!(text.contains("role: viewer"));

    let out = tasklane(dir.path(), &["permission", "matrix"]);
    let text = stdout(&out);
    assert!(text.contains("tasks: view_tasks"));
    assert!(text.contains("settings: -"));

    let out = tasklane(dir.path(), &["permission", "check", "-a", "create", "-r", "task"]);
    assert_eq!(stdout(&out).trim(), "deny: role lacks create_tasks");
}

#[test]
fn test_profile_use_unknown_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = tasklane(dir.path(), &["profile", "add", "work", "--role", "admin"]);
    assert!(out.status.success());

    let out = tasklane(dir.path(), &["profile", "use", "missing"]);
    assert!(!out.status.success());

    let out = tasklane(dir.path(), &["profile", "list"]);
    assert!(stdout(&out).contains("* work (admin)"));
}

#[test]
fn test_workspace_defaults_role() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tasklane.toml"), "[defaults]\nrole = \"manager\"\n").unwrap();

    let out = tasklane(dir.path(), &["permission", "self-assign"]);
    assert_eq!(stdout(&out).trim(), "manager cannot assign tasks to themselves");
}
