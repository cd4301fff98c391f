use std::io::Cursor;

use chrono::{TimeZone, Utc};
use employee_manager::models::EmployeeInput;
use employee_manager::query::{self, SortKey, SortState};
use employee_manager::roster::Roster;
use employee_manager::sample;
use employee_manager::shell::Shell;
use employee_manager::stats::Statistics;
use employee_manager::store::{self, Store};
use employee_manager::validation;
use employee_manager::AppError;

#[test]
fn form_submission_persists_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("nested").join("employees.json"));
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();

    let input = EmployeeInput {
        id: " EMP100 ".to_string(),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+44 (20) 555-0100".to_string(),
        department: "Engineering".to_string(),
        position: "Analyst".to_string(),
        salary: "120000".to_string(),
    };
    validation::validate(&input).unwrap();

    let mut roster = Roster::new();
    roster.create(input, now).unwrap();
    store.save(roster.as_slice()).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].id, "EMP100");
    assert_eq!(reloaded[0].date_added, Some(now));
}

#[test]
fn invalid_form_is_rejected_before_roster() {
    let input = EmployeeInput {
        id: "EMP200".to_string(),
        name: "Bad Data".to_string(),
        email: "not-an-email".to_string(),
        phone: "call me".to_string(),
        department: String::new(),
        position: "Clerk".to_string(),
        salary: "-5".to_string(),
    };
    let errors = validation::validate(&input).unwrap_err();
    assert_eq!(errors.len(), 4);
}

#[test]
fn export_then_import_restores_collection() {
    let dir = tempfile::tempdir().unwrap();
    let employees = sample::sample_employees();
    let path = dir.path().join(store::default_export_filename(
        chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    ));

    store::export_json(&employees, &path).unwrap();
    assert!(path.ends_with("employees-2024-03-05.json"));

    let imported = store::import_json(&path).unwrap();
    assert_eq!(imported, employees);
}

#[test]
fn import_of_object_is_invalid_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("object.json");
    std::fs::write(&path, r#"{"employees": []}"#).unwrap();

    let err = store::import_json(&path).unwrap_err();
    assert!(matches!(err, AppError::InvalidImport));

    std::fs::write(&path, "{ not json").unwrap();
    let err = store::import_json(&path).unwrap_err();
    assert_eq!(err.to_string(), "Error reading file!");
}

#[test]
fn sample_data_search_sort_and_stats() {
    let employees = sample::sample_employees();

    let mut sort = SortState::default();
    sort.toggle(SortKey::Salary);
    sort.toggle(SortKey::Salary);
    let rows = query::visible(&employees, "", sort);
    assert_eq!(rows.first().map(|e| e.id.as_str()), Some("EMP001"));

    let marketing = query::visible(&employees, "MARKET", SortState::default());
    assert_eq!(marketing.len(), 1);

    let now = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
    let stats = Statistics::compute(&employees, now);
    assert_eq!(stats.total_employees, 7);
    assert_eq!(stats.departments.len(), 6);
    assert_eq!(stats.top_departments(1), vec![("Engineering", 2)]);
}

#[test]
fn shell_session_persists_to_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("employees.json"));

    let input = Cursor::new("1\nGrace Hopper\nEMP300\n1\nAlan Turing\nEMP301\n3\nEMP300\n2\n4\n");
    let mut output = Vec::new();
    let mut shell = Shell::new(input, &mut output, Roster::new()).with_store(store.clone());
    shell.run().unwrap();
    drop(shell);

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Employee \"Grace Hopper\" with ID \"EMP300\" has been added successfully!"));
    assert!(text.contains("Employee \"Grace Hopper\" with ID \"EMP300\" has been removed successfully!"));
    assert!(text.contains("EMP301\t\tAlan Turing"));
    assert!(text.contains("Total employees: 1"));

    let saved = store.load().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, "EMP301");
}
