//! Demonstration records for a fresh install.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::Employee;
use crate::roster::Roster;

/// (id, name, email, department, position, phone, salary, date added)
const SAMPLE: [(&str, &str, &str, &str, &str, &str, &str, (i32, u32, u32)); 7] = [
    ("EMP001", "John Doe", "john.doe@company.com", "Engineering", "Senior Software Engineer", "+1 (555) 123-4567", "95000", (2024, 1, 15)),
    ("EMP002", "Jane Smith", "jane.smith@company.com", "Marketing", "Marketing Manager", "+1 (555) 234-5678", "78000", (2024, 2, 20)),
    ("EMP003", "Mike Johnson", "mike.johnson@company.com", "Sales", "Sales Representative", "+1 (555) 345-6789", "65000", (2024, 3, 10)),
    ("EMP004", "Sarah Wilson", "sarah.wilson@company.com", "Human Resources", "HR Specialist", "+1 (555) 456-7890", "72000", (2024, 1, 25)),
    ("EMP005", "David Brown", "david.brown@company.com", "Finance", "Financial Analyst", "+1 (555) 567-8901", "68000", (2024, 3, 5)),
    ("EMP006", "Emily Davis", "emily.davis@company.com", "Engineering", "Frontend Developer", "+1 (555) 678-9012", "82000", (2024, 2, 28)),
    ("EMP007", "Alex Garcia", "alex.garcia@company.com", "Operations", "Operations Manager", "+1 (555) 789-0123", "85000", (2024, 1, 8)),
];

/// The demonstration employees.
pub fn sample_employees() -> Vec<Employee> {
    SAMPLE
        .iter()
        .map(|(id, name, email, department, position, phone, salary, (y, m, d))| Employee {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
            position: position.to_string(),
            phone: phone.to_string(),
            salary: salary.to_string(),
            date_added: midnight_utc(*y, *m, *d),
        })
        .collect()
}

/// Load the demonstration employees into an empty roster.
///
/// Returns `true` if the roster was seeded.
pub fn seed_if_empty(roster: &mut Roster) -> bool {
    if !roster.is_empty() {
        return false;
    }
    roster.replace_all(sample_employees());
    true
}

fn midnight_utc(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
