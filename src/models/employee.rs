//! Employee record and the form DTO used to create or update it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Departments offered by the desktop form.
pub const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "Marketing",
    "Sales",
    "Human Resources",
    "Finance",
    "Operations",
    "Customer Support",
    "Product Management",
];

/// A single employee record.
///
/// Serialized with camelCase keys; string fields absent from a file load as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub salary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
}

/// DTO for creating or updating an employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub phone: String,
    pub salary: String,
}

impl EmployeeInput {
    /// Input with only identifier and name, as collected by the shell.
    pub fn basic(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Build a record stamped with the given creation time.
    pub fn into_employee(self, date_added: Option<DateTime<Utc>>) -> Employee {
        Employee {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department,
            position: self.position.trim().to_string(),
            phone: self.phone.trim().to_string(),
            salary: self.salary.trim().to_string(),
            date_added,
        }
    }
}

impl From<&Employee> for EmployeeInput {
    fn from(emp: &Employee) -> Self {
        Self {
            id: emp.id.clone(),
            name: emp.name.clone(),
            email: emp.email.clone(),
            department: emp.department.clone(),
            position: emp.position.clone(),
            phone: emp.phone.clone(),
            salary: emp.salary.clone(),
        }
    }
}

impl Employee {
    /// Numeric salary, if the field holds a number.
    pub fn salary_amount(&self) -> Option<f64> {
        parse_amount(&self.salary)
    }
}

/// Text or numeric JSON value for fields older exports may store as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Accept a string, a number, or null (read as empty).
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::Text(s)) => s,
        Some(StringOrNumber::Integer(n)) => n.to_string(),
        Some(StringOrNumber::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

/// Parse a salary string the way the form accepts it.
pub fn parse_amount(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
