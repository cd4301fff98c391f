//! Form validation for employee input.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::EmployeeInput;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-+()]+$").expect("phone pattern is valid"));

/// Form field that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Id,
    Name,
    Email,
    Phone,
    Department,
    Position,
    Salary,
}

impl Field {
    /// Get the display label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "Employee ID",
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Department => "Department",
            Field::Position => "Position",
            Field::Salary => "Annual Salary (USD)",
        }
    }
}

/// Validation messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Drop the message for a field once the user edits it.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Check whether an email address has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check whether a phone number contains only digits, spaces, and `-+()`.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Check that a salary is a non-negative number.
pub fn is_valid_salary(salary: &str) -> bool {
    crate::models::parse_amount(salary).is_some_and(|v| v >= 0.0)
}

/// Validate the full desktop form.
pub fn validate(input: &EmployeeInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if input.id.trim().is_empty() {
        errors.insert(Field::Id, "Employee ID is required");
    }
    if input.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }
    if input.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !is_valid_email(input.email.trim()) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }
    if input.department.is_empty() {
        errors.insert(Field::Department, "Department is required");
    }
    if input.position.trim().is_empty() {
        errors.insert(Field::Position, "Position is required");
    }
    if !input.phone.is_empty() && !is_valid_phone(&input.phone) {
        errors.insert(Field::Phone, "Please enter a valid phone number");
    }
    if !input.salary.is_empty() && !is_valid_salary(&input.salary) {
        errors.insert(Field::Salary, "Please enter a valid salary amount");
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> EmployeeInput {
        EmployeeInput {
            id: "EMP001".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            department: "Engineering".to_string(),
            position: "Senior Software Engineer".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            salary: "95000".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate(&valid_input()).is_ok());
    }

    #[test]
    fn test_required_fields() {
        let errors = validate(&EmployeeInput::default()).unwrap_err();
        assert_eq!(errors.get(Field::Id), Some("Employee ID is required"));
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Department), Some("Department is required"));
        assert_eq!(errors.get(Field::Position), Some("Position is required"));
        assert_eq!(errors.get(Field::Phone), None);
        assert_eq!(errors.get(Field::Salary), None);
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let mut input = valid_input();
        input.name = "   ".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::Name).is_some());
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));

        let mut input = valid_input();
        input.email = "not-an-email".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_phone_format() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(!is_valid_phone("555-CALL-NOW"));

        let mut input = valid_input();
        input.phone = "ext. 12".to_string();
        assert!(validate(&input).unwrap_err().get(Field::Phone).is_some());
    }

    #[test]
    fn test_salary_must_be_non_negative_number() {
        assert!(is_valid_salary("0"));
        assert!(is_valid_salary("72000.50"));
        assert!(!is_valid_salary("-1"));
        assert!(!is_valid_salary("abc"));

        let mut input = valid_input();
        input.salary = "-5".to_string();
        assert_eq!(
            validate(&input).unwrap_err().get(Field::Salary),
            Some("Please enter a valid salary amount")
        );
    }

    #[test]
    fn test_clear_field_error() {
        let mut errors = validate(&EmployeeInput::default()).unwrap_err();
        errors.clear(Field::Id);
        assert!(errors.get(Field::Id).is_none());
        assert_eq!(errors.len(), 4);
    }
}
