//! Data models for employee records.

pub mod employee;

pub use employee::{DEPARTMENTS, Employee, EmployeeInput, parse_amount};
