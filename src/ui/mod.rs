//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod employee_form;
pub mod employee_list;
pub mod header;
pub mod statistics;

pub use app::App;
