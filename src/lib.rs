pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod logging;
pub mod models;
pub mod query;
pub mod roster;
pub mod sample;
pub mod shell;
pub mod stats;
pub mod store;
pub mod ui;
pub mod validation;

pub use error::{AppError, Result};
