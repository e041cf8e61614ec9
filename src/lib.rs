//! rlog - Research log manager
//!
//! A command-line daily research log: one plain-text document per calendar
//! day, stored under per-month folders, with a persisted settings record
//! and a calendar view that marks logged days.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RlogError;
