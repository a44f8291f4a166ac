//! `olympic-tally` library crate.
//!
//! Loads a table of Olympic Games results once and answers aggregate
//! questions over it (overall counts, medals per gender, sports per team,
//! medals per athlete, entries per team and year) as chart-ready series.
//! The binary is a thin wrapper so everything here is testable in-process.

pub mod app;
pub mod cli;
pub mod color;
pub mod data;
pub mod error;
pub mod query;
pub mod state;
pub mod view;

pub use data::loader::load_file;
pub use data::model::{Dataset, Medal, Record, Sex};
pub use error::{LoadError, QueryError, SelectionError};
pub use state::{Selection, SelectionChoices};
