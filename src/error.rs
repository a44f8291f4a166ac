use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a source file into a [`Dataset`](crate::data::model::Dataset).
///
/// Every variant is fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: {message}")]
    Malformed { row: usize, message: String },

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON")]
    Json(#[from] serde_json::Error),

    #[error("malformed Parquet")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("unreadable Arrow batch")]
    Arrow(#[from] arrow::error::ArrowError),
}

/// Failure of a query over an already loaded dataset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("no records for athlete '{0}'")]
    NoSuchAthlete(String),
}

/// A selection the input layer must not forward to the query engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("year {year} is outside the dataset range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("the dataset has no years to choose from")]
    NoYears,

    #[error("unknown team '{0}'")]
    UnknownTeam(String),

    #[error("unknown athlete '{0}'")]
    UnknownAthlete(String),
}
