use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid parameter: {field} ({reason})")]
    InvalidParameter { field: String, reason: String },
    #[error("Row index {index} out of range for schedule of {len} rows")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },
    #[error("Numeric overflow in {context}")]
    NumericOverflow { context: String },
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn overflow(context: &str) -> Self {
        Self::NumericOverflow {
            context: context.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
