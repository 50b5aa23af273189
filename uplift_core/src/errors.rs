//! # Error Types
//!
//! Structured error types for uplift_core. Validation failures carry every
//! offending field at once so a caller can surface the whole list to the
//! user in one pass instead of re-prompting field by field.
//!
//! ## Example
//!
//! ```rust
//! use uplift_core::errors::{CalcError, CalcResult, FieldIssue, ValidationError};
//!
//! fn check_speed(wind_speed_mph: f64) -> CalcResult<()> {
//!     if wind_speed_mph <= 0.0 {
//!         return Err(ValidationError::single(FieldIssue::invalid(
//!             "wind_speed_mph",
//!             wind_speed_mph.to_string(),
//!             "Wind speed must be positive",
//!         ))
//!         .into());
//!     }
//!     Ok(())
//! }
//!
//! let err = check_speed(-5.0).unwrap_err();
//! assert_eq!(err.error_code(), "VALIDATION_ERROR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for uplift_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// One field that failed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldIssue {
    /// Field name as it appears in the input record (e.g. "roof_zone")
    pub field: String,
    /// Offending value as text, `None` when the field was left empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Human-readable reason
    pub reason: String,
}

impl FieldIssue {
    /// A field that was present but could not be accepted
    pub fn invalid(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FieldIssue {
            field: field.into(),
            value: Some(value.into()),
            reason: reason.into(),
        }
    }

    /// A required field that was left empty
    pub fn missing(field: impl Into<String>) -> Self {
        FieldIssue {
            field: field.into(),
            value: None,
            reason: "Required field is missing".to_string(),
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "'{}': {} - {}", self.field, value, self.reason),
            None => write!(f, "'{}': {}", self.field, self.reason),
        }
    }
}

/// One or more input fields are missing, non-numeric, out of range, or do
/// not map to a recognized enum member.
///
/// No calculation is attempted when this is returned.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[error("Invalid input: {}", render_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Wrap a single issue
    pub fn single(issue: FieldIssue) -> Self {
        ValidationError { issues: vec![issue] }
    }

    /// Names of every failing field, in the order they were checked
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.field.as_str()).collect()
    }

    /// Whether `field` is among the failing fields
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

/// Collects field issues while a record is being checked.
///
/// Validation keeps going after the first failure so the final error lists
/// every bad field.
#[derive(Debug, Default)]
pub(crate) struct IssueCollector {
    issues: Vec<FieldIssue>,
}

impl IssueCollector {
    pub(crate) fn push(&mut self, issue: FieldIssue) {
        self.issues.push(issue);
    }

    /// Record the error (if any) and pass the value through as an Option
    pub(crate) fn take<T>(&mut self, result: Result<T, FieldIssue>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(issue) => {
                self.issues.push(issue);
                None
            }
        }
    }

    /// Like `take`, for checks that already produce a `ValidationError`
    pub(crate) fn absorb<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.issues.extend(err.issues);
                None
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues: self.issues })
        }
    }
}

/// Structured error type for uplift calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Input record failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError { reason: reason.into() }
    }

    /// Validation details, if this is a validation failure
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CalcError::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// Validation errors are fixed by re-prompting the user
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::Validation(_))
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Validation(_) => "VALIDATION_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
