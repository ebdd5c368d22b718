// Validation Module - field-level validation for user-entered forms
use std::fmt;

mod validators;

pub use validators::{EmailValidator, FieldValidator, StringValidator};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error holding at most one message per field
///
/// Field order is the order in which errors were first recorded, so forms
/// can focus the first invalid input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new, empty validation error
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Record a message for a field, replacing any earlier message for it
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.errors.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.message = message,
            None => self.errors.push(FieldError::new(field, message)),
        }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Message recorded for a field
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    /// Whether a field has an error
    pub fn has_field(&self, field: &str) -> bool {
        self.message_for(field).is_some()
    }

    /// Names of all fields with errors
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    /// Merge another validation error into this one
    pub fn merge(&mut self, other: ValidationError) {
        for error in other.errors {
            self.add_field_error(error.field, error.message);
        }
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "Validation error with no specific field errors")?;
        } else if self.errors.len() == 1 {
            write!(f, "Validation failed: {}", self.errors[0].message)?;
        } else {
            write!(f, "Validation failed with {} errors: ", self.errors.len())?;
            for (i, error) in self.errors.iter().enumerate() {
                if i > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Collects field errors for one form pass
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error, replacing any earlier one for the same field
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add_field_error(field, message);
    }

    /// Validate a field with a specific validator
    ///
    /// Returns whether the value passed, so callers can chain dependent
    /// checks.
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V) -> bool
    where
        T: ?Sized,
        V: FieldValidator<T> + ?Sized,
    {
        match validator.validate(value) {
            Ok(()) => true,
            Err(msg) => {
                self.add_error(field, msg);
                false
            }
        }
    }

    /// Require a value that is not blank after trimming
    pub fn require(&mut self, field: &str, value: &str, message: impl Into<String>) -> bool {
        if value.trim().is_empty() {
            self.add_error(field, message);
            false
        } else {
            true
        }
    }

    /// Require a boolean to be set
    pub fn require_true(&mut self, field: &str, value: bool, message: impl Into<String>) -> bool {
        if !value {
            self.add_error(field, message);
        }
        value
    }

    /// Check if validation has errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Finish validation and return the collected error set
    pub fn into_errors(self) -> ValidationError {
        self.errors
    }

    /// Finish validation and return result
    pub fn finish(self) -> ValidationResult<()> {
        self.errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_message_replaces_earlier_one_for_same_field() {
        let mut err = ValidationError::new();
        err.add_field_error("confirmPassword", "Confirm password is required");
        err.add_field_error("confirmPassword", "Passwords do not match");

        assert_eq!(err.error_count(), 1);
        assert_eq!(err.message_for("confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn display_lists_every_field() {
        let mut err = ValidationError::field("email", "Email is required");
        err.add_field_error("password", "Password is required");

        let rendered = err.to_string();
        assert!(rendered.contains("2 errors"));
        assert!(rendered.contains("email: Email is required"));
        assert!(rendered.contains("password: Password is required"));
    }

    #[test]
    fn validator_require_treats_whitespace_as_blank() {
        let mut validator = Validator::new();
        assert!(!validator.require("city", "   ", "City is required"));
        assert!(validator.require("country", "Germany", "Country is required"));

        let err = validator.finish().unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["city"]);
    }

    #[test]
    fn empty_validator_finishes_ok() {
        let mut validator = Validator::new();
        validator.require_true("agreedToTerms", true, "You must agree");
        assert!(!validator.has_errors());
        assert!(validator.finish().is_ok());
    }

    #[test]
    fn merge_keeps_one_entry_per_field() {
        let mut left = ValidationError::field("email", "Email is required");
        let mut right = ValidationError::field("email", "Email is invalid");
        right.add_field_error("phone", "Phone is required");
        left.merge(right);

        assert_eq!(left.error_count(), 2);
        assert_eq!(left.message_for("email"), Some("Email is invalid"));
    }
}
