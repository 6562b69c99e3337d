//! Declarative request validation.
//!
//! # Responsibility
//! - Let each request DTO declare its field constraints as plain data.
//! - Evaluate those constraints before any persistence side effect.
//!
//! # Invariants
//! - Every violated rule is reported, in declaration order.
//! - Format constraints (`Email`, `Date`) accept empty text; pair them with
//!   `Required` when the field is mandatory.

use crate::model::parse_wire_id;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod rules;

pub use rules::{Constraint, FieldRule, FieldValue};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex")
});
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid date regex"));

pub const DEFAULT_MAX_TEXT_LEN: usize = 255;
const INVALID_ID_MESSAGE: &str = "must be a positive identifier";

/// Implemented by every request DTO that must be validated.
pub trait Validate {
    /// Returns the rules to check, in reporting order.
    fn field_rules(&self) -> Vec<FieldRule<'_>>;
}

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Request rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Rejection of a wire identifier that names no storable row.
    pub fn invalid_id(field: &'static str) -> Self {
        Self {
            violations: vec![FieldViolation {
                field,
                message: INVALID_ID_MESSAGE.to_string(),
            }],
        }
    }

    /// Returns whether `field` has at least one violation.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed:")?;
        for (index, violation) in self.violations.iter().enumerate() {
            let separator = if index == 0 { " " } else { "; " };
            write!(f, "{separator}{} {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Shared validator injected into every service.
///
/// `max_text_len` caps every text field that declares no `MaxLen` of its
/// own; a declared `MaxLen` always wins over the cap.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    max_text_len: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_LEN)
    }
}

impl Validator {
    pub fn new(max_text_len: usize) -> Self {
        Self { max_text_len }
    }

    pub fn max_text_len(&self) -> usize {
        self.max_text_len
    }

    /// Checks every declared rule of `request`.
    pub fn validate<T: Validate>(&self, request: &T) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        for rule in request.field_rules() {
            if let FieldValue::Text(text) = rule.value {
                let capped = rule.declared_max_len().is_none();
                if capped && text.chars().count() > self.max_text_len {
                    violations.push(FieldViolation {
                        field: rule.field,
                        message: format!("must be at most {} characters", self.max_text_len),
                    });
                    continue;
                }
            }

            for constraint in rule.constraints {
                if let Some(message) = check(constraint, &rule.value) {
                    violations.push(FieldViolation {
                        field: rule.field,
                        message,
                    });
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}

fn check(constraint: &Constraint, value: &FieldValue<'_>) -> Option<String> {
    match (constraint, value) {
        (Constraint::Required, FieldValue::Text(text)) => {
            text.trim().is_empty().then(|| "is required".to_string())
        }
        (Constraint::MaxLen(max), FieldValue::Text(text)) => (text.chars().count() > *max)
            .then(|| format!("must be at most {max} characters")),
        (Constraint::Email, FieldValue::Text(text)) => (!text.is_empty()
            && !EMAIL_RE.is_match(text))
        .then(|| "must be a valid email address".to_string()),
        (Constraint::Date, FieldValue::Text(text)) => (!text.is_empty() && !is_calendar_date(text))
            .then(|| "must be a date formatted as YYYY-MM-DD".to_string()),
        (Constraint::Min(min), FieldValue::Number(number)) => {
            (number.is_nan() || number < min).then(|| format!("must be at least {min}"))
        }
        (Constraint::Max(max), FieldValue::Number(number)) => {
            (number.is_nan() || number > max).then(|| format!("must be at most {max}"))
        }
        (Constraint::Positive, FieldValue::Number(number)) => {
            (number.is_nan() || *number <= 0.0).then(|| "must be a positive number".to_string())
        }
        (Constraint::Positive, FieldValue::Text(text)) => {
            parse_wire_id(text).is_none().then(|| INVALID_ID_MESSAGE.to_string())
        }
        // A rule that does not apply to this value kind is a declaration
        // mistake, not a user error.
        _ => None,
    }
}

fn is_calendar_date(text: &str) -> bool {
    let Some(captures) = DATE_RE.captures(text) else {
        return false;
    };
    let parse = |index: usize| captures[index].parse::<u32>().unwrap_or(0);
    let (year, month, day) = (parse(1), parse(2), parse(3));

    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        _ => return false,
    };
    (1..=days_in_month).contains(&day)
}
