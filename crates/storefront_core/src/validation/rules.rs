/// A single check applied to one field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Text must contain a non-whitespace character.
    Required,
    /// Text length in characters.
    MaxLen(usize),
    /// Non-empty text must look like an email address.
    Email,
    /// Non-empty text must be a `YYYY-MM-DD` calendar date.
    Date,
    /// Inclusive numeric lower bound.
    Min(f64),
    /// Inclusive numeric upper bound.
    Max(f64),
    /// Identifier must be greater than zero.
    Positive,
}

/// Borrowed view of a DTO field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

/// Field name, current value and the constraints declared for it.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule<'a> {
    pub field: &'static str,
    pub value: FieldValue<'a>,
    pub constraints: &'static [Constraint],
}

impl<'a> FieldRule<'a> {
    pub fn text(field: &'static str, value: &'a str, constraints: &'static [Constraint]) -> Self {
        Self {
            field,
            value: FieldValue::Text(value),
            constraints,
        }
    }

    pub fn number(field: &'static str, value: f64, constraints: &'static [Constraint]) -> Self {
        Self {
            field,
            value: FieldValue::Number(value),
            constraints,
        }
    }
}

impl FieldRule<'_> {
    /// The field's own `MaxLen`, if it declares one.
    pub fn declared_max_len(&self) -> Option<usize> {
        self.constraints.iter().find_map(|constraint| match constraint {
            Constraint::MaxLen(max) => Some(*max),
            _ => None,
        })
    }
}
