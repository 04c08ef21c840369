//! Field validation before a row is saved.
//!
//! Columns opt into validation by naming a validator in their `validator`
//! marker. The name is resolved through the [`HandlerRegistry`] when the row
//! is saved; an unregistered name means the column is not validated.
//!
//! # Validation States
//!
//! A validator classifies a widget value as one of:
//!
//! - [`ValidationState::Invalid`]: The value is clearly wrong
//! - [`ValidationState::Intermediate`]: The value is incomplete (e.g. empty or
//!   a lone sign) but could become valid with more typing
//! - [`ValidationState::Acceptable`]: The value is valid as a final result
//!
//! Only `Acceptable` lets a save proceed.
//!
//! # Built-in Validators
//!
//! - [`IntValidator`]: Integer within a range
//! - [`DoubleValidator`]: Decimal within a range, with limited decimal places
//! - [`RegexValidator`]: Whole value matches a regular expression
//! - [`RequiredValidator`]: Value is not blank
//! - [`FnValidator`]: Any boolean predicate
//!
//! # Example
//!
//! ```
//! use inline_edit::validator::{IntValidator, ValidationState, Validator};
//!
//! let validator = IntValidator::new(0, 100);
//! assert_eq!(validator.validate("42"), ValidationState::Acceptable);
//! assert_eq!(validator.validate("150"), ValidationState::Invalid);
//! assert_eq!(validator.validate(""), ValidationState::Intermediate);
//! ```

use std::fmt;
use std::sync::Arc;

use inline_edit_core::{Document, DocumentResult, ElementId};

use crate::model::RowModel;
use crate::registry::HandlerRegistry;

/// The result of validating a widget value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationState {
    /// The value is clearly invalid.
    Invalid,
    /// The value is incomplete but could become valid with more input.
    Intermediate,
    /// The value is acceptable as a final result.
    #[default]
    Acceptable,
}

impl ValidationState {
    /// Check if the value may be saved.
    pub fn is_acceptable(self) -> bool {
        self == ValidationState::Acceptable
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationState::Invalid => write!(f, "Invalid"),
            ValidationState::Intermediate => write!(f, "Intermediate"),
            ValidationState::Acceptable => write!(f, "Acceptable"),
        }
    }
}

/// Trait for field validators.
///
/// # Thread Safety
///
/// Validators must be `Send + Sync` so a registry can be shared with
/// transports running on other threads.
pub trait Validator: Send + Sync {
    /// Validate the live value of a column's widget.
    fn validate(&self, input: &str) -> ValidationState;

    /// Validate with the widget itself at hand.
    ///
    /// This is what a save runs. The default reads the widget's value and
    /// calls [`validate`](Self::validate); override it to consult the
    /// widget's attributes (its name, type, or markers the host set on it).
    fn validate_widget(&self, doc: &dyn Document, widget: ElementId) -> DocumentResult<ValidationState> {
        let value = doc.value(widget)?.unwrap_or_default();
        Ok(self.validate(&value))
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }

    fn validate_widget(&self, doc: &dyn Document, widget: ElementId) -> DocumentResult<ValidationState> {
        (**self).validate_widget(doc, widget)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, input: &str) -> ValidationState {
        (**self).validate(input)
    }

    fn validate_widget(&self, doc: &dyn Document, widget: ElementId) -> DocumentResult<ValidationState> {
        (**self).validate_widget(doc, widget)
    }
}

/// Validator for integer input within `[minimum, maximum]`.
#[derive(Debug, Clone)]
pub struct IntValidator {
    minimum: i64,
    maximum: i64,
}

impl IntValidator {
    /// Create a new integer validator. The bounds are inclusive and may be
    /// given in either order.
    pub fn new(minimum: i64, maximum: i64) -> Self {
        Self {
            minimum: minimum.min(maximum),
            maximum: minimum.max(maximum),
        }
    }

    /// Create a validator for non-negative integers.
    pub fn non_negative() -> Self {
        Self::new(0, i64::MAX)
    }

    /// Get the minimum value.
    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> i64 {
        self.maximum
    }
}

impl Validator for IntValidator {
    fn validate(&self, input: &str) -> ValidationState {
        let trimmed = input.trim();

        if trimmed.is_empty() || trimmed == "+" {
            return ValidationState::Intermediate;
        }
        if trimmed == "-" {
            return if self.minimum < 0 {
                ValidationState::Intermediate
            } else {
                ValidationState::Invalid
            };
        }

        let is_valid_format = trimmed
            .chars()
            .enumerate()
            .all(|(i, c)| c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')));
        if !is_valid_format {
            return ValidationState::Invalid;
        }

        match trimmed.parse::<i64>() {
            Ok(value) if (self.minimum..=self.maximum).contains(&value) => {
                ValidationState::Acceptable
            }
            _ => ValidationState::Invalid,
        }
    }
}

/// Validator for decimal input within `[minimum, maximum]`.
#[derive(Debug, Clone)]
pub struct DoubleValidator {
    minimum: f64,
    maximum: f64,
    decimals: u32,
}

impl DoubleValidator {
    /// Create a new decimal validator with the given range and maximum
    /// number of decimal places.
    pub fn new(minimum: f64, maximum: f64, decimals: u32) -> Self {
        Self {
            minimum: minimum.min(maximum),
            maximum: minimum.max(maximum),
            decimals,
        }
    }

    /// Get the minimum value.
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Get the maximum value.
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Get the maximum decimal places.
    pub fn decimals(&self) -> u32 {
        self.decimals
    }
}

impl Validator for DoubleValidator {
    fn validate(&self, input: &str) -> ValidationState {
        let trimmed = input.trim();

        if matches!(trimmed, "" | "+" | "." | "+." | "-.") {
            return ValidationState::Intermediate;
        }
        if trimmed == "-" {
            return if self.minimum < 0.0 {
                ValidationState::Intermediate
            } else {
                ValidationState::Invalid
            };
        }

        if let Some((_, fraction)) = trimmed.split_once('.')
            && fraction.chars().filter(|c| c.is_ascii_digit()).count() > self.decimals as usize
        {
            return ValidationState::Invalid;
        }

        let mut has_dot = false;
        let is_valid_format = trimmed.chars().enumerate().all(|(i, c)| match c {
            '0'..='9' => true,
            '.' if !has_dot => {
                has_dot = true;
                true
            }
            '-' | '+' => i == 0,
            _ => false,
        });
        if !is_valid_format {
            return ValidationState::Invalid;
        }
        if trimmed.ends_with('.') {
            return ValidationState::Intermediate;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= self.minimum && value <= self.maximum => {
                ValidationState::Acceptable
            }
            _ => ValidationState::Invalid,
        }
    }
}

/// Validator that requires the whole value to match a regular expression.
///
/// An empty value is intermediate unless the pattern accepts it.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: regex::Regex,
    source: String,
}

impl RegexValidator {
    /// Create a new regex validator.
    ///
    /// The pattern is anchored at both ends, so `\d+` accepts `"12"` but not
    /// `"12a"`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: regex::Regex::new(&format!("^(?:{pattern})$"))?,
            source: pattern.to_string(),
        })
    }

    /// Get the pattern string as given.
    pub fn pattern(&self) -> &str {
        &self.source
    }
}

impl Validator for RegexValidator {
    fn validate(&self, input: &str) -> ValidationState {
        if self.pattern.is_match(input) {
            ValidationState::Acceptable
        } else if input.is_empty() {
            ValidationState::Intermediate
        } else {
            ValidationState::Invalid
        }
    }
}

/// Validator that rejects blank values.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl Validator for RequiredValidator {
    fn validate(&self, input: &str) -> ValidationState {
        if input.trim().is_empty() {
            ValidationState::Intermediate
        } else {
            ValidationState::Acceptable
        }
    }
}

/// Validator backed by a boolean predicate.
///
/// `true` is acceptable and `false` is invalid.
///
/// # Example
///
/// ```
/// use inline_edit::validator::{FnValidator, ValidationState, Validator};
///
/// let even = FnValidator::new(|v| v.parse::<u32>().is_ok_and(|n| n % 2 == 0));
/// assert_eq!(even.validate("4"), ValidationState::Acceptable);
/// assert_eq!(even.validate("5"), ValidationState::Invalid);
/// ```
pub struct FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    predicate: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    /// Create a validator from a predicate.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, input: &str) -> ValidationState {
        if (self.predicate)(input) {
            ValidationState::Acceptable
        } else {
            ValidationState::Invalid
        }
    }
}

impl<F> fmt::Debug for FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

/// The first column of a row that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Position of the failing column among the row's editable columns.
    pub column: usize,
    /// The column's payload name, if it has one.
    pub name: Option<String>,
    /// The validator that rejected the value.
    pub validator: String,
    /// What the validator returned.
    pub state: ValidationState,
}

/// Validate every column of an editing row in order.
///
/// Columns without a validator marker, with an unregistered validator name, or
/// without a live widget are skipped. Stops at the first column whose value is
/// not acceptable.
pub fn validate_row(
    doc: &dyn Document,
    row: &RowModel,
    registry: &HandlerRegistry,
) -> DocumentResult<Option<ValidationFailure>> {
    for (index, column) in row.columns().iter().enumerate() {
        let Some(name) = column.validator() else {
            continue;
        };
        let Some(validator) = registry.validator(name) else {
            tracing::debug!(
                target: "inline_edit::validator",
                validator = name,
                "validator not registered, column not validated"
            );
            continue;
        };
        let Some(widget) = column.widget() else {
            continue;
        };

        let state = validator.validate_widget(doc, widget)?;
        tracing::trace!(target: "inline_edit::validator", validator = name, %state, "validated column");

        if !state.is_acceptable() {
            return Ok(Some(ValidationFailure {
                column: index,
                name: column.name().map(str::to_string),
                validator: name.to_string(),
                state,
            }));
        }
    }
    Ok(None)
}

static_assertions::assert_impl_all!(IntValidator: Send, Sync);
static_assertions::assert_impl_all!(RegexValidator: Send, Sync);
