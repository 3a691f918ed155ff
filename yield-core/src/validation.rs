//! Pure field-level validation rules.
//!
//! Each of the three input fields is validated independently; there are no
//! cross-field constraints. Validation never fails the program: the outcome
//! is data attached to the field, and submission is simply blocked until
//! every field reports [`FieldStatus::Valid`].

use serde::{Deserialize, Serialize};

use crate::models::InputFieldId;

/// Outcome of validating a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldStatus {
    Valid,
    /// Field has no value at validation time.
    Missing,
    /// Value is not a finite number strictly greater than zero.
    NotPositive,
    /// Value is not a whole number (period count only).
    NotInteger,
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Fixed message shown next to the field, or `None` when valid.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Missing => Some("Required"),
            Self::NotPositive => Some("Must be greater than 0"),
            Self::NotInteger => Some("Must be a whole number"),
        }
    }
}

/// Validates one field value against the rules for its field.
///
/// Rules:
/// - `price` and `revenue (per unit)`: present, finite, strictly greater
///   than zero.
/// - `number of periods`: present, finite, strictly greater than zero, and
///   a whole number.
///
/// Non-finite values classify as [`FieldStatus::NotPositive`], so nothing
/// the form accepts can later be refused by the derivation boundary.
/// Presence is checked before positivity, and positivity before
/// integrality: `-5.5` reports `NotPositive`, `3.5` reports `NotInteger`.
pub fn validate_value(id: InputFieldId, value: Option<f64>) -> FieldStatus {
    let Some(value) = value else {
        return FieldStatus::Missing;
    };

    if !value.is_finite() || value <= 0.0 {
        return FieldStatus::NotPositive;
    }

    if id == InputFieldId::Periods && value.fract() != 0.0 {
        return FieldStatus::NotInteger;
    }

    FieldStatus::Valid
}

/// A validated input triple.
///
/// Exists only transiently as the output of a successful validation pass;
/// consumed immediately by the derivation engine and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidatedInputs {
    /// Starting price; finite and strictly positive.
    pub price: f64,
    /// Revenue earned per unit period; finite and strictly positive.
    pub revenue_per_unit: f64,
    /// Number of periods; at least 1.
    pub periods: u32,
}
