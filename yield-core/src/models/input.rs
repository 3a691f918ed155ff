use serde::{Deserialize, Serialize};

use crate::validation::{self, FieldStatus, ValidatedInputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFieldId {
    Price,
    Revenue,
    Periods,
}

impl InputFieldId {
    pub const ALL: [InputFieldId; 3] = [Self::Price, Self::Revenue, Self::Periods];

    /// Fixed display label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Revenue => "revenue (per unit)",
            Self::Periods => "number of periods",
        }
    }
}

/// One form field: the raw value as last entered, whether the user has
/// interacted with it, and its current validation status.
///
/// Fields are created empty and re-validated on every edit and blur. The
/// touched flag only gates error display; validation itself runs
/// continuously.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    id: InputFieldId,
    value: Option<f64>,
    touched: bool,
    status: FieldStatus,
}

impl InputField {
    fn new(id: InputFieldId) -> Self {
        Self {
            id,
            value: None,
            touched: false,
            status: validation::validate_value(id, None),
        }
    }

    pub fn id(&self) -> InputFieldId {
        self.id
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    /// Error message to display next to the field, or `None`.
    ///
    /// An error is only surfaced once the user has interacted with the
    /// field at least once, even though the field is validated from the
    /// moment the form exists.
    pub fn visible_error(&self) -> Option<&'static str> {
        if self.touched { self.status.message() } else { None }
    }

    fn edit(&mut self, value: Option<f64>) {
        self.value = value;
        self.touched = true;
        self.status = validation::validate_value(self.id, value);
    }

    fn blur(&mut self) {
        self.touched = true;
        self.status = validation::validate_value(self.id, self.value);
    }
}

/// The three-field input form.
#[derive(Debug, Clone, PartialEq)]
pub struct InputModel {
    price: InputField,
    revenue: InputField,
    periods: InputField,
}

impl Default for InputModel {
    fn default() -> Self {
        Self::new()
    }
}

impl InputModel {
    /// Creates the form with all fields empty and untouched.
    pub fn new() -> Self {
        Self {
            price: InputField::new(InputFieldId::Price),
            revenue: InputField::new(InputFieldId::Revenue),
            periods: InputField::new(InputFieldId::Periods),
        }
    }

    pub fn field(&self, id: InputFieldId) -> &InputField {
        match id {
            InputFieldId::Price => &self.price,
            InputFieldId::Revenue => &self.revenue,
            InputFieldId::Periods => &self.periods,
        }
    }

    pub fn fields(&self) -> [&InputField; 3] {
        [&self.price, &self.revenue, &self.periods]
    }

    /// Records an edit to one field and re-validates it. `None` means the
    /// field was cleared.
    pub fn edit(&mut self, id: InputFieldId, value: Option<f64>) {
        self.field_mut(id).edit(value);
    }

    /// Records focus leaving a field and re-validates it.
    pub fn blur(&mut self, id: InputFieldId) {
        self.field_mut(id).blur();
    }

    /// `true` iff every field currently passes validation.
    pub fn is_submittable(&self) -> bool {
        self.fields().into_iter().all(InputField::is_valid)
    }

    /// The validated input triple, if every field passes validation.
    ///
    /// The returned value reflects the field values at the moment of the
    /// call; it is not stored anywhere.
    pub fn validated(&self) -> Option<ValidatedInputs> {
        if !self.is_submittable() {
            return None;
        }

        Some(ValidatedInputs {
            price: self.price.value?,
            revenue_per_unit: self.revenue.value?,
            periods: self.periods.value? as u32,
        })
    }

    fn field_mut(&mut self, id: InputFieldId) -> &mut InputField {
        match id {
            InputFieldId::Price => &mut self.price,
            InputFieldId::Revenue => &mut self.revenue,
            InputFieldId::Periods => &mut self.periods,
        }
    }
}
