pub mod calculations;
pub mod models;
pub mod state;
pub mod validation;
pub mod views;

pub use calculations::{ScheduleError, build_schedule};
pub use models::*;
pub use state::ViewState;
pub use validation::{FieldStatus, ValidatedInputs, validate_value};
