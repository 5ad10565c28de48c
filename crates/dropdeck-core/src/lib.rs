pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod selection;
pub mod validation;

pub use config::AppConfig;
pub use error::DropdeckError;
pub use input::InputState;
pub use result::DropdeckResult;
pub use selection::SelectionState;
pub use validation::{validate, FieldValue, ValidationOutcome, ValidationRule};
