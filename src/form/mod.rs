//! Registration form: normalization, validation and the editable model.

mod model;
mod normalize;
mod validate;

pub use model::*;
pub use validate::*;

/// Behaviour switches for the two form variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOptions {
    /// Run the format rules on submit and show inline errors
    pub inline_validation: bool,
    /// Block submission until the participant agrees to data processing
    pub require_consent: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            inline_validation: true,
            require_consent: true,
        }
    }
}
