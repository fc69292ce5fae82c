//! Data models for the registration form.
//!
//! The record serializes to exactly the JSON body the registration endpoint expects.

mod registration;
mod status;

pub use registration::*;
pub use status::*;
