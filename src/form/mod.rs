//! Inspection form
//!
//! `FormController` holds the user's facts, answers and inspector
//! details, keeps answers consistent with the active checklist, and
//! hands a finished form to a submitter.

mod controller;
mod errors;
mod inspector;
mod snapshot;

pub use controller::{FactChange, FormController, FormStatus};
pub use errors::{FormError, FormResult};
pub use inspector::{
    Affiliation, Branch, Headquarters, InspectorField, InspectorInfo, DATE_FORMAT,
};
pub use snapshot::FormSnapshot;
