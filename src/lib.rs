//! sitecheck - construction-site safety document inspection checklist
//!
//! A fixed catalog of checklist items is filtered by four project facts
//! (construction status, total cost bracket, and two special-construction
//! flags). The resolver computes the active items and sub-items, drops
//! answers that fall outside them, and tracks completion. Around that
//! core sit the form controller, local persistence, a plain-text report
//! and submitters that POST to an endpoint or append to an outbox.

pub mod catalog;
pub mod cli;
pub mod form;
pub mod observability;
pub mod report;
pub mod resolver;
pub mod store;
pub mod submit;
