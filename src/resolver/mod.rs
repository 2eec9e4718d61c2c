//! Checklist resolver
//!
//! Pure functions over (catalog, facts, answers):
//!
//! - `compute_active_items` / `compute_active_sub_items`: which items and
//!   sub-items apply under the current facts
//! - `reconcile_answers`: drop answers outside the active set
//! - `is_complete` / `find_incomplete` / `progress`: completion state
//! - `resolve`: the full pipeline the form controller runs after each
//!   fact change
//!
//! Nothing here performs I/O, logs, or panics on any fact combination.

mod active;
mod answers;
mod completion;
mod facts;
mod pipeline;

pub use active::{
    compute_active_items, compute_active_sub_items, item_is_active, sub_item_is_active,
    ActiveChecklist, ActiveItem,
};
pub use answers::{sub_item_key, AnswerKey, AnswerRecord, CheckOutcome};
pub use completion::{
    active_answer_count, find_incomplete, is_complete, item_is_complete, next_incomplete,
    progress, IncompleteCursor, Progress,
};
pub use facts::{Fact, FactSet};
pub use pipeline::{reconcile_answers, resolve, Resolution};
