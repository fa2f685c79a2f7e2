//! Query model
//!
//! Typed constraint sets and sort specifications, plus resolution of field
//! names supplied by callers.
//!
//! # Design Principles
//!
//! - Constraints are an ordered conjunction (AND)
//! - Every categorical predicate carries an explicit empty-selection policy
//! - Field names are resolved once, at the boundary

mod constraint;
mod errors;
pub mod resolve;
mod selection;
mod sort;

pub use constraint::{ConstraintSet, EmptySelection, Predicate};
pub use errors::{QueryError, QueryResult};
pub use selection::Selection;
pub use sort::{SortDirection, SortSpec};
