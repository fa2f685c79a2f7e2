//! Query engine subsystem
//!
//! Consumes typed selections and produces deterministic results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter rows strictly according to predicates (AND)
//! 2. Apply sort (if specified), stable
//! 3. Apply limit
//! 4. Return ordered results
//!
//! # Invariants
//!
//! - Results are a subsequence of the input before sorting
//! - Filtering is idempotent
//! - The input table is never mutated

mod executor;
mod filters;
mod result;
mod sorter;

pub use executor::QueryEngine;
pub use filters::PredicateFilter;
pub use result::ExecutionResult;
pub use sorter::ResultSorter;
