//! hyperlocal - filtering, ranking and recommendations over locality-level
//! economic data
//!
//! The dataset is loaded once per process and never mutated. Every query
//! builds a fresh view from it.
//!
//! Layers, leaf first:
//! - `dataset`: row schema, CSV loading, data sources, export
//! - `query`: typed constraints, sort specs, field resolution
//! - `analytics`: aggregation, statistics, correlation
//! - `executor`: the query engine
//! - `advisor`: dashboard views built on the engine
//! - `api`: JSON request/response boundary
//! - `cli`: commands, config, session
//! - `observability`: structured logs, events, counters

pub mod advisor;
pub mod analytics;
pub mod api;
pub mod cli;
pub mod dataset;
pub mod executor;
pub mod observability;
pub mod query;
