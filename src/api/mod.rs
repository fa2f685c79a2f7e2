//! API Layer
//!
//! JSON request/response boundary over the query engine and advisor views.
//!
//! # Design Principles
//!
//! - Field names are resolved once, at parse time
//! - Error codes from lower subsystems pass through unchanged
//! - An empty result is a success with `"empty": true`
//! - One data source per handler, loaded at most once
//!
//! # Supported Operations
//!
//! filter, rank, group, summary, roi, overview, find, recommend,
//! risk_return, cities, export

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult, Severity};
pub use handler::{ApiHandler, HandlerSettings};
pub use request::{
    ExportRequest, FilterRequest, GroupRequest, RankRequest, Request, RoiRequest, SummaryRequest,
    ViewRequest,
};
pub use response::Response;
