//! API Handler
//!
//! Parses a request, resolves the session table through the injected data
//! source and dispatches to the query engine or an advisor view.
//!
//! Strict request handling flow:
//! 1. Parse and validate (rejections never touch the table)
//! 2. Fetch the shared table
//! 3. Build the view (constraints)
//! 4. Execute
//! 5. Log and count

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::advisor::{
    best_opportunities, compare_cities, find_opportunities, overview, recommend, RoiAssumptions,
};
use crate::dataset::{DataSource, Table};
use crate::executor::QueryEngine;
use crate::observability::{log_event_with_fields, Event, SessionMetrics};

use super::errors::{ApiError, ApiResult};
use super::request::{ExportRequest, Request};
use super::response::Response;

/// Tunables the handler passes to the advisor views
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlerSettings {
    pub roi: RoiAssumptions,
    pub overview_top_n: usize,
    pub finder_shortlist: usize,
    pub recommend_top_n: usize,
    pub best_opportunities_n: usize,
}

impl Default for HandlerSettings {
    fn default() -> Self {
        Self {
            roi: RoiAssumptions::default(),
            overview_top_n: 10,
            finder_shortlist: 5,
            recommend_top_n: 3,
            best_opportunities_n: 10,
        }
    }
}

/// Result data plus the row count used for empty-result accounting
struct Outcome {
    data: Value,
    rows: usize,
}

impl Outcome {
    /// A listing of rows under `key`, plus `count`, `empty` and any `extra` fields
    fn listing<T: Serialize>(key: &str, payload: &T, rows: usize, extra: Value) -> ApiResult<Self> {
        let mut map = Map::new();
        map.insert(key.to_string(), to_value(payload)?);
        map.insert("count".to_string(), json!(rows));
        map.insert("empty".to_string(), Value::Bool(rows == 0));
        if let Value::Object(extra) = extra {
            map.extend(extra);
        }
        Ok(Self {
            data: Value::Object(map),
            rows,
        })
    }

    fn single<T: Serialize>(payload: &T) -> ApiResult<Self> {
        Ok(Self {
            data: to_value(payload)?,
            rows: 1,
        })
    }
}

fn to_value<T: Serialize>(payload: &T) -> ApiResult<Value> {
    serde_json::to_value(payload).map_err(ApiError::serialization)
}

/// API handler over an injected data source
pub struct ApiHandler<S: DataSource> {
    source: S,
    settings: HandlerSettings,
    metrics: SessionMetrics,
}

impl<S: DataSource> ApiHandler<S> {
    pub fn new(source: S, settings: HandlerSettings) -> Self {
        Self {
            source,
            settings,
            metrics: SessionMetrics::new(),
        }
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Handle a raw JSON request string
    pub fn handle(&self, json_request: &str) -> Response {
        match self.handle_value(json_request) {
            Ok(data) => Response::success(data),
            Err(e) => Response::error(&e),
        }
    }

    /// Handle a request, returning the `data` payload
    pub fn handle_value(&self, json_request: &str) -> ApiResult<Value> {
        let request = self.parse(json_request)?;
        let op = request.op_name();

        let table = self.source.table()?;
        let outcome = self.dispatch(&table, request).map_err(|err| {
            if err.is_rejection() {
                self.reject(&err);
            }
            err
        })?;
        self.record(op, outcome.rows);
        Ok(outcome.data)
    }

    /// Handle an `export` request, returning raw CSV
    pub fn handle_export(&self, json_request: &str) -> ApiResult<String> {
        let request = match self.parse(json_request)? {
            Request::Export(r) => r,
            other => {
                let err = ApiError::invalid_request(format!(
                    "export expects op 'export', got '{}'",
                    other.op_name()
                ));
                self.reject(&err);
                return Err(err);
            }
        };

        let table = self.source.table()?;
        let (csv, rows) = Self::export(&table, &request)?;
        self.record("export", rows);
        Ok(csv)
    }

    fn parse(&self, json_request: &str) -> ApiResult<Request> {
        Request::parse(json_request).map_err(|err| {
            self.reject(&err);
            err
        })
    }

    fn reject(&self, err: &ApiError) {
        self.metrics.increment_queries_rejected();
        log_event_with_fields(
            Event::QueryRejected,
            &[("code", err.code()), ("reason", err.message())],
        );
    }

    fn record(&self, op: &str, rows: usize) {
        let count = rows.to_string();
        self.metrics.record_executed(rows);
        log_event_with_fields(Event::QueryExecuted, &[("op", op), ("rows", count.as_str())]);
        if rows == 0 {
            self.metrics.increment_empty_results();
            log_event_with_fields(Event::EmptyResult, &[("op", op)]);
        }
    }

    /// CSV of the explorer page, plus its row count
    fn export(table: &Table, request: &ExportRequest) -> ApiResult<(String, usize)> {
        let view = QueryEngine::filter(table, &request.constraints);
        let page = request.view.apply(&view);
        let csv = request.view.export_page(&page)?;
        Ok((csv, page.rows.len()))
    }

    fn dispatch(&self, table: &Table, request: Request) -> ApiResult<Outcome> {
        let settings = &self.settings;

        match request {
            Request::Filter(r) => {
                let rows = QueryEngine::filter(table, &r.constraints);
                Outcome::listing("rows", &rows, rows.len(), Value::Null)
            }
            Request::Rank(r) => {
                let result = QueryEngine::execute(table, &r.selection);
                Outcome::listing(
                    "rows",
                    &result.rows,
                    result.returned_count,
                    json!({
                        "matched": result.matched_count,
                        "limit_applied": result.limit_applied,
                    }),
                )
            }
            Request::Group(r) => {
                let view = QueryEngine::filter(table, &r.constraints);
                let grouped = QueryEngine::group_aggregate(&view, r.group_by, &r.metrics, r.order_by)?;
                Outcome::listing("groups", &grouped, grouped.len(), Value::Null)
            }
            Request::Summary(r) => {
                let view = QueryEngine::filter(table, &r.constraints);
                let summary = r.view.summary(&view);
                Ok(Outcome {
                    rows: summary.row_count,
                    data: to_value(&summary)?,
                })
            }
            Request::Roi(r) => {
                let row = table
                    .iter()
                    .find(|row| row.area_id == r.area_id)
                    .ok_or_else(|| ApiError::unknown_area(&r.area_id))?;
                let estimate = QueryEngine::estimate_roi(row, r.investment_budget_lakhs, &settings.roi);
                let mut outcome = Outcome::single(&estimate)?;
                if let Some(map) = outcome.data.as_object_mut() {
                    map.insert("area_id".to_string(), Value::String(r.area_id));
                }
                Ok(outcome)
            }
            Request::Overview(r) => {
                let view = QueryEngine::filter(table, &r.constraints);
                let kpis = overview(table, &view, settings.overview_top_n)?;
                Ok(Outcome {
                    rows: kpis.total_locations,
                    data: to_value(&kpis)?,
                })
            }
            Request::Find(criteria) => {
                let result = find_opportunities(table, &criteria, settings.finder_shortlist);
                Outcome::listing(
                    "shortlist",
                    &result.shortlist,
                    result.match_count,
                    json!({ "match_count": result.match_count }),
                )
            }
            Request::Recommend(req) => {
                let result = recommend(table, &req, &settings.roi, settings.recommend_top_n);
                Outcome::listing(
                    "recommendations",
                    &result.recommendations,
                    result.recommendations.len(),
                    json!({
                        "business_type": result.business_type,
                        "match_count": result.match_count,
                    }),
                )
            }
            Request::RiskReturn(r) => {
                let view = QueryEngine::filter(table, &r.constraints);
                let best = best_opportunities(&view, settings.best_opportunities_n);
                Outcome::listing(
                    "rows",
                    &best.rows,
                    best.rows.len(),
                    json!({
                        "median_risk": best.median_risk,
                        "median_return": best.median_return,
                        "match_count": best.match_count,
                    }),
                )
            }
            Request::Cities(r) => {
                let view = QueryEngine::filter(table, &r.constraints);
                let grouped = compare_cities(&view)?;
                Outcome::listing("groups", &grouped, grouped.len(), Value::Null)
            }
            Request::Export(r) => {
                let (csv, rows) = Self::export(table, &r)?;
                Ok(Outcome {
                    data: json!({ "csv": csv, "count": rows, "empty": rows == 0 }),
                    rows,
                })
            }
        }
    }
}
