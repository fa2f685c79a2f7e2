//! API request types
//!
//! JSON request parsing for all supported operations. Field names, sort
//! directions and category labels are resolved here; everything past this
//! module works with typed values.

use serde::Deserialize;
use serde_json::Value;

use crate::advisor::{ExplorerView, FinderCriteria, PanelFilter, Priority, RecommenderRequest};
use crate::analytics::Aggregate;
use crate::dataset::{AreaType, CategoricalField, Column, GrowthTrend, LocalityType};
use crate::query::{
    resolve, ConstraintSet, EmptySelection, Predicate, QueryError, Selection, SortDirection,
    SortSpec,
};

use super::errors::{ApiError, ApiResult};

/// Filter request
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRequest {
    pub constraints: ConstraintSet,
}

/// Rank request: filter, then sort and truncate
#[derive(Debug, Clone, PartialEq)]
pub struct RankRequest {
    pub selection: Selection,
}

/// Group-by request
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRequest {
    pub constraints: ConstraintSet,
    pub group_by: CategoricalField,
    pub metrics: Vec<Aggregate>,
    pub order_by: Option<usize>,
}

/// Summary request over the explorer's displayed columns
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    pub constraints: ConstraintSet,
    pub view: ExplorerView,
}

/// ROI request for one area
#[derive(Debug, Clone, PartialEq)]
pub struct RoiRequest {
    pub area_id: String,
    pub investment_budget_lakhs: f64,
}

/// Request over a filtered view with no further parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRequest {
    pub constraints: ConstraintSet,
}

/// Export of the explorer's displayed rows and columns
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub constraints: ConstraintSet,
    pub view: ExplorerView,
}

/// Unified request envelope
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Filter(FilterRequest),
    Rank(RankRequest),
    Group(GroupRequest),
    Summary(SummaryRequest),
    Roi(RoiRequest),
    Overview(ViewRequest),
    Find(FinderCriteria),
    Recommend(RecommenderRequest),
    RiskReturn(ViewRequest),
    Cities(ViewRequest),
    Export(ExportRequest),
}

impl Request {
    /// Operation name, as sent by the caller
    pub fn op_name(&self) -> &'static str {
        match self {
            Request::Filter(_) => "filter",
            Request::Rank(_) => "rank",
            Request::Group(_) => "group",
            Request::Summary(_) => "summary",
            Request::Roi(_) => "roi",
            Request::Overview(_) => "overview",
            Request::Find(_) => "find",
            Request::Recommend(_) => "recommend",
            Request::RiskReturn(_) => "risk_return",
            Request::Cities(_) => "cities",
            Request::Export(_) => "export",
        }
    }
}

/// Raw predicate object: exactly one of `gte`, `lte`, `in`, `name_contains`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPredicate {
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    gte: Option<f64>,
    #[serde(default)]
    lte: Option<f64>,
    #[serde(default, rename = "in")]
    one_of: Option<Vec<String>>,
    #[serde(default)]
    empty: Option<String>,
    #[serde(default)]
    name_contains: Option<String>,
}

impl RawPredicate {
    fn resolve(self) -> Result<Predicate, QueryError> {
        let ops = [
            self.gte.is_some(),
            self.lte.is_some(),
            self.one_of.is_some(),
            self.name_contains.is_some(),
        ];
        if ops.iter().filter(|set| **set).count() != 1 {
            return Err(QueryError::InvalidPredicate(
                "expected exactly one of gte, lte, in, name_contains".to_string(),
            ));
        }
        if self.empty.is_some() && self.one_of.is_none() {
            return Err(QueryError::InvalidPredicate(
                "'empty' only applies to 'in'".to_string(),
            ));
        }

        if let Some(text) = self.name_contains {
            if self.field.is_some() {
                return Err(QueryError::InvalidPredicate(
                    "name_contains takes no field".to_string(),
                ));
            }
            return Ok(Predicate::name_contains(text));
        }

        let name = self
            .field
            .ok_or_else(|| QueryError::InvalidPredicate("missing field".to_string()))?;

        if let Some(bound) = self.gte {
            return Ok(Predicate::at_least(resolve::numeric_field(&name)?, bound));
        }
        if let Some(bound) = self.lte {
            return Ok(Predicate::at_most(resolve::numeric_field(&name)?, bound));
        }

        let field = resolve::categorical_field(&name)?;
        let on_empty = match self.empty.as_deref() {
            None => EmptySelection::MatchAll,
            Some(policy) => EmptySelection::parse(policy)
                .ok_or_else(|| QueryError::UnknownEmptyPolicy(policy.to_string()))?,
        };
        let values = self
            .one_of
            .unwrap_or_default()
            .iter()
            .map(|v| resolve::category_value(field, v))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Predicate::one_of(field, values, on_empty))
    }
}

/// Raw global filter panel
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPanel {
    #[serde(default)]
    cities: Vec<String>,
    #[serde(default)]
    area_types: Vec<String>,
    #[serde(default)]
    health_range: Option<(f64, f64)>,
}

impl RawPanel {
    fn resolve(self) -> ApiResult<PanelFilter> {
        let defaults = PanelFilter::default();
        let health_range = self.health_range.unwrap_or(defaults.health_range);
        if health_range.0 > health_range.1 {
            return Err(ApiError::invalid_request(format!(
                "health_range lower bound {} exceeds upper bound {}",
                health_range.0, health_range.1
            )));
        }
        Ok(PanelFilter {
            cities: self.cities,
            area_types: parse_labels(CategoricalField::AreaType, &self.area_types, AreaType::parse)?,
            health_range,
        })
    }
}

/// Raw investment finder criteria; absent fields take the defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFinder {
    #[serde(default)]
    max_rent: Option<f64>,
    #[serde(default)]
    min_health_score: Option<f64>,
    #[serde(default)]
    growth: Option<Vec<String>>,
    #[serde(default)]
    min_footfall: Option<f64>,
    #[serde(default)]
    cities: Option<Vec<String>>,
    #[serde(default)]
    locality_types: Option<Vec<String>>,
    #[serde(default)]
    max_risk: Option<f64>,
}

impl RawFinder {
    fn resolve(self) -> ApiResult<FinderCriteria> {
        let defaults = FinderCriteria::default();
        Ok(FinderCriteria {
            max_rent: self.max_rent.unwrap_or(defaults.max_rent),
            min_health_score: self.min_health_score.unwrap_or(defaults.min_health_score),
            growth: match self.growth {
                Some(labels) => {
                    parse_labels(CategoricalField::BusinessGrowth, &labels, GrowthTrend::parse)?
                }
                None => defaults.growth,
            },
            min_footfall: self.min_footfall.unwrap_or(defaults.min_footfall),
            cities: self.cities.or(defaults.cities),
            locality_types: match self.locality_types {
                Some(labels) => {
                    parse_labels(CategoricalField::LocalityType, &labels, LocalityType::parse)?
                }
                None => defaults.locality_types,
            },
            max_risk: self.max_risk.unwrap_or(defaults.max_risk),
        })
    }
}

fn parse_labels<T>(
    field: CategoricalField,
    labels: &[String],
    parse: fn(&str) -> Option<T>,
) -> ApiResult<Vec<T>> {
    labels
        .iter()
        .map(|label| {
            parse(label).ok_or_else(|| {
                ApiError::from(QueryError::UnknownValue {
                    field: field.as_str(),
                    value: label.clone(),
                })
            })
        })
        .collect()
}

/// Raw request for parsing
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRequest {
    op: String,
    #[serde(default)]
    constraints: Vec<RawPredicate>,
    #[serde(default)]
    panel: Option<RawPanel>,
    #[serde(default)]
    sort: Option<String>,
    #[serde(default)]
    direction: Option<String>,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    group_by: Option<String>,
    #[serde(default)]
    metrics: Option<Vec<String>>,
    #[serde(default)]
    order_by: Option<usize>,
    #[serde(default)]
    columns: Option<Vec<String>>,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    area_id: Option<String>,
    #[serde(default)]
    investment_budget: Option<f64>,
    #[serde(default)]
    criteria: Option<RawFinder>,
    #[serde(default)]
    business_type: Option<String>,
    #[serde(default)]
    monthly_budget: Option<f64>,
    #[serde(default)]
    preferred_area: Option<String>,
    #[serde(default)]
    priority: Option<String>,
}

impl RawRequest {
    /// Panel constraints followed by the explicit predicates
    fn constraints(&mut self) -> ApiResult<ConstraintSet> {
        let mut set = match self.panel.take() {
            Some(panel) => panel.resolve()?.constraints(),
            None => ConstraintSet::new(),
        };
        for raw in std::mem::take(&mut self.constraints) {
            set.push(raw.resolve()?);
        }
        Ok(set)
    }

    fn sort(&self) -> ApiResult<Option<SortSpec>> {
        let field = match &self.sort {
            Some(name) => resolve::numeric_field(name)?,
            None if self.direction.is_some() => {
                return Err(ApiError::invalid_request("direction given without sort"))
            }
            None => return Ok(None),
        };
        let direction = match &self.direction {
            Some(d) => SortDirection::parse(d)
                .ok_or_else(|| QueryError::UnknownDirection(d.clone()))?,
            None => SortDirection::Desc,
        };
        Ok(Some(SortSpec { field, direction }))
    }

    fn selection(&mut self) -> ApiResult<Selection> {
        let mut selection = Selection::new(self.constraints()?);
        selection.sort = self.sort()?;
        selection.limit = self.limit;
        Ok(selection)
    }

    fn columns_or_default(&self) -> ApiResult<Vec<Column>> {
        match &self.columns {
            Some(names) => Ok(resolve::columns(names)?),
            None => Ok(Column::DEFAULT_DISPLAY.to_vec()),
        }
    }

    /// Explorer settings; the sort falls back to the explorer's default
    fn explorer(&self) -> ApiResult<ExplorerView> {
        let defaults = ExplorerView::default();
        Ok(ExplorerView {
            search: self.search.clone().unwrap_or(defaults.search),
            sort: self.sort()?.or(defaults.sort),
            limit: self.limit,
            columns: self.columns_or_default()?,
        })
    }

    fn budget(&self, name: &str, value: Option<f64>) -> ApiResult<f64> {
        let value = value.ok_or_else(|| ApiError::invalid_request(format!("Missing {}", name)))?;
        if !value.is_finite() || value < 0.0 {
            return Err(ApiError::invalid_request(format!(
                "{} must be a non-negative number",
                name
            )));
        }
        Ok(value)
    }

    fn recommender(&self) -> ApiResult<RecommenderRequest> {
        let defaults = RecommenderRequest::default();
        let preferred_area = match self.preferred_area.as_deref() {
            None => defaults.preferred_area,
            Some(label) if label.eq_ignore_ascii_case("any") => None,
            Some(label) => Some(AreaType::parse(label).ok_or_else(|| {
                ApiError::from(QueryError::UnknownValue {
                    field: CategoricalField::AreaType.as_str(),
                    value: label.to_string(),
                })
            })?),
        };
        let priority = match self.priority.as_deref() {
            None => defaults.priority,
            Some(p) => Priority::parse(p)
                .ok_or_else(|| ApiError::invalid_request(format!("Unknown priority: {}", p)))?,
        };

        Ok(RecommenderRequest {
            business_type: self.business_type.clone().unwrap_or(defaults.business_type),
            investment_budget_lakhs: match self.investment_budget {
                Some(_) => self.budget("investment_budget", self.investment_budget)?,
                None => defaults.investment_budget_lakhs,
            },
            monthly_budget: match self.monthly_budget {
                Some(_) => self.budget("monthly_budget", self.monthly_budget)?,
                None => defaults.monthly_budget,
            },
            preferred_area,
            priority,
        })
    }
}

const VIEW_KEYS: &[&str] = &["op", "panel", "constraints"];
const RANK_KEYS: &[&str] = &["op", "panel", "constraints", "sort", "direction", "limit"];
const GROUP_KEYS: &[&str] = &["op", "panel", "constraints", "group_by", "metrics", "order_by"];
const SUMMARY_KEYS: &[&str] = &["op", "panel", "constraints", "search", "columns"];
const ROI_KEYS: &[&str] = &["op", "area_id", "investment_budget"];
const FIND_KEYS: &[&str] = &["op", "criteria"];
const RECOMMEND_KEYS: &[&str] = &[
    "op",
    "business_type",
    "investment_budget",
    "monthly_budget",
    "preferred_area",
    "priority",
];
const EXPORT_KEYS: &[&str] = &[
    "op",
    "panel",
    "constraints",
    "search",
    "sort",
    "direction",
    "limit",
    "columns",
];

/// Top-level keys each operation accepts
fn accepted_keys(op: &str) -> Option<&'static [&'static str]> {
    match op {
        "filter" | "overview" | "risk_return" | "cities" => Some(VIEW_KEYS),
        "rank" => Some(RANK_KEYS),
        "group" => Some(GROUP_KEYS),
        "summary" => Some(SUMMARY_KEYS),
        "roi" => Some(ROI_KEYS),
        "find" => Some(FIND_KEYS),
        "recommend" => Some(RECOMMEND_KEYS),
        "export" => Some(EXPORT_KEYS),
        _ => None,
    }
}

/// Decodes the request object and checks its keys against the op
fn decode(json: &str) -> ApiResult<RawRequest> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;
    let object = value
        .as_object()
        .ok_or_else(|| ApiError::invalid_request("Request must be a JSON object"))?;
    let op = match object.get("op") {
        Some(Value::String(op)) => op.as_str(),
        Some(_) => return Err(ApiError::invalid_request("op must be a string")),
        None => return Err(ApiError::invalid_request("Missing op")),
    };
    let accepted = accepted_keys(op).ok_or_else(|| ApiError::unknown_operation(op))?;
    if let Some(key) = object.keys().find(|key| !accepted.contains(&key.as_str())) {
        return Err(ApiError::invalid_request(format!(
            "Field '{}' is not accepted by op '{}'",
            key, op
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| ApiError::invalid_request(format!("Invalid request: {}", e)))
}

impl Request {
    /// Parse a request from JSON string
    ///
    /// Keys the operation does not use are rejected rather than ignored.
    pub fn parse(json: &str) -> ApiResult<Self> {
        let mut raw = decode(json)?;

        match raw.op.as_str() {
            "filter" => Ok(Request::Filter(FilterRequest {
                constraints: raw.constraints()?,
            })),
            "rank" => {
                if raw.sort.is_none() {
                    return Err(ApiError::invalid_request("Missing sort"));
                }
                Ok(Request::Rank(RankRequest {
                    selection: raw.selection()?,
                }))
            }
            "group" => {
                let group_by = raw
                    .group_by
                    .as_deref()
                    .ok_or_else(|| ApiError::invalid_request("Missing group_by"))?;
                let group_by = resolve::categorical_field(group_by)?;
                let metrics = match &raw.metrics {
                    None => vec![Aggregate::Count],
                    Some(specs) if specs.is_empty() => {
                        return Err(ApiError::invalid_request("metrics must not be empty"))
                    }
                    Some(specs) => specs
                        .iter()
                        .map(|s| Aggregate::parse(s))
                        .collect::<Result<Vec<_>, _>>()?,
                };
                Ok(Request::Group(GroupRequest {
                    constraints: raw.constraints()?,
                    group_by,
                    metrics,
                    order_by: raw.order_by,
                }))
            }
            "summary" => Ok(Request::Summary(SummaryRequest {
                view: raw.explorer()?,
                constraints: raw.constraints()?,
            })),
            "roi" => {
                let area_id = raw
                    .area_id
                    .clone()
                    .ok_or_else(|| ApiError::invalid_request("Missing area_id"))?;
                Ok(Request::Roi(RoiRequest {
                    area_id,
                    investment_budget_lakhs: raw.budget("investment_budget", raw.investment_budget)?,
                }))
            }
            "overview" => Ok(Request::Overview(ViewRequest {
                constraints: raw.constraints()?,
            })),
            "find" => Ok(Request::Find(
                raw.criteria.take().unwrap_or_default().resolve()?,
            )),
            "recommend" => Ok(Request::Recommend(raw.recommender()?)),
            "risk_return" => Ok(Request::RiskReturn(ViewRequest {
                constraints: raw.constraints()?,
            })),
            "cities" => Ok(Request::Cities(ViewRequest {
                constraints: raw.constraints()?,
            })),
            "export" => Ok(Request::Export(ExportRequest {
                view: raw.explorer()?,
                constraints: raw.constraints()?,
            })),
            other => Err(ApiError::unknown_operation(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::NumericField;

    #[test]
    fn test_parse_rank_reference_request() {
        let json = r#"{"op": "rank",
            "constraints": [{"field": "monthly_rent", "lte": 25000},
                            {"field": "city", "in": ["Ludhiana"], "empty": "all"},
                            {"name_contains": "sector"}],
            "sort": "economic_health_score", "direction": "desc", "limit": 10}"#;

        let req = Request::parse(json).unwrap();
        let Request::Rank(rank) = req else {
            panic!("Expected Rank");
        };
        let selection = rank.selection;
        assert_eq!(selection.limit, Some(10));
        assert_eq!(selection.sort, Some(SortSpec::desc(NumericField::EconomicHealthScore)));
        assert_eq!(
            selection.constraints.predicates(),
            &[
                Predicate::at_most(NumericField::MonthlyRent, 25000.0),
                Predicate::one_of(CategoricalField::City, ["Ludhiana"], EmptySelection::MatchAll),
                Predicate::name_contains("sector"),
            ]
        );
    }

    #[test]
    fn test_empty_policy_defaults_to_all() {
        let req = Request::parse(r#"{"op":"filter","constraints":[{"field":"city","in":[]}]}"#).unwrap();
        assert_eq!(
            req,
            Request::Filter(FilterRequest {
                constraints: ConstraintSet::new().with(Predicate::one_of(
                    CategoricalField::City,
                    Vec::<String>::new(),
                    EmptySelection::MatchAll
                )),
            })
        );
    }

    #[test]
    fn test_panel_precedes_constraints() {
        let json = r#"{"op":"overview","panel":{"cities":["Patiala"],"health_range":[40,90]},
                       "constraints":[{"field":"risk_score","lte":50}]}"#;
        let Request::Overview(view) = Request::parse(json).unwrap() else {
            panic!("Expected Overview");
        };
        let preds = view.constraints.predicates();
        assert_eq!(preds.len(), 5);
        assert_eq!(preds[4], Predicate::at_most(NumericField::RiskScore, 50.0));
    }

    #[test]
    fn test_predicate_shapes_rejected() {
        for json in [
            r#"{"op":"filter","constraints":[{"field":"monthly_rent","gte":1,"lte":2}]}"#,
            r#"{"op":"filter","constraints":[{"field":"monthly_rent"}]}"#,
            r#"{"op":"filter","constraints":[{"gte":1}]}"#,
            r#"{"op":"filter","constraints":[{"field":"monthly_rent","lte":2,"empty":"all"}]}"#,
        ] {
            let err = Request::parse(json).unwrap_err();
            assert_eq!(err.code(), "HYPERLOCAL_QUERY_INVALID", "{}", json);
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Request::parse(r#"{"op":"filter","constraints":[{"field":"rent","lte":1}]}"#)
            .unwrap_err();
        assert_eq!(err.code(), "HYPERLOCAL_UNKNOWN_FIELD");

        let err = Request::parse(r#"{"op":"filter","constraints":[{"field":"city","gte":1}]}"#)
            .unwrap_err();
        assert_eq!(err.code(), "HYPERLOCAL_UNKNOWN_FIELD");
    }

    #[test]
    fn test_unknown_key_is_invalid_request() {
        let err = Request::parse(r#"{"op":"filter","colour":"red"}"#).unwrap_err();
        assert_eq!(err.code(), "HYPERLOCAL_INVALID_REQUEST");
    }

    #[test]
    fn test_keys_of_other_ops_rejected() {
        let err = Request::parse(r#"{"op":"filter","sort":"monthly_rent","limit":1}"#).unwrap_err();
        assert_eq!(err.code(), "HYPERLOCAL_INVALID_REQUEST");
        assert!(err.message().contains("'limit'") || err.message().contains("'sort'"));
        assert!(err.message().contains("op 'filter'"));

        for json in [
            r#"{"op":"find","panel":{"cities":["Patiala"]}}"#,
            r#"{"op":"find","constraints":[]}"#,
            r#"{"op":"roi","area_id":"LDH_001","investment_budget":20,"group_by":"city"}"#,
            r#"{"op":"roi","area_id":"LDH_001","investment_budget":20,"columns":[]}"#,
            r#"{"op":"recommend","panel":{}}"#,
            r#"{"op":"rank","sort":"monthly_rent","columns":["city"]}"#,
            r#"{"op":"group","group_by":"city","limit":2}"#,
            r#"{"op":"cities","search":"model"}"#,
        ] {
            let err = Request::parse(json).unwrap_err();
            assert_eq!(err.code(), "HYPERLOCAL_INVALID_REQUEST", "{}", json);
        }
    }

    #[test]
    fn test_request_shape_checked_before_keys() {
        let err = Request::parse(r#"{"op":"drop","sort":"monthly_rent"}"#).unwrap_err();
        assert_eq!(err.code(), "HYPERLOCAL_UNKNOWN_OPERATION");

        for json in [r#"[{"op":"filter"}]"#, r#"{}"#, r#"{"op":7}"#] {
            let err = Request::parse(json).unwrap_err();
            assert_eq!(err.code(), "HYPERLOCAL_INVALID_REQUEST", "{}", json);
        }
    }

    #[test]
    fn test_parse_export_uses_explorer_defaults() {
        let Request::Export(req) = Request::parse(r#"{"op":"export"}"#).unwrap() else {
            panic!("Expected Export");
        };
        assert_eq!(req.view, ExplorerView::default());
        assert!(req.constraints.is_empty());

        let json = r#"{"op":"export","search":"model","sort":"monthly_rent","direction":"asc",
                       "limit":3,"columns":["area_id"]}"#;
        let Request::Export(req) = Request::parse(json).unwrap() else {
            panic!("Expected Export");
        };
        assert_eq!(
            req.view,
            ExplorerView {
                search: "model".to_string(),
                sort: Some(SortSpec::asc(NumericField::MonthlyRent)),
                limit: Some(3),
                columns: vec![Column::AreaId],
            }
        );
    }

    #[test]
    fn test_unknown_category_label() {
        let err = Request::parse(
            r#"{"op":"filter","constraints":[{"field":"area_type","in":["Suburb"]}]}"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), "HYPERLOCAL_QUERY_INVALID");
        assert!(err.message().contains("Suburb"));
    }

    #[test]
    fn test_parse_unknown_op() {
        let err = Request::parse(r#"{"op": "drop"}"#).unwrap_err();
        assert_eq!(err.code(), "HYPERLOCAL_UNKNOWN_OPERATION");
    }

    #[test]
    fn test_parse_group() {
        let json = r#"{"op":"group","group_by":"city",
                       "metrics":["mean:economic_health_score","count"],"order_by":0}"#;
        let Request::Group(group) = Request::parse(json).unwrap() else {
            panic!("Expected Group");
        };
        assert_eq!(group.group_by, CategoricalField::City);
        assert_eq!(
            group.metrics,
            vec![Aggregate::Mean(NumericField::EconomicHealthScore), Aggregate::Count]
        );
        assert_eq!(group.order_by, Some(0));
    }

    #[test]
    fn test_parse_roi_requires_budget() {
        let err = Request::parse(r#"{"op":"roi","area_id":"LDH_001"}"#).unwrap_err();
        assert!(err.message().contains("investment_budget"));

        let req = Request::parse(r#"{"op":"roi","area_id":"LDH_001","investment_budget":20}"#).unwrap();
        assert_eq!(
            req,
            Request::Roi(RoiRequest {
                area_id: "LDH_001".to_string(),
                investment_budget_lakhs: 20.0,
            })
        );
    }

    #[test]
    fn test_parse_find_defaults_and_overrides() {
        let Request::Find(criteria) = Request::parse(r#"{"op":"find"}"#).unwrap() else {
            panic!("Expected Find");
        };
        assert_eq!(criteria, FinderCriteria::default());

        let json = r#"{"op":"find","criteria":{"max_rent":15000,"growth":[],"cities":["Patiala"]}}"#;
        let Request::Find(criteria) = Request::parse(json).unwrap() else {
            panic!("Expected Find");
        };
        assert_eq!(criteria.max_rent, 15000.0);
        assert!(criteria.growth.is_empty());
        assert_eq!(criteria.cities, Some(vec!["Patiala".to_string()]));
        assert_eq!(criteria.max_risk, 50.0);
    }

    #[test]
    fn test_parse_recommend() {
        let json = r#"{"op":"recommend","business_type":"Gym","investment_budget":15,
                       "monthly_budget":30000,"preferred_area":"Any","priority":"low_rent"}"#;
        let Request::Recommend(req) = Request::parse(json).unwrap() else {
            panic!("Expected Recommend");
        };
        assert_eq!(req.business_type, "Gym");
        assert_eq!(req.investment_budget_lakhs, 15.0);
        assert_eq!(req.monthly_budget, 30000.0);
        assert_eq!(req.preferred_area, None);
        assert_eq!(req.priority, Priority::LowRent);
    }

    #[test]
    fn test_parse_export_rejects_empty_columns() {
        let err = Request::parse(r#"{"op":"export","columns":[]}"#).unwrap_err();
        assert_eq!(err.code(), "HYPERLOCAL_EMPTY_SELECTION");
    }

    #[test]
    fn test_direction_without_sort() {
        let err = Request::parse(r#"{"op":"export","direction":"asc"}"#).unwrap_err();
        assert_eq!(err.code(), "HYPERLOCAL_INVALID_REQUEST");
    }
}
