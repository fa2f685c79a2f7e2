//! Risk vs. return: best opportunities
//!
//! A row qualifies when its risk is strictly below the view's median risk and
//! its expected return strictly above the median expected return. Medians skip
//! missing values; a row missing either value never qualifies.

use serde::Serialize;

use crate::analytics::stats;
use crate::dataset::{NumericField, Table};
use crate::executor::QueryEngine;
use crate::query::SortSpec;

/// Best-opportunity result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestOpportunities {
    pub median_risk: Option<f64>,
    pub median_return: Option<f64>,
    pub match_count: usize,
    /// Top rows by expected return, descending
    pub rows: Table,
}

pub fn best_opportunities(view: &Table, top_n: usize) -> BestOpportunities {
    let median_risk = stats::median(&view.values(NumericField::RiskScore));
    let median_return = stats::median(&view.values(NumericField::ExpectedReturn));

    let qualifying: Table = match (median_risk, median_return) {
        (Some(risk), Some(ret)) => view
            .iter()
            .filter(|r| {
                let low_risk = r.numeric(NumericField::RiskScore).map_or(false, |v| v < risk);
                let high_return = r.numeric(NumericField::ExpectedReturn).map_or(false, |v| v > ret);
                low_risk && high_return
            })
            .cloned()
            .collect(),
        _ => Table::default(),
    };

    BestOpportunities {
        median_risk,
        median_return,
        match_count: qualifying.len(),
        rows: QueryEngine::rank_and_limit(
            &qualifying,
            &SortSpec::desc(NumericField::ExpectedReturn),
            Some(top_n),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testing::record;
    use crate::dataset::LocalityRecord;

    fn row(id: &str, risk: f64, ret: Option<f64>) -> LocalityRecord {
        let mut r = record(id, "X", 10000.0, 50.0);
        r.risk_score = risk;
        r.expected_return = ret;
        r
    }

    #[test]
    fn test_best_opportunities_quadrant() {
        // median risk 30, median return 15
        let t = Table::new(vec![
            row("a", 10.0, Some(20.0)),
            row("b", 20.0, Some(15.0)),
            row("c", 30.0, Some(12.0)),
            row("d", 40.0, Some(5.0)),
            row("e", 50.0, Some(30.0)),
        ]);

        let best = best_opportunities(&t, 10);
        assert_eq!(best.median_risk, Some(30.0));
        assert_eq!(best.median_return, Some(15.0));
        assert_eq!(best.match_count, 1);
        assert_eq!(best.rows.rows()[0].area_id, "a");
    }

    #[test]
    fn test_missing_return_never_qualifies() {
        let t = Table::new(vec![
            row("a", 10.0, None),
            row("b", 12.0, Some(15.0)),
            row("c", 30.0, Some(5.0)),
            row("d", 40.0, Some(8.0)),
        ]);
        let best = best_opportunities(&t, 10);
        assert_eq!(best.median_risk, Some(21.0));
        assert_eq!(best.median_return, Some(8.0));
        let ids: Vec<&str> = best.rows.iter().map(|r| r.area_id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn test_sorted_by_return_and_truncated() {
        let mut rows = Vec::new();
        for i in 0..20 {
            rows.push(row(&format!("lo{}", i), 10.0, Some(50.0 + i as f64)));
            rows.push(row(&format!("hi{}", i), 90.0, Some(1.0)));
        }
        let best = best_opportunities(&Table::new(rows), 10);
        assert_eq!(best.match_count, 20);
        assert_eq!(best.rows.len(), 10);
        assert_eq!(best.rows.rows()[0].area_id, "lo19");
    }

    #[test]
    fn test_empty_view() {
        let best = best_opportunities(&Table::default(), 10);
        assert_eq!(best.median_risk, None);
        assert_eq!(best.match_count, 0);
        assert!(best.rows.is_empty());
    }
}
