//! Global filter panel
//!
//! City and area-type selections treat an empty list as "all categories".
//! The health score range is inclusive on both ends.

use crate::dataset::{AreaType, CategoricalField, NumericField};
use crate::query::{ConstraintSet, EmptySelection, Predicate};

/// Filters shared by every view
#[derive(Debug, Clone, PartialEq)]
pub struct PanelFilter {
    pub cities: Vec<String>,
    pub area_types: Vec<AreaType>,
    pub health_range: (f64, f64),
}

impl Default for PanelFilter {
    fn default() -> Self {
        Self {
            cities: Vec::new(),
            area_types: Vec::new(),
            health_range: (0.0, 100.0),
        }
    }
}

impl PanelFilter {
    /// Builds the constraint set for this panel
    pub fn constraints(&self) -> ConstraintSet {
        let (lo, hi) = self.health_range;
        ConstraintSet::new()
            .with(Predicate::one_of(
                CategoricalField::City,
                self.cities.iter().cloned(),
                EmptySelection::MatchAll,
            ))
            .with(Predicate::one_of(
                CategoricalField::AreaType,
                self.area_types.iter().map(|t| t.as_str()),
                EmptySelection::MatchAll,
            ))
            .between(NumericField::EconomicHealthScore, lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::testing::record;
    use crate::dataset::Table;
    use crate::executor::QueryEngine;

    #[test]
    fn test_default_panel_keeps_everything() {
        let table = Table::new(vec![
            record("1", "Ludhiana", 1.0, 0.0),
            record("2", "Patiala", 1.0, 100.0),
        ]);

        let out = QueryEngine::filter(&table, &PanelFilter::default().constraints());
        assert_eq!(out, table);
    }

    #[test]
    fn test_panel_city_and_range() {
        let table = Table::new(vec![
            record("1", "Ludhiana", 1.0, 40.0),
            record("2", "Patiala", 1.0, 70.0),
            record("3", "Ludhiana", 1.0, 75.0),
        ]);

        let panel = PanelFilter {
            cities: vec!["Ludhiana".to_string()],
            health_range: (50.0, 100.0),
            ..PanelFilter::default()
        };

        let out = QueryEngine::filter(&table, &panel.constraints());
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows()[0].area_id, "3");
    }

    #[test]
    fn test_panel_area_type() {
        let mut rural = record("1", "Ludhiana", 1.0, 40.0);
        rural.area_type = AreaType::Rural;
        let table = Table::new(vec![rural, record("2", "Patiala", 1.0, 70.0)]);

        let panel = PanelFilter {
            area_types: vec![AreaType::Rural],
            ..PanelFilter::default()
        };

        let out = QueryEngine::filter(&table, &panel.constraints());
        assert_eq!(out.len(), 1);
        assert_eq!(out.rows()[0].area_id, "1");
    }
}
