//! Data explorer
//!
//! Area-name search on top of an already filtered view, a sort (health score,
//! best first, unless the caller picks another), an optional row limit and a
//! choice of displayed columns. Export and summary both cover exactly the
//! displayed columns over the displayed rows.

use serde::Serialize;

use crate::analytics::Summary;
use crate::dataset::{export_csv, Column, DatasetResult, NumericField, Table};
use crate::executor::QueryEngine;
use crate::query::{Predicate, Selection, SortSpec};

/// Explorer view settings
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerView {
    /// Case-insensitive area-name substring; empty shows everything
    pub search: String,
    /// `None` keeps the view's order
    pub sort: Option<SortSpec>,
    pub limit: Option<usize>,
    pub columns: Vec<Column>,
}

impl Default for ExplorerView {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: Some(SortSpec::desc(NumericField::EconomicHealthScore)),
            limit: None,
            columns: Column::DEFAULT_DISPLAY.to_vec(),
        }
    }
}

/// Rows shown by the explorer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorerPage {
    pub columns: Vec<&'static str>,
    pub rows: Table,
}

impl ExplorerView {
    /// Applies the search, sort and limit to `view`
    pub fn apply(&self, view: &Table) -> ExplorerPage {
        let mut selection = Selection::default();
        if !self.search.is_empty() {
            selection = selection.with_predicate(Predicate::name_contains(self.search.clone()));
        }
        if let Some(sort) = self.sort {
            selection = selection.with_sort(sort);
        }
        if let Some(limit) = self.limit {
            selection = selection.with_limit(limit);
        }

        ExplorerPage {
            columns: self.columns.iter().map(Column::as_str).collect(),
            rows: QueryEngine::execute(view, &selection).rows,
        }
    }

    /// CSV of the displayed columns
    pub fn export(&self, view: &Table) -> DatasetResult<String> {
        self.export_page(&self.apply(view))
    }

    /// CSV of a page this view already produced
    pub fn export_page(&self, page: &ExplorerPage) -> DatasetResult<String> {
        export_csv(&page.rows, &self.columns)
    }

    /// Summary of the displayed columns
    pub fn summary(&self, view: &Table) -> Summary {
        QueryEngine::derived_metrics(&self.apply(view).rows, &self.columns)
    }
}
