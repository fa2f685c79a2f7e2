//! Pearson correlation matrix
//!
//! Pairwise-complete observations: a row contributes to (i, j) only if both
//! values are present. Pairs with fewer than two observations or zero
//! variance in either column are undefined (`None`), never an error.

use serde::Serialize;

use crate::dataset::{NumericField, Table};

/// Symmetric correlation matrix over a fixed field list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub fields: Vec<&'static str>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Computes the matrix over `fields` in the given order
    pub fn compute(table: &Table, fields: &[NumericField]) -> Self {
        let columns: Vec<Vec<Option<f64>>> = fields
            .iter()
            .map(|f| table.iter().map(|r| r.numeric(*f)).collect())
            .collect();

        let n = fields.len();
        let mut values = vec![vec![None; n]; n];

        for i in 0..n {
            values[i][i] = diagonal(&columns[i]);
            for j in (i + 1)..n {
                let r = pearson(&columns[i], &columns[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Self {
            fields: fields.iter().map(|f| f.as_str()).collect(),
            values,
        }
    }

    /// Coefficient for a pair of fields, `None` if undefined or not present
    pub fn get(&self, a: NumericField, b: NumericField) -> Option<f64> {
        let i = self.fields.iter().position(|f| *f == a.as_str())?;
        let j = self.fields.iter().position(|f| *f == b.as_str())?;
        self.values[i][j]
    }

    /// Returns true if (i, j) == (j, i) for every pair
    pub fn is_symmetric(&self) -> bool {
        let n = self.values.len();
        (0..n).all(|i| (0..n).all(|j| self.values[i][j] == self.values[j][i]))
    }
}

/// 1.0 for a column with at least two distinct values, else undefined
fn diagonal(column: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = column.iter().flatten().copied().collect();
    if present.len() < 2 {
        return None;
    }
    let first = present[0];
    if present.iter().all(|v| *v == first) {
        return None;
    }
    Some(1.0)
}

/// Pearson coefficient over pairwise-complete observations
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    let r = cov / (var_x.sqrt() * var_y.sqrt());
    Some(r.clamp(-1.0, 1.0))
}
