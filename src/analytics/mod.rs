//! Analytics over table views
//!
//! Group-by aggregation, descriptive statistics, Pearson correlation,
//! category counts and missing-value counts. All functions are pure and
//! allocate fresh results; undefined arithmetic is reported as `None`.

mod aggregate;
mod correlation;
mod describe;
pub mod stats;
mod summary;

pub use aggregate::{group_aggregate, Aggregate, GroupRow, GroupedTable};
pub use correlation::{pearson, CorrelationMatrix};
pub use describe::{CategoryCounts, ColumnStats, MissingCount};
pub use summary::{derived_metrics, Summary};
