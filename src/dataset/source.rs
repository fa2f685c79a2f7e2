//! Injectable data sources
//!
//! The table is loaded at most once per source and shared immutably. After
//! first population the cache is read-only, so concurrent readers need no
//! further synchronization.

use std::sync::{Arc, OnceLock};

use super::errors::DatasetResult;
use super::loader::DatasetLoader;
use super::table::Table;

/// Anything that can hand out the session table
pub trait DataSource {
    /// Returns the full table. Repeated calls return the same `Arc`.
    fn table(&self) -> DatasetResult<Arc<Table>>;
}

/// CSV-backed source with one-time initialization
#[derive(Debug)]
pub struct CsvDataSource {
    loader: DatasetLoader,
    cache: OnceLock<Arc<Table>>,
}

impl CsvDataSource {
    pub fn new(loader: DatasetLoader) -> Self {
        Self {
            loader,
            cache: OnceLock::new(),
        }
    }

    /// Returns true once the table has been loaded
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }
}

impl DataSource for CsvDataSource {
    fn table(&self) -> DatasetResult<Arc<Table>> {
        if let Some(table) = self.cache.get() {
            return Ok(Arc::clone(table));
        }

        let loaded = Arc::new(self.loader.load()?);
        Ok(Arc::clone(self.cache.get_or_init(|| loaded)))
    }
}

/// Fixed in-memory source, for tests and embedding
#[derive(Debug, Clone)]
pub struct StaticDataSource {
    table: Arc<Table>,
}

impl StaticDataSource {
    pub fn new(table: Table) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}

impl DataSource for StaticDataSource {
    fn table(&self) -> DatasetResult<Arc<Table>> {
        Ok(Arc::clone(&self.table))
    }
}

impl<T: DataSource + ?Sized> DataSource for Arc<T> {
    fn table(&self) -> DatasetResult<Arc<Table>> {
        (**self).table()
    }
}
