use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use tracing::event;

use crate::core::GtoError;
use crate::preflop::{PreflopTable, TableSize};

/// Range tables read from a directory, each loaded the first time it's
/// asked for and kept until invalidated.
///
/// The cache is an ordinary value. Whoever needs the tables owns it, and
/// there is nothing global behind it.
#[derive(Debug)]
pub struct RangeTableCache {
    dir: PathBuf,
    tables: HashMap<TableSize, PreflopTable>,
}

impl RangeTableCache {
    /// Create an empty cache that reads `ranges_{size}.json` files from
    /// `dir`. Nothing is read until `get` is called.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            tables: HashMap::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the table for `size`, reading it from disk if it isn't loaded.
    pub fn get(&mut self, size: TableSize) -> Result<&PreflopTable, GtoError> {
        match self.tables.entry(size) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let table = PreflopTable::load(&self.dir, size)?;
                Ok(entry.insert(table))
            }
        }
    }

    pub fn is_loaded(&self, size: TableSize) -> bool {
        self.tables.contains_key(&size)
    }

    /// Forget the table for `size` so the next `get` reads the file again.
    /// Returns true if something was dropped.
    pub fn invalidate(&mut self, size: TableSize) -> bool {
        let removed = self.tables.remove(&size).is_some();
        event!(
            tracing::Level::DEBUG,
            removed,
            "Invalidated {} range table",
            size
        );
        removed
    }

    /// Forget every loaded table.
    pub fn clear(&mut self) {
        event!(
            tracing::Level::DEBUG,
            loaded = self.tables.len(),
            "Clearing range table cache"
        );
        self.tables.clear();
    }
}
