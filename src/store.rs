//! In-memory travel-package rows. Rows are snake_case `Datum` objects, shaped like ORM output.

use crate::datum::Datum;
use crate::error::AppError;
use indexmap::IndexMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

pub const DEFAULT_LIMIT: u32 = 100;
pub const MAX_LIMIT: u32 = 1000;

/// Exact-match filter plus paging for `PackageStore::list`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub featured: Option<bool>,
    /// Default 100, max 1000.
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ListFilter {
    fn matches(&self, row: &Datum) -> bool {
        match self.featured {
            Some(want) => row.get("is_featured").and_then(Datum::as_bool) == Some(want),
            None => true,
        }
    }
}

/// Rows keyed by id, in insertion order.
#[derive(Default)]
pub struct PackageStore {
    rows: RwLock<IndexMap<Uuid, Datum>>,
}

impl PackageStore {
    pub fn new() -> Self {
        PackageStore::default()
    }

    fn read_rows(&self) -> Result<RwLockReadGuard<'_, IndexMap<Uuid, Datum>>, AppError> {
        self.rows
            .read()
            .map_err(|_| AppError::Internal("package store lock poisoned".into()))
    }

    fn write_rows(&self) -> Result<RwLockWriteGuard<'_, IndexMap<Uuid, Datum>>, AppError> {
        self.rows
            .write()
            .map_err(|_| AppError::Internal("package store lock poisoned".into()))
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read_rows()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read_rows()?.is_empty())
    }

    pub fn list(&self, filter: &ListFilter) -> Result<Vec<Datum>, AppError> {
        let limit = filter.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let offset = filter.offset.unwrap_or(0) as usize;
        let rows = self.read_rows()?;
        Ok(rows
            .values()
            .filter(|row| filter.matches(row))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    pub fn get(&self, id: Uuid) -> Result<Option<Datum>, AppError> {
        Ok(self.read_rows()?.get(&id).cloned())
    }

    /// Insert a new row. Fails with `Conflict` if the id is taken.
    pub fn insert(&self, id: Uuid, row: Datum) -> Result<Datum, AppError> {
        let mut rows = self.write_rows()?;
        if rows.contains_key(&id) {
            return Err(AppError::Conflict(format!("package {} already exists", id)));
        }
        rows.insert(id, row.clone());
        tracing::info!(%id, "package inserted");
        Ok(row)
    }

    /// Overwrite the given fields of an existing row. Returns the updated row, or `None` if absent.
    pub fn update(&self, id: Uuid, fields: IndexMap<String, Datum>) -> Result<Option<Datum>, AppError> {
        let mut rows = self.write_rows()?;
        let Some(row) = rows.get_mut(&id) else {
            return Ok(None);
        };
        let Some(columns) = row.as_object_mut() else {
            return Err(AppError::Internal(format!("package {} is not a row object", id)));
        };
        let changed = fields.len();
        columns.extend(fields);
        tracing::info!(%id, changed, "package updated");
        Ok(Some(row.clone()))
    }

    /// Remove a row. Returns it, or `None` if absent.
    pub fn remove(&self, id: Uuid) -> Result<Option<Datum>, AppError> {
        let removed = self.write_rows()?.shift_remove(&id);
        if removed.is_some() {
            tracing::info!(%id, "package deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, featured: bool) -> Datum {
        Datum::object([("title", Datum::from(title)), ("is_featured", Datum::from(featured))])
    }

    #[test]
    fn insert_get_remove() {
        let store = PackageStore::new();
        let id = Uuid::new_v4();
        store.insert(id, row("Lisbon", false)).unwrap();
        assert_eq!(store.get(id).unwrap(), Some(row("Lisbon", false)));
        assert!(matches!(store.insert(id, row("again", true)), Err(AppError::Conflict(_))));
        assert_eq!(store.remove(id).unwrap(), Some(row("Lisbon", false)));
        assert_eq!(store.get(id).unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn list_filters_and_pages_in_insertion_order() {
        let store = PackageStore::new();
        for (i, featured) in [true, false, true, true].into_iter().enumerate() {
            store.insert(Uuid::new_v4(), row(&format!("p{}", i), featured)).unwrap();
        }
        assert_eq!(store.list(&ListFilter::default()).unwrap().len(), 4);

        let featured = store
            .list(&ListFilter {
                featured: Some(true),
                limit: Some(1),
                offset: Some(1),
            })
            .unwrap();
        assert_eq!(featured, vec![row("p2", true)]);

        let plain = store
            .list(&ListFilter {
                featured: Some(false),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(plain, vec![row("p1", false)]);
    }

    #[test]
    fn update_merges_fields() {
        let store = PackageStore::new();
        let id = Uuid::new_v4();
        store.insert(id, row("Porto", false)).unwrap();
        let mut fields = IndexMap::new();
        fields.insert("is_featured".to_string(), Datum::from(true));
        let updated = store.update(id, fields).unwrap().unwrap();
        assert_eq!(updated, row("Porto", true));
        assert_eq!(store.update(Uuid::new_v4(), IndexMap::new()).unwrap(), None);
    }
}
