//! Travel-package catalog: builds snake_case rows from typed payloads and runs them against the store.

use crate::convert::snake_fields;
use crate::datum::Datum;
use crate::error::AppError;
use crate::service::validation::PackageValidator;
use crate::store::{ListFilter, PackageStore};
use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create payload. Field names are the snake_case column names; clients send camelCase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPackage {
    pub title: String,
    pub destination: String,
    pub price_cents: i64,
    pub total_seats: i64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// PATCH payload: only present fields are written.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PackagePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_seats: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

pub struct CatalogService;

impl CatalogService {
    pub fn list(store: &PackageStore, filter: &ListFilter) -> Result<Vec<Datum>, AppError> {
        store.list(filter)
    }

    pub fn read(store: &PackageStore, id: Uuid) -> Result<Option<Datum>, AppError> {
        store.get(id)
    }

    /// Validate, assign id and timestamps, insert. Returns the stored row.
    pub fn create(store: &PackageStore, new: &NewPackage) -> Result<Datum, AppError> {
        Self::create_at(store, new, Uuid::new_v4(), Utc::now())
    }

    pub fn create_at(store: &PackageStore, new: &NewPackage, id: Uuid, now: DateTime<Utc>) -> Result<Datum, AppError> {
        PackageValidator::validate_new(new)?;
        let mut row = IndexMap::new();
        row.insert("id".to_string(), Datum::from(id.to_string()));
        row.extend(snake_fields(new)?);
        row.insert("created_at".to_string(), Datum::DateTime(now));
        row.insert("updated_at".to_string(), Datum::DateTime(now));
        store.insert(id, Datum::Object(row))
    }

    /// Validate and apply a partial update; bumps `updated_at`. `None` if the id is unknown.
    pub fn update(store: &PackageStore, id: Uuid, patch: &PackagePatch) -> Result<Option<Datum>, AppError> {
        PackageValidator::validate_patch(patch)?;
        let mut fields = snake_fields(patch)?;
        fields.insert("updated_at".to_string(), Datum::DateTime(Utc::now()));
        store.update(id, fields)
    }

    pub fn delete(store: &PackageStore, id: Uuid) -> Result<Option<Datum>, AppError> {
        store.remove(id)
    }

    /// Load a handful of sample packages (demo server only).
    pub fn seed_demo(store: &PackageStore) -> Result<usize, AppError> {
        let samples = [
            ("Lisbon long weekend", "Lisbon", 54_900, 24, true, vec!["city", "food"]),
            ("Douro valley wine trail", "Peso da Régua", 89_000, 12, false, vec!["wine", "river_cruise"]),
            ("Madeira levada hikes", "Funchal", 112_500, 16, true, vec!["hiking"]),
        ];
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).single().unwrap_or_else(Utc::now);
        let mut inserted = 0;
        for (title, destination, price_cents, total_seats, is_featured, tags) in samples {
            let new = NewPackage {
                title: title.into(),
                destination: destination.into(),
                price_cents,
                total_seats,
                is_featured,
                category_id: None,
                tags: tags.into_iter().map(String::from).collect(),
            };
            Self::create_at(store, &new, Uuid::new_v4(), created)?;
            inserted += 1;
        }
        tracing::info!(count = inserted, "seeded demo packages");
        Ok(inserted)
    }
}
