//! Request validation for travel-package payloads.

use crate::error::AppError;
use crate::service::catalog::{NewPackage, PackagePatch};

pub const TITLE_MAX_LENGTH: usize = 200;

pub struct PackageValidator;

impl PackageValidator {
    /// Validate a full create payload.
    pub fn validate_new(p: &NewPackage) -> Result<(), AppError> {
        validate_title(&p.title)?;
        validate_non_empty("destination", &p.destination)?;
        validate_non_negative("price_cents", p.price_cents)?;
        validate_non_negative("total_seats", p.total_seats)?;
        Ok(())
    }

    /// Validate only the fields present in a PATCH body.
    pub fn validate_patch(p: &PackagePatch) -> Result<(), AppError> {
        if let Some(title) = &p.title {
            validate_title(title)?;
        }
        if let Some(destination) = &p.destination {
            validate_non_empty("destination", destination)?;
        }
        if let Some(n) = p.price_cents {
            validate_non_negative("price_cents", n)?;
        }
        if let Some(n) = p.total_seats {
            validate_non_negative("total_seats", n)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    validate_non_empty("title", title)?;
    if title.chars().count() > TITLE_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "title must be at most {} characters",
            TITLE_MAX_LENGTH
        )));
    }
    Ok(())
}

fn validate_non_empty(field: &str, s: &str) -> Result<(), AppError> {
    if s.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn validate_non_negative(field: &str, n: i64) -> Result<(), AppError> {
    if n < 0 {
        return Err(AppError::Validation(format!("{} must be at least 0", field)));
    }
    Ok(())
}
