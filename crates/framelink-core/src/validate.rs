//! Dimension bounds checks and the whole-config validation report.
//!
//! Address and dimensions are edited independently, so each check is its
//! own function with a field-scoped error; `validate_config` is the
//! aggregation callers use when they want everything at once.

use thiserror::Error;

use crate::address::validate_address;
use crate::embed::{EmbedConfig, Unit};

/// Why a dimension was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    #[error("Must be a positive number")]
    NotPositive,
    #[error("Percentage cannot exceed 100%")]
    PercentTooLarge,
    #[error("Pixel value too large (max: 5000px)")]
    PxTooLarge,
}

/// Bounds check for a dimension magnitude. NaN counts as not positive.
pub fn validate_dimension(value: f64, unit: Unit) -> Result<(), DimensionError> {
    if value.is_nan() || value <= 0.0 {
        return Err(DimensionError::NotPositive);
    }
    match unit {
        Unit::Percent if value > 100.0 => Err(DimensionError::PercentTooLarge),
        Unit::Px if value > 5000.0 => Err(DimensionError::PxTooLarge),
        _ => Ok(()),
    }
}

/// Same check for raw text still being edited. Unparseable input maps to
/// `NotPositive`, matching the NaN behavior of the numeric form.
pub fn validate_dimension_input(raw: &str, unit: Unit) -> Result<(), DimensionError> {
    let value = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
    validate_dimension(value, unit)
}

/// Per-field error messages. Absence of a field means it is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub url: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.url.is_none() && self.width.is_none() && self.height.is_none()
    }
}

/// Validates the whole configuration into one report. The address check is
/// skipped while the address is still unset; dimensions are always checked.
pub fn validate_config(config: &EmbedConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !config.address.is_empty() {
        if let Err(err) = validate_address(&config.address) {
            report.url = Some(err.to_string());
        }
    }

    if let Err(err) = validate_dimension(config.width.magnitude, config.width.unit) {
        report.width = Some(err.to_string());
    }
    if let Err(err) = validate_dimension(config.height.magnitude, config.height.unit) {
        report.height = Some(err.to_string());
    }

    report
}
