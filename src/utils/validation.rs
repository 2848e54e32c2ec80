use crate::domain::model::ExportFormat;
use crate::utils::error::{ReportError, Result};
use std::collections::HashSet;

/// Inclusive bounds of the timeframe stepper on the form.
pub const TIME_FRAME_MIN: i32 = 0;
pub const TIME_FRAME_MAX: i32 = 12;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Parses and de-duplicates export formats, keeping first-seen order.
pub fn validate_export_formats(field_name: &str, formats: &[String]) -> Result<Vec<ExportFormat>> {
    let mut seen = HashSet::new();
    let mut parsed = Vec::new();

    for raw in formats {
        let format = raw
            .parse::<ExportFormat>()
            .map_err(|reason| ReportError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: raw.clone(),
                reason,
            })?;
        if seen.insert(format) {
            parsed.push(format);
        }
    }

    Ok(parsed)
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ReportError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_time_frame(field_name: &str, time_frame: i32) -> Result<()> {
    validate_range(field_name, time_frame, TIME_FRAME_MIN, TIME_FRAME_MAX)
}
