use crate::utils::error::{GameError, Result};
use std::fmt::Display;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Display, reason: impl Into<String>) -> GameError {
    GameError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The deck service is only reachable over http(s).
pub fn validate_url(field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|e| invalid(field, value, format!("Invalid URL format: {e}")))?;
    if matches!(url.scheme(), "http" | "https") {
        Ok(())
    } else {
        Err(invalid(field, value, format!("Unsupported URL scheme: {}", url.scheme())))
    }
}

pub fn validate_range<T: PartialOrd + Display + Copy>(field: &str, value: T, min: T, max: T) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, value, format!("Value must be between {min} and {max}")))
    }
}

pub fn validate_required_field<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GameError::MissingConfigError {
        field: field.to_string(),
    })
}
