//! Field validators.
//!
//! Every validator takes the candidate value, `None` meaning the field was not provided, and
//! returns the accepted value. Validators never alter the value they accept, so validating an
//! accepted value again always succeeds.

use heroes_entity::hero_power::Strength;
use std::{borrow::Cow, str::FromStr};
use strum::VariantNames;

/// The minimum number of characters of a power's name.
pub const MIN_POWER_NAME_LEN: usize = 3;
/// The minimum number of characters of a power's description.
pub const MIN_DESCRIPTION_LEN: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for '{field}': {reason}")]
pub struct ValidationError {
    /// The name of the rejected field
    pub field: &'static str,
    /// Why the value was rejected
    pub reason: Cow<'static, str>,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    value.ok_or_else(|| ValidationError::new(field, "is required"))
}

fn not_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        true => Err(ValidationError::new(field, "must not be empty")),
        false => Ok(()),
    }
}

fn min_len(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    match value.chars().count() < min {
        true => Err(ValidationError::new(
            field,
            format!("must be at least {min} characters long"),
        )),
        false => Ok(()),
    }
}

/// A hero's name must be present and not blank.
pub fn validate_hero_name(value: Option<&str>) -> Result<String, ValidationError> {
    let value = required("name", value)?;
    not_blank("name", value)?;
    Ok(value.to_string())
}

/// A hero's super name must be present and not blank.
pub fn validate_super_name(value: Option<&str>) -> Result<String, ValidationError> {
    let value = required("super_name", value)?;
    not_blank("super_name", value)?;
    Ok(value.to_string())
}

/// A power's name must be present, not blank, and at least [`MIN_POWER_NAME_LEN`] characters.
pub fn validate_power_name(value: Option<&str>) -> Result<String, ValidationError> {
    let value = required("name", value)?;
    not_blank("name", value)?;
    min_len("name", value, MIN_POWER_NAME_LEN)?;
    Ok(value.to_string())
}

/// A power's description must be present and at least [`MIN_DESCRIPTION_LEN`] characters.
pub fn validate_description(value: Option<&str>) -> Result<String, ValidationError> {
    let value = required("description", value)?;
    min_len("description", value, MIN_DESCRIPTION_LEN)?;
    Ok(value.to_string())
}

/// The strength must be exactly one of the [`Strength`] names.
pub fn validate_strength(value: Option<&str>) -> Result<Strength, ValidationError> {
    let value = required("strength", value)?;
    Strength::from_str(value).map_err(|_| {
        ValidationError::new(
            "strength",
            format!("must be one of {}", Strength::VARIANTS.join(", ")),
        )
    })
}
