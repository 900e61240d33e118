use std::borrow::Cow;
use chrono::{Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};
use crate::models::region;
use crate::utils::image;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub profile_image: Option<String>,
    pub state: String,
    pub is_active: bool,
}

impl Employee {
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            full_name: self.full_name.clone(),
            gender: self.gender,
            date_of_birth: Some(self.date_of_birth),
            profile_image: self.profile_image.clone(),
            state: self.state.clone(),
            is_active: self.is_active,
        }
    }
}

/// Form data for a record that has not been committed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    #[serde(default)]
    #[validate(custom = "validate_full_name")]
    pub full_name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    #[validate(
        required(message = "Date of birth is required"),
        custom = "validate_date_of_birth"
    )]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    #[validate(custom = "validate_profile_image")]
    pub profile_image: Option<String>,
    #[serde(default)]
    #[validate(custom = "validate_state")]
    pub state: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

// An untouched date input submits "".
fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(Some)
            .map_err(de::Error::custom),
    }
}

fn default_active() -> bool {
    true
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            gender: Gender::Male,
            date_of_birth: None,
            profile_image: None,
            state: String::new(),
            is_active: true,
        }
    }
}

impl EmployeeDraft {
    /// Returns `None` while the date of birth is still missing.
    pub fn into_employee(self, id: String) -> Option<Employee> {
        let date_of_birth = self.date_of_birth?;
        Some(Employee {
            id,
            full_name: self.full_name,
            gender: self.gender,
            date_of_birth,
            profile_image: self.profile_image,
            state: self.state,
            is_active: self.is_active,
        })
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return Err(invalid("required", "Full name is required"));
    }
    if trimmed.chars().count() < 2 {
        return Err(invalid("length", "Full name must be at least 2 characters"));
    }
    Ok(())
}

fn validate_date_of_birth(date_of_birth: &NaiveDate) -> Result<(), ValidationError> {
    if *date_of_birth > Local::now().date_naive() {
        return Err(invalid("future_date", "Date of birth cannot be in the future"));
    }
    Ok(())
}

fn validate_profile_image(profile_image: &str) -> Result<(), ValidationError> {
    image::check_profile_image_uri(profile_image).map_err(|err| {
        let mut invalid = ValidationError::new("image");
        invalid.message = Some(Cow::Owned(err.to_string()));
        invalid
    })
}

fn validate_state(state: &str) -> Result<(), ValidationError> {
    if state.is_empty() {
        return Err(invalid("required", "State is required"));
    }
    if !region::is_known(state) {
        return Err(invalid("unknown_state", "Please select a valid state"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/employee_tests.rs"]
mod tests;
