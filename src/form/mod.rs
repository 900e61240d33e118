//! Staging area for a single employee record.
//!
//! A form either starts blank (create) or from an existing record (edit).
//! Field setters clear that field's error straight away; `submit` re-runs
//! every check and only touches the store when all of them pass.

use std::collections::BTreeMap;
use std::fmt;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::employee::{Employee, EmployeeDraft, Gender};
use crate::store::{RecordStore, StoreError};
use crate::utils::image;
use crate::utils::validation::validate_payload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FullName,
    Gender,
    DateOfBirth,
    ProfileImage,
    State,
    IsActive,
}

impl FormField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full_name" | "fullName" => Some(FormField::FullName),
            "gender" => Some(FormField::Gender),
            "date_of_birth" | "dateOfBirth" => Some(FormField::DateOfBirth),
            "profile_image" | "profileImage" => Some(FormField::ProfileImage),
            "state" => Some(FormField::State),
            "is_active" | "isActive" => Some(FormField::IsActive),
            _ => None,
        }
    }
}

pub type FieldErrors = BTreeMap<FormField, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Employee),
    Updated(Employee),
}

impl SubmitOutcome {
    pub fn employee(&self) -> &Employee {
        match self {
            SubmitOutcome::Created(emp) | SubmitOutcome::Updated(emp) => emp,
        }
    }

    pub fn into_employee(self) -> Employee {
        match self {
            SubmitOutcome::Created(emp) | SubmitOutcome::Updated(emp) => emp,
        }
    }
}

#[derive(Debug)]
pub enum SubmitError {
    Invalid(FieldErrors),
    Missing(String),
    Store(StoreError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Invalid(errors) => write!(f, "{} field(s) need attention", errors.len()),
            SubmitError::Missing(id) => write!(f, "Employee {} no longer exists", id),
            SubmitError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        SubmitError::Store(err)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeForm {
    editing: Option<String>,
    draft: EmployeeDraft,
    errors: FieldErrors,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(employee: &Employee) -> Self {
        Self {
            editing: Some(employee.id.clone()),
            draft: employee.to_draft(),
            errors: FieldErrors::new(),
        }
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.draft.full_name = full_name.into();
        self.clear_error(FormField::FullName);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.draft.gender = gender;
        self.clear_error(FormField::Gender);
    }

    pub fn set_date_of_birth(&mut self, date_of_birth: Option<NaiveDate>) {
        self.draft.date_of_birth = date_of_birth;
        self.clear_error(FormField::DateOfBirth);
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.draft.state = state.into();
        self.clear_error(FormField::State);
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.draft.is_active = is_active;
        self.clear_error(FormField::IsActive);
    }

    /// Takes an already-encoded image, e.g. a data URI returned by the
    /// upload endpoint.
    pub fn set_profile_image(&mut self, profile_image: Option<String>) {
        self.draft.profile_image = profile_image;
        self.clear_error(FormField::ProfileImage);
    }

    pub fn remove_image(&mut self) {
        self.set_profile_image(None);
    }

    /// Validates raw upload bytes. A rejected file keeps the previous image
    /// and leaves a `profileImage` error; the rest of the form is unaffected.
    pub fn attach_image(&mut self, file: &[u8]) -> bool {
        match image::encode_profile_image(file) {
            Ok(uri) => {
                self.set_profile_image(Some(uri));
                true
            }
            Err(err) => {
                debug!("Rejected profile image upload: {}", err);
                self.errors.insert(FormField::ProfileImage, err.to_string());
                false
            }
        }
    }

    /// Replaces every editable field with the values in `draft`.
    pub fn apply(&mut self, draft: EmployeeDraft) {
        let EmployeeDraft {
            full_name,
            gender,
            date_of_birth,
            profile_image,
            state,
            is_active,
        } = draft;
        self.set_full_name(full_name);
        self.set_gender(gender);
        self.set_date_of_birth(date_of_birth);
        self.set_profile_image(profile_image);
        self.set_state(state);
        self.set_active(is_active);
    }

    /// Rebuilds the error map from scratch. Returns `true` when clean.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_payload(&self.draft);
        self.errors.is_empty()
    }

    pub fn submit(&mut self, store: &RecordStore) -> Result<SubmitOutcome, SubmitError> {
        if !self.validate() {
            debug!("Form submission blocked by {} error(s)", self.errors.len());
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        match self.editing.clone() {
            Some(id) => {
                let employee = self.staged(id.clone())?;
                if !store.update(&id, employee.clone())? {
                    return Err(SubmitError::Missing(id));
                }
                Ok(SubmitOutcome::Updated(employee))
            }
            None => {
                let employee = self.staged(Uuid::new_v4().to_string())?;
                store.create(employee.clone())?;
                Ok(SubmitOutcome::Created(employee))
            }
        }
    }

    fn staged(&self, id: String) -> Result<Employee, SubmitError> {
        self.draft.clone().into_employee(id).ok_or_else(|| {
            let mut errors = FieldErrors::new();
            errors.insert(FormField::DateOfBirth, "Date of birth is required".to_string());
            SubmitError::Invalid(errors)
        })
    }

    fn clear_error(&mut self, field: FormField) {
        self.errors.remove(&field);
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
