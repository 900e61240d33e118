//! Durable employee collection.
//!
//! The whole roster lives in one JSON array under a single storage key.
//! Every operation reloads that blob, so there is no cache to go stale;
//! mutations rewrite the full collection.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use log::{info, warn};
use crate::db::{Storage, StorageError};
use crate::models::employee::Employee;

pub const DEFAULT_STORAGE_KEY: &str = "employees";

#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Serialize(serde_json::Error),
    DuplicateId(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Storage(err) => write!(f, "{}", err),
            StoreError::Serialize(err) => write!(f, "Failed to serialize roster: {}", err),
            StoreError::DuplicateId(id) => write!(f, "Employee {} already exists", id),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::Storage(err)
    }
}

pub struct RecordStore {
    storage: Arc<dyn Storage>,
    key: String,
    // Held across each read-modify-write.
    write_lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Never fails: unreadable or corrupt storage reads as an empty roster.
    pub fn list(&self) -> Vec<Employee> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("Could not read '{}', treating roster as empty: {}", self.key, err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(employees) => employees,
            Err(err) => {
                warn!("Discarding corrupt roster under '{}': {}", self.key, err);
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Employee> {
        self.list().into_iter().find(|emp| emp.id == id)
    }

    pub fn create(&self, employee: Employee) -> Result<(), StoreError> {
        let _guard = self.lock();
        let mut employees = self.list();
        if employees.iter().any(|emp| emp.id == employee.id) {
            return Err(StoreError::DuplicateId(employee.id));
        }

        info!("Creating employee {}", employee.id);
        employees.push(employee);
        self.save(&employees)
    }

    /// Replaces the record stored under `id`. Returns `false` and writes
    /// nothing when no such record exists.
    pub fn update(&self, id: &str, mut employee: Employee) -> Result<bool, StoreError> {
        let _guard = self.lock();
        let mut employees = self.list();
        let Some(slot) = employees.iter_mut().find(|emp| emp.id == id) else {
            return Ok(false);
        };

        employee.id = id.to_string();
        *slot = employee;
        info!("Updated employee {}", id);
        self.save(&employees)?;
        Ok(true)
    }

    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.lock();
        let mut employees = self.list();
        let before = employees.len();
        employees.retain(|emp| emp.id != id);
        if employees.len() == before {
            return Ok(false);
        }

        info!("Deleted employee {}", id);
        self.save(&employees)?;
        Ok(true)
    }

    /// Flips the active flag, returning its new value.
    pub fn toggle_active(&self, id: &str) -> Result<Option<bool>, StoreError> {
        let _guard = self.lock();
        let mut employees = self.list();
        let Some(employee) = employees.iter_mut().find(|emp| emp.id == id) else {
            return Ok(None);
        };

        employee.is_active = !employee.is_active;
        let is_active = employee.is_active;
        info!("Employee {} is now {}", id, if is_active { "active" } else { "inactive" });
        self.save(&employees)?;
        Ok(Some(is_active))
    }

    fn save(&self, employees: &[Employee]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(employees).map_err(StoreError::Serialize)?;
        self.storage.set_item(&self.key, &raw)?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
