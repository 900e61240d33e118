pub mod print;

use serde::{Deserialize, Serialize};
use crate::models::employee::{Employee, Gender};
use crate::store::{RecordStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenderFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    Male,
    Female,
    Other,
}

impl GenderFilter {
    pub fn matches(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => gender == Gender::Male,
            GenderFilter::Female => gender == Gender::Female,
            GenderFilter::Other => gender == Gender::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(&self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterFilter {
    pub search_term: String,
    pub gender: GenderFilter,
    pub status: StatusFilter,
}

impl RosterFilter {
    pub fn matches_name(&self, employee: &Employee) -> bool {
        self.search_term.is_empty()
            || employee
                .full_name
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_name(employee)
            && self.gender.matches(employee.gender)
            && self.status.matches(employee.is_active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl Summary {
    pub fn of(employees: &[Employee]) -> Self {
        let total = employees.len();
        let active = employees.iter().filter(|emp| emp.is_active).count();
        Summary {
            total,
            active,
            inactive: total - active,
        }
    }
}

/// Working set shown to the user: the last roster loaded from the store
/// plus the filtered subset derived from it.
#[derive(Debug, Clone, Default)]
pub struct RosterView {
    employees: Vec<Employee>,
    filter: RosterFilter,
    visible: Vec<Employee>,
}

impl RosterView {
    pub fn load(store: &RecordStore, filter: RosterFilter) -> Self {
        let mut view = RosterView {
            employees: Vec::new(),
            filter,
            visible: Vec::new(),
        };
        view.reload(store);
        view
    }

    pub fn reload(&mut self, store: &RecordStore) {
        self.employees = store.list();
        self.refilter();
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.filter.search_term = search_term.into();
        self.refilter();
    }

    pub fn set_gender_filter(&mut self, gender: GenderFilter) {
        self.filter.gender = gender;
        self.refilter();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.refilter();
    }

    pub fn filter(&self) -> &RosterFilter {
        &self.filter
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn visible(&self) -> &[Employee] {
        &self.visible
    }

    pub fn into_visible(self) -> Vec<Employee> {
        self.visible
    }

    /// Counts over the whole roster, not just the visible rows.
    pub fn summary(&self) -> Summary {
        Summary::of(&self.employees)
    }

    pub fn delete(&mut self, store: &RecordStore, id: &str) -> Result<bool, StoreError> {
        let removed = store.delete(id);
        self.reload(store);
        removed
    }

    pub fn toggle_active(
        &mut self,
        store: &RecordStore,
        id: &str,
    ) -> Result<Option<bool>, StoreError> {
        let toggled = store.toggle_active(id);
        self.reload(store);
        toggled
    }

    fn refilter(&mut self) {
        self.visible = self
            .employees
            .iter()
            .filter(|emp| self.filter.matches(emp))
            .cloned()
            .collect();
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
