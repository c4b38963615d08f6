//! Rows shown by the employee list view.

use serde::Deserialize;
use serde_json::Value;

use crate::models::Employee;

/// Field of the list response that holds the page of records.
pub const LIST_FIELD: &str = "data";

/// The records currently rendered by the list view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeeRows {
    rows: Vec<Employee>,
}

impl EmployeeRows {
    pub fn new(rows: Vec<Employee>) -> Self {
        Self { rows }
    }

    /// Extract the page from a list response body.
    ///
    /// Returns `None` when [`LIST_FIELD`] is absent or not an array; the
    /// caller treats that as an empty list rather than a failure. Elements
    /// that are not record objects are skipped.
    pub fn from_body(body: &Value) -> Option<Self> {
        let Some(Value::Array(items)) = body.get(LIST_FIELD) else {
            return None;
        };
        let rows = items
            .iter()
            .filter(|item| item.is_object())
            .filter_map(|item| Employee::deserialize(item).ok())
            .collect();
        Some(Self::new(rows))
    }

    /// Drop every row whose id is `id`. Returns how many rows were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.rows.len();
        self.rows.retain(|employee| employee.id != id);
        before - self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.rows.iter()
    }

    pub fn into_inner(self) -> Vec<Employee> {
        self.rows
    }
}

impl From<Vec<Employee>> for EmployeeRows {
    fn from(rows: Vec<Employee>) -> Self {
        Self::new(rows)
    }
}
