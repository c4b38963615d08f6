//! Uncommitted form state shared by the create and update views.

use crate::models::{Address, ContactKind, ContactMethod, Employee, EmployeeDraft};

/// Editable employee fields before they are submitted.
///
/// Contact methods are edited by index. Rows may be left half-filled while
/// editing; [`EmployeeForm::to_draft`] drops them when building the body.
#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeForm {
    pub name: String,
    pub address: Address,
    pub contact_methods: Vec<ContactMethod>,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: Address::default(),
            contact_methods: vec![blank_row()],
        }
    }
}

fn blank_row() -> ContactMethod {
    ContactMethod::new(ContactKind::Email, "")
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the form from a stored record.
    ///
    /// A missing address becomes empty fields. Missing contact methods become
    /// a single blank row; a present but empty list stays empty.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            address: employee.address_or_default(),
            contact_methods: employee
                .contact_methods
                .clone()
                .unwrap_or_else(|| vec![blank_row()]),
        }
    }

    /// Append a blank `EMAIL` row.
    pub fn add_contact_method(&mut self) {
        self.contact_methods.push(blank_row());
    }

    pub fn remove_contact_method(&mut self, index: usize) {
        if index < self.contact_methods.len() {
            self.contact_methods.remove(index);
        }
    }

    pub fn set_contact_kind(&mut self, index: usize, kind: ContactKind) {
        if let Some(row) = self.contact_methods.get_mut(index) {
            row.contact_method = kind;
        }
    }

    pub fn set_contact_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.contact_methods.get_mut(index) {
            row.value = value.into();
        }
    }

    /// Build the request body, keeping only complete contact rows in order.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            address: self.address.clone(),
            contact_methods: self
                .contact_methods
                .iter()
                .filter(|row| row.is_complete())
                .cloned()
                .collect(),
        }
    }

    /// Return every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
