//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{
    create_employee, delete_employee, get_employee, list_employees, update_employee,
    use_employee_client,
};

mod timer;
pub use timer::{run_after, REDIRECT_DELAY};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod employee_form;
pub use employee_form::EmployeeFormFields;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;
