use dioxus::prelude::*;
use records::{Employee, EmployeeRows};

use crate::components::{Banner, BannerVariant, Button, ButtonVariant};
use crate::icons::{FaArrowLeft, FaEye, FaPenToSquare, FaTrash};
use crate::{delete_employee, list_employees, ConfirmDialog, Icon};

const LOAD_FAILED: &str = "Failed to load employees. Please try again.";
const DELETE_FAILED: &str = "Failed to delete employee. Please try again.";
const CONFIRM_DELETE: &str = "Are you sure you want to delete this employee?";

/// First page of records, with per-row view, update, and delete actions.
///
/// A successful delete drops the row locally; the page is not fetched again.
#[component]
pub fn EmployeeListView(
    on_back: EventHandler<()>,
    /// Open the detail view for a record id.
    on_view: EventHandler<String>,
    /// Open the update view for a record id.
    on_edit: EventHandler<String>,
) -> Element {
    let mut rows = use_signal(EmployeeRows::default);
    let mut loading = use_signal(|| true);
    let mut error_message = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match list_employees().await {
            Ok(employees) => rows.set(EmployeeRows::new(employees)),
            Err(e) => {
                tracing::error!("Error fetching employees: {e}");
                error_message.set(Some(LOAD_FAILED.to_string()));
            }
        }
        loading.set(false);
    });

    let confirm_delete = move |_| {
        let Some(id) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        spawn(async move {
            match delete_employee(id.clone()).await {
                Ok(()) => {
                    rows.write().remove(&id);
                    error_message.set(None);
                }
                Err(e) => {
                    tracing::error!(%id, "Error deleting employee: {e}");
                    error_message.set(Some(DELETE_FAILED.to_string()));
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div {
                class: "page page-centered",
                p { class: "muted", "Loading..." }
            }
        };
    }

    let current = rows();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    span { "Back" }
                }
                h1 { class: "page-title", "EMPLOYEE LIST" }
            }

            if !current.is_empty() {
                p { class: "list-total", "Total Employees: {current.len()}" }
            }

            if let Some(message) = error_message() {
                Banner { variant: BannerVariant::Error, "{message}" }
            }

            if current.is_empty() {
                p { class: "muted", "No Employees in the system" }
            } else {
                ul {
                    class: "employee-list",
                    for employee in current.iter() {
                        EmployeeRow {
                            key: "{employee.id}",
                            employee: employee.clone(),
                            on_view: on_view,
                            on_edit: on_edit,
                            on_delete: move |id: String| pending_delete.set(Some(id)),
                        }
                    }
                }
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    message: CONFIRM_DELETE,
                    confirm_label: "Delete",
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn EmployeeRow(
    employee: Employee,
    on_view: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let id = employee.id.clone();
    let view_id = id.clone();
    let edit_id = id.clone();
    let delete_id = id.clone();

    rsx! {
        li {
            class: "card employee-row",
            div {
                class: "employee-row-header",
                h2 { class: "employee-name", "{employee.name}" }
                span { class: "muted small", "ID: {id}" }
            }
            div {
                class: "row-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_view.call(view_id.clone()),
                    Icon { icon: FaEye, width: 14, height: 14 }
                    span { "View Details" }
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                    span { "Delete" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    span { "Update" }
                }
            }
        }
    }
}
