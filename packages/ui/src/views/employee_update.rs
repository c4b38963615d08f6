use dioxus::prelude::*;
use records::{EmployeeDraft, EmployeeForm, SubmitState};

use crate::components::{Banner, BannerVariant, Button, ButtonVariant};
use crate::icons::FaArrowLeft;
use crate::{get_employee, run_after, update_employee, EmployeeFormFields, Icon, REDIRECT_DELAY};

const UPDATED: &str = "Employee updated successfully!";
const UPDATE_FAILED: &str = "Failed to update employee.";
const LOAD_FAILED: &str = "Failed to load employee details.";

/// Edit form for an existing record.
///
/// Seeds the form from the store, then overwrites the whole record on submit.
/// After a successful save the success banner stays up for
/// [`REDIRECT_DELAY`] before `on_saved` fires.
#[component]
pub fn EmployeeUpdateView(
    id: String,
    on_back: EventHandler<()>,
    /// Called once the post-save delay has elapsed.
    on_saved: EventHandler<()>,
) -> Element {
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut form = use_signal(EmployeeForm::new);
    let mut status = use_signal(SubmitState::default);
    let mut load_error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            match get_employee(id.clone()).await {
                Ok(employee) => {
                    form.set(EmployeeForm::from_employee(&employee));
                    load_error.set(None);
                }
                Err(e) => {
                    tracing::error!(%id, "Error fetching employee details: {e}");
                    load_error.set(Some(LOAD_FAILED.to_string()));
                }
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        status.write().begin();
        spawn(save_employee(id_signal(), form().to_draft(), status, on_saved));
    };

    let state = status();

    rsx! {
        div {
            class: "page page-centered",
            div {
                class: "card form-card form-card-wide",
                h1 { class: "page-title", "Update Employee Details" }
                form {
                    onsubmit: handle_submit,

                    if let Some(message) = state.success_message() {
                        Banner { variant: BannerVariant::Success, "{message}" }
                    }
                    if let Some(message) = state.error_message() {
                        Banner { variant: BannerVariant::Error, "{message}" }
                    }
                    if let Some(message) = load_error() {
                        Banner { variant: BannerVariant::Error, "{message}" }
                    }

                    EmployeeFormFields { form: form, status: status }

                    Button {
                        variant: ButtonVariant::Primary,
                        submit: true,
                        class: "btn-block",
                        if state.is_submitting() { "Updating..." } else { "Update" }
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    class: "btn-back",
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    span { "Back" }
                }
            }
        }
    }
}

/// Overwrite record `id`, then fire `on_saved` once the success banner has
/// been up for [`REDIRECT_DELAY`]. A failed save never fires it.
async fn save_employee(
    id: String,
    draft: EmployeeDraft,
    mut status: Signal<SubmitState>,
    on_saved: EventHandler<()>,
) {
    match update_employee(id.clone(), draft).await {
        Ok(()) => {
            status.write().succeed(UPDATED);
            run_after(REDIRECT_DELAY, move || on_saved.call(())).await;
        }
        Err(e) => {
            tracing::error!(%id, "Error updating employee: {e}");
            status.write().fail(UPDATE_FAILED);
        }
    }
}
