use dioxus::prelude::*;
use records::{EmployeeForm, SubmitState};

use crate::components::{Banner, BannerVariant, Button, ButtonVariant};
use crate::icons::FaArrowLeft;
use crate::{create_employee, EmployeeFormFields, Icon};

const ADDED: &str = "Employee added successfully!";
const ADD_FAILED: &str = "Error adding employee. Please try again.";

/// Create-record form.
///
/// On success the form is cleared and a banner confirms the save; the user
/// stays on the page to add another record.
#[component]
pub fn AddEmployeeView(
    /// Called by the Back button. Platforms go back in history.
    on_back: EventHandler<()>,
) -> Element {
    let mut form = use_signal(EmployeeForm::new);
    let mut status = use_signal(SubmitState::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = form().to_draft();
        status.write().begin();
        spawn(async move {
            match create_employee(draft).await {
                Ok(()) => {
                    form.write().reset();
                    status.write().succeed(ADDED);
                }
                Err(e) => {
                    tracing::error!("Error adding employee: {e}");
                    status.write().fail(ADD_FAILED);
                }
            }
        });
    };

    let state = status();

    rsx! {
        div {
            class: "page page-centered",
            h1 { class: "page-title", "Add Employee" }
            form {
                class: "card form-card",
                onsubmit: handle_submit,

                if let Some(message) = state.success_message() {
                    Banner { variant: BannerVariant::Success, "{message}" }
                }
                if let Some(message) = state.error_message() {
                    Banner { variant: BannerVariant::Error, "{message}" }
                }

                EmployeeFormFields { form: form, status: status }

                Button {
                    variant: ButtonVariant::Primary,
                    submit: true,
                    class: "btn-block",
                    if state.is_submitting() { "Adding..." } else { "Add Employee" }
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
