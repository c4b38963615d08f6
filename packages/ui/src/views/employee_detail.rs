use dioxus::prelude::*;
use records::{ContactMethod, Employee, LoadState};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaArrowLeft, FaEnvelope, FaPhone};
use crate::{get_employee, Icon};

const LOAD_FAILED: &str = "Failed to load employee details. Please try again.";

/// Read-only view of one record.
///
/// Shows a loading line until the fetch settles. A failed fetch is terminal:
/// only the error message is rendered.
#[component]
pub fn EmployeeDetailView(id: String, on_back: EventHandler<()>) -> Element {
    // Track the id in a signal so the fetch re-runs when the route param changes
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut employee = use_signal(LoadState::<Employee>::default);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            employee.set(LoadState::Loading);
            match get_employee(id.clone()).await {
                Ok(found) => employee.set(LoadState::Ready(found)),
                Err(e) => {
                    tracing::error!(%id, "Error fetching employee details: {e}");
                    employee.set(LoadState::Failed(LOAD_FAILED.to_string()));
                }
            }
        }
    });

    match employee() {
        LoadState::Loading => rsx! {
            div { class: "page muted", "Loading..." }
        },
        LoadState::Failed(message) => rsx! {
            div { class: "page error-text", "{message}" }
        },
        LoadState::Ready(found) => {
            let address = found.address_or_default();
            let contacts = found.contact_methods_or_default().to_vec();

            rsx! {
                div {
                    class: "page page-centered",
                    div {
                        class: "card detail-card",
                        div {
                            class: "page-header",
                            h1 { class: "page-title", "Employee Details" }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| on_back.call(()),
                                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                                span { "Back" }
                            }
                        }
                        div {
                            class: "card-inner",
                            h2 { class: "employee-name", "{found.name}" }
                            p {
                                strong { "Address: " }
                                "{address}"
                            }
                            p { strong { "Contact Methods:" } }
                            ul {
                                class: "contact-list",
                                for (index, contact) in contacts.into_iter().enumerate() {
                                    ContactLine { key: "{index}", contact: contact }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Email and phone become links; other kinds render as plain `kind: value`.
#[component]
fn ContactLine(contact: ContactMethod) -> Element {
    let kind = contact.contact_method.clone();

    match kind.link_scheme() {
        Some(scheme) => rsx! {
            li {
                if scheme == "mailto" {
                    Icon { icon: FaEnvelope, width: 12, height: 12 }
                } else {
                    Icon { icon: FaPhone, width: 12, height: 12 }
                }
                span { class: "contact-kind", "{kind.label()}:" }
                a {
                    class: "contact-link",
                    href: "{scheme}:{contact.value}",
                    "{contact.value}"
                }
            }
        },
        None => rsx! {
            li { "{kind}: {contact.value}" }
        },
    }
}
