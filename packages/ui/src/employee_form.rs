use dioxus::prelude::*;
use records::{ContactKind, ContactMethod, EmployeeForm, SubmitState};

use crate::components::{Button, ButtonVariant, Label, TextField};
use crate::icons::{FaPlus, FaTrash};
use crate::Icon;

/// Name, address, and contact-method inputs bound to `form`.
///
/// Used by both the create and update views. Any edit moves a failed
/// submission back to editing.
#[component]
pub fn EmployeeFormFields(form: Signal<EmployeeForm>, status: Signal<SubmitState>) -> Element {
    let mut form = form;
    let mut status = status;
    let current = form();

    rsx! {
        TextField {
            id: "name",
            label: "Name",
            value: current.name.clone(),
            oninput: move |value: String| {
                form.write().name = value;
                status.write().edit();
            },
        }
        div {
            class: "field-grid",
            TextField {
                id: "address-line",
                label: "Address Line",
                value: current.address.line.clone(),
                oninput: move |value: String| {
                    form.write().address.line = value;
                    status.write().edit();
                },
            }
            TextField {
                id: "city",
                label: "City",
                value: current.address.city.clone(),
                oninput: move |value: String| {
                    form.write().address.city = value;
                    status.write().edit();
                },
            }
            TextField {
                id: "country",
                label: "Country",
                value: current.address.country.clone(),
                oninput: move |value: String| {
                    form.write().address.country = value;
                    status.write().edit();
                },
            }
            TextField {
                id: "zip_code",
                label: "ZIP Code",
                value: current.address.zip_code.clone(),
                oninput: move |value: String| {
                    form.write().address.zip_code = value;
                    status.write().edit();
                },
            }
        }

        div {
            class: "field",
            Label { html_for: "contact-methods", "Contact Methods" }
            div {
                id: "contact-methods",
                for (index, row) in current.contact_methods.iter().cloned().enumerate() {
                    ContactMethodInput {
                        key: "{index}",
                        row: row,
                        on_kind: move |kind: ContactKind| {
                            form.write().set_contact_kind(index, kind);
                            status.write().edit();
                        },
                        on_value: move |value: String| {
                            form.write().set_contact_value(index, value);
                            status.write().edit();
                        },
                        on_remove: move |_| {
                            form.write().remove_contact_method(index);
                            status.write().edit();
                        },
                    }
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| form.write().add_contact_method(),
                Icon { icon: FaPlus, width: 12, height: 12 }
                span { "Add Contact Method" }
            }
        }
    }
}

/// One editable contact-method row.
#[component]
fn ContactMethodInput(
    row: ContactMethod,
    on_kind: EventHandler<ContactKind>,
    on_value: EventHandler<String>,
    on_remove: EventHandler<()>,
) -> Element {
    let selected = row.contact_method.as_str().to_string();
    // A kind the store sent that the selector does not offer stays selectable.
    let unknown = match &row.contact_method {
        ContactKind::Other(other) => Some(other.clone()),
        _ => None,
    };
    let options: Vec<(String, String)> = ContactKind::SELECTABLE
        .iter()
        .map(|kind| (kind.as_str().to_string(), kind.label().to_string()))
        .chain(unknown.map(|other| (other.clone(), other)))
        .collect();

    rsx! {
        div {
            class: "contact-row",
            select {
                class: "field-input",
                onchange: move |evt: FormEvent| on_kind.call(ContactKind::from(evt.value())),
                for (value, label) in options {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: value == selected,
                        "{label}"
                    }
                }
            }
            input {
                class: "field-input",
                r#type: "text",
                placeholder: "Value",
                value: row.value,
                oninput: move |evt: FormEvent| on_value.call(evt.value()),
            }
            Button {
                variant: ButtonVariant::Danger,
                title: "Remove",
                onclick: move |_| on_remove.call(()),
                Icon { icon: FaTrash, width: 12, height: 12 }
                span { "Remove" }
            }
        }
    }
}
