use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "field-label",
            r#for: html_for,
            {children}
        }
    }
}

/// Labelled single-line text input. Required unless told otherwise, which is
/// the only validation forms perform before submitting.
#[component]
pub fn TextField(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = true)] required: bool,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "{label}" }
            input {
                id: "{id}",
                class: "field-input",
                r#type: "text",
                value: value,
                required: required,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}
