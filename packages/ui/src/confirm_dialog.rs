use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Yes/no prompt that blocks the page underneath until answered.
///
/// Clicking the backdrop or pressing Escape counts as cancelling.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onclick: move |_| on_cancel.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_cancel.call(());
                }
            },
            div {
                class: "modal-card",
                role: "alertdialog",
                "aria-modal": "true",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                p { class: "modal-message", "{message}" }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
