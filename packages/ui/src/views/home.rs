use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaUserPlus, FaUsers};
use crate::Icon;

/// Landing menu.
#[component]
pub fn HomeView(on_add: EventHandler<()>, on_list: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "page page-centered",
            div {
                class: "card home-card",
                h1 { class: "page-title", "Employee Management System" }
                div {
                    class: "stack",
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "btn-large",
                        onclick: move |_| on_add.call(()),
                        Icon { icon: FaUserPlus, width: 16, height: 16 }
                        span { "Add Employee" }
                    }
                    Button {
                        variant: ButtonVariant::Success,
                        class: "btn-large",
                        onclick: move |_| on_list.call(()),
                        Icon { icon: FaUsers, width: 16, height: 16 }
                        span { "Employee List" }
                    }
                }
            }
        }
    }
}
