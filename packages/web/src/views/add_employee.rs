use dioxus::prelude::*;

#[component]
pub fn AddEmployee() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::AddEmployeeView {
            on_back: move |_: ()| nav.go_back(),
        }
    }
}
