use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::HomeView {
            on_add: move |_: ()| {
                nav.push(Route::AddEmployee {});
            },
            on_list: move |_: ()| {
                nav.push(Route::EmployeeList {});
            },
        }
    }
}
