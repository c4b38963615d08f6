use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn EmployeeDetails(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::EmployeeDetailView {
            id: id,
            on_back: move |_: ()| {
                nav.push(Route::EmployeeList {});
            },
        }
    }
}
