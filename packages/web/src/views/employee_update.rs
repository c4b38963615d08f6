use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn EmployeeUpdate(id: String) -> Element {
    let nav = use_navigator();

    let navigate_list = move |_: ()| {
        nav.push(Route::EmployeeList {});
    };

    rsx! {
        ui::views::EmployeeUpdateView {
            id: id,
            on_back: navigate_list,
            on_saved: navigate_list,
        }
    }
}
