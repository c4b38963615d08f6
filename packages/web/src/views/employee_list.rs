use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn EmployeeList() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::EmployeeListView {
            on_back: move |_: ()| {
                nav.push(Route::Home {});
            },
            on_view: move |id: String| {
                nav.push(Route::EmployeeDetails { id });
            },
            on_edit: move |id: String| {
                nav.push(Route::EmployeeUpdate { id });
            },
        }
    }
}
