//! Route components. Each wraps a shared view from `ui` and maps its
//! callbacks onto the desktop router.

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

#[component]
pub fn AddEmployee() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::AddEmployeeView {
            on_back: move |_: ()| nav.go_back(),
        }
    }
}

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
