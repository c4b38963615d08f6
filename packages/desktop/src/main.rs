use dioxus::prelude::*;
use views::{AddEmployee, EmployeeDetails, EmployeeList, EmployeeUpdate, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/add-employee")]
    AddEmployee {},
    #[route("/employee-list")]
    EmployeeList {},
    #[route("/employee-details/:id")]
    EmployeeDetails { id: String },
    #[route("/employee-update/:id")]
    EmployeeUpdate { id: String },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::use_employee_client();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        Router::<Route> {}
    }
}
