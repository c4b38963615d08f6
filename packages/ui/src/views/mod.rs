mod home;
pub use home::HomeView;

mod add_employee;
pub use add_employee::AddEmployeeView;

mod employee_list;
pub use employee_list::EmployeeListView;

mod employee_detail;
pub use employee_detail::EmployeeDetailView;

mod employee_update;
pub use employee_update::EmployeeUpdateView;

#[cfg(test)]
mod testing;
