mod home;
pub use home::Home;

mod add_employee;
pub use add_employee::AddEmployee;

mod employee_list;
pub use employee_list::EmployeeList;

mod employee_details;
pub use employee_details::EmployeeDetails;

mod employee_update;
pub use employee_update::EmployeeUpdate;
