pub mod form;
pub mod list;
pub mod models;
pub mod state;

pub use form::EmployeeForm;
pub use list::{EmployeeRows, LIST_FIELD};
pub use models::{Address, ContactKind, ContactMethod, Employee, EmployeeDraft};
pub use state::{LoadState, SubmitState};
