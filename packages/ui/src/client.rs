//! Shared client constructor and the record store calls views make.
//!
//! A call uses the [`api::EmployeeClient`] provided through context when there
//! is one, otherwise it builds a fresh client from the environment, so a
//! configuration problem surfaces as the failure of that one call.

use api::{ApiError, Employee, EmployeeClient, EmployeeDraft};
use dioxus::prelude::{provide_context, try_consume_context, use_hook};

/// Share one client with every view below the caller.
///
/// Without configuration nothing is provided and each call reports the
/// error itself.
pub fn use_employee_client() {
    use_hook(|| match EmployeeClient::from_env() {
        Ok(client) => {
            provide_context(client);
        }
        Err(e) => tracing::warn!("record store client not configured: {e}"),
    });
}

fn make_client() -> Result<EmployeeClient, ApiError> {
    match try_consume_context::<EmployeeClient>() {
        Some(client) => Ok(client),
        None => EmployeeClient::from_env(),
    }
}

pub async fn create_employee(draft: EmployeeDraft) -> Result<(), ApiError> {
    make_client()?.create(&draft).await
}

pub async fn list_employees() -> Result<Vec<Employee>, ApiError> {
    make_client()?.list().await
}

pub async fn get_employee(id: String) -> Result<Employee, ApiError> {
    make_client()?.get(&id).await
}

pub async fn update_employee(id: String, draft: EmployeeDraft) -> Result<(), ApiError> {
    make_client()?.update(&id, &draft).await
}

pub async fn delete_employee(id: String) -> Result<(), ApiError> {
    make_client()?.delete(&id).await
}
