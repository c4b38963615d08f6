//! # API crate: client for the remote employee-record store
//!
//! Every view in the web and desktop frontends talks to the record store through
//! this crate. It owns the HTTP surface, the configuration that identifies the
//! tenant, and the error type views collapse into their user-facing messages.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`EmployeeClient`]: one method per CRUD call, tenant headers attached to every request |
//! | [`config`] | [`ApiConfig`]: base URL and tenant identifiers from the environment (runtime or compile time) |
//! | [`error`] | [`ApiError`]: configuration, transport, status, and decode failures |
//!
//! ## Calls
//!
//! | Method | HTTP |
//! |--------|------|
//! | [`EmployeeClient::create`] | `POST /emp` |
//! | [`EmployeeClient::list`] | `GET /emp?limit=10&offset=0` |
//! | [`EmployeeClient::get`] | `GET /emp/{id}` |
//! | [`EmployeeClient::update`] | `PUT /emp/{id}` |
//! | [`EmployeeClient::delete`] | `DELETE /emp/{id}` |

pub mod client;
pub mod config;
pub mod error;

pub use client::EmployeeClient;
pub use config::ApiConfig;
pub use error::ApiError;

pub use records::{Address, ContactKind, ContactMethod, Employee, EmployeeDraft};
