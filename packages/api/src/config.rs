//! Record store configuration from environment variables.
//!
//! Native builds read the process environment after loading `.env`. WASM builds
//! have no environment at runtime, so they fall back to the values present when
//! the crate was compiled.

use crate::error::ApiError;

pub const BASE_URL_VAR: &str = "EMPLOYEE_API_BASE_URL";
pub const PROJECT_ID_VAR: &str = "EMPLOYEE_PROJECT_ID";
pub const ENVIRONMENT_ID_VAR: &str = "EMPLOYEE_ENVIRONMENT_ID";

pub const DEFAULT_BASE_URL: &str = "https://free-ap-south-1.cosmocloud.io/development/api";

/// Where the record store lives and which tenant to address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub project_id: String,
    pub environment_id: String,
}

impl ApiConfig {
    pub fn new(
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        environment_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            environment_id: environment_id.into(),
        }
    }

    /// Load from `EMPLOYEE_*` variables.
    pub fn from_env() -> Result<Self, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| runtime_var(key).or_else(|| compiled_var(key).map(str::to_string)))
    }

    /// Build from an arbitrary key lookup. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let base_url = get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let project_id = get(PROJECT_ID_VAR).ok_or(ApiError::Config(PROJECT_ID_VAR))?;
        let environment_id =
            get(ENVIRONMENT_ID_VAR).ok_or(ApiError::Config(ENVIRONMENT_ID_VAR))?;

        Ok(Self::new(base_url, project_id, environment_id))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_key: &str) -> Option<String> {
    None
}

fn compiled_var(key: &str) -> Option<&'static str> {
    match key {
        BASE_URL_VAR => option_env!("EMPLOYEE_API_BASE_URL"),
        PROJECT_ID_VAR => option_env!("EMPLOYEE_PROJECT_ID"),
        ENVIRONMENT_ID_VAR => option_env!("EMPLOYEE_ENVIRONMENT_ID"),
        _ => None,
    }
}
