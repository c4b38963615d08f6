//! # HTTP client for the employee record store
//!
//! [`EmployeeClient`] issues exactly one request per call. There is no retry,
//! no caching, and no timeout beyond what the HTTP stack applies by default.
//!
//! Every request carries the two tenant headers ([`PROJECT_ID_HEADER`],
//! [`ENVIRONMENT_ID_HEADER`]). Any status outside `2xx` becomes
//! [`ApiError::Status`]; a request that never completes becomes
//! [`ApiError::Transport`].

use reqwest::{Method, RequestBuilder, Response};
use serde_json::Value;

use records::{Employee, EmployeeDraft, EmployeeRows};

use crate::config::ApiConfig;
use crate::error::ApiError;

pub const PROJECT_ID_HEADER: &str = "projectId";
pub const ENVIRONMENT_ID_HEADER: &str = "environmentId";

/// Page size of the list call.
pub const PAGE_LIMIT: u32 = 10;
/// Offset of the list call.
pub const PAGE_OFFSET: u32 = 0;

const COLLECTION: &str = "emp";

/// Client for the `/emp` collection of the record store.
#[derive(Clone, Debug)]
pub struct EmployeeClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl EmployeeClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(ApiConfig::from_env()?))
    }

    /// Create a record from `draft`.
    pub async fn create(&self, draft: &EmployeeDraft) -> Result<(), ApiError> {
        let request = self.request(Method::POST, self.collection_url()).json(draft);
        self.send(request).await?;
        tracing::info!(name = %draft.name, "created employee");
        Ok(())
    }

    /// Fetch the first page of records.
    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        self.list_page(PAGE_LIMIT, PAGE_OFFSET).await
    }

    /// Fetch one page of records.
    ///
    /// A body whose list field is not an array yields an empty page.
    pub async fn list_page(&self, limit: u32, offset: u32) -> Result<Vec<Employee>, ApiError> {
        let url = format!("{}?limit={limit}&offset={offset}", self.collection_url());
        let response = self.send(self.request(Method::GET, url)).await?;
        let body: Value = response.json().await?;

        match EmployeeRows::from_body(&body) {
            Some(rows) => Ok(rows.into_inner()),
            None => {
                tracing::warn!(%body, "list response has no record array, showing none");
                Ok(Vec::new())
            }
        }
    }

    /// Fetch one record by id.
    pub async fn get(&self, id: &str) -> Result<Employee, ApiError> {
        let response = self.send(self.request(Method::GET, self.record_url(id))).await?;
        Ok(response.json().await?)
    }

    /// Overwrite the record `id` with `draft`.
    pub async fn update(&self, id: &str, draft: &EmployeeDraft) -> Result<(), ApiError> {
        let request = self.request(Method::PUT, self.record_url(id)).json(draft);
        self.send(request).await?;
        tracing::info!(%id, "updated employee");
        Ok(())
    }

    /// Delete the record `id`.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let request = self
            .request(Method::DELETE, self.record_url(id))
            .json(&serde_json::json!({}));
        self.send(request).await?;
        tracing::info!(%id, "deleted employee");
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}/{COLLECTION}", self.config.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{id}", self.collection_url())
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        tracing::debug!(%method, %url, "record store request");
        self.http
            .request(method, url)
            .header(PROJECT_ID_HEADER, &self.config.project_id)
            .header(ENVIRONMENT_ID_HEADER, &self.config.environment_id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use records::{Address, ContactKind, ContactMethod};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> EmployeeClient {
        EmployeeClient::new(ApiConfig::new(server.uri(), "proj-1", "env-1"))
    }

    fn jane() -> EmployeeDraft {
        EmployeeDraft {
            name: "Jane".to_string(),
            address: Address {
                line: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                country: "US".to_string(),
                zip_code: "00001".to_string(),
            },
            contact_methods: vec![ContactMethod::new(ContactKind::Email, "jane@x.com")],
        }
    }

    #[tokio::test]
    async fn test_create_posts_exact_body_with_tenant_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emp"))
            .and(header(PROJECT_ID_HEADER, "proj-1"))
            .and(header(ENVIRONMENT_ID_HEADER, "env-1"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "name": "Jane",
                "address": {"line": "1 Main St", "city": "Springfield", "country": "US", "zip_code": "00001"},
                "contact_methods": [{"contact_method": "EMAIL", "value": "jane@x.com"}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "new-id"})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).create(&jane()).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_rejected_by_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emp"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad payload"))
            .mount(&server)
            .await;

        let err = client_for(&server).create(&jane()).await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "bad payload");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_reads_first_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/emp"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "0"))
            .and(header(ENVIRONMENT_ID_HEADER, "env-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"_id": "1", "name": "Ada"},
                    {"_id": "2", "name": "Grace", "contact_methods": []}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let employees = client_for(&server).list().await.unwrap();
        let ids: Vec<_> = employees.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[tokio::test]
    async fn test_list_skips_unreadable_elements() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/emp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"_id": "1", "name": null},
                    "not a record",
                    {"_id": "2", "name": "Grace", "address": {"zip_code": 12345}}
                ]
            })))
            .mount(&server)
            .await;

        let employees = client_for(&server).list().await.unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].address_or_default().zip_code, "12345");
    }

    #[tokio::test]
    async fn test_list_without_array_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/emp"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "oops"})))
            .mount(&server)
            .await;

        assert!(client_for(&server).list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_one_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/emp/abc"))
            .and(header(PROJECT_ID_HEADER, "proj-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_id": "abc",
                "name": "Jane",
                "address": {"line": "1 Main St", "city": "Springfield", "country": "US", "zip_code": "00001"},
                "contact_methods": [{"contact_method": "PHONE", "value": "555-0100"}]
            })))
            .mount(&server)
            .await;

        let employee = client_for(&server).get("abc").await.unwrap();
        assert_eq!(employee.id, "abc");
        assert_eq!(employee.name, "Jane");
        assert_eq!(
            employee.contact_methods_or_default()[0].contact_method,
            ContactKind::Phone
        );
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/emp/nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).get("nope").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_get_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/emp/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get("abc").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_update_puts_full_record() {
        let server = MockServer::start().await;
        let mut draft = jane();
        draft.contact_methods.clear();

        Mock::given(method("PUT"))
            .and(path("/emp/abc"))
            .and(header(PROJECT_ID_HEADER, "proj-1"))
            .and(header(ENVIRONMENT_ID_HEADER, "env-1"))
            .and(body_json(serde_json::to_value(&draft).unwrap()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).update("abc", &draft).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/emp/abc"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).update("abc", &jane()).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_delete_sends_empty_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/emp/abc"))
            .and(header(ENVIRONMENT_ID_HEADER, "env-1"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).delete("abc").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_failure() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/emp/abc"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&server)
            .await;

        let err = client_for(&server).delete("abc").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let client = EmployeeClient::new(ApiConfig::new("http://127.0.0.1:1", "p", "e"));
        let err = client.get("abc").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
