//! Helpers for driving views in a `VirtualDom` against a mock record store.

use std::time::Duration;

use api::{ApiConfig, EmployeeClient};
use dioxus::prelude::*;
use wiremock::MockServer;

pub fn client_for(server: &MockServer) -> EmployeeClient {
    EmployeeClient::new(ApiConfig::new(server.uri(), "proj-1", "env-1"))
}

/// Run `dom` until its HTML satisfies `done`, giving up after five seconds.
/// Returns the last rendering either way.
pub async fn render_until(dom: &mut VirtualDom, done: impl Fn(&str) -> bool) -> String {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let html = dioxus_ssr::render(dom);
        if done(&html) || tokio::time::Instant::now() >= deadline {
            return html;
        }
        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        dom.render_immediate_to_vec();
    }
}
