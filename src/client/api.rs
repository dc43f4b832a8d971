use reqwest::Client;
use serde_json::json;

use crate::core::Task;

/// The remote calls the sync controller routes through while the backend is
/// reachable. Errors are plain strings: the controller treats every remote
/// failure the same way, so nothing finer-grained is needed.
#[allow(async_fn_in_trait)]
pub trait RemoteApi {
    async fn fetch(&self) -> Result<Vec<Task>, String>;
    async fn create(&self, name: &str, description: &str) -> Result<Task, String>;
    async fn delete(&self, id: u64) -> Result<(), String>;
}

/// HTTP client for the todo API.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// `base_url` includes the `/api` prefix, e.g. `http://127.0.0.1:3000/api`.
    pub fn new(base_url: &str) -> Result<Self, String> {
        let http = Client::builder()
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }
}

impl RemoteApi for ApiClient {
    async fn fetch(&self) -> Result<Vec<Task>, String> {
        let url = format!("{}/todos", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("GET failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(format!("GET {} returned {}", url, resp.status()));
        }

        resp.json()
            .await
            .map_err(|e| format!("Failed to read todo list: {}", e))
    }

    async fn create(&self, name: &str, description: &str) -> Result<Task, String> {
        let url = format!("{}/todos", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&json!({ "name": name, "description": description }))
            .send()
            .await
            .map_err(|e| format!("POST failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(format!("POST {} returned {}", url, resp.status()));
        }

        resp.json()
            .await
            .map_err(|e| format!("Failed to read created todo: {}", e))
    }

    async fn delete(&self, id: u64) -> Result<(), String> {
        let url = format!("{}/todos/{}", self.base_url, id);
        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| format!("DELETE failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(format!("DELETE {} returned {}", url, resp.status()));
        }

        Ok(())
    }
}
