use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::console;
use crate::core::models::{scalar_text, BackendHealth, RequirementAnalysis, TechStack};

pub const ENDPOINT_PROCESS_REQUIREMENT: &str = "/api/process-requirement";
pub const ENDPOINT_GENERATE_CODE: &str = "/api/generate-code";
pub const ENDPOINT_PUSH_GITHUB: &str = "/api/push-to-github";
pub const ENDPOINT_UPDATE_GITHUB_TOKEN: &str = "/api/update-github-token";
pub const ENDPOINT_HEALTH: &str = "/health";

/// Failure of a backend round trip. `Display` is the text shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected response from server (status {status}): {message}")]
    Decode { status: u16, message: String },
    #[error("{0}")]
    Rejected(String),
    #[error("Invalid response format: tasks array is missing")]
    MissingTasks,
    #[error("Invalid response format: tasks array holds non-text items")]
    NonTextTasks,
    #[error("Server responded with status {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Server responded with status {status}. Failed to parse error message.")]
    UnparsableError { status: u16 },
}

impl ApiError {
    /// True when the backend answered and explicitly said no.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }
}

#[derive(Debug, Serialize)]
struct RequirementRequest<'a> {
    requirement: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerateCodeRequest<'a> {
    tasks: &'a [String],
    project_type: &'a str,
}

#[derive(Debug, Serialize)]
struct PushRequest<'a> {
    #[serde(rename = "repoName")]
    repo_name: &'a str,
    tasks: &'a [String],
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProcessRequirementResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    tasks: Option<serde_json::Value>,
    #[serde(rename = "techStack", default)]
    tech_stack: Option<serde_json::Value>,
    #[serde(rename = "projectStructure", default)]
    project_structure: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PushResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(rename = "repoUrl", default)]
    repo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

fn rejected(error: Option<String>, fallback: &str) -> ApiError {
    ApiError::Rejected(
        error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string()),
    )
}

fn status_text(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("").to_string()
}

// The backend sends `success: false` bodies with 4xx/5xx codes, so the body is
// decoded whatever the status.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        console::error(&format!("Failed to decode response (status {}): {}", status, e));
        ApiError::Decode { status, message: e.to_string() }
    })
}

/// HTTP client for the planner backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        console::log(&format!("POST {} -> {}", path, response.status().as_u16()));
        Ok(response)
    }

    /// Ask the backend to break a requirement down into development tasks.
    pub async fn process_requirement(&self, requirement: &str) -> Result<RequirementAnalysis, ApiError> {
        let response = self
            .post(ENDPOINT_PROCESS_REQUIREMENT, &RequirementRequest { requirement })
            .await?;
        let data: ProcessRequirementResponse = decode(response).await?;

        if !data.success {
            return Err(rejected(data.error, "Failed to process requirement"));
        }

        let tasks = match data.tasks {
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .map(scalar_text)
                .collect::<Option<Vec<String>>>()
                .ok_or(ApiError::NonTextTasks)?,
            _ => return Err(ApiError::MissingTasks),
        };

        Ok(RequirementAnalysis {
            tasks,
            tech_stack: data.tech_stack.as_ref().and_then(TechStack::from_json),
            project_structure: data.project_structure.filter(|s| !s.is_empty()),
        })
    }

    /// Generate a project archive for the tasks. Returns the raw zip bytes.
    pub async fn generate_code(&self, tasks: &[String], project_type: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .post(ENDPOINT_GENERATE_CODE, &GenerateCodeRequest { tasks, project_type })
            .await?;

        let status = response.status();
        let is_archive = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/zip"))
            .unwrap_or(false);

        if status.is_success() && is_archive {
            let bytes = response.bytes().await?;
            console::log(&format!("Received project archive ({} bytes)", bytes.len()));
            return Ok(bytes.to_vec());
        }

        let body = response.text().await?;
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(ErrorBody { error: Some(message) }) if !message.is_empty() => Err(ApiError::Rejected(message)),
            Ok(_) => Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status_text(status),
            }),
            Err(e) => {
                console::error(&format!("Failed to parse error JSON: {}", e));
                console::error(&format!("Response status: {}", status.as_u16()));
                console::error(&format!("Response status text: {}", status_text(status)));
                Err(ApiError::UnparsableError { status: status.as_u16() })
            }
        }
    }

    /// Create a repository from the last generated project. Returns its URL.
    pub async fn push_to_github(&self, repo_name: &str, tasks: &[String]) -> Result<String, ApiError> {
        let response = self
            .post(ENDPOINT_PUSH_GITHUB, &PushRequest { repo_name, tasks })
            .await?;
        let data: PushResponse = decode(response).await?;

        match (data.success, data.repo_url) {
            (true, Some(url)) => Ok(url),
            (true, None) => Err(ApiError::Rejected("Backend did not return a repository URL".to_string())),
            (false, _) => Err(rejected(data.error, "Failed to push to GitHub")),
        }
    }

    /// Validate a GitHub token, registering it with the backend when valid.
    pub async fn update_github_token(&self, token: &str) -> Result<(), ApiError> {
        let response = self
            .post(ENDPOINT_UPDATE_GITHUB_TOKEN, &TokenRequest { token })
            .await?;
        let data: StatusResponse = decode(response).await?;

        if data.success {
            Ok(())
        } else {
            Err(rejected(data.error, "Failed to save settings"))
        }
    }

    pub async fn health(&self) -> Result<BackendHealth, ApiError> {
        let response = self.http.get(self.url(ENDPOINT_HEALTH)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status_text(status),
            });
        }
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;

    fn tasks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn process_requirement_returns_analysis() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", ENDPOINT_PROCESS_REQUIREMENT)
            .match_body(Matcher::Json(json!({ "requirement": "a todo app" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "success": true,
                    "tasks": ["Design schema", "Build API", "Write UI"],
                    "techStack": { "language": "python", "frameworks": ["fastapi", "react"] },
                    "projectStructure": "app/\n  main.py"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let analysis = client.process_requirement("a todo app").await.unwrap();

        assert_eq!(analysis.tasks, tasks(&["Design schema", "Build API", "Write UI"]));
        assert_eq!(analysis.language(), Some("python"));
        assert_eq!(analysis.project_structure.as_deref(), Some("app/\n  main.py"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn process_requirement_surfaces_backend_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", ENDPOINT_PROCESS_REQUIREMENT)
            .with_status(500)
            .with_body(json!({ "success": false, "error": "planner offline" }).to_string())
            .create_async()
            .await;

        let err = ApiClient::new(server.url()).process_requirement("x").await.unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "planner offline");
    }

    #[tokio::test]
    async fn process_requirement_without_error_text_uses_fallback() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", ENDPOINT_PROCESS_REQUIREMENT)
            .with_status(200)
            .with_body(r#"{"success": false}"#)
            .create_async()
            .await;

        let err = ApiClient::new(server.url()).process_requirement("x").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to process requirement");
    }

    #[tokio::test]
    async fn process_requirement_rejects_missing_or_non_list_tasks() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", ENDPOINT_PROCESS_REQUIREMENT)
            .match_body(Matcher::Json(json!({ "requirement": "missing" })))
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;
        server
            .mock("POST", ENDPOINT_PROCESS_REQUIREMENT)
            .match_body(Matcher::Json(json!({ "requirement": "string" })))
            .with_body(r#"{"success": true, "tasks": "do everything"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        for requirement in ["missing", "string"] {
            let err = client.process_requirement(requirement).await.unwrap_err();
            assert!(matches!(err, ApiError::MissingTasks), "{requirement}: {err:?}");
            assert!(!err.is_rejection());
        }
    }

    #[tokio::test]
    async fn process_requirement_stringifies_scalar_tasks() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", ENDPOINT_PROCESS_REQUIREMENT)
            .match_body(Matcher::Json(json!({ "requirement": "scalars" })))
            .with_body(r#"{"success": true, "tasks": ["Set up repo", 2, true]}"#)
            .create_async()
            .await;
        server
            .mock("POST", ENDPOINT_PROCESS_REQUIREMENT)
            .match_body(Matcher::Json(json!({ "requirement": "objects" })))
            .with_body(r#"{"success": true, "tasks": ["ok", {"title": "nested"}]}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let analysis = client.process_requirement("scalars").await.unwrap();
        assert_eq!(analysis.tasks, tasks(&["Set up repo", "2", "true"]));

        let err = client.process_requirement("objects").await.unwrap_err();
        assert!(matches!(err, ApiError::NonTextTasks), "{err:?}");
        assert_eq!(err.to_string(), "Invalid response format: tasks array holds non-text items");
    }

    #[tokio::test]
    async fn process_requirement_tolerates_mistyped_tech_stack() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", ENDPOINT_PROCESS_REQUIREMENT)
            .with_body(
                json!({
                    "success": true,
                    "tasks": ["a"],
                    "techStack": { "language": "python", "frameworks": "flask" }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let analysis = ApiClient::new(server.url()).process_requirement("x").await.unwrap();
        assert_eq!(analysis.tasks, tasks(&["a"]));
        assert_eq!(analysis.language(), Some("python"));
        assert_eq!(analysis.tech_stack.unwrap().frameworks, Vec::<String>::new());
    }

    #[tokio::test]
    async fn process_requirement_reports_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", ENDPOINT_PROCESS_REQUIREMENT)
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let err = ApiClient::new(server.url()).process_requirement("x").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { status: 502, .. }));
    }

    #[tokio::test]
    async fn generate_code_returns_archive_bytes() {
        let archive: Vec<u8> = vec![0x50, 0x4b, 0x03, 0x04, 0x01];
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", ENDPOINT_GENERATE_CODE)
            .match_body(Matcher::Json(json!({ "tasks": ["a", "b"], "project_type": "rust" })))
            .with_status(200)
            .with_header("content-type", "application/zip")
            .with_body(archive.clone())
            .create_async()
            .await;

        let bytes = ApiClient::new(server.url())
            .generate_code(&tasks(&["a", "b"]), "rust")
            .await
            .unwrap();

        assert_eq!(bytes, archive);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn generate_code_error_messages_follow_body_shape() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", ENDPOINT_GENERATE_CODE)
            .match_body(Matcher::PartialJson(json!({ "project_type": "json-error" })))
            .with_status(503)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": false, "error": "DevBot is not available"}"#)
            .create_async()
            .await;
        server
            .mock("POST", ENDPOINT_GENERATE_CODE)
            .match_body(Matcher::PartialJson(json!({ "project_type": "json-bare" })))
            .with_status(500)
            .with_body(r#"{"success": false}"#)
            .create_async()
            .await;
        server
            .mock("POST", ENDPOINT_GENERATE_CODE)
            .match_body(Matcher::PartialJson(json!({ "project_type": "html" })))
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;
        server
            .mock("POST", ENDPOINT_GENERATE_CODE)
            .match_body(Matcher::PartialJson(json!({ "project_type": "wrong-type" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let t = tasks(&["a"]);

        let err = client.generate_code(&t, "json-error").await.unwrap_err();
        assert_eq!(err.to_string(), "DevBot is not available");

        let err = client.generate_code(&t, "json-bare").await.unwrap_err();
        assert_eq!(err.to_string(), "Server responded with status 500: Internal Server Error");

        let err = client.generate_code(&t, "html").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Server responded with status 500. Failed to parse error message."
        );

        let err = client.generate_code(&t, "wrong-type").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 200, .. }));
    }

    #[tokio::test]
    async fn push_to_github_returns_repo_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", ENDPOINT_PUSH_GITHUB)
            .match_body(Matcher::Json(json!({ "repoName": "todo", "tasks": ["a"] })))
            .with_body(r#"{"success": true, "repoUrl": "https://github.com/me/todo"}"#)
            .create_async()
            .await;

        let url = ApiClient::new(server.url())
            .push_to_github("todo", &tasks(&["a"]))
            .await
            .unwrap();

        assert_eq!(url, "https://github.com/me/todo");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn push_to_github_failure_carries_backend_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", ENDPOINT_PUSH_GITHUB)
            .with_status(404)
            .with_body(r#"{"success": false, "error": "No files found to push"}"#)
            .create_async()
            .await;

        let err = ApiClient::new(server.url()).push_to_github("todo", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "No files found to push");
    }

    #[tokio::test]
    async fn update_github_token_accepts_and_rejects() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", ENDPOINT_UPDATE_GITHUB_TOKEN)
            .match_body(Matcher::Json(json!({ "token": "good" })))
            .with_body(r#"{"success": true, "message": "GitHub token updated successfully"}"#)
            .create_async()
            .await;
        server
            .mock("POST", ENDPOINT_UPDATE_GITHUB_TOKEN)
            .match_body(Matcher::Json(json!({ "token": "bad" })))
            .with_status(400)
            .with_body(r#"{"success": false, "error": "Invalid GitHub token. Please check your token and try again."}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        assert!(client.update_github_token("good").await.is_ok());

        let err = client.update_github_token("bad").await.unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(err.to_string(), "Invalid GitHub token. Please check your token and try again.");
    }

    #[tokio::test]
    async fn health_reports_service_flags() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", ENDPOINT_HEALTH)
            .with_body(r#"{"status": "healthy", "mongodb": false, "task_planner": true, "dev_bot": true, "github": false}"#)
            .create_async()
            .await;

        let health = ApiClient::new(server.url()).health().await.unwrap();
        assert_eq!(health.status, "healthy");
        assert!(health.task_planner && health.dev_bot);
        assert!(!health.mongodb && !health.github);
    }

    #[tokio::test]
    async fn transport_failure_is_not_a_rejection() {
        // Nothing listens on the discard port.
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.update_github_token("t").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.is_rejection());
    }

    #[test]
    fn base_url_is_normalized() {
        assert_eq!(
            ApiClient::new("http://host:8000/").url(ENDPOINT_HEALTH),
            "http://host:8000/health"
        );
    }
}
