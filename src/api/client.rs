//! The sync API client.
//!
//! One authenticated-request primitive carries every call: it sets the
//! JSON content type, attaches `Authorization: Bearer <token>` when a
//! session exists, and normalizes responses. Non-success statuses become
//! [`PomoError::Api`] carrying the server's `message` field when the body
//! is JSON, or the raw body text otherwise. A 204, an empty body, or a
//! non-JSON content type is a void success.
//!
//! The domain methods below are thin: path, verb, and payload shaping
//! only. No retries, no request queue, no cancellation.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::api::credentials::{Credentials, SessionStore};
use crate::api::types::{
    BlockedSiteRequest, FocusSessionRequest, LoginRequest, LoginResponse, RegisterRequest,
};
use crate::config::ApiConfig;
use crate::error::PomoError;

/// Fallback message when an error body yields nothing usable.
const GENERIC_REQUEST_ERROR: &str = "API request failed";

/// Characters escaped when a value is embedded in a URL path segment.
/// Matches the alphanumerics plus `- _ . ! ~ * ' ( )` left bare by
/// JavaScript's `encodeURIComponent`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Client for the pomo sync API.
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
    token: Option<String>,
    http: HttpClient,
}

impl ApiClient {
    /// Create a client against the configured base URL, picking up any
    /// stored session token.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be read.
    pub fn new(config: &ApiConfig) -> Result<Self, PomoError> {
        let session = SessionStore::new()?;
        Self::with_session(config.base_url.clone(), session)
    }

    /// Create a client with an explicit session store (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be read.
    pub fn with_session(base_url: String, session: SessionStore) -> Result<Self, PomoError> {
        let token = session.load()?.map(|c| c.token);

        Ok(Self {
            base_url,
            session,
            token,
            http: HttpClient::new(),
        })
    }

    /// The stored session credentials, if logged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be read.
    pub fn credentials(&self) -> Result<Option<Credentials>, PomoError> {
        self.session.load()
    }

    /// Send a request and normalize the response.
    fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, PomoError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.body(serde_json::to_string(body)?);
        }

        let response = request.send()?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let text = response.text()?;

        interpret_response(status, content_type.as_deref(), &text)
    }

    // --- auth ---

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<Value>, PomoError> {
        let body = serde_json::to_value(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })?;
        self.request(Method::POST, "/auth/register", Some(&body))
    }

    /// Log in with a username or email.
    ///
    /// On success the returned token and username are persisted as the
    /// session, and subsequent requests from this client carry the token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server rejects the
    /// credentials, or the response is missing the token.
    pub fn login(&mut self, login_id: &str, password: &str) -> Result<LoginResponse, PomoError> {
        let body = serde_json::to_value(LoginRequest {
            login_id: login_id.to_string(),
            password: password.to_string(),
        })?;

        let value = self
            .request(Method::POST, "/auth/login", Some(&body))?
            .ok_or_else(|| {
                PomoError::UnexpectedResponse("Login returned an empty body".to_string())
            })?;
        let response: LoginResponse = serde_json::from_value(value)?;

        self.session.save(&Credentials {
            token: response.token.clone(),
            username: response.username.clone(),
        })?;
        self.token = Some(response.token.clone());

        Ok(response)
    }

    /// Log out. Clears the local session only; no server call is made.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be removed.
    pub fn logout(&mut self) -> Result<(), PomoError> {
        self.session.clear()?;
        self.token = None;
        Ok(())
    }

    // --- task records ---

    /// Fetch all task records.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn list_tasks(&self) -> Result<Option<Value>, PomoError> {
        self.request(Method::GET, "/PomodoroTasks", None)
    }

    /// Create a task record. The record shape is server-defined.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn create_task(&self, record: &Value) -> Result<Option<Value>, PomoError> {
        self.request(Method::POST, "/PomodoroTasks", Some(record))
    }

    /// Replace the task record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn update_task(&self, id: &str, record: &Value) -> Result<Option<Value>, PomoError> {
        self.request(Method::PUT, &format!("/PomodoroTasks/{id}"), Some(record))
    }

    /// Delete the task record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn delete_task(&self, id: &str) -> Result<Option<Value>, PomoError> {
        self.request(Method::DELETE, &format!("/PomodoroTasks/{id}"), None)
    }

    // --- pomodoro sessions ---

    /// Start a pomodoro session with the given settings payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn start_session(&self, settings: &Value) -> Result<Option<Value>, PomoError> {
        self.request(Method::POST, "/PomodoroSessions", Some(settings))
    }

    /// End the pomodoro session with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn end_session(&self, id: &str) -> Result<Option<Value>, PomoError> {
        self.request(Method::PUT, &format!("/PomodoroSessions/{id}"), None)
    }

    /// Fetch all pomodoro sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn list_sessions(&self) -> Result<Option<Value>, PomoError> {
        self.request(Method::GET, "/PomodoroSessions", None)
    }

    // --- focus sessions ---

    /// Start a focus session with the given goals.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn start_focus(&self, goals: &str) -> Result<Option<Value>, PomoError> {
        let body = serde_json::to_value(FocusSessionRequest {
            goals: goals.to_string(),
        })?;
        self.request(Method::POST, "/FocusSessions", Some(&body))
    }

    /// End the focus session with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn end_focus(&self, id: &str) -> Result<Option<Value>, PomoError> {
        self.request(Method::PUT, &format!("/FocusSessions/{id}"), None)
    }

    /// Fetch the blocked-site list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn blocked_sites(&self) -> Result<Option<Value>, PomoError> {
        self.request(Method::GET, "/BlockedSites", None)
    }

    /// Add a site to the blocked list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn add_blocked_site(&self, site: &str) -> Result<Option<Value>, PomoError> {
        let body = serde_json::to_value(BlockedSiteRequest {
            site: site.to_string(),
        })?;
        self.request(Method::POST, "/BlockedSites", Some(&body))
    }

    /// Remove a site from the blocked list. The site value is encoded
    /// into the request path.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn remove_blocked_site(&self, site: &str) -> Result<Option<Value>, PomoError> {
        let encoded = encode_path_segment(site);
        self.request(Method::DELETE, &format!("/BlockedSites/{encoded}"), None)
    }

    // --- stats ---

    /// Fetch overall user statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn user_stats(&self) -> Result<Option<Value>, PomoError> {
        self.request(Method::GET, "/UserStats", None)
    }

    /// Fetch today's statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn daily_stats(&self) -> Result<Option<Value>, PomoError> {
        self.request(Method::GET, "/UserStats/daily", None)
    }

    /// Fetch this week's statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects it.
    pub fn weekly_stats(&self) -> Result<Option<Value>, PomoError> {
        self.request(Method::GET, "/UserStats/weekly", None)
    }
}

/// Percent-encode a value for use as a URL path segment.
fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Apply the response-normalization contract to a received response.
fn interpret_response(
    status: StatusCode,
    content_type: Option<&str>,
    body: &str,
) -> Result<Option<Value>, PomoError> {
    if !status.is_success() {
        let message = match serde_json::from_str::<Value>(body) {
            Ok(parsed) => parsed
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(|| GENERIC_REQUEST_ERROR.to_string(), ToString::to_string),
            Err(_) => {
                if body.is_empty() {
                    GENERIC_REQUEST_ERROR.to_string()
                } else {
                    body.to_string()
                }
            }
        };

        return Err(PomoError::Api {
            status: status.as_u16(),
            message,
        });
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    match content_type {
        Some(ct) if ct.contains("application/json") => {}
        _ => return Ok(None),
    }

    if body.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(body)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_with_json_message() {
        let err = interpret_response(
            StatusCode::BAD_REQUEST,
            Some("application/json"),
            r#"{"message":"X"}"#,
        )
        .unwrap_err();

        match err {
            PomoError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "X");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_with_non_json_body() {
        let err =
            interpret_response(StatusCode::INTERNAL_SERVER_ERROR, Some("text/plain"), "Y")
                .unwrap_err();

        match err {
            PomoError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Y");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_with_json_body_without_message_field() {
        let err = interpret_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            Some("application/json"),
            r#"{"detail":"nope"}"#,
        )
        .unwrap_err();

        match err {
            PomoError::Api { message, .. } => assert_eq!(message, GENERIC_REQUEST_ERROR),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_with_empty_body() {
        let err = interpret_response(StatusCode::UNAUTHORIZED, None, "").unwrap_err();

        match err {
            PomoError::Api { message, .. } => assert_eq!(message, GENERIC_REQUEST_ERROR),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_no_content_yields_none() {
        let result = interpret_response(StatusCode::NO_CONTENT, None, "").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_content_type_yields_none() {
        let result = interpret_response(StatusCode::OK, None, "ignored").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_non_json_content_type_yields_none() {
        let result = interpret_response(StatusCode::OK, Some("text/html"), "<p>hi</p>").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_json_body_yields_none() {
        let result = interpret_response(StatusCode::OK, Some("application/json"), "").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_json_body_is_parsed() {
        let result = interpret_response(StatusCode::OK, Some("application/json"), r#"{"a":1}"#)
            .unwrap()
            .unwrap();
        assert_eq!(result, json!({"a":1}));
    }

    #[test]
    fn test_encode_path_segment_matches_uri_component_rules() {
        assert_eq!(encode_path_segment("example.com"), "example.com");
        assert_eq!(
            encode_path_segment("https://example.com/ads"),
            "https%3A%2F%2Fexample.com%2Fads"
        );
        assert_eq!(encode_path_segment("a b&c"), "a%20b%26c");
    }

    mod http {
        use super::*;
        use crate::api::credentials::{Credentials, SessionStore};
        use tempfile::TempDir;
        use tokio::runtime::Runtime;
        use wiremock::matchers::{body_json, header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        /// Runtime for driving the mock server; the client under test
        /// stays blocking and runs on the test thread.
        fn runtime() -> Runtime {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap()
        }

        fn logged_in_client(dir: &TempDir, base_url: String, token: &str) -> ApiClient {
            let session = SessionStore::at_path(dir.path().join("session.json"));
            session
                .save(&Credentials {
                    token: token.to_string(),
                    username: "alice".to_string(),
                })
                .unwrap();
            ApiClient::with_session(base_url, session).unwrap()
        }

        fn anonymous_client(dir: &TempDir, base_url: String) -> ApiClient {
            let session = SessionStore::at_path(dir.path().join("session.json"));
            ApiClient::with_session(base_url, session).unwrap()
        }

        #[test]
        fn test_bearer_token_attached_when_logged_in() {
            let rt = runtime();
            let server = rt.block_on(MockServer::start());
            rt.block_on(
                Mock::given(method("GET"))
                    .and(path("/PomodoroTasks"))
                    .and(header("Authorization", "Bearer tok-1"))
                    .and(header("Content-Type", "application/json"))
                    .respond_with(
                        ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])),
                    )
                    .mount(&server),
            );

            let dir = TempDir::new().unwrap();
            let client = logged_in_client(&dir, server.uri(), "tok-1");

            let tasks = client.list_tasks().unwrap().unwrap();
            assert_eq!(tasks[0]["id"], 1);
        }

        #[test]
        fn test_login_persists_session() {
            let rt = runtime();
            let server = rt.block_on(MockServer::start());
            rt.block_on(
                Mock::given(method("POST"))
                    .and(path("/auth/login"))
                    .and(body_json(json!({"loginId": "alice", "password": "pw"})))
                    .respond_with(ResponseTemplate::new(200).set_body_json(
                        json!({"token": "tok-2", "username": "alice"}),
                    ))
                    .mount(&server),
            );

            let dir = TempDir::new().unwrap();
            let mut client = anonymous_client(&dir, server.uri());

            let response = client.login("alice", "pw").unwrap();
            assert_eq!(response.token, "tok-2");

            let stored = client.credentials().unwrap().unwrap();
            assert_eq!(stored.token, "tok-2");
            assert_eq!(stored.username, "alice");
        }

        #[test]
        fn test_logout_clears_session_without_server_call() {
            // No mocks mounted: any request would fail the test.
            let rt = runtime();
            let server = rt.block_on(MockServer::start());

            let dir = TempDir::new().unwrap();
            let mut client = logged_in_client(&dir, server.uri(), "tok-3");

            client.logout().unwrap();
            assert!(client.credentials().unwrap().is_none());
        }

        #[test]
        fn test_server_error_message_surfaces() {
            let rt = runtime();
            let server = rt.block_on(MockServer::start());
            rt.block_on(
                Mock::given(method("POST"))
                    .and(path("/auth/register"))
                    .respond_with(ResponseTemplate::new(409).set_body_json(
                        json!({"message": "Username already taken"}),
                    ))
                    .mount(&server),
            );

            let dir = TempDir::new().unwrap();
            let client = anonymous_client(&dir, server.uri());

            let err = client.register("alice", "a@example.com", "pw").unwrap_err();
            match err {
                PomoError::Api { status, message } => {
                    assert_eq!(status, 409);
                    assert_eq!(message, "Username already taken");
                }
                other => panic!("expected Api error, got {other:?}"),
            }
        }

        #[test]
        fn test_delete_with_no_content_response() {
            let rt = runtime();
            let server = rt.block_on(MockServer::start());
            rt.block_on(
                Mock::given(method("DELETE"))
                    .and(path("/PomodoroTasks/9"))
                    .respond_with(ResponseTemplate::new(204))
                    .mount(&server),
            );

            let dir = TempDir::new().unwrap();
            let client = logged_in_client(&dir, server.uri(), "tok-4");

            assert!(client.delete_task("9").unwrap().is_none());
        }
    }
}
