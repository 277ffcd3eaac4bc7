//! Wire-level tests for the API client layer.
//!
//! Uses a single-request stub HTTP server on a loopback socket so the tests
//! can assert what actually went over the wire (method, path, headers, body),
//! and a dead loopback port to simulate transport failure for the fallback
//! policies.

#[cfg(test)]
mod api_tests {
    use std::sync::{Arc, Mutex};

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    use crate::api::certificates::{self, CertificateIdMode};
    use crate::api::client::ApiClient;
    use crate::api::error::ApiError;
    use crate::api::types::{Favorite, UserSettings};
    use crate::api::{favorites, placements, settings};
    use crate::storage::{ProfileStore, StoreError};

    // ── In-memory profile store ──────────────────────────────────────────

    struct MemoryStore {
        token: Option<String>,
        display_name: Option<String>,
        theme: Mutex<Option<String>>,
    }

    impl MemoryStore {
        fn signed_in(token: &str, display_name: &str) -> Arc<Self> {
            Arc::new(Self {
                token: Some(token.to_string()),
                display_name: Some(display_name.to_string()),
                theme: Mutex::new(None),
            })
        }

        fn anonymous() -> Arc<Self> {
            Arc::new(Self {
                token: None,
                display_name: None,
                theme: Mutex::new(None),
            })
        }
    }

    impl ProfileStore for MemoryStore {
        fn token(&self) -> Option<String> {
            self.token.clone()
        }

        fn display_name(&self) -> Option<String> {
            self.display_name.clone()
        }

        fn theme_preference(&self) -> Option<String> {
            self.theme.lock().unwrap().clone()
        }

        fn set_theme_preference(&self, theme: &str) -> Result<(), StoreError> {
            *self.theme.lock().unwrap() = Some(theme.to_string());
            Ok(())
        }
    }

    // ── Stub HTTP server ─────────────────────────────────────────────────

    /// Request captured by the stub server before it answered.
    struct CapturedRequest {
        method: String,
        path: String,
        headers: Vec<String>,
        body: String,
    }

    impl CapturedRequest {
        /// Case-insensitive header lookup, returning the value.
        fn header(&self, name: &str) -> Option<&str> {
            let prefix = format!("{}:", name.to_ascii_lowercase());
            self.headers
                .iter()
                .find(|line| line.to_ascii_lowercase().starts_with(&prefix))
                .and_then(|line| line.split_once(':'))
                .map(|(_, value)| value.trim())
        }
    }

    fn find_blank_line(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|window| window == b"\r\n\r\n")
    }

    /// Serve exactly one request with a canned response, capturing the
    /// request for later assertions. Returns the base URL and the capture
    /// channel.
    async fn serve_once(
        status_line: &'static str,
        response_body: String,
    ) -> (String, oneshot::Receiver<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];

            // Read until the end of headers
            let head_end = loop {
                if let Some(pos) = find_blank_line(&buf) {
                    break pos + 4;
                }
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    return;
                }
                buf.extend_from_slice(&chunk[..n]);
            };

            let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);

            // Read the rest of the body if the client declared one
            while buf.len() < head_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let mut lines = head.lines();
            let start_line = lines.next().unwrap_or_default();
            let mut parts = start_line.split_whitespace();
            let method = parts.next().unwrap_or_default().to_string();
            let path = parts.next().unwrap_or_default().to_string();
            let headers: Vec<String> = lines.map(str::to_string).collect();
            let body = String::from_utf8_lossy(&buf[head_end..]).to_string();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                response_body.len(),
                response_body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            let _ = tx.send(CapturedRequest {
                method,
                path,
                headers,
                body,
            });
        });

        (format!("http://{}", addr), rx)
    }

    /// Base URL pointing at a loopback port with nothing listening, so every
    /// request fails at the transport level.
    async fn refused_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    // ── Auth header injection ────────────────────────────────────────────

    #[tokio::test]
    async fn bearer_header_attached_when_token_present() {
        let (base_url, captured) = serve_once("200 OK", "[]".to_string()).await;
        let client = ApiClient::new(&base_url, MemoryStore::signed_in("tok-123", "Ada"));

        favorites::get_user_favorites(&client, "u1").await.unwrap();

        let request = captured.await.unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/favorites/u1");
        assert_eq!(request.header("authorization"), Some("Bearer tok-123"));
        assert_eq!(request.header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn no_auth_header_when_token_absent() {
        let (base_url, captured) = serve_once("200 OK", "[]".to_string()).await;
        let client = ApiClient::new(&base_url, MemoryStore::anonymous());

        favorites::get_user_favorites(&client, "u1").await.unwrap();

        let request = captured.await.unwrap();
        assert_eq!(request.header("authorization"), None);
    }

    // ── Certificates ─────────────────────────────────────────────────────

    const COURSE_LIST: &str = r#"[
        {"id":1,"title":"Rust Basics","instructor":"Ada","progressPercentage":100},
        {"id":2,"title":"Async Rust","progressPercent":1},
        {"id":3,"title":"Macros","progressPercentage":42},
        {"id":4,"title":"Lifetimes","progressPercent":0.5}
    ]"#;

    #[tokio::test]
    async fn certificates_cover_both_progress_scales() {
        let (base_url, captured) = serve_once("200 OK", COURSE_LIST.to_string()).await;
        let client = ApiClient::new(&base_url, MemoryStore::signed_in("tok", "Ada Lovelace"));

        let certs = certificates::get_user_certificates(&client).await.unwrap();

        let request = captured.await.unwrap();
        assert_eq!(request.path, "/user/courses");

        let ids: Vec<u64> = certs.iter().map(|c| c.course_id).collect();
        assert_eq!(ids, vec![1, 2]);
        for cert in &certs {
            assert_eq!(cert.user_name, "Ada Lovelace");
            assert_eq!(cert.progress_percentage, 100.0);
            assert!(cert.certificate_id.starts_with(&format!("CERT-{}-", cert.course_id)));
        }
    }

    #[tokio::test]
    async fn certificates_stable_id_mode_omits_timestamp() {
        let (base_url, _captured) = serve_once("200 OK", COURSE_LIST.to_string()).await;
        let client = ApiClient::new(&base_url, MemoryStore::signed_in("tok", "Ada"))
            .with_certificate_id_mode(CertificateIdMode::Stable);

        let certs = certificates::get_user_certificates(&client).await.unwrap();
        assert_eq!(certs[0].certificate_id, "CERT-1");
        assert_eq!(certs[1].certificate_id, "CERT-2");
    }

    #[tokio::test]
    async fn certificates_resolve_empty_on_transport_failure() {
        let client = ApiClient::new(&refused_base_url().await, MemoryStore::anonymous());
        let certs = certificates::get_user_certificates(&client).await.unwrap();
        assert!(certs.is_empty());
    }

    // ── Placements ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn placements_parse_backend_listing() {
        let listing = r#"[{"id":7,"title":"SRE","company":"Acme","location":"Remote",
            "salary":"$100k","type":"Contract","postedDate":"2025-08-01",
            "description":"On call"}]"#;
        let (base_url, captured) = serve_once("200 OK", listing.to_string()).await;
        let client = ApiClient::new(&base_url, MemoryStore::anonymous());

        let jobs = placements::get_placement_jobs(&client).await.unwrap();

        assert_eq!(captured.await.unwrap().path, "/placements");
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, 7);
        assert_eq!(jobs[0].job_type, "Contract");
    }

    #[tokio::test]
    async fn placements_fall_back_to_sample_jobs() {
        let client = ApiClient::new(&refused_base_url().await, MemoryStore::anonymous());

        let jobs = placements::get_placement_jobs(&client).await.unwrap();

        assert_eq!(jobs, placements::sample_jobs());
        assert_eq!(jobs[0].id, 1);
        assert_eq!(jobs[0].title, "Frontend Developer");
        assert_eq!(jobs[1].id, 2);
        assert_eq!(jobs[1].title, "Backend Developer");
    }

    // ── Settings ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn settings_fall_back_to_defaults() {
        let client = ApiClient::new(&refused_base_url().await, MemoryStore::anonymous());

        let current = settings::get_user_settings(&client).await.unwrap();

        assert!(!current.account_settings.two_factor_enabled);
        assert_eq!(current.display_settings.theme, "light");
        assert_eq!(current, UserSettings::default());
    }

    #[tokio::test]
    async fn settings_update_puts_full_object() {
        let mut desired = UserSettings::default();
        desired.display_settings.theme = "dark".to_string();
        desired.account_settings.email = "ada@learnhub.test".to_string();

        let echo = serde_json::to_string(&desired).unwrap();
        let (base_url, captured) = serve_once("200 OK", echo).await;
        let client = ApiClient::new(&base_url, MemoryStore::signed_in("tok", "Ada"));

        let stored = settings::update_user_settings(&client, &desired).await.unwrap();

        let request = captured.await.unwrap();
        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "/user/settings");

        let sent: UserSettings = serde_json::from_str(&request.body).unwrap();
        assert_eq!(sent, desired);
        assert_eq!(sent.display_settings.theme, "dark");
        assert_eq!(stored, desired);
    }

    // ── Favorites ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn check_is_favorite_reads_flag() {
        let (base_url, captured) = serve_once("200 OK", r#"{"isFavorite":true}"#.to_string()).await;
        let client = ApiClient::new(&base_url, MemoryStore::signed_in("tok", "Ada"));

        let favorited = favorites::check_is_favorite(&client, "u1", 7).await.unwrap();

        assert!(favorited);
        assert_eq!(captured.await.unwrap().path, "/favorites/u1/check/7");
    }

    #[tokio::test]
    async fn check_is_favorite_resolves_false_on_failure() {
        let client = ApiClient::new(&refused_base_url().await, MemoryStore::anonymous());
        let favorited = favorites::check_is_favorite(&client, "u1", 7).await.unwrap();
        assert!(!favorited);
    }

    #[tokio::test]
    async fn toggle_when_favorited_dispatches_remove() {
        let (base_url, captured) = serve_once("200 OK", "{}".to_string()).await;
        let client = ApiClient::new(&base_url, MemoryStore::signed_in("tok", "Ada"));

        let outcome = favorites::toggle_favorite(&client, "u1", 7, true).await.unwrap();

        let request = captured.await.unwrap();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/favorites/u1/remove/7");
        assert!(outcome.success);
        assert!(!outcome.is_favorite);
        assert!(outcome.data.is_none());
    }

    #[tokio::test]
    async fn toggle_when_not_favorited_dispatches_add() {
        let created = r#"{"userId":"u1","courseId":7}"#;
        let (base_url, captured) = serve_once("200 OK", created.to_string()).await;
        let client = ApiClient::new(&base_url, MemoryStore::signed_in("tok", "Ada"));

        let outcome = favorites::toggle_favorite(&client, "u1", 7, false).await.unwrap();

        let request = captured.await.unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/favorites/u1/add/7");
        assert!(outcome.success);
        assert!(outcome.is_favorite);
        assert_eq!(
            outcome.data,
            Some(Favorite {
                user_id: "u1".to_string(),
                course_id: 7,
            })
        );
    }

    #[tokio::test]
    async fn favorites_listing_propagates_status_errors() {
        let (base_url, _captured) =
            serve_once("500 Internal Server Error", "boom".to_string()).await;
        let client = ApiClient::new(&base_url, MemoryStore::signed_in("tok", "Ada"));

        let listed = favorites::get_user_favorites(&client, "u1").await;

        match listed {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected status error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn user_ids_are_path_encoded() {
        let (base_url, captured) = serve_once("200 OK", "[]".to_string()).await;
        let client = ApiClient::new(&base_url, MemoryStore::signed_in("tok", "Ada"));

        favorites::get_user_favorites(&client, "user one").await.unwrap();

        assert_eq!(captured.await.unwrap().path, "/favorites/user%20one");
    }
}
