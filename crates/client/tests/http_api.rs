//! Integration tests for the HTTP client against a mock backend.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use idea_board_client::{ClientError, HttpIdeaApi, IdeaApi};
use idea_board_protocol::{CloudProvider, NewIdea};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpIdeaApi {
    HttpIdeaApi::new(server.uri().parse().unwrap(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn list_ideas_parses_array_in_backend_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ideas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "content": "Newer idea", "created_at": "2024-01-02T00:00:00Z"},
            {"id": 1, "content": "Test idea 1", "created_at": "2024-01-01T00:00:00"},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let ideas = client_for(&server).list_ideas().await.unwrap();

    assert_eq!(ideas.len(), 2);
    assert_eq!(ideas[0].id, 2);
    assert_eq!(ideas[0].content, "Newer idea");
    assert_eq!(ideas[1].id, 1);
    assert_eq!(
        ideas[1].created_at,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn list_ideas_accepts_empty_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ideas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let ideas = client_for(&server).list_ideas().await.unwrap();
    assert!(ideas.is_empty());
}

#[tokio::test]
async fn list_ideas_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ideas"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_ideas().await.unwrap_err();
    assert_eq!(err, ClientError::Status { status: 500 });
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn list_ideas_rejects_non_array_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ideas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ideas": []})))
        .mount(&server)
        .await;

    let err = client_for(&server).list_ideas().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn list_ideas_rejects_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ideas"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_ideas().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn submit_idea_posts_trimmed_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ideas"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"content": "Solar kettle"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 7, "content": "Solar kettle", "created_at": "2024-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let idea = NewIdea::new("  Solar kettle \n").unwrap();
    client_for(&server).submit_idea(&idea).await.unwrap();
}

#[tokio::test]
async fn submit_idea_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ideas"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let idea = NewIdea::new("anything").unwrap();
    assert!(client_for(&server).submit_idea(&idea).await.is_ok());
}

#[tokio::test]
async fn submit_idea_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ideas"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let idea = NewIdea::new("anything").unwrap();
    let err = client_for(&server).submit_idea(&idea).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 422");
}

#[tokio::test]
async fn cloud_info_parses_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cloud-info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"cloud_provider": "gcp", "region": "europe-west1"})),
        )
        .mount(&server)
        .await;

    let info = client_for(&server).cloud_info().await.unwrap();
    assert_eq!(info.provider(), CloudProvider::Gcp);
    assert_eq!(info.region, "europe-west1");
}

#[tokio::test]
async fn cloud_info_reports_missing_endpoint() {
    let server = MockServer::start().await;

    let err = client_for(&server).cloud_info().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn requests_keep_base_path_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/board/api/ideas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/board", server.uri());
    let api = HttpIdeaApi::new(base.parse().unwrap(), Duration::from_secs(5)).unwrap();
    assert!(api.list_ideas().await.unwrap().is_empty());
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ideas"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let api = HttpIdeaApi::new(server.uri().parse().unwrap(), Duration::from_secs(1)).unwrap();
    let err = api.list_ideas().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Timeout {
            after: Duration::from_secs(1)
        }
    );
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let base = format!("http://127.0.0.1:{port}");
    let api = HttpIdeaApi::new(base.parse().unwrap(), Duration::from_secs(5)).unwrap();
    let err = api.list_ideas().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }), "got {err:?}");
    assert!(!err.to_string().is_empty());
}
