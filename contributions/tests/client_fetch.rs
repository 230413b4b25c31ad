//! End-to-end pipeline tests against a local mock of the GraphQL endpoint.

use contributions::{ContributionsError, Credentials, GithubClient, TransportError};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> GithubClient {
    let credentials = Credentials::new("test-token", "octocat").unwrap();
    GithubClient::with_endpoint(credentials, format!("{}/graphql", server.uri()))
}

fn fixture_body() -> Value {
    json!({
        "data": {
            "user": {
                "contributionsCollection": {
                    "contributionCalendar": {
                        "totalContributions": 8,
                        "weeks": [
                            { "contributionDays": [
                                { "date": "2024-01-01", "contributionCount": 5 },
                                { "date": "2024-01-02", "contributionCount": 0 },
                            ]},
                            { "contributionDays": [
                                { "date": "2024-01-08", "contributionCount": 3 },
                            ]},
                        ],
                    }
                }
            }
        }
    })
}

#[tokio::test]
async fn fetches_and_normalizes_a_calendar() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Authorization", "bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "variables": {
                "login": "octocat",
                "from": "2024-01-01T00:00:00",
                "to": "2024-12-31T23:59:59",
            },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture_body()))
        .expect(1)
        .mount(&server)
        .await;

    let calendar = test_client(&server)
        .fetch_contribution_calendar(2024)
        .await
        .unwrap();

    assert_eq!(calendar.total_contributions, 8);
    assert_eq!(calendar.weeks.len(), 2);
    assert_eq!(calendar.weeks[0].contribution_days.len(), 2);
    assert_eq!(calendar.weeks[1].contribution_days.len(), 1);
    assert_eq!(calendar.weeks[0].contribution_days[1].contribution_count, 0);
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let server = MockServer::start().await;

    // Non-JSON body: a status failure must be reported before any parsing.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_contribution_calendar(2024)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ContributionsError::Transport(TransportError::Status(500))
    ));
}

#[tokio::test]
async fn unauthorized_is_reported_with_its_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials",
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_contribution_calendar(2024)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ContributionsError::Transport(TransportError::Status(401))
    ));
}

#[tokio::test]
async fn graphql_errors_surface_the_first_message_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [
                { "message": "Could not resolve to a User with the login of 'nobody'." },
                { "message": "a second error that is dropped" },
            ],
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_contribution_calendar(2024)
        .await
        .unwrap_err();

    match err {
        ContributionsError::RemoteApi(message) => {
            assert_eq!(
                message,
                "Could not resolve to a User with the login of 'nobody'."
            );
        }
        other => panic!("expected RemoteApi, got {other:?}"),
    }
}

#[tokio::test]
async fn unexpected_body_shape_is_a_schema_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_contribution_calendar(2024)
        .await
        .unwrap_err();

    match err {
        ContributionsError::SchemaValidation(message) => {
            assert_eq!(message, "missing field: data.user");
        }
        other => panic!("expected SchemaValidation, got {other:?}"),
    }
}

#[tokio::test]
async fn repeated_fetches_yield_structurally_equal_calendars() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture_body()))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let first = client.fetch_contribution_calendar(2024).await.unwrap();
    let second = client.fetch_contribution_calendar(2024).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    let credentials = Credentials::new("test-token", "octocat").unwrap();
    // Nothing listens on port 1.
    let client = GithubClient::with_endpoint(credentials, "http://127.0.0.1:1/graphql");

    let err = client.fetch_contribution_calendar(2024).await.unwrap_err();

    assert!(matches!(
        err,
        ContributionsError::Transport(TransportError::Network(_))
    ));
}
