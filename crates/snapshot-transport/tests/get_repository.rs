use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
use serde_json::json;
use snapshot_core::config::ClientConfig;
use snapshot_core::{Arguments, Client, Error, GetRepositoryRequest};
use snapshot_transport::HttpTransport;

fn client_for(server: &Server) -> Client<HttpTransport> {
    let config = ClientConfig {
        url: server.url("/").to_string(),
        timeout_secs: Some(5),
        ..ClientConfig::default()
    };
    Client::new(HttpTransport::new(&config).unwrap())
}

#[test]
fn fetches_named_repositories() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/_snapshot/a,b"),
            request::query(url_decoded(contains(("master_timeout", "30s")))),
            request::query(url_decoded(contains(("local", "true")))),
        ])
        .respond_with(json_encoded(json!({
            "a": { "type": "fs", "settings": { "location": "/mnt/a" } },
            "b": { "type": "fs", "settings": { "location": "/mnt/b" } }
        }))),
    );

    let body = client_for(&server)
        .snapshot()
        .get_repository(
            Arguments::new()
                .with("repository", json!(["a", "b"]))
                .with("master_timeout", "30s")
                .with("local", true),
        )
        .unwrap();
    assert_eq!(body["a"]["type"], "fs");
    assert_eq!(body["b"]["settings"]["location"], "/mnt/b");
}

#[test]
fn fetches_all_repositories() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/_snapshot"))
            .respond_with(json_encoded(json!({}))),
    );

    let body = client_for(&server)
        .snapshot()
        .get_repository_with(&GetRepositoryRequest::new())
        .unwrap();
    assert_eq!(body, json!({}));
}

#[test]
fn escaped_names_reach_the_server() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/_snapshot/my%20repo"))
            .respond_with(json_encoded(json!({ "my repo": { "type": "url" } }))),
    );

    let body = client_for(&server)
        .snapshot()
        .get_repository(Arguments::new().with("repository", "my repo"))
        .unwrap();
    assert_eq!(body["my repo"]["type"], "url");
}

#[test]
fn not_found_is_raised_by_default() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/_snapshot/missing")).respond_with(
            status_code(404).body(r#"{"error":{"type":"repository_missing_exception"},"status":404}"#),
        ),
    );

    let err = client_for(&server)
        .snapshot()
        .get_repository(Arguments::new().with("repository", "missing"))
        .unwrap_err();
    match err {
        Error::NotFound { body } => {
            assert_eq!(body["error"]["type"], "repository_missing_exception");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ignored_not_found_returns_server_body() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/_snapshot/missing"))
            .respond_with(status_code(404).body(r#"{"status":404}"#)),
    );

    let body = client_for(&server)
        .snapshot()
        .get_repository(
            Arguments::new()
                .with("repository", "missing")
                .with("ignore", json!([404])),
        )
        .unwrap();
    assert_eq!(body, json!({ "status": 404 }));
}

#[test]
fn server_errors_are_not_masked_by_ignore() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/_snapshot/a"))
            .respond_with(status_code(500).body("boom")),
    );

    let err = client_for(&server)
        .snapshot()
        .get_repository(
            Arguments::new()
                .with("repository", "a")
                .with("ignore", 404),
        )
        .unwrap_err();
    match err {
        Error::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, json!("boom"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_parameter_sends_nothing() {
    let server = Server::run();

    let err = client_for(&server)
        .snapshot()
        .get_repository(Arguments::new().with("pretty", true))
        .unwrap_err();
    assert!(matches!(err, Error::UnrecognizedParameter { .. }));
}

#[test]
fn connection_failure_is_a_transport_error() {
    let config = ClientConfig {
        url: "http://127.0.0.1:1".to_string(),
        timeout_secs: Some(2),
        ..ClientConfig::default()
    };
    let client = Client::new(HttpTransport::new(&config).unwrap());
    let err = client
        .snapshot()
        .get_repository(Arguments::new().with("ignore", 404))
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn dot_segment_names_never_reach_the_server() {
    let server = Server::run();
    let client = client_for(&server);

    for repository in [".", ".."] {
        let err = client
            .snapshot()
            .get_repository(Arguments::new().with("repository", repository))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}
