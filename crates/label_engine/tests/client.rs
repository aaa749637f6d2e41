use std::time::Duration;

use label_engine::{
    ClientError, ClientSettings, FailureKind, LabelClient, LabelRequest, PreviewLabels,
    ReqwestLabelClient, Url,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(text: &str) -> LabelRequest {
    LabelRequest {
        text: text.to_string(),
        include_full_label: true,
        include_small_label: false,
    }
}

fn client_for(server: &MockServer) -> ReqwestLabelClient {
    client_with(server, |_| {})
}

fn client_with(server: &MockServer, tweak: impl FnOnce(&mut ClientSettings)) -> ReqwestLabelClient {
    let mut settings = ClientSettings::new(Url::parse(&server.uri()).unwrap());
    tweak(&mut settings);
    ReqwestLabelClient::new(settings).expect("client builds")
}

#[tokio::test]
async fn preview_posts_wrapped_request_and_parses_labels() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/previewLabels"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "data": {
                "text": "Flour\n\nSugar",
                "shouldPrintFullLabel": true,
                "shouldPrintSmallLabel": false
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "full_labels": ["data:image/png;base64,AAA", "data:image/png;base64,BBB"],
            "small_labels": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let labels = client_for(&server)
        .preview_labels(&request("Flour\n\nSugar"))
        .await
        .expect("preview ok");

    assert_eq!(
        labels,
        PreviewLabels {
            full_labels: vec![
                Some("data:image/png;base64,AAA".to_string()),
                Some("data:image/png;base64,BBB".to_string()),
            ],
            small_labels: Vec::new(),
            error: None,
        }
    );
}

#[tokio::test]
async fn preview_accepts_error_body_with_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/previewLabels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "boom" })))
        .mount(&server)
        .await;

    let labels = client_for(&server)
        .preview_labels(&request("A"))
        .await
        .expect("error body still parses");

    assert_eq!(labels.error.as_deref(), Some("boom"));
    assert!(labels.full_labels.is_empty());
    assert!(labels.small_labels.is_empty());
}

#[tokio::test]
async fn preview_tolerates_null_entries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/previewLabels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "full_labels": ["f0", null, "f2"],
            "small_labels": ["s0"]
        })))
        .mount(&server)
        .await;

    let labels = client_for(&server)
        .preview_labels(&request("A\n\nB"))
        .await
        .expect("preview ok");

    assert_eq!(labels.full_labels[1], None);
    assert_eq!(labels.full_labels[2].as_deref(), Some("f2"));
}

#[tokio::test]
async fn preview_reports_server_error_body_on_failure_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/previewLabels"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Input is empty!",
            "stack_trace": "Traceback ..."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .preview_labels(&request(""))
        .await
        .unwrap_err();

    assert_eq!(err, ClientError::ServerReported("Input is empty!".to_string()));
    assert_eq!(err.kind(), FailureKind::ServerReported);
    assert_eq!(err.to_string(), "Input is empty!");
}

#[tokio::test]
async fn preview_fails_on_http_status_without_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/previewLabels"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .preview_labels(&request("A"))
        .await
        .unwrap_err();

    assert_eq!(err, ClientError::HttpStatus(500));
    assert_eq!(err.kind(), FailureKind::Network);
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn preview_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/previewLabels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .preview_labels(&request("A"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
    assert_eq!(err.kind(), FailureKind::Parse);
}

#[tokio::test]
async fn preview_rejects_wrong_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/previewLabels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "full_labels": 3 })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .preview_labels(&request("A"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Parse);
}

#[tokio::test]
async fn preview_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/previewLabels"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "full_labels": [], "small_labels": [] })),
        )
        .mount(&server)
        .await;

    let client = client_with(&server, |settings| {
        settings.request_timeout = Duration::from_millis(50);
    });
    let err = client.preview_labels(&request("A")).await.unwrap_err();

    assert_eq!(err, ClientError::Timeout);
    assert_eq!(err.kind(), FailureKind::Network);
}

#[tokio::test]
async fn preview_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/previewLabels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"full_labels\":[]}"))
        .mount(&server)
        .await;

    let client = client_with(&server, |settings| settings.max_bytes = 8);
    let err = client.preview_labels(&request("A")).await.unwrap_err();

    assert!(matches!(err, ClientError::TooLarge { max_bytes: 8, .. }));
}

#[tokio::test]
async fn print_returns_arbitrary_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/printLabels"))
        .and(body_json(json!({
            "data": {
                "text": "Rice",
                "shouldPrintFullLabel": true,
                "shouldPrintSmallLabel": false
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "Labels printed successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server)
        .print_labels(&request("Rice"))
        .await
        .expect("print ok");

    assert_eq!(value, json!({ "status": "Labels printed successfully" }));
}

#[tokio::test]
async fn print_failure_status_uses_error_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/printLabels"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Printer not found. Please check the USB connection."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .print_labels(&request("Rice"))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Printer not found. Please check the USB connection."
    );
}

#[tokio::test]
async fn unreachable_server_is_network_failure() {
    // Port 9 (discard) is closed on test hosts.
    let settings = ClientSettings {
        connect_timeout: Duration::from_millis(200),
        ..ClientSettings::new(Url::parse("http://127.0.0.1:9").unwrap())
    };
    let client = ReqwestLabelClient::new(settings).expect("client builds");

    let err = client.print_labels(&request("Rice")).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Network);
}
