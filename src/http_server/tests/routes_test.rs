use crate::classification_service::tests::fixture::Fixture as ServiceFixture;
use crate::http_server::tests::fixture::Fixture;
use crate::image_classifier::tests::fixture::sample_png;
use axum::http::StatusCode;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;

fn encoded_png() -> String {
    STANDARD.encode(sample_png([40, 160, 80]))
}

#[tokio::test]
async fn test_health_with_model() {
    let f = Fixture::new();

    let (status, body) = f.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model_loaded"], true);
}

#[tokio::test]
async fn test_health_degraded() {
    let f = Fixture::degraded();

    let (status, body) = f.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn test_classify_plain_base64() {
    let f = Fixture::new();

    let (status, body) = f
        .post_json("/classify", json!({ "image": encoded_png() }).to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["category"].is_string());
    assert!(body["disposal"].is_string());
    assert!(body["bin_color"].is_string());
    let confidence = body["confidence"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&confidence));
}

#[tokio::test]
async fn test_classify_data_url() {
    let f = Fixture::new();
    let data_url = format!("data:image/png;base64,{}", encoded_png());

    let (status, with_header) = f
        .post_json("/classify", json!({ "image": data_url }).to_string())
        .await;
    let (_, plain) = f
        .post_json("/classify", json!({ "image": encoded_png() }).to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(with_header, plain);
}

#[tokio::test]
async fn test_classify_maps_disposal() {
    // cardboard, glass, metal, organic, paper, plastic, trash
    let f = Fixture::with_scores(vec![0.02, 0.02, 0.02, 0.9, 0.02, 0.01, 0.01]);

    let (status, body) = f
        .post_json("/classify", json!({ "image": encoded_png() }).to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "organic");
    assert_eq!(body["disposal"], "Compost");
    assert_eq!(body["bin_color"], "Green");
    assert!((body["confidence"].as_f64().unwrap() - 0.9).abs() < 1e-6);
}

#[tokio::test]
async fn test_classify_empty_image() {
    let f = Fixture::new();

    let (status, body) = f
        .post_json("/classify", json!({ "image": "" }).to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No image provided");
}

#[tokio::test]
async fn test_classify_missing_image_field() {
    let f = Fixture::new();

    let (status, body) = f.post_json("/classify", json!({}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No image provided");
}

#[tokio::test]
async fn test_classify_malformed_json() {
    let f = Fixture::new();

    let (status, body) = f.post_json("/classify", "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_classify_wrong_field_type_is_bad_request() {
    let f = Fixture::new();

    let (status, body) = f
        .post_json("/classify", json!({ "image": 42 }).to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_classify_invalid_base64() {
    let f = Fixture::new();

    let (status, body) = f
        .post_json("/classify", json!({ "image": "@@@" }).to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid base64 image data"));
}

#[tokio::test]
async fn test_classify_not_an_image() {
    let f = Fixture::new();
    let encoded = STANDARD.encode(b"plain text, not pixels");

    let (status, body) = f
        .post_json("/classify", json!({ "image": encoded }).to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid image"));
}

#[tokio::test]
async fn test_classify_degraded_is_server_error() {
    let f = Fixture::degraded();

    let (status, body) = f
        .post_json("/classify", json!({ "image": encoded_png() }).to_string())
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Model not loaded");
}

#[tokio::test]
async fn test_classify_line_wrapped_base64() {
    let f = Fixture::new();
    let encoded = encoded_png();
    let wrapped = encoded
        .as_bytes()
        .chunks(76)
        .map(|line| std::str::from_utf8(line).unwrap())
        .collect::<Vec<_>>()
        .join("\n");

    let (status, from_wrapped) = f
        .post_json("/classify", json!({ "image": wrapped }).to_string())
        .await;
    let (_, plain) = f
        .post_json("/classify", json!({ "image": encoded }).to_string())
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(from_wrapped, plain);
}

#[tokio::test]
async fn test_classify_body_over_limit_is_payload_too_large() {
    let f = Fixture::with_body_limit(ServiceFixture::new().classification_service, 256);
    let body = json!({ "image": "A".repeat(4096) }).to_string();

    let (status, body) = f.post_json("/classify", body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].is_string());
}
