use super::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use numclass_core::classify::classify;
use numclass_core::input::{parse_number, ClassificationError};
use std::sync::Arc;

/// `GET /api/classify-number?number=<n>`
///
/// The query is taken as raw pairs so that an odd query string never turns into
/// an extractor rejection; the first `number` wins.
pub async fn classify_number(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let raw = pairs
        .iter()
        .find(|(key, _)| key == "number")
        .map(|(_, value)| value.as_str());

    let n = match parse_number(raw) {
        Ok(n) => n,
        Err(err) => {
            log::debug!("Rejecting request: {err}");
            return (StatusCode::BAD_REQUEST, Json(ClassificationError::from(err))).into_response();
        }
    };

    log::debug!("Classifying {n}");

    let compute = tokio::task::spawn_blocking(move || classify(n));
    let (classification, fact) = tokio::join!(compute, state.fact.lookup(n));

    let classification = match classification {
        Ok(classification) => classification,
        Err(e) => {
            let err = crate::error::Error::Compute(e.to_string());
            log::error!("{err}");
            let body = ClassificationError {
                number: Some(n.to_string()),
                error: true,
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }
    };

    let result = classification.with_fun_fact(fact.into_fun_fact());

    (StatusCode::OK, Json(result)).into_response()
}

#[cfg(test)]
mod tests {
    use super::super::{router, AppState};
    use crate::fact::{FactClient, FactConfig};
    use httpmock::prelude::*;
    use std::time::Duration;

    /// Serve the real router on an ephemeral port and return its base URL.
    async fn spawn_app(fact_base_url: String, timeout_ms: u64) -> String {
        let state = AppState {
            fact: FactClient::new(FactConfig {
                base_url: fact_base_url,
                timeout: Duration::from_millis(timeout_ms),
            }),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });

        format!("http://{addr}")
    }

    async fn get_json(url: &str) -> (u16, serde_json::Value) {
        let response = reqwest::get(url).await.unwrap();
        let status = response.status().as_u16();
        let body = response.json::<serde_json::Value>().await.unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_classify_371_with_fun_fact() {
        let provider = MockServer::start_async().await;
        let fact_mock = provider
            .mock_async(|when, then| {
                when.method(GET).path("/371/math");
                then.status(200).json_body(serde_json::json!({
                    "text": "371 is an Armstrong number."
                }));
            })
            .await;

        let base = spawn_app(provider.base_url(), 1000).await;
        let (status, body) = get_json(&format!("{base}/api/classify-number?number=371")).await;

        fact_mock.assert_async().await;
        assert_eq!(status, 200);
        assert_eq!(
            body,
            serde_json::json!({
                "number": 371,
                "is_prime": false,
                "is_perfect": false,
                "properties": ["armstrong", "odd"],
                "digit_sum": 11,
                "fun_fact": "371 is an Armstrong number."
            })
        );
    }

    #[tokio::test]
    async fn test_invalid_number_is_400() {
        let base = spawn_app("http://127.0.0.1:1".to_string(), 100).await;

        let (status, body) = get_json(&format!("{base}/api/classify-number?number=abc")).await;

        assert_eq!(status, 400);
        assert_eq!(body, serde_json::json!({"number": "abc", "error": true}));
    }

    #[tokio::test]
    async fn test_missing_number_is_400_with_null() {
        let base = spawn_app("http://127.0.0.1:1".to_string(), 100).await;

        let (status, body) = get_json(&format!("{base}/api/classify-number")).await;

        assert_eq!(status, 400);
        assert_eq!(body, serde_json::json!({"number": null, "error": true}));
    }

    #[tokio::test]
    async fn test_fractional_number_is_400() {
        let base = spawn_app("http://127.0.0.1:1".to_string(), 100).await;

        let (status, body) = get_json(&format!("{base}/api/classify-number?number=1.5")).await;

        assert_eq!(status, 400);
        assert_eq!(body, serde_json::json!({"number": "1.5", "error": true}));
    }

    #[tokio::test]
    async fn test_fact_timeout_still_200() {
        let provider = MockServer::start_async().await;
        provider
            .mock_async(|when, then| {
                when.method(GET).path("/28/math");
                then.status(200)
                    .json_body(serde_json::json!({"text": "too slow"}))
                    .delay(Duration::from_millis(1000));
            })
            .await;

        let base = spawn_app(provider.base_url(), 50).await;
        let (status, body) = get_json(&format!("{base}/api/classify-number?number=28")).await;

        assert_eq!(status, 200);
        assert_eq!(body["is_perfect"], true);
        assert_eq!(body["properties"], serde_json::json!(["even"]));
        assert_eq!(body["fun_fact"], "");
    }

    #[tokio::test]
    async fn test_fact_provider_down_still_200() {
        let base = spawn_app("http://127.0.0.1:1".to_string(), 500).await;

        let (status, body) = get_json(&format!("{base}/api/classify-number?number=-153")).await;

        assert_eq!(status, 200);
        assert_eq!(body["number"], -153);
        assert_eq!(body["properties"], serde_json::json!(["armstrong", "odd"]));
        assert_eq!(body["digit_sum"], 9);
        assert_eq!(body["fun_fact"], "");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let base = spawn_app("http://127.0.0.1:1".to_string(), 100).await;

        let response = reqwest::Client::new()
            .get(format!("{base}/api/classify-number?number=abc"))
            .header("Origin", "https://example.org")
            .send()
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
