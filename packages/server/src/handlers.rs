//! HTTP handler functions for the carbon receipt API.

use actix_web::{HttpResponse, web};
use carbon_receipt_analysis::fallback_receipt;
use carbon_receipt_models::ImagePayload;
use carbon_receipt_rating::rate_receipt;
use carbon_receipt_server_models::{AnalyzeReceiptRequest, ApiHealth, ApiReceipt};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/analyze-receipt`
///
/// Accepts `{"image": "data:<mime>;base64,..."}`, obtains the analyzed
/// item list from the external analysis service, and responds with the
/// receipt plus its rating. Totals are derived here, once, and passed
/// down read-only; the frontend never recomputes them.
///
/// When the analysis call fails the fixed fallback receipt is
/// substituted so the frontend always has a receipt to render. That
/// decision lives in this handler, not inside the client.
pub async fn analyze_receipt(
    state: web::Data<AppState>,
    body: web::Json<AnalyzeReceiptRequest>,
) -> HttpResponse {
    let Some(image) = body.image.as_deref().filter(|image| !image.is_empty()) else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "No image provided"
        }));
    };

    let payload = ImagePayload::new(image);
    let receipt = match state.analysis.analyze(&payload).await {
        Ok(receipt) => receipt,
        Err(e) => {
            log::warn!("Analysis service unavailable, substituting fallback receipt: {e}");
            fallback_receipt()
        }
    };

    let rating = rate_receipt(&receipt);
    HttpResponse::Ok().json(ApiReceipt::from_rated(receipt, rating))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn health_reports_ok() {
        let response = health().await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["healthy"], true);
    }

    #[actix_web::test]
    async fn missing_image_is_a_bad_request() {
        let state = web::Data::new(AppState {
            analysis: carbon_receipt_analysis::AnalysisClient::new(
                "http://localhost:5000/api/analyze-receipt",
            ),
        });
        let body = web::Json(AnalyzeReceiptRequest { image: None });

        let response = analyze_receipt(state, body).await;
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"], "No image provided");
    }

    #[actix_web::test]
    async fn analysis_failure_substitutes_the_fallback_receipt() {
        // Nothing listens on port 1, so the analysis call settles with
        // a connection error and the handler substitutes the fallback.
        let state = web::Data::new(AppState {
            analysis: carbon_receipt_analysis::AnalysisClient::new(
                "http://127.0.0.1:1/api/analyze-receipt",
            ),
        });
        let body = web::Json(AnalyzeReceiptRequest {
            image: Some("data:image/jpeg;base64,aGVsbG8=".to_string()),
        });

        let response = analyze_receipt(state, body).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["storeName"], "EcoMart Groceries");
        assert_eq!(value["items"].as_array().unwrap().len(), 8);
        let total = value["totalCO2"].as_f64().unwrap();
        assert!((total - 25.28).abs() < 1e-9, "got {total}");
    }

    #[actix_web::test]
    async fn empty_image_is_a_bad_request() {
        let state = web::Data::new(AppState {
            analysis: carbon_receipt_analysis::AnalysisClient::new(
                "http://localhost:5000/api/analyze-receipt",
            ),
        });
        let body = web::Json(AnalyzeReceiptRequest {
            image: Some(String::new()),
        });

        let response = analyze_receipt(state, body).await;
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }
}
