//! HTTP client for the external receipt analysis service.

use carbon_receipt_models::{ImagePayload, LineItem, Receipt};
use serde::{Deserialize, Serialize};

use crate::{AnalysisError, validate_items};

/// Default endpoint for a locally running analysis service.
pub const DEFAULT_ANALYZE_URL: &str = "http://localhost:5000/api/analyze-receipt";

/// Client for the external receipt analysis service.
///
/// One scan makes exactly one POST; there is no retry loop and no
/// client-side timeout. The call settles once, and the caller decides
/// what to do with the outcome (including whether to substitute
/// [`crate::fallback_receipt`]).
pub struct AnalysisClient {
    url: String,
    client: reqwest::Client,
}

/// Request body: the receipt image as a data URL.
#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    image: &'a str,
}

/// Response body: `{storeName, date, items: [{name, quantity, co2}]}`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    store_name: String,
    date: String,
    items: Vec<LineItem>,
}

impl AnalysisClient {
    /// Creates a client for the given service endpoint.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a client from the `ANALYZE_URL` environment variable,
    /// falling back to [`DEFAULT_ANALYZE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let url =
            std::env::var("ANALYZE_URL").unwrap_or_else(|_| DEFAULT_ANALYZE_URL.to_string());
        Self::new(url)
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Submits a receipt image and returns the analyzed receipt.
    ///
    /// Every returned item has passed [`validate_items`], so downstream
    /// consumers can rely on positive quantities and finite,
    /// non-negative CO2 weights.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] if the request fails, the service
    /// responds with a non-success status, the body is not the expected
    /// JSON shape, or any item is malformed.
    pub async fn analyze(&self, image: &ImagePayload) -> Result<Receipt, AnalysisError> {
        log::debug!("Posting receipt image to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&AnalyzeRequest {
                image: image.as_data_url(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status { status });
        }

        // Read as text first so a truncated or garbled body surfaces as
        // a parse error with the real payload behind it.
        let text = response.text().await?;
        let body: AnalyzeResponse = serde_json::from_str(&text)?;

        validate_items(&body.items)?;

        log::debug!(
            "Analysis service returned {} items from {:?}",
            body.items.len(),
            body.store_name
        );

        Ok(Receipt {
            store_name: body.store_name,
            date: body.date,
            items: body.items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_documented_input_contract() {
        let json = r#"{
            "storeName": "Grocery Store",
            "date": "January 11, 2026",
            "items": [
                {"name": "Chicken breasts", "quantity": 1, "co2": 5.4},
                {"name": "Bread", "quantity": 1, "co2": 0.8}
            ]
        }"#;
        let body: AnalyzeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(body.store_name, "Grocery Store");
        assert_eq!(body.date, "January 11, 2026");
        assert_eq!(body.items.len(), 2);
        assert!((body.items[0].co2 - 5.4).abs() < 1e-9);
    }

    #[test]
    fn rejects_a_body_with_the_wrong_shape() {
        let json = r#"{"error": "No image provided"}"#;
        assert!(serde_json::from_str::<AnalyzeResponse>(json).is_err());
    }

    #[test]
    fn request_body_carries_the_data_url() {
        let payload = ImagePayload::new("data:image/jpeg;base64,aGVsbG8=");
        let body = serde_json::to_value(AnalyzeRequest {
            image: payload.as_data_url(),
        })
        .unwrap();
        assert_eq!(body["image"], "data:image/jpeg;base64,aGVsbG8=");
    }

    #[test]
    fn env_default_points_at_local_service() {
        assert_eq!(
            DEFAULT_ANALYZE_URL,
            "http://localhost:5000/api/analyze-receipt"
        );
    }
}
