// HTTP client for the signage slide API

use crate::errors::ApiError;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use signage_editor_core::{ServerLimits, Slide, SlideApi, SlideId, SlideSummary};
use std::env;

const SLIDE_GET: &str = "/api/endpoint/slide/slide_get.php";
const SLIDE_SAVE: &str = "/api/endpoint/slide/slide_save.php";
const SLIDE_RM: &str = "/api/endpoint/slide/slide_rm.php";
const SLIDE_LIST: &str = "/api/endpoint/slide/slide_list.php";
const SERVER_LIMITS: &str = "/api/endpoint/general/server_limits.php";

/// Base URL from `API_BASE_URL`, falling back to a local server
pub fn get_api_base_url() -> String {
    env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Client for the slide endpoints of one signage server
#[derive(Debug, Clone)]
pub struct SlideApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SlideApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(get_api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Load one slide
    pub async fn fetch_slide(&self, id: &SlideId) -> Result<Slide, ApiError> {
        let request = self
            .client
            .get(self.endpoint(SLIDE_GET))
            .query(&[("id", id.as_str())]);
        let mut body = self.call(request).await?;
        take_field(&mut body, "slide")
    }

    /// Create or update a slide
    ///
    /// Unsaved slides go out with the sentinel id; the response carries
    /// the id the server assigned.
    pub async fn save_slide(&self, slide: &Slide) -> Result<SlideId, ApiError> {
        let request = self.client.post(self.endpoint(SLIDE_SAVE)).json(slide);
        let mut body = self.call(request).await?;
        let id: SlideId = take_field(&mut body, "id")?;
        if !id.is_persisted() {
            return Err(ApiError::ServerError(format!(
                "save returned an unusable slide id '{}'",
                id
            )));
        }
        Ok(id)
    }

    pub async fn remove_slide(&self, id: &SlideId) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.endpoint(SLIDE_RM))
            .json(&json!({ "id": id }));
        self.call(request).await.map(|_| ())
    }

    /// All slides, ordered by index
    pub async fn list_slides(&self) -> Result<Vec<SlideSummary>, ApiError> {
        let mut body = self.call(self.client.get(self.endpoint(SLIDE_LIST))).await?;
        let mut slides: Vec<SlideSummary> = take_field(&mut body, "slides")?;
        slides.sort_by_key(|s| s.index);
        Ok(slides)
    }

    pub async fn fetch_limits(&self) -> Result<ServerLimits, ApiError> {
        let mut body = self
            .call(self.client.get(self.endpoint(SERVER_LIMITS)))
            .await?;
        let limits: ServerLimits = take_field(&mut body, "limits")?;
        limits
            .validate()
            .map_err(|e| ApiError::ServerError(e.to_string()))?;
        Ok(limits)
    }

    /// Send a request and check the `error` field of the JSON response
    async fn call(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "slide API request failed");
            ApiError::NetworkError(
                "The server is not responding. Try again later or contact the administrator."
                    .to_string(),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::ServerError(format!("HTTP error: {}", status)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| ApiError::NetworkError("Failed to parse the response.".to_string()))?;

        let code = body
            .get("error")
            .and_then(Value::as_i64)
            .ok_or_else(|| ApiError::ServerError("response has no error code".to_string()))?;
        ApiError::check_code(code)?;
        tracing::debug!("slide API call ok");
        Ok(body)
    }
}

fn take_field<T: DeserializeOwned>(body: &mut Value, key: &str) -> Result<T, ApiError> {
    let value = body.get_mut(key).map(Value::take).unwrap_or(Value::Null);
    serde_json::from_value(value)
        .map_err(|e| ApiError::ServerError(format!("malformed '{}' in response: {}", key, e)))
}

impl SlideApi for SlideApiClient {
    type Error = ApiError;

    async fn fetch(&self, id: &SlideId) -> Result<Slide, ApiError> {
        self.fetch_slide(id).await
    }

    async fn save(&self, slide: &Slide) -> Result<SlideId, ApiError> {
        self.save_slide(slide).await
    }

    async fn remove(&self, id: &SlideId) -> Result<(), ApiError> {
        self.remove_slide(id).await
    }
}
