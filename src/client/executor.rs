//! Signed request execution.

use crate::config::SellerCenterConfig;
use crate::error::SellerCenterError;
use crate::parameters::ParameterSet;
use crate::response::{self, SuccessResponse};
use crate::signing::{Signature, SIGNATURE_PARAMETER};
use crate::transport::{HttpMethod, HttpRequest, HttpTransport};
use chrono::{SecondsFormat, Utc};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Header carrying the client-side request id.
pub const REQUEST_ID_HEADER: &str = "Request-ID";
/// Content type of every request.
pub const CONTENT_TYPE: &str = "text/xml; charset=UTF8";

/// A fresh 128-bit random id, hex encoded.
fn generate_request_id() -> String {
    let bytes: [u8; 16] = rand::thread_rng().gen();
    hex::encode(bytes)
}

/// Builds, signs and sends API calls, then classifies the response.
pub struct RequestExecutor {
    config: Arc<SellerCenterConfig>,
    transport: Arc<dyn HttpTransport>,
    base_parameters: ParameterSet,
}

impl RequestExecutor {
    /// Create an executor for the given configuration and transport.
    pub fn new(config: Arc<SellerCenterConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        let base_parameters = config.base_parameters();
        Self {
            config,
            transport,
            base_parameters,
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &SellerCenterConfig {
        &self.config
    }

    /// Parameters shared by every call, without a timestamp.
    pub fn base_parameters(&self) -> &ParameterSet {
        &self.base_parameters
    }

    /// A fresh parameter set for one call: the base parameters plus the
    /// current `Timestamp`.
    pub fn parameters(&self) -> ParameterSet {
        let mut parameters = self.base_parameters.clone();
        parameters.insert(
            "Timestamp",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        );
        parameters
    }

    /// Build the signed HTTP request for an action.
    pub fn build_request(
        &self,
        action: &str,
        parameters: &ParameterSet,
        method: HttpMethod,
        body: Option<String>,
    ) -> HttpRequest {
        let mut outgoing = parameters.clone();
        outgoing.insert("Action", action);

        let signature = Signature::generate(&outgoing, self.config.api_key());
        outgoing.insert(SIGNATURE_PARAMETER, signature.into_string());

        let url = format!("{}?{}", self.config.endpoint, outgoing.to_query_string());
        let request_id = generate_request_id();

        let mut request = HttpRequest::new(method, url)
            .with_header(REQUEST_ID_HEADER, request_id)
            .with_header("Content-Type", CONTENT_TYPE);

        if let Some(body) = body {
            request = request.with_body(body);
        }

        request
    }

    /// Execute an action and return the success envelope.
    ///
    /// Error envelopes surface as [`SellerCenterError::Api`]. The HTTP status
    /// is not inspected; the envelope decides the outcome.
    pub async fn execute(
        &self,
        action: &str,
        parameters: &ParameterSet,
        method: HttpMethod,
        body: Option<String>,
    ) -> Result<SuccessResponse, SellerCenterError> {
        let request = self.build_request(action, parameters, method, body);
        let request_id = request
            .headers
            .get(REQUEST_ID_HEADER)
            .cloned()
            .unwrap_or_default();

        debug!(
            request_id = %request_id,
            action = action,
            method = %method,
            url = %request.url,
            "Sending request"
        );

        let response = self.transport.send(request).await?;
        let raw = response.body_text();

        debug!(
            request_id = %request_id,
            status = response.status,
            body = %raw,
            "Received response"
        );

        match response::classify(&raw) {
            Ok(success) => {
                info!(
                    request_id = %request_id,
                    action = success.request_action().unwrap_or(action),
                    response_type = success.response_type().unwrap_or_default(),
                    "Request succeeded"
                );
                Ok(success)
            }
            Err(SellerCenterError::Api(error)) => {
                warn!(
                    request_id = %request_id,
                    action = action,
                    code = error.code,
                    error_type = error.kind.as_str(),
                    message = %error.message,
                    "API returned an error response"
                );
                Err(SellerCenterError::Api(error))
            }
            Err(e) => Err(e),
        }
    }

    /// Execute a read action with `GET`.
    pub async fn get(
        &self,
        action: &str,
        parameters: &ParameterSet,
    ) -> Result<SuccessResponse, SellerCenterError> {
        self.execute(action, parameters, HttpMethod::Get, None).await
    }

    /// Execute a write action with `POST` and an XML body.
    pub async fn post(
        &self,
        action: &str,
        parameters: &ParameterSet,
        body: String,
    ) -> Result<SuccessResponse, SellerCenterError> {
        self.execute(action, parameters, HttpMethod::Post, Some(body))
            .await
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
