//! Error types for the Seller Center SDK.
//!
//! Errors are grouped by where they originate: local configuration, local
//! argument validation, the transport, the response envelope, the remote API
//! itself, and the structure of the XML payload handed to the factories.

mod mapping;

pub use mapping::{map_error_response, ErrorResponse};

use std::time::Duration;
use thiserror::Error;

/// Top-level error type for the Seller Center SDK.
#[derive(Debug, Error)]
pub enum SellerCenterError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A required XML element is missing for an entity.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// The remote API answered with an `ErrorResponse`.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Local argument validation failed before any request was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    /// Network and transport errors.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response parsing errors.
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),
}

impl SellerCenterError {
    /// Returns the remote API error code, if this is an API error.
    pub fn api_code(&self) -> Option<u32> {
        match self {
            SellerCenterError::Api(e) => Some(e.code),
            _ => None,
        }
    }

    /// Returns the action the remote API reported the error for.
    pub fn request_action(&self) -> Option<&str> {
        match self {
            SellerCenterError::Api(e) => e.action.as_deref(),
            _ => None,
        }
    }

    /// Returns true if the error was raised locally, before a request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            SellerCenterError::Configuration(_) | SellerCenterError::Validation(_)
        )
    }
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Missing API endpoint.
    #[error("Missing endpoint: endpoint must be specified via config or environment")]
    MissingEndpoint,

    /// Missing user id.
    #[error("Missing user id: user id must be specified via config or environment")]
    MissingUserId,

    /// Missing API key.
    #[error("Missing API key: API key must be specified via config or environment")]
    MissingApiKey,

    /// Invalid endpoint URL.
    #[error("Invalid endpoint URL: {url}")]
    InvalidEndpoint {
        /// The invalid URL.
        url: String,
        /// Details about the validation error.
        details: String,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {field} - {message}")]
    InvalidConfiguration {
        /// The configuration field name.
        field: String,
        /// Error message.
        message: String,
    },
}

/// A required element is absent from the XML of an entity.
///
/// The message text is part of the public contract and stays stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The xml structure is not valid for a {entity}. The property {field} should exist.")]
pub struct StructuralError {
    /// Entity (or collection) being built.
    pub entity: String,
    /// The first missing element, in declared order.
    pub field: String,
}

impl StructuralError {
    /// Create an error for a missing field.
    pub fn missing(entity: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            field: field.into(),
        }
    }
}

/// Kind of remote API error, taken from `Head/ErrorType`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// The request was rejected because of something the caller sent.
    Sender,
    /// The platform failed to process a valid request.
    Platform,
    /// Any other error type reported by the API.
    Other(String),
}

impl ApiErrorKind {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            ApiErrorKind::Sender => "Sender",
            ApiErrorKind::Platform => "Platform",
            ApiErrorKind::Other(value) => value,
        }
    }
}

/// A single entry of an error response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorDetail {
    /// Offending field.
    pub field: Option<String>,
    /// Detail message.
    pub message: Option<String>,
    /// Offending value.
    pub value: Option<String>,
    /// Product the detail refers to.
    pub seller_sku: Option<String>,
}

/// Error reported by the remote API through an `ErrorResponse` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("E{code:04}: {message}")]
pub struct ApiError {
    /// Error type.
    pub kind: ApiErrorKind,
    /// Numeric error code.
    pub code: u32,
    /// Human readable message.
    pub message: String,
    /// Action the error was reported for.
    pub action: Option<String>,
    /// Details listed in the error body.
    pub details: Vec<ApiErrorDetail>,
}

impl ApiError {
    /// Returns true for errors caused by the request content.
    pub fn is_sender_error(&self) -> bool {
        self.kind == ApiErrorKind::Sender
    }
}

/// Local validation errors raised before a request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Unknown order status.
    #[error("Invalid order status '{value}'")]
    InvalidOrderStatus {
        /// The rejected value.
        value: String,
    },

    /// Unknown sort field.
    #[error("Invalid sort by '{value}'")]
    InvalidSortBy {
        /// The rejected value.
        value: String,
    },

    /// Unknown sort direction.
    #[error("Invalid sort direction '{value}'")]
    InvalidSortDirection {
        /// The rejected value.
        value: String,
    },

    /// Unknown delivery type.
    #[error("Invalid delivery type '{value}'")]
    InvalidDeliveryType {
        /// The rejected value.
        value: String,
    },

    /// Unknown document type.
    #[error("Invalid document type '{value}'")]
    InvalidDocumentType {
        /// The rejected value.
        value: String,
    },

    /// Unknown operator code.
    #[error("Invalid operator code '{value}'")]
    InvalidOperatorCode {
        /// The rejected value.
        value: String,
    },

    /// Unknown invoice type.
    #[error("Invalid invoice type '{value}'")]
    InvalidInvoiceType {
        /// The rejected value.
        value: String,
    },

    /// Unknown invoice document format.
    #[error("Invalid invoice document format '{value}'")]
    InvalidInvoiceFormat {
        /// The rejected value.
        value: String,
    },

    /// Unknown product filter.
    #[error("Invalid product filter '{value}'")]
    InvalidProductFilter {
        /// The rejected value.
        value: String,
    },

    /// Unknown product status.
    #[error("Invalid product status '{value}'")]
    InvalidProductStatus {
        /// The rejected value.
        value: String,
    },

    /// Event alias not offered by the webhook entities.
    #[error("Invalid webhook event '{alias}'")]
    InvalidWebhookEvent {
        /// The rejected alias.
        alias: String,
    },

    /// Product data attribute name that cannot be an XML element name.
    #[error("Invalid product data attribute '{name}'")]
    InvalidProductDataName {
        /// The rejected name.
        name: String,
    },

    /// A required argument is empty.
    #[error("The parameter {argument} should not be empty")]
    EmptyArgument {
        /// Argument name.
        argument: String,
    },
}

impl DomainError {
    /// Create an empty-argument error.
    pub fn empty(argument: impl Into<String>) -> Self {
        DomainError::EmptyArgument {
            argument: argument.into(),
        }
    }
}

/// Network and transport errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection failed.
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message.
        message: String,
    },

    /// Request timed out.
    #[error("Request timed out after {duration:?}")]
    Timeout {
        /// The timeout duration.
        duration: Duration,
    },

    /// TLS/SSL error.
    #[error("TLS error: {message}")]
    TlsError {
        /// Error message.
        message: String,
    },

    /// The request could not be built.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },
}

/// Response parsing errors.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// XML parse error.
    #[error("XML parse error: {message}")]
    XmlParseError {
        /// Error message.
        message: String,
    },

    /// The document root is neither a success nor an error envelope.
    #[error("Unexpected response root element '{root}'")]
    UnexpectedRoot {
        /// The root element name.
        root: String,
    },

    /// A section of the envelope is missing.
    #[error("Missing required field '{field}' in response")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// A scalar value could not be converted.
    #[error("Invalid value '{value}' for {entity}.{field}")]
    InvalidValue {
        /// Entity being built.
        entity: String,
        /// Field name.
        field: String,
        /// The raw text.
        value: String,
    },

    /// Invalid response format.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },
}
