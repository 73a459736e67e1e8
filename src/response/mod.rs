//! Response envelope classification.
//!
//! Every API answer is either a `SuccessResponse` with a `Head` and a `Body`
//! section or an `ErrorResponse` describing why the call was rejected.

use crate::error::{
    map_error_response, ApiErrorDetail, ErrorResponse, ResponseError, SellerCenterError,
};
use crate::xml::{self, Node};

/// Root element of a successful response.
pub const SUCCESS_ROOT: &str = "SuccessResponse";
/// Root element of an error response.
pub const ERROR_ROOT: &str = "ErrorResponse";

/// A parsed success envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessResponse {
    head: Node,
    body: Node,
}

impl SuccessResponse {
    /// Build a response from its two sections.
    pub fn new(head: Node, body: Node) -> Self {
        Self { head, body }
    }

    /// The `Head` section.
    pub fn head(&self) -> &Node {
        &self.head
    }

    /// The `Body` section.
    pub fn body(&self) -> &Node {
        &self.body
    }

    /// Consume the response and return the `Body` section.
    pub fn into_body(self) -> Node {
        self.body
    }

    /// Request id assigned by the platform.
    pub fn request_id(&self) -> Option<&str> {
        self.head.child_text("RequestId")
    }

    /// Action the response answers.
    pub fn request_action(&self) -> Option<&str> {
        self.head.child_text("RequestAction")
    }

    /// Response type, e.g. `Orders` or empty for write actions.
    pub fn response_type(&self) -> Option<&str> {
        self.head.child_text("ResponseType")
    }

    /// Timestamp of the response as sent by the platform.
    pub fn timestamp(&self) -> Option<&str> {
        self.head.child_text("Timestamp")
    }
}

/// Parse a raw response body and decide between success and error.
///
/// Error envelopes are returned as [`SellerCenterError::Api`].
pub fn classify(raw: &str) -> Result<SuccessResponse, SellerCenterError> {
    let root = xml::parse(raw)?;

    match root.name() {
        SUCCESS_ROOT => {
            let head = section(&root, "Head")?;
            let body = section(&root, "Body")?;
            Ok(SuccessResponse::new(head, body))
        }
        ERROR_ROOT => Err(SellerCenterError::Api(map_error_response(
            read_error_envelope(&root),
        ))),
        other => Err(SellerCenterError::Response(ResponseError::UnexpectedRoot {
            root: other.to_string(),
        })),
    }
}

fn section(root: &Node, name: &str) -> Result<Node, SellerCenterError> {
    root.child(name).cloned().ok_or_else(|| {
        SellerCenterError::Response(ResponseError::MissingField {
            field: name.to_string(),
        })
    })
}

fn read_error_envelope(root: &Node) -> ErrorResponse {
    let head = root.child("Head");
    let head_text = |name: &str| {
        head.and_then(|h| h.child_text(name))
            .unwrap_or_default()
            .to_string()
    };

    let details = root
        .child("Body")
        .map(|body| body.children_named("ErrorDetail").map(read_detail).collect())
        .unwrap_or_default();

    ErrorResponse {
        error_type: head_text("ErrorType"),
        error_code: head_text("ErrorCode"),
        error_message: head_text("ErrorMessage"),
        request_action: head.and_then(|h| h.child_text("RequestAction")).map(String::from),
        details,
    }
}

fn read_detail(node: &Node) -> ApiErrorDetail {
    let text = |name: &str| {
        node.child_text(name)
            .filter(|t| !t.trim().is_empty())
            .map(String::from)
    };

    ApiErrorDetail {
        field: text("Field"),
        message: text("Message"),
        value: text("Value"),
        seller_sku: text("SellerSku"),
    }
}
