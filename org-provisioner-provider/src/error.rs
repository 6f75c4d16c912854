use serde::{Deserialize, Serialize};

/// Unified error type for all Organizations API operations.
///
/// Transport-level failures and API exception responses are folded into one
/// taxonomy. All variants are serializable for structured error reporting, so
/// a caller can hand the error back to an automation host verbatim.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — API rate limit exceeded
///
/// The built-in HTTP client automatically retries these with exponential backoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum OrganizationsError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    ///
    /// This is a transient error and is automatically retried.
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The provided credentials are invalid, expired, or the request signature
    /// was rejected.
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated principal lacks permission for the requested operation.
    PermissionDenied {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The calling account is not a member of an organization, or the
    /// organization feature set does not support the operation.
    OrganizationNotInUse {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The operation would violate an organization constraint
    /// (account limit reached, unverified email, missing payment method, etc.).
    ConstraintViolation {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The organization is being modified concurrently by another request.
    ConcurrentModification {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The organization's initialization has not finished yet; account
    /// creation is rejected until it completes.
    FinalizingOrganization {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// No create-account request exists for the supplied request id.
    RequestNotFound {
        /// The request id that was not found.
        request_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// A request parameter is invalid (malformed email, bad role name, etc.).
    InvalidParameter {
        /// Description of what's wrong.
        detail: String,
    },

    /// The operation is not available on the endpoint that received it
    /// (e.g. called outside the management account's home region).
    UnsupportedEndpoint {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429 or a throttling
    /// exception).
    ///
    /// This is a transient error; the request should succeed after waiting.
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The HTTP request timed out.
    ///
    /// This is a transient error and is automatically retried.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The service reported an internal failure.
    ServiceError {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the API.
    ///
    /// This is a catch-all for exception names not yet mapped to a specific variant.
    Unknown {
        /// Raw exception name from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl OrganizationsError {
    /// 是否为预期行为（凭证、权限、组织约束等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::OrganizationNotInUse { .. }
                | Self::ConstraintViolation { .. }
                | Self::ConcurrentModification { .. }
                | Self::FinalizingOrganization { .. }
                | Self::RequestNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::UnsupportedEndpoint { .. }
        )
    }
}

impl std::fmt::Display for OrganizationsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::PermissionDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Permission denied: {msg}")
                } else {
                    write!(f, "Permission denied")
                }
            }
            Self::OrganizationNotInUse { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Account is not a member of an organization: {msg}")
                } else {
                    write!(f, "Account is not a member of an organization")
                }
            }
            Self::ConstraintViolation { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Organization constraint violated: {msg}")
                } else {
                    write!(f, "Organization constraint violated")
                }
            }
            Self::ConcurrentModification { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Concurrent modification in progress: {msg}")
                } else {
                    write!(f, "Concurrent modification in progress")
                }
            }
            Self::FinalizingOrganization { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Organization is still being finalized: {msg}")
                } else {
                    write!(f, "Organization is still being finalized")
                }
            }
            Self::RequestNotFound {
                request_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Create account request '{request_id}' not found: {msg}")
                } else {
                    write!(f, "Create account request '{request_id}' not found")
                }
            }
            Self::InvalidParameter { detail } => {
                write!(f, "Invalid parameter: {detail}")
            }
            Self::UnsupportedEndpoint { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Operation not supported on this endpoint: {msg}")
                } else {
                    write!(f, "Operation not supported on this endpoint")
                }
            }
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::ServiceError { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Organizations service error: {msg}")
                } else {
                    write!(f, "Organizations service error")
                }
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
            Self::Unknown { raw_message, .. } => {
                write!(f, "{raw_message}")
            }
        }
    }
}

impl std::error::Error for OrganizationsError {}

/// Convenience type alias for `Result<T, OrganizationsError>`.
pub type Result<T> = std::result::Result<T, OrganizationsError>;
