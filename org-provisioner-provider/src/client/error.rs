//! Organizations 错误码映射
//!
//! 异常名参考: <https://docs.aws.amazon.com/organizations/latest/APIReference/API_CreateGovCloudAccount.html>

use super::OrganizationsClient;
use crate::error::OrganizationsError;
use crate::traits::{ErrorContext, RawApiError};

impl OrganizationsClient {
    /// 将 API 返回的异常名映射为统一错误类型
    pub(crate) fn map_error(&self, raw: RawApiError, context: ErrorContext) -> OrganizationsError {
        match raw.code.as_deref() {
            // ============ 认证错误 ============
            Some(
                "UnrecognizedClientException"
                | "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "ExpiredTokenException"
                | "InvalidSignatureException"
                | "MissingAuthenticationToken"
                | "IncompleteSignature"
                | "AuthFailure",
            ) => OrganizationsError::InvalidCredentials {
                raw_message: Some(raw.message),
            },

            // ============ 权限错误 ============
            Some(
                "AccessDeniedException"
                | "AccessDeniedForDependencyException"
                | "UnauthorizedOperation",
            ) => OrganizationsError::PermissionDenied {
                raw_message: Some(raw.message),
            },

            // ============ 组织状态错误 ============
            Some("AWSOrganizationsNotInUseException") => OrganizationsError::OrganizationNotInUse {
                raw_message: Some(raw.message),
            },
            Some("ConstraintViolationException") => OrganizationsError::ConstraintViolation {
                raw_message: Some(raw.message),
            },
            Some("ConcurrentModificationException") => OrganizationsError::ConcurrentModification {
                raw_message: Some(raw.message),
            },
            Some("FinalizingOrganizationException") => OrganizationsError::FinalizingOrganization {
                raw_message: Some(raw.message),
            },

            // ============ 请求错误 ============
            Some("CreateAccountStatusNotFoundException") => OrganizationsError::RequestNotFound {
                request_id: context
                    .request_id
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },
            Some("InvalidInputException" | "ValidationException") => {
                OrganizationsError::InvalidParameter {
                    detail: raw.message,
                }
            }
            Some("UnsupportedAPIEndpointException") => OrganizationsError::UnsupportedEndpoint {
                raw_message: Some(raw.message),
            },

            // ============ 服务端错误 ============
            Some("ServiceException" | "InternalFailure" | "InternalServerError") => {
                OrganizationsError::ServiceError {
                    raw_message: Some(raw.message),
                }
            }
            Some(
                "TooManyRequestsException"
                | "ThrottlingException"
                | "Throttling"
                | "RequestLimitExceeded",
            ) => OrganizationsError::RateLimited {
                // JSON 1.1 错误体不带 Retry-After，只有 HTTP 429 响应头才带
                retry_after: None,
                raw_message: Some(raw.message),
            },

            _ => self.unknown_error(raw),
        }
    }

    /// 未识别的异常名，保留原始信息便于排查
    pub(crate) fn unknown_error(&self, raw: RawApiError) -> OrganizationsError {
        OrganizationsError::Unknown {
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}
