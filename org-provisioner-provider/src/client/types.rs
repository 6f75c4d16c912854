//! Organizations wire types
//!
//! Request bodies are typed so that only populated fields reach the wire:
//! `None` fields are skipped entirely, while empty strings and empty tag lists
//! are serialized as-is. Success responses stay dynamic (`serde_json::Value`)
//! so downstream key normalization can walk the whole tree.

use serde::{Deserialize, Serialize};

/// `CreateGovCloudAccount` 请求体
///
/// Every field is optional here; required combinations are enforced by the
/// API itself, not by this client.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGovCloudAccountRequest {
    /// Email address of the owner of the new account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Friendly name for the new account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    /// Name of the IAM role the management account may assume in the new
    /// account (the API defaults to `OrganizationAccountAccessRole`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,

    /// `ALLOW` or `DENY` IAM users access to billing information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_user_access_to_billing: Option<String>,

    /// Tags attached to the newly created account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

/// 账号标签（序列化为 `{"Key": .., "Value": ..}`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// `DescribeCreateAccountStatus` 请求体
///
/// Carries only the request id; creation parameters have no meaning on the
/// query path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCreateAccountStatusRequest {
    pub create_account_request_id: String,
}

/// 账号创建请求状态
///
/// The API reports `IN_PROGRESS`, `SUCCEEDED` or `FAILED`. Anything else is
/// treated as unrecognized and, per the module's contract, non-failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountState {
    InProgress,
    Succeeded,
    Failed,
}

impl AccountState {
    /// Parse the provider's state string; unrecognized values yield `None`.
    #[must_use]
    pub fn parse(state: &str) -> Option<Self> {
        match state {
            "IN_PROGRESS" => Some(Self::InProgress),
            "SUCCEEDED" => Some(Self::Succeeded),
            "FAILED" => Some(Self::Failed),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
        }
    }
}

/// AWS JSON-1.1 错误响应体
///
/// `__type` 可能带命名空间前缀（`com.amazonaws...#Name`），消息字段的大小写
/// 因服务而异。
#[derive(Debug, Deserialize)]
pub(crate) struct AwsErrorEnvelope {
    #[serde(rename = "__type")]
    pub error_type: Option<String>,
    #[serde(alias = "Message")]
    pub message: Option<String>,
}

impl AwsErrorEnvelope {
    /// 剥离命名空间前缀，仅保留异常名
    pub fn exception_name(&self) -> Option<String> {
        self.error_type
            .as_ref()
            .map(|t| t.rsplit('#').next().unwrap_or(t.as_str()).to_string())
    }
}
