use async_trait::async_trait;
use serde_json::Value;

use crate::client::{CreateGovCloudAccountRequest, DescribeCreateAccountStatusRequest};
use crate::error::Result;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 异常名（已剥离命名空间前缀）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 创建请求 ID（用于 `RequestNotFound` 等错误）
    pub request_id: Option<String>,
}

/// AWS Organizations 操作接口
///
/// The seam between the provisioning adapter and the concrete client. Both
/// operations return the provider's raw response envelope untouched; key-casing
/// normalization happens downstream, over the whole tree.
#[async_trait]
pub trait OrganizationsApi: Send + Sync {
    /// 提交 GovCloud 账号创建请求
    async fn create_gov_cloud_account(
        &self,
        request: &CreateGovCloudAccountRequest,
    ) -> Result<Value>;

    /// 查询账号创建请求的当前状态
    async fn describe_create_account_status(
        &self,
        request: &DescribeCreateAccountStatusRequest,
    ) -> Result<Value>;
}
