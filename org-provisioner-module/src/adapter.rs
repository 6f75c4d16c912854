//! Submit-or-query orchestration
//!
//! The module has exactly two behaviors: submit a new `CreateGovCloudAccount`
//! request, or poll an existing one when `create_account_request_id` is
//! supplied. Polling wins when both would be possible. Retrying and polling
//! loops are the playbook author's job, not this module's.

use serde_json::Value;
use thiserror::Error;

use org_provisioner_provider::casing::snake_case_keys;
use org_provisioner_provider::{
    AccountState, CreateGovCloudAccountRequest, DescribeCreateAccountStatusRequest,
    OrganizationsApi, OrganizationsError, Tag,
};

use crate::params::ModuleParams;

/// 响应封套里包着状态记录的键
const STATUS_ENVELOPE_KEY: &str = "CreateAccountStatus";

/// Errors the module reports back to the host.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Transport or API error from the Organizations client.
    #[error("{0}")]
    Provider(#[from] OrganizationsError),

    /// The API accepted the call but reports the account creation as failed.
    #[error("Account creation failed: {reason}")]
    CreationFailed { reason: String, status: Value },

    /// The argument document could not be used at all.
    #[error("Invalid module arguments: {0}")]
    InvalidArgs(String),
}

/// Outcome of a successful module run.
#[derive(Debug, Clone)]
pub struct StatusReport {
    /// Whether this run submitted a new creation request.
    pub changed: bool,
    /// Normalized (snake_case keys) creation status record.
    pub status: Value,
}

/// Run the module: query when a request id is given, submit otherwise.
pub async fn submit_or_query(
    api: &dyn OrganizationsApi,
    params: &ModuleParams,
) -> Result<StatusReport, ModuleError> {
    // 查询优先：带 id 时其余创建参数一律不上送
    if let Some(request_id) = &params.create_account_request_id {
        let request = DescribeCreateAccountStatusRequest {
            create_account_request_id: request_id.clone(),
        };
        let response = api.describe_create_account_status(&request).await?;
        let status = extract_status(response);
        check_failure(&status)?;
        return Ok(StatusReport {
            changed: false,
            status,
        });
    }

    let request = CreateGovCloudAccountRequest {
        email: params.email.clone(),
        account_name: params.account_name.clone(),
        role_name: params.role_name.clone(),
        iam_user_access_to_billing: params.iam_user_access_to_billing.clone(),
        tags: params.tags.as_ref().map(|tags| {
            tags.iter()
                .map(|(k, v)| Tag {
                    key: k.clone(),
                    value: v.clone(),
                })
                .collect()
        }),
    };
    let response = api.create_gov_cloud_account(&request).await?;
    let status = extract_status(response);
    check_failure(&status)?;
    Ok(StatusReport {
        changed: true,
        status,
    })
}

/// 从响应封套中取出状态记录并规范化键名
///
/// 封套缺失或形状不对时返回空对象，让上层照常输出。
fn extract_status(envelope: Value) -> Value {
    let record = match envelope {
        Value::Object(mut map) => map
            .remove(STATUS_ENVELOPE_KEY)
            .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
        _ => Value::Object(serde_json::Map::new()),
    };
    snake_case_keys(record)
}

/// `FAILED` 状态在这里变成业务错误；未识别的状态一律放行
fn check_failure(status: &Value) -> Result<(), ModuleError> {
    let failed =
        status["state"].as_str().and_then(AccountState::parse) == Some(AccountState::Failed);
    if failed {
        let reason = status["failure_reason"]
            .as_str()
            .unwrap_or("unknown")
            .to_string();
        return Err(ModuleError::CreationFailed {
            reason,
            status: status.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "test_mocks.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
pub(crate) mod test_mocks;

#[cfg(test)]
#[path = "adapter_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;
