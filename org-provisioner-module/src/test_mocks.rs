use super::*;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use org_provisioner_provider::Result as ProviderResult;

/// Scriptable Organizations API mock that records every call.
///
/// Responses are cloned on each call; when none is scripted the call
/// returns an empty object.
#[derive(Default)]
pub struct MockOrganizationsApi {
    create_calls: Mutex<Vec<CreateGovCloudAccountRequest>>,
    describe_calls: Mutex<Vec<DescribeCreateAccountStatusRequest>>,
    create_response: Mutex<Option<ProviderResult<Value>>>,
    describe_response: Mutex<Option<ProviderResult<Value>>>,
}

impl MockOrganizationsApi {
    pub fn with_create_response(response: ProviderResult<Value>) -> Self {
        Self {
            create_response: Mutex::new(Some(response)),
            ..Self::default()
        }
    }

    pub fn with_describe_response(response: ProviderResult<Value>) -> Self {
        Self {
            describe_response: Mutex::new(Some(response)),
            ..Self::default()
        }
    }

    pub async fn create_calls(&self) -> Vec<CreateGovCloudAccountRequest> {
        self.create_calls.lock().await.clone()
    }

    pub async fn describe_calls(&self) -> Vec<DescribeCreateAccountStatusRequest> {
        self.describe_calls.lock().await.clone()
    }
}

#[async_trait]
impl OrganizationsApi for MockOrganizationsApi {
    async fn create_gov_cloud_account(
        &self,
        request: &CreateGovCloudAccountRequest,
    ) -> ProviderResult<Value> {
        self.create_calls.lock().await.push(request.clone());
        match &*self.create_response.lock().await {
            Some(response) => response.clone(),
            None => Ok(json!({})),
        }
    }

    async fn describe_create_account_status(
        &self,
        request: &DescribeCreateAccountStatusRequest,
    ) -> ProviderResult<Value> {
        self.describe_calls.lock().await.push(request.clone());
        match &*self.describe_response.lock().await {
            Some(response) => response.clone(),
            None => Ok(json!({})),
        }
    }
}

/// 查询中的响应封套
pub fn in_progress_envelope(request_id: &str) -> Value {
    json!({
        "CreateAccountStatus": {
            "Id": request_id,
            "AccountName": "audit",
            "State": "IN_PROGRESS",
            "RequestedTimestamp": 1_705_305_600.0
        }
    })
}

/// 创建成功的响应封套（商业分区和 GovCloud 两个账号 id）
pub fn succeeded_envelope(request_id: &str, account_id: &str, gov_account_id: &str) -> Value {
    json!({
        "CreateAccountStatus": {
            "Id": request_id,
            "AccountName": "audit",
            "State": "SUCCEEDED",
            "AccountId": account_id,
            "GovCloudAccountId": gov_account_id,
            "RequestedTimestamp": 1_705_305_600.0,
            "CompletedTimestamp": 1_705_305_900.0
        }
    })
}

/// 创建失败的响应封套
pub fn failed_envelope(request_id: &str, failure_reason: &str) -> Value {
    json!({
        "CreateAccountStatus": {
            "Id": request_id,
            "AccountName": "audit",
            "State": "FAILED",
            "FailureReason": failure_reason,
            "RequestedTimestamp": 1_705_305_600.0,
            "CompletedTimestamp": 1_705_305_900.0
        }
    })
}
