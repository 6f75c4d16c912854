//! AWS Organizations API 客户端

mod error;
mod http;
mod sign;
mod types;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::credentials::{Credentials, region_from_env};
use crate::error::Result;
use crate::http_client::create_http_client;
use crate::traits::{ErrorContext, OrganizationsApi};
use crate::utils::log_sanitizer::mask_key_id;

pub use types::{
    AccountState, CreateGovCloudAccountRequest, DescribeCreateAccountStatusRequest, Tag,
};

pub(crate) const ORGANIZATIONS_SERVICE: &str = "organizations";
/// JSON 1.1 协议的 `X-Amz-Target` 前缀
pub(crate) const ORGANIZATIONS_TARGET_PREFIX: &str = "AWSOrganizationsV20161128";
/// GovCloud 账号通过商业分区的管理端点创建，默认走 us-east-1
pub(crate) const DEFAULT_REGION: &str = "us-east-1";

/// AWS Organizations 客户端
pub struct OrganizationsClient {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) region: String,
    pub(crate) max_retries: u32,
}

/// Organizations 客户端 Builder
pub struct OrganizationsClientBuilder {
    credentials: Credentials,
    region: String,
    max_retries: u32,
}

impl OrganizationsClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            region: DEFAULT_REGION.to_string(),
            max_retries: 2,
        }
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn build(self) -> OrganizationsClient {
        OrganizationsClient {
            client: create_http_client(),
            credentials: self.credentials,
            region: self.region,
            max_retries: self.max_retries,
        }
    }
}

impl OrganizationsClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> OrganizationsClientBuilder {
        OrganizationsClientBuilder::new(credentials)
    }

    /// 从环境变量构建客户端，缺少凭证时返回 `None`
    ///
    /// 读取 `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`（可选
    /// `AWS_SESSION_TOKEN`）和 `AWS_REGION` / `AWS_DEFAULT_REGION`。
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let credentials = Credentials::from_env()?;
        let region = region_from_env(DEFAULT_REGION);
        log::debug!(
            "Using access key {} in region {region}",
            mask_key_id(&credentials.access_key_id)
        );
        Some(Self::builder(credentials).region(region).build())
    }

    /// API 端点主机名
    pub(crate) fn host(&self) -> String {
        format!("{ORGANIZATIONS_SERVICE}.{}.amazonaws.com", self.region)
    }
}

#[async_trait]
impl OrganizationsApi for OrganizationsClient {
    async fn create_gov_cloud_account(
        &self,
        request: &CreateGovCloudAccountRequest,
    ) -> Result<Value> {
        self.request("CreateGovCloudAccount", request, ErrorContext::default())
            .await
    }

    async fn describe_create_account_status(
        &self,
        request: &DescribeCreateAccountStatusRequest,
    ) -> Result<Value> {
        self.request(
            "DescribeCreateAccountStatus",
            request,
            ErrorContext {
                request_id: Some(request.create_account_request_id.clone()),
            },
        )
        .await
    }
}
