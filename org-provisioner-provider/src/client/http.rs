//! Organizations HTTP 请求方法（复用通用 HTTP 工具）

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::error::{OrganizationsError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, RawApiError};

use super::sign::amz_date;
use super::types::AwsErrorEnvelope;
use super::{ORGANIZATIONS_SERVICE, ORGANIZATIONS_TARGET_PREFIX, OrganizationsClient};

impl OrganizationsClient {
    /// 执行 Organizations API 请求（`x-amz-json-1.1` 协议）
    pub(crate) async fn request<B: Serialize>(
        &self,
        action: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<Value> {
        // 1. 序列化请求体
        let payload = serde_json::to_string(body).map_err(|e| {
            OrganizationsError::SerializationError {
                detail: e.to_string(),
            }
        })?;

        log::debug!("Request Body: {payload}");

        // 2. 生成签名
        let timestamp = Utc::now().timestamp();
        let date_header = amz_date(timestamp);
        let authorization = self.sign(action, &payload, timestamp);

        // 3. 发送请求（使用 HttpUtils）
        let host = self.host();
        let url = format!("https://{host}");
        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/x-amz-json-1.1")
            .header("Host", &host)
            .header("X-Amz-Date", date_header)
            .header(
                "X-Amz-Target",
                format!("{ORGANIZATIONS_TARGET_PREFIX}.{action}"),
            )
            .header("Authorization", authorization);
        if let Some(token) = &self.credentials.session_token {
            request = request.header("X-Amz-Security-Token", token);
        }
        let request = request.body(payload);

        let (status, response_text) = HttpUtils::execute_request_with_retry(
            request,
            ORGANIZATIONS_SERVICE,
            "POST",
            &format!("Action: {action}"),
            self.max_retries,
        )
        .await?;

        // 4. 非 2xx 按 AWS 错误封套解析并映射
        self.handle_response_error(status, &response_text, ctx)?;

        // 5. 解析响应（个别操作成功时返回空响应体）
        if response_text.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        HttpUtils::parse_json(&response_text, ORGANIZATIONS_SERVICE)
    }

    /// 状态码 >= 400 时从响应体提取异常名并映射为统一错误
    fn handle_response_error(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }

        if let Ok(envelope) = serde_json::from_str::<AwsErrorEnvelope>(response_text) {
            if let Some(exception) = envelope.exception_name() {
                let message = envelope.message.unwrap_or_default();
                log::error!("API error: {exception} - {message}");
                return Err(self.map_error(RawApiError::with_code(&exception, &message), ctx));
            }
        }

        Err(self.unknown_error(RawApiError::new(format!("HTTP {status}: {response_text}"))))
    }
}
