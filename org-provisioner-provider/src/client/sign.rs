//! AWS Signature Version 4 签名

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use super::{ORGANIZATIONS_SERVICE, ORGANIZATIONS_TARGET_PREFIX, OrganizationsClient};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 计算
pub(crate) fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// 签名时间戳（`YYYYMMDD'T'HHMMSS'Z'`），同一值也作为 `X-Amz-Date` 请求头发送
pub(crate) fn amz_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_else(Utc::now)
        .format("%Y%m%dT%H%M%SZ")
        .to_string()
}

impl OrganizationsClient {
    /// 生成 AWS4-HMAC-SHA256 签名
    pub(crate) fn sign(&self, action: &str, payload: &str, timestamp: i64) -> String {
        let amz_date = amz_date(timestamp);
        let date = &amz_date[..8];

        // 1. 拼接规范请求串（头部按名称字典序排列）
        let http_request_method = "POST";
        let canonical_uri = "/";
        let canonical_query_string = "";
        let host = self.host();
        let target = format!("{ORGANIZATIONS_TARGET_PREFIX}.{action}");

        let mut canonical_headers = format!(
            "content-type:application/x-amz-json-1.1\nhost:{host}\nx-amz-date:{amz_date}\n"
        );
        let mut signed_headers = String::from("content-type;host;x-amz-date");
        if let Some(token) = &self.credentials.session_token {
            canonical_headers.push_str(&format!("x-amz-security-token:{token}\n"));
            signed_headers.push_str(";x-amz-security-token");
        }
        canonical_headers.push_str(&format!("x-amz-target:{target}\n"));
        signed_headers.push_str(";x-amz-target");

        let hashed_payload = hex::encode(Sha256::digest(payload.as_bytes()));
        let canonical_request = format!(
            "{http_request_method}\n{canonical_uri}\n{canonical_query_string}\n{canonical_headers}\n{signed_headers}\n{hashed_payload}"
        );

        // 2. 拼接待签名字符串
        let algorithm = "AWS4-HMAC-SHA256";
        let credential_scope = format!(
            "{date}/{}/{ORGANIZATIONS_SERVICE}/aws4_request",
            self.region
        );
        let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
        let string_to_sign =
            format!("{algorithm}\n{amz_date}\n{credential_scope}\n{hashed_canonical_request}");

        // 3. 逐级派生签名密钥并计算签名
        let secret_date = hmac_sha256(
            format!("AWS4{}", self.credentials.secret_access_key).as_bytes(),
            date.as_bytes(),
        );
        let secret_region = hmac_sha256(&secret_date, self.region.as_bytes());
        let secret_service = hmac_sha256(&secret_region, ORGANIZATIONS_SERVICE.as_bytes());
        let secret_signing = hmac_sha256(&secret_service, b"aws4_request");
        let signature = hex::encode(hmac_sha256(&secret_signing, string_to_sign.as_bytes()));

        // 4. 拼接 Authorization
        format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            algorithm,
            self.credentials.access_key_id,
            credential_scope,
            signed_headers,
            signature
        )
    }
}
