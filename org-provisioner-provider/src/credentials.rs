//! Credential and region resolution
//!
//! Reads the conventional AWS environment variables. Resolution is written
//! against a plain lookup function so it can be unit tested without touching
//! the process environment.

use std::env;

/// Access credentials for the Organizations API.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Access key id (`AKIA...` for long-term keys, `ASIA...` for temporary ones).
    pub access_key_id: String,
    /// Secret access key used to derive the signing key.
    pub secret_access_key: String,
    /// Session token for temporary credentials, included in the signed headers
    /// when present.
    pub session_token: Option<String>,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// 从环境变量读取凭证（`AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` /
    /// `AWS_SESSION_TOKEN`）。
    ///
    /// Returns `None` when either required variable is missing.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let access_key_id = lookup("AWS_ACCESS_KEY_ID")?;
        let secret_access_key = lookup("AWS_SECRET_ACCESS_KEY")?;
        // AWS_SECURITY_TOKEN 是旧版工具链的名字，作为回退接受
        let session_token = lookup("AWS_SESSION_TOKEN").or_else(|| lookup("AWS_SECURITY_TOKEN"));

        Some(Self {
            access_key_id,
            secret_access_key,
            session_token,
        })
    }
}

/// 从环境变量读取 region（`AWS_REGION` 优先于 `AWS_DEFAULT_REGION`），
/// 两者都缺失时回落到客户端默认值。
pub(crate) fn region_from_env(default: &str) -> String {
    region_from_lookup(|name| env::var(name).ok(), default)
}

pub(crate) fn region_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
    default: &str,
) -> String {
    lookup("AWS_REGION")
        .or_else(|| lookup("AWS_DEFAULT_REGION"))
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn resolves_required_pair() {
        let env = env_of(&[
            ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
        ]);
        let creds = Credentials::from_lookup(|k| env.get(k).cloned());

        let creds = creds.expect("credentials should resolve");
        assert_eq!(creds.access_key_id, "AKIDEXAMPLE");
        assert_eq!(creds.secret_access_key, "secret");
        assert!(creds.session_token.is_none());
    }

    #[test]
    fn missing_access_key_yields_none() {
        let env = env_of(&[("AWS_SECRET_ACCESS_KEY", "secret")]);
        assert!(Credentials::from_lookup(|k| env.get(k).cloned()).is_none());
    }

    #[test]
    fn missing_secret_yields_none() {
        let env = env_of(&[("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE")]);
        assert!(Credentials::from_lookup(|k| env.get(k).cloned()).is_none());
    }

    #[test]
    fn session_token_is_optional() {
        let env = env_of(&[
            ("AWS_ACCESS_KEY_ID", "ASIAEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_SESSION_TOKEN", "token-value"),
        ]);
        let creds = Credentials::from_lookup(|k| env.get(k).cloned())
            .expect("credentials should resolve");
        assert_eq!(creds.session_token.as_deref(), Some("token-value"));
    }

    #[test]
    fn legacy_security_token_accepted() {
        let env = env_of(&[
            ("AWS_ACCESS_KEY_ID", "ASIAEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_SECURITY_TOKEN", "legacy-token"),
        ]);
        let creds = Credentials::from_lookup(|k| env.get(k).cloned())
            .expect("credentials should resolve");
        assert_eq!(creds.session_token.as_deref(), Some("legacy-token"));
    }

    #[test]
    fn session_token_preferred_over_legacy_name() {
        let env = env_of(&[
            ("AWS_ACCESS_KEY_ID", "ASIAEXAMPLE"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("AWS_SESSION_TOKEN", "new-token"),
            ("AWS_SECURITY_TOKEN", "legacy-token"),
        ]);
        let creds = Credentials::from_lookup(|k| env.get(k).cloned())
            .expect("credentials should resolve");
        assert_eq!(creds.session_token.as_deref(), Some("new-token"));
    }

    #[test]
    fn region_defaults_when_unset() {
        let env: HashMap<String, String> = HashMap::new();
        assert_eq!(
            region_from_lookup(|k| env.get(k).cloned(), "us-east-1"),
            "us-east-1"
        );
    }

    #[test]
    fn region_prefers_aws_region() {
        let env = env_of(&[
            ("AWS_REGION", "us-gov-west-1"),
            ("AWS_DEFAULT_REGION", "eu-west-1"),
        ]);
        assert_eq!(
            region_from_lookup(|k| env.get(k).cloned(), "us-east-1"),
            "us-gov-west-1"
        );
    }

    #[test]
    fn region_falls_back_to_default_region_var() {
        let env = env_of(&[("AWS_DEFAULT_REGION", "eu-west-1")]);
        assert_eq!(
            region_from_lookup(|k| env.get(k).cloned(), "us-east-1"),
            "eu-west-1"
        );
    }
}
