//! Module argument schema
//!
//! Defines the argument structure the automation host hands to this module.
//! Every field is optional; which combination is required is decided by the
//! Organizations API, not here. `null` and an absent key are equivalent.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Arguments accepted by the provisioning module.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleParams {
    /// Email address of the owner of the new account.
    pub email: Option<String>,

    /// Friendly name for the new account.
    pub account_name: Option<String>,

    /// IAM role name the management account may assume in the new account.
    pub role_name: Option<String>,

    /// `ALLOW` or `DENY` IAM users access to billing information.
    pub iam_user_access_to_billing: Option<String>,

    /// Tags to attach to the new account.
    pub tags: Option<BTreeMap<String, String>>,

    /// When set, poll this earlier creation request instead of creating.
    pub create_account_request_id: Option<String>,
}

impl ModuleParams {
    /// Parse the raw argument document. Unknown keys are ignored.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
