//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use org_provisioner_provider::{Credentials, OrganizationsClient};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装客户端和待查询的请求 id
pub struct TestContext {
    pub client: OrganizationsClient,
    pub request_id: Option<String>,
}

impl TestContext {
    /// 从环境变量创建 Organizations 测试上下文
    pub fn organizations() -> Option<Self> {
        let client = OrganizationsClient::from_env()?;
        let request_id = env::var("TEST_CREATE_ACCOUNT_REQUEST_ID").ok();

        Some(Self { client, request_id })
    }

    /// 构造一个凭证必然无效的客户端
    pub fn bogus_client() -> OrganizationsClient {
        OrganizationsClient::new(Credentials::new("AKIDEADBEEFDEADBEEF", "bogus-secret-key"))
    }
}
