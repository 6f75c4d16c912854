//! Organizations 客户端集成测试
//!
//! 只做只读操作（查询创建状态），不会真的提交账号创建请求。
//!
//! 运行方式:
//! ```bash
//! AWS_ACCESS_KEY_ID=xxx AWS_SECRET_ACCESS_KEY=xxx TEST_CREATE_ACCOUNT_REQUEST_ID=car-xxx \
//!     cargo test -p org-provisioner-provider --test organizations_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::TestContext;
use org_provisioner_provider::{
    DescribeCreateAccountStatusRequest, OrganizationsApi, OrganizationsError, casing,
};

// ============ 查询测试 ============

#[tokio::test]
#[ignore]
async fn test_describe_create_account_status() {
    skip_if_no_credentials!(
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "TEST_CREATE_ACCOUNT_REQUEST_ID"
    );

    let ctx = TestContext::organizations().expect("创建测试上下文失败");
    let request_id = require_some!(ctx.request_id.clone(), "缺少测试请求 id");

    let request = DescribeCreateAccountStatusRequest {
        create_account_request_id: request_id.clone(),
    };
    let response = require_ok!(
        ctx.client.describe_create_account_status(&request).await,
        "describe_create_account_status 调用失败"
    );

    let status = &response["CreateAccountStatus"];
    assert!(status.is_object(), "响应应包含 CreateAccountStatus 对象: {response}");
    assert_eq!(
        status["Id"].as_str(),
        Some(request_id.as_str()),
        "返回的请求 id 应与查询一致"
    );
    assert!(status["State"].is_string(), "状态字段应存在: {status}");

    // 规范化后键名应为 snake_case
    let normalized = casing::snake_case_keys(response.clone());
    assert!(normalized["create_account_status"]["state"].is_string());

    println!("✓ describe_create_account_status 测试通过: {}", status["State"]);
}

#[tokio::test]
#[ignore]
async fn test_describe_unknown_request_id() {
    skip_if_no_credentials!("AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY");

    let ctx = TestContext::organizations().expect("创建测试上下文失败");

    // 格式合法但不存在的请求 id
    let request = DescribeCreateAccountStatusRequest {
        create_account_request_id: "car-1234567890abcdef".to_string(),
    };
    let result = ctx.client.describe_create_account_status(&request).await;

    match result {
        Err(OrganizationsError::RequestNotFound { request_id, .. }) => {
            assert_eq!(request_id, "car-1234567890abcdef");
            println!("✓ 未知请求 id 返回 RequestNotFound");
        }
        other => panic!("应返回 RequestNotFound, 实际: {other:?}"),
    }
}

// ============ 凭证测试 ============

#[tokio::test]
#[ignore]
async fn test_bogus_credentials_rejected() {
    let client = TestContext::bogus_client();

    let request = DescribeCreateAccountStatusRequest {
        create_account_request_id: "car-1234567890abcdef".to_string(),
    };
    let result = client.describe_create_account_status(&request).await;

    match result {
        Err(OrganizationsError::InvalidCredentials { .. }) => {
            println!("✓ 无效凭证返回 InvalidCredentials");
        }
        other => panic!("应返回 InvalidCredentials, 实际: {other:?}"),
    }
}
