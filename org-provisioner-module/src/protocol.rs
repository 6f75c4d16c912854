//! Host protocol response shaping
//!
//! The automation host reads exactly one JSON document from stdout and decides
//! success or failure from the exit code plus the `failed` field. Everything
//! human-readable goes to stderr via tracing, never here.

use std::process::ExitCode;

use serde_json::{Map, Value, json};

use crate::adapter::{ModuleError, StatusReport};

/// 序列化状态记录失败时的兜底输出
const FALLBACK_BODY: &str =
    r#"{"failed":true,"changed":false,"msg":"Failed to serialize module result"}"#;

/// One-shot response document written to stdout.
#[derive(Debug)]
pub struct ModuleResponse {
    body: Value,
    failed: bool,
}

impl ModuleResponse {
    /// 成功结果：状态记录平铺到顶层，附上 `changed`
    pub fn success(report: &StatusReport) -> Self {
        let mut body = flatten(report.status.clone());
        body.insert("changed".to_string(), json!(report.changed));
        Self {
            body: Value::Object(body),
            failed: false,
        }
    }

    /// 失败结果
    ///
    /// 业务失败把完整状态记录平铺进去（`failure_reason` 因此可见），
    /// 传输层错误附上结构化 `error` 负载。
    pub fn failure(error: &ModuleError) -> Self {
        let mut body = match error {
            ModuleError::CreationFailed { status, .. } => flatten(status.clone()),
            _ => Map::new(),
        };
        if let ModuleError::Provider(e) = error {
            if let Ok(value) = serde_json::to_value(e) {
                body.insert("error".to_string(), value);
            }
        }
        body.insert("failed".to_string(), json!(true));
        body.insert("changed".to_string(), json!(false));
        body.insert("msg".to_string(), json!(error.to_string()));
        Self {
            body: Value::Object(body),
            failed: true,
        }
    }

    /// 参数或环境问题，还没走到 API 调用
    pub fn invalid_args(msg: &str) -> Self {
        Self::failure(&ModuleError::InvalidArgs(msg.to_string()))
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// 输出文档（单行 JSON）
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.body).unwrap_or_else(|_| FALLBACK_BODY.to_string())
    }
}

/// 把状态对象的键提升到顶层；协议相关的键随后写入，同名时协议键胜出
fn flatten(status: Value) -> Map<String, Value> {
    match status {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;
