//! Module entry point
//!
//! Reads one JSON argument document (from an args file path given as the first
//! CLI argument, or stdin), performs a single Organizations call and writes one
//! JSON result document to stdout. stdout belongs to the host protocol; all
//! logging goes to stderr.

mod adapter;
mod params;
mod protocol;

use std::process::ExitCode;

use org_provisioner_provider::OrganizationsClient;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use adapter::{ModuleError, submit_or_query};
use params::ModuleParams;
use protocol::ModuleResponse;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (stdout carries the result document)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let raw = match read_args_document() {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("Failed to read module arguments: {e}");
            return emit(&ModuleResponse::invalid_args(&format!(
                "cannot read argument document: {e}"
            )));
        }
    };

    let params = match ModuleParams::from_json(&raw) {
        Ok(params) => params,
        Err(e) => {
            tracing::error!("Failed to parse module arguments: {e}");
            return emit(&ModuleResponse::invalid_args(&format!(
                "cannot parse argument document: {e}"
            )));
        }
    };

    let Some(client) = OrganizationsClient::from_env() else {
        return emit(&ModuleResponse::invalid_args(
            "AWS credentials not found in environment (AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY)",
        ));
    };

    match submit_or_query(&client, &params).await {
        Ok(report) => {
            tracing::info!("Module run complete (changed: {})", report.changed);
            emit(&ModuleResponse::success(&report))
        }
        Err(error) => {
            log_failure(&error);
            emit(&ModuleResponse::failure(&error))
        }
    }
}

/// 第一个 CLI 参数是 args 文件路径；没有参数时读 stdin
fn read_args_document() -> std::io::Result<String> {
    use std::io::Read;

    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// 预期内的失败打 warn，其余打 error
fn log_failure(error: &ModuleError) {
    match error {
        ModuleError::Provider(e) if !e.is_expected() => {
            tracing::error!("Organizations call failed: {e}");
        }
        _ => tracing::warn!("Module run failed: {error}"),
    }
}

/// 写出结果文档并换取退出码
fn emit(response: &ModuleResponse) -> ExitCode {
    println!("{}", response.to_json());
    response.exit_code()
}
