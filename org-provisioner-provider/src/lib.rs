//! # org-provisioner-provider
//!
//! An AWS Organizations API client library for provisioning GovCloud (US)
//! accounts.
//!
//! The client speaks the `x-amz-json-1.1` wire protocol directly and signs
//! every request with AWS Signature Version 4, so it carries no AWS SDK
//! dependency. Two operations are exposed through the [`OrganizationsApi`]
//! trait:
//!
//! | Operation | Purpose |
//! |-----------|---------|
//! | `CreateGovCloudAccount` | Submit an asynchronous account creation request |
//! | `DescribeCreateAccountStatus` | Poll an earlier request by its `car-*` id |
//!
//! Account creation is asynchronous on the AWS side: the create call returns a
//! `CreateAccountStatus` envelope whose `Id` can be polled later. Both
//! operations return the raw response as [`serde_json::Value`] so callers can
//! decide how to post-process it (see [`casing::snake_case_keys`]).
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and static binaries.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use org_provisioner_provider::{
//!     CreateGovCloudAccountRequest, OrganizationsApi, OrganizationsClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build a client from AWS_* environment variables
//!     let client = OrganizationsClient::from_env().ok_or("missing AWS credentials")?;
//!
//!     // 2. Submit the creation request
//!     let request = CreateGovCloudAccountRequest {
//!         email: Some("owner@example.com".to_string()),
//!         account_name: Some("audit".to_string()),
//!         ..Default::default()
//!     };
//!     let response = client.create_gov_cloud_account(&request).await?;
//!
//!     // 3. The response carries the request id for later polling
//!     println!("{}", response["CreateAccountStatus"]["Id"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, OrganizationsError>`](OrganizationsError).
//! The error enum provides structured variants for common failure modes:
//!
//! - [`OrganizationsError::InvalidCredentials`] — signature or token rejected
//! - [`OrganizationsError::OrganizationNotInUse`] — caller is not part of an organization
//! - [`OrganizationsError::RequestNotFound`] — unknown `car-*` request id
//! - [`OrganizationsError::RateLimited`] — API rate limit exceeded (retryable)
//! - [`OrganizationsError::NetworkError`] — network connectivity issue (retryable)
//!
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are automatically
//! retried with exponential backoff. See [`OrganizationsError`] for the full list.

mod client;
mod credentials;
mod error;
mod http_client;
mod traits;
mod utils;

// Re-export error types
pub use error::{OrganizationsError, Result};

// Re-export core trait only (internal helpers are not exported)
pub use traits::OrganizationsApi;

// Re-export client, builder and wire types
pub use client::{
    AccountState, CreateGovCloudAccountRequest, DescribeCreateAccountStatusRequest,
    OrganizationsClient, OrganizationsClientBuilder, Tag,
};

// Re-export credential resolution
pub use credentials::Credentials;

// Re-export casing utilities
pub use utils::casing;
