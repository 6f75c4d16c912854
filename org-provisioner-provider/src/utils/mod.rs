//! Utility modules.

/// Response key-casing normalization (CamelCase -> snake_case).
pub mod casing;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
