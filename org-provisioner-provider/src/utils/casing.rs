//! Response key-casing normalization
//!
//! The Organizations API speaks CamelCase (`CreateAccountStatus`, `FailureReason`);
//! the automation host expects snake_case. [`snake_case_keys`] rewrites every
//! mapping key in a response tree, recursively, leaving all values untouched.

use serde_json::Value;

/// 将单个 CamelCase 键转换为 snake_case。
///
/// Handles acronym runs (`HTTPEndpoint` -> `http_endpoint`), digits
/// (`S3Bucket` -> `s3_bucket`) and pluralized trailing acronyms
/// (`TargetGroupARNs` -> `target_group_arns`). Keys that are already
/// snake_case pass through unchanged, so the conversion is idempotent.
pub fn snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();

    // 结尾复数缩写按整体处理: "...ARNs" -> "..._arns"
    let stem_end = trailing_plural_acronym_start(&chars).unwrap_or(chars.len());

    let mut out = String::with_capacity(input.len() + 4);
    for i in 0..stem_end {
        let ch = chars[i];
        if ch.is_ascii_uppercase() {
            if i > 0 && is_word_boundary(&chars, i) {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    if stem_end < chars.len() {
        if !out.is_empty() {
            out.push('_');
        }
        out.extend(chars[stem_end..].iter().map(|c| c.to_ascii_lowercase()));
    }

    out
}

/// 递归地将 JSON 树中所有对象键转换为 snake_case。
///
/// Objects are rewritten key by key, arrays are traversed element by element,
/// and scalars are returned as-is. Total over any `Value`.
pub fn snake_case_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (snake_case(&key), snake_case_keys(val)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(snake_case_keys).collect()),
        other => other,
    }
}

/// 大写字母前是否需要插入下划线
fn is_word_boundary(chars: &[char], i: usize) -> bool {
    let prev = chars[i - 1];
    if prev.is_ascii_lowercase() || prev.is_ascii_digit() {
        return true;
    }
    // 缩写结尾处: "HTTPEndpoint" 的 'E' 后面跟着小写字母
    prev.is_ascii_uppercase() && chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase())
}

/// 若键以复数缩写结尾（至少 3 个大写字母 + 's'），返回缩写的起始下标
fn trailing_plural_acronym_start(chars: &[char]) -> Option<usize> {
    if chars.last() != Some(&'s') {
        return None;
    }
    let end = chars.len() - 1;
    let start = chars[..end]
        .iter()
        .rposition(|c| !c.is_ascii_uppercase())
        .map_or(0, |i| i + 1);
    (end - start >= 3).then_some(start)
}
