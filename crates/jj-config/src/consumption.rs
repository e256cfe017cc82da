//! Unused-key guard.
//!
//! "Consumed pointers" are JSON Pointer prefixes that code actually reads.
//! A leaf under any consumed prefix is consumed; every other leaf is unused.
//! A misspelt key (`base_prise`) would otherwise be silently ignored while
//! the default price stays in effect.
//!
//! - prefix "/shop/base_price" consumes exactly that leaf
//! - prefix "/options" consumes "/options/0/id", "/options/3/unit_cost", ...

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnusedKeyPolicy {
    Warn,
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnusedKeyReport {
    /// Consumed JSON-pointer prefixes used for this analysis (sorted, unique)
    pub consumed_prefixes: Vec<String>,
    /// Unused leaf pointers (sorted)
    pub unused_leaf_pointers: Vec<String>,
}

impl UnusedKeyReport {
    pub fn is_clean(&self) -> bool {
        self.unused_leaf_pointers.is_empty()
    }
}

/// Pointers read by `ShopConfig`. Keep in step with its fields.
pub fn consumed_pointers() -> &'static [&'static str] {
    &[
        "/shop/app_name",
        "/shop/currency_symbol",
        "/shop/base_price",
        "/options",
        "/numbering/store_path",
    ]
}

/// Produce an unused-key report.
/// `Fail` turns a non-clean report into an error; `Warn` logs and returns it.
pub fn report_unused_keys(config_json: &Value, policy: UnusedKeyPolicy) -> Result<UnusedKeyReport> {
    let consumed: BTreeSet<String> = consumed_pointers()
        .iter()
        .map(|p| normalize_pointer(p))
        .collect();
    let consumed_prefixes: Vec<String> = consumed.into_iter().collect();

    let mut leaves: Vec<String> = Vec::new();
    collect_leaf_pointers(config_json, "", &mut leaves);

    let mut unused: Vec<String> = leaves
        .into_iter()
        .filter(|lp| !consumed_prefixes.iter().any(|cp| is_prefix_pointer(cp, lp)))
        .collect();
    unused.sort();
    unused.dedup();

    let report = UnusedKeyReport {
        consumed_prefixes,
        unused_leaf_pointers: unused,
    };

    if !report.is_clean() {
        match policy {
            UnusedKeyPolicy::Fail => bail!(
                "CONFIG_UNUSED_KEYS: {} unused config leaf key(s) detected. \
                Remove them or fix their spelling. First few: {}",
                report.unused_leaf_pointers.len(),
                preview_list(&report.unused_leaf_pointers, 12)
            ),
            UnusedKeyPolicy::Warn => tracing::warn!(
                count = report.unused_leaf_pointers.len(),
                keys = %preview_list(&report.unused_leaf_pointers, 12),
                "unused config keys"
            ),
        }
    }

    Ok(report)
}

/// Must begin with "/", no trailing "/" unless it's just "/".
fn normalize_pointer(p: &str) -> String {
    let mut s = p.trim().to_string();
    if s.is_empty() {
        return "/".to_string();
    }
    if !s.starts_with('/') {
        s.insert(0, '/');
    }
    while s.ends_with('/') && s.len() > 1 {
        s.pop();
    }
    s
}

/// "/a/b" consumes "/a/b" and "/a/b/c" but NOT "/a/bc".
fn is_prefix_pointer(prefix: &str, leaf: &str) -> bool {
    if prefix == "/" || leaf == prefix {
        return true;
    }
    leaf.strip_prefix(prefix)
        .map(|rest| rest.starts_with('/'))
        .unwrap_or(false)
}

fn collect_leaf_pointers(v: &Value, prefix: &str, out: &mut Vec<String>) {
    match v {
        Value::Object(map) => {
            for (k, vv) in map.iter() {
                let next = format!("{}/{}", prefix, escape_pointer_token(k));
                collect_leaf_pointers(vv, &next, out);
            }
        }
        Value::Array(arr) => {
            for (i, vv) in arr.iter().enumerate() {
                let next = format!("{}/{}", prefix, i);
                collect_leaf_pointers(vv, &next, out);
            }
        }
        _ => {
            let p = if prefix.is_empty() {
                "/".to_string()
            } else {
                prefix.to_string()
            };
            out.push(p);
        }
    }
}

fn escape_pointer_token(s: &str) -> String {
    s.replace('~', "~0").replace('/', "~1")
}

fn preview_list(items: &[String], n: usize) -> String {
    let take = items.iter().take(n).cloned().collect::<Vec<_>>();
    format!("{:?}", take)
}
