//! jj-config
//!
//! Layered YAML configuration for the order desk.
//! - documents merge in order (later overrides earlier, objects deep-merge)
//! - the effective config is canonicalised to JSON and hashed (SHA-256) so a
//!   running desk can be tied to the exact settings it priced with
//! - every leaf key must be consumed by code (see `consumption`)
//! - `ShopConfig` is the typed view handed to the pricing/numbering wiring

use anyhow::{Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};

mod consumption;
mod shop;

pub use consumption::{
    consumed_pointers, report_unused_keys, UnusedKeyPolicy, UnusedKeyReport,
};
pub use shop::{NumberingSection, OptionEntry, ShopConfig, ShopSection, DEFAULT_CONFIG_YAML};

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = serde_json::json!({});
    for raw in yaml_docs {
        let v_yaml: serde_yaml::Value = serde_yaml::from_str(raw).context("invalid yaml")?;
        // An empty override file parses as null; it overrides nothing.
        if v_yaml.is_null() {
            continue;
        }
        let v_json = serde_json::to_value(v_yaml).context("yaml->json conversion failed")?;
        merged = deep_merge(merged, v_json);
    }

    let canonical_json = canonicalize_json(&merged)?;
    let config_hash = sha256_hex(canonical_json.as_bytes());
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

fn deep_merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Object(mut a_map), Value::Object(b_map)) => {
            for (k, b_val) in b_map {
                let a_val = a_map.remove(&k).unwrap_or(Value::Null);
                a_map.insert(k, deep_merge(a_val, b_val));
            }
            Value::Object(a_map)
        }
        // Arrays (the option list) are replaced wholesale, never spliced.
        (_, b_other) => b_other,
    }
}

/// Compact JSON with object keys sorted recursively, so the hash does not
/// depend on the order keys appeared in the YAML layers.
fn canonicalize_json(v: &Value) -> Result<String> {
    serde_json::to_string(&sort_keys(v)).context("canonical json serialize failed")
}

fn sort_keys(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut keys: Vec<_> = map.keys().cloned().collect();
            keys.sort();
            let mut new = serde_json::Map::new();
            for k in keys {
                new.insert(k.clone(), sort_keys(&map[&k]));
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_keys).collect()),
        _ => v.clone(),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_layers_override_earlier_ones() {
        let base = "shop:\n  base_price: 5.0\n  app_name: Just Java\n";
        let over = "shop:\n  base_price: 4.5\n";
        let cfg = load_layered_yaml_from_strings(&[base, over]).unwrap();
        assert_eq!(cfg.config_json.pointer("/shop/base_price").unwrap(), 4.5);
        assert_eq!(
            cfg.config_json.pointer("/shop/app_name").unwrap(),
            "Just Java"
        );
    }

    #[test]
    fn arrays_are_replaced_not_merged() {
        let base = "options:\n  - id: milk\n  - id: sugar\n";
        let over = "options:\n  - id: chocolate\n";
        let cfg = load_layered_yaml_from_strings(&[base, over]).unwrap();
        let opts = cfg.config_json["options"].as_array().unwrap();
        assert_eq!(opts.len(), 1);
        assert_eq!(opts[0]["id"], "chocolate");
    }

    #[test]
    fn hash_ignores_key_order() {
        let a = load_layered_yaml_from_strings(&["shop:\n  a: 1\n  b: 2\n"]).unwrap();
        let b = load_layered_yaml_from_strings(&["shop:\n  b: 2\n  a: 1\n"]).unwrap();
        assert_eq!(a.config_hash, b.config_hash);
        assert_eq!(a.config_hash.len(), 64);
    }

    #[test]
    fn hash_changes_with_values() {
        let a = load_layered_yaml_from_strings(&["shop:\n  base_price: 5.0\n"]).unwrap();
        let b = load_layered_yaml_from_strings(&["shop:\n  base_price: 5.5\n"]).unwrap();
        assert_ne!(a.config_hash, b.config_hash);
    }

    #[test]
    fn empty_layer_is_ignored() {
        let cfg = load_layered_yaml_from_strings(&["shop:\n  base_price: 5.0\n", ""]).unwrap();
        assert_eq!(cfg.config_json.pointer("/shop/base_price").unwrap(), 5.0);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(load_layered_yaml_from_strings(&["shop: [unclosed"]).is_err());
    }
}
