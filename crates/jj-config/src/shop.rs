use std::path::PathBuf;

use anyhow::{Context, Result};
use jj_pricing::{check_unit_price, price_to_micros, Micros, OptionDef, PriceTable};
use serde::{Deserialize, Serialize};

use crate::consumption::{report_unused_keys, UnusedKeyPolicy};
use crate::{load_layered_yaml_from_strings, LoadedConfig};

/// Base layer applied under every user-supplied layer.
pub const DEFAULT_CONFIG_YAML: &str = r#"
shop:
  app_name: Just Java
  currency_symbol: "$"
  base_price: 5.0
options:
  - id: whipped_cream
    label: Whipped Cream
    unit_cost: 0.5
  - id: milk
    label: Milk
    unit_cost: 0.5
  - id: sugar
    label: Sugar
    unit_cost: 0.0
  - id: chocolate
    label: Chocolate
    unit_cost: 0.5
numbering:
  store_path: order_counter.json
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    pub shop: ShopSection,
    pub options: Vec<OptionEntry>,
    pub numbering: NumberingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSection {
    /// Used in the share subject line.
    pub app_name: String,
    pub currency_symbol: String,
    /// Price of one item before options, in currency units.
    pub base_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub id: String,
    pub label: String,
    pub unit_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberingSection {
    /// JSON file holding the order counter. Relative paths resolve against
    /// the working directory.
    pub store_path: PathBuf,
}

impl ShopConfig {
    /// Read YAML files in merge order, on top of [`DEFAULT_CONFIG_YAML`].
    pub fn load(paths: &[&str], policy: UnusedKeyPolicy) -> Result<(Self, LoadedConfig)> {
        let mut docs: Vec<String> = Vec::with_capacity(paths.len());
        for p in paths {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read yaml path: {p}"))?;
            docs.push(raw);
        }
        let doc_refs: Vec<&str> = docs.iter().map(|s| s.as_str()).collect();
        Self::from_layers(&doc_refs, policy)
    }

    /// Same as [`ShopConfig::load`] for in-memory YAML documents.
    pub fn from_layers(yaml_docs: &[&str], policy: UnusedKeyPolicy) -> Result<(Self, LoadedConfig)> {
        let mut layers = Vec::with_capacity(yaml_docs.len() + 1);
        layers.push(DEFAULT_CONFIG_YAML);
        layers.extend_from_slice(yaml_docs);

        let loaded = load_layered_yaml_from_strings(&layers)?;
        report_unused_keys(&loaded.config_json, policy)?;

        let cfg: ShopConfig = serde_json::from_value(loaded.config_json.clone())
            .context("config does not match the shop schema")?;
        // Surface bad prices here rather than at first order.
        cfg.price_table()?;
        cfg.base_price_micros()?;

        tracing::info!(
            config_hash = %loaded.config_hash,
            options = cfg.options.len(),
            "shop config loaded"
        );
        Ok((cfg, loaded))
    }

    pub fn base_price_micros(&self) -> Result<Micros> {
        let m = price_to_micros(self.shop.base_price).context("shop.base_price")?;
        check_unit_price("base_price", m).context("shop.base_price")
    }

    pub fn price_table(&self) -> Result<PriceTable> {
        let mut defs = Vec::with_capacity(self.options.len());
        for o in &self.options {
            let cost = price_to_micros(o.unit_cost)
                .with_context(|| format!("options[{}].unit_cost", o.id))?;
            defs.push(OptionDef::new(o.id.clone(), o.label.clone(), cost));
        }
        PriceTable::new(defs).context("options")
    }
}
