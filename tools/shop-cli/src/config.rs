//! CLI configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_commerce::checkout::PricingPolicy;
use shop_commerce::Money;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where session state is kept.
    #[serde(default)]
    pub store: StoreConfig,

    /// Sign-in behaviour.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Checkout rates and timing.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file, TOML or JSON by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Problems that make the config unusable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let checkout = &self.checkout;
        if !(0.0..1.0).contains(&checkout.tax_rate) {
            errors.push("checkout.tax_rate must be in [0, 1)".to_string());
        }
        if checkout.free_shipping_threshold < 0.0 || checkout.flat_shipping < 0.0 {
            errors.push("checkout shipping amounts must not be negative".to_string());
        }
        if self.log.filter.trim().is_empty() {
            errors.push("log.filter must not be empty".to_string());
        }
        errors
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storage backend for session state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// One JSON file per key under `data_dir`.
    #[default]
    File,
    /// Process memory; nothing survives the command.
    Memory,
}

/// Session state storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory for the file backend (default: ~/.local/share/shop/store).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Backend kind.
    #[serde(default)]
    pub backend: StoreBackend,
}

/// Sign-in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated login/register round trip in milliseconds.
    #[serde(default = "default_auth_latency_ms")]
    pub latency_ms: u64,
}

fn default_auth_latency_ms() -> u64 {
    800
}

impl AuthConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_auth_latency_ms(),
        }
    }
}

/// Checkout configuration. Amounts are in dollars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated payment processing time in milliseconds.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    /// Subtotal at which shipping becomes free.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: f64,

    /// Shipping charged below the threshold.
    #[serde(default = "default_flat_shipping")]
    pub flat_shipping: f64,

    /// Tax rate as a fraction of the subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// Days from order to estimated delivery.
    #[serde(default = "default_delivery_days")]
    pub delivery_days: u32,
}

fn default_processing_delay_ms() -> u64 {
    2000
}

fn default_free_shipping_threshold() -> f64 {
    50.0
}

fn default_flat_shipping() -> f64 {
    4.99
}

fn default_tax_rate() -> f64 {
    0.07
}

fn default_delivery_days() -> u32 {
    7
}

impl CheckoutConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    /// Pricing rules for the order summary.
    pub fn policy(&self) -> PricingPolicy {
        PricingPolicy {
            free_shipping_threshold: Money::from_decimal(self.free_shipping_threshold),
            flat_shipping: Money::from_decimal(self.flat_shipping),
            tax_rate: self.tax_rate,
            delivery_days: self.delivery_days,
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
            free_shipping_threshold: default_free_shipping_threshold(),
            flat_shipping: default_flat_shipping(),
            tax_rate: default_tax_rate(),
            delivery_days: default_delivery_days(),
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog to use instead of the built-in products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive used when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON log lines.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront CLI configuration

[store]
# data_dir = "~/.local/share/shop/store"
backend = "file"

[auth]
latency_ms = 800

[checkout]
processing_delay_ms = 2000
free_shipping_threshold = 50.0
flat_shipping = 4.99
tax_rate = 0.07
delivery_days = 7

[catalog]
# path = "catalog.json"

[log]
filter = "info"
json = false
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.auth.latency(), Duration::from_millis(800));
        assert_eq!(config.checkout.processing_delay(), Duration::from_secs(2));
        assert_eq!(config.checkout.policy(), PricingPolicy::default());
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(config.log.filter, "info");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.checkout.policy(), PricingPolicy::default());
        assert_eq!(config.auth.latency_ms, 800);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [store]
            backend = "memory"

            [checkout]
            tax_rate = 0.1
            "#,
        )
        .unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.checkout.tax_rate, 0.1);
        assert_eq!(config.checkout.delivery_days, 7);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("shop.json");
        std::fs::write(&json_path, r#"{"auth": {"latency_ms": 5}}"#).unwrap();
        assert_eq!(CliConfig::load(&json_path).unwrap().auth.latency_ms, 5);

        let toml_path = dir.path().join("shop.toml");
        let mut config = CliConfig::default();
        config.log.json = true;
        std::fs::write(&toml_path, toml::to_string_pretty(&config).unwrap()).unwrap();
        assert!(CliConfig::load(&toml_path).unwrap().log.json);
    }

    #[test]
    fn test_validate_rejects_bad_rates() {
        let mut config = CliConfig::default();
        config.checkout.tax_rate = 1.5;
        config.checkout.flat_shipping = -1.0;
        assert_eq!(config.validate().len(), 2);
    }
}
