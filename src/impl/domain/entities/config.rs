use iso_currency::Currency;
use serde_derive::{Deserialize, Serialize};

use crate::errors::Error;

/// Company identity shown in the invoice header and footer. All values
/// are user-supplied and constant across a batch; empty values are legal
/// and render blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyConfig {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    /// Reference to a logo asset held by the caller. The plaintext layout
    /// renders a placeholder either way; the reference is carried for
    /// collaborators that embed real imagery.
    pub logo: Option<String>,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: "TOKO KAOS KEREN".to_string(),
            tagline: "Quality T-Shirts for Everyone".to_string(),
            address: "Jl. Contoh No. 123, Jakarta, Indonesia".to_string(),
            phone: "+62 812-3456-7890".to_string(),
            email: "order@tokokaoskeren.com".to_string(),
            website: "www.tokokaoskeren.com".to_string(),
            logo: None,
        }
    }
}

/// Transfer details shown while a balance remains due.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            bank_name: "Bank BCA".to_string(),
            account_number: "1234567890".to_string(),
            account_holder: "PT TOKO KAOS KEREN".to_string(),
        }
    }
}

/// Pricing applied uniformly to every line item. `unit_price: None`
/// selects the quantity-only degraded mode: totals reduce to a quantity
/// display and no amounts are printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub unit_price: Option<f64>,
    pub currency: Currency,
    /// Description printed for each item row.
    pub item_label: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            unit_price: Some(100_000.0),
            currency: Currency::IDR,
            item_label: "Kaos Custom".to_string(),
        }
    }
}

/// The full configuration surface consumed from outside the core.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub company: CompanyConfig,
    pub bank: BankConfig,
    pub pricing: PricingConfig,
}

impl GeneratorConfig {
    /// Parse a saved configuration blob. Missing fields fall back to the
    /// defaults, so older config files keep loading after new fields are
    /// added.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_json_merges_with_defaults() {
        let config =
            GeneratorConfig::from_json_str(r#"{"company": {"name": "ACME"}}"#).unwrap();
        assert_eq!(config.company.name, "ACME");
        assert_eq!(config.company.tagline, CompanyConfig::default().tagline);
        assert_eq!(config.bank, BankConfig::default());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = GeneratorConfig::default();
        let json = config.to_json_string().unwrap();
        assert_eq!(GeneratorConfig::from_json_str(&json).unwrap(), config);
    }
}
