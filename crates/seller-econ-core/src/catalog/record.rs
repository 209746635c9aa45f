use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{SellerEconError, SellerEconResult};

/// Shortest product name the catalog accepts, in characters.
pub const MIN_NAME_CHARS: usize = 2;

/// Fulfilment model: marketplace-operated warehouse (FBO) vs
/// seller-operated fulfilment (FBS).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Warehouse {
    #[default]
    Fbo,
    Fbs,
}

impl Warehouse {
    /// Lenient parse accepting Latin and Cyrillic spellings in any case.
    pub fn parse(s: &str) -> Option<Warehouse> {
        match s.trim().to_lowercase().as_str() {
            "fbo" | "фбо" => Some(Warehouse::Fbo),
            "fbs" | "фбс" => Some(Warehouse::Fbs),
            _ => None,
        }
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cyrillic spelling, matching the shipped catalog data.
        let s = match self {
            Warehouse::Fbo => "ФБО",
            Warehouse::Fbs => "ФБС",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Warehouse {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Warehouse::parse(s).ok_or_else(|| format!("unknown warehouse type '{s}'"))
    }
}

impl From<Warehouse> for String {
    fn from(w: Warehouse) -> String {
        w.to_string()
    }
}

impl TryFrom<String> for Warehouse {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One product → commission entry of the catalog.
///
/// Identity is the case-insensitive name; the persisted JSON shape
/// (`name`/`commission`/`warehouse`/`category`) matches the stored layers
/// written by earlier versions of the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    /// Marketplace commission in percent (15.5 = 15.5%).
    #[serde(rename = "commission")]
    pub commission_percent: Decimal,
    #[serde(default)]
    pub warehouse: Warehouse,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
}

impl ProductRecord {
    /// Construct with all string fields trimmed.
    pub fn new(
        name: &str,
        commission_percent: Decimal,
        warehouse: Warehouse,
        category: &str,
    ) -> ProductRecord {
        ProductRecord {
            name: name.trim().to_string(),
            commission_percent,
            warehouse,
            category: category.trim().to_string(),
        }
    }

    /// Case-insensitive identity key.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Constraints imports and manual adds must satisfy.
    pub fn validate(&self) -> SellerEconResult<()> {
        let mut fields = Vec::new();
        if !usable_name(&self.name) {
            fields.push("name".to_string());
        }
        if self.commission_percent <= Decimal::ZERO || self.commission_percent > dec!(100) {
            fields.push("commission".to_string());
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(SellerEconError::InvalidInput { fields })
        }
    }
}

/// Whether a name survives the minimum-length rule after trimming.
pub fn usable_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_CHARS
}
