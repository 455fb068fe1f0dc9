use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::utils::parse_value;

/// Chains an address can be looked up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Ethereum,
    Bitcoin,
    Solana,
    Ton,
}

impl Network {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Bitcoin => "bitcoin",
            Self::Solana => "solana",
            Self::Ton => "ton",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ethereum" | "eth" => Ok(Self::Ethereum),
            "bitcoin" | "btc" => Ok(Self::Bitcoin),
            "solana" | "sol" => Ok(Self::Solana),
            "ton" => Ok(Self::Ton),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

/// A single transfer as delivered by the upstream fetcher.
///
/// Fields the fetcher leaves out deserialize to empty strings; an empty
/// `from`, `to` or `hash` is treated as missing by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub hash:      String,
    #[serde(default)]
    pub from:      String,
    #[serde(default)]
    pub to:        String,
    #[serde(default)]
    pub value:     String,
    #[serde(default)]
    pub timestamp: i64,
}

impl Transaction {
    pub fn new(
        hash: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        value: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            hash: hash.into(),
            from: from.into(),
            to: to.into(),
            value: value.into(),
            timestamp,
        }
    }

    pub fn has_endpoints(&self) -> bool { !self.from.is_empty() && !self.to.is_empty() }

    pub fn is_complete(&self) -> bool { self.has_endpoints() && !self.hash.is_empty() }

    /// Leading numeric part of `value`, `0.0` when it does not parse.
    pub fn amount(&self) -> f64 { parse_value(&self.value) }

    pub fn is_incoming_to(
        &self,
        address: &str,
    ) -> bool {
        self.to == address
    }

    pub fn is_self_transfer(&self) -> bool { self.from == self.to }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default)]
    pub native: String,
    #[serde(default)]
    pub usd:    f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub symbol:    String,
    pub name:      String,
    pub balance:   String,
    pub value:     f64,
    pub price:     f64,
    #[serde(rename = "change24h", default)]
    pub change_24h: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon:      Option<String>,
}

/// Everything the upstream fetcher knows about one address. The graph core
/// only consumes `transactions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressData {
    #[serde(default)]
    pub balance:      Balance,
    #[serde(default)]
    pub assets:       Vec<Asset>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}
