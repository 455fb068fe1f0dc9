use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Visual grouping of counterparties. Derived from the address string only;
/// there is no chain analysis behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressCategory {
    Exchange,
    Deposit,
    Individual,
    Dex,
    Lending,
    Uncategorized,
}

// Order matters: categorize() indexes into it with `h % 5`.
const HASHED_CATEGORIES: [AddressCategory; 5] = [
    AddressCategory::Exchange,
    AddressCategory::Deposit,
    AddressCategory::Individual,
    AddressCategory::Dex,
    AddressCategory::Lending,
];

impl AddressCategory {
    pub const ALL: [AddressCategory; 6] = [
        Self::Exchange,
        Self::Deposit,
        Self::Individual,
        Self::Dex,
        Self::Lending,
        Self::Uncategorized,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exchange => "exchange",
            Self::Deposit => "deposit",
            Self::Individual => "individual",
            Self::Dex => "dex",
            Self::Lending => "lending",
            Self::Uncategorized => "uncategorized",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Exchange => "Exchange",
            Self::Deposit => "Deposit",
            Self::Individual => "Individual",
            Self::Dex => "DEX",
            Self::Lending => "Lending",
            Self::Uncategorized => "Uncategorized",
        }
    }

    /// Border colour used for nodes of this category and in the legend.
    pub fn color(self) -> &'static str {
        match self {
            Self::Exchange => "#FF6B6B",
            Self::Deposit => "#FFD166",
            Self::Individual => "#06D6A0",
            Self::Dex => "#118AB2",
            Self::Lending => "#9D4EDD",
            Self::Uncategorized => "#8E9196",
        }
    }
}

impl fmt::Display for AddressCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown address category: {s}"))
    }
}

/// Sum of UTF-16 code units, bucketed: `h % 10 > 7` is uncategorized,
/// anything else picks `HASHED_CATEGORIES[h % 5]`.
pub fn categorize(address: &str) -> AddressCategory {
    let hash: u64 = address.encode_utf16().map(u64::from).sum();

    if hash % 10 > 7 {
        return AddressCategory::Uncategorized;
    }

    HASHED_CATEGORIES[(hash % 5) as usize]
}
