use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A tradable currency instrument from the fixed deployment set.
///
/// The set is closed: the chart generator only ever produced images for
/// these eight pairs, so anything else is a configuration error rather
/// than a lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyPair {
    AudUsd,
    EurUsd,
    GbpJpy,
    GbpUsd,
    NzdUsd,
    UsdCad,
    UsdJpy,
    XauUsd,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency pair '{0}' — not in the fixed deployment set")]
pub struct InvalidPair(pub String);

impl CurrencyPair {
    /// All pairs, in the display order the original dashboard used.
    pub const ALL: [CurrencyPair; 8] = [
        CurrencyPair::AudUsd,
        CurrencyPair::EurUsd,
        CurrencyPair::GbpJpy,
        CurrencyPair::GbpUsd,
        CurrencyPair::NzdUsd,
        CurrencyPair::UsdCad,
        CurrencyPair::UsdJpy,
        CurrencyPair::XauUsd,
    ];

    /// The canonical six-letter code, as it appears in file names and data.
    pub fn code(self) -> &'static str {
        match self {
            CurrencyPair::AudUsd => "AUDUSD",
            CurrencyPair::EurUsd => "EURUSD",
            CurrencyPair::GbpJpy => "GBPJPY",
            CurrencyPair::GbpUsd => "GBPUSD",
            CurrencyPair::NzdUsd => "NZDUSD",
            CurrencyPair::UsdCad => "USDCAD",
            CurrencyPair::UsdJpy => "USDJPY",
            CurrencyPair::XauUsd => "XAUUSD",
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for CurrencyPair {
    type Err = InvalidPair;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CurrencyPair::ALL
            .iter()
            .copied()
            .find(|p| p.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidPair(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrips_through_from_str() {
        for pair in CurrencyPair::ALL {
            assert_eq!(pair.code().parse::<CurrencyPair>().unwrap(), pair);
        }
    }

    #[test]
    fn from_str_is_case_insensitive_and_trims() {
        assert_eq!(" eurusd ".parse::<CurrencyPair>().unwrap(), CurrencyPair::EurUsd);
    }

    #[test]
    fn unknown_pair_is_rejected() {
        let err = "BTCUSD".parse::<CurrencyPair>().unwrap_err();
        assert_eq!(err, InvalidPair("BTCUSD".into()));
    }

    #[test]
    fn serde_uses_canonical_codes() {
        // toml can't serialize a bare enum value; route through a tiny table.
        #[derive(serde::Serialize)]
        struct Holder {
            pair: CurrencyPair,
        }
        let toml = toml::to_string(&Holder {
            pair: CurrencyPair::XauUsd,
        })
        .unwrap();
        assert_eq!(toml.trim(), "pair = \"XAUUSD\"");
    }
}
