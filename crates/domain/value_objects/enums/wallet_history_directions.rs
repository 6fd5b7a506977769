use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Direction of a wallet ledger row. `Reversal` voids an earlier charge and
/// never moves the balance on its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WalletHistoryDirection {
    Credit,
    Debit,
    Reversal,
}

impl WalletHistoryDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletHistoryDirection::Credit => "credit",
            WalletHistoryDirection::Debit => "debit",
            WalletHistoryDirection::Reversal => "reversal",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "credit" => Some(WalletHistoryDirection::Credit),
            "debit" => Some(WalletHistoryDirection::Debit),
            "reversal" => Some(WalletHistoryDirection::Reversal),
            _ => None,
        }
    }
}

impl Display for WalletHistoryDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
