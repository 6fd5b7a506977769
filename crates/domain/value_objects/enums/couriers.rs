use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Courier {
    Jne,
    Pos,
    Tiki,
}

impl Courier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Courier::Jne => "jne",
            Courier::Pos => "pos",
            Courier::Tiki => "tiki",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "jne" => Some(Courier::Jne),
            "pos" => Some(Courier::Pos),
            "tiki" => Some(Courier::Tiki),
            _ => None,
        }
    }
}

impl Display for Courier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
