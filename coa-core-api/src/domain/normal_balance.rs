use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side on which an account increases, fixed at the class level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "normal_balance", rename_all = "PascalCase"))]
pub enum NormalBalance {
    Debit,
    Credit,
}

impl std::fmt::Display for NormalBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalBalance::Debit => write!(f, "Debit"),
            NormalBalance::Credit => write!(f, "Credit"),
        }
    }
}

impl FromStr for NormalBalance {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Debit" | "debit" => Ok(NormalBalance::Debit),
            "Credit" | "credit" => Ok(NormalBalance::Credit),
            _ => Err(()),
        }
    }
}
