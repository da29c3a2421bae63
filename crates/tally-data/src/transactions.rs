use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Direction of a ledger entry, seen from the account holder.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq,
    Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Expense,
    Income,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Expense => write!(f, "expense"),
            Direction::Income => write!(f, "income"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expense" => Ok(Direction::Expense),
            "income" => Ok(Direction::Income),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}

/// Closed set of spending categories.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
    Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Gift,
    Travel,
    Transfer,
    #[default]
    Other,
}

impl Category {
    /// Icon token used by display frontends.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "fork.knife",
            Category::Transport => "car.fill",
            Category::Shopping => "bag.fill",
            Category::Gift => "gift.fill",
            Category::Travel => "airplane",
            Category::Transfer => "arrow.left.arrow.right",
            Category::Other => "ellipsis",
        }
    }

    /// Display color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Food => "#FF6B6B",
            Category::Transport => "#4ECDC4",
            Category::Shopping => "#45B7D1",
            Category::Gift => "#FFB347",
            Category::Travel => "#96CEB4",
            Category::Transfer => "#9575CD",
            Category::Other => "#B0BEC5",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Gift => "gift",
            Category::Travel => "travel",
            Category::Transfer => "transfer",
            Category::Other => "other",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(Category::Food),
            "transport" => Ok(Category::Transport),
            "shopping" => Ok(Category::Shopping),
            "gift" => Ok(Category::Gift),
            "travel" => Ok(Category::Travel),
            "transfer" => Ok(Category::Transfer),
            "other" => Ok(Category::Other),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TransactionFilter {
    pub id: Option<u32>,
    pub direction: Option<Direction>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub date_before: Option<NaiveDate>,
    pub date_after: Option<NaiveDate>,
}

/// A single ledger entry. Amounts are whole currency units,
/// always non-negative; the direction carries the sign.
#[derive(Debug, Default, Clone, FromRow, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub amount: i64,
    pub direction: Direction,
    pub category: Category,
    pub description: String,
    pub date: NaiveDateTime,
    pub counterparty: String,
    pub bank_name: String,
}

impl Transaction {
    /// Amount with the direction applied: negative for expenses.
    pub fn signed_amount(&self) -> i64 {
        match self.direction {
            Direction::Expense => -self.amount,
            Direction::Income => self.amount,
        }
    }
}
