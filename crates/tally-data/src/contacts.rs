use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ContactFilter {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// An address book entry. Names and phone numbers are free-form,
/// only the id is unique.
#[derive(Debug, Default, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub phone: String,
}
