//! Store records

use serde::{Deserialize, Serialize};

/// A store location. Descriptive only; stores are not linked to orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: u32,
    pub city: String,
    pub address: String,
    pub director: String,
}

impl Store {
    pub fn new(
        id: u32,
        city: impl Into<String>,
        address: impl Into<String>,
        director: impl Into<String>,
    ) -> Self {
        Self {
            id,
            city: city.into(),
            address: address.into(),
            director: director.into(),
        }
    }
}
