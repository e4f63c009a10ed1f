//! Furniture catalog entries

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A furniture catalog line item
///
/// `quantity` stays in the textual form the catalog file carries; it is
/// only coerced to a number when the aggregator counts units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Furniture {
    pub id: u32,
    /// Unit weight in kg
    pub weight: f64,
    /// Furniture type, the grouping key for the overdue report
    pub kind: String,
    pub price: f64,
    pub quantity: String,
}

impl Furniture {
    pub fn new(
        id: u32,
        weight: f64,
        kind: impl Into<String>,
        price: f64,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            id,
            weight,
            kind: kind.into(),
            price,
            quantity: quantity.into(),
        }
    }

    /// Clone this catalog entry as an order line with its own quantity.
    ///
    /// The returned value is independent of the catalog entry.
    pub fn order_line(&self, quantity: u32) -> Furniture {
        Furniture {
            quantity: quantity.to_string(),
            ..self.clone()
        }
    }

    /// Coerce the textual quantity to a unit count.
    pub fn units(&self) -> Result<u64> {
        self.quantity
            .trim()
            .parse()
            .map_err(|_| Error::InvalidQuantity {
                kind: self.kind.clone(),
                value: self.quantity.clone(),
            })
    }
}
