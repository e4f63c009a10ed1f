//! Staff roles that move orders through their lifecycle

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::model::Order;
use crate::error::Result;

/// Office administrator who accepts incoming orders for delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficeAdministrator {
    pub id: u32,
    pub name: String,
    /// Ids of orders this administrator has accepted
    #[serde(default)]
    pub received_orders: Vec<u32>,
}

impl OfficeAdministrator {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            received_orders: Vec::new(),
        }
    }

    /// Accept an order: set its planned delivery date, move it into
    /// delivery, and record it.
    pub fn accept_order(
        &mut self,
        order: &mut Order,
        planned_delivery_date: NaiveDateTime,
    ) -> Result<()> {
        order.accept(planned_delivery_date)?;
        self.received_orders.push(order.id);
        Ok(())
    }
}

/// Dispatcher who completes or cancels deliveries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispatcher {
    pub id: u32,
    pub name: String,
    pub phone: String,
}

impl Dispatcher {
    pub fn new(id: u32, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Mark an order delivered, stamping the actual delivery time.
    pub fn deliver_order(&self, order: &mut Order) -> Result<()> {
        order.deliver()
    }

    /// Cancel an order with a reason.
    pub fn cancel_order(&self, order: &mut Order, reason: &str) -> Result<()> {
        order.cancel(reason)
    }
}
