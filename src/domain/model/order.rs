//! Orders and their delivery lifecycle

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::model::{Client, Furniture};
use crate::error::{Error, Result};

/// Delivery status of an order
///
/// The order files carry these as localized labels; both the label and the
/// plain variant name are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    InDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Display label as written in the order files
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Обрабатывается",
            OrderStatus::InDelivery => "В доставке",
            OrderStatus::Delivered => "Доставлен",
            OrderStatus::Cancelled => "Отменен",
        }
    }

    /// Parse a status from its file representation
    pub fn parse(s: &str) -> Option<OrderStatus> {
        match s.trim() {
            "Processing" | "Обрабатывается" => Some(OrderStatus::Processing),
            "InDelivery" | "В доставке" => Some(OrderStatus::InDelivery),
            "Delivered" | "Доставлен" => Some(OrderStatus::Delivered),
            "Cancelled" | "Отменен" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Whether a transition from `self` to `next` is allowed
    pub fn can_become(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Processing, InDelivery)
                | (InDelivery, Delivered)
                | (Processing, Cancelled)
                | (InDelivery, Cancelled)
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::InDelivery => "InDelivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", name)
    }
}

/// An order joining a client, its items, and delivery dates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub client: Client,
    pub items: Vec<Furniture>,
    pub order_date: NaiveDateTime,
    pub planned_delivery_date: NaiveDateTime,
    pub actual_delivery_date: Option<NaiveDateTime>,
    pub status: OrderStatus,
    pub cancellation_reason: Option<String>,
}

impl Order {
    pub fn new(
        id: u32,
        client: Client,
        items: Vec<Furniture>,
        order_date: NaiveDateTime,
        planned_delivery_date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            client,
            items,
            order_date,
            planned_delivery_date,
            actual_delivery_date: None,
            status: OrderStatus::Processing,
            cancellation_reason: None,
        }
    }

    /// True when no delivery has been recorded and the planned date has
    /// passed relative to `reference`.
    pub fn is_overdue(&self, reference: NaiveDateTime) -> bool {
        self.actual_delivery_date.is_none() && self.planned_delivery_date < reference
    }

    /// Move the order into delivery with a planned delivery date.
    pub fn accept(&mut self, planned_delivery_date: NaiveDateTime) -> Result<()> {
        self.transition(OrderStatus::InDelivery)?;
        self.planned_delivery_date = planned_delivery_date;
        Ok(())
    }

    /// Mark the order delivered, stamping the actual delivery time.
    pub fn deliver(&mut self) -> Result<()> {
        self.transition(OrderStatus::Delivered)?;
        self.actual_delivery_date = Some(Local::now().naive_local());
        Ok(())
    }

    /// Cancel the order with a reason.
    pub fn cancel(&mut self, reason: impl Into<String>) -> Result<()> {
        self.transition(OrderStatus::Cancelled)?;
        self.cancellation_reason = Some(reason.into());
        Ok(())
    }

    fn transition(&mut self, next: OrderStatus) -> Result<()> {
        if !self.status.can_become(next) {
            return Err(Error::InvalidTransition {
                order_id: self.id,
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
