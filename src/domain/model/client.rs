//! Clients and order creation

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::model::{Furniture, Order};

/// A client and the orders they have placed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub current_orders: Vec<Order>,
}

impl Client {
    pub fn new(id: u32, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            current_orders: Vec::new(),
        }
    }

    /// Identity-only copy embedded into orders, so an order does not drag
    /// the client's order history along with it.
    pub fn contact(&self) -> Client {
        Client::new(self.id, self.name.clone(), self.phone.clone())
    }

    /// Create a new order for this client and record it.
    ///
    /// The order starts in Processing with the order date stamped now.
    pub fn make_order(
        &mut self,
        order_id: u32,
        items: Vec<Furniture>,
        delivery_date: NaiveDateTime,
    ) -> Order {
        let order = Order::new(
            order_id,
            self.contact(),
            items,
            Local::now().naive_local(),
            delivery_date,
        );
        self.current_orders.push(order.clone());
        order
    }
}
