//! Entity types of the delivery business

pub mod client;
pub mod furniture;
pub mod order;
pub mod staff;
pub mod store;

pub use client::Client;
pub use furniture::Furniture;
pub use order::{Order, OrderStatus};
pub use staff::{Dispatcher, OfficeAdministrator};
pub use store::Store;
