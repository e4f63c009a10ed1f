//! File ingestion for the delivery office's flat files

pub mod loader;
