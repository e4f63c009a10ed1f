//! Flat-file loaders for the furniture, store, and order files
//!
//! All three files are semicolon-delimited UTF-8 text, one record per line;
//! blank lines are skipped. A malformed row aborts the load with the row
//! number that failed. Unknown furniture ids referenced by an order line
//! are dropped silently.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::domain::model::{Client, Furniture, Order, OrderStatus, Store};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse file: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Wrong field count in row {row}: expected {expected}, found {found}")]
    WrongFieldCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid number format in row {row}, field {field}: {value}")]
    InvalidNumber {
        row: usize,
        field: String,
        value: String,
    },

    #[error("Invalid date format in row {row}: {value}")]
    InvalidDate { row: usize, value: String },

    #[error("Unknown order status in row {row}: {value}")]
    UnknownStatus { row: usize, value: String },

    #[error("Malformed item entry in row {row}: {value}")]
    MalformedItem { row: usize, value: String },
}

const FURNITURE_FIELDS: usize = 5;
const STORE_FIELDS: usize = 4;
const ORDER_FIELDS: usize = 6;

/// Load the furniture catalog
///
/// Expected fields: `id;weight;type;price;quantity`. The quantity is kept
/// in its textual form.
pub fn load_furniture<P: AsRef<Path>>(path: P) -> Result<Vec<Furniture>, LoaderError> {
    let mut reader = delimited_reader(path)?;

    let mut catalog = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 1;
        expect_fields(&record, FURNITURE_FIELDS, row)?;

        catalog.push(Furniture {
            id: parse_u32(record.get(0).unwrap_or(""), row, "id")?,
            weight: parse_f64(record.get(1).unwrap_or(""), row, "weight")?,
            kind: record.get(2).unwrap_or("").to_string(),
            price: parse_f64(record.get(3).unwrap_or(""), row, "price")?,
            quantity: record.get(4).unwrap_or("").to_string(),
        });
    }

    Ok(catalog)
}

/// Load the store list
///
/// Expected fields: `id;city;address;director`.
pub fn load_stores<P: AsRef<Path>>(path: P) -> Result<Vec<Store>, LoaderError> {
    let mut reader = delimited_reader(path)?;

    let mut stores = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 1;
        expect_fields(&record, STORE_FIELDS, row)?;

        stores.push(Store {
            id: parse_u32(record.get(0).unwrap_or(""), row, "id")?,
            city: record.get(1).unwrap_or("").to_string(),
            address: record.get(2).unwrap_or("").to_string(),
            director: record.get(3).unwrap_or("").to_string(),
        });
    }

    Ok(stores)
}

/// Load the order list, resolving item references against the catalog
///
/// Expected fields: `order_id;client_name;client_phone;planned_date;status;items`,
/// where `items` is empty or comma-separated `furniture_id:quantity` pairs.
/// Each resolved pair becomes an independent order-line clone of the catalog
/// entry carrying the pair's quantity. Every row gets a fresh client built
/// from the row itself (client id = order id) and an order date stamped with
/// the load time; the status field overrides the new order's status as-is.
///
/// The catalog must be loaded first.
pub fn load_orders<P: AsRef<Path>>(
    path: P,
    catalog: &[Furniture],
) -> Result<Vec<Order>, LoaderError> {
    let by_id: HashMap<u32, &Furniture> = catalog.iter().map(|f| (f.id, f)).collect();

    let mut reader = delimited_reader(path)?;

    let mut orders = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = row_idx + 1;
        expect_fields(&record, ORDER_FIELDS, row)?;

        let order_id = parse_u32(record.get(0).unwrap_or(""), row, "order_id")?;
        let client = Client::new(
            order_id,
            record.get(1).unwrap_or(""),
            record.get(2).unwrap_or(""),
        );
        let planned = parse_date(record.get(3).unwrap_or(""), row)?;

        let status_raw = record.get(4).unwrap_or("");
        let status =
            OrderStatus::parse(status_raw).ok_or_else(|| LoaderError::UnknownStatus {
                row,
                value: status_raw.to_string(),
            })?;

        let items = parse_items(record.get(5).unwrap_or(""), row, &by_id)?;

        let mut order = Order::new(order_id, client, items, Local::now().naive_local(), planned);
        order.status = status;
        orders.push(order);
    }

    Ok(orders)
}

fn delimited_reader<P: AsRef<Path>>(path: P) -> Result<csv::Reader<File>, LoaderError> {
    let file = File::open(path)?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file))
}

fn expect_fields(
    record: &csv::StringRecord,
    expected: usize,
    row: usize,
) -> Result<(), LoaderError> {
    if record.len() != expected {
        return Err(LoaderError::WrongFieldCount {
            row,
            expected,
            found: record.len(),
        });
    }
    Ok(())
}

/// Parse the `items` field: empty, or `furniture_id:quantity` pairs joined
/// by commas. Pairs whose id is not in the catalog are dropped.
fn parse_items(
    raw: &str,
    row: usize,
    catalog: &HashMap<u32, &Furniture>,
) -> Result<Vec<Furniture>, LoaderError> {
    let mut items = Vec::new();
    if raw.is_empty() {
        return Ok(items);
    }

    for pair in raw.split(',') {
        let (fid, qty) = pair.split_once(':').ok_or_else(|| LoaderError::MalformedItem {
            row,
            value: pair.to_string(),
        })?;
        let fid = parse_u32(fid, row, "furniture_id")?;
        let qty = parse_u32(qty, row, "quantity")?;

        if let Some(base) = catalog.get(&fid) {
            items.push(base.order_line(qty));
        }
    }

    Ok(items)
}

fn parse_u32(s: &str, row: usize, field: &str) -> Result<u32, LoaderError> {
    s.trim().parse().map_err(|_| LoaderError::InvalidNumber {
        row,
        field: field.to_string(),
        value: s.to_string(),
    })
}

fn parse_f64(s: &str, row: usize, field: &str) -> Result<f64, LoaderError> {
    s.trim().parse().map_err(|_| LoaderError::InvalidNumber {
        row,
        field: field.to_string(),
        value: s.to_string(),
    })
}

fn parse_date(s: &str, row: usize) -> Result<NaiveDateTime, LoaderError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d"];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    Err(LoaderError::InvalidDate {
        row,
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_map(catalog: &[Furniture]) -> HashMap<u32, &Furniture> {
        catalog.iter().map(|f| (f.id, f)).collect()
    }

    #[test]
    fn parse_date_hyphen_and_slash() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_time(NaiveTime::MIN);
        assert_eq!(parse_date("2024-01-15", 1).unwrap(), expected);
        assert_eq!(parse_date("2024/01/15", 1).unwrap(), expected);
        assert!(parse_date("15.01.2024", 1).is_err());
    }

    #[test]
    fn parse_items_resolves_against_catalog() {
        let catalog = vec![
            Furniture::new(1, 10.0, "Chair", 50.0, "100"),
            Furniture::new(2, 40.0, "Table", 200.0, "30"),
        ];
        let by_id = catalog_map(&catalog);

        let items = parse_items("1:5,2:2", 1, &by_id).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, "Chair");
        assert_eq!(items[0].quantity, "5");
        assert_eq!(items[1].kind, "Table");
        assert_eq!(items[1].quantity, "2");
    }

    #[test]
    fn parse_items_drops_unknown_ids_silently() {
        let catalog = vec![Furniture::new(1, 10.0, "Chair", 50.0, "100")];
        let by_id = catalog_map(&catalog);

        let items = parse_items("1:5,99:2", 1, &by_id).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, "Chair");
    }

    #[test]
    fn parse_items_empty_field_yields_no_items() {
        let by_id = HashMap::new();
        assert!(parse_items("", 1, &by_id).unwrap().is_empty());
    }

    #[test]
    fn parse_items_rejects_pairs_without_separator() {
        let by_id = HashMap::new();
        assert!(parse_items("15", 1, &by_id).is_err());
    }

    #[test]
    fn parse_items_rejects_non_numeric_quantity_even_for_unknown_id() {
        let by_id = HashMap::new();
        assert!(parse_items("99:lots", 1, &by_id).is_err());
    }
}
