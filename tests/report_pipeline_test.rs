//! Integration tests for the overdue report pipeline

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fs;
use tempfile::tempdir;

use mebel_report::domain::model::OrderStatus;
use mebel_report::domain::service::overdue::{aggregate_overdue, sorted_rows};
use mebel_report::export::write_overdue_report;
use mebel_report::infrastructure::loader::{load_furniture, load_orders, load_stores};

fn reference(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

/// Catalog line → order line → aggregation → workbook, end to end
#[test]
fn round_trip_single_overdue_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let furniture_path = dir.path().join("furniture.txt");
    let order_path = dir.path().join("order.txt");

    fs::write(&furniture_path, "1;10.0;Chair;50.0;100\n").unwrap();
    fs::write(&order_path, "1;Ann;555-1111;2000-01-01;Processing;1:5\n").unwrap();

    let catalog = load_furniture(&furniture_path).expect("catalog should load");
    let orders = load_orders(&order_path, &catalog).expect("orders should load");

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::Processing);
    assert_eq!(orders[0].client.id, 1);
    assert_eq!(orders[0].client.name, "Ann");
    assert_eq!(orders[0].items.len(), 1);

    let totals = aggregate_overdue(&orders, reference(2030, 1, 1)).unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("Chair"), Some(&5));

    let rows = sorted_rows(&totals);
    assert_eq!(rows, vec![("Chair".to_string(), 5)]);

    let output_path = dir.path().join("overdue_report.xlsx");
    let written = write_overdue_report(&rows, &output_path).expect("report should write");
    assert_eq!(written, output_path);
    assert!(output_path.exists());
}

/// Two overdue orders for the same type sum their quantities
#[test]
fn overdue_quantities_sum_across_orders() {
    let dir = tempdir().expect("Failed to create temp dir");
    let furniture_path = dir.path().join("furniture.txt");
    let order_path = dir.path().join("order.txt");

    fs::write(
        &furniture_path,
        "1;10.0;Chair;50.0;100\n2;40.0;Table;200.0;30\n",
    )
    .unwrap();
    // Statuses written the way the office files carry them
    fs::write(
        &order_path,
        "1;Ann;555-1111;2024-01-10;Обрабатывается;1:3\n\
         2;Boris;555-2222;2024-01-20;В доставке;1:4\n\
         3;Clara;555-3333;2024-06-01;Обрабатывается;2:2\n",
    )
    .unwrap();

    let catalog = load_furniture(&furniture_path).unwrap();
    let orders = load_orders(&order_path, &catalog).unwrap();
    assert_eq!(orders[1].status, OrderStatus::InDelivery);

    // Order 3 is not yet due at the reference date
    let totals = aggregate_overdue(&orders, reference(2024, 3, 1)).unwrap();
    assert_eq!(totals.get("Chair"), Some(&7));
    assert_eq!(totals.get("Table"), None);
}

/// An order with an empty items field never contributes, even when overdue
#[test]
fn empty_items_field_contributes_nothing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let furniture_path = dir.path().join("furniture.txt");
    let order_path = dir.path().join("order.txt");

    fs::write(&furniture_path, "1;10.0;Chair;50.0;100\n").unwrap();
    fs::write(&order_path, "1;Ann;555-1111;2000-01-01;Processing;\n").unwrap();

    let catalog = load_furniture(&furniture_path).unwrap();
    let orders = load_orders(&order_path, &catalog).unwrap();

    assert!(orders[0].items.is_empty());
    let totals = aggregate_overdue(&orders, reference(2030, 1, 1)).unwrap();
    assert!(totals.is_empty());
}

/// Unknown furniture ids in order lines are dropped, not an error
#[test]
fn unknown_furniture_ids_are_dropped() {
    let dir = tempdir().expect("Failed to create temp dir");
    let furniture_path = dir.path().join("furniture.txt");
    let order_path = dir.path().join("order.txt");

    fs::write(&furniture_path, "1;10.0;Chair;50.0;100\n").unwrap();
    fs::write(&order_path, "1;Ann;555-1111;2000-01-01;Processing;1:5,99:3\n").unwrap();

    let catalog = load_furniture(&furniture_path).unwrap();
    let orders = load_orders(&order_path, &catalog).unwrap();

    assert_eq!(orders[0].items.len(), 1);
    let totals = aggregate_overdue(&orders, reference(2030, 1, 1)).unwrap();
    assert_eq!(totals.get("Chair"), Some(&5));
}

/// Blank lines in any input file are skipped silently
#[test]
fn blank_lines_are_skipped() {
    let dir = tempdir().expect("Failed to create temp dir");
    let furniture_path = dir.path().join("furniture.txt");
    let store_path = dir.path().join("store.txt");

    fs::write(&furniture_path, "1;10.0;Chair;50.0;100\n\n2;40.0;Table;200.0;30\n\n").unwrap();
    fs::write(
        &store_path,
        "\n1;Moscow;Tverskaya 1;Ivanova\n\n2;Kazan;Bauman 5;Petrov\n",
    )
    .unwrap();

    let catalog = load_furniture(&furniture_path).unwrap();
    assert_eq!(catalog.len(), 2);

    let stores = load_stores(&store_path).unwrap();
    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0].city, "Moscow");
    assert_eq!(stores[1].director, "Petrov");
}

/// Malformed rows abort the load
#[test]
fn malformed_rows_are_fatal() {
    let dir = tempdir().expect("Failed to create temp dir");
    let furniture_path = dir.path().join("furniture.txt");
    let order_path = dir.path().join("order.txt");

    // Non-numeric id
    fs::write(&furniture_path, "one;10.0;Chair;50.0;100\n").unwrap();
    assert!(load_furniture(&furniture_path).is_err());

    // Wrong field count
    fs::write(&furniture_path, "1;10.0;Chair;50.0\n").unwrap();
    assert!(load_furniture(&furniture_path).is_err());

    fs::write(&furniture_path, "1;10.0;Chair;50.0;100\n").unwrap();
    let catalog = load_furniture(&furniture_path).unwrap();

    // Bad planned date
    fs::write(&order_path, "1;Ann;555-1111;01.02.2024;Processing;1:5\n").unwrap();
    assert!(load_orders(&order_path, &catalog).is_err());

    // Unknown status label
    fs::write(&order_path, "1;Ann;555-1111;2024-01-01;Shipped;1:5\n").unwrap();
    assert!(load_orders(&order_path, &catalog).is_err());
}

/// Report rows come out sorted by count descending
#[test]
fn report_rows_sorted_by_count_descending() {
    let dir = tempdir().expect("Failed to create temp dir");
    let furniture_path = dir.path().join("furniture.txt");
    let order_path = dir.path().join("order.txt");

    fs::write(
        &furniture_path,
        "1;10.0;Chair;50.0;100\n2;40.0;Table;200.0;30\n3;25.0;Shelf;80.0;40\n",
    )
    .unwrap();
    fs::write(
        &order_path,
        "1;Ann;555-1111;2024-01-10;Processing;1:2,2:6\n\
         2;Boris;555-2222;2024-01-20;Processing;3:4\n",
    )
    .unwrap();

    let catalog = load_furniture(&furniture_path).unwrap();
    let orders = load_orders(&order_path, &catalog).unwrap();

    let totals = aggregate_overdue(&orders, reference(2024, 3, 1)).unwrap();
    let rows = sorted_rows(&totals);

    assert_eq!(
        rows,
        vec![
            ("Table".to_string(), 6),
            ("Shelf".to_string(), 4),
            ("Chair".to_string(), 2),
        ]
    );

    let output_path = dir.path().join("overdue_report.xlsx");
    write_overdue_report(&rows, &output_path).unwrap();
    assert!(output_path.exists());
}

/// Each order row constructs its own client keyed by the order id;
/// repeated client names are not unified
#[test]
fn clients_are_not_deduplicated_across_orders() {
    let dir = tempdir().expect("Failed to create temp dir");
    let furniture_path = dir.path().join("furniture.txt");
    let order_path = dir.path().join("order.txt");

    fs::write(&furniture_path, "1;10.0;Chair;50.0;100\n").unwrap();
    fs::write(
        &order_path,
        "10;Ann;555-1111;2024-01-10;Processing;1:1\n\
         20;Ann;555-1111;2024-01-20;Processing;1:1\n",
    )
    .unwrap();

    let catalog = load_furniture(&furniture_path).unwrap();
    let orders = load_orders(&order_path, &catalog).unwrap();

    assert_eq!(orders[0].client.id, 10);
    assert_eq!(orders[1].client.id, 20);
    assert_eq!(orders[0].client.name, orders[1].client.name);
}
