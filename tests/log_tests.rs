use rclockout::core::log::{format_entry, strip_ansi};
use rclockout::db::initialize::init_db;
use rclockout::db::log::{load_entries, ttlog};
use rusqlite::Connection;

fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init db");
    conn
}

#[test]
fn test_init_records_applied_migration() {
    let conn = memory_db();

    let entries = load_entries(&conn, Some("migration_applied")).expect("load");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target, "20261019_0001_log_operation_index");

    // running again does not apply it twice
    init_db(&conn).expect("re-init");
    assert_eq!(
        load_entries(&conn, Some("migration_applied"))
            .expect("load")
            .len(),
        1
    );
}

#[test]
fn test_ttlog_appends_in_order_and_filters_by_operation() {
    let conn = memory_db();

    ttlog(&conn, "arm", "17:15", "Alert armed 5 minutes before 17:15").expect("log arm");
    ttlog(&conn, "notify", "17:15", "Fired on schedule").expect("log notify");

    let all = load_entries(&conn, None).expect("load all");
    let ops: Vec<&str> = all.iter().map(|e| e.operation.as_str()).collect();
    assert_eq!(ops, vec!["migration_applied", "arm", "notify"]);

    let armed = load_entries(&conn, Some("arm")).expect("load arm");
    assert_eq!(armed.len(), 1);
    assert_eq!(armed[0].target, "17:15");
    assert_eq!(armed[0].message, "Alert armed 5 minutes before 17:15");
}

#[test]
fn test_format_entry_colours_only_the_operation() {
    let conn = memory_db();
    ttlog(&conn, "arm", "17:15", "armed").expect("log");

    let entry = load_entries(&conn, Some("arm")).expect("load").remove(0);
    let line = format_entry(&entry, 2, entry.date.len(), 12);
    let plain = strip_ansi(&line);

    assert_ne!(line, plain);
    assert!(plain.contains("arm (17:15)"));
    assert!(plain.ends_with("=> armed"));
}
