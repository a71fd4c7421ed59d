//! The substitute backend keeps no state besides the database file:
//! every operation opens a fresh connection, so a new instance
//! pointed at the same file sees everything a previous one wrote.

use dripdb::{Attributes, Backend, Conditions, SqliteData};
use tempfile::TempDir;

#[test]
fn test_write_drop_reopen_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("substitute.db");

    // Phase 1: create and write.
    {
        let data = SqliteData::new(&path)
            .with_collection("notes", &["id"], &["body"])
            .unwrap();
        data.put(
            "notes",
            &Attributes::new().with("id", "n1").with("body", "remember this"),
        )
        .unwrap();
    }

    // Phase 2: a fresh instance on the same file sees the row.
    {
        let data = SqliteData::new(&path);
        let rows = data.iterate("notes", &Conditions::new()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("body").unwrap().text(), "remember this");

        // And the schema: the collection cannot be re-created.
        assert!(data.create_collection("notes", &["id"], &["body"]).is_err());
    }
}

#[test]
fn test_interleaved_writers_and_readers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shared.db");

    let writer = SqliteData::new(&path)
        .with_collection("log", &["seq"], &["entry"])
        .unwrap();
    let reader = SqliteData::new(&path);

    for seq in 0..3usize {
        writer
            .put(
                "log",
                &Attributes::new()
                    .with("seq", seq.to_string())
                    .with("entry", format!("entry {seq}")),
            )
            .unwrap();
        // Each scan is its own connection and sees all rows so far.
        let rows = reader.iterate("log", &Conditions::new()).unwrap();
        assert_eq!(rows.len(), seq + 1);
    }
}
