//! End-to-end tests of the client surface: substitute backend,
//! valve pagination, and the table/frame/item facade working
//! together the way a caller would wire them.

use std::sync::Arc;

use dripdb::{
    Attributes, Backend, Conditions, Credentials, Error, ScanValve, SqliteData, Table, Valve,
};

fn users_table(valve: ScanValve, data: Arc<SqliteData>) -> Table {
    Table::new(
        data,
        Arc::new(valve),
        Credentials::test(),
        "users",
        &["id"],
    )
}

fn seeded_users() -> Arc<SqliteData> {
    let data = Arc::new(
        SqliteData::temporary()
            .unwrap()
            .with_collection("users", &["id"], &["name"])
            .unwrap(),
    );
    data.put("users", &Attributes::new().with("id", "1").with("name", "Bob"))
        .unwrap();
    data.put("users", &Attributes::new().with("id", "2").with("name", "Ann"))
        .unwrap();
    data
}

#[test]
fn test_scenario_filter_by_name() {
    // The concrete scenario: two users, filter name = Ann.
    let data = seeded_users();
    let valve = ScanValve::new(data.clone());

    let dosage = valve
        .fetch(
            &Credentials::test(),
            "users",
            &Conditions::new().with_eq("name", "Ann"),
            &["id"],
        )
        .unwrap();

    assert_eq!(dosage.records().len(), 1);
    let record = &dosage.records()[0];
    assert_eq!(record.get("id").unwrap().text(), "2");
    assert_eq!(record.get("name").unwrap().text(), "Ann");
}

#[test]
fn test_frame_filtering_reaches_same_rows() {
    let data = seeded_users();
    let table = users_table(ScanValve::new(data.clone()), data);

    let all = table.frame().items().unwrap();
    assert_eq!(all.len(), 2);

    let anns = table.frame().filter_eq("name", "Ann").items().unwrap();
    assert_eq!(anns.len(), 1);
    assert_eq!(anns[0].get("id").unwrap().text(), "2");
    assert!(anns[0].has("name"));
}

#[test]
fn test_item_navigates_back_to_table() {
    let data = seeded_users();
    let table = users_table(ScanValve::new(data.clone()), data);

    let item = table
        .frame()
        .filter_eq("id", "1")
        .items()
        .unwrap()
        .remove(0);

    assert_eq!(item.table().name(), "users");
    assert_eq!(item.table().keys().to_vec(), vec!["id".to_string()]);

    // The owning table is a live handle: query it again.
    let again = item.table().frame().filter_eq("id", "1").items().unwrap();
    assert_eq!(again.len(), 1);
}

#[test]
fn test_item_key_projects_key_attributes() {
    let data = seeded_users();
    let table = users_table(ScanValve::new(data.clone()), data);

    let ann = table
        .frame()
        .filter_eq("name", "Ann")
        .items()
        .unwrap()
        .remove(0);

    // Identity carries the key attributes only, values intact.
    assert_eq!(ann.key(), Attributes::new().with("id", "2"));
}

#[test]
fn test_item_put_writes_through_backend() {
    let data = seeded_users();
    let table = users_table(ScanValve::new(data.clone()), data.clone());

    let ann = table
        .frame()
        .filter_eq("name", "Ann")
        .items()
        .unwrap()
        .remove(0);

    // A fresh key inserts a new row carrying the merged attributes.
    let copied = ann.put("id", "3").unwrap();
    assert_eq!(copied.get("name").unwrap().text(), "Ann");
    assert_eq!(table.frame().items().unwrap().len(), 3);

    // Re-putting the existing key hits the primary-key constraint.
    let err = ann.put("name", "Anne").unwrap_err();
    assert!(matches!(err, Error::Storage(_)));
}

#[test]
fn test_facade_paginates_through_valve() {
    let data = Arc::new(
        SqliteData::temporary()
            .unwrap()
            .with_collection("users", &["id"], &["name"])
            .unwrap(),
    );
    for i in 0..10 {
        data.put(
            "users",
            &Attributes::new()
                .with("id", format!("{i:02}"))
                .with("name", format!("user-{i}")),
        )
        .unwrap();
    }

    // items() walks every dosage; a chunked valve must not change
    // what the facade returns.
    let table = users_table(ScanValve::paged(data.clone(), 4), data);
    let items = table.frame().items().unwrap();
    assert_eq!(items.len(), 10);

    let mut ids: Vec<String> = items
        .iter()
        .map(|item| item.get("id").unwrap().text())
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[test]
fn test_table_put_then_filtered_fetch() {
    let data = Arc::new(
        SqliteData::temporary()
            .unwrap()
            .with_collection("users", &["id"], &["name"])
            .unwrap(),
    );
    let table = users_table(ScanValve::new(data.clone()), data);

    table
        .put(&Attributes::new().with("id", "7").with("name", "Pat"))
        .unwrap();

    let dosage = table.frame().filter_eq("id", "7").fetch().unwrap();
    assert_eq!(dosage.records().len(), 1);
    assert!(!dosage.has_next());
}
