use rstest::rstest;
use tessera_query::{DatabaseBackend, LedgerQueries, QueryBuilder};

#[rstest]
#[case(DatabaseBackend::Postgres, "serial")]
#[case(DatabaseBackend::MySql, "AUTO_INCREMENT")]
#[case(DatabaseBackend::Sqlite, "AUTOINCREMENT")]
fn ledger_id_is_auto_incrementing(#[case] backend: DatabaseBackend, #[case] keyword: &str) {
    let sql = LedgerQueries::default().create_table(backend);
    assert!(sql.contains(keyword), "got: {sql}");
    assert!(sql.contains("PRIMARY KEY"), "got: {sql}");
    assert!(sql.contains("CURRENT_TIMESTAMP"), "got: {sql}");
}

#[test]
fn file_names_with_quotes_are_escaped() {
    let ledger = LedgerQueries::new("schema_history").unwrap();
    let insert = ledger
        .record(DatabaseBackend::Postgres, "001_it's.sql")
        .unwrap();
    assert!(insert.contains("\"schema_history\""), "got: {insert}");
    assert!(!insert.contains("'001_it's.sql'"), "got: {insert}");
}

#[test]
fn transaction_keywords_match_the_builder_backend() {
    let qb = QueryBuilder::new(DatabaseBackend::MySql);
    assert_eq!(qb.backend().begin_transaction(), "START TRANSACTION");
    assert_eq!(
        QueryBuilder::new(DatabaseBackend::Sqlite)
            .backend()
            .begin_transaction(),
        "BEGIN"
    );
}
