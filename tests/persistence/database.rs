use std::sync::{Arc, Barrier};
use std::thread;

use ferrum_store::persistence::{Context, Database, StoreError, TableDefinition};

fn _prepare_database() -> Database {
    Database::new(vec![
        TableDefinition::new("imports"),
        TableDefinition::with_columns("users", &["id"]),
    ])
}

fn _import(id: &str, status: &str, file_name: &str) -> Vec<u8> {
    format!(
        "{{\"id\":\"{}\", \"status\":\"{}\", \"fileName\":\"{}\"}}",
        id, status, file_name
    )
    .into_bytes()
}

fn _insert_two_imports(database: &Database, ctx: &Context) {
    database
        .insert(
            ctx,
            "imports",
            &["csid", "importID"],
            &["cs-1", "imp-1"],
            _import("imp-1", "processed", "file1"),
        )
        .unwrap();
    database
        .insert(
            ctx,
            "imports",
            &["csid", "importID"],
            &["cs-1", "imp-2"],
            _import("imp-2", "succeeded", "file2"),
        )
        .unwrap();
}

#[test]
fn database_scenario_insert_get_update() {
    let database = Database::new(vec![TableDefinition::new("imports")]);
    let ctx = Context::background();

    database
        .insert(&ctx, "imports", &["csid"], &["A"], b"b1".to_vec())
        .unwrap();
    database
        .insert(&ctx, "imports", &["csid"], &["A"], b"b2".to_vec())
        .unwrap();
    assert_eq!(
        database.get(&ctx, "imports", "csid", "A").unwrap(),
        vec![b"b1".to_vec(), b"b2".to_vec()]
    );

    database.update(&ctx, "imports", "csid", "A", b"b3").unwrap();
    assert_eq!(
        database.get(&ctx, "imports", "csid", "A").unwrap(),
        vec![b"b3".to_vec(), b"b3".to_vec()]
    );
    assert_eq!(database.row_count("imports"), Ok(2));
}

#[test]
fn database_get_empty_payload() {
    let database = _prepare_database();
    let ctx = Context::background();
    database
        .insert(&ctx, "imports", &["csid"], &["cs-1"], vec![])
        .unwrap();

    assert_eq!(
        database.get(&ctx, "imports", "csid", "cs-1").unwrap(),
        vec![Vec::<u8>::new()]
    );
}

#[test]
fn database_get_by_second_column() {
    let database = _prepare_database();
    let ctx = Context::background();
    _insert_two_imports(&database, &ctx);

    assert_eq!(
        database.get(&ctx, "imports", "importID", "imp-2").unwrap(),
        vec![_import("imp-2", "succeeded", "file2")]
    );
    assert_eq!(
        database.get(&ctx, "imports", "csid", "cs-1").unwrap().len(),
        2
    );
}

#[test]
fn database_tables_do_not_leak_into_each_other() {
    let database = _prepare_database();
    let ctx = Context::background();
    _insert_two_imports(&database, &ctx);
    database
        .insert(&ctx, "users", &["id"], &["imp-2"], b"user".to_vec())
        .unwrap();

    assert_eq!(
        database.get(&ctx, "imports", "importID", "imp-2").unwrap(),
        vec![_import("imp-2", "succeeded", "file2")]
    );
    assert_eq!(
        database.get(&ctx, "users", "id", "imp-2").unwrap(),
        vec![b"user".to_vec()]
    );
    assert_eq!(
        database.get(&ctx, "users", "importID", "imp-2"),
        Err(StoreError::ColumnNotFound("importID".to_string()))
    );
}

#[test]
fn database_update_leaves_other_rows_unchanged() {
    let database = _prepare_database();
    let ctx = Context::background();
    _insert_two_imports(&database, &ctx);

    database
        .update(
            &ctx,
            "imports",
            "importID",
            "imp-1",
            &_import("imp-1", "succeeded", "file1"),
        )
        .unwrap();

    assert_eq!(
        database.get(&ctx, "imports", "importID", "imp-1").unwrap(),
        vec![_import("imp-1", "succeeded", "file1")]
    );
    assert_eq!(
        database.get(&ctx, "imports", "importID", "imp-2").unwrap(),
        vec![_import("imp-2", "succeeded", "file2")]
    );
}

#[test]
fn database_declared_column_without_rows_is_empty() {
    let database = _prepare_database();

    assert_eq!(
        database.get(&Context::background(), "users", "id", "nobody"),
        Ok(vec![])
    );
}

#[test]
fn database_unknown_table_fails() {
    let database = _prepare_database();
    let ctx = Context::background();
    let missing = "winky wonky";

    assert_eq!(
        database.get(&ctx, missing, "csid", "A"),
        Err(StoreError::TableNotFound(missing.to_string()))
    );
    assert_eq!(
        database.insert(&ctx, missing, &["csid"], &["A"], vec![]),
        Err(StoreError::TableNotFound(missing.to_string()))
    );
    assert_eq!(
        database.update(&ctx, missing, "csid", "A", b""),
        Err(StoreError::TableNotFound(missing.to_string()))
    );
}

#[test]
fn database_unknown_column_fails() {
    let database = _prepare_database();
    let ctx = Context::background();

    assert_eq!(
        database.get(&ctx, "imports", "winky wonky", "A"),
        Err(StoreError::ColumnNotFound("winky wonky".to_string()))
    );
}

#[test]
fn database_insert_length_mismatch_does_not_mutate() {
    let database = _prepare_database();
    let ctx = Context::background();

    let result = database.insert(&ctx, "imports", &["csid", "importID"], &["A"], b"x".to_vec());
    assert!(matches!(result, Err(StoreError::ArgumentMismatch(_))));
    assert_eq!(database.row_count("imports"), Ok(0));
    assert_eq!(database.column_names("imports"), Ok(vec![]));
}

#[test]
fn database_length_mismatch_is_checked_before_table() {
    let database = _prepare_database();

    let result = database.insert(
        &Context::background(),
        "winky wonky",
        &["csid"],
        &[] as &[&str],
        vec![],
    );
    assert!(matches!(result, Err(StoreError::ArgumentMismatch(_))));
}

#[test]
fn database_update_requires_column_and_value() {
    let database = _prepare_database();
    let ctx = Context::background();
    _insert_two_imports(&database, &ctx);

    assert!(matches!(
        database.update(&ctx, "imports", "", "imp-1", b"x"),
        Err(StoreError::ArgumentMismatch(_))
    ));
    assert!(matches!(
        database.update(&ctx, "imports", "importID", "", b"x"),
        Err(StoreError::ArgumentMismatch(_))
    ));
}

#[test]
fn database_update_unknown_column_or_value_fails() {
    let database = _prepare_database();
    let ctx = Context::background();
    _insert_two_imports(&database, &ctx);

    assert_eq!(
        database.update(&ctx, "imports", "status", "done", b"x"),
        Err(StoreError::ColumnNotFound("status".to_string()))
    );
    assert_eq!(
        database.update(&ctx, "imports", "importID", "imp-9", b"x"),
        Err(StoreError::ValueNotFound("imp-9".to_string()))
    );
    assert_eq!(
        database.get(&ctx, "imports", "csid", "cs-1").unwrap(),
        vec![
            _import("imp-1", "processed", "file1"),
            _import("imp-2", "succeeded", "file2")
        ]
    );
}

#[test]
fn database_ignores_cancelled_context() {
    let database = _prepare_database();
    let ctx = Context::background();
    ctx.cancel();

    database
        .insert(&ctx, "imports", &["csid"], &["A"], b"b1".to_vec())
        .unwrap();
    assert_eq!(
        database.get(&ctx, "imports", "csid", "A"),
        Ok(vec![b"b1".to_vec()])
    );
}

#[test]
fn database_table_names_keep_declaration_order() {
    let database = _prepare_database();

    assert_eq!(database.table_names(), vec!["imports", "users"]);
    assert!(database.contains_table("users"));
    assert!(!database.contains_table("profiles"));
}

#[test]
fn database_parallel_gets_make_progress_together() {
    let database = Arc::new(_prepare_database());
    let ctx = Context::background();
    _insert_two_imports(&database, &ctx);

    let n_readers = 8;
    let barrier = Arc::new(Barrier::new(n_readers));

    thread::scope(|scope| {
        for _ in 0..n_readers {
            let database = Arc::clone(&database);
            let barrier = Arc::clone(&barrier);
            scope.spawn(move || {
                let ctx = Context::background();
                barrier.wait();
                for _ in 0..100 {
                    let rows = database.get(&ctx, "imports", "csid", "cs-1").unwrap();
                    assert_eq!(rows.len(), 2);
                }
            });
        }
    });
}

#[test]
fn database_concurrent_insert_and_get_never_see_torn_rows() {
    const MAX_READS: usize = 1_000_000;
    let database = Arc::new(_prepare_database());
    let n_rows = 200;
    let payload_len = 512;

    thread::scope(|scope| {
        let writer = Arc::clone(&database);
        scope.spawn(move || {
            let ctx = Context::background();
            for n in 0..n_rows {
                let byte = (n % 251) as u8;
                writer
                    .insert(&ctx, "imports", &["csid"], &["A"], vec![byte; payload_len])
                    .unwrap();
            }
        });

        let updater = Arc::clone(&database);
        scope.spawn(move || {
            let ctx = Context::background();
            for n in 0..n_rows {
                let byte = (n % 7) as u8;
                // The bucket may not exist yet when the updater wins the race.
                let _ = updater.update(&ctx, "imports", "csid", "A", &vec![byte; payload_len]);
            }
        });

        for _ in 0..4 {
            let reader = Arc::clone(&database);
            scope.spawn(move || {
                let ctx = Context::background();
                let mut seen = 0;
                for _ in 0..MAX_READS {
                    let rows = reader.get(&ctx, "imports", "csid", "A").unwrap();
                    assert!(rows.len() >= seen);
                    for row in rows.iter() {
                        assert_eq!(row.len(), payload_len);
                        assert!(row.iter().all(|byte| *byte == row[0]));
                    }
                    seen = rows.len();
                    if seen == n_rows {
                        break;
                    }
                }
                assert_eq!(seen, n_rows, "reader gave up before the writer finished");
            });
        }
    });

    assert_eq!(database.row_count("imports"), Ok(n_rows));
}
