//! Sharing one builder across threads.

use clausekit::{BuilderError, ClauseKind, QueryBuilder, SharedQueryBuilder};
use std::thread;

#[test]
fn concurrent_updates_are_serialized() {
    let shared = SharedQueryBuilder::new();
    shared
        .update(|qb| {
            qb.select_all().from("events")?;
            Ok(())
        })
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                shared
                    .update(|qb| {
                        qb.and_condition(&format!("shard = {i}"))?;
                        Ok(())
                    })
                    .unwrap();
                shared.render()
            })
        })
        .collect();

    for handle in handles {
        let statement = handle.join().unwrap();
        assert!(statement.as_str().starts_with("SELECT * FROM `events` WHERE shard = "));
    }

    let where_count = shared.inspect(|qb| qb.fragments(ClauseKind::Where).len());
    assert_eq!(where_count, 8);

    let sql = shared.render();
    // One bare condition followed by seven AND-prefixed ones.
    assert_eq!(sql.as_str().matches(" AND shard = ").count(), 7);
    assert_eq!(shared.current_query(), Some(sql));
}

#[test]
fn failed_update_leaves_builder_unchanged() {
    let shared = SharedQueryBuilder::from({
        let mut qb = QueryBuilder::new();
        qb.select_all().from("users").unwrap();
        qb
    });

    let err = shared
        .update(|qb| {
            qb.where_clause("id > 5")?.inner_join("orders", "")?;
            Ok(())
        })
        .unwrap_err();
    assert!(err.is_invalid_argument());

    // The WHERE from the failed batch was not committed.
    assert_eq!(shared.to_sql(), "SELECT * FROM `users`;");
    assert!(shared.current_query().is_none());
}

#[test]
fn join_before_from_is_a_precondition_error() {
    let shared = SharedQueryBuilder::new();
    let err = shared
        .update(|qb| {
            qb.left_join("roles", "a = b")?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, BuilderError::Precondition(_)));
}

#[test]
fn update_can_read_another_shared_builder() {
    let source = SharedQueryBuilder::new();
    source
        .update(|qb| {
            qb.from("users")?;
            Ok(())
        })
        .unwrap();
    let target = SharedQueryBuilder::new();

    target
        .update(|qb| {
            let tables = source.inspect(|src| src.fragments(ClauseKind::From).to_vec());
            for table in &tables {
                qb.select_function(&format!("COUNT({table})"))?;
            }
            Ok(())
        })
        .unwrap();

    assert_eq!(target.to_sql(), "SELECT COUNT(`users`);");
    assert_eq!(source.to_sql(), "FROM `users`;");
}
