//! Rendering through the public API.

use clausekit::prelude::*;

fn report() -> BuildResult<QueryBuilder> {
    let mut qb = QueryBuilder::new();
    qb.select_columns(
        "orders",
        &["customer_id", "region"],
        &[None, Some("r")],
    )?
    .select_function("SUM(`orders`.`total`) AS revenue")?
    .from_as("orders", "o")?
    .left_join_as("customers", "c", "c.id = o.customer_id")?
    .where_clause("o.status = 'paid'")?
    .and_condition("o.created_at >= '2024-01-01'")?
    .group_by_table_column("orders", "customer_id")?
    .group_by("region")?
    .sort_by("revenue")?
    .having("SUM(`orders`.`total`) > 1000")?;
    Ok(qb)
}

#[test]
fn report_renders_in_historical_order() {
    let mut qb = report().unwrap();
    assert_eq!(
        qb.render(),
        "SELECT `orders`.`customer_id`, `orders`.`region` r, SUM(`orders`.`total`) AS revenue \
         FROM `orders` AS o \
         LEFT JOIN `customers` AS c ON c.id = o.customer_id \
         WHERE o.status = 'paid' AND o.created_at >= '2024-01-01' \
         GROUP BY `orders`.`customer_id`, `region` \
         SORT BY `revenue` \
         HAVING SUM(`orders`.`total`) > 1000;"
    );
}

#[test]
fn statement_outlives_builder_changes() {
    let mut qb = report().unwrap();
    let before = qb.render();
    qb.where_clause("1 = 1").unwrap();
    let after = qb.render();

    assert_ne!(before, after);
    assert!(before.as_str().contains("o.status = 'paid'"));
    assert!(after.as_str().contains("WHERE 1 = 1 GROUP BY"));
    assert_eq!(qb.current_query(), Some(&after));
}

#[test]
fn statement_conversions() {
    let mut qb = QueryBuilder::new();
    qb.select_all().from("t").unwrap();
    let statement = qb.render();

    assert_eq!(statement.to_string(), "SELECT * FROM `t`;");
    assert_eq!(statement.len(), "SELECT * FROM `t`;".len());
    assert!(!statement.is_empty());
    let text: String = statement.clone().into();
    assert_eq!(text, statement.into_string());
}

#[test]
fn insert_is_independent_of_builder() {
    let mut qb = QueryBuilder::new();
    qb.from("users").unwrap();

    let insert = build_insert("users", &["name"], &["'ann'"]);
    assert_eq!(insert, "INSERT INTO `users` (name)VALUES ('ann');");
    assert_eq!(qb.to_sql(), "FROM `users`;");
}
