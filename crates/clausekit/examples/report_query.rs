//! Build a revenue report query, then the same query in standard SQL form.
//!
//! Run with:
//!   cargo run --example report_query -p clausekit

use clausekit::prelude::*;
use colored::Colorize;

fn declare(qb: &mut QueryBuilder) -> BuildResult<()> {
    qb.select_column("orders", "customer_id")?
        .select_function("SUM(`orders`.`total`) AS revenue")?
        .from("orders")?
        .inner_join("customers", "customers.id = orders.customer_id")?
        .where_clause("orders.status = 'paid'")?
        .group_by_table_column("orders", "customer_id")?
        .having("SUM(`orders`.`total`) > 1000")?
        .sort_by("revenue")?;
    Ok(())
}

fn main() -> BuildResult<()> {
    println!("{}", "=== default (historical) rendering ===".bold());
    let mut qb = QueryBuilder::new();
    declare(&mut qb)?;
    println!("{}", qb.render().as_str().green());

    println!("\n{}", "=== standard SQL rendering ===".bold());
    let mut qb = QueryBuilder::with_config(BuilderConfig::standard());
    declare(&mut qb)?;
    println!("{}", qb.render().as_str().green());

    println!("\n{}", "=== insert helper ===".bold());
    let insert = build_insert("customers", &["id", "name"], &["7", "'Ada'"]);
    println!("{}", insert.as_str().green());

    println!("\n{}", "=== validation ===".bold());
    let mut qb = QueryBuilder::new();
    match qb.inner_join("customers", "customers.id = orders.customer_id") {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("{} {e}", "rejected:".red()),
    }
    match qb.select_columns("orders", &["id", "total"], &[None]) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("{} {e}", "rejected:".red()),
    }

    Ok(())
}
