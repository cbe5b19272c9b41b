mod columns;
mod tables;

use sqlx::MySqlPool;

use crate::error::RebaseError;
use crate::schema::{TableDescription, MIGRATIONS_TABLE};

/// Introspect a MySQL database: list its base tables and describe each one's
/// columns in declaration order.
///
/// The migration tracking table is skipped up front; describing it would be
/// wasted work since it never appears in the output.
pub async fn introspect(
    pool: &MySqlPool,
    database: &str,
) -> Result<Vec<TableDescription>, RebaseError> {
    let names = tables::query_tables(pool, database).await?;

    let mut described = Vec::with_capacity(names.len());
    for name in names {
        if name == MIGRATIONS_TABLE {
            continue;
        }
        let columns = columns::query_columns(pool, database, &name).await?;
        described.push(TableDescription { name, columns });
    }

    Ok(described)
}
