use sqlx::MySqlPool;

use crate::error::RebaseError;

/// List the base tables of a database, equivalent to `SHOW TABLES`.
pub async fn query_tables(pool: &MySqlPool, database: &str) -> Result<Vec<String>, RebaseError> {
    let rows = sqlx::query_as::<_, TableRow>(
        r#"
        SELECT t.table_name AS table_name
        FROM information_schema.tables t
        WHERE t.table_schema = ? AND t.table_type = 'BASE TABLE'
        ORDER BY t.table_name
        "#,
    )
    .bind(database)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|row| row.table_name).collect())
}

#[derive(sqlx::FromRow)]
struct TableRow {
    table_name: String,
}
