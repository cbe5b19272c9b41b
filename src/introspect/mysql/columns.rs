use sqlx::MySqlPool;

use crate::error::RebaseError;
use crate::schema::{ColumnDescriptor, KeyKind};

/// Describe a table's columns in declaration order, equivalent to a
/// `DESCRIBE` / `SHOW COLUMNS` result (field, type, null, key, default, extra).
pub async fn query_columns(
    pool: &MySqlPool,
    database: &str,
    table_name: &str,
) -> Result<Vec<ColumnDescriptor>, RebaseError> {
    let rows = sqlx::query_as::<_, ColumnRow>(
        r#"
        SELECT c.column_name AS field, c.column_type AS column_type,
               c.is_nullable AS is_nullable, c.column_default AS default_value,
               c.extra AS extra, c.column_key AS column_key
        FROM information_schema.columns c
        WHERE c.table_schema = ? AND c.table_name = ?
        ORDER BY c.ordinal_position
        "#,
    )
    .bind(database)
    .bind(table_name)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ColumnDescriptor {
            field: row.field,
            column_type: row.column_type,
            nullable: row.is_nullable == "YES",
            default_value: row.default_value,
            extra: row.extra,
            key: KeyKind::from_column_key(&row.column_key),
        })
        .collect())
}

#[derive(sqlx::FromRow)]
struct ColumnRow {
    field: String,
    column_type: String,
    is_nullable: String,
    default_value: Option<String>,
    extra: String,
    column_key: String,
}
