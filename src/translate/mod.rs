pub mod column;
pub mod keys;

use crate::schema::{ColumnDescriptor, TableTranslation};

use self::column::build_column;
use self::keys::map_key;

/// Translate one table's column descriptors into its ordered schema-builder
/// statements and reversal.
///
/// Column statements come first, in declaration order, followed by key
/// constraint statements in the same discovery order. The drop statement is a
/// pure template; both its placeholders are resolved at assembly time so the
/// table name is never interpolated next to unresolved placeholder text.
pub fn translate_table(table_name: &str, descriptors: &[ColumnDescriptor]) -> TableTranslation {
    let mut statements = Vec::with_capacity(descriptors.len());
    let mut key_statements = Vec::new();

    for descriptor in descriptors {
        if let Some(spec) = build_column(descriptor) {
            tracing::debug!(column = spec.name.as_str(), "translated column");
            statements.push(spec.statement);
        }
        if let Some(statement) = map_key(descriptor.key, &descriptor.field) {
            key_statements.push(statement);
        }
    }

    statements.extend(key_statements);

    TableTranslation {
        table_name: table_name.to_string(),
        create_statements: statements,
        drop_statement:
            "Schema::connection('ConnectionNamePlaceholder')->drop('TableNamePlaceholder');"
                .to_string(),
    }
}
