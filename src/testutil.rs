use crate::schema::{ColumnDescriptor, KeyKind};

/// Create a ColumnDescriptor with sensible defaults for testing.
/// Returns a non-nullable int(11) column with no default, no extras, no key.
pub fn test_descriptor(field: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        field: field.to_string(),
        column_type: "int(11)".to_string(),
        nullable: false,
        default_value: None,
        extra: String::new(),
        key: KeyKind::None,
    }
}
