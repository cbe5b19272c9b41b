/// The framework's own migration tracking table. Recreating or dropping it
/// would break the bookkeeping of the migrations this tool generates.
pub const MIGRATIONS_TABLE: &str = "migrations";

/// One row of table-description metadata, as MySQL reports it for a column
/// (equivalent to a `SHOW COLUMNS` / `DESCRIBE` row).
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    pub field: String,
    /// Raw SQL type expression, e.g. `varchar(255)` or `int(10) unsigned`.
    pub column_type: String,
    pub nullable: bool,
    pub default_value: Option<String>,
    /// Extra attributes, e.g. `auto_increment`; empty when none.
    pub extra: String,
    pub key: KeyKind,
}

/// MySQL-style column key classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    None,
    Primary,
    Unique,
    Indexed,
}

impl KeyKind {
    /// Parse the `COLUMN_KEY` value MySQL reports: `PRI`, `UNI`, `MUL` or empty.
    pub fn from_column_key(raw: &str) -> Self {
        match raw {
            "PRI" => KeyKind::Primary,
            "UNI" => KeyKind::Unique,
            "MUL" => KeyKind::Indexed,
            _ => KeyKind::None,
        }
    }
}

/// One table's name and its column descriptors, in declaration order.
#[derive(Debug, Clone)]
pub struct TableDescription {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

/// The ordered schema-builder statements for one table, plus its reversal.
#[derive(Debug, Clone)]
pub struct TableTranslation {
    pub table_name: String,
    /// Column statements first, then key constraint statements.
    pub create_statements: Vec<String>,
    pub drop_statement: String,
}
