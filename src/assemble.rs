use std::fs;
use std::path::Path;

use crate::error::RebaseError;
use crate::schema::{TableTranslation, MIGRATIONS_TABLE};
use crate::template::render;

/// Template text for the migration document and its per-table create blocks.
#[derive(Debug, Clone)]
pub struct Stubs {
    pub blank_migration: String,
    pub create_table: String,
}

impl Stubs {
    /// The default templates compiled into the binary.
    pub fn embedded() -> Self {
        Stubs {
            blank_migration: include_str!("../stubs/blank_migration.stub").to_string(),
            create_table: include_str!("../stubs/create_table.stub").to_string(),
        }
    }

    /// Load both stub files from an override directory.
    pub fn from_dir(dir: &Path) -> Result<Self, RebaseError> {
        Ok(Stubs {
            blank_migration: read_stub(dir, "blank_migration.stub")?,
            create_table: read_stub(dir, "create_table.stub")?,
        })
    }
}

fn read_stub(dir: &Path, name: &str) -> Result<String, RebaseError> {
    let path = dir.join(name);
    fs::read_to_string(&path)
        .map_err(|e| RebaseError::Template(format!("cannot read {}: {e}", path.display())))
}

/// Assemble the complete migration document for a database.
///
/// Create blocks appear in table-enumeration order, drops in the same order.
/// The migration tracking table is never recreated or dropped. The whole
/// document is rendered in memory; the caller writes it in one shot.
pub fn assemble(
    database: &str,
    class_name: &str,
    translations: &[TableTranslation],
    stubs: &Stubs,
) -> String {
    let mut create_blocks = Vec::new();
    let mut drops = Vec::new();

    for translation in translations {
        if translation.table_name == MIGRATIONS_TABLE {
            continue;
        }

        let statements = translation.create_statements.join("\n            ");
        let block = render(
            &stubs.create_table,
            &[
                ("TableNamePlaceholder", translation.table_name.as_str()),
                ("ColumnStatementsPlaceholder", statements.as_str()),
                ("ConnectionNamePlaceholder", database),
            ],
        );
        create_blocks.push(block.trim_end().to_string());

        let drop = render(
            &translation.drop_statement,
            &[
                ("TableNamePlaceholder", translation.table_name.as_str()),
                ("ConnectionNamePlaceholder", database),
            ],
        );
        drops.push(format!("        {drop}"));
    }

    let create_section = create_blocks.join("\n\n");
    let drop_section = drops.join("\n");

    render(
        &stubs.blank_migration,
        &[
            ("ClassNamePlaceholder", class_name),
            ("CreateTableBlockPlaceholder", create_section.as_str()),
            ("DropBlockPlaceholder", drop_section.as_str()),
            ("ConnectionNamePlaceholder", database),
        ],
    )
}
