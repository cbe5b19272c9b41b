use chrono::Local;
use heck::ToSnakeCase;

/// Class name given to the generated migration.
pub const MIGRATION_CLASS: &str = "RebaseDatabase";

/// Build the migration file name:
/// `YYYY_MM_DD_HHMMSS_<snake_case_class>_<database>.php`.
pub fn migration_filename(class_name: &str, database: &str) -> String {
    let stamp = Local::now().format("%Y_%m_%d_%H%M%S");
    format!("{stamp}_{}_{database}.php", class_name.to_snake_case())
}
