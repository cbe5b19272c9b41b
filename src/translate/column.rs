use tracing::warn;

use crate::parse::{parse_column_type, TypeSize};
use crate::schema::ColumnDescriptor;

/// A fully rendered schema-builder line for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub statement: String,
}

/// Build the schema-builder statement for one column descriptor.
///
/// Returns `None` when the base type has no mapping; the run continues and
/// the column is reported via a warning.
///
/// The modifier chain is appended in a fixed order — nullability, then
/// default, then signedness — with exactly one terminating semicolon.
pub fn build_column(descriptor: &ColumnDescriptor) -> Option<ColumnSpec> {
    let parsed = parse_column_type(&descriptor.column_type);

    let base = if descriptor.extra == "auto_increment" {
        // Auto-increment implies an integer primary key in the source schema;
        // the declared type is irrelevant.
        format!("increments(\"{}\")", descriptor.field)
    } else {
        constructor_call(&descriptor.field, &parsed.base_type, &parsed.size)?
    };

    let mut statement = format!("$table->{base}");
    if descriptor.nullable {
        statement.push_str("->nullable()");
    } else {
        statement.push_str("->notNull()");
    }
    if let Some(ref default) = descriptor.default_value {
        if !default.is_empty() {
            statement.push_str(&format!("->defaultsTo('{}')", escape_php_string(default)));
        }
    }
    if parsed.unsigned {
        statement.push_str("->unsigned()");
    }
    statement.push(';');

    Some(ColumnSpec {
        name: descriptor.field.clone(),
        statement,
    })
}

/// Select the schema-builder constructor for a base type.
fn constructor_call(field: &str, base_type: &str, size: &TypeSize) -> Option<String> {
    let call = match base_type {
        "bigint" => format!("bigInteger(\"{field}\")"),
        "blob" => format!("binary(\"{field}\")"),
        "boolean" => format!("boolean(\"{field}\")"),
        "char" => sized("char", field, size),
        "date" => format!("date(\"{field}\")"),
        "datetime" => format!("dateTime(\"{field}\")"),
        "decimal" => sized("decimal", field, size),
        "double" => sized("double", field, size),
        "float" => format!("float(\"{field}\")"),
        "int" => format!("integer(\"{field}\")"),
        "json" => format!("json(\"{field}\")"),
        "jsonb" => format!("jsonb(\"{field}\")"),
        "longtext" => format!("longText(\"{field}\")"),
        "mediumint" => format!("mediumInteger(\"{field}\")"),
        "mediumtext" => format!("mediumText(\"{field}\")"),
        "smallint" => format!("smallInteger(\"{field}\")"),
        "varchar" => sized("string", field, size),
        "text" => format!("text(\"{field}\")"),
        "time" => format!("time(\"{field}\")"),
        "tinyint" => format!("tinyInteger(\"{field}\")"),
        "timestamp" => format!("timestamp(\"{field}\")"),
        "enum" => sized("enum", field, size),
        other => {
            warn!(
                column = field,
                column_type = other,
                "no schema-builder mapping for column type, skipping column"
            );
            return None;
        }
    };
    Some(call)
}

/// Render a constructor that expects a size argument. A size-requiring type
/// arriving without a parsed size is a data-quality defect in the source
/// schema; the constructor is emitted bare (the schema builder applies its
/// own default) and the column is reported loudly.
fn sized(constructor: &str, field: &str, size: &TypeSize) -> String {
    match size_args(size) {
        Some(args) => format!("{constructor}(\"{field}\", {args})"),
        None => {
            warn!(
                column = field,
                constructor,
                "size-requiring type has no parsed size, emitting without a size argument"
            );
            format!("{constructor}(\"{field}\")")
        }
    }
}

fn size_args(size: &TypeSize) -> Option<String> {
    match size {
        TypeSize::Single(n) => Some(n.to_string()),
        TypeSize::Pair(p, s) => Some(format!("{p}, {s}")),
        TypeSize::Choices(choices) => {
            let quoted: Vec<String> = choices
                .iter()
                .map(|c| format!("'{}'", escape_php_string(c)))
                .collect();
            Some(format!("[{}]", quoted.join(", ")))
        }
        TypeSize::None => None,
    }
}

/// Escape single quotes for a PHP single-quoted string literal.
fn escape_php_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnDescriptor;
    use crate::testutil::test_descriptor;

    fn col(field: &str, column_type: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            column_type: column_type.to_string(),
            ..test_descriptor(field)
        }
    }

    #[test]
    fn test_varchar_roundtrip() {
        let spec = build_column(&col("name", "varchar(255)")).unwrap();
        assert_eq!(spec.statement, "$table->string(\"name\", 255)->notNull();");
    }

    #[test]
    fn test_simple_constructors() {
        let cases = [
            ("bigint(20)", "$table->bigInteger(\"c\")->notNull();"),
            ("blob", "$table->binary(\"c\")->notNull();"),
            ("boolean", "$table->boolean(\"c\")->notNull();"),
            ("date", "$table->date(\"c\")->notNull();"),
            ("datetime", "$table->dateTime(\"c\")->notNull();"),
            ("float", "$table->float(\"c\")->notNull();"),
            ("int(11)", "$table->integer(\"c\")->notNull();"),
            ("json", "$table->json(\"c\")->notNull();"),
            ("jsonb", "$table->jsonb(\"c\")->notNull();"),
            ("longtext", "$table->longText(\"c\")->notNull();"),
            ("mediumint(9)", "$table->mediumInteger(\"c\")->notNull();"),
            ("mediumtext", "$table->mediumText(\"c\")->notNull();"),
            ("smallint(6)", "$table->smallInteger(\"c\")->notNull();"),
            ("text", "$table->text(\"c\")->notNull();"),
            ("time", "$table->time(\"c\")->notNull();"),
            ("tinyint(4)", "$table->tinyInteger(\"c\")->notNull();"),
            ("timestamp", "$table->timestamp(\"c\")->notNull();"),
        ];
        for (column_type, expected) in cases {
            let spec = build_column(&col("c", column_type)).unwrap();
            assert_eq!(spec.statement, expected, "for {column_type}");
        }
    }

    #[test]
    fn test_sized_constructors() {
        let spec = build_column(&col("code", "char(4)")).unwrap();
        assert_eq!(spec.statement, "$table->char(\"code\", 4)->notNull();");

        let spec = build_column(&col("price", "decimal(10,2)")).unwrap();
        assert_eq!(spec.statement, "$table->decimal(\"price\", 10, 2)->notNull();");

        let spec = build_column(&col("ratio", "double(8,2)")).unwrap();
        assert_eq!(spec.statement, "$table->double(\"ratio\", 8, 2)->notNull();");
    }

    #[test]
    fn test_enum_renders_choice_list() {
        let spec = build_column(&col("status", "enum('draft','published')")).unwrap();
        assert_eq!(
            spec.statement,
            "$table->enum(\"status\", ['draft', 'published'])->notNull();"
        );
    }

    #[test]
    fn test_nullability_is_exclusive() {
        let not_null = build_column(&col("a", "int(11)")).unwrap().statement;
        assert!(not_null.contains("->notNull()"));
        assert!(!not_null.contains("->nullable()"));

        let nullable = build_column(&ColumnDescriptor {
            nullable: true,
            ..col("a", "int(11)")
        })
        .unwrap()
        .statement;
        assert!(nullable.contains("->nullable()"));
        assert!(!nullable.contains("->notNull()"));
    }

    #[test]
    fn test_default_between_nullability_and_unsigned() {
        let spec = build_column(&ColumnDescriptor {
            default_value: Some("0".to_string()),
            ..col("count", "int(10) unsigned")
        })
        .unwrap();
        assert_eq!(
            spec.statement,
            "$table->integer(\"count\")->notNull()->defaultsTo('0')->unsigned();"
        );
    }

    #[test]
    fn test_empty_default_is_ignored() {
        let spec = build_column(&ColumnDescriptor {
            default_value: Some(String::new()),
            ..col("a", "int(11)")
        })
        .unwrap();
        assert!(!spec.statement.contains("defaultsTo"));
    }

    #[test]
    fn test_default_quote_is_escaped() {
        let spec = build_column(&ColumnDescriptor {
            default_value: Some("it's".to_string()),
            ..col("a", "varchar(50)")
        })
        .unwrap();
        assert!(spec.statement.contains("->defaultsTo('it\\'s')"));
    }

    #[test]
    fn test_auto_increment_bypasses_type_mapping() {
        let spec = build_column(&ColumnDescriptor {
            extra: "auto_increment".to_string(),
            ..col("id", "geometry")
        })
        .unwrap();
        assert_eq!(spec.statement, "$table->increments(\"id\")->notNull();");
    }

    #[test]
    fn test_unsupported_type_is_skipped() {
        assert!(build_column(&col("shape", "geometry")).is_none());
    }

    #[test]
    fn test_missing_size_emits_bare_constructor() {
        let spec = build_column(&col("name", "varchar")).unwrap();
        assert_eq!(spec.statement, "$table->string(\"name\")->notNull();");
    }
}
