use crate::schema::KeyKind;

/// Map a column's key classification to an optional constraint statement.
///
/// Primary keys produce nothing: they are already carried by `increments()`
/// or implied by the column itself.
pub fn map_key(key: KeyKind, field: &str) -> Option<String> {
    match key {
        KeyKind::Primary | KeyKind::None => None,
        KeyKind::Unique => Some(format!("$table->unique(\"{field}\");")),
        KeyKind::Indexed => Some(format!("$table->index(\"{field}\");")),
    }
}
