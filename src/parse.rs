/// The size or argument portion of a raw column type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSize {
    /// No parenthesized suffix, e.g. `text`.
    None,
    /// A single display width or length, e.g. `varchar(255)`.
    Single(u32),
    /// A precision/scale pair, e.g. `decimal(10,2)`.
    Pair(u32, u32),
    /// A quoted choice list, e.g. `enum('a','b')`.
    Choices(Vec<String>),
}

/// A raw SQL column type expression, broken into its semantic parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedType {
    /// Normalized lowercase base type name, e.g. `varchar`.
    pub base_type: String,
    pub size: TypeSize,
    pub unsigned: bool,
}

/// Parse a raw column type expression such as `int(10) unsigned` or
/// `enum('a','b')` into its base type, size and signedness.
pub fn parse_column_type(raw: &str) -> ParsedType {
    let mut rest = raw.trim();

    // MySQL appends signedness after the closing paren: `int(10) unsigned`.
    // Compare as bytes: a non-ASCII enum label could put a multibyte
    // character at the slice offset.
    let mut unsigned = false;
    let bytes = rest.as_bytes();
    if bytes.len() >= 9 && bytes[bytes.len() - 9..].eq_ignore_ascii_case(b" unsigned") {
        unsigned = true;
        rest = rest[..rest.len() - 9].trim_end();
    }

    let base_end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let base_type = rest[..base_end].to_ascii_lowercase();

    let size = match rest[base_end..].trim() {
        args if args.starts_with('(') && args.ends_with(')') => {
            parse_size_args(&args[1..args.len() - 1])
        }
        _ => TypeSize::None,
    };

    ParsedType {
        base_type,
        size,
        unsigned,
    }
}

/// Parse the text between the parentheses of a type expression.
fn parse_size_args(inner: &str) -> TypeSize {
    let inner = inner.trim();

    if inner.starts_with('\'') {
        return TypeSize::Choices(parse_choice_list(inner));
    }

    if let Some((precision, scale)) = inner.split_once(',') {
        return match (precision.trim().parse(), scale.trim().parse()) {
            (Ok(p), Ok(s)) => TypeSize::Pair(p, s),
            _ => TypeSize::None,
        };
    }

    match inner.parse() {
        Ok(n) => TypeSize::Single(n),
        Err(_) => TypeSize::None,
    }
}

/// Scan a comma-separated list of single-quoted literals. MySQL escapes an
/// embedded quote by doubling it (`''`).
fn parse_choice_list(inner: &str) -> Vec<String> {
    let mut choices = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' if in_quotes => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    current.push('\'');
                } else {
                    in_quotes = false;
                    choices.push(std::mem::take(&mut current));
                }
            }
            '\'' => in_quotes = true,
            _ if in_quotes => current.push(c),
            _ => {}
        }
    }

    choices
}
