/// Render a template by substituting named placeholders in a single
/// left-to-right pass.
///
/// Substituted values are never rescanned, so a value that happens to contain
/// another placeholder's name cannot corrupt the output. This matters because
/// table and database names are caller-controlled.
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(first) = rest.chars().next() {
        for (name, value) in substitutions {
            if let Some(after) = rest.strip_prefix(name) {
                output.push_str(value);
                rest = after;
                continue 'scan;
            }
        }
        output.push(first);
        rest = &rest[first.len_utf8()..];
    }

    output
}
