/// Split one CSV line into fields, honoring double-quoted sections.
///
/// A `"` toggles quoted mode and is not emitted; a `,` delimits fields
/// only outside quoted mode. This keeps ingredient and step lists that
/// contain commas intact when the sheet quotes them.
pub(crate) fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    // Add the last value
    fields.push(current);

    fields
}
