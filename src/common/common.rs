/// Returns the given value when present and non-empty, the default otherwise.
///
/// An empty string counts as unset. This mirrors the falsy-fallback rule the
/// object cache drop-ins rely on in their host configuration.
pub fn resolve_string(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

/// Resolves a port-sized numeric setting.
///
/// A present value that fails to parse coerces to 0, not to the default.
pub fn resolve_u16(value: Option<String>, default: u16) -> u16 {
    match value {
        Some(v) if !v.is_empty() => v.parse::<u16>().unwrap_or(0),
        _ => default,
    }
}

/// Resolves a wide numeric setting, same coercion rule as [`resolve_u16`].
pub fn resolve_u64(value: Option<String>, default: u64) -> u64 {
    match value {
        Some(v) if !v.is_empty() => v.parse::<u64>().unwrap_or(0),
        _ => default,
    }
}

/// Renders a string as a single-quoted PHP literal, escaping `\` and `'`.
pub fn php_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('\'');
    for character in value.chars() {
        match character {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            _ => literal.push(character),
        }
    }
    literal.push('\'');
    literal
}
