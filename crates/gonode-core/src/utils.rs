/// Lower-case the first character, leaving the rest untouched.
///
/// This is the external (camelCase) naming convention for exported functions.
///
/// # Examples
/// ```
/// use gonode_core::utils::lower_first;
/// assert_eq!(lower_first("Sum"), "sum");
/// assert_eq!(lower_first("ParseURL"), "parseURL");
/// assert_eq!(lower_first("sum"), "sum"); // idempotent
/// ```
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first character, leaving the rest untouched.
///
/// Used to derive the declaration interface name from the module name.
///
/// # Examples
/// ```
/// use gonode_core::utils::upper_first;
/// assert_eq!(upper_first("calculator"), "Calculator");
/// assert_eq!(upper_first("my_addon"), "My_addon");
/// ```
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check that `s` is a valid C identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
