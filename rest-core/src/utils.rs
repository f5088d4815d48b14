//! Naming rules shared by route building and handler emission.

/// Lowercase only the first character (e.g., "BlogPost" -> "blogPost").
///
/// This is the name of the data-access accessor for a model.
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Collection segment for a model: the whole name lowercased plus `s`.
///
/// No irregular plurals: "Category" becomes "categorys".
pub fn pluralize(s: &str) -> String {
    format!("{}s", s.to_lowercase())
}
