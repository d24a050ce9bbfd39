#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helpers for normalizing TypeScript type strings produced by the parser and
//! for deriving generated function names.

/// Removes the grouping parentheses the parser puts around union and array
/// expressions, e.g. `(Foo)[]` -> `Foo[]`.
pub fn sanitize_type(ty: &str) -> String {
    ty.replace(['(', ')'], "")
}

/// Drops one trailing `[]`.
pub fn strip_array_suffix(ty: &str) -> &str {
    ty.strip_suffix("[]").unwrap_or(ty)
}

/// Sanitizes and drops one trailing `[]`: the name used for registry lookups.
pub fn base_type(ty: &str) -> String {
    sanitize_type(strip_array_suffix(ty))
}

/// Strips array and grouping decoration, leaving the bare type name.
///
/// e.g. `(APIRequest)[]` -> `APIRequest`
pub fn bare_type_name(ty: &str) -> String {
    ty.replace(['(', ')', '[', ']'], "").trim().to_string()
}

/// Splits generic wrapper syntax into its parts.
///
/// `Record<string, Foo>` -> `["Record", "string", "Foo"]`. Strings without both
/// `<` and `>` are returned whole.
pub fn split_generic_type(ty: &str) -> Vec<String> {
    if !(ty.contains('<') && ty.contains('>')) {
        return vec![ty.to_string()];
    }
    ty.split(['<', '>', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Upper-cases the first character.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives the generated function name: `{method}{Namespace}{BaseName}`.
///
/// e.g. `get`, `blog`, `list` -> `getBlogList`
pub fn function_name(method: &str, namespace: &str, base_name: &str) -> String {
    format!(
        "{}{}{}",
        method,
        capitalize_first(namespace),
        capitalize_first(base_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_type() {
        assert_eq!(sanitize_type("(Foo)[]"), "Foo[]");
        assert_eq!(sanitize_type("(A | B)[]"), "A | B[]");
        assert_eq!(sanitize_type("Foo"), "Foo");
    }

    #[test]
    fn test_base_type() {
        assert_eq!(base_type("(Foo)[]"), "Foo");
        assert_eq!(base_type("Bar[]"), "Bar");
        assert_eq!(base_type("Bar"), "Bar");
    }

    #[test]
    fn test_bare_type_name() {
        assert_eq!(bare_type_name("(APIRequest)[]"), "APIRequest");
        assert_eq!(bare_type_name("Foo[][]"), "Foo");
        assert_eq!(bare_type_name(" Foo "), "Foo");
    }

    #[test]
    fn test_split_generic_type() {
        assert_eq!(split_generic_type("Record<Foo>"), vec!["Record", "Foo"]);
        assert_eq!(
            split_generic_type("Record<string, Foo[]>"),
            vec!["Record", "string", "Foo[]"]
        );
        assert_eq!(
            split_generic_type("Map<string, Array<Foo>>"),
            vec!["Map", "string", "Array", "Foo"]
        );
        assert_eq!(split_generic_type("Foo[]"), vec!["Foo[]"]);
        assert_eq!(split_generic_type("a < b"), vec!["a < b"]);
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("blog"), "Blog");
        assert_eq!(capitalize_first("Blog"), "Blog");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name("get", "blog", "list"), "getBlogList");
        assert_eq!(function_name("post", "", "create"), "postCreate");
    }
}
