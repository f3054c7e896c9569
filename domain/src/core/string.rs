//! String utilities for the domain layer.

/// Upper-case the first character of `s`, leaving the rest untouched.
///
/// Lookup records carry lowercase slugs (`"mr-mime"`); this produces the
/// display form (`"Mr-mime"`). UTF-8 safe.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_ascii() {
        assert_eq!(capitalize_first("pikachu"), "Pikachu");
        assert_eq!(capitalize_first("mr-mime"), "Mr-mime");
    }

    #[test]
    fn test_capitalize_empty_and_already_upper() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("Eevee"), "Eevee");
    }

    #[test]
    fn test_capitalize_multibyte() {
        assert_eq!(capitalize_first("éclair"), "Éclair");
    }
}
