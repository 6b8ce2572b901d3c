//! Phone-shaped query normalisation.
//!
//! Stored phone numbers are already normalised to bare digit strings
//! (`77001234567`), so a query like `+7 (700) 123-45-67` has to be reduced
//! the same way before it can match. Yielding `None` is the "omit this
//! predicate" signal, not a failure.

/// Reduce a query to its digits. `None` when no digits remain.
pub fn normalize_phone_query(query: &str) -> Option<String> {
    let digits: String = query.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_punctuation_is_stripped() {
        assert_eq!(
            normalize_phone_query("+7 (700) 123-45-67").as_deref(),
            Some("77001234567")
        );
        assert_eq!(normalize_phone_query("77001234567").as_deref(), Some("77001234567"));
    }

    #[test]
    fn digit_free_queries_normalise_to_nothing() {
        assert_eq!(normalize_phone_query("Ivan Petrov"), None);
        assert_eq!(normalize_phone_query("+-() "), None);
    }
}
