//! ISBN value object.

use serde::{Deserialize, Serialize};

use biblios_core::{DomainError, DomainResult, ValueObject};

/// Validated ISBN (ISBN-10 or ISBN-13).
///
/// The raw input is kept for display; comparison happens on the normalized
/// form, so `"978-0134685991"` and `"9780134685991"` are the same ISBN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Isbn {
    value: String,
}

impl Isbn {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let normalized = normalize(&value);

        if normalized.len() != 10 && normalized.len() != 13 {
            return Err(DomainError::validation(format!(
                "invalid ISBN format: {value}"
            )));
        }

        Ok(Self { value })
    }

    /// The ISBN as originally entered (hyphens and spacing preserved).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Digits (and a possible check `X`) only.
    pub fn normalized(&self) -> String {
        normalize(&self.value)
    }
}

/// Strip everything except digits and the ISBN-10 check character.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl PartialEq for Isbn {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Isbn {}

impl ValueObject for Isbn {}

impl core::fmt::Display for Isbn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn accepts_isbn_13_with_hyphens() {
        let isbn = Isbn::new("978-0-13-468599-1").unwrap();
        assert_eq!(isbn.normalized(), "9780134685991");
    }

    #[test]
    fn accepts_isbn_10_with_check_character() {
        let isbn = Isbn::new("0-8044-2957-X").unwrap();
        assert_eq!(isbn.normalized(), "080442957X");
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Isbn::new("12345").unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("12345")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn equality_ignores_formatting() {
        let a = Isbn::new("978-0134685991").unwrap();
        let b = Isbn::new("9780134685991").unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn normalization_keeps_only_digits_and_x(raw in "[0-9Xx -]{10,20}") {
            if let Ok(isbn) = Isbn::new(raw) {
                prop_assert!(isbn
                    .normalized()
                    .chars()
                    .all(|c| c.is_ascii_digit() || c == 'X'));
            }
        }
    }
}
