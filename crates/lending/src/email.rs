//! Email value object.

use serde::{Deserialize, Serialize};

use biblios_core::{DomainError, DomainResult, ValueObject};

/// Validated email address.
///
/// Validation is deliberately shallow (local part, `@`, dotted domain); the
/// point is to keep obviously-broken strings out of the model, not to implement
/// RFC 5322.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        let valid = match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
            }
            None => false,
        };

        if !valid {
            return Err(DomainError::validation(format!(
                "invalid email address: {value}"
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {}

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_address() {
        let email = Email::new("anna@example.com").unwrap();
        assert_eq!(email.as_str(), "anna@example.com");
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(matches!(
            Email::new("anna.example.com").unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn rejects_undotted_domain() {
        assert!(matches!(
            Email::new("anna@localhost").unwrap_err(),
            DomainError::Validation(_)
        ));
    }
}
