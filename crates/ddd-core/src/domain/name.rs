use std::fmt;

use serde::Serialize;

use super::error::DomainError;

/// A validated entity, service, DTO or serializer name.
///
/// Names end up both in Python source (class names) and in file names, so
/// they must be Python identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Validate `raw` as a name of the given `kind` ("entity", "service", ...).
    pub fn parse(kind: &'static str, raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidName {
            kind,
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = raw.chars();
        let Some(first) = chars.next() else {
            return Err(invalid("must not be empty"));
        };

        if first.is_ascii_digit() {
            return Err(invalid("must not start with a digit"));
        }

        if let Some(bad) = raw.chars().find(|c| !(c.is_alphanumeric() || *c == '_')) {
            let reason = match bad {
                '/' | '\\' => "must not contain path separators".to_string(),
                c if c.is_whitespace() => "must not contain whitespace".to_string(),
                c => format!("unexpected character '{}'", c),
            };
            return Err(invalid(reason.as_str()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used in file names (`product_entity.py`).
    pub fn lower(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_python_identifiers() {
        for ok in ["Product", "order_line", "_Private", "Item2", "Ñandú"] {
            assert!(Name::parse("entity", ok).is_ok(), "{ok} should be valid");
        }
    }

    #[test]
    fn rejects_empty_and_leading_digit() {
        assert!(matches!(
            Name::parse("entity", ""),
            Err(DomainError::InvalidName { reason, .. }) if reason == "must not be empty"
        ));
        assert!(Name::parse("entity", "2fast").is_err());
    }

    #[test]
    fn rejects_separators_and_whitespace() {
        let err = Name::parse("dto", "a/b").unwrap_err();
        assert!(err.to_string().contains("path separators"));

        let err = Name::parse("dto", "a\\b").unwrap_err();
        assert!(err.to_string().contains("path separators"));

        let err = Name::parse("service", "my service").unwrap_err();
        assert!(err.to_string().contains("whitespace"));

        let err = Name::parse("service", "my-service").unwrap_err();
        assert!(err.to_string().contains("'-'"));
    }

    #[test]
    fn lower_is_used_for_file_names() {
        let name = Name::parse("entity", "OrderLine").unwrap();
        assert_eq!(name.lower(), "orderline");
        assert_eq!(name.as_str(), "OrderLine");
    }
}
