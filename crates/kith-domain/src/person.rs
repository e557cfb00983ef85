//! Person module - the contacts relationships are drawn between

use std::fmt;

/// Number of trailing UUID characters that make up a short identifier
pub const SHORT_ID_LEN: usize = 4;

/// Unique identifier for a person, backed by a UUID
///
/// Users address people by the last four characters of the hyphenated form
/// (see [`PersonId::short`]); the full UUID is the canonical reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(u128);

impl PersonId {
    /// Create a PersonId from a raw u128 value
    ///
    /// # Examples
    ///
    /// ```
    /// use kith_domain::PersonId;
    ///
    /// let id = PersonId::from_value(1);
    /// assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000001");
    /// ```
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a PersonId from a hyphenated UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use kith_domain::PersonId;
    ///
    /// let id = PersonId::from_string("00000000-0000-0000-0000-000000000005").unwrap();
    /// assert_eq!(id.short(), "0005");
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUID string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Short identifier: the last four characters of the hyphenated UUID
    pub fn short(&self) -> String {
        let full = self.to_string();
        full[full.len() - SHORT_ID_LEN..].to_string()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0).hyphenated())
    }
}

/// A contact in the address book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Canonical identifier
    pub id: PersonId,

    /// Display name
    pub name: String,
}

impl Person {
    /// Create a new person
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        let id = PersonId::from_value(0x1234);
        assert_eq!(id.short(), "1234");
        assert_eq!(PersonId::from_value(7).short(), "0007");
    }

    #[test]
    fn test_person_id_display_and_parse() {
        let id = PersonId::from_value(42);
        let id_str = id.to_string();

        assert_eq!(id_str.len(), 36);
        assert_eq!(PersonId::from_string(&id_str).unwrap(), id);
    }

    #[test]
    fn test_person_id_invalid_string() {
        assert!(PersonId::from_string("0001").is_err());
        assert!(PersonId::from_string("").is_err());
    }
}
