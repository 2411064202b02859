//! Account-level object identifiers for security integrations.
//!
//! Identifiers are plain value objects: construction never fails, because an
//! invalid name must surface as a validation violation on the options value
//! that carries it, not as a construction panic halfway through building a
//! request.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Longest name the remote platform accepts for an account-level object.
const MAX_IDENTIFIER_LENGTH: usize = 255;

/// The name of an account-level administrative object.
///
/// Wraps the raw name without validating it; validity is checked by
/// [`AccountObjectIdentifier::is_valid`] when the options value carrying the
/// identifier is validated.
///
/// # Examples
///
/// ```rust
/// use security_integrations::identifier::AccountObjectIdentifier;
///
/// let id = AccountObjectIdentifier::new("MY_OAUTH_INTEGRATION");
/// assert!(id.is_valid());
/// assert!(!AccountObjectIdentifier::new("").is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountObjectIdentifier(String);

impl AccountObjectIdentifier {
    /// Wrap a raw object name. Never fails; see [`Self::is_valid`].
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Syntax validity of the wrapped name: non-empty, at most 255 characters,
    /// and free of embedded NUL and double-quote characters.
    ///
    /// This is the identifier-validity predicate consumed by the validation
    /// engine. It performs no network access and no uniqueness check.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
            && self.0.chars().count() <= MAX_IDENTIFIER_LENGTH
            && !self.0.contains(['\0', '"'])
    }

    /// The raw name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the raw name.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AccountObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

impl From<&str> for AccountObjectIdentifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AccountObjectIdentifier {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Serialize for AccountObjectIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AccountObjectIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self(String::deserialize(deserializer)?))
    }
}
