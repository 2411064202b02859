//! Error types for security integration administration.
//!
//! The validation engine reports problems through a small violation taxonomy
//! ([`ValidationError`]) and aggregates every violation found in one pass into
//! a single composite value ([`ValidationErrors`]). Client-level failures wrap
//! validation, executor, and JSON errors under [`ClientError`].

use std::fmt;

/// One independently-detected violation of an options value.
///
/// Each variant names the operation kind it was detected on and the exact
/// field(s) involved, so a caller can fix the request without a second round
/// trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The options value to validate was never constructed. Fatal to the
    /// call; no other checks are meaningful against a missing value.
    #[error("options for {kind} are missing")]
    MissingOptions { kind: &'static str },

    /// The target object identifier fails syntax rules.
    #[error("{kind}: invalid object identifier '{identifier}'")]
    InvalidIdentifier {
        kind: &'static str,
        identifier: String,
    },

    /// Both members of a pairwise-exclusive field pair are present.
    #[error("{kind}: fields {fields:?} are incompatible and may not be set together")]
    IncompatibleFields {
        kind: &'static str,
        fields: Vec<&'static str>,
    },

    /// Zero, or more than one, of a mutually exclusive mode set is present.
    #[error("{kind}: exactly one of {fields:?} must be set")]
    ExactlyOneRequired {
        kind: &'static str,
        fields: Vec<&'static str>,
    },

    /// A present mode payload has no field set at all.
    #[error("{kind}.{payload}: at least one of {fields:?} must be set")]
    AtLeastOneRequired {
        kind: &'static str,
        payload: &'static str,
        fields: Vec<&'static str>,
    },

    /// A triggering field value mandates a dependent field that is absent.
    #[error("{kind}: {required} is required when {trigger} is {trigger_value}")]
    RequiredWhen {
        kind: &'static str,
        required: &'static str,
        trigger: &'static str,
        trigger_value: String,
    },
}

impl ValidationError {
    /// Create a missing-options violation for an operation kind.
    pub fn missing_options(kind: &'static str) -> Self {
        Self::MissingOptions { kind }
    }

    /// Create an invalid-identifier violation.
    pub fn invalid_identifier(kind: &'static str, identifier: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            identifier: identifier.into(),
        }
    }

    /// Create a violation for a pairwise-exclusive field pair that is fully set.
    pub fn one_of(kind: &'static str, fields: impl Into<Vec<&'static str>>) -> Self {
        Self::IncompatibleFields {
            kind,
            fields: fields.into(),
        }
    }

    /// Create a violation for a mode set that does not have exactly one member present.
    pub fn exactly_one_of(kind: &'static str, fields: impl Into<Vec<&'static str>>) -> Self {
        Self::ExactlyOneRequired {
            kind,
            fields: fields.into(),
        }
    }

    /// Create a completeness violation for an all-empty mode payload.
    pub fn at_least_one_of(
        kind: &'static str,
        payload: &'static str,
        fields: impl Into<Vec<&'static str>>,
    ) -> Self {
        Self::AtLeastOneRequired {
            kind,
            payload,
            fields: fields.into(),
        }
    }

    /// Create a conditional-requirement violation naming both fields.
    pub fn required_when(
        kind: &'static str,
        required: &'static str,
        trigger: &'static str,
        trigger_value: impl Into<String>,
    ) -> Self {
        Self::RequiredWhen {
            kind,
            required,
            trigger,
            trigger_value: trigger_value.into(),
        }
    }
}

/// Composite of every violation detected in a single validation pass.
///
/// Violations keep their detection order. Construction goes through
/// [`ValidationErrors::join`], which yields `Ok(())` when nothing was
/// detected, so an empty composite cannot exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Aggregate independently-detected violations into one composite error.
    ///
    /// Returns `Ok(())` when the collection is empty.
    pub fn join(violations: Vec<ValidationError>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    /// The individual violations, in detection order.
    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }

    /// Number of violations carried by this composite. Always at least one.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True iff the composite carries the given violation.
    pub fn contains(&self, violation: &ValidationError) -> bool {
        self.violations.contains(violation)
    }

    /// Iterate the violations in detection order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s): ", self.violations.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(violation: ValidationError) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

/// Outcome of validating one options value.
pub type ValidationResult = Result<(), ValidationErrors>;

/// Errors surfaced by the [`SecurityIntegrations`](crate::client::SecurityIntegrations) client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The options value failed validation; the operation was not sent.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The statement executor reported a failure.
    #[error("executor error: {0}")]
    Executor(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A result row could not be serialized or deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Wrap an executor failure.
    pub fn executor<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Executor(Box::new(error))
    }
}

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
