//! Declarative option variant schemas.
//!
//! Each administrative operation kind describes itself as data: which fields
//! exist, which are grouped into mutually exclusive alternative modes, which
//! mode payloads carry an at-least-one-of completeness rule, and which fields
//! become mandatory only under a triggering value. One generic engine
//! ([`crate::engine`]) interprets the description, so adding an operation
//! kind is a new profile, not a new validator.

use crate::engine;
use crate::error::ValidationResult;
use crate::identifier::AccountObjectIdentifier;
use crate::presence::FieldPresence;

/// A named field together with a snapshot of its presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    /// Field name as reported in violation messages.
    pub name: &'static str,
    /// Whether the field was set when the profile was captured.
    pub set: bool,
}

impl FieldSlot {
    /// Capture the presence of one optional field.
    pub fn new(name: &'static str, field: &impl FieldPresence) -> Self {
        Self {
            name,
            set: field.is_set(),
        }
    }
}

/// How a group of alternative fields constrains simultaneous presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRule {
    /// Precisely one member must be present (alter mode fields).
    ExactlyOne,
    /// Not every member may be present (pairwise-exclusive creation
    /// modifiers such as OrReplace / IfNotExists).
    AtMostOne,
}

/// A set of mutually exclusive alternative fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusiveGroup {
    pub rule: GroupRule,
    pub fields: Vec<FieldSlot>,
}

/// Completeness rule for one mode payload: when the payload is present, at
/// least one of its fields must be set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadRule {
    /// Payload field name (`Set`, `Unset`).
    pub name: &'static str,
    /// Whether the payload itself is present on the options value.
    pub present: bool,
    /// The payload's field slots; empty when the payload is absent.
    pub fields: Vec<FieldSlot>,
}

/// A field made mandatory by another field's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalRule {
    /// The dependent field and its presence.
    pub required: FieldSlot,
    /// Name of the triggering field, for the violation message.
    pub trigger: &'static str,
    /// Rendering of the triggering value, for the violation message.
    pub trigger_value: String,
    /// Whether the trigger condition held when the profile was captured.
    pub triggered: bool,
}

/// Identifier requirement: the raw name and its validity snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierRule {
    pub identifier: String,
    pub valid: bool,
}

/// One operation kind's complete validation schema, captured against a
/// concrete options value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsProfile {
    pub kind: &'static str,
    pub identifier: Option<IdentifierRule>,
    pub groups: Vec<ExclusiveGroup>,
    pub payloads: Vec<PayloadRule>,
    pub conditionals: Vec<ConditionalRule>,
}

impl OptionsProfile {
    /// Start an empty profile for an operation kind.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            identifier: None,
            groups: Vec::new(),
            payloads: Vec::new(),
            conditionals: Vec::new(),
        }
    }

    /// Declare the target identifier and snapshot its validity.
    pub fn with_identifier(mut self, identifier: &AccountObjectIdentifier) -> Self {
        self.identifier = Some(IdentifierRule {
            identifier: identifier.as_str().to_owned(),
            valid: identifier.is_valid(),
        });
        self
    }

    /// Declare a group of alternative modes of which exactly one must be set.
    pub fn with_exactly_one_of(mut self, fields: Vec<FieldSlot>) -> Self {
        self.groups.push(ExclusiveGroup {
            rule: GroupRule::ExactlyOne,
            fields,
        });
        self
    }

    /// Declare a pairwise-exclusive group that must never be fully set.
    pub fn with_at_most_one_of(mut self, fields: Vec<FieldSlot>) -> Self {
        self.groups.push(ExclusiveGroup {
            rule: GroupRule::AtMostOne,
            fields,
        });
        self
    }

    /// Declare a mode payload's completeness rule. `fields` is `None` when
    /// the payload itself is absent, in which case no rule applies.
    pub fn with_payload(mut self, name: &'static str, fields: Option<Vec<FieldSlot>>) -> Self {
        self.payloads.push(PayloadRule {
            name,
            present: fields.is_some(),
            fields: fields.unwrap_or_default(),
        });
        self
    }

    /// Declare a conditional requirement: `required` must be set whenever the
    /// trigger condition holds.
    pub fn require_when(
        mut self,
        required: FieldSlot,
        trigger: &'static str,
        trigger_value: impl Into<String>,
        triggered: bool,
    ) -> Self {
        self.conditionals.push(ConditionalRule {
            required,
            trigger,
            trigger_value: trigger_value.into(),
            triggered,
        });
        self
    }
}

/// An options value that can describe and validate itself.
///
/// Implementors provide the declarative [`OptionsProfile`]; the provided
/// `validate` runs the generic engine over it. The engine only reads the
/// options value and retains nothing between calls.
pub trait ValidateOptions {
    /// Operation kind name used in violation messages.
    const KIND: &'static str;

    /// Capture this value's validation schema.
    fn profile(&self) -> OptionsProfile;

    /// Run every applicable check and aggregate all violations found.
    fn validate(&self) -> ValidationResult {
        engine::validate_profile(&self.profile())
    }
}
