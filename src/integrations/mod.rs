//! Typed options for security integration administrative commands.
//!
//! One options type per operation kind: create/alter for the OAuth
//! partner-application, OAuth custom-client, SAML2, and SCIM connectors, plus
//! the shared drop/describe/show lifecycle operations. Every options type
//! implements [`ValidateOptions`](crate::schema::ValidateOptions) with a
//! declarative profile; nothing here talks to the network.

pub mod lifecycle;
pub mod oauth;
pub mod saml2;
pub mod scim;

use serde::{Deserialize, Serialize};

/// A tag name/value pair attached via a `SetTags` mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAssociation {
    pub name: String,
    pub value: String,
}

impl TagAssociation {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Pattern filter for SHOW commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub pattern: String,
}

impl Like {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}
