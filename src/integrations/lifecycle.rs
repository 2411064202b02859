//! Drop, describe, and show options, shared by every integration flavor.

use serde::Serialize;

use crate::identifier::AccountObjectIdentifier;
use crate::integrations::Like;
use crate::schema::{OptionsProfile, ValidateOptions};

/// Options for `DROP SECURITY INTEGRATION`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropSecurityIntegrationOptions {
    pub if_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
}

impl DropSecurityIntegrationOptions {
    pub fn new(name: impl Into<AccountObjectIdentifier>) -> Self {
        Self {
            if_exists: None,
            name: name.into(),
        }
    }

    pub fn with_if_exists(mut self, if_exists: bool) -> Self {
        self.if_exists = Some(if_exists);
        self
    }
}

impl ValidateOptions for DropSecurityIntegrationOptions {
    const KIND: &'static str = "DropSecurityIntegrationOptions";

    fn profile(&self) -> OptionsProfile {
        OptionsProfile::new(Self::KIND).with_identifier(&self.name)
    }
}

/// Options for `DESCRIBE SECURITY INTEGRATION`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescribeSecurityIntegrationOptions {
    pub name: AccountObjectIdentifier,
}

impl DescribeSecurityIntegrationOptions {
    pub fn new(name: impl Into<AccountObjectIdentifier>) -> Self {
        Self { name: name.into() }
    }
}

impl ValidateOptions for DescribeSecurityIntegrationOptions {
    const KIND: &'static str = "DescribeSecurityIntegrationOptions";

    fn profile(&self) -> OptionsProfile {
        OptionsProfile::new(Self::KIND).with_identifier(&self.name)
    }
}

/// Options for `SHOW SECURITY INTEGRATIONS`. Carries no identifier; an
/// optional pattern filter is the only field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShowSecurityIntegrationOptions {
    pub like: Option<Like>,
}

impl ShowSecurityIntegrationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_like(mut self, like: Like) -> Self {
        self.like = Some(like);
        self
    }
}

impl ValidateOptions for ShowSecurityIntegrationOptions {
    const KIND: &'static str = "ShowSecurityIntegrationOptions";

    fn profile(&self) -> OptionsProfile {
        // SHOW has no identifier and no field rules.
        OptionsProfile::new(Self::KIND)
    }
}
