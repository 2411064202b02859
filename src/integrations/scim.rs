//! SCIM security integration options.
//!
//! A SCIM integration lets an external identity provider provision users and
//! roles over SCIM 2.0, running as a designated provisioner role.

use serde::{Deserialize, Serialize};

use crate::identifier::AccountObjectIdentifier;
use crate::integrations::TagAssociation;
use crate::schema::{FieldSlot, OptionsProfile, ValidateOptions};

/// SCIM client vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScimSecurityIntegrationScimClient {
    #[serde(rename = "GENERIC")]
    Generic,
    #[serde(rename = "AZURE")]
    Azure,
    #[serde(rename = "OKTA")]
    Okta,
}

/// Role the SCIM client assumes when provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScimSecurityIntegrationRunAsRole {
    #[serde(rename = "GENERIC_SCIM_PROVISIONER")]
    GenericScimProvisioner,
    #[serde(rename = "OKTA_PROVISIONER")]
    OktaProvisioner,
    #[serde(rename = "AAD_PROVISIONER")]
    AadProvisioner,
}

/// Options for `CREATE SECURITY INTEGRATION … TYPE = SCIM`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateScimSecurityIntegrationOptions {
    pub or_replace: Option<bool>,
    pub if_not_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub enabled: bool,
    pub scim_client: ScimSecurityIntegrationScimClient,
    pub run_as_role: ScimSecurityIntegrationRunAsRole,
    pub network_policy: Option<AccountObjectIdentifier>,
    pub sync_password: Option<bool>,
    pub comment: Option<String>,
}

impl CreateScimSecurityIntegrationOptions {
    pub fn new(
        name: impl Into<AccountObjectIdentifier>,
        enabled: bool,
        scim_client: ScimSecurityIntegrationScimClient,
        run_as_role: ScimSecurityIntegrationRunAsRole,
    ) -> Self {
        Self {
            or_replace: None,
            if_not_exists: None,
            name: name.into(),
            enabled,
            scim_client,
            run_as_role,
            network_policy: None,
            sync_password: None,
            comment: None,
        }
    }

    pub fn with_or_replace(mut self, or_replace: bool) -> Self {
        self.or_replace = Some(or_replace);
        self
    }

    pub fn with_if_not_exists(mut self, if_not_exists: bool) -> Self {
        self.if_not_exists = Some(if_not_exists);
        self
    }

    pub fn with_network_policy(mut self, policy: AccountObjectIdentifier) -> Self {
        self.network_policy = Some(policy);
        self
    }

    pub fn with_sync_password(mut self, sync: bool) -> Self {
        self.sync_password = Some(sync);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl ValidateOptions for CreateScimSecurityIntegrationOptions {
    const KIND: &'static str = "CreateScimSecurityIntegrationOptions";

    fn profile(&self) -> OptionsProfile {
        OptionsProfile::new(Self::KIND)
            .with_identifier(&self.name)
            .with_at_most_one_of(vec![
                FieldSlot::new("OrReplace", &self.or_replace),
                FieldSlot::new("IfNotExists", &self.if_not_exists),
            ])
    }
}

/// `SET` payload for altering a SCIM integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScimIntegrationSet {
    pub enabled: Option<bool>,
    pub network_policy: Option<AccountObjectIdentifier>,
    pub sync_password: Option<bool>,
    pub comment: Option<String>,
}

/// `UNSET` payload for altering a SCIM integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScimIntegrationUnset {
    pub enabled: Option<bool>,
    pub network_policy: Option<bool>,
    pub sync_password: Option<bool>,
    pub comment: Option<bool>,
}

/// Options for `ALTER SECURITY INTEGRATION` on a SCIM integration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlterScimSecurityIntegrationOptions {
    pub if_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub set: Option<ScimIntegrationSet>,
    pub unset: Option<ScimIntegrationUnset>,
    pub set_tags: Option<Vec<TagAssociation>>,
    pub unset_tags: Option<Vec<String>>,
}

impl AlterScimSecurityIntegrationOptions {
    pub fn new(name: impl Into<AccountObjectIdentifier>) -> Self {
        Self {
            if_exists: None,
            name: name.into(),
            set: None,
            unset: None,
            set_tags: None,
            unset_tags: None,
        }
    }

    pub fn with_if_exists(mut self, if_exists: bool) -> Self {
        self.if_exists = Some(if_exists);
        self
    }

    pub fn with_set(mut self, set: ScimIntegrationSet) -> Self {
        self.set = Some(set);
        self
    }

    pub fn with_unset(mut self, unset: ScimIntegrationUnset) -> Self {
        self.unset = Some(unset);
        self
    }

    pub fn with_set_tags(mut self, tags: Vec<TagAssociation>) -> Self {
        self.set_tags = Some(tags);
        self
    }

    pub fn with_unset_tags(mut self, tags: Vec<String>) -> Self {
        self.unset_tags = Some(tags);
        self
    }
}

impl ValidateOptions for AlterScimSecurityIntegrationOptions {
    const KIND: &'static str = "AlterScimSecurityIntegrationOptions";

    fn profile(&self) -> OptionsProfile {
        OptionsProfile::new(Self::KIND)
            .with_identifier(&self.name)
            .with_exactly_one_of(vec![
                FieldSlot::new("Set", &self.set),
                FieldSlot::new("Unset", &self.unset),
                FieldSlot::new("SetTags", &self.set_tags),
                FieldSlot::new("UnsetTags", &self.unset_tags),
            ])
            .with_payload(
                "Set",
                self.set.as_ref().map(|set| {
                    vec![
                        FieldSlot::new("Enabled", &set.enabled),
                        FieldSlot::new("NetworkPolicy", &set.network_policy),
                        FieldSlot::new("SyncPassword", &set.sync_password),
                        FieldSlot::new("Comment", &set.comment),
                    ]
                }),
            )
            .with_payload(
                "Unset",
                self.unset.as_ref().map(|unset| {
                    vec![
                        FieldSlot::new("Enabled", &unset.enabled),
                        FieldSlot::new("NetworkPolicy", &unset.network_policy),
                        FieldSlot::new("SyncPassword", &unset.sync_password),
                        FieldSlot::new("Comment", &unset.comment),
                    ]
                }),
            )
    }
}
