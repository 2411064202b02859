//! OAuth security integration options.
//!
//! Two flavors of OAuth connector exist: partner applications (a well-known
//! client such as Looker or Tableau) and custom clients (a caller-registered
//! public or confidential client). Each has create and alter options; alter
//! carries the usual mutually exclusive Set / Unset / SetTags / UnsetTags
//! modes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identifier::AccountObjectIdentifier;
use crate::integrations::TagAssociation;
use crate::schema::{FieldSlot, OptionsProfile, ValidateOptions};

/// Well-known partner application acting as the OAuth client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OauthSecurityIntegrationClient {
    #[serde(rename = "LOOKER")]
    Looker,
    #[serde(rename = "TABLEAU_DESKTOP")]
    TableauDesktop,
    #[serde(rename = "TABLEAU_SERVER")]
    TableauServer,
}

impl fmt::Display for OauthSecurityIntegrationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = match self {
            Self::Looker => "LOOKER",
            Self::TableauDesktop => "TABLEAU_DESKTOP",
            Self::TableauServer => "TABLEAU_SERVER",
        };
        f.write_str(spelling)
    }
}

/// Custom OAuth client type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OauthSecurityIntegrationClientType {
    #[serde(rename = "PUBLIC")]
    Public,
    #[serde(rename = "CONFIDENTIAL")]
    Confidential,
}

/// Whether the integration may activate secondary roles on login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OauthUseSecondaryRoles {
    #[serde(rename = "IMPLICIT")]
    Implicit,
    #[serde(rename = "NONE")]
    None,
}

/// Options for `CREATE SECURITY INTEGRATION … TYPE = OAUTH` with a partner
/// application client.
///
/// When the client is [`OauthSecurityIntegrationClient::Looker`], a redirect
/// URI is mandatory even though it is optional for every other client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOauthForPartnerApplicationsSecurityIntegrationOptions {
    pub or_replace: Option<bool>,
    pub if_not_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub oauth_client: OauthSecurityIntegrationClient,
    pub oauth_redirect_uri: Option<String>,
    pub enabled: Option<bool>,
    pub oauth_issue_refresh_tokens: Option<bool>,
    pub oauth_refresh_token_validity: Option<i32>,
    pub oauth_use_secondary_roles: Option<OauthUseSecondaryRoles>,
    pub blocked_roles_list: Option<Vec<AccountObjectIdentifier>>,
    pub comment: Option<String>,
}

impl CreateOauthForPartnerApplicationsSecurityIntegrationOptions {
    pub fn new(
        name: impl Into<AccountObjectIdentifier>,
        oauth_client: OauthSecurityIntegrationClient,
    ) -> Self {
        Self {
            or_replace: None,
            if_not_exists: None,
            name: name.into(),
            oauth_client,
            oauth_redirect_uri: None,
            enabled: None,
            oauth_issue_refresh_tokens: None,
            oauth_refresh_token_validity: None,
            oauth_use_secondary_roles: None,
            blocked_roles_list: None,
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

    pub fn with_oauth_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.oauth_redirect_uri = Some(uri.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_oauth_issue_refresh_tokens(mut self, issue: bool) -> Self {
        self.oauth_issue_refresh_tokens = Some(issue);
        self
    }

    pub fn with_oauth_refresh_token_validity(mut self, seconds: i32) -> Self {
        self.oauth_refresh_token_validity = Some(seconds);
        self
    }

    pub fn with_oauth_use_secondary_roles(mut self, roles: OauthUseSecondaryRoles) -> Self {
        self.oauth_use_secondary_roles = Some(roles);
        self
    }

    pub fn with_blocked_roles_list(mut self, roles: Vec<AccountObjectIdentifier>) -> Self {
        self.blocked_roles_list = Some(roles);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl ValidateOptions for CreateOauthForPartnerApplicationsSecurityIntegrationOptions {
    const KIND: &'static str = "CreateOauthForPartnerApplicationsSecurityIntegrationOptions";

    fn profile(&self) -> OptionsProfile {
        OptionsProfile::new(Self::KIND)
            .with_identifier(&self.name)
            .with_at_most_one_of(vec![
                FieldSlot::new("OrReplace", &self.or_replace),
                FieldSlot::new("IfNotExists", &self.if_not_exists),
            ])
            .require_when(
                FieldSlot::new("OauthRedirectUri", &self.oauth_redirect_uri),
                "OauthClient",
                OauthSecurityIntegrationClient::Looker.to_string(),
                self.oauth_client == OauthSecurityIntegrationClient::Looker,
            )
    }
}

/// Options for `CREATE SECURITY INTEGRATION … TYPE = OAUTH` with a custom
/// client registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOauthForCustomClientsSecurityIntegrationOptions {
    pub or_replace: Option<bool>,
    pub if_not_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub oauth_client_type: OauthSecurityIntegrationClientType,
    pub oauth_redirect_uri: String,
    pub enabled: Option<bool>,
    pub oauth_allow_non_tls_redirect_uri: Option<bool>,
    pub oauth_enforce_pkce: Option<bool>,
    pub oauth_use_secondary_roles: Option<OauthUseSecondaryRoles>,
    pub pre_authorized_roles_list: Option<Vec<AccountObjectIdentifier>>,
    pub blocked_roles_list: Option<Vec<AccountObjectIdentifier>>,
    pub oauth_issue_refresh_tokens: Option<bool>,
    pub oauth_refresh_token_validity: Option<i32>,
    pub network_policy: Option<AccountObjectIdentifier>,
    pub oauth_client_rsa_public_key: Option<String>,
    pub oauth_client_rsa_public_key2: Option<String>,
    pub comment: Option<String>,
}

impl CreateOauthForCustomClientsSecurityIntegrationOptions {
    pub fn new(
        name: impl Into<AccountObjectIdentifier>,
        oauth_client_type: OauthSecurityIntegrationClientType,
        oauth_redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            or_replace: None,
            if_not_exists: None,
            name: name.into(),
            oauth_client_type,
            oauth_redirect_uri: oauth_redirect_uri.into(),
            enabled: None,
            oauth_allow_non_tls_redirect_uri: None,
            oauth_enforce_pkce: None,
            oauth_use_secondary_roles: None,
            pre_authorized_roles_list: None,
            blocked_roles_list: None,
            oauth_issue_refresh_tokens: None,
            oauth_refresh_token_validity: None,
            network_policy: None,
            oauth_client_rsa_public_key: None,
            oauth_client_rsa_public_key2: None,
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

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_oauth_enforce_pkce(mut self, enforce: bool) -> Self {
        self.oauth_enforce_pkce = Some(enforce);
        self
    }

    pub fn with_oauth_use_secondary_roles(mut self, roles: OauthUseSecondaryRoles) -> Self {
        self.oauth_use_secondary_roles = Some(roles);
        self
    }

    pub fn with_pre_authorized_roles_list(mut self, roles: Vec<AccountObjectIdentifier>) -> Self {
        self.pre_authorized_roles_list = Some(roles);
        self
    }

    pub fn with_blocked_roles_list(mut self, roles: Vec<AccountObjectIdentifier>) -> Self {
        self.blocked_roles_list = Some(roles);
        self
    }

    pub fn with_network_policy(mut self, policy: AccountObjectIdentifier) -> Self {
        self.network_policy = Some(policy);
        self
    }

    pub fn with_oauth_client_rsa_public_key(mut self, key: impl Into<String>) -> Self {
        self.oauth_client_rsa_public_key = Some(key.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl ValidateOptions for CreateOauthForCustomClientsSecurityIntegrationOptions {
    const KIND: &'static str = "CreateOauthForCustomClientsSecurityIntegrationOptions";

    fn profile(&self) -> OptionsProfile {
        OptionsProfile::new(Self::KIND)
            .with_identifier(&self.name)
            .with_at_most_one_of(vec![
                FieldSlot::new("OrReplace", &self.or_replace),
                FieldSlot::new("IfNotExists", &self.if_not_exists),
            ])
    }
}

/// `SET` payload for altering a partner-application OAuth integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OauthForPartnerApplicationsIntegrationSet {
    pub enabled: Option<bool>,
    pub oauth_issue_refresh_tokens: Option<bool>,
    pub oauth_redirect_uri: Option<String>,
    pub oauth_refresh_token_validity: Option<i32>,
    pub oauth_use_secondary_roles: Option<OauthUseSecondaryRoles>,
    pub blocked_roles_list: Option<Vec<AccountObjectIdentifier>>,
    pub comment: Option<String>,
}

/// `UNSET` payload for altering a partner-application OAuth integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OauthForPartnerApplicationsIntegrationUnset {
    pub enabled: Option<bool>,
    pub oauth_use_secondary_roles: Option<bool>,
}

/// Options for `ALTER SECURITY INTEGRATION` on a partner-application OAuth
/// integration. Exactly one of the mode fields must be present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlterOauthForPartnerApplicationsSecurityIntegrationOptions {
    pub if_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub set: Option<OauthForPartnerApplicationsIntegrationSet>,
    pub unset: Option<OauthForPartnerApplicationsIntegrationUnset>,
    pub set_tags: Option<Vec<TagAssociation>>,
    pub unset_tags: Option<Vec<String>>,
}

impl AlterOauthForPartnerApplicationsSecurityIntegrationOptions {
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

    pub fn with_set(mut self, set: OauthForPartnerApplicationsIntegrationSet) -> Self {
        self.set = Some(set);
        self
    }

    pub fn with_unset(mut self, unset: OauthForPartnerApplicationsIntegrationUnset) -> Self {
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

impl ValidateOptions for AlterOauthForPartnerApplicationsSecurityIntegrationOptions {
    const KIND: &'static str = "AlterOauthForPartnerApplicationsSecurityIntegrationOptions";

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
                        FieldSlot::new("OauthIssueRefreshTokens", &set.oauth_issue_refresh_tokens),
                        FieldSlot::new("OauthRedirectUri", &set.oauth_redirect_uri),
                        FieldSlot::new(
                            "OauthRefreshTokenValidity",
                            &set.oauth_refresh_token_validity,
                        ),
                        FieldSlot::new("OauthUseSecondaryRoles", &set.oauth_use_secondary_roles),
                        FieldSlot::new("BlockedRolesList", &set.blocked_roles_list),
                        FieldSlot::new("Comment", &set.comment),
                    ]
                }),
            )
            .with_payload(
                "Unset",
                self.unset.as_ref().map(|unset| {
                    vec![
                        FieldSlot::new("Enabled", &unset.enabled),
                        FieldSlot::new("OauthUseSecondaryRoles", &unset.oauth_use_secondary_roles),
                    ]
                }),
            )
    }
}

/// `SET` payload for altering a custom-client OAuth integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OauthForCustomClientsIntegrationSet {
    pub enabled: Option<bool>,
    pub oauth_redirect_uri: Option<String>,
    pub oauth_allow_non_tls_redirect_uri: Option<bool>,
    pub oauth_enforce_pkce: Option<bool>,
    pub pre_authorized_roles_list: Option<Vec<AccountObjectIdentifier>>,
    pub blocked_roles_list: Option<Vec<AccountObjectIdentifier>>,
    pub oauth_issue_refresh_tokens: Option<bool>,
    pub oauth_refresh_token_validity: Option<i32>,
    pub oauth_use_secondary_roles: Option<OauthUseSecondaryRoles>,
    pub network_policy: Option<AccountObjectIdentifier>,
    pub oauth_client_rsa_public_key: Option<String>,
    pub oauth_client_rsa_public_key2: Option<String>,
    pub comment: Option<String>,
}

/// `UNSET` payload for altering a custom-client OAuth integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OauthForCustomClientsIntegrationUnset {
    pub enabled: Option<bool>,
    pub network_policy: Option<bool>,
    pub oauth_use_secondary_roles: Option<bool>,
    pub oauth_client_rsa_public_key: Option<bool>,
    pub oauth_client_rsa_public_key2: Option<bool>,
}

/// Options for `ALTER SECURITY INTEGRATION` on a custom-client OAuth
/// integration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlterOauthForCustomClientsSecurityIntegrationOptions {
    pub if_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub set: Option<OauthForCustomClientsIntegrationSet>,
    pub unset: Option<OauthForCustomClientsIntegrationUnset>,
    pub set_tags: Option<Vec<TagAssociation>>,
    pub unset_tags: Option<Vec<String>>,
}

impl AlterOauthForCustomClientsSecurityIntegrationOptions {
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

    pub fn with_set(mut self, set: OauthForCustomClientsIntegrationSet) -> Self {
        self.set = Some(set);
        self
    }

    pub fn with_unset(mut self, unset: OauthForCustomClientsIntegrationUnset) -> Self {
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

impl ValidateOptions for AlterOauthForCustomClientsSecurityIntegrationOptions {
    const KIND: &'static str = "AlterOauthForCustomClientsSecurityIntegrationOptions";

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
                        FieldSlot::new("OauthRedirectUri", &set.oauth_redirect_uri),
                        FieldSlot::new(
                            "OauthAllowNonTlsRedirectUri",
                            &set.oauth_allow_non_tls_redirect_uri,
                        ),
                        FieldSlot::new("OauthEnforcePkce", &set.oauth_enforce_pkce),
                        FieldSlot::new("PreAuthorizedRolesList", &set.pre_authorized_roles_list),
                        FieldSlot::new("BlockedRolesList", &set.blocked_roles_list),
                        FieldSlot::new("OauthIssueRefreshTokens", &set.oauth_issue_refresh_tokens),
                        FieldSlot::new(
                            "OauthRefreshTokenValidity",
                            &set.oauth_refresh_token_validity,
                        ),
                        FieldSlot::new("OauthUseSecondaryRoles", &set.oauth_use_secondary_roles),
                        FieldSlot::new("NetworkPolicy", &set.network_policy),
                        FieldSlot::new("OauthClientRsaPublicKey", &set.oauth_client_rsa_public_key),
                        FieldSlot::new(
                            "OauthClientRsaPublicKey2",
                            &set.oauth_client_rsa_public_key2,
                        ),
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
                        FieldSlot::new("OauthUseSecondaryRoles", &unset.oauth_use_secondary_roles),
                        FieldSlot::new(
                            "OauthClientRsaPublicKey",
                            &unset.oauth_client_rsa_public_key,
                        ),
                        FieldSlot::new(
                            "OauthClientRsaPublicKey2",
                            &unset.oauth_client_rsa_public_key2,
                        ),
                    ]
                }),
            )
    }
}
