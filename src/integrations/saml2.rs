//! SAML2 security integration options.
//!
//! SAML2 integrations connect the platform (as SAML service provider) to an
//! external identity provider. Alter carries one mode beyond the usual four:
//! `RefreshSaml2SpPrivateKey`, a presence-only mode that rotates the service
//! provider's signing key and has no payload of its own.

use serde::{Deserialize, Serialize};

use crate::identifier::AccountObjectIdentifier;
use crate::integrations::TagAssociation;
use crate::schema::{FieldSlot, OptionsProfile, ValidateOptions};

/// Identity provider vendor behind a SAML2 integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Saml2SecurityIntegrationProvider {
    #[serde(rename = "OKTA")]
    Okta,
    #[serde(rename = "ADFS")]
    Adfs,
    #[serde(rename = "CUSTOM")]
    Custom,
}

/// Options for `CREATE SECURITY INTEGRATION … TYPE = SAML2`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSaml2SecurityIntegrationOptions {
    pub or_replace: Option<bool>,
    pub if_not_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub enabled: bool,
    pub saml2_issuer: String,
    pub saml2_sso_url: String,
    pub saml2_provider: Saml2SecurityIntegrationProvider,
    pub saml2_x509_cert: String,
    pub allowed_user_domains: Option<Vec<String>>,
    pub allowed_email_patterns: Option<Vec<String>>,
    pub saml2_sp_initiated_login_page_label: Option<String>,
    pub saml2_enable_sp_initiated: Option<bool>,
    pub saml2_sp_x509_cert: Option<String>,
    pub saml2_sign_request: Option<bool>,
    pub saml2_requested_nameid_format: Option<String>,
    pub saml2_post_logout_redirect_url: Option<String>,
    pub saml2_force_authn: Option<bool>,
    pub saml2_sp_issuer_url: Option<String>,
    pub saml2_sp_acs_url: Option<String>,
    pub comment: Option<String>,
}

impl CreateSaml2SecurityIntegrationOptions {
    pub fn new(
        name: impl Into<AccountObjectIdentifier>,
        enabled: bool,
        saml2_issuer: impl Into<String>,
        saml2_sso_url: impl Into<String>,
        saml2_provider: Saml2SecurityIntegrationProvider,
        saml2_x509_cert: impl Into<String>,
    ) -> Self {
        Self {
            or_replace: None,
            if_not_exists: None,
            name: name.into(),
            enabled,
            saml2_issuer: saml2_issuer.into(),
            saml2_sso_url: saml2_sso_url.into(),
            saml2_provider,
            saml2_x509_cert: saml2_x509_cert.into(),
            allowed_user_domains: None,
            allowed_email_patterns: None,
            saml2_sp_initiated_login_page_label: None,
            saml2_enable_sp_initiated: None,
            saml2_sp_x509_cert: None,
            saml2_sign_request: None,
            saml2_requested_nameid_format: None,
            saml2_post_logout_redirect_url: None,
            saml2_force_authn: None,
            saml2_sp_issuer_url: None,
            saml2_sp_acs_url: None,
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

    pub fn with_allowed_user_domains(mut self, domains: Vec<String>) -> Self {
        self.allowed_user_domains = Some(domains);
        self
    }

    pub fn with_allowed_email_patterns(mut self, patterns: Vec<String>) -> Self {
        self.allowed_email_patterns = Some(patterns);
        self
    }

    pub fn with_saml2_sp_initiated_login_page_label(mut self, label: impl Into<String>) -> Self {
        self.saml2_sp_initiated_login_page_label = Some(label.into());
        self
    }

    pub fn with_saml2_enable_sp_initiated(mut self, enable: bool) -> Self {
        self.saml2_enable_sp_initiated = Some(enable);
        self
    }

    pub fn with_saml2_sign_request(mut self, sign: bool) -> Self {
        self.saml2_sign_request = Some(sign);
        self
    }

    pub fn with_saml2_requested_nameid_format(mut self, format: impl Into<String>) -> Self {
        self.saml2_requested_nameid_format = Some(format.into());
        self
    }

    pub fn with_saml2_post_logout_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.saml2_post_logout_redirect_url = Some(url.into());
        self
    }

    pub fn with_saml2_force_authn(mut self, force: bool) -> Self {
        self.saml2_force_authn = Some(force);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl ValidateOptions for CreateSaml2SecurityIntegrationOptions {
    const KIND: &'static str = "CreateSaml2SecurityIntegrationOptions";

    fn profile(&self) -> OptionsProfile {
        OptionsProfile::new(Self::KIND)
            .with_identifier(&self.name)
            .with_at_most_one_of(vec![
                FieldSlot::new("OrReplace", &self.or_replace),
                FieldSlot::new("IfNotExists", &self.if_not_exists),
            ])
    }
}

/// `SET` payload for altering a SAML2 integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Saml2IntegrationSet {
    pub enabled: Option<bool>,
    pub saml2_issuer: Option<String>,
    pub saml2_sso_url: Option<String>,
    pub saml2_provider: Option<Saml2SecurityIntegrationProvider>,
    pub saml2_x509_cert: Option<String>,
    pub allowed_user_domains: Option<Vec<String>>,
    pub allowed_email_patterns: Option<Vec<String>>,
    pub saml2_sp_initiated_login_page_label: Option<String>,
    pub saml2_enable_sp_initiated: Option<bool>,
    pub saml2_sp_x509_cert: Option<String>,
    pub saml2_sign_request: Option<bool>,
    pub saml2_requested_nameid_format: Option<String>,
    pub saml2_post_logout_redirect_url: Option<String>,
    pub saml2_force_authn: Option<bool>,
    pub saml2_sp_issuer_url: Option<String>,
    pub saml2_sp_acs_url: Option<String>,
    pub comment: Option<String>,
}

/// `UNSET` payload for altering a SAML2 integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Saml2IntegrationUnset {
    pub saml2_force_authn: Option<bool>,
    pub saml2_requested_nameid_format: Option<bool>,
    pub saml2_post_logout_redirect_url: Option<bool>,
    pub comment: Option<bool>,
}

/// Options for `ALTER SECURITY INTEGRATION` on a SAML2 integration.
///
/// Exactly one of `Set`, `Unset`, `RefreshSaml2SpPrivateKey`, `SetTags`,
/// `UnsetTags` must be present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlterSaml2SecurityIntegrationOptions {
    pub if_exists: Option<bool>,
    pub name: AccountObjectIdentifier,
    pub set: Option<Saml2IntegrationSet>,
    pub unset: Option<Saml2IntegrationUnset>,
    pub refresh_saml2_sp_private_key: Option<bool>,
    pub set_tags: Option<Vec<TagAssociation>>,
    pub unset_tags: Option<Vec<String>>,
}

impl AlterSaml2SecurityIntegrationOptions {
    pub fn new(name: impl Into<AccountObjectIdentifier>) -> Self {
        Self {
            if_exists: None,
            name: name.into(),
            set: None,
            unset: None,
            refresh_saml2_sp_private_key: None,
            set_tags: None,
            unset_tags: None,
        }
    }

    pub fn with_if_exists(mut self, if_exists: bool) -> Self {
        self.if_exists = Some(if_exists);
        self
    }

    pub fn with_set(mut self, set: Saml2IntegrationSet) -> Self {
        self.set = Some(set);
        self
    }

    pub fn with_unset(mut self, unset: Saml2IntegrationUnset) -> Self {
        self.unset = Some(unset);
        self
    }

    pub fn with_refresh_saml2_sp_private_key(mut self, refresh: bool) -> Self {
        self.refresh_saml2_sp_private_key = Some(refresh);
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

impl ValidateOptions for AlterSaml2SecurityIntegrationOptions {
    const KIND: &'static str = "AlterSaml2SecurityIntegrationOptions";

    fn profile(&self) -> OptionsProfile {
        OptionsProfile::new(Self::KIND)
            .with_identifier(&self.name)
            .with_exactly_one_of(vec![
                FieldSlot::new("Set", &self.set),
                FieldSlot::new("Unset", &self.unset),
                FieldSlot::new(
                    "RefreshSaml2SpPrivateKey",
                    &self.refresh_saml2_sp_private_key,
                ),
                FieldSlot::new("SetTags", &self.set_tags),
                FieldSlot::new("UnsetTags", &self.unset_tags),
            ])
            .with_payload(
                "Set",
                self.set.as_ref().map(|set| {
                    vec![
                        FieldSlot::new("Enabled", &set.enabled),
                        FieldSlot::new("Saml2Issuer", &set.saml2_issuer),
                        FieldSlot::new("Saml2SsoUrl", &set.saml2_sso_url),
                        FieldSlot::new("Saml2Provider", &set.saml2_provider),
                        FieldSlot::new("Saml2X509Cert", &set.saml2_x509_cert),
                        FieldSlot::new("AllowedUserDomains", &set.allowed_user_domains),
                        FieldSlot::new("AllowedEmailPatterns", &set.allowed_email_patterns),
                        FieldSlot::new(
                            "Saml2SpInitiatedLoginPageLabel",
                            &set.saml2_sp_initiated_login_page_label,
                        ),
                        FieldSlot::new("Saml2EnableSpInitiated", &set.saml2_enable_sp_initiated),
                        FieldSlot::new("Saml2SpX509Cert", &set.saml2_sp_x509_cert),
                        FieldSlot::new("Saml2SignRequest", &set.saml2_sign_request),
                        FieldSlot::new(
                            "Saml2RequestedNameidFormat",
                            &set.saml2_requested_nameid_format,
                        ),
                        FieldSlot::new(
                            "Saml2PostLogoutRedirectUrl",
                            &set.saml2_post_logout_redirect_url,
                        ),
                        FieldSlot::new("Saml2ForceAuthn", &set.saml2_force_authn),
                        FieldSlot::new("Saml2SpIssuerUrl", &set.saml2_sp_issuer_url),
                        FieldSlot::new("Saml2SpAcsUrl", &set.saml2_sp_acs_url),
                        FieldSlot::new("Comment", &set.comment),
                    ]
                }),
            )
            .with_payload(
                "Unset",
                self.unset.as_ref().map(|unset| {
                    vec![
                        FieldSlot::new("Saml2ForceAuthn", &unset.saml2_force_authn),
                        FieldSlot::new(
                            "Saml2RequestedNameidFormat",
                            &unset.saml2_requested_nameid_format,
                        ),
                        FieldSlot::new(
                            "Saml2PostLogoutRedirectUrl",
                            &unset.saml2_post_logout_redirect_url,
                        ),
                        FieldSlot::new("Comment", &unset.comment),
                    ]
                }),
            )
    }
}
