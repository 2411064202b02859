//! Known-good options builders.
//!
//! Each function returns an options value that passes validation as built, so
//! tests can break exactly one rule at a time and assert on the single
//! resulting violation.

use security_integrations::integrations::lifecycle::{
    DescribeSecurityIntegrationOptions, DropSecurityIntegrationOptions,
    ShowSecurityIntegrationOptions,
};
use security_integrations::integrations::oauth::{
    AlterOauthForCustomClientsSecurityIntegrationOptions,
    AlterOauthForPartnerApplicationsSecurityIntegrationOptions,
    CreateOauthForCustomClientsSecurityIntegrationOptions,
    CreateOauthForPartnerApplicationsSecurityIntegrationOptions,
    OauthForCustomClientsIntegrationSet, OauthForPartnerApplicationsIntegrationSet,
    OauthSecurityIntegrationClient, OauthSecurityIntegrationClientType,
};
use security_integrations::integrations::saml2::{
    AlterSaml2SecurityIntegrationOptions, CreateSaml2SecurityIntegrationOptions,
    Saml2IntegrationSet, Saml2SecurityIntegrationProvider,
};
use security_integrations::integrations::scim::{
    AlterScimSecurityIntegrationOptions, CreateScimSecurityIntegrationOptions,
    ScimIntegrationSet, ScimSecurityIntegrationRunAsRole, ScimSecurityIntegrationScimClient,
};

use super::random_identifier;

pub fn create_oauth_partner() -> CreateOauthForPartnerApplicationsSecurityIntegrationOptions {
    CreateOauthForPartnerApplicationsSecurityIntegrationOptions::new(
        random_identifier(),
        OauthSecurityIntegrationClient::Looker,
    )
    .with_oauth_redirect_uri("https://example.com/callback")
}

pub fn create_oauth_custom() -> CreateOauthForCustomClientsSecurityIntegrationOptions {
    CreateOauthForCustomClientsSecurityIntegrationOptions::new(
        random_identifier(),
        OauthSecurityIntegrationClientType::Public,
        "https://example.com/callback",
    )
}

pub fn create_saml2() -> CreateSaml2SecurityIntegrationOptions {
    CreateSaml2SecurityIntegrationOptions::new(
        random_identifier(),
        false,
        "https://idp.example.com",
        "https://idp.example.com/sso",
        Saml2SecurityIntegrationProvider::Custom,
        "MIICdummycert",
    )
}

pub fn create_scim() -> CreateScimSecurityIntegrationOptions {
    CreateScimSecurityIntegrationOptions::new(
        random_identifier(),
        false,
        ScimSecurityIntegrationScimClient::Generic,
        ScimSecurityIntegrationRunAsRole::GenericScimProvisioner,
    )
}

pub fn alter_oauth_partner() -> AlterOauthForPartnerApplicationsSecurityIntegrationOptions {
    AlterOauthForPartnerApplicationsSecurityIntegrationOptions::new(random_identifier()).with_set(
        OauthForPartnerApplicationsIntegrationSet {
            enabled: Some(true),
            ..Default::default()
        },
    )
}

pub fn alter_oauth_custom() -> AlterOauthForCustomClientsSecurityIntegrationOptions {
    AlterOauthForCustomClientsSecurityIntegrationOptions::new(random_identifier()).with_set(
        OauthForCustomClientsIntegrationSet {
            enabled: Some(true),
            ..Default::default()
        },
    )
}

pub fn alter_saml2() -> AlterSaml2SecurityIntegrationOptions {
    AlterSaml2SecurityIntegrationOptions::new(random_identifier()).with_set(Saml2IntegrationSet {
        enabled: Some(true),
        ..Default::default()
    })
}

pub fn alter_scim() -> AlterScimSecurityIntegrationOptions {
    AlterScimSecurityIntegrationOptions::new(random_identifier()).with_set(ScimIntegrationSet {
        enabled: Some(true),
        ..Default::default()
    })
}

pub fn drop_options() -> DropSecurityIntegrationOptions {
    DropSecurityIntegrationOptions::new(random_identifier())
}

pub fn describe_options() -> DescribeSecurityIntegrationOptions {
    DescribeSecurityIntegrationOptions::new(random_identifier())
}

pub fn show_options() -> ShowSecurityIntegrationOptions {
    ShowSecurityIntegrationOptions::new()
}
