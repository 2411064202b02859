//! OAuth option validation rules.

use security_integrations::ValidationError;
use security_integrations::identifier::AccountObjectIdentifier;
use security_integrations::integrations::TagAssociation;
use security_integrations::integrations::oauth::{
    AlterOauthForCustomClientsSecurityIntegrationOptions,
    AlterOauthForPartnerApplicationsSecurityIntegrationOptions,
    CreateOauthForPartnerApplicationsSecurityIntegrationOptions,
    OauthForCustomClientsIntegrationUnset, OauthForPartnerApplicationsIntegrationSet,
    OauthForPartnerApplicationsIntegrationUnset, OauthSecurityIntegrationClient,
};
use security_integrations::schema::ValidateOptions;

use crate::common::builders;

#[test]
fn baseline_builders_are_valid() {
    assert!(builders::create_oauth_partner().validate().is_ok());
    assert!(builders::create_oauth_custom().validate().is_ok());
    assert!(builders::alter_oauth_partner().validate().is_ok());
    assert!(builders::alter_oauth_custom().validate().is_ok());
}

#[test]
fn invalid_identifier_is_reported_regardless_of_other_fields() {
    let mut options = builders::create_oauth_partner();
    options.name = AccountObjectIdentifier::new("");
    let errors = options.validate().unwrap_err();
    assert!(errors.contains(&ValidationError::invalid_identifier(
        CreateOauthForPartnerApplicationsSecurityIntegrationOptions::KIND,
        "",
    )));

    let mut options = builders::alter_oauth_custom();
    options.name = AccountObjectIdentifier::new("A\"B");
    let errors = options.validate().unwrap_err();
    assert!(errors.contains(&ValidationError::invalid_identifier(
        AlterOauthForCustomClientsSecurityIntegrationOptions::KIND,
        "A\"B",
    )));
}

#[test]
fn creation_modifiers_are_pairwise_exclusive() {
    let partner = builders::create_oauth_partner()
        .with_or_replace(true)
        .with_if_not_exists(true);
    let errors = partner.validate().unwrap_err();
    assert!(errors.contains(&ValidationError::one_of(
        CreateOauthForPartnerApplicationsSecurityIntegrationOptions::KIND,
        vec!["OrReplace", "IfNotExists"],
    )));

    // Either modifier alone is fine.
    assert!(
        builders::create_oauth_partner()
            .with_or_replace(true)
            .validate()
            .is_ok()
    );
    assert!(
        builders::create_oauth_custom()
            .with_if_not_exists(true)
            .validate()
            .is_ok()
    );
}

#[test]
fn looker_client_requires_redirect_uri() {
    let mut without_uri = builders::create_oauth_partner();
    without_uri.oauth_redirect_uri = None;
    let errors = without_uri.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains(&ValidationError::required_when(
        CreateOauthForPartnerApplicationsSecurityIntegrationOptions::KIND,
        "OauthRedirectUri",
        "OauthClient",
        "LOOKER",
    )));

    // Same options with the URI set succeed.
    assert!(builders::create_oauth_partner().validate().is_ok());
}

#[test]
fn non_looker_client_does_not_require_redirect_uri() {
    let options = CreateOauthForPartnerApplicationsSecurityIntegrationOptions::new(
        crate::common::random_identifier(),
        OauthSecurityIntegrationClient::TableauServer,
    );
    assert!(options.validate().is_ok());
}

#[test]
fn alter_partner_requires_exactly_one_mode() {
    let exclusivity = ValidationError::exactly_one_of(
        AlterOauthForPartnerApplicationsSecurityIntegrationOptions::KIND,
        vec!["Set", "Unset", "SetTags", "UnsetTags"],
    );

    let mut zero = builders::alter_oauth_partner();
    zero.set = None;
    let errors = zero.validate().unwrap_err();
    assert!(errors.contains(&exclusivity));

    let two = builders::alter_oauth_partner()
        .with_set_tags(vec![TagAssociation::new("team", "identity")]);
    let errors = two.validate().unwrap_err();
    assert!(errors.contains(&exclusivity));
}

#[test]
fn alter_partner_each_single_mode_is_valid() {
    let base = || {
        AlterOauthForPartnerApplicationsSecurityIntegrationOptions::new(
            crate::common::random_identifier(),
        )
    };

    assert!(
        base()
            .with_set(OauthForPartnerApplicationsIntegrationSet {
                comment: Some("updated".into()),
                ..Default::default()
            })
            .validate()
            .is_ok()
    );
    assert!(
        base()
            .with_unset(OauthForPartnerApplicationsIntegrationUnset {
                enabled: Some(true),
                ..Default::default()
            })
            .validate()
            .is_ok()
    );
    assert!(
        base()
            .with_set_tags(vec![TagAssociation::new("team", "identity")])
            .validate()
            .is_ok()
    );
    assert!(
        base()
            .with_unset_tags(vec!["team".into()])
            .validate()
            .is_ok()
    );
}

#[test]
fn alter_partner_empty_set_payload_names_all_fields() {
    let mut options = builders::alter_oauth_partner();
    options.set = Some(OauthForPartnerApplicationsIntegrationSet::default());
    let errors = options.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains(&ValidationError::at_least_one_of(
        AlterOauthForPartnerApplicationsSecurityIntegrationOptions::KIND,
        "Set",
        vec![
            "Enabled",
            "OauthIssueRefreshTokens",
            "OauthRedirectUri",
            "OauthRefreshTokenValidity",
            "OauthUseSecondaryRoles",
            "BlockedRolesList",
            "Comment",
        ],
    )));
}

#[test]
fn alter_custom_empty_unset_payload_names_all_fields() {
    let options = AlterOauthForCustomClientsSecurityIntegrationOptions::new(
        crate::common::random_identifier(),
    )
    .with_unset(OauthForCustomClientsIntegrationUnset::default());
    let errors = options.validate().unwrap_err();
    assert!(errors.contains(&ValidationError::at_least_one_of(
        AlterOauthForCustomClientsSecurityIntegrationOptions::KIND,
        "Unset",
        vec![
            "Enabled",
            "NetworkPolicy",
            "OauthUseSecondaryRoles",
            "OauthClientRsaPublicKey",
            "OauthClientRsaPublicKey2",
        ],
    )));
}

// Documented quirk: a field explicitly set to an empty value still counts as
// set, so it satisfies the payload completeness rule on its own.
#[test]
fn empty_string_payload_field_counts_as_set() {
    let mut options = builders::alter_oauth_partner();
    options.set = Some(OauthForPartnerApplicationsIntegrationSet {
        comment: Some(String::new()),
        ..Default::default()
    });
    assert!(options.validate().is_ok());
}
