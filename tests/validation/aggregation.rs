//! Cross-kind aggregation behavior: missing options, multi-violation
//! composites, idempotence.

use security_integrations::identifier::AccountObjectIdentifier;
use security_integrations::integrations::lifecycle::{
    DescribeSecurityIntegrationOptions, DropSecurityIntegrationOptions,
    ShowSecurityIntegrationOptions,
};
use security_integrations::integrations::oauth::{
    AlterOauthForCustomClientsSecurityIntegrationOptions,
    AlterOauthForPartnerApplicationsSecurityIntegrationOptions,
    CreateOauthForCustomClientsSecurityIntegrationOptions,
    CreateOauthForPartnerApplicationsSecurityIntegrationOptions,
};
use security_integrations::integrations::saml2::{
    AlterSaml2SecurityIntegrationOptions, CreateSaml2SecurityIntegrationOptions,
    Saml2IntegrationSet,
};
use security_integrations::integrations::scim::{
    AlterScimSecurityIntegrationOptions, CreateScimSecurityIntegrationOptions,
};
use security_integrations::schema::ValidateOptions;
use security_integrations::{ValidationError, validate_options};

use crate::common::builders;

fn assert_missing_only<O: ValidateOptions>() {
    let errors = validate_options(None::<&O>).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.violations()[0],
        ValidationError::missing_options(O::KIND)
    );
}

#[test]
fn missing_options_is_the_only_violation_for_every_kind() {
    assert_missing_only::<CreateOauthForPartnerApplicationsSecurityIntegrationOptions>();
    assert_missing_only::<CreateOauthForCustomClientsSecurityIntegrationOptions>();
    assert_missing_only::<CreateSaml2SecurityIntegrationOptions>();
    assert_missing_only::<CreateScimSecurityIntegrationOptions>();
    assert_missing_only::<AlterOauthForPartnerApplicationsSecurityIntegrationOptions>();
    assert_missing_only::<AlterOauthForCustomClientsSecurityIntegrationOptions>();
    assert_missing_only::<AlterSaml2SecurityIntegrationOptions>();
    assert_missing_only::<AlterScimSecurityIntegrationOptions>();
    assert_missing_only::<DropSecurityIntegrationOptions>();
    assert_missing_only::<DescribeSecurityIntegrationOptions>();
    assert_missing_only::<ShowSecurityIntegrationOptions>();
}

#[test]
fn present_options_delegate_to_their_own_rules() {
    let options = builders::alter_scim();
    assert!(validate_options(Some(&options)).is_ok());
}

#[test]
fn independent_violations_come_back_in_one_composite() {
    // Invalid identifier AND two modes set AND the chosen Set payload empty:
    // one call surfaces all three.
    let options = AlterSaml2SecurityIntegrationOptions::new(AccountObjectIdentifier::new(""))
        .with_set(Saml2IntegrationSet::default())
        .with_unset_tags(vec!["env".into()]);

    let errors = options.validate().unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(matches!(
        errors.violations()[0],
        ValidationError::InvalidIdentifier { .. }
    ));
    assert!(matches!(
        errors.violations()[1],
        ValidationError::ExactlyOneRequired { .. }
    ));
    assert!(matches!(
        errors.violations()[2],
        ValidationError::AtLeastOneRequired { payload: "Set", .. }
    ));
}

#[test]
fn validation_is_idempotent() {
    let broken = AlterSaml2SecurityIntegrationOptions::new(AccountObjectIdentifier::new(""))
        .with_set(Saml2IntegrationSet::default());

    let first = broken.validate().unwrap_err();
    let second = broken.validate().unwrap_err();
    assert_eq!(first, second);

    let clean = builders::alter_saml2();
    assert_eq!(clean.validate(), clean.validate());
}

#[test]
fn composite_message_enumerates_kind_rule_and_fields() {
    let options = AlterScimSecurityIntegrationOptions::new(AccountObjectIdentifier::new(""));
    let message = options.validate().unwrap_err().to_string();

    assert!(message.contains("AlterScimSecurityIntegrationOptions"));
    assert!(message.contains("invalid object identifier"));
    assert!(message.contains("exactly one of"));
    assert!(message.contains("SetTags"));
}
