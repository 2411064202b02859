//! SAML2 option validation rules.

use security_integrations::ValidationError;
use security_integrations::identifier::AccountObjectIdentifier;
use security_integrations::integrations::TagAssociation;
use security_integrations::integrations::saml2::{
    AlterSaml2SecurityIntegrationOptions, CreateSaml2SecurityIntegrationOptions,
    Saml2IntegrationSet, Saml2IntegrationUnset,
};
use security_integrations::schema::ValidateOptions;

use crate::common::builders;

#[test]
fn baseline_builders_are_valid() {
    assert!(builders::create_saml2().validate().is_ok());
    assert!(builders::alter_saml2().validate().is_ok());
}

#[test]
fn create_rejects_both_creation_modifiers() {
    let options = builders::create_saml2()
        .with_or_replace(true)
        .with_if_not_exists(true);
    let errors = options.validate().unwrap_err();
    assert!(errors.contains(&ValidationError::one_of(
        CreateSaml2SecurityIntegrationOptions::KIND,
        vec!["OrReplace", "IfNotExists"],
    )));
}

#[test]
fn create_with_optional_fields_is_valid() {
    let options = builders::create_saml2()
        .with_allowed_user_domains(vec!["example.com".into()])
        .with_saml2_enable_sp_initiated(true)
        .with_saml2_force_authn(false)
        .with_comment("primary idp");
    assert!(options.validate().is_ok());
}

#[test]
fn alter_mode_exclusivity_covers_all_five_modes() {
    let exclusivity = ValidationError::exactly_one_of(
        AlterSaml2SecurityIntegrationOptions::KIND,
        vec![
            "Set",
            "Unset",
            "RefreshSaml2SpPrivateKey",
            "SetTags",
            "UnsetTags",
        ],
    );

    let zero = AlterSaml2SecurityIntegrationOptions::new(crate::common::random_identifier());
    assert!(zero.validate().unwrap_err().contains(&exclusivity));

    let two = builders::alter_saml2().with_refresh_saml2_sp_private_key(true);
    assert!(two.validate().unwrap_err().contains(&exclusivity));

    let three = builders::alter_saml2()
        .with_refresh_saml2_sp_private_key(true)
        .with_set_tags(vec![TagAssociation::new("env", "prod")]);
    assert!(three.validate().unwrap_err().contains(&exclusivity));
}

#[test]
fn alter_each_single_mode_is_valid() {
    let base = || AlterSaml2SecurityIntegrationOptions::new(crate::common::random_identifier());

    assert!(
        base()
            .with_set(Saml2IntegrationSet {
                saml2_force_authn: Some(true),
                ..Default::default()
            })
            .validate()
            .is_ok()
    );
    assert!(
        base()
            .with_unset(Saml2IntegrationUnset {
                comment: Some(true),
                ..Default::default()
            })
            .validate()
            .is_ok()
    );
    assert!(
        base()
            .with_refresh_saml2_sp_private_key(true)
            .validate()
            .is_ok()
    );
    assert!(
        base()
            .with_set_tags(vec![TagAssociation::new("env", "prod")])
            .validate()
            .is_ok()
    );
    assert!(base().with_unset_tags(vec!["env".into()]).validate().is_ok());
}

#[test]
fn alter_empty_set_payload_is_a_completeness_violation() {
    let options = AlterSaml2SecurityIntegrationOptions::new(crate::common::random_identifier())
        .with_set(Saml2IntegrationSet::default());
    let errors = options.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors.violations()[0],
        ValidationError::AtLeastOneRequired { payload: "Set", .. }
    ));
}

#[test]
fn alter_with_invalid_identifier_and_empty_unset_reports_both() {
    let options = AlterSaml2SecurityIntegrationOptions::new(AccountObjectIdentifier::new(""))
        .with_unset(Saml2IntegrationUnset::default());
    let errors = options.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        errors.violations()[0],
        ValidationError::InvalidIdentifier { .. }
    ));
    assert!(matches!(
        errors.violations()[1],
        ValidationError::AtLeastOneRequired { payload: "Unset", .. }
    ));
}
