//! Drop / describe / show validation rules.

use security_integrations::ValidationError;
use security_integrations::integrations::Like;
use security_integrations::integrations::lifecycle::{
    DescribeSecurityIntegrationOptions, DropSecurityIntegrationOptions,
    ShowSecurityIntegrationOptions,
};
use security_integrations::schema::ValidateOptions;

use crate::common::builders;

#[test]
fn drop_and_describe_succeed_with_only_a_valid_identifier() {
    assert!(builders::drop_options().validate().is_ok());
    assert!(builders::describe_options().validate().is_ok());
}

#[test]
fn drop_if_exists_has_no_validation_rule() {
    assert!(
        builders::drop_options()
            .with_if_exists(true)
            .validate()
            .is_ok()
    );
}

#[test]
fn drop_and_describe_reject_invalid_identifiers() {
    let errors = DropSecurityIntegrationOptions::new("").validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains(&ValidationError::invalid_identifier(
        DropSecurityIntegrationOptions::KIND,
        "",
    )));

    let overlong = "X".repeat(256);
    let errors = DescribeSecurityIntegrationOptions::new(overlong.as_str())
        .validate()
        .unwrap_err();
    assert!(errors.contains(&ValidationError::invalid_identifier(
        DescribeSecurityIntegrationOptions::KIND,
        overlong,
    )));
}

#[test]
fn show_needs_no_identifier() {
    assert!(builders::show_options().validate().is_ok());
}

#[test]
fn show_like_filter_is_unconstrained() {
    assert!(
        ShowSecurityIntegrationOptions::new()
            .with_like(Like::new("OAUTH_%"))
            .validate()
            .is_ok()
    );
    // Even an empty pattern carries no rule.
    assert!(
        ShowSecurityIntegrationOptions::new()
            .with_like(Like::new(""))
            .validate()
            .is_ok()
    );
}
