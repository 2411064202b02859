//! The generic option validation engine.
//!
//! One pure function interprets an [`OptionsProfile`] in a fixed order:
//! identifier validity, then mode exclusivity, then payload completeness for
//! whichever payloads are present, then conditional requirements. Every
//! applicable check runs — this is validate-all, not fail-fast — and all
//! violations come back in one composite so the caller sees the complete
//! picture in a single call.
//!
//! The engine never mutates its input, performs no I/O, and holds no state
//! between calls; validating the same value twice yields equal results.

use crate::error::{ValidationError, ValidationErrors, ValidationResult};
use crate::presence::{any_set, every_set, exactly_one_set};
use crate::schema::{ExclusiveGroup, GroupRule, OptionsProfile, PayloadRule, ValidateOptions};

/// Validate an options value that may never have been constructed.
///
/// A `None` options value short-circuits to the single missing-options
/// violation; nothing else is checked.
pub fn validate_options<O: ValidateOptions>(options: Option<&O>) -> ValidationResult {
    match options {
        None => Err(ValidationError::missing_options(O::KIND).into()),
        Some(options) => options.validate(),
    }
}

/// Run every check an [`OptionsProfile`] declares and aggregate the result.
pub fn validate_profile(profile: &OptionsProfile) -> ValidationResult {
    let mut violations = Vec::new();

    if let Some(identifier) = &profile.identifier {
        if !identifier.valid {
            violations.push(ValidationError::invalid_identifier(
                profile.kind,
                identifier.identifier.clone(),
            ));
        }
    }

    for group in &profile.groups {
        check_group(profile.kind, group, &mut violations);
    }

    for payload in &profile.payloads {
        check_payload(profile.kind, payload, &mut violations);
    }

    for rule in &profile.conditionals {
        if rule.triggered && !rule.required.set {
            violations.push(ValidationError::required_when(
                profile.kind,
                rule.required.name,
                rule.trigger,
                rule.trigger_value.clone(),
            ));
        }
    }

    ValidationErrors::join(violations)
}

fn check_group(kind: &'static str, group: &ExclusiveGroup, violations: &mut Vec<ValidationError>) {
    let flags: Vec<bool> = group.fields.iter().map(|field| field.set).collect();
    let names: Vec<&'static str> = group.fields.iter().map(|field| field.name).collect();

    match group.rule {
        GroupRule::ExactlyOne => {
            if !exactly_one_set(&flags) {
                violations.push(ValidationError::exactly_one_of(kind, names));
            }
        }
        GroupRule::AtMostOne => {
            if every_set(&flags) {
                violations.push(ValidationError::one_of(kind, names));
            }
        }
    }
}

fn check_payload(kind: &'static str, payload: &PayloadRule, violations: &mut Vec<ValidationError>) {
    if !payload.present {
        return;
    }
    let flags: Vec<bool> = payload.fields.iter().map(|field| field.set).collect();
    if !any_set(&flags) {
        let names: Vec<&'static str> = payload.fields.iter().map(|field| field.name).collect();
        violations.push(ValidationError::at_least_one_of(kind, payload.name, names));
    }
}
