//! Typed client layer for security integration administration.
//!
//! Security integrations model federated-identity connectors — OAuth client
//! registrations, SAML2 identity providers, and SCIM provisioning endpoints —
//! as first-class administrative objects on a managed data platform. This
//! crate builds and validates the options of the CREATE / ALTER / DROP /
//! DESCRIBE / SHOW commands for them, and refuses to hand a command to the
//! transport until its options are well-formed.
//!
//! # Core Components
//!
//! - [`schema::ValidateOptions`] - Implemented by every options type; yields a
//!   declarative validation profile
//! - [`engine::validate_options`] - The generic engine interpreting a profile,
//!   aggregating every violation into one [`error::ValidationErrors`]
//! - [`client::SecurityIntegrations`] - Validate-then-send client over a
//!   pluggable [`client::StatementExecutor`]
//!
//! # Quick Start
//!
//! ```rust
//! use security_integrations::integrations::scim::{
//!     AlterScimSecurityIntegrationOptions, ScimIntegrationSet,
//! };
//! use security_integrations::schema::ValidateOptions;
//!
//! let options = AlterScimSecurityIntegrationOptions::new("SCIM_PROVISIONING")
//!     .with_set(ScimIntegrationSet {
//!         enabled: Some(true),
//!         ..Default::default()
//!     });
//! assert!(options.validate().is_ok());
//! ```

pub mod client;
pub mod engine;
pub mod error;
pub mod identifier;
pub mod integrations;
pub mod presence;
pub mod schema;

// Re-export commonly used types for convenience
pub use client::{
    CommandKind, SecurityIntegration, SecurityIntegrationProperty, SecurityIntegrations,
    StatementExecutor,
};
pub use engine::validate_options;
pub use error::{ClientError, ClientResult, ValidationError, ValidationErrors, ValidationResult};
pub use identifier::AccountObjectIdentifier;
pub use schema::{OptionsProfile, ValidateOptions};
