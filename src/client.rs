//! Validated issuance of security integration commands.
//!
//! [`SecurityIntegrations`] is the client surface: one method per operation
//! kind. Every method validates its options first and treats any violation as
//! a hard stop — the [`StatementExecutor`] is never touched for an invalid
//! options value. SQL rendering, sessions, and transport all live behind the
//! executor; this module only decides whether a command may be sent and maps
//! result rows back into typed values.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::integrations::lifecycle::{
    DescribeSecurityIntegrationOptions, DropSecurityIntegrationOptions,
    ShowSecurityIntegrationOptions,
};
use crate::integrations::oauth::{
    AlterOauthForCustomClientsSecurityIntegrationOptions,
    AlterOauthForPartnerApplicationsSecurityIntegrationOptions,
    CreateOauthForCustomClientsSecurityIntegrationOptions,
    CreateOauthForPartnerApplicationsSecurityIntegrationOptions,
};
use crate::integrations::saml2::{
    AlterSaml2SecurityIntegrationOptions, CreateSaml2SecurityIntegrationOptions,
};
use crate::integrations::scim::{
    AlterScimSecurityIntegrationOptions, CreateScimSecurityIntegrationOptions,
};
use crate::schema::ValidateOptions;

/// Error type produced by a statement executor.
pub type ExecutorError = Box<dyn std::error::Error + Send + Sync>;

/// The administrative command a validated options value turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    CreateOauthForPartnerApplications,
    CreateOauthForCustomClients,
    CreateSaml2,
    CreateScim,
    AlterOauthForPartnerApplications,
    AlterOauthForCustomClients,
    AlterSaml2,
    AlterScim,
    Drop,
    Describe,
    Show,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateOauthForPartnerApplications => "CreateOauthForPartnerApplications",
            Self::CreateOauthForCustomClients => "CreateOauthForCustomClients",
            Self::CreateSaml2 => "CreateSaml2",
            Self::CreateScim => "CreateScim",
            Self::AlterOauthForPartnerApplications => "AlterOauthForPartnerApplications",
            Self::AlterOauthForCustomClients => "AlterOauthForCustomClients",
            Self::AlterSaml2 => "AlterSaml2",
            Self::AlterScim => "AlterScim",
            Self::Drop => "Drop",
            Self::Describe => "Describe",
            Self::Show => "Show",
        }
    }
}

/// Collaborator that renders and runs one administrative command against the
/// remote platform. Implementations own SQL generation, sessions, and
/// transport; they receive options only after validation has passed.
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    /// Run a command with no result rows.
    async fn execute(&self, command: CommandKind, options: Value) -> Result<(), ExecutorError>;

    /// Run a command returning result rows.
    async fn query(&self, command: CommandKind, options: Value)
    -> Result<Vec<Value>, ExecutorError>;
}

/// One row of `SHOW SECURITY INTEGRATIONS` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityIntegration {
    pub name: String,
    #[serde(rename = "type")]
    pub integration_type: String,
    pub category: String,
    pub enabled: bool,
    pub comment: Option<String>,
    pub created_on: DateTime<Utc>,
}

/// One row of `DESCRIBE SECURITY INTEGRATION` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityIntegrationProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub value: String,
    pub default: String,
}

/// Client for the security integrations subsystem.
#[derive(Debug)]
pub struct SecurityIntegrations<E> {
    executor: E,
}

impl<E: StatementExecutor> SecurityIntegrations<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// The wrapped executor, for callers that need to issue other commands
    /// over the same channel.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    async fn send<O>(&self, command: CommandKind, options: &O) -> ClientResult<()>
    where
        O: ValidateOptions + Serialize,
    {
        options.validate()?;
        debug!("validated {}, issuing {}", O::KIND, command.as_str());
        let payload = serde_json::to_value(options)?;
        self.executor
            .execute(command, payload)
            .await
            .map_err(ClientError::Executor)
    }

    async fn fetch<O>(&self, command: CommandKind, options: &O) -> ClientResult<Vec<Value>>
    where
        O: ValidateOptions + Serialize,
    {
        options.validate()?;
        debug!("validated {}, issuing {}", O::KIND, command.as_str());
        let payload = serde_json::to_value(options)?;
        self.executor
            .query(command, payload)
            .await
            .map_err(ClientError::Executor)
    }

    pub async fn create_oauth_for_partner_applications(
        &self,
        options: &CreateOauthForPartnerApplicationsSecurityIntegrationOptions,
    ) -> ClientResult<()> {
        self.send(CommandKind::CreateOauthForPartnerApplications, options)
            .await
    }

    pub async fn create_oauth_for_custom_clients(
        &self,
        options: &CreateOauthForCustomClientsSecurityIntegrationOptions,
    ) -> ClientResult<()> {
        self.send(CommandKind::CreateOauthForCustomClients, options)
            .await
    }

    pub async fn create_saml2(
        &self,
        options: &CreateSaml2SecurityIntegrationOptions,
    ) -> ClientResult<()> {
        self.send(CommandKind::CreateSaml2, options).await
    }

    pub async fn create_scim(
        &self,
        options: &CreateScimSecurityIntegrationOptions,
    ) -> ClientResult<()> {
        self.send(CommandKind::CreateScim, options).await
    }

    pub async fn alter_oauth_for_partner_applications(
        &self,
        options: &AlterOauthForPartnerApplicationsSecurityIntegrationOptions,
    ) -> ClientResult<()> {
        self.send(CommandKind::AlterOauthForPartnerApplications, options)
            .await
    }

    pub async fn alter_oauth_for_custom_clients(
        &self,
        options: &AlterOauthForCustomClientsSecurityIntegrationOptions,
    ) -> ClientResult<()> {
        self.send(CommandKind::AlterOauthForCustomClients, options)
            .await
    }

    pub async fn alter_saml2(
        &self,
        options: &AlterSaml2SecurityIntegrationOptions,
    ) -> ClientResult<()> {
        self.send(CommandKind::AlterSaml2, options).await
    }

    pub async fn alter_scim(
        &self,
        options: &AlterScimSecurityIntegrationOptions,
    ) -> ClientResult<()> {
        self.send(CommandKind::AlterScim, options).await
    }

    pub async fn drop(&self, options: &DropSecurityIntegrationOptions) -> ClientResult<()> {
        self.send(CommandKind::Drop, options).await
    }

    pub async fn describe(
        &self,
        options: &DescribeSecurityIntegrationOptions,
    ) -> ClientResult<Vec<SecurityIntegrationProperty>> {
        let rows = self.fetch(CommandKind::Describe, options).await?;
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(ClientError::from))
            .collect()
    }

    pub async fn show(
        &self,
        options: &ShowSecurityIntegrationOptions,
    ) -> ClientResult<Vec<SecurityIntegration>> {
        let rows = self.fetch(CommandKind::Show, options).await?;
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(ClientError::from))
            .collect()
    }

    /// Show the single integration with the given name, if any.
    pub async fn show_by_name(&self, name: &str) -> ClientResult<Option<SecurityIntegration>> {
        let options = ShowSecurityIntegrationOptions::new()
            .with_like(crate::integrations::Like::new(name));
        let mut rows = self.show(&options).await?;
        Ok(rows
            .iter()
            .position(|row| row.name == name)
            .map(|index| rows.swap_remove(index)))
    }
}
