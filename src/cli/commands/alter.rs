use anyhow::{Context as _, Result};
use regex::Regex;
use std::sync::OnceLock;

use super::{update, Context};
use crate::api::RepositoryHost;
use crate::cli::error::UsageError;
use crate::cli::flags::Flags;
use crate::cli::output;
use crate::cli::progress::NetworkProgress;
use crate::core::settings::{Setting, SettingRegistry};

fn repository_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("repository name pattern"))
}

/// A validated `alter` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterRequest<'a> {
    pub setting: &'a Setting,
    pub enabled: bool,
    /// `None` targets every repository.
    pub repositories: Option<Vec<String>>,
}

impl<'a> AlterRequest<'a> {
    pub fn parse(
        registry: &'a SettingRegistry,
        subcommand: Option<&str>,
        flags: &Flags,
        repositories: Option<&[String]>,
    ) -> Result<Self, UsageError> {
        let setting = subcommand
            .and_then(|word| registry.find(word))
            .ok_or(UsageError::InvalidSubcommand)?;

        let enabled = flags.main_bool().ok_or_else(|| {
            if let Some(value) = flags.main() {
                tracing::debug!("'{}' is neither enabled nor disabled", value);
            }
            UsageError::InvalidFlags
        })?;

        if let Some(invalid) = repositories
            .unwrap_or_default()
            .iter()
            .find(|name| !repository_name_pattern().is_match(name))
        {
            return Err(UsageError::InvalidRepositoryName(invalid.clone()));
        }

        Ok(Self {
            setting,
            enabled,
            repositories: repositories.map(<[String]>::to_vec),
        })
    }
}

pub async fn execute(ctx: &Context, token: &str, request: &AlterRequest<'_>) -> Result<()> {
    let progress = NetworkProgress::new("Updating");
    let result = apply(ctx.host.as_ref(), token, request, &progress).await;
    progress.finish();

    let altered = result?;
    if altered.is_empty() {
        tracing::warn!("no repositories matched, nothing was altered");
    }
    output::print_text("Repository status altered successfully.");

    update::execute(ctx, token).await
}

/// Sends one PATCH per selected repository and returns their names.
async fn apply(
    host: &dyn RepositoryHost,
    token: &str,
    request: &AlterRequest<'_>,
    progress: &NetworkProgress,
) -> Result<Vec<String>> {
    progress.listing();
    let names = host
        .fetch_repository_names(token, request.repositories.as_deref())
        .await?;
    let username = host.fetch_username(token).await?;

    let body = request.setting.body(request.enabled);
    for (index, name) in names.iter().enumerate() {
        progress.repository(index, names.len(), &format!("{username}/{name}"));
        let result = host.update_repository(token, &username, name, &body).await;

        if result.is_err() && index > 0 {
            tracing::warn!(
                "cached status is stale for already updated repositories: {}",
                names[..index].join(", ")
            );
        }
        result.with_context(|| {
            format!(
                "failed to update {username}/{name} after updating {} of {} repositories",
                index,
                names.len()
            )
        })?;
    }

    tracing::info!(
        "set {} = {} on {} repositories",
        request.setting.field,
        request.enabled,
        names.len()
    );
    Ok(names)
}
