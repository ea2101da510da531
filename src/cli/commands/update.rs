use anyhow::Result;

use super::Context;
use crate::api::RepositoryHost;
use crate::cli::output;
use crate::cli::progress::NetworkProgress;
use crate::core::repository::Repository;

pub async fn execute(ctx: &Context, token: &str) -> Result<()> {
    let progress = NetworkProgress::new("Refreshing");
    let result = fetch_snapshot(ctx.host.as_ref(), token, &progress).await;
    progress.finish();

    let repositories = result?;
    ctx.store.save(&repositories)?;
    output::print_text("Repository status updated successfully.");

    Ok(())
}

/// Fetches every repository the token can see, one request per repository.
pub async fn fetch_snapshot(
    host: &dyn RepositoryHost,
    token: &str,
    progress: &NetworkProgress,
) -> Result<Vec<Repository>> {
    progress.listing();
    let names = host.fetch_repository_names(token, None).await?;
    let username = host.fetch_username(token).await?;

    let mut repositories = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        progress.repository(index, names.len(), &format!("{username}/{name}"));
        repositories.push(host.fetch_repository(token, &username, name).await?);
    }

    Ok(repositories)
}
