use anyhow::{Context as _, Result};
use serde_json::Value;

use super::{update, Context};
use crate::cli::output;
use crate::core::repository::Repository;

pub async fn execute(ctx: &Context) -> Result<()> {
    let repositories = match ctx.store.load() {
        Some(repositories) => repositories,
        None => {
            tracing::info!(
                "no usable snapshot at {}, refreshing",
                ctx.store.path().display()
            );
            let token = ctx.tokens.resolve()?;
            update::execute(ctx, &token).await?;
            ctx.store.load().with_context(|| {
                format!(
                    "snapshot {} could not be read after refresh",
                    ctx.store.path().display()
                )
            })?
        }
    };

    if repositories.is_empty() {
        output::print_text("No repositories found.");
        return Ok(());
    }

    output::print_lines(&render(&repositories)?);
    Ok(())
}

/// One header line per repository followed by its fields as a nested tree.
/// Repositories are separated by an empty line.
pub fn render(repositories: &[Repository]) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for (index, repository) in repositories.iter().enumerate() {
        lines.push(format!("For repository '{}'", repository.name));

        if let Value::Object(fields) = serde_json::to_value(repository)? {
            for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != "name") {
                lines.extend(output::nested_lines(key, value, 2));
            }
        }

        if index + 1 < repositories.len() {
            lines.push(String::new());
        }
    }

    Ok(lines)
}
