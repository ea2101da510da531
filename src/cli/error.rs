use crate::api::ApiError;

/// Mistakes in how the tool was invoked.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("Invalid command. To check the list of available commands, run 'help'")]
    InvalidCommand,

    #[error("A subcommand was not passed as expected. To check the list of available subcommands for the command entered, run 'help'.")]
    InvalidSubcommand,

    #[error("Flags were not passed as expected. To check the list of suitable flags for the command entered, run 'help'")]
    InvalidFlags,

    #[error("Invalid repository name '{0}'. Repository names may only contain letters, digits, '.', '-' and '_'.")]
    InvalidRepositoryName(String),

    #[error("An access token is required. Set REPOTOGGLE_TOKEN or GITHUB_TOKEN, or enter one when prompted.")]
    MissingToken,
}

/// Message shown to the user before exiting with status 1.
pub fn user_message(err: &anyhow::Error) -> String {
    if let Some(usage) = err.downcast_ref::<UsageError>() {
        return usage.to_string();
    }

    match err.downcast_ref::<ApiError>() {
        Some(ApiError::Status { .. }) => {
            format!("HTTP request was not successful:\n {err:#}")
        }
        Some(ApiError::Connection(_)) => format!(
            "There was a problem establishing a connection with the GitHub API. \
             This may happen due to a network problem or server-side issue:\n {err:#}"
        ),
        _ => format!("An unexpected error occurred: {err:#}"),
    }
}
