use anyhow::Result;

use crate::cli::error::UsageError;
use crate::cli::output;
use crate::core::config::Config;

pub const TOKEN_ENV_VARS: [&str; 2] = ["REPOTOGGLE_TOKEN", "GITHUB_TOKEN"];
pub const TOKEN_PROMPT: &str = "Enter your GitHub access token: ";

/// Where the access token comes from. Prompting is deferred until a
/// command actually needs the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Fixed(String),
    Prompt,
}

impl TokenSource {
    pub fn detect(config: &Config) -> Self {
        Self::detect_with(|var| std::env::var(var).ok(), config)
    }

    fn detect_with(lookup: impl Fn(&str) -> Option<String>, config: &Config) -> Self {
        let from_env = TOKEN_ENV_VARS.iter().find_map(|var| {
            lookup(var)
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
        });

        if let Some(token) = from_env {
            return TokenSource::Fixed(token);
        }

        match config.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => TokenSource::Fixed(token.to_string()),
            _ => TokenSource::Prompt,
        }
    }

    pub fn resolve(&self) -> Result<String> {
        let token = match self {
            TokenSource::Fixed(token) => token.clone(),
            TokenSource::Prompt => output::prompt(TOKEN_PROMPT)?.trim().to_string(),
        };

        if token.is_empty() {
            return Err(UsageError::MissingToken.into());
        }
        Ok(token)
    }
}
