pub mod alter;
pub mod help;
pub mod status;
pub mod update;

use crate::api::{GitHubClient, RepositoryHost};
use crate::cli::token::TokenSource;
use crate::core::config::Config;
use crate::core::default_registry;
use crate::core::settings::SettingRegistry;
use crate::core::snapshot::SnapshotStore;

/// Everything a command handler needs.
pub struct Context {
    pub host: Box<dyn RepositoryHost>,
    pub store: SnapshotStore,
    pub tokens: TokenSource,
    pub settings: SettingRegistry,
}

impl Context {
    pub fn from_config(config: &Config) -> Self {
        let data_dir = config.data_dir();
        let client = GitHubClient::new(config.api_url(), config.per_page());
        tracing::debug!(
            "api {} with snapshot in {}",
            client.base_url(),
            data_dir.display()
        );

        Self {
            host: Box::new(client),
            store: SnapshotStore::in_dir(&data_dir),
            tokens: TokenSource::detect(config),
            settings: default_registry(),
        }
    }
}
