pub mod config;
pub mod repository;
pub mod settings;
pub mod snapshot;

pub use settings::default_registry;
