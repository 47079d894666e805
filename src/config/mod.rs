#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, OutputFormat, ProviderChoice};
pub use toml_config::{HeadHunterConfig, SalaryConfig, SearchSettings, SuperJobConfig};
