pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{AsciiTablePresenter, HeadHunterClient, JsonPresenter, SuperJobClient};
pub use config::SalaryConfig;
pub use core::{engine::ReportEngine, pipeline::SalaryPipeline};
pub use domain::model::{LanguageStats, RawVacancy, Report};
pub use domain::services::{estimate, VacancyAggregator};
pub use utils::error::{Result, SalaryError};
