pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{LanguageStats, RawVacancy, Report, SearchQuery, VacancyPage};
pub use crate::domain::ports::{ReportPresenter, VacancyProvider};
pub use crate::utils::error::Result;
