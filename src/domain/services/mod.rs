pub mod aggregator;
pub mod catalogue;
pub mod estimator;

pub use aggregator::VacancyAggregator;
pub use catalogue::{find_keys, CatalogueTree};
pub use estimator::estimate;
