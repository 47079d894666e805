use crate::core::pipeline::SalaryPipeline;
use crate::domain::model::Report;
use crate::domain::ports::{ReportPresenter, VacancyProvider};
use crate::utils::error::Result;
use std::time::Instant;

pub struct ReportEngine<P: VacancyProvider, R: ReportPresenter> {
    pipeline: SalaryPipeline<P>,
    presenter: R,
}

impl<P: VacancyProvider, R: ReportPresenter> ReportEngine<P, R> {
    pub fn new(pipeline: SalaryPipeline<P>, presenter: R) -> Self {
        Self {
            pipeline,
            presenter,
        }
    }

    /// 報表完整建立後才輸出，中途失敗不會印出部分表格
    pub async fn run(&self) -> Result<Report> {
        let started = Instant::now();
        tracing::info!("🚀 Collecting salaries from {}", self.pipeline.provider().name());

        let report = self.pipeline.build_report().await?;

        tracing::info!(
            "✅ {} languages collected from {} in {:?}",
            report.len(),
            self.pipeline.provider().name(),
            started.elapsed()
        );

        self.presenter.present(&report)?;
        Ok(report)
    }
}
