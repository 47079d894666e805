use crate::config::SearchSettings;
use crate::domain::model::{LanguageStats, RawVacancy, Report, SearchQuery};
use crate::domain::ports::VacancyProvider;
use crate::domain::services::VacancyAggregator;
use crate::utils::error::Result;

/// 與 provider 無關的流程：查總數 → 分頁抓取 → 估算 → 彙總
pub struct SalaryPipeline<P: VacancyProvider> {
    provider: P,
    settings: SearchSettings,
    title: String,
}

impl<P: VacancyProvider> SalaryPipeline<P> {
    pub fn new(provider: P, settings: SearchSettings, title: impl Into<String>) -> Self {
        Self {
            provider,
            settings,
            title: title.into(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn max_pages(&self) -> u32 {
        let page_size = self.settings.page_size.max(1);
        self.settings.max_items.div_ceil(page_size)
    }

    /// 逐頁抓取直到沒有下一頁或達到 `max_items`，超過上限的部分直接丟棄
    pub async fn collect_vacancies(&self, query: &SearchQuery) -> Result<Vec<RawVacancy>> {
        let max_items = self.settings.max_items as usize;
        let mut vacancies = Vec::new();

        for page in 0..self.max_pages() {
            tracing::info!(
                "{}: language {}, page {}",
                self.provider.name(),
                query.text,
                page
            );
            let result = self
                .provider
                .list_vacancies(query, page, self.settings.page_size)
                .await?;

            let page_len = result.items.len();
            vacancies.extend(result.items);

            if !result.has_more || page_len == 0 || vacancies.len() >= max_items {
                break;
            }
        }

        if vacancies.len() > max_items {
            tracing::debug!(
                "Dropping {} vacancies beyond the cap of {}",
                vacancies.len() - max_items,
                max_items
            );
            vacancies.truncate(max_items);
        }

        Ok(vacancies)
    }

    pub async fn language_stats(&self, query: &SearchQuery) -> Result<LanguageStats> {
        let found = self.provider.search_count(query).await?;
        let vacancies = self.collect_vacancies(query).await?;

        let aggregator = VacancyAggregator::new(self.provider.target_currency());
        let stats = aggregator.aggregate(found, &vacancies);

        tracing::info!(
            "{}: {} found {}, processed {} of {}, average {:?}",
            self.provider.name(),
            query.text,
            stats.vacancies_found,
            stats.vacancies_processed,
            vacancies.len(),
            stats.average_salary
        );
        Ok(stats)
    }

    /// 依設定的語言順序建立報表，任何一次請求失敗就中止
    pub async fn build_report(&self) -> Result<Report> {
        let area = self.provider.resolve_area(&self.settings.area).await?;
        let mut report = Report::new(self.title.clone());

        for language in &self.settings.languages {
            let query = SearchQuery {
                text: language.clone(),
                area: area.clone(),
                period_days: self.settings.period_days,
                salary_only: true,
            };
            let stats = self.language_stats(&query).await?;
            report.push(language.clone(), stats);
        }

        Ok(report)
    }
}
