use crate::domain::model::{Report, SearchQuery, VacancyPage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 一個職缺網站的 API
#[async_trait]
pub trait VacancyProvider: Send + Sync {
    /// 報表標題用的名稱
    fn name(&self) -> &str;

    /// 只統計這個幣別的薪資
    fn target_currency(&self) -> &str;

    /// 把地區名稱轉成 provider 接受的值，預設原樣使用
    async fn resolve_area(&self, name: &str) -> Result<String> {
        Ok(name.to_string())
    }

    async fn search_count(&self, query: &SearchQuery) -> Result<u64>;

    async fn list_vacancies(
        &self,
        query: &SearchQuery,
        page: u32,
        page_size: u32,
    ) -> Result<VacancyPage>;
}

pub trait ReportPresenter: Send + Sync {
    fn present(&self, report: &Report) -> Result<()>;
}
