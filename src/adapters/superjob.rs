use crate::adapters::http::ApiClient;
use crate::config::SuperJobConfig;
use crate::domain::model::{RawVacancy, SearchQuery, VacancyPage};
use crate::domain::ports::VacancyProvider;
use crate::domain::services::catalogue::{self, CatalogueTree};
use crate::utils::error::{Result, SalaryError};
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const PROVIDER: &str = "SuperJob";
const APP_ID_HEADER: &str = "x-api-app-id";

#[derive(Debug, Deserialize)]
struct CatalogueNode {
    title: String,
    key: u64,
    #[serde(default)]
    positions: Vec<CatalogueNode>,
}

impl CatalogueTree for CatalogueNode {
    type Key = u64;

    fn title(&self) -> &str {
        &self.title
    }

    fn key(&self) -> u64 {
        self.key
    }

    fn children(&self) -> &[CatalogueNode] {
        &self.positions
    }
}

#[derive(Debug, Deserialize)]
struct VacancySearch {
    #[serde(default)]
    objects: Vec<Vacancy>,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    more: bool,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

impl From<Vacancy> for RawVacancy {
    fn from(vacancy: Vacancy) -> Self {
        RawVacancy {
            currency: vacancy.currency,
            lower: vacancy.payment_from,
            upper: vacancy.payment_to,
        }
    }
}

/// SuperJob 只接受 0 (全部)、1、3、7 天
pub fn period_code(period_days: u32) -> u32 {
    match period_days {
        d if d > 7 => 0,
        5..=7 => 7,
        3..=4 => 3,
        _ => 1,
    }
}

/// api.superjob.ru 客戶端，建立時就解析好目錄分類
pub struct SuperJobClient {
    api: ApiClient,
    catalogue_key: u64,
    currency: String,
}

impl SuperJobClient {
    /// 建立客戶端並以 `catalogue_title` 查出分類 key
    pub async fn connect(config: &SuperJobConfig) -> Result<Self> {
        let secret_key = validate_required_field("superjob.secret_key", &config.secret_key)?;
        let api = ApiClient::new(
            PROVIDER,
            &config.base_url,
            concat!("vacancy-salaries/", env!("CARGO_PKG_VERSION")),
            Duration::from_secs(config.timeout_seconds),
            &[(APP_ID_HEADER, secret_key.as_str())],
        )?;

        let keys = Self::fetch_category_keys(&api, &config.catalogue_title).await?;
        let catalogue_key = match keys.as_slice() {
            [] => {
                return Err(SalaryError::CategoryNotFound {
                    provider: PROVIDER.to_string(),
                    title: config.catalogue_title.clone(),
                })
            }
            [only] => *only,
            [first, ..] => {
                tracing::warn!(
                    "⚠️ {} categories match '{}': {:?}, using {}",
                    keys.len(),
                    config.catalogue_title,
                    keys,
                    first
                );
                *first
            }
        };
        tracing::info!(
            "{} catalogue '{}' resolved to key {}",
            PROVIDER,
            config.catalogue_title,
            catalogue_key
        );

        Ok(Self {
            api,
            catalogue_key,
            currency: config.currency.clone(),
        })
    }

    pub fn catalogue_key(&self) -> u64 {
        self.catalogue_key
    }

    /// 所有標題包含 `title_substring` 的分類 key
    pub async fn resolve_category(&self, title_substring: &str) -> Result<Vec<u64>> {
        Self::fetch_category_keys(&self.api, title_substring).await
    }

    async fn fetch_category_keys(api: &ApiClient, title_substring: &str) -> Result<Vec<u64>> {
        let roots: Vec<CatalogueNode> = api.get_json("catalogues/", &[]).await?;
        Ok(catalogue::find_keys(&roots, title_substring))
    }

    fn search_params(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        vec![
            ("keyword", query.text.clone()),
            ("town", query.area.clone()),
            ("catalogues", self.catalogue_key.to_string()),
            ("period", period_code(query.period_days).to_string()),
        ]
    }
}

#[async_trait]
impl VacancyProvider for SuperJobClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn target_currency(&self) -> &str {
        &self.currency
    }

    async fn search_count(&self, query: &SearchQuery) -> Result<u64> {
        tracing::info!(
            "{} period {} days mapped to code {}",
            PROVIDER,
            query.period_days,
            period_code(query.period_days)
        );

        let mut params = self.search_params(query);
        params.push(("count", "1".to_string()));
        params.push(("page", "0".to_string()));

        let search: VacancySearch = self.api.get_json("vacancies/", &params).await?;
        Ok(search.total)
    }

    async fn list_vacancies(
        &self,
        query: &SearchQuery,
        page: u32,
        page_size: u32,
    ) -> Result<VacancyPage> {
        let mut params = self.search_params(query);
        params.push(("count", page_size.to_string()));
        params.push(("page", page.to_string()));
        if query.salary_only {
            params.push(("no_agreement", "1".to_string()));
        }

        let search: VacancySearch = self.api.get_json("vacancies/", &params).await?;

        Ok(VacancyPage {
            items: search.objects.into_iter().map(RawVacancy::from).collect(),
            has_more: search.more,
        })
    }
}
