use crate::adapters::http::ApiClient;
use crate::config::HeadHunterConfig;
use crate::domain::model::{RawVacancy, SearchQuery, VacancyPage};
use crate::domain::ports::VacancyProvider;
use crate::utils::error::{Result, SalaryError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const PROVIDER: &str = "HeadHunter";

#[derive(Debug, Deserialize)]
struct AreaSuggestions {
    #[serde(default)]
    items: Vec<AreaSuggestion>,
}

#[derive(Debug, Deserialize)]
struct AreaSuggestion {
    id: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct VacancySearch {
    found: u64,
    #[serde(default)]
    page: u32,
    #[serde(default)]
    pages: u32,
    #[serde(default)]
    items: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl From<Vacancy> for RawVacancy {
    fn from(vacancy: Vacancy) -> Self {
        match vacancy.salary {
            Some(salary) => RawVacancy {
                currency: salary.currency,
                lower: salary.from,
                upper: salary.to,
            },
            None => RawVacancy::default(),
        }
    }
}

/// api.hh.ru 客戶端
pub struct HeadHunterClient {
    api: ApiClient,
    profession: String,
    currency: String,
}

impl HeadHunterClient {
    pub fn new(config: &HeadHunterConfig) -> Result<Self> {
        let api = ApiClient::new(
            PROVIDER,
            &config.base_url,
            &config.user_agent,
            Duration::from_secs(config.timeout_seconds),
            &[],
        )?;

        Ok(Self {
            api,
            profession: config.profession.clone(),
            currency: config.currency.clone(),
        })
    }

    fn query_text(&self, query: &SearchQuery) -> String {
        if self.profession.trim().is_empty() {
            query.text.clone()
        } else {
            format!("{} {}", self.profession, query.text)
        }
    }

    fn search_params(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        vec![
            ("text", self.query_text(query)),
            ("area", query.area.clone()),
            ("period", query.period_days.to_string()),
        ]
    }
}

#[async_trait]
impl VacancyProvider for HeadHunterClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn target_currency(&self) -> &str {
        &self.currency
    }

    /// 地區 id 可能會變動，每次執行都重新查詢
    async fn resolve_area(&self, name: &str) -> Result<String> {
        let suggestions: AreaSuggestions = self
            .api
            .get_json("suggests/areas", &[("text", name.to_string())])
            .await?;

        let area = suggestions
            .items
            .into_iter()
            .next()
            .ok_or_else(|| SalaryError::AreaNotFound {
                provider: PROVIDER.to_string(),
                name: name.to_string(),
            })?;

        tracing::info!("{} area '{}' resolved to {} ({})", PROVIDER, name, area.id, area.text);
        Ok(area.id)
    }

    async fn search_count(&self, query: &SearchQuery) -> Result<u64> {
        let mut params = self.search_params(query);
        params.push(("per_page", "1".to_string()));

        let search: VacancySearch = self.api.get_json("vacancies", &params).await?;
        Ok(search.found)
    }

    async fn list_vacancies(
        &self,
        query: &SearchQuery,
        page: u32,
        page_size: u32,
    ) -> Result<VacancyPage> {
        let mut params = self.search_params(query);
        params.push(("per_page", page_size.to_string()));
        params.push(("page", page.to_string()));
        if query.salary_only {
            params.push(("only_with_salary", "true".to_string()));
        }

        let search: VacancySearch = self.api.get_json("vacancies", &params).await?;
        let has_more = search.page + 1 < search.pages;

        Ok(VacancyPage {
            items: search.items.into_iter().map(RawVacancy::from).collect(),
            has_more,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_salary_becomes_empty_vacancy() {
        let payload = serde_json::json!({
            "found": 3,
            "page": 0,
            "pages": 1,
            "items": [
                {"id": "1", "salary": null},
                {"id": "2", "salary": {"from": 100000, "to": null, "currency": "RUR", "gross": true}},
                {"id": "3"}
            ]
        });

        let search: VacancySearch = serde_json::from_value(payload).unwrap();
        let vacancies: Vec<RawVacancy> = search.items.into_iter().map(RawVacancy::from).collect();

        assert_eq!(vacancies[0], RawVacancy::default());
        assert_eq!(vacancies[1], RawVacancy::new(Some("RUR"), Some(100000.0), None));
        assert_eq!(vacancies[2], RawVacancy::default());
    }

    #[test]
    fn test_query_text_prefixes_profession() {
        let client = HeadHunterClient::new(&HeadHunterConfig::default()).unwrap();
        let query = SearchQuery {
            text: "Python".to_string(),
            area: "1".to_string(),
            period_days: 30,
            salary_only: true,
        };
        assert_eq!(client.query_text(&query), "программист Python");
        assert_eq!(client.target_currency(), "RUR");
    }
}
