use crate::utils::error::{Result, SalaryError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// 共用的 JSON GET 客戶端，非 2xx 回應一律視為錯誤
#[derive(Debug, Clone)]
pub struct ApiClient {
    provider: String,
    base_url: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(
        provider: &str,
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
        headers: &[(&'static str, &str)],
    ) -> Result<Self> {
        // 沒有結尾斜線時 Url::join 會吃掉最後一段路徑
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };

        let mut default_headers = HeaderMap::new();
        for &(name, value) in headers {
            let value = HeaderValue::from_str(value).map_err(|e| SalaryError::InvalidConfigValueError {
                field: format!("{} header {}", provider, name),
                value: String::new(),
                reason: e.to_string(),
            })?;
            default_headers.insert(HeaderName::from_static(name), value);
        }

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            provider: provider.to_string(),
            base_url,
            client,
        })
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!("{} GET {} {:?}", self.provider, url, query);

        let response = self.client.get(url).query(query).send().await?;
        tracing::debug!("{} response status: {}", self.provider, response.status());

        let response = response.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}
