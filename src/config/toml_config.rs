use crate::utils::error::{Result, SalaryError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SECRET_KEY_ENV: &str = "SJ_SECRET_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryConfig {
    pub search: SearchSettings,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

/// 所有 provider 共用的搜尋條件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub area: String,
    pub period_days: u32,
    pub languages: Vec<String>,
    /// 每個語言最多抓取的職缺數
    pub max_items: u32,
    pub page_size: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            area: "Москва".to_string(),
            period_days: 30,
            languages: [
                "JavaScript",
                "Python",
                "Java",
                "TypeScript",
                "C#",
                "PHP",
                "C++",
                "Shell",
                "C",
                "Ruby",
            ]
            .iter()
            .map(|language| language.to_string())
            .collect(),
            max_items: 2000,
            page_size: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub enabled: bool,
    pub base_url: String,
    /// 搜尋字串前綴，實際查詢為 "<profession> <language>"
    pub profession: String,
    pub currency: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub title: Option<String>,
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.hh.ru".to_string(),
            profession: "программист".to_string(),
            currency: "RUR".to_string(),
            user_agent: concat!("vacancy-salaries/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_seconds: 30,
            title: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub enabled: bool,
    pub base_url: String,
    pub catalogue_title: String,
    pub currency: String,
    pub secret_key: Option<String>,
    pub timeout_seconds: u64,
    pub title: Option<String>,
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.superjob.ru/2.0".to_string(),
            catalogue_title: "Разработка, программирование".to_string(),
            currency: "rub".to_string(),
            secret_key: None,
            timeout_seconds: 30,
            title: None,
        }
    }
}

impl SalaryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SalaryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SalaryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SJ_SECRET_KEY})，找不到的保留原字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SalaryError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 未設定或仍是 `${...}` 佔位字串時，改用環境變數 SJ_SECRET_KEY
    pub fn apply_env(&mut self) {
        let unresolved = match &self.superjob.secret_key {
            None => true,
            Some(key) => key.trim().is_empty() || key.starts_with("${"),
        };
        if unresolved {
            self.superjob.secret_key = std::env::var(SECRET_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty());
        }
    }

    pub fn headhunter_title(&self) -> String {
        self.headhunter
            .title
            .clone()
            .unwrap_or_else(|| format!("HeadHunter {}", self.search.area))
    }

    pub fn superjob_title(&self) -> String {
        self.superjob
            .title
            .clone()
            .unwrap_or_else(|| format!("SuperJob {}", self.search.area))
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("search.area", &self.search.area)?;
        validation::validate_range("search.period_days", self.search.period_days, 1, 30)?;
        validation::validate_languages("search.languages", &self.search.languages)?;
        validation::validate_positive_number("search.max_items", self.search.max_items as usize, 1)?;
        validation::validate_range("search.page_size", self.search.page_size, 1, 100)?;

        if !self.headhunter.enabled && !self.superjob.enabled {
            return Err(SalaryError::ConfigError {
                message: "At least one provider must be enabled".to_string(),
            });
        }

        if self.headhunter.enabled {
            validation::validate_url("headhunter.base_url", &self.headhunter.base_url)?;
            validation::validate_non_empty_string("headhunter.currency", &self.headhunter.currency)?;
            validation::validate_non_empty_string(
                "headhunter.user_agent",
                &self.headhunter.user_agent,
            )?;
        }

        if self.superjob.enabled {
            validation::validate_url("superjob.base_url", &self.superjob.base_url)?;
            validation::validate_non_empty_string("superjob.currency", &self.superjob.currency)?;
            validation::validate_non_empty_string(
                "superjob.catalogue_title",
                &self.superjob.catalogue_title,
            )?;
            validation::validate_required_field("superjob.secret_key", &self.superjob.secret_key)?;
        }

        Ok(())
    }
}

impl Validate for SalaryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_moscow_programmer_search() {
        let config = SalaryConfig::from_toml_str("").unwrap();

        assert_eq!(config.search.area, "Москва");
        assert_eq!(config.search.period_days, 30);
        assert_eq!(config.search.languages.len(), 10);
        assert_eq!(config.search.languages[0], "JavaScript");
        assert_eq!(config.search.max_items, 2000);
        assert_eq!(config.search.page_size, 100);
        assert_eq!(config.headhunter.currency, "RUR");
        assert_eq!(config.superjob.currency, "rub");
        assert_eq!(config.headhunter_title(), "HeadHunter Москва");
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
[search]
area = "Санкт-Петербург"
languages = ["Rust", "Go"]
period_days = 7

[superjob]
enabled = false
title = "SJ"
"#;

        let config = SalaryConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.search.area, "Санкт-Петербург");
        assert_eq!(config.search.languages, vec!["Rust", "Go"]);
        assert_eq!(config.search.max_items, 2000);
        assert!(!config.superjob.enabled);
        assert_eq!(config.superjob_title(), "SJ");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VACANCY_TEST_SJ_KEY", "v3.r.secret");

        let toml_content = r#"
[superjob]
secret_key = "${VACANCY_TEST_SJ_KEY}"
"#;

        let config = SalaryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.superjob.secret_key.as_deref(), Some("v3.r.secret"));

        std::env::remove_var("VACANCY_TEST_SJ_KEY");
    }

    #[test]
    fn test_superjob_requires_secret_key() {
        let toml_content = r#"
[superjob]
secret_key = "${VACANCY_TEST_UNSET_KEY}"
"#;
        let mut config = SalaryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.superjob.secret_key.as_deref(),
            Some("${VACANCY_TEST_UNSET_KEY}")
        );

        config.superjob.secret_key = None;
        assert!(matches!(
            config.validate(),
            Err(SalaryError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let invalid = [
            "[headhunter]\nbase_url = \"invalid-url\"\n[superjob]\nenabled = false",
            "[search]\npage_size = 500\n[superjob]\nenabled = false",
            "[search]\nlanguages = []\n[superjob]\nenabled = false",
            "[search]\nperiod_days = 0\n[superjob]\nenabled = false",
            "[headhunter]\nenabled = false\n[superjob]\nenabled = false",
        ];

        for toml_content in invalid {
            let config = SalaryConfig::from_toml_str(toml_content).unwrap();
            assert!(config.validate().is_err(), "should reject: {}", toml_content);
        }
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[search]
area = "Казань"
max_items = 300
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SalaryConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.search.area, "Казань");
        assert_eq!(config.search.max_items, 300);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = SalaryConfig::from_toml_str("[search\narea = ");
        assert!(matches!(result, Err(SalaryError::ConfigError { .. })));
    }
}
