use serde::{Deserialize, Serialize};

use crate::domain::services::estimator;

/// 單筆職缺的薪資欄位，各家 API 的格式在 adapter 內轉成這個形狀
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawVacancy {
    pub currency: Option<String>,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl RawVacancy {
    pub fn new(currency: Option<&str>, lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            currency: currency.map(str::to_string),
            lower,
            upper,
        }
    }

    pub fn estimate(&self, target_currency: &str) -> Option<f64> {
        estimator::estimate(
            self.currency.as_deref(),
            self.lower,
            self.upper,
            target_currency,
        )
    }
}

/// `average_salary == None` 表示沒有任何可估算的職缺
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: Option<u64>,
}

/// 傳給 provider 的查詢條件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub area: String,
    pub period_days: u32,
    pub salary_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyPage {
    pub items: Vec<RawVacancy>,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageRow {
    pub language: String,
    #[serde(flatten)]
    pub stats: LanguageStats,
}

/// 依呼叫端給的語言順序排列的報表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub rows: Vec<LanguageRow>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, language: impl Into<String>, stats: LanguageStats) {
        self.rows.push(LanguageRow {
            language: language.into(),
            stats,
        });
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.rows
            .iter()
            .find(|row| row.language == language)
            .map(|row| &row.stats)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.language.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStats)> {
        self.rows
            .iter()
            .map(|row| (row.language.as_str(), &row.stats))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
