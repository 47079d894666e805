use crate::domain::model::{LanguageStats, RawVacancy};

/// 將一個語言的職缺折疊成統計資料
#[derive(Debug, Clone)]
pub struct VacancyAggregator {
    target_currency: String,
}

impl VacancyAggregator {
    pub fn new(target_currency: impl Into<String>) -> Self {
        Self {
            target_currency: target_currency.into(),
        }
    }

    pub fn target_currency(&self) -> &str {
        &self.target_currency
    }

    /// `found_count` 由呼叫端提供 (搜尋端點的總數)，與 `vacancies` 長度無關。
    /// 不去除重複職缺。
    pub fn aggregate(&self, found_count: u64, vacancies: &[RawVacancy]) -> LanguageStats {
        let (processed, sum) = vacancies
            .iter()
            .filter_map(|vacancy| vacancy.estimate(&self.target_currency))
            .fold((0u64, 0f64), |(count, sum), salary| (count + 1, sum + salary));

        let average_salary = if processed > 0 {
            Some((sum / processed as f64) as u64)
        } else {
            None
        };

        tracing::debug!(
            "Aggregated {} of {} vacancies, average {:?}",
            processed,
            vacancies.len(),
            average_salary
        );

        LanguageStats {
            vacancies_found: found_count,
            vacancies_processed: processed,
            average_salary,
        }
    }
}
