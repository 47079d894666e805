use crate::utils::error::{Result, SalaryError};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SalaryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SalaryError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 語言清單不可為空，也不可重複 (報表以語言為列鍵)
pub fn validate_languages(field_name: &str, languages: &[String]) -> Result<()> {
    if languages.is_empty() {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one language is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for language in languages {
        validate_non_empty_string(field_name, language)?;
        if !seen.insert(language.as_str()) {
            return Err(SalaryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: language.clone(),
                reason: "Duplicate language".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SalaryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("headhunter.base_url", "https://api.hh.ru").is_ok());
        assert!(validate_url("headhunter.base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("headhunter.base_url", "").is_err());
        assert!(validate_url("headhunter.base_url", "invalid-url").is_err());
        assert!(validate_url("headhunter.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("search.max_items", 100, 1).is_ok());
        assert!(validate_positive_number("search.max_items", 0, 1).is_err());
    }

    #[test]
    fn test_validate_languages() {
        let ok = vec!["Python".to_string(), "C".to_string(), "C++".to_string()];
        assert!(validate_languages("search.languages", &ok).is_ok());
        assert!(validate_languages("search.languages", &[]).is_err());

        let duplicated = vec!["Python".to_string(), "Python".to_string()];
        assert!(validate_languages("search.languages", &duplicated).is_err());

        let blank = vec!["  ".to_string()];
        assert!(validate_languages("search.languages", &blank).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("superjob.secret_key", &missing),
            Err(SalaryError::MissingConfigError { .. })
        ));
        let present = Some("key".to_string());
        assert_eq!(validate_required_field("superjob.secret_key", &present).unwrap(), "key");
    }
}
