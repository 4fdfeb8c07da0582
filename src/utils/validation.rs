use crate::utils::error::{FireError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FireError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => {
            match url.scheme() {
                "http" | "https" => Ok(()),
                scheme => Err(FireError::InvalidConfigValue {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: format!("Unsupported URL scheme: {}", scheme),
                }),
            }
        }
        Err(e) => Err(FireError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(FireError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 解析使用者輸入的服務編號，僅接受 1..=count 的十進位整數
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let trimmed = input.trim();
    let invalid = || FireError::InvalidSelection {
        input: trimmed.to_string(),
        max: count,
    };

    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let number: usize = trimmed.parse().map_err(|_| invalid())?;
    if number < 1 || number > count {
        return Err(invalid());
    }

    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_url", "https://manage.24fire.de/api").is_ok());
        assert!(validate_url("api_url", "http://localhost:8080").is_ok());
        assert!(validate_url("api_url", "").is_err());
        assert!(validate_url("api_url", "invalid-url").is_err());
        assert!(validate_url("api_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_seconds", 15, 1).is_ok());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_parse_selection_accepts_numbers_in_range() {
        assert_eq!(parse_selection("1", 3).unwrap(), 1);
        assert_eq!(parse_selection("3", 3).unwrap(), 3);
        // 前後空白不影響判斷
        assert_eq!(parse_selection(" 2 ", 3).unwrap(), 2);
        // 前導零視為同一個數字
        assert_eq!(parse_selection("02", 3).unwrap(), 2);
    }

    #[test]
    fn test_parse_selection_rejects_out_of_range() {
        assert!(parse_selection("0", 3).is_err());
        assert!(parse_selection("4", 3).is_err());
        assert!(parse_selection("1", 0).is_err());
    }

    #[test]
    fn test_parse_selection_rejects_non_digits() {
        assert!(parse_selection("abc", 3).is_err());
        assert!(parse_selection("", 3).is_err());
        assert!(parse_selection("-1", 3).is_err());
        assert!(parse_selection("1.5", 3).is_err());
        // usize 溢位也是無效輸入
        assert!(parse_selection("99999999999999999999999", 3).is_err());
    }

    #[test]
    fn test_parse_selection_reports_input_and_max() {
        let err = parse_selection("9", 3).unwrap_err();
        match err {
            FireError::InvalidSelection { input, max } => {
                assert_eq!(input, "9");
                assert_eq!(max, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
