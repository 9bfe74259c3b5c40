//! # 문자열 유틸리티
//!
//! 설정값과 변환기 이름 검증에 사용하는 문자열 유틸리티 함수들입니다.

use crate::core::errors::ConverterError;

/// 필수 문자열 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 `InvalidParameter`를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  my_app  ", "scan package").unwrap(), "my_app");
/// assert!(validate_required_string("   ", "scan package").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, ConverterError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConverterError::InvalidParameter(
            format!("{} can not be blank", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 콤마로 구분된 목록을 분리합니다
///
/// 각 항목의 공백을 제거하고 빈 항목은 버립니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(split_comma_list(" a , ,b"), vec!["a", "b"]);
/// ```
pub fn split_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter_map(|item| clean_optional_string(Some(item.to_string())))
        .collect()
}

/// 모듈 경로가 스캔 패키지에 속하는지 확인
///
/// `my_app`은 `my_app`과 `my_app::converters`를 포함하지만
/// `my_application`은 포함하지 않습니다.
pub fn is_in_package(module_path: &str, package: &str) -> bool {
    match module_path.strip_prefix(package) {
        Some("") => true,
        Some(rest) => rest.starts_with("::"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("  Hello  ", "name").unwrap(), "Hello");
        assert!(validate_required_string("   ", "name").is_err());
        assert!(validate_required_string("", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_split_comma_list() {
        assert_eq!(split_comma_list(" a , ,b"), vec!["a", "b"]);
        assert!(split_comma_list("").is_empty());
    }

    #[test]
    fn test_is_in_package() {
        assert!(is_in_package("my_app", "my_app"));
        assert!(is_in_package("my_app::converters::user", "my_app"));
        assert!(is_in_package("my_app::converters", "my_app::converters"));
        assert!(!is_in_package("my_application", "my_app"));
        assert!(!is_in_package("other::my_app", "my_app"));
    }
}
