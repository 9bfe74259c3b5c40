//! 변환 컨텍스트 설정 관리 모듈
//!
//! 스캔 패키지, 스캔 모드, strict 모드를 관리합니다.

use std::env;

use serde::{Deserialize, Serialize};

use crate::core::errors::{ConverterError, ConverterResult};
use crate::core::handler::ConverterKind;
use crate::utils::string_utils::{split_comma_list, validate_required_string};

/// 변환 컨텍스트 설정
///
/// # Environment Variables
///
/// | 변수 | 필드 | 기본값 |
/// |------|------|--------|
/// | `CONVERTER_ENABLED` | `enabled` | `true` |
/// | `CONVERTER_SCAN_PACKAGES` | `scan_packages` (콤마 구분) | 전체 |
/// | `CONVERTER_ONLY_SCAN_STATIC_METHOD` | `only_scan_static_method` | `false` |
/// | `CONVERTER_ONLY_SCAN_NON_STATIC_METHOD` | `only_scan_non_static_method` | `false` |
/// | `CONVERTER_STRICT_MODE` | `strict_mode` | `false` |
///
/// # Examples
///
/// ```bash
/// export CONVERTER_SCAN_PACKAGES="bean_converter::services,my_app::converters"
/// export CONVERTER_STRICT_MODE="true"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterProperties {
    /// 변환 컨텍스트 사용 여부. `false`이면 기동 시 초기화하지 않습니다.
    pub enabled: bool,
    /// 정적 변환기를 찾을 모듈 경로 접두사. 비어 있으면 전체를 스캔합니다.
    pub scan_packages: Vec<String>,
    /// 정적 변환기만 등록
    pub only_scan_static_method: bool,
    /// 인스턴스 변환기만 등록
    pub only_scan_non_static_method: bool,
    /// 등록된 변환기가 하나도 없으면 초기화 실패
    pub strict_mode: bool,
}

impl Default for ConverterProperties {
    fn default() -> Self {
        Self {
            enabled: true,
            scan_packages: Vec::new(),
            only_scan_static_method: false,
            only_scan_non_static_method: false,
            strict_mode: false,
        }
    }
}

impl ConverterProperties {
    /// 환경 변수에서 설정을 읽어옵니다
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정을 구성합니다
    ///
    /// 파싱할 수 없는 값은 에러 로그를 남기고 기본값을 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let properties = Self {
            enabled: parse_flag(&lookup, "CONVERTER_ENABLED", defaults.enabled),
            scan_packages: lookup("CONVERTER_SCAN_PACKAGES")
                .map(|value| split_comma_list(&value))
                .unwrap_or_default(),
            only_scan_static_method: parse_flag(
                &lookup,
                "CONVERTER_ONLY_SCAN_STATIC_METHOD",
                defaults.only_scan_static_method,
            ),
            only_scan_non_static_method: parse_flag(
                &lookup,
                "CONVERTER_ONLY_SCAN_NON_STATIC_METHOD",
                defaults.only_scan_non_static_method,
            ),
            strict_mode: parse_flag(&lookup, "CONVERTER_STRICT_MODE", defaults.strict_mode),
        };

        log::info!("Converter properties loaded: {:?}", properties);
        properties
    }

    /// JSON 문서에서 설정을 읽어옵니다
    ///
    /// 누락된 필드는 기본값을 사용합니다.
    pub fn from_json(json: &str) -> ConverterResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            ConverterError::InvalidConfiguration(format!("Failed to parse converter properties: {}", e))
        })
    }

    /// 설정값의 정합성을 검증합니다
    ///
    /// # Errors
    ///
    /// * `ConverterError::InvalidConfiguration` - 두 스캔 제한 옵션을 동시에 지정
    /// * `ConverterError::InvalidParameter` - 공백뿐인 스캔 패키지
    pub fn validate(&self) -> ConverterResult<()> {
        if self.only_scan_static_method && self.only_scan_non_static_method {
            return Err(ConverterError::InvalidConfiguration(
                "Only scanning static methods or scanning only non static methods can only select one"
                    .to_string(),
            ));
        }

        for package in &self.scan_packages {
            validate_required_string(package, "scan package")?;
        }
        Ok(())
    }

    pub fn scans_static(&self) -> bool {
        !self.only_scan_non_static_method
    }

    pub fn scans_instance(&self) -> bool {
        !self.only_scan_static_method
    }

    /// 스캔 모드가 해당 종류의 변환기를 허용하는지 확인
    pub fn accepts(&self, kind: ConverterKind) -> bool {
        match kind {
            ConverterKind::Static => self.scans_static(),
            ConverterKind::Instance => self.scans_instance(),
        }
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => true,
            "false" | "0" | "no" | "off" => false,
            other => {
                log::error!("{} 파싱 실패: '{}'. 기본값 {} 사용", key, other, default);
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let properties = ConverterProperties::default();
        assert!(properties.enabled);
        assert!(properties.scan_packages.is_empty());
        assert!(properties.scans_static());
        assert!(properties.scans_instance());
        assert!(properties.validate().is_ok());
    }

    #[test]
    fn test_from_lookup() {
        let properties = ConverterProperties::from_lookup(lookup_from(&[
            ("CONVERTER_SCAN_PACKAGES", " my_app::converters , ,other::pkg"),
            ("CONVERTER_ONLY_SCAN_STATIC_METHOD", "TRUE"),
            ("CONVERTER_STRICT_MODE", "1"),
        ]));

        assert_eq!(properties.scan_packages, vec!["my_app::converters", "other::pkg"]);
        assert!(properties.only_scan_static_method);
        assert!(!properties.only_scan_non_static_method);
        assert!(properties.strict_mode);
        assert!(properties.enabled);
    }

    #[test]
    fn test_from_lookup_invalid_flag_uses_default() {
        let properties = ConverterProperties::from_lookup(lookup_from(&[
            ("CONVERTER_ENABLED", "maybe"),
            ("CONVERTER_STRICT_MODE", "definitely"),
        ]));
        assert!(properties.enabled);
        assert!(!properties.strict_mode);
    }

    #[test]
    fn test_validate_conflicting_flags() {
        let properties = ConverterProperties {
            only_scan_static_method: true,
            only_scan_non_static_method: true,
            ..Default::default()
        };
        assert!(matches!(
            properties.validate(),
            Err(ConverterError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_blank_package() {
        let properties = ConverterProperties {
            scan_packages: vec!["my_app".to_string(), "   ".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            properties.validate(),
            Err(ConverterError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_accepts_by_scan_mode() {
        let only_static = ConverterProperties { only_scan_static_method: true, ..Default::default() };
        assert!(only_static.accepts(ConverterKind::Static));
        assert!(!only_static.accepts(ConverterKind::Instance));

        let only_instance =
            ConverterProperties { only_scan_non_static_method: true, ..Default::default() };
        assert!(!only_instance.accepts(ConverterKind::Static));
        assert!(only_instance.accepts(ConverterKind::Instance));
    }

    #[test]
    fn test_from_json() {
        let properties =
            ConverterProperties::from_json(r#"{"scan_packages": ["my_app"], "strict_mode": true}"#)
                .unwrap();
        assert_eq!(properties.scan_packages, vec!["my_app"]);
        assert!(properties.strict_mode);
        assert!(properties.enabled);

        assert!(matches!(
            ConverterProperties::from_json("{not json"),
            Err(ConverterError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let properties = ConverterProperties {
            scan_packages: vec!["a::b".to_string()],
            only_scan_non_static_method: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&properties).unwrap();
        assert_eq!(ConverterProperties::from_json(&json).unwrap(), properties);
    }
}
