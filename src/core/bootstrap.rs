//! 기동 시 변환 컨텍스트 초기화
//!
//! 애플리케이션 조립 지점이 모든 빈을 만든 뒤 한 번 호출합니다.
//! Spring의 `ContextRefreshedEvent` 리스너에 해당합니다.

use crate::config::ConverterProperties;
use crate::core::candidate::Candidate;
use crate::core::errors::{ConverterError, ConverterResult};
use crate::core::registry::{ConverterContext, InitializationSummary};
use crate::core::scanner;

/// 정적 변환기를 스캔하고 인스턴스 변환기와 합쳐 컨텍스트를 초기화합니다
///
/// # Arguments
///
/// * `context` - 초기화할 변환 컨텍스트
/// * `properties` - 변환 컨텍스트 설정
/// * `beans` - 애플리케이션이 생성한 인스턴스 변환기
///
/// # Returns
///
/// * `Ok(Some(summary))` - 초기화 완료
/// * `Ok(None)` - `enabled = false`, 컨텍스트는 비활성 상태로 남음
///
/// # Errors
///
/// * `ConverterError::AlreadyInitialized` - 이미 초기화를 시도한 컨텍스트
/// * 설정 검증, 스캔, [`ConverterContext::initialize`]의 모든 에러
///
/// 여기서 반환된 에러는 종류와 관계없이 기동 실패입니다.
///
/// # Examples
///
/// ```rust,ignore
/// let context = Arc::new(ConverterContext::new());
/// let properties = ConverterProperties::from_env();
/// bootstrap::start(&context, &properties, user_converter::beans())?;
/// ```
pub fn start(
    context: &ConverterContext,
    properties: &ConverterProperties,
    beans: Vec<Candidate>,
) -> ConverterResult<Option<InitializationSummary>> {
    if context.is_initialized() {
        return Err(ConverterError::AlreadyInitialized(
            "It is not allowed to start the conversion context twice".to_string(),
        ));
    }

    if !properties.enabled {
        log::info!("Converter is not enabled, conversion context stays disabled");
        return Ok(None);
    }

    // 스캔 전에 설정 충돌부터 확인
    properties.validate()?;

    let mut candidates = if properties.scans_static() {
        scanner::collect_static_candidates(&properties.scan_packages)?
    } else {
        Vec::new()
    };
    candidates.extend(beans);

    context.initialize(properties, candidates).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::LifecycleState;
    use crate::domain::users::{UserBO, UserDO, UserVO};
    use crate::services::user_converter;

    const SERVICES: &str = "bean_converter::services";

    fn properties() -> ConverterProperties {
        ConverterProperties {
            scan_packages: vec![SERVICES.to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_start_registers_static_and_instance_converters() {
        let context = ConverterContext::new();
        let summary = start(&context, &properties(), user_converter::beans())
            .unwrap()
            .unwrap();

        assert_eq!(summary.static_count, 2);
        assert_eq!(summary.instance_count, 1);
        assert!(context.contains::<UserDO, UserBO>());
        assert!(context.contains::<UserBO, UserDO>());
        assert!(context.contains::<UserBO, UserVO>());
    }

    #[test]
    fn test_start_disabled_leaves_context_disabled() {
        let context = ConverterContext::new();
        let disabled = ConverterProperties { enabled: false, ..properties() };

        assert!(start(&context, &disabled, user_converter::beans()).unwrap().is_none());
        assert!(!context.is_enabled());
        assert!(matches!(
            context.lookup::<UserDO, UserBO>(),
            Err(ConverterError::ConverterDisabled(_))
        ));
    }

    #[test]
    fn test_start_rejects_conflicting_flags_before_scanning() {
        let context = ConverterContext::new();
        let conflicting = ConverterProperties {
            only_scan_static_method: true,
            only_scan_non_static_method: true,
            ..properties()
        };

        assert!(matches!(
            start(&context, &conflicting, Vec::new()),
            Err(ConverterError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_start_only_instance_skips_scanning() {
        let context = ConverterContext::new();
        let only_instance = ConverterProperties { only_scan_non_static_method: true, ..properties() };

        let summary = start(&context, &only_instance, user_converter::beans())
            .unwrap()
            .unwrap();
        assert_eq!(summary.static_count, 0);
        assert_eq!(summary.instance_count, 1);
        assert!(!context.contains::<UserDO, UserBO>());
    }

    #[test]
    fn test_start_twice_fails() {
        let context = ConverterContext::new();
        start(&context, &properties(), Vec::new()).unwrap();

        assert!(matches!(
            start(&context, &properties(), Vec::new()),
            Err(ConverterError::AlreadyInitialized(_))
        ));
    }

    #[test]
    fn test_start_strict_mode_with_empty_package() {
        let context = ConverterContext::new();
        let strict = ConverterProperties {
            scan_packages: vec!["no_such_crate".to_string()],
            strict_mode: true,
            ..Default::default()
        };

        assert!(matches!(
            start(&context, &strict, Vec::new()),
            Err(ConverterError::NoConverter(_))
        ));
        assert_eq!(context.state(), LifecycleState::Failed);
        assert!(!context.is_enabled());
    }
}
