//! # Converter Error Handling
//!
//! 변환 컨텍스트 전반에서 사용하는 통합 에러 타입입니다.
//! 초기화 실패는 애플리케이션 기동을 중단시키고, 조회/변환 실패는
//! 호출한 비즈니스 로직으로 그대로 전파됩니다. 내부에서 재시도하거나
//! 복구하는 경로는 없습니다.
//!
//! ## 에러 분류
//!
//! | 단계 | ConverterError | 발생 시나리오 |
//! |------|----------------|---------------|
//! | 초기화 | `InvalidConfiguration` | 상호 배타적인 스캔 옵션 동시 지정 |
//! | 초기화 | `AlreadyInitialized` | `initialize` 중복 호출 |
//! | 초기화 | `NonUniqueConverter` | 같은 (source, target) 쌍에 변환기 두 개 |
//! | 초기화/조회 | `NoConverter` | strict 모드에서 변환기 0개, 또는 매칭 실패 |
//! | 조회 | `ConverterDisabled` | 초기화 전 조회 |
//! | 변환 | `ConvertFailed` | 변환 함수 자체의 실패, 패닉, 결과 타입 불일치 |
//! | 공통 | `InvalidParameter` | 필수 인자 누락 (빈 패키지명, 빈 변환기 이름) |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use bean_converter::core::errors::{ConverterError, ConverterResult};
//!
//! fn load_user(converter: &BeanConverter, user: UserDO) -> ConverterResult<UserBO> {
//!     converter.convert(user)
//! }
//!
//! match load_user(&converter, user) {
//!     Err(ConverterError::NoConverter(msg)) => log::warn!("{}", msg),
//!     Err(e) => return Err(e),
//!     Ok(bo) => { /* ... */ }
//! }
//! ```

use std::error::Error as StdError;

use thiserror::Error;

/// 변환 함수가 돌려주는 원본 에러 타입
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// 변환 컨텍스트 결과 타입
pub type ConverterResult<T> = Result<T, ConverterError>;

/// 변환 컨텍스트 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현합니다. `ConvertFailed`를 제외한
/// 모든 변형은 설정 또는 프로그래밍 오류이며 재시도 대상이 아닙니다.
#[derive(Error, Debug)]
pub enum ConverterError {
    /// 설정값 충돌
    ///
    /// `only_scan_static_method`와 `only_scan_non_static_method`는
    /// 하나만 선택할 수 있습니다.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// 이미 초기화된 컨텍스트를 다시 초기화하려는 시도
    #[error("Already initialized: {0}")]
    AlreadyInitialized(String),

    /// 같은 (source, target) 쌍에 두 개 이상의 변환기가 존재
    ///
    /// 덮어쓰지 않고 즉시 실패합니다. 메시지에 충돌한 두 변환기 이름이 포함됩니다.
    #[error("Non-unique converter: {0}")]
    NonUniqueConverter(String),

    /// 변환기를 찾을 수 없음
    ///
    /// # 발생 시나리오
    /// - strict 모드에서 초기화 결과가 비어 있음
    /// - 정확히 일치하는 (source, target) 쌍이 등록되지 않음
    #[error("No converter: {0}")]
    NoConverter(String),

    /// 초기화되지 않았거나 초기화에 실패한 컨텍스트에 대한 조회
    #[error("Converter disabled: {0}")]
    ConverterDisabled(String),

    /// 변환 함수 호출 실패
    ///
    /// 변환 함수가 반환한 에러, 호출 중 발생한 패닉, 결과 타입 불일치를
    /// 모두 감쌉니다. 원본 에러는 `source()`로 추적할 수 있습니다.
    #[error("Convert failed: {message}")]
    ConvertFailed {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// 필수 인자 누락
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ConverterError {
    /// 원본 에러를 감싸는 `ConvertFailed` 생성
    pub fn convert_failed(message: impl Into<String>, source: BoxError) -> Self {
        ConverterError::ConvertFailed {
            message: message.into(),
            source: Some(source),
        }
    }

    /// 원본 에러 없는 `ConvertFailed` 생성 (패닉, 타입 불일치)
    pub fn convert_failed_msg(message: impl Into<String>) -> Self {
        ConverterError::ConvertFailed {
            message: message.into(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_messages() {
        let err = ConverterError::NoConverter("UserDO -> UserBO".to_string());
        assert_eq!(err.to_string(), "No converter: UserDO -> UserBO");

        let err = ConverterError::InvalidConfiguration("only one".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: only one");
    }

    #[test]
    fn test_convert_failed_keeps_source() {
        let cause: BoxError = "age overflow".into();
        let err = ConverterError::convert_failed("Call converter \"user_do_to_bo\" failed", cause);

        assert_eq!(err.to_string(), "Convert failed: Call converter \"user_do_to_bo\" failed");
        let source = err.source().expect("source should be kept");
        assert_eq!(source.to_string(), "age overflow");

        let err = ConverterError::convert_failed_msg("panicked");
        assert!(err.source().is_none());
    }
}
