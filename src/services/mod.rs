//! 서비스 레이어 모듈
//!
//! 변환 컨텍스트를 사용하는 파사드와 사용자 모델 변환기를 포함합니다.
//!
//! - [`bean_converter`] - 단건/목록 변환 파사드
//! - [`user_converter`] - `UserDO`, `UserBO`, `UserVO` 간 변환기

pub mod bean_converter;
pub mod user_converter;

pub use bean_converter::BeanConverter;
