//! # Configuration Module
//!
//! 변환 컨텍스트의 설정 관리를 담당하는 모듈입니다.
//! Spring Boot의 `@ConfigurationProperties`와 유사하게, 환경 변수나
//! JSON 문서로부터 구조체 기반 설정을 구성합니다.
//!
//! ## 모듈 구성
//!
//! - [`converter_config`] - 스캔 패키지, 스캔 모드, strict 모드 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use bean_converter::config::ConverterProperties;
//!
//! // 환경 변수 기반
//! let properties = ConverterProperties::from_env();
//!
//! // JSON 기반
//! let properties = ConverterProperties::from_json(r#"{"strict_mode": true}"#)?;
//! properties.validate()?;
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@ConfigurationProperties` | `ConverterProperties` |
//! | `application.yml` | `.env` 파일 / JSON |
//! | `@EnableConverter` | `enabled` 플래그 |

pub mod converter_config;

pub use converter_config::*;
