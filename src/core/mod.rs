//! # Core Framework Module
//!
//! 변환 컨텍스트의 핵심 기능을 제공하는 모듈입니다.
//! Spring 기반 bean converter starter의 역할을 Rust 타입 시스템 위에
//! 다시 구성한 것으로, 변환 함수의 타입 검사는 등록 시점에 한 번만 이루어집니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 변환 컨텍스트
//! - **ConverterContext**: (source, target) → Handler 맵, 1회 초기화 생명주기
//! - **DashMap 기반**: 원자적인 중복 검사, 잠금 없는 수준의 동시 조회
//!
//! ### [`scanner`] / [`bootstrap`] - 컴포넌트 스캔과 기동
//! - **inventory 기반**: `converter!` 매크로로 정적 변환기를 링크 타임에 수집
//! - **스캔 패키지**: 모듈 경로 접두사로 후보 필터링
//! - **기동 리스너**: 설정 검증 → 스캔 → 초기화를 한 번에 수행
//!
//! ### [`candidate`] / [`handler`] / [`condition`] - 데이터 모델
//! - **Candidate**: 등록 대기 중인 변환 함수 (정적/인스턴스)
//! - **Handler**: 바인딩된 변환 함수
//! - **Condition**: (source 타입, target 타입) 키
//!
//! ### [`errors`] - 통합 에러 처리
//! - **ConverterError**: thiserror 기반 에러 분류
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `@Converter` static 메서드 | `converter!(fn_name)` |
//! | `@Converter` 빈의 인스턴스 메서드 | `Candidate::method(Arc<O>, ..)` |
//! | `ConverterContext` (static 상태) | `Arc<ConverterContext>` |
//! | `ContextRefreshedEvent` 리스너 | `bootstrap::start` |
//! | `Method.invoke` | 등록 시 생성된 클로저 호출 |
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bean_converter::config::ConverterProperties;
//! use bean_converter::core::{bootstrap, registry::ConverterContext};
//! use bean_converter::services::{BeanConverter, user_converter};
//!
//! let context = Arc::new(ConverterContext::new());
//! bootstrap::start(&context, &ConverterProperties::from_env(), user_converter::beans())?;
//!
//! let converter = BeanConverter::new(Arc::clone(&context));
//! ```

pub mod bootstrap;
pub mod candidate;
pub mod condition;
pub mod errors;
pub mod handler;
pub mod registry;
pub mod scanner;
