//! Bean Converter
//!
//! (source 타입, target 타입) 쌍을 키로 하는 빈 변환 레지스트리입니다.
//! 기동 시 변환 함수를 한 번 수집/검증해 불변 맵을 만들고,
//! 이후 애플리케이션 코드는 그 맵을 통해 변환을 호출합니다.
//!
//! # Features
//!
//! - **컴포넌트 스캔**: `converter!` 매크로 + `inventory` 기반 정적 변환기 수집
//! - **인스턴스 변환기**: 설정을 가진 객체에 바인딩된 변환 메서드
//! - **1회 초기화**: 중복 초기화, 중복 변환기, 설정 충돌을 기동 시점에 거부
//! - **동시 조회**: `DashMap` 기반 읽기 경로
//! - **목록 변환**: 순차/병렬, `None` 제거/유지/에러 변형
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  BeanConverter  │ ← 단건/목록 변환 파사드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ConverterContext │ ← (source, target) → Handler
//! └─────────────────┘
//!          ▲
//!          │ initialize (1회)
//! ┌─────────────────┐
//! │    bootstrap    │ ← 설정 검증 + inventory 스캔 + 빈 목록
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bean_converter::config::ConverterProperties;
//! use bean_converter::core::{bootstrap, registry::ConverterContext};
//! use bean_converter::services::{BeanConverter, user_converter};
//!
//! let context = Arc::new(ConverterContext::new());
//! bootstrap::start(&context, &ConverterProperties::default(), user_converter::beans())?;
//!
//! let converter = BeanConverter::new(context);
//! let bo: UserBO = converter.convert(UserDO::new("A", 34, true))?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;

#[doc(hidden)]
pub use inventory;

pub use crate::config::ConverterProperties;
pub use crate::core::candidate::Candidate;
pub use crate::core::errors::{ConverterError, ConverterResult};
pub use crate::core::registry::ConverterContext;
pub use crate::services::BeanConverter;
