//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 검증, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 목록 분리, 패키지 경로 매칭
//! - [`display_terminal`] - 초기화 요약 터미널 출력

pub mod string_utils;
pub mod display_terminal;
