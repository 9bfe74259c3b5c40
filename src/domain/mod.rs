//! # Domain Module
//!
//! 변환 대상이 되는 빈 모델을 정의합니다.
//!
//! - [`users`] - 계층별 사용자 모델 (`UserDO`, `UserBO`, `UserVO`)

pub mod users;
