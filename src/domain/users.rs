//! User Bean Models
//!
//! 계층별 사용자 모델입니다. 계층 간 이동은 변환 컨텍스트에 등록된
//! 변환기를 통해서만 이루어집니다.
//!
//! | 모델 | 계층 |
//! |------|------|
//! | `UserDO` | 데이터 액세스 (저장 형태) |
//! | `UserBO` | 비즈니스 로직 |
//! | `UserVO` | 화면 표시 |

use serde::{Deserialize, Serialize};

/// 데이터 액세스 계층 사용자
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDO {
    /// 사용자 이름
    pub name: String,
    /// 나이
    pub age: u32,
    /// 남성 여부
    pub is_man: bool,
}

impl UserDO {
    pub fn new(name: impl Into<String>, age: u32, is_man: bool) -> Self {
        Self { name: name.into(), age, is_man }
    }
}

/// 비즈니스 계층 사용자
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBO {
    pub name: String,
    pub age: u32,
    pub is_man: bool,
}

impl UserBO {
    pub fn new(name: impl Into<String>, age: u32, is_man: bool) -> Self {
        Self { name: name.into(), age, is_man }
    }
}

/// 화면 표시용 사용자
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserVO {
    /// 호칭이 붙은 표시 이름
    pub display_name: String,
    pub age: u32,
}
