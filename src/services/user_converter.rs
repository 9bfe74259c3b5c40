//! 사용자 모델 변환기
//!
//! `UserDO ⇄ UserBO`는 정적 변환기로 inventory에 제출되고,
//! `UserBO → UserVO`는 호칭 설정을 가진 인스턴스 변환기로 등록됩니다.

use std::sync::Arc;

use thiserror::Error;

use crate::converter;
use crate::core::candidate::Candidate;
use crate::domain::users::{UserBO, UserDO, UserVO};

/// 사용자 변환 에러
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserConvertError {
    #[error("User name can not be blank")]
    BlankName,
}

/// `UserDO` → `UserBO` (필드 복사)
pub fn user_do_to_bo(user: UserDO) -> UserBO {
    UserBO {
        name: user.name,
        age: user.age,
        is_man: user.is_man,
    }
}

converter!(user_do_to_bo);

/// `UserBO` → `UserDO`
///
/// 이름이 비어 있는 사용자는 저장할 수 없습니다.
pub fn user_bo_to_do(user: UserBO) -> Result<UserDO, UserConvertError> {
    if user.name.trim().is_empty() {
        return Err(UserConvertError::BlankName);
    }
    Ok(UserDO {
        name: user.name,
        age: user.age,
        is_man: user.is_man,
    })
}

converter!(try user_bo_to_do);

/// `UserBO` → `UserVO` 인스턴스 변환기
///
/// 성별에 따른 호칭을 설정으로 가집니다.
#[derive(Debug, Clone)]
pub struct UserDisplayConverter {
    man_title: String,
    woman_title: String,
}

impl UserDisplayConverter {
    pub fn new(man_title: impl Into<String>, woman_title: impl Into<String>) -> Self {
        Self {
            man_title: man_title.into(),
            woman_title: woman_title.into(),
        }
    }

    pub fn to_view(&self, user: UserBO) -> UserVO {
        let title = if user.is_man { &self.man_title } else { &self.woman_title };
        UserVO {
            display_name: format!("{} {}", title, user.name),
            age: user.age,
        }
    }
}

impl Default for UserDisplayConverter {
    fn default() -> Self {
        Self::new("Mr.", "Ms.")
    }
}

/// 애플리케이션이 생성하는 인스턴스 변환기 목록
pub fn beans() -> Vec<Candidate> {
    vec![Candidate::method(
        Arc::new(UserDisplayConverter::default()),
        "user_bo_to_vo",
        UserDisplayConverter::to_view,
    )]
}
