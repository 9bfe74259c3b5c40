//! 변환 조건 (source 타입, target 타입) 쌍

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// 변환기 맵의 키
///
/// 두 `TypeId`만으로 동등성과 해시를 계산합니다. 타입 이름은
/// 로그와 에러 메시지용입니다. 상위/하위 타입 매칭은 하지 않으며
/// 정확히 같은 타입 쌍만 일치합니다.
#[derive(Clone, Copy)]
pub struct Condition {
    source: TypeId,
    target: TypeId,
    source_name: &'static str,
    target_name: &'static str,
}

impl Condition {
    /// 정적 타입으로부터 조건 생성
    pub fn of<S: 'static, T: 'static>() -> Self {
        Self {
            source: TypeId::of::<S>(),
            target: TypeId::of::<T>(),
            source_name: type_name::<S>(),
            target_name: type_name::<T>(),
        }
    }

    /// 런타임 `TypeId`로부터 조건 생성
    ///
    /// `dyn Any` 값처럼 정적 타입을 알 수 없을 때 사용합니다.
    pub fn from_ids(
        source: TypeId,
        source_name: &'static str,
        target: TypeId,
        target_name: &'static str,
    ) -> Self {
        Self { source, target, source_name, target_name }
    }

    pub fn source(&self) -> TypeId {
        self.source
    }

    pub fn target(&self) -> TypeId {
        self.target
    }

    pub fn source_name(&self) -> &'static str {
        self.source_name
    }

    pub fn target_name(&self) -> &'static str {
        self.target_name
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl Eq for Condition {}

impl Hash for Condition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("source", &self.source_name)
            .field("target", &self.target_name)
            .finish()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{source = {}, target = {}}}", self.source_name, self.target_name)
    }
}
